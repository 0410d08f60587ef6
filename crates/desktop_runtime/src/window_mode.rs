//! Interaction/render modes of a single window and the frame styling derived from them.

use crate::layout::LayoutMode;
use crate::model::WindowRecord;

/// How a rendered window is laid out and which affordances it offers.
///
/// Minimized windows have no mode: they are absent from layout entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowMode {
    /// Positioned by its stored geometry; draggable and resizable.
    Normal,
    /// Fills the desktop area; stored geometry is kept for un-maximize.
    Maximized,
    /// Compact layout: fills the desktop area regardless of the maximized flag.
    FixedLayout,
}

impl WindowMode {
    pub fn resolve(window: &WindowRecord, layout: LayoutMode) -> Option<Self> {
        if window.is_minimized {
            return None;
        }
        Some(match (layout, window.is_maximized) {
            (LayoutMode::Fixed, _) => Self::FixedLayout,
            (LayoutMode::Desktop, true) => Self::Maximized,
            (LayoutMode::Desktop, false) => Self::Normal,
        })
    }

    pub fn allows_drag(self) -> bool {
        matches!(self, Self::Normal)
    }

    pub fn allows_resize(self) -> bool {
        matches!(self, Self::Normal)
    }

    /// Whether the maximize button and header double-activation toggle maximize.
    pub fn allows_maximize_toggle(self) -> bool {
        !matches!(self, Self::FixedLayout)
    }

    pub fn fills_desktop(self) -> bool {
        !matches!(self, Self::Normal)
    }
}

/// Live gesture on a window, if any. Drag and resize never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    Dragging,
    Resizing,
}

pub fn window_frame_style(window: &WindowRecord, mode: WindowMode) -> String {
    if mode.fills_desktop() {
        format!("z-index:{};", window.z_index)
    } else {
        format!(
            "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
            window.position.x,
            window.position.y,
            window.size.width,
            window.size.height,
            window.z_index
        )
    }
}

pub fn window_frame_class(focused: bool, mode: WindowMode, gesture: Option<GestureKind>) -> String {
    let mut class = String::from("window");
    if focused {
        class.push_str(" window--focused");
    }
    match mode {
        WindowMode::Normal => {}
        WindowMode::Maximized => class.push_str(" window--maximized"),
        WindowMode::FixedLayout => class.push_str(" window--fixed"),
    }
    match gesture {
        Some(GestureKind::Dragging) => class.push_str(" window--dragging"),
        Some(GestureKind::Resizing) => class.push_str(" window--resizing"),
        None => {}
    }
    class
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{AppId, WindowPosition, WindowSize};

    fn window(minimized: bool, maximized: bool) -> WindowRecord {
        WindowRecord {
            id: AppId::from("about"),
            title: "About Me".to_string(),
            icon: String::new(),
            position: WindowPosition { x: 130, y: 80 },
            size: WindowSize {
                width: 640,
                height: 420,
            },
            z_index: 104,
            is_minimized: minimized,
            is_maximized: maximized,
        }
    }

    #[test]
    fn minimized_window_has_no_mode() {
        assert_eq!(WindowMode::resolve(&window(true, false), LayoutMode::Desktop), None);
        assert_eq!(WindowMode::resolve(&window(true, true), LayoutMode::Fixed), None);
    }

    #[test]
    fn fixed_layout_overrides_maximized_flag() {
        assert_eq!(
            WindowMode::resolve(&window(false, false), LayoutMode::Fixed),
            Some(WindowMode::FixedLayout)
        );
        assert_eq!(
            WindowMode::resolve(&window(false, true), LayoutMode::Desktop),
            Some(WindowMode::Maximized)
        );
    }

    #[test]
    fn only_normal_windows_accept_gestures() {
        assert!(WindowMode::Normal.allows_drag() && WindowMode::Normal.allows_resize());
        for mode in [WindowMode::Maximized, WindowMode::FixedLayout] {
            assert!(!mode.allows_drag());
            assert!(!mode.allows_resize());
        }
        assert!(WindowMode::Maximized.allows_maximize_toggle());
        assert!(!WindowMode::FixedLayout.allows_maximize_toggle());
    }

    #[test]
    fn frame_style_ignores_geometry_when_filling_desktop() {
        let win = window(false, true);
        assert_eq!(
            window_frame_style(&win, WindowMode::Normal),
            "left:130px;top:80px;width:640px;height:420px;z-index:104;"
        );
        assert_eq!(window_frame_style(&win, WindowMode::Maximized), "z-index:104;");
    }

    #[test]
    fn frame_class_reflects_focus_mode_and_gesture() {
        assert_eq!(
            window_frame_class(true, WindowMode::Maximized, None),
            "window window--focused window--maximized"
        );
        assert_eq!(
            window_frame_class(false, WindowMode::Normal, Some(GestureKind::Resizing)),
            "window window--resizing"
        );
    }
}
