//! Title-bar drag controller.

use crate::model::{AppId, PointerPosition, WindowPosition, WindowRecord};
use crate::reducer::DesktopAction;
use crate::window_mode::WindowMode;

/// Element under the pointer when a title-bar press starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressTarget {
    TitleBar,
    /// Close, minimize, or maximize button.
    ControlButton,
}

/// Snapshot taken on press: the pointer's offset from the window origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub window_id: AppId,
    pub grab_offset: PointerPosition,
}

impl DragSession {
    /// Starts a drag, or returns `None` when the press came from a control button or the window is
    /// not freely positioned.
    pub fn begin(
        window: &WindowRecord,
        mode: WindowMode,
        target: PressTarget,
        pointer: PointerPosition,
    ) -> Option<Self> {
        if target == PressTarget::ControlButton || !mode.allows_drag() {
            return None;
        }
        Some(Self {
            window_id: window.id.clone(),
            grab_offset: PointerPosition {
                x: pointer.x - window.position.x,
                y: pointer.y - window.position.y,
            },
        })
    }

    pub fn position_at(&self, pointer: PointerPosition) -> WindowPosition {
        WindowPosition {
            x: pointer.x - self.grab_offset.x,
            y: pointer.y - self.grab_offset.y,
        }
        .clamped_to_origin()
    }

    pub fn pointer_moved(&self, pointer: PointerPosition) -> DesktopAction {
        DesktopAction::MoveWindow {
            window_id: self.window_id.clone(),
            position: self.position_at(pointer),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::WindowSize;

    fn window_at(x: i32, y: i32) -> WindowRecord {
        WindowRecord {
            id: AppId::from("about"),
            title: "About Me".to_string(),
            icon: String::new(),
            position: WindowPosition { x, y },
            size: WindowSize::default(),
            z_index: 101,
            is_minimized: false,
            is_maximized: false,
        }
    }

    #[test]
    fn drag_follows_pointer_delta() {
        let session = DragSession::begin(
            &window_at(100, 50),
            WindowMode::Normal,
            PressTarget::TitleBar,
            PointerPosition { x: 50, y: 50 },
        )
        .expect("drag starts");

        assert_eq!(
            session.pointer_moved(PointerPosition { x: 60, y: 45 }),
            DesktopAction::MoveWindow {
                window_id: AppId::from("about"),
                position: WindowPosition { x: 110, y: 45 },
            }
        );
    }

    #[test]
    fn drag_clamps_at_desktop_origin() {
        let session = DragSession::begin(
            &window_at(10, 10),
            WindowMode::Normal,
            PressTarget::TitleBar,
            PointerPosition { x: 20, y: 20 },
        )
        .unwrap();

        assert_eq!(
            session.position_at(PointerPosition { x: -300, y: 5 }),
            WindowPosition { x: 0, y: 0 }
        );
        assert_eq!(
            session.position_at(PointerPosition { x: 4000, y: 3000 }),
            WindowPosition { x: 3990, y: 2990 }
        );
    }

    #[test]
    fn drag_does_not_start_from_control_buttons() {
        assert!(DragSession::begin(
            &window_at(0, 0),
            WindowMode::Normal,
            PressTarget::ControlButton,
            PointerPosition::default(),
        )
        .is_none());
    }

    #[test]
    fn drag_does_not_start_when_window_fills_desktop() {
        for mode in [WindowMode::Maximized, WindowMode::FixedLayout] {
            assert!(DragSession::begin(
                &window_at(0, 0),
                mode,
                PressTarget::TitleBar,
                PointerPosition::default(),
            )
            .is_none());
        }
    }
}
