//! Viewport-derived layout mode shared by the registry views and the gesture controllers.

/// Viewports narrower than this use the fixed (compact) layout.
pub const COMPACT_BREAKPOINT_PX: i32 = 768;
/// Height reserved for the taskbar at the bottom of the desktop.
pub const TASKBAR_HEIGHT_PX: i32 = 48;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    /// Free-floating windows: draggable, resizable, maximizable.
    #[default]
    Desktop,
    /// Compact viewport: every window fills the desktop area and cannot be dragged or resized.
    Fixed,
}

impl LayoutMode {
    pub fn from_viewport_width(width: i32) -> Self {
        if width < COMPACT_BREAKPOINT_PX {
            Self::Fixed
        } else {
            Self::Desktop
        }
    }

    pub fn is_fixed(self) -> bool {
        matches!(self, Self::Fixed)
    }
}
