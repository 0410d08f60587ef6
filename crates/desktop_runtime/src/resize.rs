//! Edge/corner resize controller.
//!
//! Every move is computed from the snapshot taken on press, never from the previous move, so a
//! burst of pointer events cannot accumulate error.

use crate::model::{
    AppId, PointerPosition, ResizeEdge, WindowPosition, WindowRecord, WindowSize, MIN_WINDOW_HEIGHT,
    MIN_WINDOW_WIDTH,
};
use crate::reducer::DesktopAction;
use crate::window_mode::WindowMode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeSession {
    pub window_id: AppId,
    pub edge: ResizeEdge,
    pub pointer_start: PointerPosition,
    pub size_start: WindowSize,
    pub position_start: WindowPosition,
}

impl ResizeSession {
    /// Starts a resize, or returns `None` while the window is maximized or in fixed layout.
    pub fn begin(
        window: &WindowRecord,
        mode: WindowMode,
        edge: ResizeEdge,
        pointer: PointerPosition,
    ) -> Option<Self> {
        if !mode.allows_resize() {
            return None;
        }
        Some(Self {
            window_id: window.id.clone(),
            edge,
            pointer_start: pointer,
            size_start: window.size,
            position_start: window.position,
        })
    }

    pub fn geometry_at(&self, pointer: PointerPosition) -> (WindowSize, WindowPosition) {
        resize_geometry(
            self.size_start,
            self.position_start,
            self.edge,
            pointer.x - self.pointer_start.x,
            pointer.y - self.pointer_start.y,
        )
    }

    /// Registry command for the current pointer. North/west handles move the origin as well, so
    /// they commit size and position together.
    pub fn pointer_moved(&self, pointer: PointerPosition) -> DesktopAction {
        let (size, position) = self.geometry_at(pointer);
        if self.edge.moves_origin() {
            DesktopAction::ResizeAndMoveWindow {
                window_id: self.window_id.clone(),
                size,
                position,
            }
        } else {
            DesktopAction::ResizeWindow {
                window_id: self.window_id.clone(),
                size,
            }
        }
    }
}

/// Shrinks/grows one axis from the "start" side, keeping the opposite edge fixed.
///
/// Returns the new length and origin. At the minimum the origin stops at
/// `start + (length - min)` instead of following the pointer.
fn anchored_axis(origin_start: i32, length_start: i32, delta: i32, min: i32) -> (i32, i32) {
    let proposed = length_start - delta;
    if proposed >= min {
        (proposed, origin_start + delta)
    } else {
        (min, origin_start + (length_start - min))
    }
}

pub fn resize_geometry(
    size_start: WindowSize,
    position_start: WindowPosition,
    edge: ResizeEdge,
    dx: i32,
    dy: i32,
) -> (WindowSize, WindowPosition) {
    let mut size = size_start;
    let mut position = position_start;

    if edge.has_east() {
        size.width = (size_start.width + dx).max(MIN_WINDOW_WIDTH);
    }
    if edge.has_west() {
        let (width, x) = anchored_axis(position_start.x, size_start.width, dx, MIN_WINDOW_WIDTH);
        size.width = width;
        position.x = x;
    }
    if edge.has_south() {
        size.height = (size_start.height + dy).max(MIN_WINDOW_HEIGHT);
    }
    if edge.has_north() {
        let (height, y) =
            anchored_axis(position_start.y, size_start.height, dy, MIN_WINDOW_HEIGHT);
        size.height = height;
        position.y = y;
    }

    (size, position)
}
