//! Window-registry commands used by the desktop reducer.
//!
//! Every command is total: an id that is not open leaves the state untouched and the command
//! reports `false`. These functions are the only writers of [`DesktopState::windows`],
//! [`DesktopState::focused_id`] and [`DesktopState::top_z_index`].

use crate::apps::AppDescriptor;
use crate::model::{
    AppId, DesktopState, OverlayState, WindowPosition, WindowRecord, WindowSize, CASCADE_ORIGIN_X,
    CASCADE_ORIGIN_Y, CASCADE_PERIOD, CASCADE_STEP,
};

/// Cascaded top-left for a window opened while `open_count` windows already exist.
pub fn cascade_position(open_count: usize) -> WindowPosition {
    let offset = (open_count % CASCADE_PERIOD) as i32 * CASCADE_STEP;
    WindowPosition {
        x: CASCADE_ORIGIN_X + offset,
        y: CASCADE_ORIGIN_Y + offset,
    }
}

fn next_z_index(state: &mut DesktopState) -> u32 {
    state.top_z_index = state.top_z_index.saturating_add(1);
    state.top_z_index
}

/// Opens the window for `app`, or restores and raises it when it is already open.
pub fn open_window(state: &mut DesktopState, app: &AppDescriptor) -> bool {
    if state.windows.contains(&app.app_id) {
        return restore_and_focus(state, &app.app_id);
    }

    let position = cascade_position(state.windows.len());
    let z_index = next_z_index(state);
    state.windows.insert(WindowRecord {
        id: app.app_id.clone(),
        title: app.title.clone(),
        icon: app.icon.clone(),
        position,
        size: WindowSize::default(),
        z_index,
        is_minimized: false,
        is_maximized: false,
    });
    state.focused_id = Some(app.app_id.clone());
    true
}

/// Raises a visible window above every other window and focuses it. Transient overlays close.
///
/// A minimized window is left alone, and any open overlay stays open: focus may only point at a
/// rendered window, and restoring belongs to [`restore_and_focus`].
pub fn focus_window(state: &mut DesktopState, id: &AppId) -> bool {
    match state.windows.get(id) {
        Some(window) if !window.is_minimized => {}
        _ => return false,
    }
    let z_index = next_z_index(state);
    if let Some(window) = state.windows.get_mut(id) {
        window.z_index = z_index;
    }
    state.focused_id = Some(id.clone());
    state.overlay = OverlayState::Closed;
    true
}

/// Removes a window. Closing the focused window leaves nothing focused.
pub fn close_window(state: &mut DesktopState, id: &AppId) -> bool {
    if state.windows.remove(id).is_none() {
        return false;
    }
    if state.is_focused(id) {
        state.focused_id = None;
    }
    true
}

pub fn minimize_window(state: &mut DesktopState, id: &AppId) -> bool {
    let Some(window) = state.windows.get_mut(id) else {
        return false;
    };
    window.is_minimized = true;
    if state.is_focused(id) {
        state.focused_id = None;
    }
    true
}

/// Minimizes every rendered window and clears focus, uncovering the desktop icons.
pub fn minimize_all_windows(state: &mut DesktopState) {
    for id in state.rendered_window_ids() {
        if let Some(window) = state.windows.get_mut(&id) {
            window.is_minimized = true;
        }
    }
    state.focused_id = None;
}

/// Flips the maximized flag. Stored geometry, stacking, and focus are untouched.
pub fn toggle_maximize(state: &mut DesktopState, id: &AppId) -> bool {
    let Some(window) = state.windows.get_mut(id) else {
        return false;
    };
    window.is_maximized = !window.is_maximized;
    true
}

pub fn move_window(state: &mut DesktopState, id: &AppId, position: WindowPosition) -> bool {
    let Some(window) = state.windows.get_mut(id) else {
        return false;
    };
    window.position = position.clamped_to_origin();
    true
}

pub fn resize_window(state: &mut DesktopState, id: &AppId, size: WindowSize) -> bool {
    let Some(window) = state.windows.get_mut(id) else {
        return false;
    };
    window.size = size.clamped_min();
    true
}

/// Applies a size and origin produced by one anchored resize step in a single transition.
///
/// The origin is taken as given: clamping it here would drag the anchored edge along.
pub fn resize_and_move(
    state: &mut DesktopState,
    id: &AppId,
    size: WindowSize,
    position: WindowPosition,
) -> bool {
    let Some(window) = state.windows.get_mut(id) else {
        return false;
    };
    window.size = size.clamped_min();
    window.position = position;
    true
}

/// Clears the minimized flag, raises, and focuses a window in one transition.
pub fn restore_and_focus(state: &mut DesktopState, id: &AppId) -> bool {
    if !state.windows.contains(id) {
        return false;
    }
    let z_index = next_z_index(state);
    if let Some(window) = state.windows.get_mut(id) {
        window.is_minimized = false;
        window.z_index = z_index;
    }
    state.focused_id = Some(id.clone());
    state.overlay = OverlayState::Closed;
    true
}
