//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use thiserror::Error;

use crate::apps;
use crate::model::{
    AppId, DesktopState, OverlayState, PointerPosition, WindowPosition, WindowRect, WindowSize,
};
use crate::window_manager;

/// Context-menu footprint used to keep the menu inside the desktop viewport.
const CONTEXT_MENU_WIDTH: i32 = 200;
const CONTEXT_MENU_HEIGHT: i32 = 200;
const POPUP_MARGIN: i32 = 6;

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open the window for an app, or restore and raise it when it is already open.
    OpenApp {
        /// Catalog id of the app.
        app_id: AppId,
    },
    /// Raise and focus a visible window.
    FocusWindow {
        /// Window to focus.
        window_id: AppId,
    },
    /// Close a window.
    CloseWindow {
        /// Window to close.
        window_id: AppId,
    },
    /// Minimize a window.
    MinimizeWindow {
        /// Window to minimize.
        window_id: AppId,
    },
    /// Minimize every visible window (fixed-layout back button).
    MinimizeAllWindows,
    /// Flip a window between maximized and its stored geometry.
    ToggleMaximize {
        /// Window to toggle.
        window_id: AppId,
    },
    /// Set a window origin, clamped to the desktop's top-left.
    MoveWindow {
        /// Window being moved.
        window_id: AppId,
        /// Requested origin.
        position: WindowPosition,
    },
    /// Set a window size, floored at the minimum.
    ResizeWindow {
        /// Window being resized.
        window_id: AppId,
        /// Requested size.
        size: WindowSize,
    },
    /// Set size and origin together for an anchored north/west resize.
    ResizeAndMoveWindow {
        /// Window being resized.
        window_id: AppId,
        /// Requested size.
        size: WindowSize,
        /// Requested origin.
        position: WindowPosition,
    },
    /// Taskbar activation: un-minimize, raise, and focus.
    RestoreAndFocus {
        /// Window associated with the taskbar button.
        window_id: AppId,
    },
    /// Toggle the start menu open/closed.
    ToggleStartMenu,
    /// Open the desktop context menu near the pointer.
    OpenContextMenu {
        /// Pointer position of the secondary click.
        pointer: PointerPosition,
        /// Current desktop viewport.
        viewport: WindowRect,
    },
    /// Let the open overlay react to outside presses (sent one tick after opening).
    ArmOverlayDismissal,
    /// A pointer press landed outside the open overlay.
    OutsidePointerDown,
    /// Close any open overlay (dismissal key or menu item).
    DismissOverlay,
    /// Reload the whole desktop.
    ReloadDesktop,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// A new window record was created.
    WindowOpened(AppId),
    /// A window record was removed.
    WindowClosed(AppId),
    /// Reload the page.
    ReloadDesktop,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Why an action was not applied. State is always left untouched when one of these is returned.
pub enum ReducerError {
    /// The target window is not open.
    #[error("window `{0}` not found")]
    WindowNotFound(AppId),
    /// The target window is minimized and cannot take focus.
    #[error("window `{0}` is minimized")]
    WindowMinimized(AppId),
    /// The app id is not in the catalog.
    #[error("unknown app `{0}`")]
    UnknownApp(AppId),
}

fn applied(changed: bool, window_id: AppId) -> Result<(), ReducerError> {
    if changed {
        Ok(())
    } else {
        Err(ReducerError::WindowNotFound(window_id))
    }
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// # Errors
///
/// Returns a [`ReducerError`] describing an action that was ignored. The state is unchanged in
/// that case; callers log and move on.
pub fn reduce_desktop(
    state: &mut DesktopState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenApp { app_id } => {
            let app = apps::app_descriptor(&app_id)
                .ok_or_else(|| ReducerError::UnknownApp(app_id.clone()))?;
            let is_new = !state.windows.contains(&app_id);
            window_manager::open_window(state, app);
            state.overlay = OverlayState::Closed;
            if is_new {
                effects.push(RuntimeEffect::WindowOpened(app_id));
            }
        }
        DesktopAction::FocusWindow { window_id } => {
            if state.window(&window_id).is_some_and(|w| w.is_minimized) {
                return Err(ReducerError::WindowMinimized(window_id));
            }
            let changed = window_manager::focus_window(state, &window_id);
            applied(changed, window_id)?;
        }
        DesktopAction::CloseWindow { window_id } => {
            let changed = window_manager::close_window(state, &window_id);
            applied(changed, window_id.clone())?;
            effects.push(RuntimeEffect::WindowClosed(window_id));
        }
        DesktopAction::MinimizeWindow { window_id } => {
            let changed = window_manager::minimize_window(state, &window_id);
            applied(changed, window_id)?;
        }
        DesktopAction::MinimizeAllWindows => {
            window_manager::minimize_all_windows(state);
        }
        DesktopAction::ToggleMaximize { window_id } => {
            let changed = window_manager::toggle_maximize(state, &window_id);
            applied(changed, window_id)?;
        }
        DesktopAction::MoveWindow {
            window_id,
            position,
        } => {
            let changed = window_manager::move_window(state, &window_id, position);
            applied(changed, window_id)?;
        }
        DesktopAction::ResizeWindow { window_id, size } => {
            let changed = window_manager::resize_window(state, &window_id, size);
            applied(changed, window_id)?;
        }
        DesktopAction::ResizeAndMoveWindow {
            window_id,
            size,
            position,
        } => {
            let changed = window_manager::resize_and_move(state, &window_id, size, position);
            applied(changed, window_id)?;
        }
        DesktopAction::RestoreAndFocus { window_id } => {
            let changed = window_manager::restore_and_focus(state, &window_id);
            applied(changed, window_id)?;
        }
        DesktopAction::ToggleStartMenu => {
            state.overlay = if state.overlay.is_start_menu_open() {
                OverlayState::Closed
            } else {
                OverlayState::StartMenu { armed: false }
            };
        }
        DesktopAction::OpenContextMenu { pointer, viewport } => {
            state.overlay = OverlayState::ContextMenu {
                position: clamp_popup_position(
                    viewport,
                    pointer,
                    CONTEXT_MENU_WIDTH,
                    CONTEXT_MENU_HEIGHT,
                ),
                armed: false,
            };
        }
        DesktopAction::ArmOverlayDismissal => {
            state.overlay = state.overlay.armed();
        }
        DesktopAction::OutsidePointerDown => {
            if state.overlay.is_armed() {
                state.overlay = OverlayState::Closed;
            }
        }
        DesktopAction::DismissOverlay => {
            state.overlay = OverlayState::Closed;
        }
        DesktopAction::ReloadDesktop => {
            state.overlay = OverlayState::Closed;
            effects.push(RuntimeEffect::ReloadDesktop);
        }
    }

    Ok(effects)
}

fn clamp_popup_position(
    viewport: WindowRect,
    pointer: PointerPosition,
    popup_w: i32,
    popup_h: i32,
) -> PointerPosition {
    let max_x = (viewport.x + viewport.w - popup_w - POPUP_MARGIN).max(viewport.x);
    let max_y = (viewport.y + viewport.h - popup_h - POPUP_MARGIN).max(viewport.y);
    PointerPosition {
        x: pointer.x.clamp(viewport.x, max_x),
        y: pointer.y.clamp(viewport.y, max_y),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::BASE_Z_INDEX;

    const VIEWPORT: WindowRect = WindowRect {
        x: 0,
        y: 0,
        w: 1280,
        h: 752,
    };

    fn id(raw: &str) -> AppId {
        AppId::from(raw)
    }

    fn open(state: &mut DesktopState, app_id: &str) -> Vec<RuntimeEffect> {
        reduce_desktop(state, DesktopAction::OpenApp { app_id: id(app_id) }).expect("open app")
    }

    #[test]
    fn open_reports_new_windows_only() {
        let mut state = DesktopState::default();
        assert_eq!(
            open(&mut state, "about"),
            vec![RuntimeEffect::WindowOpened(id("about"))]
        );
        assert_eq!(open(&mut state, "about"), Vec::new());
        assert_eq!(state.windows.len(), 1);
        assert_eq!(state.window(&id("about")).unwrap().title, "About Me");
    }

    #[test]
    fn open_unknown_app_is_rejected_without_state_change() {
        let mut state = DesktopState::default();
        let before = state.clone();
        let err = reduce_desktop(
            &mut state,
            DesktopAction::OpenApp {
                app_id: id("minesweeper"),
            },
        )
        .unwrap_err();
        assert_eq!(err, ReducerError::UnknownApp(id("minesweeper")));
        assert_eq!(state, before);
    }

    #[test]
    fn open_from_start_menu_closes_it() {
        let mut state = DesktopState::default();
        reduce_desktop(&mut state, DesktopAction::ToggleStartMenu).unwrap();
        assert!(state.overlay.is_start_menu_open());

        open(&mut state, "skills");
        assert_eq!(state.overlay, OverlayState::Closed);
    }

    #[test]
    fn nth_open_cascades_by_open_count() {
        let mut state = DesktopState::default();
        for app in ["about", "projects", "skills", "contact", "resume", "music"] {
            open(&mut state, app);
        }
        assert_eq!(
            state.window(&id("resume")).unwrap().position,
            WindowPosition { x: 220, y: 170 }
        );
        assert_eq!(
            state.window(&id("music")).unwrap().position,
            WindowPosition { x: 100, y: 50 }
        );
    }

    #[test]
    fn taskbar_click_restores_minimized_window_over_focused_one() {
        let mut state = DesktopState::default();
        open(&mut state, "about");
        open(&mut state, "projects");
        reduce_desktop(
            &mut state,
            DesktopAction::MinimizeWindow {
                window_id: id("about"),
            },
        )
        .unwrap();
        assert_eq!(state.focused_id, Some(id("projects")));

        reduce_desktop(
            &mut state,
            DesktopAction::RestoreAndFocus {
                window_id: id("about"),
            },
        )
        .unwrap();

        let about = state.window(&id("about")).unwrap();
        assert!(!about.is_minimized);
        assert_eq!(state.focused_id, Some(id("about")));
        assert!(about.z_index > state.window(&id("projects")).unwrap().z_index);
        assert_eq!(state.top_z_index, BASE_Z_INDEX + 3);
        assert_eq!(state.rendered_window_ids(), vec![id("about"), id("projects")]);
    }

    #[test]
    fn focusing_minimized_window_is_rejected() {
        let mut state = DesktopState::default();
        open(&mut state, "about");
        reduce_desktop(
            &mut state,
            DesktopAction::MinimizeWindow {
                window_id: id("about"),
            },
        )
        .unwrap();
        let before = state.clone();

        let err = reduce_desktop(
            &mut state,
            DesktopAction::FocusWindow {
                window_id: id("about"),
            },
        )
        .unwrap_err();
        assert_eq!(err, ReducerError::WindowMinimized(id("about")));
        assert_eq!(state, before);
    }

    #[test]
    fn commands_for_closed_windows_report_not_found() {
        let mut state = DesktopState::default();
        for action in [
            DesktopAction::CloseWindow {
                window_id: id("about"),
            },
            DesktopAction::ToggleMaximize {
                window_id: id("about"),
            },
            DesktopAction::MoveWindow {
                window_id: id("about"),
                position: WindowPosition::default(),
            },
            DesktopAction::RestoreAndFocus {
                window_id: id("about"),
            },
        ] {
            assert_eq!(
                reduce_desktop(&mut state, action),
                Err(ReducerError::WindowNotFound(id("about")))
            );
        }
        assert_eq!(state, DesktopState::default());
    }

    #[test]
    fn close_emits_window_closed() {
        let mut state = DesktopState::default();
        open(&mut state, "contact");
        let effects = reduce_desktop(
            &mut state,
            DesktopAction::CloseWindow {
                window_id: id("contact"),
            },
        )
        .unwrap();
        assert_eq!(effects, vec![RuntimeEffect::WindowClosed(id("contact"))]);
        assert!(state.windows.is_empty());
    }

    #[test]
    fn back_button_returns_home_with_two_windows_open() {
        let mut state = DesktopState::default();
        open(&mut state, "about");
        open(&mut state, "projects");

        reduce_desktop(&mut state, DesktopAction::MinimizeAllWindows).unwrap();
        assert!(state.rendered_window_ids().is_empty());
        assert_eq!(state.focused_id, None);
        assert!(state.window(&id("about")).unwrap().is_minimized);
        assert!(state.window(&id("projects")).unwrap().is_minimized);

        let settled = state.clone();
        reduce_desktop(&mut state, DesktopAction::MinimizeAllWindows).unwrap();
        assert_eq!(state, settled);

        open(&mut state, "about");
        assert_eq!(state.rendered_window_ids(), vec![id("about")]);
    }

    #[test]
    fn opening_click_does_not_dismiss_overlay_until_armed() {
        let mut state = DesktopState::default();
        reduce_desktop(&mut state, DesktopAction::ToggleStartMenu).unwrap();

        reduce_desktop(&mut state, DesktopAction::OutsidePointerDown).unwrap();
        assert!(state.overlay.is_start_menu_open());

        reduce_desktop(&mut state, DesktopAction::ArmOverlayDismissal).unwrap();
        reduce_desktop(&mut state, DesktopAction::OutsidePointerDown).unwrap();
        assert_eq!(state.overlay, OverlayState::Closed);
    }

    #[test]
    fn dismissal_key_closes_unarmed_overlay() {
        let mut state = DesktopState::default();
        reduce_desktop(
            &mut state,
            DesktopAction::OpenContextMenu {
                pointer: PointerPosition { x: 300, y: 200 },
                viewport: VIEWPORT,
            },
        )
        .unwrap();
        reduce_desktop(&mut state, DesktopAction::DismissOverlay).unwrap();
        assert_eq!(state.overlay, OverlayState::Closed);
    }

    #[test]
    fn start_and_context_menus_replace_each_other() {
        let mut state = DesktopState::default();
        reduce_desktop(&mut state, DesktopAction::ToggleStartMenu).unwrap();
        reduce_desktop(
            &mut state,
            DesktopAction::OpenContextMenu {
                pointer: PointerPosition { x: 10, y: 10 },
                viewport: VIEWPORT,
            },
        )
        .unwrap();
        assert!(!state.overlay.is_start_menu_open());
        assert!(state.overlay.context_menu_position().is_some());

        reduce_desktop(&mut state, DesktopAction::ToggleStartMenu).unwrap();
        assert!(state.overlay.is_start_menu_open());
        assert_eq!(state.overlay.context_menu_position(), None);

        reduce_desktop(&mut state, DesktopAction::ToggleStartMenu).unwrap();
        assert_eq!(state.overlay, OverlayState::Closed);
    }

    #[test]
    fn context_menu_is_kept_inside_viewport() {
        let mut state = DesktopState::default();
        reduce_desktop(
            &mut state,
            DesktopAction::OpenContextMenu {
                pointer: PointerPosition { x: 1270, y: 740 },
                viewport: VIEWPORT,
            },
        )
        .unwrap();
        assert_eq!(
            state.overlay.context_menu_position(),
            Some(PointerPosition { x: 1074, y: 546 })
        );
    }

    #[test]
    fn overlays_do_not_touch_window_registry() {
        let mut state = DesktopState::default();
        open(&mut state, "about");
        let windows = state.windows.clone();
        let focused = state.focused_id.clone();

        reduce_desktop(&mut state, DesktopAction::ToggleStartMenu).unwrap();
        reduce_desktop(&mut state, DesktopAction::ArmOverlayDismissal).unwrap();
        reduce_desktop(&mut state, DesktopAction::OutsidePointerDown).unwrap();

        assert_eq!(state.windows, windows);
        assert_eq!(state.focused_id, focused);
    }

    #[test]
    fn reload_emits_effect() {
        let mut state = DesktopState::default();
        assert_eq!(
            reduce_desktop(&mut state, DesktopAction::ReloadDesktop).unwrap(),
            vec![RuntimeEffect::ReloadDesktop]
        );
    }
}
