//! Browser environment queries and effects executed on behalf of the reducer.

use leptos::logging;

use crate::layout::{LayoutMode, TASKBAR_HEIGHT_PX};
use crate::model::WindowRect;

/// Desktop area above the taskbar, in CSS pixels.
pub fn desktop_viewport_rect() -> WindowRect {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(1024);
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(768);

            return WindowRect {
                x: 0,
                y: 0,
                w: width.max(320),
                h: (height - TASKBAR_HEIGHT_PX).max(200),
            };
        }
    }

    WindowRect {
        x: 0,
        y: 0,
        w: 1024,
        h: 768 - TASKBAR_HEIGHT_PX,
    }
}

/// Layout mode for the current viewport width.
pub fn current_layout_mode() -> LayoutMode {
    LayoutMode::from_viewport_width(desktop_viewport_rect().w)
}

pub fn reload_page() {
    let Some(window) = web_sys::window() else {
        logging::warn!("reload requested without a browser window");
        return;
    };
    if let Err(err) = window.location().reload() {
        logging::warn!("page reload failed: {err:?}");
    }
}
