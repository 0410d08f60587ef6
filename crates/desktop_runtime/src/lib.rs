pub mod apps;
pub mod components;
pub mod drag;
mod effect_executor;
pub mod gesture;
pub mod host;
pub mod layout;
pub mod model;
pub mod reducer;
pub mod resize;
mod runtime_context;
pub mod window_manager;
pub mod window_mode;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use layout::LayoutMode;
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
