//! Explicit runtime effect-queue executor for reducer-emitted side effects.

use leptos::*;

use crate::host;
use crate::reducer::RuntimeEffect;
use crate::runtime_context::DesktopRuntimeContext;

/// Installs the effect executor that drains reducer-emitted runtime effects in order.
pub fn install(runtime: DesktopRuntimeContext) {
    // Clear the queue before running so effects that dispatch again enqueue a fresh batch.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        for effect in queued {
            run_runtime_effect(effect);
        }
    });
}

fn run_runtime_effect(effect: RuntimeEffect) {
    match effect {
        RuntimeEffect::WindowOpened(app_id) => logging::log!("window opened: {app_id}"),
        RuntimeEffect::WindowClosed(app_id) => logging::log!("window closed: {app_id}"),
        RuntimeEffect::ReloadDesktop => host::reload_page(),
    }
}
