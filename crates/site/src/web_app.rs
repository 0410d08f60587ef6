use std::time::Duration;

use desktop_runtime::{DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;

/// How long the startup splash stays up before the desktop is constructed.
const BOOT_DURATION: Duration = Duration::from_millis(2500);

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Desktop Portfolio" />
        <Meta name="description" content="A desktop-style personal portfolio in the browser." />

        <main class="site-root">
            <DesktopEntry />
        </main>
    }
}

/// Shows the boot splash until it reports completion, then mounts the desktop once.
#[component]
pub fn DesktopEntry() -> impl IntoView {
    let booted = create_rw_signal(false);
    let boot_finished = Callback::new(move |_: ()| {
        if !booted.get_untracked() {
            booted.set(true);
        }
    });

    view! {
        <Show when=move || booted.get() fallback=move || view! { <BootScreen on_complete=boot_finished /> }>
            <DesktopProvider>
                <DesktopShell />
            </DesktopProvider>
        </Show>
    }
}

#[component]
fn BootScreen(on_complete: Callback<()>) -> impl IntoView {
    set_timeout(move || on_complete.call(()), BOOT_DURATION);

    view! {
        <div class="boot-screen" role="status" aria-live="polite">
            <div class="boot-screen__logo" aria-hidden="true"></div>
            <p class="boot-screen__label">"Starting up..."</p>
        </div>
    }
}
