use super::*;
use crate::apps::{ABOUT_APP_ID, PERSONALIZATION_APP_ID};

const PROFILE_NAME: &str = "Corey Lindsey";
const PROFILE_TITLE: &str = "Software Engineer";

fn profile_initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

#[component]
pub(super) fn StartMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    view! {
        <Show
            when=move || state.with(|desktop| desktop.overlay.is_start_menu_open())
            fallback=|| ()
        >
            <div
                id="desktop-launcher-menu"
                class="start-menu"
                role="menu"
                aria-label="Application launcher"
                data-desktop-overlay="start-menu"
            >
                <div class="start-menu__profile">
                    <div class="start-menu__avatar" aria-hidden="true">
                        {profile_initials(PROFILE_NAME)}
                    </div>
                    <div class="start-menu__user-info">
                        <span class="start-menu__user-name">{PROFILE_NAME}</span>
                        <span class="start-menu__user-title">{PROFILE_TITLE}</span>
                    </div>
                </div>
                <div class="start-menu__divider" role="separator" aria-hidden="true"></div>
                <div class="start-menu__apps">
                    <For each=apps::launcher_apps key=|app| app.app_id.clone() let:app>
                        {{
                            let app_id = store_value(app.app_id.clone());
                            view! {
                                <button
                                    id=format!("desktop-launcher-item-{}", app.app_id)
                                    class="start-menu__app-btn"
                                    role="menuitem"
                                    on:click=move |_| open_app(runtime, app_id.get_value())
                                >
                                    <span class="start-menu__app-icon" aria-hidden="true">
                                        {app.icon}
                                    </span>
                                    <span class="start-menu__app-title">{app.title}</span>
                                </button>
                            }
                        }}
                    </For>
                </div>
            </div>
        </Show>
    }
}

#[component]
pub(super) fn DesktopContextMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let position =
        create_memo(move |_| state.with(|desktop| desktop.overlay.context_menu_position()));

    let dismiss = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(DesktopAction::DismissOverlay);
    };

    view! {
        <Show when=move || position.with(Option::is_some) fallback=|| ()>
            <div
                id="desktop-context-menu"
                class="context-menu"
                role="menu"
                aria-label="Desktop context menu"
                data-desktop-overlay="context-menu"
                style=move || {
                    position
                        .get()
                        .map(|at| format!("left:{}px;top:{}px;", at.x, at.y))
                        .unwrap_or_default()
                }
                on:contextmenu=move |ev| stop_mouse_event(&ev)
            >
                <button class="context-menu__item" role="menuitem" on:click=dismiss>
                    "View"
                </button>
                <button class="context-menu__item" role="menuitem" on:click=dismiss>
                    "Sort by"
                </button>
                <button
                    class="context-menu__item"
                    role="menuitem"
                    on:click=move |ev| {
                        stop_mouse_event(&ev);
                        runtime.dispatch_action(DesktopAction::ReloadDesktop);
                    }
                >
                    "Refresh"
                </button>
                <div class="context-menu__divider" role="separator" aria-hidden="true"></div>
                <button
                    class="context-menu__item"
                    role="menuitem"
                    on:click=move |ev| {
                        stop_mouse_event(&ev);
                        open_app(runtime, AppId::from(PERSONALIZATION_APP_ID));
                    }
                >
                    "Display settings"
                </button>
                <button
                    class="context-menu__item"
                    role="menuitem"
                    on:click=move |ev| {
                        stop_mouse_event(&ev);
                        open_app(runtime, AppId::from(ABOUT_APP_ID));
                    }
                >
                    "About this desktop"
                </button>
            </div>
        </Show>
    }
}
