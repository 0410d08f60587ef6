//! Desktop shell UI composition and interaction surfaces.

mod menus;
mod taskbar;
mod window;

use std::time::Duration;

use leptos::*;
use wasm_bindgen::JsCast;

use self::{
    menus::{DesktopContextMenu, StartMenu},
    taskbar::Taskbar,
    window::DesktopWindow,
};

use crate::{
    apps::{self, AppDescriptor},
    host,
    model::{AppId, PointerPosition, ResizeEdge},
    reducer::DesktopAction,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

/// Marks elements whose presses never count as "outside" an open overlay: the menus themselves
/// and the button that toggles the start menu.
const OVERLAY_SELECTOR: &str = "[data-desktop-overlay]";
const WINDOW_FRAME_SELECTOR: &str = "[data-window-frame]";

#[component]
/// Renders the full desktop shell UI and wires overlay dismissal.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let layout = runtime.layout;
    let overlay = create_memo(move |_| state.with(|desktop| desktop.overlay));

    // Arm one tick after opening so the opening press is not also read as an outside press.
    create_effect(move |_| {
        let current = overlay.get();
        if current.is_open() && !current.is_armed() {
            set_timeout(
                move || runtime.dispatch_action(DesktopAction::ArmOverlayDismissal),
                Duration::ZERO,
            );
        }
    });

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() || ev.key() != "Escape" {
            return;
        }
        if overlay.get_untracked().is_open() {
            ev.prevent_default();
            runtime.dispatch_action(DesktopAction::DismissOverlay);
        }
    });
    on_cleanup(move || escape_listener.remove());

    let outside_press_listener = window_event_listener(ev::mousedown, move |ev| {
        if !overlay.get_untracked().is_open() || event_within(&ev, OVERLAY_SELECTOR) {
            return;
        }
        runtime.dispatch_action(DesktopAction::OutsidePointerDown);
    });
    on_cleanup(move || outside_press_listener.remove());

    let on_desktop_contextmenu = move |ev: web_sys::MouseEvent| {
        if event_within(&ev, WINDOW_FRAME_SELECTOR) {
            return;
        }
        ev.prevent_default();
        runtime.dispatch_action(DesktopAction::OpenContextMenu {
            pointer: PointerPosition {
                x: ev.client_x(),
                y: ev.client_y(),
            },
            viewport: host::desktop_viewport_rect(),
        });
    };

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            data-layout=move || if layout.get().is_fixed() { "fixed" } else { "desktop" }
        >
            <div class="desktop" on:contextmenu=on_desktop_contextmenu>
                <div class="desktop-icons">
                    <For each=apps::desktop_icon_apps key=|app| app.app_id.clone() let:app>
                        <DesktopIcon app />
                    </For>
                </div>

                <div class="desktop-window-layer">
                    <For
                        each=move || state.with(|desktop| desktop.rendered_window_ids())
                        key=|window_id| window_id.clone()
                        let:window_id
                    >
                        <DesktopWindow window_id />
                    </For>
                </div>

                <DesktopContextMenu />
            </div>

            <StartMenu />
            <Taskbar />
        </div>
    }
}

#[component]
fn DesktopIcon(app: AppDescriptor) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let app_id = store_value(app.app_id.clone());
    let open = move || open_app(runtime, app_id.get_value());

    view! {
        <button
            class="desktop-icon"
            data-app-id=app.app_id.to_string()
            on:click=move |_| {
                if runtime.layout.get_untracked().is_fixed() {
                    open();
                }
            }
            on:dblclick=move |_| {
                if !runtime.layout.get_untracked().is_fixed() {
                    open();
                }
            }
        >
            <span class="desktop-icon__glyph" aria-hidden="true">{app.icon}</span>
            <span class="desktop-icon__label">{app.title}</span>
        </button>
    }
}

fn open_app(runtime: DesktopRuntimeContext, app_id: AppId) {
    runtime.dispatch_action(DesktopAction::OpenApp { app_id });
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

/// Main button for mice, primary contact for touch and pen.
fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

/// Whether the event target sits inside an element matching `selector`.
fn event_within(ev: &web_sys::Event, selector: &str) -> bool {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|element| element.closest(selector).ok().flatten())
        .is_some()
}

fn resize_edge_class(edge: ResizeEdge) -> &'static str {
    match edge {
        ResizeEdge::North => "edge-n",
        ResizeEdge::South => "edge-s",
        ResizeEdge::East => "edge-e",
        ResizeEdge::West => "edge-w",
        ResizeEdge::NorthEast => "edge-ne",
        ResizeEdge::NorthWest => "edge-nw",
        ResizeEdge::SouthEast => "edge-se",
        ResizeEdge::SouthWest => "edge-sw",
    }
}
