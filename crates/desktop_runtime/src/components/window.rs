use super::*;
use crate::drag::{DragSession, PressTarget};
use crate::gesture::{ActiveGesture, GestureController, GestureSubscription, LatestCallback};
use crate::model::WindowRecord;
use crate::resize::ResizeSession;
use crate::window_mode::{window_frame_class, window_frame_style, GestureKind, WindowMode};

const WINDOW_CONTROL_SELECTOR: &str = "[data-window-control]";

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

/// Attaches document-wide move/release tracking for `gesture` and hands it to the controller.
fn start_gesture(
    controller: &GestureController,
    gesture: ActiveGesture,
    indicator: RwSignal<Option<GestureKind>>,
) {
    let kind = gesture.kind();
    let mut subscription = GestureSubscription::new();

    let on_move = controller.clone();
    let move_listener = window_event_listener(ev::pointermove, move |ev| {
        on_move.pointer_moved(pointer_from_pointer_event(&ev));
    });
    subscription.push(move || move_listener.remove());

    let on_up = controller.clone();
    let up_listener = window_event_listener(ev::pointerup, move |_| {
        if on_up.release() {
            indicator.set(None);
        }
    });
    subscription.push(move || up_listener.remove());

    let on_cancel = controller.clone();
    let cancel_listener = window_event_listener(ev::pointercancel, move |_| {
        if on_cancel.release() {
            indicator.set(None);
        }
    });
    subscription.push(move || cancel_listener.remove());

    indicator.set(Some(kind));
    controller.press(gesture, subscription);
}

#[component]
pub(super) fn DesktopWindow(window_id: AppId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let id = store_value(window_id);

    let window = create_memo(move |_| {
        id.with_value(|id| runtime.state.with(|desktop| desktop.window(id).cloned()))
    });
    let mode = Signal::derive(move || {
        window.with(|win| {
            win.as_ref()
                .and_then(|win| WindowMode::resolve(win, runtime.layout.get()))
        })
    });
    let focused = Signal::derive(move || {
        id.with_value(|id| runtime.state.with(|desktop| desktop.is_focused(id)))
    });
    let gesture = create_rw_signal(None::<GestureKind>);

    let latest_dispatch =
        LatestCallback::new(move |action: DesktopAction| runtime.dispatch_action(action));
    let controller = GestureController::new(latest_dispatch.clone());

    // Listeners attached on press resolve the dispatcher at event time.
    create_render_effect(move |_| {
        window.with(|_| ());
        latest_dispatch.replace(move |action: DesktopAction| runtime.dispatch_action(action));
    });

    let cleanup_controller = controller.clone();
    on_cleanup(move || {
        cleanup_controller.release();
    });
    let controller = store_value(controller);

    let focus = move |_: web_sys::PointerEvent| {
        let should_focus = id.with_value(|id| {
            runtime
                .state
                .with_untracked(|desktop| !desktop.is_focused(id) && desktop.window(id).is_some())
        });
        if should_focus {
            runtime.dispatch_action(DesktopAction::FocusWindow {
                window_id: id.get_value(),
            });
        }
    };
    let minimize = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(DesktopAction::MinimizeWindow {
            window_id: id.get_value(),
        });
    };
    let close = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(DesktopAction::CloseWindow {
            window_id: id.get_value(),
        });
    };
    let toggle_maximize = move || {
        if mode
            .get_untracked()
            .is_some_and(WindowMode::allows_maximize_toggle)
        {
            runtime.dispatch_action(DesktopAction::ToggleMaximize {
                window_id: id.get_value(),
            });
        }
    };
    let begin_drag = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        let (Some(win), Some(current_mode)) = (window.get_untracked(), mode.get_untracked()) else {
            return;
        };
        let target = if event_within(&ev, WINDOW_CONTROL_SELECTOR) {
            PressTarget::ControlButton
        } else {
            PressTarget::TitleBar
        };
        let Some(session) =
            DragSession::begin(&win, current_mode, target, pointer_from_pointer_event(&ev))
        else {
            return;
        };
        ev.prevent_default();
        try_set_pointer_capture(&ev);
        start_gesture(&controller.get_value(), ActiveGesture::Drag(session), gesture);
    };
    let titlebar_double_click = move |ev: web_sys::MouseEvent| {
        if event_within(&ev, WINDOW_CONTROL_SELECTOR) {
            return;
        }
        stop_mouse_event(&ev);
        toggle_maximize();
    };

    view! {
        <Show when=move || window.with(Option::is_some) fallback=|| ()>
            <section
                class=move || {
                    mode.get()
                        .map(|current| window_frame_class(focused.get(), current, gesture.get()))
                        .unwrap_or_default()
                }
                style=move || {
                    window.with(|win| {
                        win.as_ref()
                            .zip(mode.get())
                            .map(|(win, current)| window_frame_style(win, current))
                            .unwrap_or_default()
                    })
                }
                data-window-frame=id.get_value().to_string()
                role="dialog"
                aria-label=move || window.with(|win| win.as_ref().map(|w| w.title.clone()))
                on:pointerdown=focus
            >
                <header
                    class="window__titlebar"
                    on:pointerdown=begin_drag
                    on:dblclick=titlebar_double_click
                >
                    <div class="window__title">
                        <span class="window__icon" aria-hidden="true">
                            {move || window.with(|win| win.as_ref().map(|w| w.icon.clone()))}
                        </span>
                        <span>{move || window.with(|win| win.as_ref().map(|w| w.title.clone()))}</span>
                    </div>
                    <div class="window__controls">
                        <button
                            data-window-control="minimize"
                            aria-label="Minimize window"
                            on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                            on:click=minimize
                        >
                            "_"
                        </button>
                        <button
                            data-window-control="maximize"
                            disabled=move || !mode.get().is_some_and(WindowMode::allows_maximize_toggle)
                            aria-label=move || {
                                if mode.get() == Some(WindowMode::Maximized) {
                                    "Restore window"
                                } else {
                                    "Maximize window"
                                }
                            }
                            on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                            on:click=move |ev| {
                                stop_mouse_event(&ev);
                                toggle_maximize();
                            }
                        >
                            "□"
                        </button>
                        <button
                            data-window-control="close"
                            aria-label="Close window"
                            on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                            on:click=close
                        >
                            "×"
                        </button>
                    </div>
                </header>
                <div class="window__body">
                    <WindowBody window />
                </div>
                <Show
                    when=move || mode.get().is_some_and(WindowMode::allows_resize)
                    fallback=|| ()
                >
                    {ResizeEdge::ALL
                        .into_iter()
                        .map(|edge| view! { <WindowResizeHandle edge window controller gesture /> })
                        .collect_view()}
                </Show>
            </section>
        </Show>
    }
}

#[component]
fn WindowResizeHandle(
    edge: ResizeEdge,
    window: Memo<Option<WindowRecord>>,
    controller: StoredValue<GestureController>,
    gesture: RwSignal<Option<GestureKind>>,
) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let class_name = format!("window__resize-handle {}", resize_edge_class(edge));

    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        let Some(win) = window.get_untracked() else {
            return;
        };
        let Some(current_mode) = WindowMode::resolve(&win, runtime.layout.get_untracked()) else {
            return;
        };
        let Some(session) =
            ResizeSession::begin(&win, current_mode, edge, pointer_from_pointer_event(&ev))
        else {
            return;
        };
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        start_gesture(&controller.get_value(), ActiveGesture::Resize(session), gesture);
    };

    view! { <div class=class_name aria-hidden="true" on:pointerdown=on_pointerdown /> }
}

#[component]
fn WindowBody(window: Memo<Option<WindowRecord>>) -> impl IntoView {
    let contents = window
        .get_untracked()
        .map(|win| apps::render_window_contents(&win))
        .unwrap_or_else(|| ().into_view());

    view! { <div class="window__content">{contents}</div> }
}
