use super::*;
use crate::layout::TASKBAR_HEIGHT_PX;
use crate::model::DesktopState;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct TaskbarEntry {
    id: AppId,
    title: String,
    icon: String,
    active: bool,
}

/// One entry per open window in open order, minimized ones included.
fn taskbar_entries(state: &DesktopState) -> Vec<TaskbarEntry> {
    state
        .windows
        .iter()
        .map(|win| TaskbarEntry {
            id: win.id.clone(),
            title: win.title.clone(),
            icon: win.icon.clone(),
            active: state.is_focused(&win.id) && !win.is_minimized,
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TaskbarClockSnapshot {
    year: u32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
}

impl TaskbarClockSnapshot {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                year: date.get_full_year(),
                month: date.get_month() + 1,
                day: date.get_date(),
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self {
                year: 1970,
                month: 1,
                day: 1,
                hour: 0,
                minute: 0,
            }
        }
    }
}

fn format_taskbar_clock_time(snapshot: TaskbarClockSnapshot) -> String {
    let mut hour = snapshot.hour % 12;
    if hour == 0 {
        hour = 12;
    }
    let suffix = if snapshot.hour >= 12 { "PM" } else { "AM" };
    format!("{}:{:02} {}", hour, snapshot.minute, suffix)
}

fn format_taskbar_clock_date(snapshot: TaskbarClockSnapshot) -> String {
    format!("{}/{}/{}", snapshot.month, snapshot.day, snapshot.year)
}

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let clock_now = create_rw_signal(TaskbarClockSnapshot::now());

    if let Ok(interval) = set_interval_with_handle(
        move || clock_now.set(TaskbarClockSnapshot::now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    let entries = create_memo(move |_| state.with(taskbar_entries));
    let start_menu_open =
        Signal::derive(move || state.with(|desktop| desktop.overlay.is_start_menu_open()));

    view! {
        <footer
            class="taskbar"
            role="toolbar"
            aria-label="Desktop taskbar"
            style=format!("height:{TASKBAR_HEIGHT_PX}px;")
        >
            <Show
                when=move || runtime.layout.get().is_fixed()
                fallback=move || {
                    view! {
                        <button
                            id="taskbar-start-button"
                            class=move || {
                                if start_menu_open.get() {
                                    "taskbar__start active"
                                } else {
                                    "taskbar__start"
                                }
                            }
                            data-desktop-overlay="start-button"
                            aria-haspopup="menu"
                            aria-expanded=move || start_menu_open.get().to_string()
                            on:click=move |ev| {
                                stop_mouse_event(&ev);
                                runtime.dispatch_action(DesktopAction::ToggleStartMenu);
                            }
                        >
                            "Start"
                        </button>
                        <div class="taskbar__windows">
                            <For each=move || entries.get() key=|entry| entry.clone() let:entry>
                                <TaskbarWindowButton entry />
                            </For>
                        </div>
                    }
                }
            >
                <button
                    class="taskbar__back"
                    aria-label="Back to home screen"
                    on:click=move |_| runtime.dispatch_action(DesktopAction::MinimizeAllWindows)
                >
                    "←"
                </button>
            </Show>

            <div class="taskbar__clock" role="timer" aria-live="off">
                <span class="taskbar__time">
                    {move || format_taskbar_clock_time(clock_now.get())}
                </span>
                <span class="taskbar__date">
                    {move || format_taskbar_clock_date(clock_now.get())}
                </span>
            </div>
        </footer>
    }
}

#[component]
fn TaskbarWindowButton(entry: TaskbarEntry) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let window_id = store_value(entry.id.clone());

    view! {
        <button
            class=if entry.active { "taskbar__window active" } else { "taskbar__window" }
            aria-pressed=entry.active.to_string()
            title=entry.title.clone()
            on:click=move |ev| {
                stop_mouse_event(&ev);
                runtime.dispatch_action(DesktopAction::RestoreAndFocus {
                    window_id: window_id.get_value(),
                });
            }
        >
            <span class="taskbar__window-icon" aria-hidden="true">{entry.icon}</span>
            <span class="taskbar__window-title">{entry.title}</span>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::reducer::reduce_desktop;

    fn open(state: &mut DesktopState, app_id: &str) {
        reduce_desktop(
            state,
            DesktopAction::OpenApp {
                app_id: AppId::from(app_id),
            },
        )
        .expect("open app");
    }

    fn snapshot(hour: u32, minute: u32) -> TaskbarClockSnapshot {
        TaskbarClockSnapshot {
            year: 2024,
            month: 3,
            day: 7,
            hour,
            minute,
        }
    }

    #[test]
    fn entries_follow_open_order_and_mark_only_focused_visible_window() {
        let mut state = DesktopState::default();
        open(&mut state, "about");
        open(&mut state, "projects");

        let entries = taskbar_entries(&state);
        let summary: Vec<(&str, bool)> = entries
            .iter()
            .map(|entry| (entry.id.as_str(), entry.active))
            .collect();
        assert_eq!(summary, vec![("about", false), ("projects", true)]);
        assert_eq!(entries[0].title, "About Me");
    }

    #[test]
    fn minimized_windows_keep_an_inactive_entry() {
        let mut state = DesktopState::default();
        open(&mut state, "about");
        reduce_desktop(&mut state, DesktopAction::MinimizeAllWindows).expect("minimize");

        let entries = taskbar_entries(&state);
        assert_eq!(entries.len(), 1);
        assert!(!entries[0].active);
    }

    #[test]
    fn clock_uses_twelve_hour_time() {
        assert_eq!(format_taskbar_clock_time(snapshot(0, 5)), "12:05 AM");
        assert_eq!(format_taskbar_clock_time(snapshot(9, 30)), "9:30 AM");
        assert_eq!(format_taskbar_clock_time(snapshot(12, 0)), "12:00 PM");
        assert_eq!(format_taskbar_clock_time(snapshot(23, 59)), "11:59 PM");
    }

    #[test]
    fn clock_date_is_month_day_year() {
        assert_eq!(format_taskbar_clock_date(snapshot(8, 0)), "3/7/2024");
    }
}
