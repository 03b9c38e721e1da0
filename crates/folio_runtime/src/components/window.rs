use super::*;
use crate::{
    apps,
    geometry::{drag_enabled, render_rect, DeviceClass, ScreenRect},
    model::{WindowId, WindowRecord, WindowTransition},
};
use folio_app_contract::{AppHost, AppLaunch, AppMountContext};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

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

/// Everything the window chrome needs for one frame.
#[derive(Debug, Clone, PartialEq)]
struct WindowFrame {
    record: WindowRecord,
    rect: ScreenRect,
    device: DeviceClass,
    focused: bool,
    transition: Option<WindowTransition>,
    gesture_active: bool,
}

impl WindowFrame {
    fn class_name(&self) -> String {
        let mut class = String::from("desktop-window");
        if self.focused {
            class.push_str(" focused");
        }
        if self.record.is_minimized {
            class.push_str(" minimized");
        }
        if self.record.is_maximized || !self.device.is_multi_window() {
            class.push_str(" maximized");
        }
        if self.transition == Some(WindowTransition::Minimizing) {
            class.push_str(" minimizing");
        }
        if self.gesture_active {
            class.push_str(" gesture");
        }
        class
    }

    fn can_resize(&self, resizable: bool) -> bool {
        resizable
            && self.device.is_multi_window()
            && !self.record.is_maximized
            && !self.record.is_minimized
    }
}

fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let interaction = runtime.interaction;
    let id = store_value(window_id);

    let frame = create_memo(move |_| {
        let window_id = id.get_value();
        let gesture = interaction.with(|ui| {
            (
                ui.drag_candidate(&window_id),
                ui.resize_candidate(&window_id),
            )
        });
        state.with(|desktop| {
            let record = desktop.registry.get(&window_id)?.clone();
            let device = desktop.device_class();
            let mut rect = render_rect(&record, desktop.viewport, device);
            if let Some(position) = gesture.0 {
                rect.x = position.x;
                rect.y = position.y;
            }
            if let Some(size) = gesture.1 {
                rect.width = size.width;
                rect.height = size.height;
            }
            Some(WindowFrame {
                focused: desktop.registry.is_focused(&window_id),
                transition: desktop.transition(&window_id),
                gesture_active: gesture.0.is_some() || gesture.1.is_some(),
                record,
                rect,
                device,
            })
        })
    });

    let Some(initial) = frame.get_untracked() else {
        return ().into_view();
    };
    let title = initial.record.title.clone();
    let aria_title = title.clone();
    let descriptor = apps::app_descriptor(initial.record.app_type);

    let focus = move |_: web_sys::PointerEvent| {
        let should_focus = frame
            .get_untracked()
            .map(|f| !f.focused)
            .unwrap_or(false);
        if should_focus {
            runtime.dispatch_action(DesktopAction::FocusWindow {
                window_id: id.get_value(),
            });
        }
    };
    let begin_move = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        ev.stop_propagation();
        let draggable = frame
            .get_untracked()
            .map(|f| drag_enabled(&f.record, f.device))
            .unwrap_or(false);
        if !draggable {
            runtime.dispatch_action(DesktopAction::FocusWindow {
                window_id: id.get_value(),
            });
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        runtime.dispatch_action(DesktopAction::BeginMove {
            window_id: id.get_value(),
            pointer: pointer_from_pointer_event(&ev),
        });
    };
    let minimize = move || {
        runtime.dispatch_action(DesktopAction::BeginMinimize {
            window_id: id.get_value(),
        })
    };
    let toggle_maximize = move || {
        runtime.dispatch_action(DesktopAction::ToggleMaximize {
            window_id: id.get_value(),
        })
    };
    let close = move || {
        runtime.dispatch_action(DesktopAction::CloseWindow {
            window_id: id.get_value(),
        })
    };
    let titlebar_double_click = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        if runtime.device_class().is_multi_window() {
            toggle_maximize();
        }
    };
    let transition_end = move |ev: web_sys::TransitionEvent| {
        // ignore transitions bubbling up from the hosted content
        if ev.target() != ev.current_target() {
            return;
        }
        let window_id = id.get_value();
        if state.with_untracked(|desktop| desktop.transition(&window_id).is_some()) {
            runtime.dispatch_action(DesktopAction::FinishTransition { window_id });
        }
    };
    let is_maximized = move || {
        frame
            .get()
            .map(|f| f.record.is_maximized)
            .unwrap_or(false)
    };

    view! {
        <section
            class=move || frame.get().map(|f| f.class_name()).unwrap_or_default()
            style=move || {
                frame
                    .get()
                    .map(|f| f.rect.style(f.record.z_index))
                    .unwrap_or_else(|| "display:none;".to_string())
            }
            on:pointerdown=focus
            on:transitionend=transition_end
            role="dialog"
            aria-label=aria_title
        >
            <header
                class="titlebar"
                on:pointerdown=begin_move
                on:dblclick=titlebar_double_click
            >
                <div class="titlebar-title">
                    <span class="titlebar-app-icon" aria-hidden="true">
                        {icon_glyph(&initial.record.icon)}
                    </span>
                    <span>{title}</span>
                </div>
                <div class="titlebar-controls">
                    <button
                        aria-label="Minimize window"
                        on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            minimize();
                        }
                    >
                        "\u{2013}"
                    </button>
                    <Show when=move || runtime.device_class().is_multi_window() fallback=|| ()>
                        <button
                            aria-label=move || {
                                if is_maximized() { "Restore window" } else { "Maximize window" }
                            }
                            on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                            on:click=move |ev| {
                                stop_mouse_event(&ev);
                                toggle_maximize();
                            }
                        >
                            {move || if is_maximized() { "\u{2750}" } else { "\u{25A1}" }}
                        </button>
                    </Show>
                    <button
                        aria-label="Close window"
                        on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            close();
                        }
                    >
                        "\u{00D7}"
                    </button>
                </div>
            </header>
            <div class=if descriptor.scrollable_body {
                "window-body scrollable"
            } else {
                "window-body"
            }>
                <WindowBody window_id=id.get_value() />
            </div>
            <Show
                when=move || {
                    frame
                        .get()
                        .map(|f| f.can_resize(descriptor.resizable))
                        .unwrap_or(false)
                }
                fallback=|| ()
            >
                <WindowResizeHandle window_id=id.get_value() edge=ResizeEdge::East />
                <WindowResizeHandle window_id=id.get_value() edge=ResizeEdge::South />
                <WindowResizeHandle window_id=id.get_value() edge=ResizeEdge::SouthEast />
            </Show>
        </section>
    }
    .into_view()
}

#[component]
fn WindowResizeHandle(window_id: WindowId, edge: ResizeEdge) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let class_name = format!("window-resize-handle {}", resize_edge_class(edge));
    let id = store_value(window_id);

    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginResize {
            window_id: id.get_value(),
            edge,
            pointer: pointer_from_pointer_event(&ev),
        });
    };

    view! { <div class=class_name aria-hidden="true" on:pointerdown=on_pointerdown /> }
}

/// Mounts the hosted content once; later registry changes restyle the chrome around it.
#[component]
fn WindowBody(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let id = store_value(window_id);
    let host = AppHost::new(
        Callback::new(move |_| {
            runtime.dispatch_action(DesktopAction::CloseWindow {
                window_id: id.get_value(),
            })
        }),
        Callback::new(move |launch: AppLaunch| {
            runtime.dispatch_action(DesktopAction::OpenWindow(launch.into()))
        }),
    );

    let contents = runtime
        .state
        .with_untracked(|desktop| {
            desktop
                .registry
                .get(&id.get_value())
                .map(|w| (w.app_type, w.initial_data.clone()))
        })
        .map(|(app_type, initial_data)| {
            apps::mount_app(
                app_type,
                AppMountContext {
                    window_id: id.get_value().0,
                    initial_data,
                    host,
                },
            )
        })
        .unwrap_or_else(|| view! { <p>"Closed"</p> }.into_view());

    view! { <div class="window-body-content">{contents}</div> }
}
