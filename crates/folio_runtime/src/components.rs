//! Desktop shell UI composition and interaction surfaces.

mod dock;
mod top_bar;
mod window;

use leptos::*;

use self::{dock::Dock, top_bar::TopBar, window::DesktopWindow};
use crate::{
    model::{PointerPosition, ResizeEdge},
    reducer::{DesktopAction, DesktopState},
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

#[component]
/// Renders the top bar, dock, and window layer, and routes pointer gestures to the reducer.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let insets_style = runtime.config.with_value(|config| {
        format!(
            "--dock-width:{}px;--top-bar-height:{}px;",
            config.layout.dock_width, config.layout.top_bar_height
        )
    });

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        let pointer = pointer_from_pointer_event(&ev);
        let interaction = runtime.interaction.get_untracked();

        if interaction.dragging.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateMove { pointer });
        }
        if interaction.resizing.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateResize { pointer });
        }
    };
    let on_pointer_end = move |_| end_active_pointer_interaction(runtime);
    let on_pointer_abandon = move |_| {
        if !runtime.interaction.get_untracked().is_idle() {
            runtime.dispatch_action(DesktopAction::CancelInteraction);
        }
    };

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            data-device=move || runtime.device_class().css_id()
            data-gesture=move || (!runtime.interaction.get().is_idle()).to_string()
            style=insets_style
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_end
            on:pointercancel=on_pointer_abandon
            on:pointerleave=on_pointer_abandon
        >
            <TopBar />
            <Dock />
            <div class="desktop-window-layer">
                <For
                    each=move || state.with(DesktopState::rendered_window_ids)
                    key=|window_id| window_id.clone()
                    let:window_id
                >
                    <DesktopWindow window_id=window_id />
                </For>
            </div>
        </div>
    }
}

fn icon_glyph(icon: &str) -> &'static str {
    match icon {
        "user" => "\u{1F464}",
        "terminal" => "\u{2328}",
        "music" => "\u{266B}",
        "folder" => "\u{1F4C1}",
        "mail" => "\u{2709}",
        "star" => "\u{2605}",
        "gear" => "\u{2699}",
        _ => "\u{25A2}",
    }
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

fn end_active_pointer_interaction(runtime: DesktopRuntimeContext) {
    let interaction = runtime.interaction.get_untracked();
    if interaction.dragging.is_some() {
        runtime.dispatch_action(DesktopAction::EndMove);
    }
    if interaction.resizing.is_some() {
        runtime.dispatch_action(DesktopAction::EndResize);
    }
}

fn resize_edge_class(edge: ResizeEdge) -> &'static str {
    match edge {
        ResizeEdge::East => "edge-e",
        ResizeEdge::South => "edge-s",
        ResizeEdge::SouthEast => "edge-se",
    }
}
