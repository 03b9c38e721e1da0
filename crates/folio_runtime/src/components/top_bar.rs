use super::*;

#[component]
pub(super) fn TopBar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let site_title = runtime.config.with_value(|config| config.site_title.clone());

    let idle_title = site_title.clone();
    let active_title = move || {
        state.with(|desktop| {
            desktop
                .registry
                .active_window()
                .map(|window| window.title.clone())
                .unwrap_or_else(|| idle_title.clone())
        })
    };
    let has_windows = move || state.with(|desktop| !desktop.registry.windows().is_empty());

    view! {
        <header class="top-bar">
            <span class="top-bar-brand">{site_title}</span>
            <span class="top-bar-active-title" aria-live="polite">{active_title}</span>
            <Show when=has_windows fallback=|| ()>
                <button
                    class="top-bar-close-all"
                    on:click=move |ev| {
                        stop_mouse_event(&ev);
                        runtime.dispatch_action(DesktopAction::CloseAll);
                    }
                >
                    "Close all"
                </button>
            </Show>
        </header>
    }
}
