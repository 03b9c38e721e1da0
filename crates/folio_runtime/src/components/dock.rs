use super::*;
use crate::{config::DockEntry, model::WindowId, window_manager::WindowRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum DockIndicator {
    Closed,
    Open,
    Focused,
}

impl DockIndicator {
    fn class_suffix(self) -> &'static str {
        match self {
            Self::Closed => "",
            Self::Open => " open",
            Self::Focused => " open focused",
        }
    }
}

/// Indicator state for a dock entry. Minimized windows still count as open.
pub(super) fn dock_status(registry: &WindowRegistry, id: &WindowId) -> DockIndicator {
    if registry.is_focused(id) {
        DockIndicator::Focused
    } else if registry.is_open(id) {
        DockIndicator::Open
    } else {
        DockIndicator::Closed
    }
}

#[component]
pub(super) fn Dock() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let entries = runtime.config.with_value(|config| config.dock.clone());

    view! {
        <nav class="dock" aria-label="Applications">
            {entries
                .into_iter()
                .map(|entry| view! { <DockButton entry=entry /> })
                .collect_view()}
        </nav>
    }
}

#[component]
fn DockButton(entry: DockEntry) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let window_id = WindowId::from(entry.id.as_str());
    let label = entry.title.clone();
    let glyph = icon_glyph(&entry.icon);
    let entry = store_value(entry);

    let status = create_memo(move |_| {
        runtime
            .state
            .with(|desktop| dock_status(&desktop.registry, &window_id))
    });

    view! {
        <button
            class=move || format!("dock-button{}", status.get().class_suffix())
            title=label.clone()
            aria-label=label
            aria-pressed=move || (status.get() == DockIndicator::Focused).to_string()
            on:click=move |ev| {
                stop_mouse_event(&ev);
                runtime.dispatch_action(DesktopAction::OpenWindow(
                    entry.with_value(DockEntry::open_request),
                ));
            }
        >
            <span class="dock-icon" aria-hidden="true">{glyph}</span>
            <span class="dock-indicator" aria-hidden="true"></span>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use folio_app_contract::AppType;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{model::OpenWindowRequest, window_manager::PlacementDefaults};

    #[test]
    fn dock_status_tracks_open_focus_and_minimize() {
        let mut registry = WindowRegistry::new(PlacementDefaults::default());
        let about = WindowId::from("about");
        let player = WindowId::from("player");
        assert_eq!(dock_status(&registry, &about), DockIndicator::Closed);

        registry.open(OpenWindowRequest::for_app(AppType::About));
        registry.open(OpenWindowRequest::for_app(AppType::Player));
        assert_eq!(dock_status(&registry, &about), DockIndicator::Open);
        assert_eq!(dock_status(&registry, &player), DockIndicator::Focused);

        registry.minimize(&player);
        assert_eq!(dock_status(&registry, &player), DockIndicator::Open);
        assert_eq!(dock_status(&registry, &about), DockIndicator::Focused);

        registry.close(&about);
        assert_eq!(dock_status(&registry, &about), DockIndicator::Closed);
    }
}
