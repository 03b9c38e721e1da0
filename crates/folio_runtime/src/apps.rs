//! Static app catalog: maps each [`AppType`] to its window chrome options and content component.

mod placeholders;

use folio_app_contract::{AppMountContext, AppType};
use folio_app_terminal::TerminalApp;
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppDescriptor {
    pub app_type: AppType,
    pub resizable: bool,
    /// Hint for the content area; windows that host scrolling text use `true`.
    pub scrollable_body: bool,
}

pub fn app_descriptor(app_type: AppType) -> AppDescriptor {
    let (resizable, scrollable_body) = match app_type {
        AppType::About => (true, true),
        AppType::Terminal => (true, false),
        AppType::Player => (false, false),
        AppType::Projects => (true, true),
        AppType::Contact => (false, true),
        AppType::Curated => (true, true),
        AppType::Settings => (false, true),
        AppType::Unknown => (true, true),
    };
    AppDescriptor {
        app_type,
        resizable,
        scrollable_body,
    }
}

/// Mounts the content component for `app_type`.
pub fn mount_app(app_type: AppType, context: AppMountContext) -> View {
    match app_type {
        AppType::About => placeholders::mount_about_app(context),
        AppType::Terminal => view! { <TerminalApp context=context /> }.into_view(),
        AppType::Player => placeholders::mount_player_app(context),
        AppType::Projects => placeholders::mount_projects_app(context),
        AppType::Contact => placeholders::mount_contact_app(context),
        AppType::Curated => placeholders::mount_curated_app(context),
        AppType::Settings => placeholders::mount_settings_app(context),
        AppType::Unknown => placeholders::mount_unavailable_app(context),
    }
}
