use folio_runtime::{DesktopProvider, DesktopShell, ShellConfig};
use leptos::*;
use leptos_meta::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();
    let config = ShellConfig::load_or_default();
    let title = config.site_title.clone();

    view! {
        <Title text=title />
        <Meta name="description" content="A personal site presented as a small desktop of windows." />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <main class="site-root">
            <DesktopEntry config=config />
        </main>
    }
}

#[component]
pub fn DesktopEntry(config: ShellConfig) -> impl IntoView {
    view! {
        <DesktopProvider config=config>
            <DesktopShell />
        </DesktopProvider>
    }
}
