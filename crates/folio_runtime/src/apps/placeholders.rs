//! Built-in content shells. Data fetching, audio playback, and mail delivery live outside the
//! window manager; these views render the static frame the external content fills in.

use folio_app_contract::{AppLaunch, AppMountContext, AppType};
use leptos::*;
use serde_json::Value;

/// String field from the window's initial payload.
fn initial_str(context: &AppMountContext, key: &str) -> Option<String> {
    context
        .initial_data
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
}

pub(super) fn mount_about_app(context: AppMountContext) -> View {
    let headline = initial_str(&context, "headline").unwrap_or_else(|| "Hello there.".to_string());
    let host = context.host;
    view! {
        <div class="app-shell app-about">
            <h1>{headline}</h1>
            <p>"Designer, developer, and occasional DJ."</p>
            <div class="app-toolbar" role="group" aria-label="About shortcuts">
                <button
                    type="button"
                    class="app-action"
                    on:click=move |_| host.open(AppLaunch::for_app(AppType::Projects))
                >
                    "See projects"
                </button>
                <button
                    type="button"
                    class="app-action"
                    on:click=move |_| host.open(AppLaunch::for_app(AppType::Contact))
                >
                    "Get in touch"
                </button>
            </div>
        </div>
    }
    .into_view()
}

pub(super) fn mount_player_app(context: AppMountContext) -> View {
    let station = initial_str(&context, "station").unwrap_or_else(|| "Off air".to_string());
    let playing = create_rw_signal(false);
    view! {
        <div class="app-shell app-player">
            <div class="app-player-card">
                <p><strong>{station}</strong></p>
                <p>{move || if playing.get() { "Streaming" } else { "Paused" }}</p>
            </div>
            <div class="app-toolbar" role="group" aria-label="Player controls">
                <button
                    type="button"
                    class="app-action"
                    aria-pressed=move || playing.get().to_string()
                    on:click=move |_| playing.update(|on| *on = !*on)
                >
                    {move || if playing.get() { "Pause" } else { "Play" }}
                </button>
            </div>
        </div>
    }
    .into_view()
}

pub(super) fn mount_projects_app(context: AppMountContext) -> View {
    let projects: Vec<String> = context
        .initial_data
        .get("projects")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();
    let body = if projects.is_empty() {
        view! { <p class="app-empty">"No projects loaded yet."</p> }.into_view()
    } else {
        view! {
            <ul class="app-list">
                {projects.into_iter().map(|name| view! { <li>{name}</li> }).collect_view()}
            </ul>
        }
        .into_view()
    };
    view! { <div class="app-shell app-projects">{body}</div> }.into_view()
}

pub(super) fn mount_contact_app(context: AppMountContext) -> View {
    let host = context.host;
    let sent = create_rw_signal(false);
    view! {
        <form
            class="app-shell app-contact"
            on:submit=move |ev| {
                ev.prevent_default();
                sent.set(true);
            }
        >
            <label>"Name" <input type="text" name="name" required=true /></label>
            <label>"Email" <input type="email" name="email" required=true /></label>
            <label>"Message" <textarea name="message" rows="6" required=true></textarea></label>
            <div class="app-toolbar">
                <button type="submit" class="app-action">"Send"</button>
                <button type="button" class="app-action" on:click=move |_| host.close()>
                    "Cancel"
                </button>
            </div>
            <Show when=move || sent.get() fallback=|| ()>
                <p class="app-status" role="status">"Thanks! Your message is on its way."</p>
            </Show>
        </form>
    }
    .into_view()
}

pub(super) fn mount_curated_app(context: AppMountContext) -> View {
    let heading = initial_str(&context, "collection").unwrap_or_else(|| "Favorites".to_string());
    view! {
        <div class="app-shell app-curated">
            <h2>{heading}</h2>
            <p class="app-empty">"Nothing curated here yet."</p>
        </div>
    }
    .into_view()
}

pub(super) fn mount_settings_app(_: AppMountContext) -> View {
    view! {
        <div class="app-shell app-settings">
            <p>"Wallpaper and theme preferences apply to this session only."</p>
        </div>
    }
    .into_view()
}

pub(super) fn mount_unavailable_app(context: AppMountContext) -> View {
    let host = context.host;
    view! {
        <div class="app-shell app-unavailable" role="alert">
            <p>"This app is not available."</p>
            <button type="button" class="app-action" on:click=move |_| host.close()>
                "Close"
            </button>
        </div>
    }
    .into_view()
}
