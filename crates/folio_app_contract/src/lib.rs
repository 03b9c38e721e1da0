//! Shared contract types between the desktop window manager and the content hosted in its windows.
//!
//! Content components are selected by [`AppType`] and mounted with an [`AppMountContext`]. The only
//! window-manager capabilities they receive are closing their own window and launching another app,
//! both through [`AppHost`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::fmt;

use leptos::{Callable, Callback};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Closed set of content kinds a window can host.
pub enum AppType {
    /// Bio and background text.
    About,
    /// Command interpreter.
    Terminal,
    /// Audio stream player.
    Player,
    /// Project browser.
    Projects,
    /// Contact form.
    Contact,
    /// Curated-items browser.
    Curated,
    /// Desktop settings.
    Settings,
    /// Any tag the desktop does not recognize.
    #[serde(other)]
    Unknown,
}

impl AppType {
    /// Every recognized app type, in dock order.
    pub const KNOWN: [AppType; 7] = [
        AppType::About,
        AppType::Terminal,
        AppType::Player,
        AppType::Projects,
        AppType::Contact,
        AppType::Curated,
        AppType::Settings,
    ];

    /// Parses a tag case-insensitively. Unrecognized tags map to [`AppType::Unknown`].
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.trim().to_ascii_lowercase();
        Self::KNOWN
            .into_iter()
            .find(|app_type| app_type.as_str() == normalized)
            .unwrap_or(Self::Unknown)
    }

    /// Stable lowercase tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Terminal => "terminal",
            Self::Player => "player",
            Self::Projects => "projects",
            Self::Contact => "contact",
            Self::Curated => "curated",
            Self::Settings => "settings",
            Self::Unknown => "unknown",
        }
    }

    /// Default window title for the app.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::About => "About Me",
            Self::Terminal => "Terminal",
            Self::Player => "Radio",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
            Self::Curated => "Favorites",
            Self::Settings => "Settings",
            Self::Unknown => "Untitled",
        }
    }

    /// Default icon name for the app.
    pub fn icon_id(self) -> &'static str {
        match self {
            Self::About => "user",
            Self::Terminal => "terminal",
            Self::Player => "music",
            Self::Projects => "folder",
            Self::Contact => "mail",
            Self::Curated => "star",
            Self::Settings => "gear",
            Self::Unknown => "window",
        }
    }
}

impl fmt::Display for AppType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Request from hosted content to open (or re-focus) another app window.
pub struct AppLaunch {
    /// Window id; doubles as the de-duplication key.
    pub id: String,
    /// Window title.
    pub title: String,
    /// Icon name.
    pub icon: String,
    /// Content kind to host.
    pub app_type: AppType,
    /// Opaque payload for the launched content.
    pub initial_data: Value,
}

impl AppLaunch {
    /// Builds a launch request keyed by the app's own tag, with its default title and icon.
    pub fn for_app(app_type: AppType) -> Self {
        Self {
            id: app_type.as_str().to_string(),
            title: app_type.display_name().to_string(),
            icon: app_type.icon_id().to_string(),
            app_type,
            initial_data: Value::Null,
        }
    }

    /// Replaces the initial payload.
    pub fn with_initial_data(mut self, initial_data: Value) -> Self {
        self.initial_data = initial_data;
        self
    }
}

#[derive(Clone, Copy)]
/// Window-manager capabilities granted to hosted content.
pub struct AppHost {
    close: Callback<()>,
    open: Callback<AppLaunch>,
}

impl AppHost {
    /// Creates a host handle from the window manager's callbacks.
    pub fn new(close: Callback<()>, open: Callback<AppLaunch>) -> Self {
        Self { close, open }
    }

    /// Closes the window hosting this content.
    pub fn close(&self) {
        self.close.call(());
    }

    /// Opens another app, or focuses it if a window with the same id is already open.
    pub fn open(&self, launch: AppLaunch) {
        self.open.call(launch);
    }
}

#[derive(Clone)]
/// Everything a content component receives when mounted inside a window.
pub struct AppMountContext {
    /// Id of the hosting window.
    pub window_id: String,
    /// Opaque payload supplied at open time.
    pub initial_data: Value,
    /// Narrow window-manager capabilities.
    pub host: AppHost,
}
