//! Shell configuration: reserved layout strips, breakpoints, cascade placement, and dock entries.
//!
//! The source of truth is `desktop.toml`, validated by the build script and embedded as JSON.

use std::collections::HashSet;

use folio_app_contract::AppType;
use leptos::logging;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    geometry::{Breakpoints, ShellInsets},
    model::{OpenWindowRequest, Position, Size},
    window_manager::PlacementDefaults,
};

include!(concat!(env!("OUT_DIR"), "/shell_config_generated.rs"));

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("shell config is not valid: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate dock entry id `{0}`")]
    DuplicateDockId(String),
    #[error("layout value `{field}` must be positive (found {value})")]
    InvalidDimension { field: &'static str, value: i32 },
    #[error("mobile_max_width ({mobile_max_width}) must be below desktop_min_width ({desktop_min_width})")]
    InvertedBreakpoints {
        mobile_max_width: i32,
        desktop_min_width: i32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub dock_width: i32,
    pub top_bar_height: i32,
    pub mobile_max_width: i32,
    pub desktop_min_width: i32,
    pub base_x: i32,
    pub base_y: i32,
    pub cascade_step: i32,
    pub fallback_width: i32,
    pub fallback_height: i32,
    /// Zero disables the minimize animation.
    pub minimize_animation_ms: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        let insets = ShellInsets::default();
        let breakpoints = Breakpoints::default();
        let placement = PlacementDefaults::default();
        Self {
            dock_width: insets.dock_width,
            top_bar_height: insets.top_bar_height,
            mobile_max_width: breakpoints.mobile_max_width,
            desktop_min_width: breakpoints.desktop_min_width,
            base_x: placement.base_position.x,
            base_y: placement.base_position.y,
            cascade_step: placement.cascade_step,
            fallback_width: placement.fallback_size.width,
            fallback_height: placement.fallback_size.height,
            minimize_animation_ms: 220,
        }
    }
}

impl LayoutConfig {
    pub fn insets(&self) -> ShellInsets {
        ShellInsets {
            dock_width: self.dock_width,
            top_bar_height: self.top_bar_height,
        }
    }

    pub fn breakpoints(&self) -> Breakpoints {
        Breakpoints {
            mobile_max_width: self.mobile_max_width,
            desktop_min_width: self.desktop_min_width,
        }
    }

    pub fn placement(&self) -> PlacementDefaults {
        PlacementDefaults {
            base_position: Position {
                x: self.base_x,
                y: self.base_y,
            },
            cascade_step: self.cascade_step,
            fallback_size: Size {
                width: self.fallback_width,
                height: self.fallback_height,
            },
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("dock_width", self.dock_width),
            ("top_bar_height", self.top_bar_height),
            ("desktop_min_width", self.desktop_min_width),
            ("fallback_width", self.fallback_width),
            ("fallback_height", self.fallback_height),
        ];
        if let Some((field, value)) = positive.into_iter().find(|(_, value)| *value <= 0) {
            return Err(ConfigError::InvalidDimension { field, value });
        }
        if self.mobile_max_width >= self.desktop_min_width {
            return Err(ConfigError::InvertedBreakpoints {
                mobile_max_width: self.mobile_max_width,
                desktop_min_width: self.desktop_min_width,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DockEntry {
    pub id: String,
    pub title: String,
    pub icon: String,
    pub app_type: AppType,
}

impl DockEntry {
    pub fn open_request(&self) -> OpenWindowRequest {
        OpenWindowRequest::new(
            self.id.as_str(),
            self.title.clone(),
            self.icon.clone(),
            self.app_type,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellConfig {
    pub site_title: String,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub dock: Vec<DockEntry>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            site_title: "folio".to_string(),
            layout: LayoutConfig::default(),
            dock: AppType::KNOWN
                .into_iter()
                .map(|app_type| DockEntry {
                    id: app_type.as_str().to_string(),
                    title: app_type.display_name().to_string(),
                    icon: app_type.icon_id().to_string(),
                    app_type,
                })
                .collect(),
        }
    }
}

impl ShellConfig {
    /// Parses the configuration embedded at build time.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_json(SHELL_CONFIG_JSON)
    }

    /// Like [`ShellConfig::load`], but logs a rejected configuration and uses the defaults.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(err) => {
                logging::warn!("shell config rejected, using defaults: {err}");
                Self::default()
            }
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.layout.validate()?;
        let mut seen = HashSet::new();
        for entry in &self.dock {
            if !seen.insert(entry.id.as_str()) {
                return Err(ConfigError::DuplicateDockId(entry.id.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn embedded_config_loads_and_lists_player_in_dock() {
        let config = ShellConfig::load().expect("embedded config");
        assert!(config
            .dock
            .iter()
            .any(|entry| entry.app_type == AppType::Player));
        assert!(config.layout.mobile_max_width < config.layout.desktop_min_width);
    }

    #[test]
    fn missing_layout_falls_back_to_defaults() {
        let config = ShellConfig::from_json(r#"{ "site_title": "x" }"#).unwrap();
        assert_eq!(config.layout, LayoutConfig::default());
        assert!(config.dock.is_empty());
        assert_eq!(config.layout.placement(), PlacementDefaults::default());
    }

    #[test]
    fn unknown_app_type_in_dock_is_kept_as_unknown() {
        let config = ShellConfig::from_json(
            r#"{ "site_title": "x", "dock": [
                { "id": "paint", "title": "Paint", "icon": "brush", "app_type": "paint" }
            ] }"#,
        )
        .unwrap();
        assert_eq!(config.dock[0].app_type, AppType::Unknown);
    }

    #[test]
    fn rejects_duplicate_dock_ids() {
        let err = ShellConfig::from_json(
            r#"{ "site_title": "x", "dock": [
                { "id": "a", "title": "A", "icon": "user", "app_type": "about" },
                { "id": "a", "title": "A2", "icon": "user", "app_type": "about" }
            ] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateDockId(id) if id == "a"));
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        let err = ShellConfig::from_json(r#"{ "site_title": "x", "layout": { "dock_width": 0 } }"#)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "layout value `dock_width` must be positive (found 0)"
        );
    }

    #[test]
    fn rejects_breakpoints_that_leave_no_tablet_range() {
        let err = ShellConfig::from_json(
            r#"{ "site_title": "x", "layout": { "mobile_max_width": 1024, "desktop_min_width": 1024 } }"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvertedBreakpoints {
                mobile_max_width: 1024,
                desktop_min_width: 1024,
            }
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            ShellConfig::from_json("{"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn dock_entry_builds_open_request_without_geometry() {
        let entry = DockEntry {
            id: "player".to_string(),
            title: "Radio".to_string(),
            icon: "music".to_string(),
            app_type: AppType::Player,
        };
        let request = entry.open_request();
        assert_eq!(request.id.as_str(), "player");
        assert_eq!(request.position, None);
        assert_eq!(request.size, None);
    }
}
