use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const KNOWN_APP_TYPES: [&str; 7] = [
    "about", "terminal", "player", "projects", "contact", "curated", "settings",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LayoutSection {
    dock_width: i32,
    top_bar_height: i32,
    mobile_max_width: i32,
    desktop_min_width: i32,
    base_x: i32,
    base_y: i32,
    cascade_step: i32,
    fallback_width: i32,
    fallback_height: i32,
    minimize_animation_ms: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DockSection {
    id: String,
    title: String,
    icon: String,
    app_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ShellManifest {
    schema_version: u32,
    site_title: String,
    layout: LayoutSection,
    dock: Vec<DockSection>,
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("desktop.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let manifest: ShellManifest = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if manifest.schema_version != 1 {
        panic!(
            "shell config schema mismatch in {}: expected 1 found {}",
            path.display(),
            manifest.schema_version
        );
    }
    if manifest.layout.mobile_max_width >= manifest.layout.desktop_min_width {
        panic!(
            "mobile_max_width ({}) must be below desktop_min_width ({})",
            manifest.layout.mobile_max_width, manifest.layout.desktop_min_width
        );
    }

    let mut seen = HashSet::new();
    for entry in &manifest.dock {
        if !KNOWN_APP_TYPES.contains(&entry.app_type.as_str()) {
            panic!(
                "dock entry `{}` in {} names unknown app_type `{}`",
                entry.id,
                path.display(),
                entry.app_type
            );
        }
        if !seen.insert(entry.id.as_str()) {
            panic!("duplicate dock entry id `{}` in {}", entry.id, path.display());
        }
    }

    let json = serde_json::to_string_pretty(&manifest).expect("serialize shell config");
    let generated = format!(
        "/// Build-time validated shell configuration JSON.\n\
pub const SHELL_CONFIG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("shell_config_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
