//! Window registry and presentation layer for the folio simulated desktop.

pub mod apps;
pub mod components;
pub mod config;
mod effect_executor;
pub mod geometry;
pub mod model;
pub mod reducer;
mod runtime_context;
pub mod viewport;
pub mod window_manager;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use config::{ConfigError, DockEntry, LayoutConfig, ShellConfig};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, DesktopState, RuntimeEffect};
pub use window_manager::{default_window_size, PlacementDefaults, WindowRegistry};
