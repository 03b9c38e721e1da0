use std::fmt;

use folio_app_contract::{AppLaunch, AppType};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(pub String);

impl WindowId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WindowId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl From<String> for WindowId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn clamped_min(self, min_width: i32, min_height: i32) -> Self {
        Self {
            width: self.width.max(min_width),
            height: self.height.max(min_height),
        }
    }
}

/// Visibility/size mode of a window as seen by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowMode {
    Normal,
    Minimized,
    Maximized,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowRecord {
    pub id: WindowId,
    pub title: String,
    pub icon: String,
    pub app_type: AppType,
    pub position: Position,
    pub size: Size,
    pub is_minimized: bool,
    pub is_maximized: bool,
    pub z_index: u32,
    pub initial_data: Value,
}

impl WindowRecord {
    pub fn mode(&self) -> WindowMode {
        if self.is_minimized {
            WindowMode::Minimized
        } else if self.is_maximized {
            WindowMode::Maximized
        } else {
            WindowMode::Normal
        }
    }
}

/// Arguments of an `open` call. Geometry left as `None` is computed by the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenWindowRequest {
    pub id: WindowId,
    pub title: String,
    pub icon: String,
    pub app_type: AppType,
    pub initial_data: Value,
    pub position: Option<Position>,
    pub size: Option<Size>,
}

impl OpenWindowRequest {
    pub fn new(
        id: impl Into<WindowId>,
        title: impl Into<String>,
        icon: impl Into<String>,
        app_type: AppType,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            icon: icon.into(),
            app_type,
            initial_data: Value::Null,
            position: None,
            size: None,
        }
    }

    /// Request keyed by the app's own tag, with its default title and icon.
    pub fn for_app(app_type: AppType) -> Self {
        Self::from(AppLaunch::for_app(app_type))
    }

    pub fn with_initial_data(mut self, initial_data: Value) -> Self {
        self.initial_data = initial_data;
        self
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }
}

impl From<AppLaunch> for OpenWindowRequest {
    fn from(launch: AppLaunch) -> Self {
        Self::new(launch.id, launch.title, launch.icon, launch.app_type)
            .with_initial_data(launch.initial_data)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeEdge {
    East,
    South,
    SouthEast,
}

/// In-flight drag. Only `candidate` changes while the pointer moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub window_id: WindowId,
    pub pointer_start: PointerPosition,
    pub position_start: Position,
    pub candidate: Position,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeSession {
    pub window_id: WindowId,
    pub edge: ResizeEdge,
    pub pointer_start: PointerPosition,
    pub size_start: Size,
    pub candidate: Size,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
    pub resizing: Option<ResizeSession>,
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        self.dragging.is_none() && self.resizing.is_none()
    }

    /// Candidate position for `window_id` while it is being dragged.
    pub fn drag_candidate(&self, window_id: &WindowId) -> Option<Position> {
        self.dragging
            .as_ref()
            .filter(|session| &session.window_id == window_id)
            .map(|session| session.candidate)
    }

    /// Candidate size for `window_id` while it is being resized.
    pub fn resize_candidate(&self, window_id: &WindowId) -> Option<Size> {
        self.resizing
            .as_ref()
            .filter(|session| &session.window_id == window_id)
            .map(|session| session.candidate)
    }

    /// Drops any gesture targeting `window_id` without committing it.
    pub fn abandon_window(&mut self, window_id: &WindowId) {
        if self.drag_candidate(window_id).is_some() {
            self.dragging = None;
        }
        if self.resize_candidate(window_id).is_some() {
            self.resizing = None;
        }
    }
}

/// Animated transition a window is passing through before its registry state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowTransition {
    Minimizing,
}
