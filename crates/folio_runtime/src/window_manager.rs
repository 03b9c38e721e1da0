//! Window registry: the authoritative store for every open window's geometry, stacking order,
//! and focus.
//!
//! Every mutator is total. Operating on an id that is not open is a no-op (reported through
//! `debug_warn!` in debug builds), and every mutator that can take focus away from the active
//! window re-derives the active window before returning.

use folio_app_contract::AppType;
use leptos::logging;
use serde::{Deserialize, Serialize};

use crate::model::{OpenWindowRequest, Position, Size, WindowId, WindowMode, WindowRecord};

/// Top-left of the first cascaded window.
pub const DEFAULT_BASE_POSITION: Position = Position { x: 120, y: 60 };
/// Diagonal offset between successively opened windows.
pub const DEFAULT_CASCADE_STEP: i32 = 30;
/// Size used when an app type has no entry in the default-size table.
pub const FALLBACK_WINDOW_SIZE: Size = Size {
    width: 640,
    height: 480,
};

/// Static default geometry per app type. `None` means "use the generic fallback".
pub fn default_window_size(app_type: AppType) -> Option<Size> {
    let (width, height) = match app_type {
        AppType::About => (600, 500),
        AppType::Terminal => (720, 460),
        AppType::Player => (380, 540),
        AppType::Projects => (820, 600),
        AppType::Contact => (520, 600),
        AppType::Curated => (760, 560),
        AppType::Settings => (520, 440),
        AppType::Unknown => return None,
    };
    Some(Size { width, height })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementDefaults {
    pub base_position: Position,
    pub cascade_step: i32,
    pub fallback_size: Size,
}

impl Default for PlacementDefaults {
    fn default() -> Self {
        Self {
            base_position: DEFAULT_BASE_POSITION,
            cascade_step: DEFAULT_CASCADE_STEP,
            fallback_size: FALLBACK_WINDOW_SIZE,
        }
    }
}

impl PlacementDefaults {
    /// Position for a new window when `open_count` windows are currently visible.
    pub fn cascade_position(&self, open_count: usize) -> Position {
        let step = self.cascade_step * open_count as i32;
        self.base_position.offset(step, step)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WindowRegistry {
    windows: Vec<WindowRecord>,
    active_window_id: Option<WindowId>,
    highest_z_index: u32,
    placement: PlacementDefaults,
}

impl WindowRegistry {
    pub fn new(placement: PlacementDefaults) -> Self {
        Self {
            placement,
            ..Self::default()
        }
    }

    /// Opens a window, or focuses (and restores) the existing window with the same id.
    pub fn open(&mut self, request: OpenWindowRequest) {
        if let Some(existing) = self.get(&request.id) {
            if existing.is_minimized {
                self.restore(&request.id);
            } else {
                self.focus(&request.id);
            }
            return;
        }

        let open_count = self.windows.iter().filter(|w| !w.is_minimized).count();
        let position = request
            .position
            .unwrap_or_else(|| self.placement.cascade_position(open_count));
        let size = request
            .size
            .or_else(|| default_window_size(request.app_type))
            .unwrap_or(self.placement.fallback_size);
        let z_index = self.next_z_index();

        #[cfg(debug_assertions)]
        logging::log!("window registry: opened `{}` ({})", &request.id, request.app_type);
        self.active_window_id = Some(request.id.clone());
        self.windows.push(WindowRecord {
            id: request.id,
            title: request.title,
            icon: request.icon,
            app_type: request.app_type,
            position,
            size,
            is_minimized: false,
            is_maximized: false,
            z_index,
            initial_data: request.initial_data,
        });
    }

    pub fn close(&mut self, id: &WindowId) {
        let Some(index) = self.index_of(id) else {
            ignored("close", id);
            return;
        };
        self.windows.remove(index);
        #[cfg(debug_assertions)]
        logging::log!("window registry: closed `{id}`");
        if self.active_window_id.as_ref() == Some(id) {
            self.rederive_active();
        }
    }

    /// Hides a window. Geometry and the maximized flag are kept for a later restore.
    pub fn minimize(&mut self, id: &WindowId) {
        let Some(window) = self.find_mut(id) else {
            ignored("minimize", id);
            return;
        };
        window.is_minimized = true;
        if self.active_window_id.as_ref() == Some(id) {
            self.rederive_active();
        }
    }

    /// Brings a window back to the front.
    ///
    /// A minimized window returns to its pre-minimize mode; a visible maximized window returns to
    /// its stored geometry.
    pub fn restore(&mut self, id: &WindowId) {
        let Some(window) = self.find_mut(id) else {
            ignored("restore", id);
            return;
        };
        if window.is_minimized {
            window.is_minimized = false;
        } else {
            window.is_maximized = false;
        }
        self.raise(id);
    }

    /// Sets the maximized flag. A minimized window is also shown and raised.
    pub fn maximize(&mut self, id: &WindowId) {
        let Some(window) = self.find_mut(id) else {
            ignored("maximize", id);
            return;
        };
        window.is_maximized = true;
        if window.is_minimized {
            window.is_minimized = false;
            self.raise(id);
        }
    }

    pub fn toggle_maximize(&mut self, id: &WindowId) {
        match self.mode(id) {
            Some(WindowMode::Maximized) => {
                if let Some(window) = self.find_mut(id) {
                    window.is_maximized = false;
                }
            }
            Some(_) => self.maximize(id),
            None => ignored("toggle_maximize", id),
        }
    }

    /// Raises a window and makes it active. A minimized window is restored first.
    pub fn focus(&mut self, id: &WindowId) {
        let Some(window) = self.get(id) else {
            ignored("focus", id);
            return;
        };
        if window.is_minimized {
            self.restore(id);
            return;
        }
        if window.z_index != self.highest_z_index {
            self.raise(id);
        } else {
            self.active_window_id = Some(id.clone());
        }
    }

    /// Commits the final position of a drag gesture.
    pub fn update_position(&mut self, id: &WindowId, position: Position) {
        match self.find_mut(id) {
            Some(window) => window.position = position,
            None => ignored("update_position", id),
        }
    }

    /// Commits the final size of a resize gesture.
    pub fn update_size(&mut self, id: &WindowId, size: Size) {
        match self.find_mut(id) {
            Some(window) => window.size = size,
            None => ignored("update_size", id),
        }
    }

    /// Removes every window. The stacking counter keeps counting.
    pub fn close_all(&mut self) {
        self.windows.clear();
        self.active_window_id = None;
    }

    pub fn get(&self, id: &WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| &w.id == id)
    }

    pub fn is_open(&self, id: &WindowId) -> bool {
        self.get(id).is_some()
    }

    /// Ids of every open window, in insertion order.
    pub fn open_ids(&self) -> Vec<WindowId> {
        self.windows.iter().map(|w| w.id.clone()).collect()
    }

    pub fn windows(&self) -> &[WindowRecord] {
        &self.windows
    }

    pub fn active_window_id(&self) -> Option<&WindowId> {
        self.active_window_id.as_ref()
    }

    pub fn active_window(&self) -> Option<&WindowRecord> {
        self.active_window_id.as_ref().and_then(|id| self.get(id))
    }

    pub fn is_focused(&self, id: &WindowId) -> bool {
        self.active_window_id.as_ref() == Some(id)
    }

    pub fn highest_z_index(&self) -> u32 {
        self.highest_z_index
    }

    pub fn placement(&self) -> PlacementDefaults {
        self.placement
    }

    pub fn mode(&self, id: &WindowId) -> Option<WindowMode> {
        self.get(id).map(WindowRecord::mode)
    }

    /// Non-minimized window drawn in front of all others.
    pub fn topmost_visible(&self) -> Option<&WindowRecord> {
        self.windows
            .iter()
            .filter(|w| !w.is_minimized)
            .max_by_key(|w| w.z_index)
    }

    fn index_of(&self, id: &WindowId) -> Option<usize> {
        self.windows.iter().position(|w| &w.id == id)
    }

    fn find_mut(&mut self, id: &WindowId) -> Option<&mut WindowRecord> {
        self.windows.iter_mut().find(|w| &w.id == id)
    }

    fn next_z_index(&mut self) -> u32 {
        self.highest_z_index = self.highest_z_index.saturating_add(1);
        self.highest_z_index
    }

    fn raise(&mut self, id: &WindowId) {
        let z_index = self.next_z_index();
        if let Some(window) = self.find_mut(id) {
            window.z_index = z_index;
            self.active_window_id = Some(id.clone());
        }
    }

    fn rederive_active(&mut self) {
        self.active_window_id = self.topmost_visible().map(|w| w.id.clone());
    }
}

fn ignored(operation: &str, id: &WindowId) {
    logging::debug_warn!(
        "window registry: {} ignored for unknown window `{}`",
        operation,
        id
    );
}
