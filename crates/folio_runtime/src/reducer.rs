//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.
//!
//! [`reduce_desktop`] is the only code path that mutates the [`WindowRegistry`]. Pointer gestures
//! accumulate candidates in [`InteractionState`] and reach the registry only when they complete.

use std::collections::BTreeMap;

use crate::{
    config::LayoutConfig,
    geometry::{
        drag_enabled, fit_size_to_viewport, resize_size, DeviceClass, DragBounds, Viewport,
    },
    model::{
        DragSession, InteractionState, OpenWindowRequest, PointerPosition, ResizeEdge,
        ResizeSession, WindowId, WindowTransition,
    },
    window_manager::WindowRegistry,
};

#[derive(Debug, Clone, PartialEq)]
pub struct DesktopState {
    pub registry: WindowRegistry,
    pub viewport: Viewport,
    pub layout: LayoutConfig,
    pub transitions: BTreeMap<WindowId, WindowTransition>,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self::new(LayoutConfig::default(), Viewport::default())
    }
}

impl DesktopState {
    pub fn new(layout: LayoutConfig, viewport: Viewport) -> Self {
        Self {
            registry: WindowRegistry::new(layout.placement()),
            viewport,
            layout,
            transitions: BTreeMap::new(),
        }
    }

    pub fn device_class(&self) -> DeviceClass {
        self.layout.breakpoints().classify(self.viewport)
    }

    pub fn transition(&self, window_id: &WindowId) -> Option<WindowTransition> {
        self.transitions.get(window_id).copied()
    }

    /// Windows the shell should mount: all of them on desktop, otherwise only the front window.
    pub fn rendered_window_ids(&self) -> Vec<WindowId> {
        if self.device_class().is_multi_window() {
            self.registry.open_ids()
        } else {
            self.registry
                .topmost_visible()
                .map(|w| vec![w.id.clone()])
                .unwrap_or_default()
        }
    }

    fn drag_bounds(&self, window_id: &WindowId) -> Option<DragBounds> {
        let window = self.registry.get(window_id)?;
        Some(DragBounds::compute(
            self.viewport,
            self.layout.insets(),
            window.size,
        ))
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`].
pub enum DesktopAction {
    /// Open a window, or focus/restore the open window with the same id.
    OpenWindow(OpenWindowRequest),
    CloseWindow {
        window_id: WindowId,
    },
    FocusWindow {
        window_id: WindowId,
    },
    /// Minimize immediately, skipping any animation.
    MinimizeWindow {
        window_id: WindowId,
    },
    RestoreWindow {
        window_id: WindowId,
    },
    MaximizeWindow {
        window_id: WindowId,
    },
    ToggleMaximize {
        window_id: WindowId,
    },
    CloseAll,
    /// Start the minimize animation; the registry is updated by [`DesktopAction::FinishTransition`].
    BeginMinimize {
        window_id: WindowId,
    },
    FinishTransition {
        window_id: WindowId,
    },
    BeginMove {
        window_id: WindowId,
        pointer: PointerPosition,
    },
    UpdateMove {
        pointer: PointerPosition,
    },
    /// Commit the in-flight drag.
    EndMove,
    BeginResize {
        window_id: WindowId,
        edge: ResizeEdge,
        pointer: PointerPosition,
    },
    UpdateResize {
        pointer: PointerPosition,
    },
    /// Commit the in-flight resize.
    EndResize,
    /// Drop any in-flight gesture without committing it.
    CancelInteraction,
    SetViewport(Viewport),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Dispatch [`DesktopAction::FinishTransition`] after `after_ms` if the animation end event
    /// has not already done so.
    ScheduleTransitionEnd { window_id: WindowId, after_ms: u32 },
}

/// Applies a [`DesktopAction`] and returns the side effects the shell must run.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Vec<RuntimeEffect> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenWindow(request) => {
            state.transitions.remove(&request.id);
            state.registry.open(request);
        }
        DesktopAction::CloseWindow { window_id } => {
            interaction.abandon_window(&window_id);
            state.transitions.remove(&window_id);
            state.registry.close(&window_id);
        }
        DesktopAction::FocusWindow { window_id } => {
            state.registry.focus(&window_id);
        }
        DesktopAction::MinimizeWindow { window_id } => {
            interaction.abandon_window(&window_id);
            state.transitions.remove(&window_id);
            state.registry.minimize(&window_id);
        }
        DesktopAction::RestoreWindow { window_id } => {
            state.transitions.remove(&window_id);
            state.registry.restore(&window_id);
        }
        DesktopAction::MaximizeWindow { window_id } => {
            interaction.abandon_window(&window_id);
            state.transitions.remove(&window_id);
            state.registry.maximize(&window_id);
        }
        DesktopAction::ToggleMaximize { window_id } => {
            interaction.abandon_window(&window_id);
            state.transitions.remove(&window_id);
            state.registry.toggle_maximize(&window_id);
        }
        DesktopAction::CloseAll => {
            *interaction = InteractionState::default();
            state.transitions.clear();
            state.registry.close_all();
        }
        DesktopAction::BeginMinimize { window_id } => {
            let visible = state
                .registry
                .get(&window_id)
                .map(|w| !w.is_minimized)
                .unwrap_or(false);
            if visible {
                interaction.abandon_window(&window_id);
                let after_ms = state.layout.minimize_animation_ms;
                if after_ms == 0 {
                    state.registry.minimize(&window_id);
                } else {
                    state
                        .transitions
                        .insert(window_id.clone(), WindowTransition::Minimizing);
                    effects.push(RuntimeEffect::ScheduleTransitionEnd {
                        window_id,
                        after_ms,
                    });
                }
            }
        }
        DesktopAction::FinishTransition { window_id } => {
            if let Some(WindowTransition::Minimizing) = state.transitions.remove(&window_id) {
                state.registry.minimize(&window_id);
            }
        }
        DesktopAction::BeginMove { window_id, pointer } => {
            state.registry.focus(&window_id);
            let Some(window) = state.registry.get(&window_id) else {
                return effects;
            };
            if drag_enabled(window, state.device_class())
                && !state.transitions.contains_key(&window_id)
            {
                interaction.resizing = None;
                interaction.dragging = Some(DragSession {
                    window_id,
                    pointer_start: pointer,
                    position_start: window.position,
                    candidate: window.position,
                });
            }
        }
        DesktopAction::UpdateMove { pointer } => {
            if let Some(session) = interaction.dragging.as_mut() {
                match state.drag_bounds(&session.window_id) {
                    Some(bounds) => {
                        let dx = pointer.x.saturating_sub(session.pointer_start.x);
                        let dy = pointer.y.saturating_sub(session.pointer_start.y);
                        session.candidate = bounds.clamp(session.position_start.offset(dx, dy));
                    }
                    // window closed mid-gesture
                    None => interaction.dragging = None,
                }
            }
        }
        DesktopAction::EndMove => {
            if let Some(session) = interaction.dragging.take() {
                if let Some(bounds) = state.drag_bounds(&session.window_id) {
                    let position = bounds.clamp(session.candidate);
                    if position != session.position_start {
                        state.registry.update_position(&session.window_id, position);
                    }
                }
            }
        }
        DesktopAction::BeginResize {
            window_id,
            edge,
            pointer,
        } => {
            state.registry.focus(&window_id);
            let Some(window) = state.registry.get(&window_id) else {
                return effects;
            };
            if drag_enabled(window, state.device_class())
                && !state.transitions.contains_key(&window_id)
            {
                interaction.dragging = None;
                interaction.resizing = Some(ResizeSession {
                    window_id,
                    edge,
                    pointer_start: pointer,
                    size_start: window.size,
                    candidate: window.size,
                });
            }
        }
        DesktopAction::UpdateResize { pointer } => {
            if let Some(session) = interaction.resizing.as_mut() {
                match state.registry.get(&session.window_id) {
                    Some(window) => {
                        let dx = pointer.x.saturating_sub(session.pointer_start.x);
                        let dy = pointer.y.saturating_sub(session.pointer_start.y);
                        let resized = resize_size(session.size_start, session.edge, dx, dy);
                        session.candidate =
                            fit_size_to_viewport(resized, window.position, state.viewport);
                    }
                    None => interaction.resizing = None,
                }
            }
        }
        DesktopAction::EndResize => {
            if let Some(session) = interaction.resizing.take() {
                if session.candidate != session.size_start {
                    state
                        .registry
                        .update_size(&session.window_id, session.candidate);
                }
            }
        }
        DesktopAction::CancelInteraction => {
            *interaction = InteractionState::default();
        }
        DesktopAction::SetViewport(viewport) => {
            if viewport != state.viewport {
                state.viewport = viewport;
                if !state.device_class().is_multi_window() {
                    *interaction = InteractionState::default();
                }
                if let Some(session) = interaction.dragging.as_mut() {
                    if let Some(bounds) = state.drag_bounds(&session.window_id) {
                        session.candidate = bounds.clamp(session.candidate);
                    }
                }
            }
        }
    }

    effects
}
