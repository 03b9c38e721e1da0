//! Runtime provider and context wiring for the desktop shell.
//!
//! The provider owns the one [`WindowRegistry`](crate::window_manager::WindowRegistry) instance for
//! the page session (inside [`DesktopState`]) and hands it to descendants through Leptos context.
//! UI composition stays in [`crate::components`].

use leptos::*;

use crate::{
    config::ShellConfig,
    effect_executor,
    geometry::DeviceClass,
    model::InteractionState,
    reducer::{reduce_desktop, DesktopAction, DesktopState, RuntimeEffect},
    viewport,
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Shell configuration loaded at provider construction.
    pub config: StoredValue<ShellConfig>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive pointer drag/resize state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of runtime effects emitted by the reducer.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Device class for the current viewport, tracked reactively.
    pub fn device_class(&self) -> DeviceClass {
        self.state.with(DesktopState::device_class)
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
pub fn DesktopProvider(
    /// Shell configuration; defaults to the configuration embedded at build time.
    #[prop(optional)]
    config: Option<ShellConfig>,
    children: Children,
) -> impl IntoView {
    let config = config.unwrap_or_else(ShellConfig::load_or_default);
    let mut layout = config.layout.clone();
    if viewport::prefers_reduced_motion() {
        layout.minimize_animation_ms = 0;
    }

    let state = create_rw_signal(DesktopState::new(layout, viewport::current_viewport()));
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut ui = interaction.get_untracked();
        let previous_desktop = desktop.clone();
        let previous_ui = ui.clone();

        let new_effects = reduce_desktop(&mut desktop, &mut ui, action);
        if desktop != previous_desktop {
            state.set(desktop);
        }
        if ui != previous_ui {
            interaction.set(ui);
        }
        if !new_effects.is_empty() {
            effects.update(|queue| queue.extend(new_effects));
        }
    });

    let runtime = DesktopRuntimeContext {
        config: store_value(config),
        state,
        interaction,
        effects,
        dispatch,
    };

    provide_context(runtime);
    effect_executor::install(runtime);

    let resize_listener = window_event_listener(ev::resize, move |_| {
        runtime.dispatch_action(DesktopAction::SetViewport(viewport::current_viewport()));
    });
    on_cleanup(move || resize_listener.remove());

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
