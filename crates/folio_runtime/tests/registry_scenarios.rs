use std::collections::{HashMap, HashSet};

use folio_app_contract::AppType;
use folio_runtime::{
    default_window_size, geometry::Viewport, reduce_desktop, DesktopAction, DesktopState,
    InteractionState, LayoutConfig, OpenWindowRequest, PlacementDefaults, PointerPosition,
    Position, Size, WindowId, WindowRegistry,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn registry() -> WindowRegistry {
    WindowRegistry::new(PlacementDefaults::default())
}

fn request(id: &str) -> OpenWindowRequest {
    OpenWindowRequest::new(id, id.to_uppercase(), "window", AppType::About)
}

fn id(raw: &str) -> WindowId {
    WindowId::from(raw)
}

#[test]
fn focus_follows_the_stack_as_windows_leave() {
    let mut registry = registry();
    for name in ["a", "b", "c"] {
        registry.open(request(name));
    }
    assert_eq!(registry.active_window_id(), Some(&id("c")));
    let c_z = registry.get(&id("c")).unwrap().z_index;
    assert!(registry.windows().iter().all(|w| w.z_index <= c_z));

    registry.minimize(&id("c"));
    assert_eq!(registry.active_window_id(), Some(&id("b")));

    registry.close(&id("b"));
    assert_eq!(registry.active_window_id(), Some(&id("a")));

    registry.close(&id("a"));
    assert_eq!(registry.active_window_id(), None);
}

#[test]
fn player_without_explicit_size_gets_its_own_default() {
    let mut registry = registry();
    registry.open(OpenWindowRequest::new("x", "Radio", "music", AppType::Player));

    let size = registry.get(&id("x")).unwrap().size;
    assert_eq!(Some(size), default_window_size(AppType::Player));
    assert_ne!(size, PlacementDefaults::default().fallback_size);
}

#[test]
fn minimizing_the_only_window_clears_focus() {
    let mut registry = registry();
    registry.open(request("solo"));
    registry.minimize(&id("solo"));
    assert_eq!(registry.active_window_id(), None);
}

#[test]
fn reopening_a_minimized_window_restores_and_raises_it() {
    let mut registry = registry();
    registry.open(request("a"));
    registry.open(request("b"));
    registry.minimize(&id("a"));
    registry.open(request("c"));

    registry.open(request("a"));
    let a = registry.get(&id("a")).unwrap();
    assert!(!a.is_minimized);
    assert_eq!(registry.active_window_id(), Some(&id("a")));
    assert!(registry
        .windows()
        .iter()
        .filter(|w| w.id != a.id)
        .all(|w| w.z_index < a.z_index));
    assert_eq!(registry.windows().len(), 3);
}

#[test]
fn maximize_round_trips_geometry() {
    let mut registry = registry();
    registry.open(
        request("a")
            .with_position(Position { x: 300, y: 200 })
            .with_size(Size {
                width: 500,
                height: 350,
            }),
    );
    let before = registry.get(&id("a")).cloned().unwrap();

    registry.maximize(&id("a"));
    registry.restore(&id("a"));
    let after = registry.get(&id("a")).unwrap();
    assert_eq!((after.position, after.size), (before.position, before.size));
    assert!(!after.is_maximized);

    registry.toggle_maximize(&id("a"));
    registry.toggle_maximize(&id("a"));
    let after = registry.get(&id("a")).unwrap();
    assert_eq!((after.position, after.size), (before.position, before.size));
}

fn desktop() -> (DesktopState, InteractionState) {
    (
        DesktopState::new(
            LayoutConfig::default(),
            Viewport {
                width: 1280,
                height: 800,
            },
        ),
        InteractionState::default(),
    )
}

fn drag(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    window_id: &WindowId,
    from: PointerPosition,
    to: PointerPosition,
) {
    reduce_desktop(
        state,
        interaction,
        DesktopAction::BeginMove {
            window_id: window_id.clone(),
            pointer: from,
        },
    );
    reduce_desktop(state, interaction, DesktopAction::UpdateMove { pointer: to });
    reduce_desktop(state, interaction, DesktopAction::EndMove);
}

#[test]
fn releasing_a_drag_inside_bounds_commits_the_exact_point() {
    let (mut state, mut interaction) = desktop();
    let about = id("about");
    reduce_desktop(
        &mut state,
        &mut interaction,
        DesktopAction::OpenWindow(OpenWindowRequest::for_app(AppType::About)),
    );
    assert_eq!(
        state.registry.get(&about).unwrap().position,
        Position { x: 120, y: 60 }
    );

    drag(
        &mut state,
        &mut interaction,
        &about,
        PointerPosition { x: 200, y: 100 },
        PointerPosition { x: 500, y: 300 },
    );
    assert_eq!(
        state.registry.get(&about).unwrap().position,
        Position { x: 420, y: 260 }
    );
    assert!(interaction.is_idle());
}

#[test]
fn releasing_a_drag_under_the_dock_and_top_bar_clamps_to_the_margins() {
    let (mut state, mut interaction) = desktop();
    let about = id("about");
    reduce_desktop(
        &mut state,
        &mut interaction,
        DesktopAction::OpenWindow(OpenWindowRequest::for_app(AppType::About)),
    );

    drag(
        &mut state,
        &mut interaction,
        &about,
        PointerPosition { x: 200, y: 100 },
        PointerPosition { x: -900, y: -900 },
    );
    let layout = LayoutConfig::default();
    assert_eq!(
        state.registry.get(&about).unwrap().position,
        Position {
            x: layout.dock_width,
            y: layout.top_bar_height,
        }
    );
}

#[test]
fn cancelled_drag_leaves_position_untouched() {
    let (mut state, mut interaction) = desktop();
    let about = id("about");
    reduce_desktop(
        &mut state,
        &mut interaction,
        DesktopAction::OpenWindow(OpenWindowRequest::for_app(AppType::About)),
    );
    let before = state.registry.get(&about).unwrap().position;

    reduce_desktop(
        &mut state,
        &mut interaction,
        DesktopAction::BeginMove {
            window_id: about.clone(),
            pointer: PointerPosition { x: 200, y: 100 },
        },
    );
    reduce_desktop(
        &mut state,
        &mut interaction,
        DesktopAction::UpdateMove {
            pointer: PointerPosition { x: 400, y: 200 },
        },
    );
    reduce_desktop(&mut state, &mut interaction, DesktopAction::CancelInteraction);
    reduce_desktop(&mut state, &mut interaction, DesktopAction::EndMove);

    assert_eq!(state.registry.get(&about).unwrap().position, before);
}

#[derive(Debug, Clone)]
enum RegistryOp {
    Open(usize),
    Close(usize),
    Minimize(usize),
    Restore(usize),
    Maximize(usize),
    ToggleMaximize(usize),
    Focus(usize),
    Move(usize, Position),
    CloseAll,
}

const POOL: [&str; 5] = ["about", "terminal", "player", "ghost", "projects"];

fn op_strategy() -> impl Strategy<Value = RegistryOp> {
    let slot = 0..POOL.len();
    prop_oneof![
        2 => slot.clone().prop_map(RegistryOp::Open),
        1 => slot.clone().prop_map(RegistryOp::Close),
        1 => slot.clone().prop_map(RegistryOp::Minimize),
        1 => slot.clone().prop_map(RegistryOp::Restore),
        1 => slot.clone().prop_map(RegistryOp::Maximize),
        1 => slot.clone().prop_map(RegistryOp::ToggleMaximize),
        1 => slot.clone().prop_map(RegistryOp::Focus),
        1 => (slot, 0..900i32, 0..600i32)
            .prop_map(|(slot, x, y)| RegistryOp::Move(slot, Position { x, y })),
        1 => Just(RegistryOp::CloseAll),
    ]
}

fn apply(registry: &mut WindowRegistry, op: &RegistryOp) {
    match *op {
        RegistryOp::Open(slot) => registry.open(request(POOL[slot])),
        RegistryOp::Close(slot) => registry.close(&id(POOL[slot])),
        RegistryOp::Minimize(slot) => registry.minimize(&id(POOL[slot])),
        RegistryOp::Restore(slot) => registry.restore(&id(POOL[slot])),
        RegistryOp::Maximize(slot) => registry.maximize(&id(POOL[slot])),
        RegistryOp::ToggleMaximize(slot) => registry.toggle_maximize(&id(POOL[slot])),
        RegistryOp::Focus(slot) => registry.focus(&id(POOL[slot])),
        RegistryOp::Move(slot, position) => registry.update_position(&id(POOL[slot]), position),
        RegistryOp::CloseAll => registry.close_all(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn operation_sequences_keep_registry_invariants(
        ops in prop::collection::vec(op_strategy(), 1..200)
    ) {
        let mut registry = registry();
        let mut highest_seen = 0;
        let mut owners: HashMap<u32, WindowId> = HashMap::new();

        for (step, op) in ops.iter().enumerate() {
            apply(&mut registry, op);

            let ids = registry.open_ids();
            let unique: HashSet<_> = ids.iter().collect();
            prop_assert_eq!(unique.len(), ids.len(), "step {}: duplicate id", step);

            if let Some(active) = registry.active_window_id() {
                let window = registry.get(active);
                prop_assert!(window.is_some(), "step {}: dangling active id", step);
                prop_assert!(
                    window.map(|w| !w.is_minimized).unwrap_or(false),
                    "step {}: active window is minimized",
                    step
                );
            }
            prop_assert_eq!(
                registry.active_window_id().cloned(),
                registry.topmost_visible().map(|w| w.id.clone()),
                "step {}: active window is not the front visible window after {:?}",
                step,
                op
            );

            prop_assert!(registry.highest_z_index() >= highest_seen);
            highest_seen = registry.highest_z_index();
            let stacking: HashSet<_> = registry.windows().iter().map(|w| w.z_index).collect();
            prop_assert_eq!(stacking.len(), registry.windows().len(), "step {}: shared z-index", step);
            for window in registry.windows() {
                prop_assert!(window.z_index <= highest_seen);
                let owner = owners.entry(window.z_index).or_insert_with(|| window.id.clone());
                prop_assert_eq!(&*owner, &window.id, "step {}: z-index {} reused", step, window.z_index);
            }
        }
    }
}
