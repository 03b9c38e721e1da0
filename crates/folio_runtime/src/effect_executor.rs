//! Explicit runtime effect-queue executor for reducer-emitted side effects.

use std::time::Duration;

use leptos::*;

use crate::{
    reducer::{DesktopAction, RuntimeEffect},
    runtime_context::DesktopRuntimeContext,
};

/// Installs the effect executor that drains reducer-emitted runtime effects in order.
pub fn install(runtime: DesktopRuntimeContext) {
    // Clear the queue before running so nested dispatches enqueue a fresh batch.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        for effect in queued {
            run_runtime_effect(runtime, effect);
        }
    });
}

fn run_runtime_effect(runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
    match effect {
        RuntimeEffect::ScheduleTransitionEnd {
            window_id,
            after_ms,
        } => {
            let scheduled_id = window_id.clone();
            let finish = move || {
                runtime.dispatch_action(DesktopAction::FinishTransition {
                    window_id: scheduled_id,
                });
            };
            if let Err(err) =
                set_timeout_with_handle(finish, Duration::from_millis(u64::from(after_ms)))
            {
                logging::warn!("could not schedule transition end, finishing now: {err:?}");
                runtime.dispatch_action(DesktopAction::FinishTransition { window_id });
            }
        }
    }
}
