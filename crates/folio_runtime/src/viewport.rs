//! Browser viewport queries for the presentation layer.

use crate::geometry::Viewport;

/// Current inner size of the browser window. Native builds report [`Viewport::default`].
pub fn current_viewport() -> Viewport {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let fallback = Viewport::default();
            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(fallback.width);
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(fallback.height);

            return Viewport {
                width: width.max(320),
                height: height.max(240),
            };
        }
    }

    Viewport::default()
}

/// Whether the user asked the browser to minimize non-essential motion.
pub fn prefers_reduced_motion() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            return window
                .match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
                .map(|query| query.matches())
                .unwrap_or(false);
        }
    }

    false
}
