//! Screen geometry for the window presentation layer: viewport classification, drag bounds,
//! and the rectangle each window is painted at.

use serde::{Deserialize, Serialize};

use crate::model::{Position, ResizeEdge, Size, WindowRecord};

/// Minimum managed window width.
pub const MIN_WINDOW_WIDTH: i32 = 220;
/// Minimum managed window height.
pub const MIN_WINDOW_HEIGHT: i32 = 140;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 800,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceClass {
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceClass {
    pub fn css_id(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
            Self::Desktop => "desktop",
        }
    }

    /// Whether windows stack and can be dragged, or render one at a time full-screen.
    pub fn is_multi_window(self) -> bool {
        matches!(self, Self::Desktop)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoints {
    pub mobile_max_width: i32,
    pub desktop_min_width: i32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            mobile_max_width: 767,
            desktop_min_width: 1024,
        }
    }
}

impl Breakpoints {
    pub fn classify(&self, viewport: Viewport) -> DeviceClass {
        if viewport.width <= self.mobile_max_width {
            DeviceClass::Mobile
        } else if viewport.width < self.desktop_min_width {
            DeviceClass::Tablet
        } else {
            DeviceClass::Desktop
        }
    }
}

/// Screen strips reserved for the dock (left) and the top navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellInsets {
    pub dock_width: i32,
    pub top_bar_height: i32,
}

impl Default for ShellInsets {
    fn default() -> Self {
        Self {
            dock_width: 80,
            top_bar_height: 32,
        }
    }
}

/// Legal range for a window's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl DragBounds {
    /// Bounds for a window of `size`. A window larger than the free area is pinned to the margins.
    pub fn compute(viewport: Viewport, insets: ShellInsets, size: Size) -> Self {
        let left = insets.dock_width;
        let top = insets.top_bar_height;
        Self {
            left,
            top,
            right: viewport.width.saturating_sub(size.width).max(left),
            bottom: viewport.height.saturating_sub(size.height).max(top),
        }
    }

    pub fn clamp(&self, position: Position) -> Position {
        Position {
            x: position.x.clamp(self.left, self.right),
            y: position.y.clamp(self.top, self.bottom),
        }
    }

    pub fn contains(&self, position: Position) -> bool {
        self.clamp(position) == position
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl ScreenRect {
    pub fn from_parts(position: Position, size: Size) -> Self {
        Self {
            x: position.x,
            y: position.y,
            width: size.width,
            height: size.height,
        }
    }

    pub fn full(viewport: Viewport) -> Self {
        Self {
            x: 0,
            y: 0,
            width: viewport.width,
            height: viewport.height,
        }
    }

    pub fn style(&self, z_index: u32) -> String {
        format!(
            "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
            self.x, self.y, self.width, self.height, z_index
        )
    }
}

/// Rectangle a window is painted at. Maximized windows, and every window on a device below the
/// desktop breakpoint, fill the viewport from the origin.
pub fn render_rect(record: &WindowRecord, viewport: Viewport, device: DeviceClass) -> ScreenRect {
    if record.is_maximized || !device.is_multi_window() {
        ScreenRect::full(viewport)
    } else {
        ScreenRect::from_parts(record.position, record.size)
    }
}

pub fn drag_enabled(record: &WindowRecord, device: DeviceClass) -> bool {
    device.is_multi_window() && !record.is_maximized && !record.is_minimized
}

/// Size after dragging `edge` by `(dx, dy)`, floored at the minimum window size.
pub fn resize_size(start: Size, edge: ResizeEdge, dx: i32, dy: i32) -> Size {
    let resized = match edge {
        ResizeEdge::East => Size {
            width: start.width.saturating_add(dx),
            ..start
        },
        ResizeEdge::South => Size {
            height: start.height.saturating_add(dy),
            ..start
        },
        ResizeEdge::SouthEast => Size {
            width: start.width.saturating_add(dx),
            height: start.height.saturating_add(dy),
        },
    };
    resized.clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)
}

/// Caps `size` so a window at `position` keeps its bottom-right inside the viewport.
pub fn fit_size_to_viewport(size: Size, position: Position, viewport: Viewport) -> Size {
    Size {
        width: size.width.min(viewport.width.saturating_sub(position.x)),
        height: size.height.min(viewport.height.saturating_sub(position.y)),
    }
    .clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)
}

#[cfg(test)]
mod tests {
    use folio_app_contract::AppType;
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    use super::*;
    use crate::model::WindowId;

    const VIEWPORT: Viewport = Viewport {
        width: 1280,
        height: 800,
    };

    fn record(position: Position, size: Size) -> WindowRecord {
        WindowRecord {
            id: WindowId::from("w"),
            title: "W".to_string(),
            icon: "window".to_string(),
            app_type: AppType::About,
            position,
            size,
            is_minimized: false,
            is_maximized: false,
            z_index: 1,
            initial_data: Value::Null,
        }
    }

    #[test]
    fn classifies_viewports_by_breakpoint() {
        let breakpoints = Breakpoints::default();
        let at = |width| breakpoints.classify(Viewport { width, height: 700 });
        assert_eq!(at(375), DeviceClass::Mobile);
        assert_eq!(at(767), DeviceClass::Mobile);
        assert_eq!(at(768), DeviceClass::Tablet);
        assert_eq!(at(1023), DeviceClass::Tablet);
        assert_eq!(at(1024), DeviceClass::Desktop);
    }

    #[test]
    fn bounds_reserve_dock_and_top_bar_and_shrink_with_window_size() {
        let insets = ShellInsets::default();
        let small = DragBounds::compute(VIEWPORT, insets, Size { width: 400, height: 300 });
        let wide = DragBounds::compute(VIEWPORT, insets, Size { width: 900, height: 300 });

        assert_eq!(
            small,
            DragBounds {
                left: 80,
                top: 32,
                right: 880,
                bottom: 500,
            }
        );
        assert_eq!(wide.right, 380);
        assert!(wide.right < small.right);
    }

    #[test]
    fn oversized_window_is_pinned_to_margins() {
        let bounds = DragBounds::compute(
            VIEWPORT,
            ShellInsets::default(),
            Size {
                width: 2000,
                height: 2000,
            },
        );
        assert_eq!(bounds.clamp(Position { x: 500, y: 500 }), Position { x: 80, y: 32 });
    }

    #[test]
    fn clamp_keeps_legal_points_and_moves_illegal_ones_to_nearest_edge() {
        let bounds = DragBounds::compute(VIEWPORT, ShellInsets::default(), Size { width: 400, height: 300 });
        let inside = Position { x: 300, y: 200 };
        assert!(bounds.contains(inside));
        assert_eq!(bounds.clamp(inside), inside);
        assert_eq!(bounds.clamp(Position { x: 10, y: 5 }), Position { x: 80, y: 32 });
        assert_eq!(bounds.clamp(Position { x: 5000, y: 900 }), Position { x: 880, y: 500 });
    }

    #[test]
    fn maximized_and_small_screen_windows_fill_viewport() {
        let mut win = record(Position { x: 200, y: 100 }, Size { width: 400, height: 300 });
        assert_eq!(
            render_rect(&win, VIEWPORT, DeviceClass::Desktop),
            ScreenRect {
                x: 200,
                y: 100,
                width: 400,
                height: 300,
            }
        );
        assert_eq!(render_rect(&win, VIEWPORT, DeviceClass::Mobile), ScreenRect::full(VIEWPORT));

        win.is_maximized = true;
        assert_eq!(render_rect(&win, VIEWPORT, DeviceClass::Desktop), ScreenRect::full(VIEWPORT));
        assert_eq!(win.position, Position { x: 200, y: 100 });
    }

    #[test]
    fn drag_is_disabled_when_maximized_or_below_desktop() {
        let mut win = record(Position::default(), Size { width: 400, height: 300 });
        assert!(drag_enabled(&win, DeviceClass::Desktop));
        assert!(!drag_enabled(&win, DeviceClass::Tablet));
        win.is_maximized = true;
        assert!(!drag_enabled(&win, DeviceClass::Desktop));
    }

    #[test]
    fn extreme_resize_deltas_saturate() {
        let start = Size {
            width: 400,
            height: 300,
        };
        assert_eq!(
            resize_size(start, ResizeEdge::SouthEast, i32::MAX, i32::MAX),
            Size {
                width: i32::MAX,
                height: i32::MAX,
            }
        );
        assert_eq!(
            fit_size_to_viewport(start, Position { x: i32::MIN, y: 0 }, VIEWPORT),
            Size {
                width: 400,
                height: 300,
            }
        );
        assert_eq!(
            Position { x: i32::MAX, y: i32::MIN }.offset(5, -5),
            Position { x: i32::MAX, y: i32::MIN }
        );
    }

    #[test]
    fn resize_respects_edge_and_minimum() {
        let start = Size {
            width: 400,
            height: 300,
        };
        assert_eq!(
            resize_size(start, ResizeEdge::East, 50, 999),
            Size {
                width: 450,
                height: 300,
            }
        );
        assert_eq!(
            resize_size(start, ResizeEdge::SouthEast, -1000, -1000),
            Size {
                width: MIN_WINDOW_WIDTH,
                height: MIN_WINDOW_HEIGHT,
            }
        );
        assert_eq!(
            fit_size_to_viewport(Size { width: 2000, height: 900 }, Position { x: 280, y: 100 }, VIEWPORT),
            Size {
                width: 1000,
                height: 700,
            }
        );
    }
}
