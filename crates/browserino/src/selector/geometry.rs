//! Placement of the selector popup relative to the mouse and screen.
//!
//! All coordinates are Cocoa screen coordinates: origin at the bottom-left,
//! y growing upward, the space window frames are set in. The platform layer
//! reports the mouse and the screens' visible frames in this same space.

use crate::platform::types::{Point, Rect};

/// Fixed size of the selector popup.
pub const SELECTOR_WIDTH: f64 = 260.0;
pub const SELECTOR_HEIGHT: f64 = 320.0;

/// Minimum distance kept between the popup and every screen edge.
pub const EDGE_MARGIN: f64 = 20.0;

/// Vertical offset from the cursor, so the popup hangs mostly below the
/// click point instead of being centered on it.
pub const ANCHOR_RISE: f64 = 30.0;

/// Clamp `value` into `[min, max]`. A degenerate range (screen smaller than
/// the popup) pins to `min`.
pub fn clamp(min: f64, max: f64, value: f64) -> f64 {
    if max < min {
        return min;
    }
    value.max(min).min(max)
}

/// The visible frame of the screen containing `mouse`.
///
/// Falls back to the first (main) screen when the mouse is on none, and to a
/// fixed default frame when the platform reports no screens at all.
pub fn screen_under_mouse(mouse: Point, screens: &[Rect]) -> Rect {
    screens
        .iter()
        .copied()
        .find(|screen| screen.contains(mouse))
        .or_else(|| screens.first().copied())
        .unwrap_or_else(|| Rect::new(0.0, 0.0, 1440.0, 900.0))
}

/// Origin for the selector popup: centered horizontally under the cursor,
/// raised so most of the popup sits below the click point, and clamped so
/// the whole rectangle stays inside `screen` with [`EDGE_MARGIN`] to spare.
pub fn selector_origin(mouse: Point, screen: Rect) -> Point {
    Point {
        x: clamp(
            screen.min_x() + EDGE_MARGIN,
            screen.max_x() - SELECTOR_WIDTH - EDGE_MARGIN,
            mouse.x - SELECTOR_WIDTH / 2.0,
        ),
        y: clamp(
            screen.min_y() + EDGE_MARGIN,
            screen.max_y() - SELECTOR_HEIGHT - EDGE_MARGIN,
            mouse.y - (SELECTOR_HEIGHT - ANCHOR_RISE),
        ),
    }
}
