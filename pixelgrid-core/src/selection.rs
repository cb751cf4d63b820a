//! Drag-selection snapping.

use crate::{GridConfig, GridRect, Point};

/// Snap the rectangle spanned by `anchor` and `current` to the snap unit.
///
/// The lower corner is floored and the upper corner ceiled to the snap unit,
/// so the result always covers both points: a drag from 108 to 112 selects
/// `[100, 120)`. A click (`anchor == current`) selects nothing and yields a
/// zero-size rect at the floored corner. Both points are logical and
/// expected to be clamped to the grid already; the result is clipped to the
/// grid as well.
pub fn snap_selection(anchor: Point, current: Point, config: &GridConfig) -> GridRect {
    let snap = config.snap_unit.max(1) as f64;
    let grid = config.grid_size as f64;
    let is_click = anchor == current;

    let snap_axis = |a: f64, b: f64| -> (u32, u32) {
        let lo = ((a.min(b) / snap).floor() * snap).clamp(0.0, grid);
        if is_click {
            return (lo as u32, 0);
        }
        let hi = ((a.max(b) / snap).ceil() * snap).clamp(lo, grid);
        (lo as u32, (hi - lo) as u32)
    };

    let (x, width) = snap_axis(anchor.x, current.x);
    let (y, height) = snap_axis(anchor.y, current.y);
    GridRect::new(x, y, width, height)
}
