//! Circle scan-conversion with Bresenham's midpoint algorithm.

use crate::canvas::GridCanvas;
use crate::error::{Error, Result};
use crate::geometry::Cell;

/// Rasterize a circle outline with Bresenham's midpoint algorithm.
///
/// Walks one octant from `(0, r)` toward the `x == y` diagonal, deciding at
/// each step whether to stay on the current row or drop one, and mirrors each
/// point eightfold around the center. Cells that coincide under reflection
/// (on the axes and the diagonals) deduplicate through the canvas's set
/// semantics. Terminates in O(r) iterations; radius 0 marks only the center.
///
/// # Errors
///
/// [`Error::NegativeRadius`] if `radius < 0`; no cell is marked in that case.
pub fn rasterize_bresenham_circle(grid: &mut GridCanvas, cx: i32, cy: i32, radius: i32) -> Result<()> {
    if radius < 0 {
        return Err(Error::NegativeRadius { radius });
    }

    let mut x = 0;
    let mut y = radius;
    let mut d = 3 - 2 * radius;

    while x <= y {
        mark_octants(grid, cx, cy, x, y);

        if d >= 0 {
            d += 4 * (x - y) + 10;
            y -= 1;
        } else {
            d += 4 * x + 6;
        }
        x += 1;
    }

    Ok(())
}

/// Mark the 8 reflections of an octant point around the center.
fn mark_octants(grid: &mut GridCanvas, cx: i32, cy: i32, x: i32, y: i32) {
    grid.mark_filled(Cell::new(cx + x, cy + y));
    grid.mark_filled(Cell::new(cx - x, cy + y));
    grid.mark_filled(Cell::new(cx + x, cy - y));
    grid.mark_filled(Cell::new(cx - x, cy - y));
    grid.mark_filled(Cell::new(cx + y, cy + x));
    grid.mark_filled(Cell::new(cx - y, cy + x));
    grid.mark_filled(Cell::new(cx + y, cy - x));
    grid.mark_filled(Cell::new(cx - y, cy - x));
}
