//! Line scan-conversion: slope-intercept, DDA, and Bresenham variants.

use crate::canvas::GridCanvas;
use crate::error::{Error, Result};
use crate::geometry::Cell;

/// Round to the nearest integer, ties toward positive infinity.
///
/// Half-up rounding differs from `f64::round` at negative halves:
/// `snap(-0.5) == 0` where `(-0.5f64).round() == -1.0`.
#[inline]
fn snap(v: f64) -> i32 {
    (v + 0.5).floor() as i32
}

/// Rasterize a line by naive slope-intercept interpolation.
///
/// Computes `k = dy/dx` and `b = y0 - k*x0`, then samples `y = kx + b` at
/// every integer x in `x0..=x1`, snapping y to the nearest row. The teaching
/// baseline: one cell per column regardless of slope, so near-vertical lines
/// come out sparse. Use [`rasterize_dda`] or [`rasterize_bresenham_line`]
/// for arbitrary segments.
///
/// # Errors
///
/// - [`Error::VerticalSlope`] if `x0 == x1`
/// - [`Error::UnorderedEndpoints`] if `x0 > x1`
///
/// No cell is marked when an error is returned.
pub fn rasterize_linear(grid: &mut GridCanvas, x0: i32, y0: i32, x1: i32, y1: i32) -> Result<()> {
    if x0 == x1 {
        return Err(Error::VerticalSlope { x: x0 });
    }
    if x0 > x1 {
        return Err(Error::UnorderedEndpoints { x0, x1 });
    }

    let k = f64::from(y1 - y0) / f64::from(x1 - x0);
    let b = f64::from(y0) - k * f64::from(x0);

    for x in x0..=x1 {
        let y = k * f64::from(x) + b;
        grid.mark_filled(Cell::new(x, snap(y)));
    }

    Ok(())
}

/// Rasterize a line with the Digital Differential Analyzer.
///
/// Walks `max(|dx|, |dy|)` steps from `(x0, y0)`, advancing the real-valued
/// position by `(dx/steps, dy/steps)` and marking the snapped cell at each
/// step. Marks exactly `steps + 1` positions, monotonically advancing along
/// the dominant axis; a zero-length segment marks only the start cell.
pub fn rasterize_dda(grid: &mut GridCanvas, x0: i32, y0: i32, x1: i32, y1: i32) {
    let dx = x1 - x0;
    let dy = y1 - y0;
    let steps = dx.abs().max(dy.abs());

    if steps == 0 {
        grid.mark_filled(Cell::new(x0, y0));
        return;
    }

    let x_step = f64::from(dx) / f64::from(steps);
    let y_step = f64::from(dy) / f64::from(steps);

    let mut x = f64::from(x0);
    let mut y = f64::from(y0);

    for _ in 0..=steps {
        grid.mark_filled(Cell::new(snap(x), snap(y)));
        x += x_step;
        y += y_step;
    }
}

/// Rasterize a line with Bresenham's algorithm.
///
/// Walks one cell per step along the dominant axis, stepping the minor axis
/// whenever the accumulated error crosses the midpoint between rows (or
/// columns, for steep lines). Marks exactly `max(|dx|, |dy|) + 1` cells; a
/// zero-length segment marks only the start cell.
///
/// The error term is accumulated in real arithmetic (`e = dy/dx - 0.5`); the
/// classic integer formulation scales everything by `2*dx` instead.
pub fn rasterize_bresenham_line(grid: &mut GridCanvas, x0: i32, y0: i32, x1: i32, y1: i32) {
    let mut dx = x1 - x0;
    let mut dy = y1 - y0;

    let sx = if dx >= 0 { 1 } else { -1 };
    let sy = if dy >= 0 { 1 } else { -1 };

    dx = dx.abs();
    dy = dy.abs();

    // Always walk the wide axis one cell per step.
    let steep = dy > dx;
    if steep {
        std::mem::swap(&mut dx, &mut dy);
    }

    if dx == 0 {
        grid.mark_filled(Cell::new(x0, y0));
        return;
    }

    let slope = f64::from(dy) / f64::from(dx);
    let mut e = slope - 0.5;

    let mut x = x0;
    let mut y = y0;

    for _ in 0..=dx {
        grid.mark_filled(Cell::new(x, y));

        if e >= 0.0 {
            if steep {
                x += sx;
            } else {
                y += sy;
            }
            e -= 1.0;
        }

        if steep {
            y += sy;
        } else {
            x += sx;
        }
        e += slope;
    }
}
