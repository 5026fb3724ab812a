//! End-to-end scan-conversion tests.
//!
//! Fixed scenarios with independently worked-out expected cell sets, plus
//! property tests over randomized primitives.

#![allow(clippy::unwrap_used)]

use std::collections::HashSet;

use proptest::prelude::*;

use gridraster::canvas::GridCanvas;
use gridraster::geometry::Cell;
use gridraster::raster::{
    rasterize_bresenham_circle, rasterize_bresenham_line, rasterize_dda, rasterize_linear,
};
use gridraster::Error;

fn cell_set(pairs: &[(i32, i32)]) -> HashSet<Cell> {
    pairs.iter().map(|&(c, r)| Cell::new(c, r)).collect()
}

/// Every cell in a set of ≥ 2 has an 8-connected neighbor in the set.
fn is_eight_connected(grid: &GridCanvas) -> bool {
    if grid.len() < 2 {
        return true;
    }
    grid.iter()
        .all(|cell| grid.iter().any(|other| cell.chebyshev(other) == 1))
}

// ============================================================================
// Fixed scenarios
// ============================================================================

#[test]
fn bresenham_line_flat_marks_six_cells() {
    let mut grid = GridCanvas::new();
    rasterize_bresenham_line(&mut grid, 0, 0, 5, 0);

    let expected = cell_set(&[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (5, 0)]);
    assert_eq!(grid.snapshot(), &expected);
}

#[test]
fn bresenham_line_steep_marks_six_cells() {
    let mut grid = GridCanvas::new();
    rasterize_bresenham_line(&mut grid, 0, 0, 0, 5);

    let expected = cell_set(&[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5)]);
    assert_eq!(grid.snapshot(), &expected);
}

#[test]
fn bresenham_circle_radius_three_reference_set() {
    let mut grid = GridCanvas::new();
    rasterize_bresenham_circle(&mut grid, 0, 0, 3).unwrap();

    // Octant walk: (0,3) d=-3, (1,3) d=3, (2,2) d=5, then x > y
    let expected = cell_set(&[
        (0, 3), (0, -3), (3, 0), (-3, 0),
        (1, 3), (-1, 3), (1, -3), (-1, -3),
        (3, 1), (-3, 1), (3, -1), (-3, -1),
        (2, 2), (-2, 2), (2, -2), (-2, -2),
    ]);
    assert_eq!(grid.snapshot(), &expected);
}

#[test]
fn three_line_algorithms_agree_on_gentle_ordered_segment() {
    let (x0, y0, x1, y1) = (0, 0, 8, 3);

    let mut linear = GridCanvas::new();
    rasterize_linear(&mut linear, x0, y0, x1, y1).unwrap();

    let mut dda = GridCanvas::new();
    rasterize_dda(&mut dda, x0, y0, x1, y1);

    let mut bres = GridCanvas::new();
    rasterize_bresenham_line(&mut bres, x0, y0, x1, y1);

    // With |dy| <= dx and x0 <= x1 all three sample once per column
    assert_eq!(linear.len(), 9);
    assert_eq!(dda.len(), 9);
    assert_eq!(bres.len(), 9);
    for grid in [&linear, &dda, &bres] {
        assert!(grid.contains(Cell::new(x0, y0)));
        assert!(grid.contains(Cell::new(x1, y1)));
    }
}

#[test]
fn failed_request_leaves_prior_cells_intact() {
    let mut grid = GridCanvas::new();
    rasterize_bresenham_line(&mut grid, 0, 0, 3, 0);
    let before = grid.snapshot().clone();

    assert_eq!(
        rasterize_linear(&mut grid, 2, 0, 2, 5),
        Err(Error::VerticalSlope { x: 2 })
    );
    assert_eq!(
        rasterize_bresenham_circle(&mut grid, 0, 0, -7),
        Err(Error::NegativeRadius { radius: -7 })
    );
    assert_eq!(grid.snapshot(), &before);
}

#[test]
fn clear_resets_canvas_after_mixed_operations() {
    let mut grid = GridCanvas::new();
    rasterize_dda(&mut grid, -4, -4, 4, 4);
    rasterize_bresenham_circle(&mut grid, 0, 0, 5).unwrap();
    grid.toggle(Cell::new(17, 17));

    grid.clear();
    assert!(grid.is_empty());
    assert!(grid.snapshot().is_empty());
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_dda_marks_at_most_steps_plus_one(
        x0 in -50i32..50, y0 in -50i32..50,
        x1 in -50i32..50, y1 in -50i32..50,
    ) {
        let mut grid = GridCanvas::new();
        rasterize_dda(&mut grid, x0, y0, x1, y1);

        let steps = (x1 - x0).abs().max((y1 - y0).abs());
        // steps + 1 positions marked; the set may deduplicate snapped repeats
        prop_assert!(grid.len() <= (steps + 1) as usize);
        prop_assert!(!grid.is_empty());
        prop_assert!(grid.contains(Cell::new(x0, y0)));
        prop_assert!(grid.contains(Cell::new(x1, y1)));
    }

    #[test]
    fn prop_bresenham_line_spans_dominant_axis(
        x0 in -50i32..50, y0 in -50i32..50,
        x1 in -50i32..50, y1 in -50i32..50,
    ) {
        let mut grid = GridCanvas::new();
        rasterize_bresenham_line(&mut grid, x0, y0, x1, y1);

        let major = (x1 - x0).abs().max((y1 - y0).abs());
        prop_assert_eq!(grid.len(), (major + 1) as usize);
        prop_assert!(grid.contains(Cell::new(x0, y0)));
    }

    #[test]
    fn prop_line_output_is_eight_connected(
        x0 in -30i32..30, y0 in -30i32..30,
        x1 in -30i32..30, y1 in -30i32..30,
    ) {
        let mut bres = GridCanvas::new();
        rasterize_bresenham_line(&mut bres, x0, y0, x1, y1);
        prop_assert!(is_eight_connected(&bres));

        let mut dda = GridCanvas::new();
        rasterize_dda(&mut dda, x0, y0, x1, y1);
        prop_assert!(is_eight_connected(&dda));
    }

    #[test]
    fn prop_linear_agrees_with_ideal_line(
        x0 in -30i32..30, y0 in -30i32..30,
        span in 1i32..40, y1 in -30i32..30,
    ) {
        let x1 = x0 + span;
        let mut grid = GridCanvas::new();
        rasterize_linear(&mut grid, x0, y0, x1, y1).unwrap();

        prop_assert_eq!(grid.len(), (span + 1) as usize);
        let k = f64::from(y1 - y0) / f64::from(span);
        for cell in grid.iter() {
            let ideal = f64::from(y0) + k * f64::from(cell.col - x0);
            // Half-cell bound, slack for the two float evaluations of the line
            prop_assert!((f64::from(cell.row) - ideal).abs() <= 0.5 + 1e-9);
        }
    }

    #[test]
    fn prop_circle_symmetric_and_on_radius(
        cx in -20i32..20, cy in -20i32..20, r in 0i32..30,
    ) {
        let mut grid = GridCanvas::new();
        rasterize_bresenham_circle(&mut grid, cx, cy, r).unwrap();

        let center = Cell::new(cx, cy);
        for cell in grid.iter() {
            let (x, y) = (cell.col - cx, cell.row - cy);
            for (rx, ry) in [
                (x, y), (-x, y), (x, -y), (-x, -y),
                (y, x), (-y, x), (y, -x), (-y, -x),
            ] {
                prop_assert!(grid.contains(Cell::new(cx + rx, cy + ry)));
            }
            let dist = cell.distance(center);
            prop_assert!((dist.round() - f64::from(r)).abs() <= 1.0);
        }
    }

    #[test]
    fn prop_toggle_twice_is_identity(
        cells in proptest::collection::vec((-20i32..20, -20i32..20), 0..40),
        target in (-20i32..20, -20i32..20),
    ) {
        let mut grid = GridCanvas::new();
        for (c, r) in cells {
            grid.mark_filled(Cell::new(c, r));
        }

        let cell = Cell::new(target.0, target.1);
        let before = grid.contains(cell);
        grid.toggle(cell);
        grid.toggle(cell);
        prop_assert_eq!(grid.contains(cell), before);
    }
}
