//! Scan-conversion algorithms.
//!
//! Converts continuous geometric primitives into the discrete set of grid
//! cells that approximate them, recording each cell into a
//! [`GridCanvas`](crate::canvas::GridCanvas).
//!
//! # Algorithms
//!
//! - **Slope-intercept interpolation**: naive `y = kx + b` sampling per
//!   integer x; the teaching baseline, degrades for near-vertical lines
//! - **DDA**: per-step real increments along the dominant axis
//! - **Bresenham's Line**: midpoint error criterion, one cell per step along
//!   the dominant axis
//! - **Bresenham's Circle**: one octant computed, mirrored eightfold
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Bresenham, J. E. (1977). "A linear algorithm for incremental digital
//!   display of circular arcs."

mod circle;
mod line;

pub use circle::rasterize_bresenham_circle;
pub use line::{rasterize_bresenham_line, rasterize_dda, rasterize_linear};

use crate::canvas::GridCanvas;
use crate::error::Result;
use crate::geometry::{Circle, Segment};

/// Selects which line-drawing variant [`Segment::rasterize_with`] runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineAlgorithm {
    /// Slope-intercept interpolation (`y = kx + b`); fails on vertical or
    /// right-to-left segments.
    Linear,
    /// Digital Differential Analyzer.
    Dda,
    /// Bresenham's line algorithm, the robust default.
    #[default]
    Bresenham,
}

/// Trait for primitives that can be scan-converted onto a canvas.
pub trait Rasterize {
    /// Rasterize this primitive, marking each covered cell filled.
    ///
    /// # Errors
    ///
    /// Returns an error if a precondition is violated; no cell is marked in
    /// that case.
    fn rasterize(&self, grid: &mut GridCanvas) -> Result<()>;
}

impl Segment {
    /// Rasterize this segment with the chosen line algorithm.
    ///
    /// # Errors
    ///
    /// [`LineAlgorithm::Linear`] rejects vertical segments and endpoints
    /// ordered right to left; the other variants are total.
    pub fn rasterize_with(&self, grid: &mut GridCanvas, algorithm: LineAlgorithm) -> Result<()> {
        let (x0, y0) = (self.start.col, self.start.row);
        let (x1, y1) = (self.end.col, self.end.row);

        match algorithm {
            LineAlgorithm::Linear => rasterize_linear(grid, x0, y0, x1, y1),
            LineAlgorithm::Dda => {
                rasterize_dda(grid, x0, y0, x1, y1);
                Ok(())
            }
            LineAlgorithm::Bresenham => {
                rasterize_bresenham_line(grid, x0, y0, x1, y1);
                Ok(())
            }
        }
    }
}

impl Rasterize for Segment {
    fn rasterize(&self, grid: &mut GridCanvas) -> Result<()> {
        self.rasterize_with(grid, LineAlgorithm::default())
    }
}

impl Rasterize for Circle {
    fn rasterize(&self, grid: &mut GridCanvas) -> Result<()> {
        rasterize_bresenham_circle(grid, self.center.col, self.center.row, self.radius)
    }
}
