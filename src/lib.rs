//! # Gridraster
//!
//! Educational scan-conversion library: classic line and circle rasterization
//! over an unbounded integer cell grid.
//!
//! Four algorithms convert a geometric primitive into the discrete set of
//! grid cells it occupies, each recorded into a shared [`GridCanvas`](canvas::GridCanvas):
//!
//! - **Slope-intercept interpolation**: the naive `y = kx + b` baseline,
//!   deliberately the least robust of the three line variants
//! - **DDA**: incremental line drawing with per-step real increments
//! - **Bresenham's line**: one cell per step along the dominant axis,
//!   driven by a midpoint error criterion
//! - **Bresenham's circle**: one octant computed, mirrored eightfold
//!
//! ## Quick Start
//!
//! ```
//! use gridraster::prelude::*;
//!
//! let mut grid = GridCanvas::new();
//! raster::rasterize_bresenham_line(&mut grid, 0, 0, 5, 3);
//! raster::rasterize_bresenham_circle(&mut grid, 0, 0, 4)?;
//!
//! assert!(grid.contains(Cell::new(0, 0)));
//! # Ok::<(), gridraster::Error>(())
//! ```
//!
//! The canvas is the only mutable shared state; the algorithms themselves are
//! pure functions from a primitive request to a finite sequence of
//! [`GridCanvas::mark_filled`](canvas::GridCanvas::mark_filled) calls. A UI
//! embedding supplies the primitive parameters, then reads
//! [`GridCanvas::snapshot`](canvas::GridCanvas::snapshot) to paint — painting
//! and widget wiring are outside this crate.
//!
//! ## Academic References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital
//!   plotter." *IBM Systems Journal*, 4(1), 25-30.
//! - Bresenham, J. E. (1977). "A linear algorithm for incremental digital
//!   display of circular arcs." *Communications of the ACM*, 20(2), 100-106.

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in rasterization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]

// ============================================================================
// Core Modules
// ============================================================================

/// Grid-cell canvas: the single owner of the filled-cell set.
pub mod canvas;

/// Geometric primitives (cells, segments, circles).
pub mod geometry;

/// Scan-conversion algorithms.
pub mod raster;

/// Pixel-space to cell-space coordinate mapping.
pub mod viewport;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for gridraster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```
/// use gridraster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::canvas::GridCanvas;
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{Cell, Circle, Segment};
    pub use crate::raster::{self, LineAlgorithm, Rasterize};
    pub use crate::viewport::Viewport;
}
