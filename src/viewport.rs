//! Pixel-space to cell-space coordinate mapping.
//!
//! A [`Viewport`] describes a fixed-size canvas divided into square cells of
//! a fixed pixel edge, with the mathematical origin at the canvas center and
//! the y axis pointing up. It converts between the three coordinate systems a
//! grid editor juggles: device pixels, grid cells, and the unit coordinates
//! the rasterization algorithms run in. Painting itself stays with the
//! embedding; only the arithmetic lives here.

use crate::error::{Error, Result};
use crate::geometry::Cell;

/// Fixed-size pixel canvas divided into square cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width_px: i32,
    height_px: i32,
    cell_px: i32,
}

impl Viewport {
    /// Create a viewport.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidViewport`] unless all three extents are
    /// positive.
    ///
    /// # Example
    ///
    /// ```
    /// use gridraster::viewport::Viewport;
    ///
    /// let vp = Viewport::new(800, 800, 20)?;
    /// assert_eq!(vp.cols(), 40);
    /// # Ok::<(), gridraster::Error>(())
    /// ```
    pub fn new(width_px: i32, height_px: i32, cell_px: i32) -> Result<Self> {
        if width_px <= 0 || height_px <= 0 || cell_px <= 0 {
            return Err(Error::InvalidViewport {
                width: width_px,
                height: height_px,
                cell: cell_px,
            });
        }

        Ok(Self {
            width_px,
            height_px,
            cell_px,
        })
    }

    /// Canvas width in pixels.
    #[must_use]
    pub const fn width_px(&self) -> i32 {
        self.width_px
    }

    /// Canvas height in pixels.
    #[must_use]
    pub const fn height_px(&self) -> i32 {
        self.height_px
    }

    /// Cell edge length in pixels.
    #[must_use]
    pub const fn cell_px(&self) -> i32 {
        self.cell_px
    }

    /// Number of whole cell columns that fit in the canvas.
    #[must_use]
    pub const fn cols(&self) -> i32 {
        self.width_px / self.cell_px
    }

    /// Number of whole cell rows that fit in the canvas.
    #[must_use]
    pub const fn rows(&self) -> i32 {
        self.height_px / self.cell_px
    }

    /// The cell containing a pixel position.
    ///
    /// Floor division, so positions left of or above the pixel origin land in
    /// negative cells rather than sharing cell 0.
    #[must_use]
    pub const fn cell_at(&self, px: i32, py: i32) -> Cell {
        Cell::new(px.div_euclid(self.cell_px), py.div_euclid(self.cell_px))
    }

    /// Top-left pixel of a cell.
    #[must_use]
    pub const fn cell_origin_px(&self, cell: Cell) -> (i32, i32) {
        (cell.col * self.cell_px, cell.row * self.cell_px)
    }

    /// Pixel offset of the centered axes, snapped down to a cell boundary.
    #[must_use]
    pub const fn origin_offset_px(&self) -> (i32, i32) {
        (
            (self.width_px / 2) / self.cell_px * self.cell_px,
            (self.height_px / 2) / self.cell_px * self.cell_px,
        )
    }

    /// The cell a mathematical unit coordinate occupies.
    ///
    /// Unit coordinates put the origin at the canvas center with y up; cell
    /// rows grow downward. `(0, 0)` maps to the cell just above and right of
    /// the axis crossing.
    #[must_use]
    pub const fn cell_for_unit(&self, ux: i32, uy: i32) -> Cell {
        let px = ux * self.cell_px + self.width_px / 2;
        let py = self.height_px / 2 - (uy + 1) * self.cell_px;
        self.cell_at(px, py)
    }
}
