//! Geometric primitives for scan conversion.
//!
//! Provides the integer cell coordinate and the primitive request types the
//! rasterization algorithms consume.

/// One discrete grid cell, addressed by integer (column, row).
///
/// Cells are unbounded in range; equality is componentwise, which is also
/// what drives set membership in [`GridCanvas`](crate::canvas::GridCanvas).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    /// Column (x) index.
    pub col: i32,
    /// Row (y) index.
    pub row: i32,
}

impl Cell {
    /// The origin cell (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new cell coordinate.
    #[must_use]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// The cell displaced by `(dcol, drow)`.
    #[must_use]
    pub const fn offset(self, dcol: i32, drow: i32) -> Self {
        Self::new(self.col + dcol, self.row + drow)
    }

    /// Chebyshev distance to another cell.
    ///
    /// Two distinct cells are 8-connected neighbors iff this is 1.
    #[must_use]
    pub fn chebyshev(self, other: Self) -> i32 {
        (self.col - other.col).abs().max((self.row - other.row).abs())
    }

    /// Euclidean distance to another cell.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let dx = f64::from(self.col - other.col);
        let dy = f64::from(self.row - other.row);
        (dx * dx + dy * dy).sqrt()
    }
}

/// A line segment between two integer endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Segment {
    /// Start endpoint.
    pub start: Cell,
    /// End endpoint.
    pub end: Cell,
}

impl Segment {
    /// Create a new segment.
    #[must_use]
    pub const fn new(start: Cell, end: Cell) -> Self {
        Self { start, end }
    }

    /// Create a segment from endpoint coordinates.
    #[must_use]
    pub const fn from_coords(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(Cell::new(x0, y0), Cell::new(x1, y1))
    }

    /// Signed x extent.
    #[must_use]
    pub const fn dx(&self) -> i32 {
        self.end.col - self.start.col
    }

    /// Signed y extent.
    #[must_use]
    pub const fn dy(&self) -> i32 {
        self.end.row - self.start.row
    }

    /// Whether both endpoints coincide.
    #[must_use]
    pub const fn is_degenerate(&self) -> bool {
        self.dx() == 0 && self.dy() == 0
    }

    /// Number of steps along the dominant axis.
    ///
    /// Every line algorithm here marks exactly `major_extent() + 1` cells.
    #[must_use]
    pub fn major_extent(&self) -> i32 {
        self.dx().abs().max(self.dy().abs())
    }
}

/// A circle with integer center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Circle {
    /// Center cell.
    pub center: Cell,
    /// Radius in cells; must be non-negative to rasterize.
    pub radius: i32,
}

impl Circle {
    /// Create a new circle.
    #[must_use]
    pub const fn new(center: Cell, radius: i32) -> Self {
        Self { center, radius }
    }

    /// Create a circle from center coordinates and radius.
    #[must_use]
    pub const fn from_coords(cx: i32, cy: i32, radius: i32) -> Self {
        Self::new(Cell::new(cx, cy), radius)
    }
}
