//! Error types for gridraster operations.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in gridraster operations.
///
/// Every precondition is checked before the first cell is marked, so a
/// returned error guarantees the canvas was not touched by the failed call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Vertical segment passed to slope-intercept rasterization.
    ///
    /// `y = kx + b` has no finite slope when both endpoints share an x
    /// coordinate; use DDA or Bresenham for vertical segments.
    #[error("vertical segment at x = {x}: slope-intercept form has no finite slope")]
    VerticalSlope {
        /// Shared x coordinate of both endpoints.
        x: i32,
    },

    /// Endpoints out of order for an algorithm that walks x left to right.
    #[error("endpoints out of order: x0 = {x0} exceeds x1 = {x1}")]
    UnorderedEndpoints {
        /// Start x coordinate.
        x0: i32,
        /// End x coordinate.
        x1: i32,
    },

    /// Negative radius passed to circle rasterization.
    #[error("negative radius: {radius}")]
    NegativeRadius {
        /// The rejected radius.
        radius: i32,
    },

    /// Invalid viewport geometry (zero or negative extent or cell size).
    #[error("invalid viewport: {width}x{height} px at {cell}px per cell")]
    InvalidViewport {
        /// Viewport width in pixels.
        width: i32,
        /// Viewport height in pixels.
        height: i32,
        /// Cell edge length in pixels.
        cell: i32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_slope_display() {
        let err = Error::VerticalSlope { x: 7 };
        assert!(err.to_string().contains("x = 7"));
    }

    #[test]
    fn test_unordered_endpoints_display() {
        let err = Error::UnorderedEndpoints { x0: 5, x1: -3 };
        assert!(err.to_string().contains('5'));
        assert!(err.to_string().contains("-3"));
    }

    #[test]
    fn test_negative_radius_display() {
        let err = Error::NegativeRadius { radius: -4 };
        assert!(err.to_string().contains("-4"));
    }

    #[test]
    fn test_errors_are_comparable() {
        assert_eq!(
            Error::NegativeRadius { radius: -1 },
            Error::NegativeRadius { radius: -1 }
        );
        assert_ne!(
            Error::VerticalSlope { x: 0 },
            Error::VerticalSlope { x: 1 }
        );
    }
}
