//! Logical ranges.

use crate::error::{Error, Result};
use crate::geom::Point;

/// Numeric range with inclusive bounds and `min < max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    min: f64,
    max: f64,
}

impl Range {
    /// Create a range, rejecting non-finite or empty bounds.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        Self::checked("range", min, max)
    }

    fn checked(field: &'static str, min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(Error::invalid(
                field,
                format!("bounds must be finite, got [{min}, {max}]"),
            ));
        }
        if min >= max {
            return Err(Error::invalid(
                field,
                format!("minimum must be below maximum, got [{min}, {max}]"),
            ));
        }
        Ok(Self { min, max })
    }

    /// Lower bound.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Span of the range. Always positive.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Position of `value` relative to the range, 0.0 at `min` and 1.0 at `max`.
    ///
    /// Values outside the range extrapolate linearly.
    pub fn normalize(&self, value: f64) -> f64 {
        (value - self.min) / self.span()
    }

    /// Check whether the value lies inside the range.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Logical extent on both axes.
///
/// Replaced as a whole; there are no per-bound setters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogicalRange {
    /// X axis range.
    pub x: Range,
    /// Y axis range.
    pub y: Range,
}

impl LogicalRange {
    /// Create a range from explicit bounds.
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Result<Self> {
        Ok(Self {
            x: Range::checked("x range", min_x, max_x)?,
            y: Range::checked("y range", min_y, max_y)?,
        })
    }

    /// Check whether a point lies inside both axes.
    pub fn contains(&self, point: Point) -> bool {
        self.x.contains(point.x) && self.y.contains(point.y)
    }
}
