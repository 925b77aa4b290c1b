//! Coordinate transforms between logical and screen space.
//!
//! The mapping is linear inside the padded drawable area. Screen Y grows
//! downward, so the Y axis is flipped. Out-of-range values are not rejected;
//! they land outside the drawable area.

use crate::geom::{PixelBounds, Point, ScreenPoint};
use crate::view::LogicalRange;

/// Stateless logical-to-pixel mapper.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoordinateMapper;

impl CoordinateMapper {
    /// Map a logical X value to a pixel column.
    pub fn to_screen_x(x: f64, range: &LogicalRange, bounds: &PixelBounds) -> i32 {
        let pad = i64::from(bounds.padding());
        let width = bounds.drawable_width();
        if width <= 0 {
            return saturate(pad);
        }
        let offset = (range.x.normalize(x) * width as f64).round();
        saturate_f64(pad as f64 + offset)
    }

    /// Map a logical Y value to a pixel row.
    pub fn to_screen_y(y: f64, range: &LogicalRange, bounds: &PixelBounds) -> i32 {
        let pad = i64::from(bounds.padding());
        let height = bounds.drawable_height();
        if height <= 0 {
            return saturate(pad);
        }
        let offset = (range.y.normalize(y) * height as f64).round();
        saturate_f64((i64::from(bounds.height()) - pad) as f64 - offset)
    }

    /// Map a logical point to a pixel position.
    pub fn to_screen(point: Point, range: &LogicalRange, bounds: &PixelBounds) -> ScreenPoint {
        ScreenPoint::new(
            Self::to_screen_x(point.x, range, bounds),
            Self::to_screen_y(point.y, range, bounds),
        )
    }

    /// Map a pixel position back into logical space.
    ///
    /// Returns `None` when padding leaves no drawable area.
    pub fn to_logical(
        point: ScreenPoint,
        range: &LogicalRange,
        bounds: &PixelBounds,
    ) -> Option<Point> {
        let width = bounds.drawable_width();
        let height = bounds.drawable_height();
        if width <= 0 || height <= 0 {
            return None;
        }
        let pad = f64::from(bounds.padding());
        let x_norm = (f64::from(point.x) - pad) / width as f64;
        let y_norm = (f64::from(bounds.height()) - pad - f64::from(point.y)) / height as f64;
        Some(Point::new(
            range.x.min() + x_norm * range.x.span(),
            range.y.min() + y_norm * range.y.span(),
        ))
    }
}

/// Range and bounds captured together for mapping a whole frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    range: LogicalRange,
    bounds: PixelBounds,
}

impl Transform {
    /// Bind a range to a surface.
    pub fn new(range: LogicalRange, bounds: PixelBounds) -> Self {
        Self { range, bounds }
    }

    /// Access the logical range.
    pub fn range(&self) -> LogicalRange {
        self.range
    }

    /// Access the pixel bounds.
    pub fn bounds(&self) -> PixelBounds {
        self.bounds
    }

    /// Map a logical point into screen space.
    pub fn data_to_screen(&self, point: Point) -> ScreenPoint {
        CoordinateMapper::to_screen(point, &self.range, &self.bounds)
    }

    /// Map a screen point into logical space.
    pub fn screen_to_data(&self, point: ScreenPoint) -> Option<Point> {
        CoordinateMapper::to_logical(point, &self.range, &self.bounds)
    }
}

fn saturate(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

// `as` saturates on overflow and maps NaN to zero.
fn saturate_f64(value: f64) -> i32 {
    value as i32
}
