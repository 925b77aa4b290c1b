//! Geometric primitives shared by the buffer, the mapper and the renderers.
//!
//! [`Point`] lives in logical space. [`ScreenPoint`], [`ScreenRect`] and
//! [`PixelBounds`] live in pixel space, with Y growing downward.

use crate::error::{Error, Result};

/// A point in logical space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X value in logical coordinates.
    pub x: f64,
    /// Y value in logical coordinates.
    pub y: f64,
}

impl Point {
    /// Create a new logical point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// A pixel position on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenPoint {
    /// Column in pixels.
    pub x: i32,
    /// Row in pixels.
    pub y: i32,
}

impl ScreenPoint {
    /// Create a new screen point.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenRect {
    /// Top-left corner.
    pub min: ScreenPoint,
    /// Bottom-right corner.
    pub max: ScreenPoint,
}

impl ScreenRect {
    /// Create a new screen rectangle from corners.
    pub fn new(min: ScreenPoint, max: ScreenPoint) -> Self {
        Self { min, max }
    }

    /// Rectangle width in pixels.
    pub fn width(&self) -> i32 {
        self.max.x - self.min.x
    }

    /// Rectangle height in pixels.
    pub fn height(&self) -> i32 {
        self.max.y - self.min.y
    }

    /// Check whether a point lies inside the rectangle, edges included.
    pub fn contains(&self, point: ScreenPoint) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

/// Largest accepted dimension or padding; pixel coordinates are `i32`.
pub const MAX_PIXELS: u32 = i32::MAX as u32;

/// Size of the drawing surface plus the margin kept free at every edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBounds {
    width: u32,
    height: u32,
    padding: u32,
}

impl PixelBounds {
    /// Create bounds for a `width` x `height` surface.
    ///
    /// Fails when either dimension is zero or any value exceeds [`MAX_PIXELS`].
    /// Padding may exceed half the surface: when it leaves no drawable area
    /// the mapper pins every point to the padding edge.
    pub fn new(width: u32, height: u32, padding: u32) -> Result<Self> {
        if width == 0 {
            return Err(Error::invalid("pixel_width", "must be positive, got 0"));
        }
        if height == 0 {
            return Err(Error::invalid("pixel_height", "must be positive, got 0"));
        }
        for (field, value) in [
            ("pixel_width", width),
            ("pixel_height", height),
            ("padding", padding),
        ] {
            if value > MAX_PIXELS {
                return Err(Error::invalid(
                    field,
                    format!("must not exceed {MAX_PIXELS}, got {value}"),
                ));
            }
        }
        Ok(Self {
            width,
            height,
            padding,
        })
    }

    /// Surface width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Surface height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Margin at each edge in pixels.
    pub fn padding(&self) -> u32 {
        self.padding
    }

    /// Width of the mapped area, or a non-positive value if padding eats it.
    pub fn drawable_width(&self) -> i64 {
        i64::from(self.width) - 2 * i64::from(self.padding)
    }

    /// Height of the mapped area, or a non-positive value if padding eats it.
    pub fn drawable_height(&self) -> i64 {
        i64::from(self.height) - 2 * i64::from(self.padding)
    }

    /// The padded drawable rectangle.
    pub fn drawable_rect(&self) -> ScreenRect {
        let pad = self.padding as i32;
        let width = self.drawable_width().max(0) as i32;
        let height = self.drawable_height().max(0) as i32;
        ScreenRect::new(
            ScreenPoint::new(pad, pad),
            ScreenPoint::new(pad + width, pad + height),
        )
    }

    /// Same surface with new dimensions, keeping the padding.
    pub fn resized(&self, width: u32, height: u32) -> Result<Self> {
        Self::new(width, height, self.padding)
    }
}
