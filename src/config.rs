//! Construction-time configuration for a point panel.

use crate::error::{Error, Result};
use crate::geom::PixelBounds;
use crate::view::LogicalRange;

/// Default margin kept free at every edge of the surface.
pub const DEFAULT_PADDING: u32 = 20;

/// Everything a host collects before building a panel.
///
/// Hosts fill this from user input; [`PanelConfig::validate`] decides whether
/// construction may proceed.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelConfig {
    /// Surface width in pixels.
    pub pixel_width: u32,
    /// Surface height in pixels.
    pub pixel_height: u32,
    /// Margin at each edge in pixels.
    pub padding: u32,
    /// Lower X bound.
    pub min_x: f64,
    /// Upper X bound.
    pub max_x: f64,
    /// Lower Y bound.
    pub min_y: f64,
    /// Upper Y bound.
    pub max_y: f64,
    /// Number of most recent points to keep.
    pub capacity: usize,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            pixel_width: 600,
            pixel_height: 400,
            padding: DEFAULT_PADDING,
            min_x: 0.0,
            max_x: 100.0,
            min_y: 0.0,
            max_y: 100.0,
            capacity: 10,
        }
    }
}

impl PanelConfig {
    /// Check every field, reporting the first violation.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(Error::invalid("capacity", "must be positive, got 0"));
        }
        self.bounds()?;
        self.range()?;
        Ok(())
    }

    /// Validated logical range.
    pub fn range(&self) -> Result<LogicalRange> {
        LogicalRange::new(self.min_x, self.max_x, self.min_y, self.max_y)
    }

    /// Validated pixel bounds.
    pub fn bounds(&self) -> Result<PixelBounds> {
        PixelBounds::new(self.pixel_width, self.pixel_height, self.padding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = PanelConfig::default();
        assert!(config.validate().is_ok());
        let bounds = config.bounds().unwrap();
        assert_eq!((bounds.width(), bounds.height()), (600, 400));
        assert_eq!(config.range().unwrap().x.max(), 100.0);
    }

    #[test]
    fn each_invalid_field_is_reported() {
        let cases = [
            (
                PanelConfig {
                    capacity: 0,
                    ..Default::default()
                },
                "capacity",
            ),
            (
                PanelConfig {
                    pixel_width: 0,
                    ..Default::default()
                },
                "pixel_width",
            ),
            (
                PanelConfig {
                    pixel_height: 0,
                    ..Default::default()
                },
                "pixel_height",
            ),
            (
                PanelConfig {
                    min_x: 100.0,
                    ..Default::default()
                },
                "x range",
            ),
            (
                PanelConfig {
                    max_y: -1.0,
                    ..Default::default()
                },
                "y range",
            ),
        ];
        for (config, expected) in cases {
            match config.validate() {
                Err(Error::InvalidConfiguration { field, .. }) => assert_eq!(field, expected),
                other => panic!("expected {expected} error, got {other:?}"),
            }
        }
    }
}
