//! The point panel: a buffer-owning sink that knows how to describe itself.
//!
//! A [`PointsPanel`] subscribes to a [`PointSource`](crate::source::PointSource),
//! keeps the most recent points and asks its host to repaint after every
//! change. It never draws; [`PointsPanel::frame`] produces a render list that a
//! backend replays.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use crate::buffer::{PointBuffer, RedrawRequest};
use crate::config::PanelConfig;
use crate::error::Result;
use crate::geom::{PixelBounds, Point};
use crate::render::{RenderList, build_frame};
use crate::source::PointSink;
use crate::style::Theme;
use crate::transform::Transform;
use crate::view::LogicalRange;

/// Redraw request that raises a flag for a polling render loop.
///
/// Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct RedrawFlag {
    dirty: Arc<AtomicBool>,
}

impl RedrawFlag {
    /// Create a lowered flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lower the flag, returning whether a redraw was pending.
    pub fn take(&self) -> bool {
        self.dirty.swap(false, Ordering::AcqRel)
    }

    /// Check the flag without lowering it.
    pub fn is_set(&self) -> bool {
        self.dirty.load(Ordering::Acquire)
    }
}

impl RedrawRequest for RedrawFlag {
    fn request_redraw(&self) {
        self.dirty.store(true, Ordering::Release);
    }
}

/// Bounded live view of the most recent points.
pub struct PointsPanel {
    buffer: PointBuffer,
    range: RwLock<LogicalRange>,
    bounds: RwLock<PixelBounds>,
    theme: Theme,
    redraw: Option<Arc<dyn RedrawRequest>>,
}

impl PointsPanel {
    /// Build a panel without a redraw hook.
    pub fn new(config: &PanelConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            buffer: PointBuffer::new(config.capacity)?,
            range: RwLock::new(config.range()?),
            bounds: RwLock::new(config.bounds()?),
            theme: Theme::default(),
            redraw: None,
        })
    }

    /// Build a panel that calls `redraw` whenever its contents or range change.
    pub fn with_redraw(config: &PanelConfig, redraw: impl RedrawRequest + 'static) -> Result<Self> {
        config.validate()?;
        let redraw: Arc<dyn RedrawRequest> = Arc::new(redraw);
        let hook = Arc::clone(&redraw);
        let buffer = PointBuffer::with_redraw(config.capacity, move || hook.request_redraw())?;
        log::debug!(
            "panel {}x{} capacity {}",
            config.pixel_width,
            config.pixel_height,
            config.capacity
        );
        Ok(Self {
            buffer,
            range: RwLock::new(config.range()?),
            bounds: RwLock::new(config.bounds()?),
            theme: Theme::default(),
            redraw: Some(redraw),
        })
    }

    /// Append a point directly, bypassing any source.
    pub fn push(&self, point: Point) {
        self.buffer.append(point);
    }

    /// Copy of the retained points, oldest first.
    pub fn snapshot(&self) -> Vec<Point> {
        self.buffer.snapshot()
    }

    /// Access the underlying buffer.
    pub fn buffer(&self) -> &PointBuffer {
        &self.buffer
    }

    /// Maximum number of retained points.
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Displayed logical range.
    pub fn range(&self) -> LogicalRange {
        *self
            .range
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Replace the displayed range. Buffered points are kept as they are.
    pub fn set_range(&self, range: LogicalRange) {
        *self
            .range
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = range;
        log::debug!("panel range set to {range:?}");
        self.request_redraw();
    }

    /// Current surface bounds.
    pub fn bounds(&self) -> PixelBounds {
        *self
            .bounds
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Adopt a new surface size, keeping the padding.
    pub fn resize(&self, width: u32, height: u32) -> Result<()> {
        let mut bounds = self
            .bounds
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let next = bounds.resized(width, height)?;
        if next != *bounds {
            *bounds = next;
            drop(bounds);
            self.request_redraw();
        }
        Ok(())
    }

    /// Access the theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Mapping for the current range and bounds.
    pub fn transform(&self) -> Transform {
        Transform::new(self.range(), self.bounds())
    }

    /// Describe the panel as render commands for the current state.
    pub fn frame(&self) -> RenderList {
        let points = self.buffer.snapshot();
        build_frame(&points, self.capacity(), &self.transform(), &self.theme)
    }

    fn request_redraw(&self) {
        if let Some(redraw) = &self.redraw {
            redraw.request_redraw();
        }
    }
}

impl PointSink for PointsPanel {
    fn on_point(&self, point: Point) {
        self.buffer.append(point);
    }
}

impl fmt::Debug for PointsPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointsPanel")
            .field("buffer", &self.buffer)
            .field("range", &self.range())
            .field("bounds", &self.bounds())
            .finish()
    }
}
