//! Fixed-capacity point storage with FIFO eviction.
//!
//! The buffer is the only state written by the producer and read by the render
//! path. A single mutex guards the sequence. It is held for the push/evict or
//! the copy and released before the redraw request fires.

use std::collections::VecDeque;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

use crate::error::{Error, Result};
use crate::geom::Point;

/// Host hook invoked after every append.
///
/// Implementations should only schedule a repaint; they run on the appending
/// thread.
pub trait RedrawRequest: Send + Sync {
    /// Ask the owning surface to repaint.
    fn request_redraw(&self);
}

impl<F> RedrawRequest for F
where
    F: Fn() + Send + Sync,
{
    fn request_redraw(&self) {
        self()
    }
}

// Storage grows with use; `capacity` only bounds it.
const MAX_PREALLOC: usize = 1024;

/// Ordered point sequence holding at most `capacity` points.
pub struct PointBuffer {
    points: Mutex<VecDeque<Point>>,
    capacity: usize,
    generation: AtomicU64,
    redraw: Option<Box<dyn RedrawRequest>>,
}

impl PointBuffer {
    /// Create an empty buffer without a redraw hook.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::invalid("capacity", "must be positive, got 0"));
        }
        Ok(Self {
            points: Mutex::new(VecDeque::with_capacity(capacity.min(MAX_PREALLOC))),
            capacity,
            generation: AtomicU64::new(0),
            redraw: None,
        })
    }

    /// Create an empty buffer that calls `redraw` after every append.
    pub fn with_redraw(capacity: usize, redraw: impl RedrawRequest + 'static) -> Result<Self> {
        let mut buffer = Self::new(capacity)?;
        buffer.redraw = Some(Box::new(redraw));
        Ok(buffer)
    }

    /// Append a point as the newest element, evicting the oldest when full.
    pub fn append(&self, point: Point) {
        {
            let mut points = self.lock();
            if points.len() == self.capacity {
                let evicted = points.pop_front();
                log::trace!("evicted {evicted:?}");
            }
            points.push_back(point);
            self.generation.fetch_add(1, Ordering::Release);
        }
        log::trace!("appended {point:?}");
        if let Some(redraw) = &self.redraw {
            redraw.request_redraw();
        }
    }

    /// Copy of the current contents, oldest first.
    ///
    /// Later appends never touch the returned vector.
    pub fn snapshot(&self) -> Vec<Point> {
        self.lock().iter().copied().collect()
    }

    /// Maximum number of retained points.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of points currently held.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if there are no points.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Number of appends so far (wraps on overflow).
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    // Every mutation is a single push/pop, so a panic elsewhere cannot leave
    // the sequence half-updated and the poisoned guard is safe to reuse.
    fn lock(&self) -> MutexGuard<'_, VecDeque<Point>> {
        self.points
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl fmt::Debug for PointBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointBuffer")
            .field("capacity", &self.capacity)
            .field("len", &self.len())
            .field("generation", &self.generation())
            .field("redraw", &self.redraw.is_some())
            .finish()
    }
}
