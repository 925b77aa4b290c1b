//! Point producers and the observer contract that connects them to panels.
//!
//! A [`PointSource`] owns an explicit registration list of [`PointSink`]s.
//! Sinks are held weakly: the source never keeps a panel alive, and sinks that
//! were dropped are pruned on the next notification.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock, Weak};

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use crate::geom::Point;
use crate::view::LogicalRange;

/// Receiver of produced points.
///
/// Must accept any finite point, including points outside the current range.
pub trait PointSink: Send + Sync {
    /// Handle one new point.
    fn on_point(&self, point: Point);
}

impl<F> PointSink for F
where
    F: Fn(Point) + Send + Sync,
{
    fn on_point(&self, point: Point) {
        self(point)
    }
}

/// Policy deciding which point a source produces next.
pub trait PointGenerator: Send {
    /// Produce the next point for the given range.
    fn next_point(&mut self, range: &LogicalRange) -> Point;
}

/// Uniform random points inside the range, bounds included.
pub struct UniformGenerator {
    rng: StdRng,
}

impl UniformGenerator {
    /// Generator seeded from the thread-local entropy source.
    pub fn new() -> Self {
        let seed: u64 = rand::rng().random();
        Self::seeded(seed)
    }

    /// Generator with a reproducible sequence.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for UniformGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PointGenerator for UniformGenerator {
    fn next_point(&mut self, range: &LogicalRange) -> Point {
        let x = self.rng.random_range(range.x.min()..=range.x.max());
        let y = self.rng.random_range(range.y.min()..=range.y.max());
        Point::new(x, y)
    }
}

impl<F> PointGenerator for F
where
    F: FnMut(&LogicalRange) -> Point + Send,
{
    fn next_point(&mut self, range: &LogicalRange) -> Point {
        self(range)
    }
}

/// Handle returned by [`PointSource::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Subscriber {
    id: SubscriptionId,
    sink: Weak<dyn PointSink>,
}

/// Observable point producer.
///
/// All methods take `&self`; a source can be shared between a timer thread
/// and a UI thread behind an `Arc`.
pub struct PointSource {
    range: RwLock<LogicalRange>,
    generator: Mutex<Box<dyn PointGenerator>>,
    subscribers: RwLock<Vec<Subscriber>>,
    next_id: AtomicU64,
}

impl PointSource {
    /// Create a source drawing uniform random points from `range`.
    pub fn new(range: LogicalRange) -> Self {
        Self::with_generator(range, UniformGenerator::new())
    }

    /// Create a source with a custom point policy.
    pub fn with_generator(range: LogicalRange, generator: impl PointGenerator + 'static) -> Self {
        Self {
            range: RwLock::new(range),
            generator: Mutex::new(Box::new(generator)),
            subscribers: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Register a sink for every point produced from now on.
    pub fn subscribe<S>(&self, sink: &Arc<S>) -> SubscriptionId
    where
        S: PointSink + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let sink: Weak<S> = Arc::downgrade(sink);
        let sink: Weak<dyn PointSink> = sink;
        let mut subscribers = self
            .subscribers
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        subscribers.push(Subscriber { id, sink });
        log::debug!("subscribed sink {id:?} ({} total)", subscribers.len());
        id
    }

    /// Remove a sink. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self
            .subscribers
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let before = subscribers.len();
        subscribers.retain(|subscriber| subscriber.id != id);
        let removed = subscribers.len() != before;
        if removed {
            log::debug!("unsubscribed sink {id:?}");
        }
        removed
    }

    /// Number of registered sinks that are still alive.
    pub fn sink_count(&self) -> usize {
        self.subscribers
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .iter()
            .filter(|subscriber| subscriber.sink.strong_count() > 0)
            .count()
    }

    /// Current generation range.
    pub fn range(&self) -> LogicalRange {
        *self
            .range
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Replace the generation range for subsequent points.
    pub fn set_range(&self, range: LogicalRange) {
        *self
            .range
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = range;
        log::debug!("source range set to {range:?}");
    }

    /// Produce one point and deliver it to every sink before returning.
    pub fn generate_point(&self) -> Point {
        let range = self.range();
        let point = self
            .generator
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .next_point(&range);
        self.publish(point);
        point
    }

    /// Deliver an externally produced point to every sink.
    pub fn publish(&self, point: Point) {
        let (live, dead) = self.live_sinks();
        log::trace!("notifying {} sinks of {point:?}", live.len());
        for sink in &live {
            sink.on_point(point);
        }
        if dead {
            self.prune();
        }
    }

    // Upgraded outside the notification loop so no lock is held while sinks run.
    fn live_sinks(&self) -> (Vec<Arc<dyn PointSink>>, bool) {
        let subscribers = self
            .subscribers
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let live: Vec<_> = subscribers
            .iter()
            .filter_map(|subscriber| subscriber.sink.upgrade())
            .collect();
        let dead = live.len() != subscribers.len();
        (live, dead)
    }

    fn prune(&self) {
        let mut subscribers = self
            .subscribers
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        subscribers.retain(|subscriber| {
            let alive = subscriber.sink.strong_count() > 0;
            if !alive {
                log::debug!("dropping dead sink {:?}", subscriber.id);
            }
            alive
        });
    }
}

impl fmt::Debug for PointSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointSource")
            .field("range", &self.range())
            .field("sinks", &self.sink_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        seen: Mutex<Vec<Point>>,
    }

    impl PointSink for Recorder {
        fn on_point(&self, point: Point) {
            self.seen.lock().unwrap().push(point);
        }
    }

    impl Recorder {
        fn seen(&self) -> Vec<Point> {
            self.seen.lock().unwrap().clone()
        }
    }

    fn range(min: f64, max: f64) -> LogicalRange {
        LogicalRange::new(min, max, min, max).unwrap()
    }

    fn counter() -> impl FnMut(&LogicalRange) -> Point + Send {
        let mut n = 0.0;
        move |_: &LogicalRange| {
            n += 1.0;
            Point::new(n, n)
        }
    }

    #[test]
    fn every_sink_gets_every_point() {
        let source = PointSource::with_generator(range(0.0, 10.0), counter());
        let sinks: Vec<_> = (0..3).map(|_| Arc::new(Recorder::default())).collect();
        for sink in &sinks {
            source.subscribe(sink);
        }
        let produced: Vec<_> = (0..5).map(|_| source.generate_point()).collect();
        for sink in &sinks {
            assert_eq!(sink.seen(), produced);
        }
    }

    #[test]
    fn late_subscriber_sees_only_later_points() {
        let source = PointSource::with_generator(range(0.0, 10.0), counter());
        let early = Arc::new(Recorder::default());
        let late = Arc::new(Recorder::default());
        source.subscribe(&early);
        source.generate_point();
        source.subscribe(&late);
        let second = source.generate_point();
        assert_eq!(early.seen().len(), 2);
        assert_eq!(late.seen(), vec![second]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let source = PointSource::with_generator(range(0.0, 10.0), counter());
        let sink = Arc::new(Recorder::default());
        let id = source.subscribe(&sink);
        source.generate_point();
        assert!(source.unsubscribe(id));
        assert!(!source.unsubscribe(id));
        source.generate_point();
        assert_eq!(sink.seen().len(), 1);
        assert_eq!(source.sink_count(), 0);
    }

    #[test]
    fn dropped_sinks_are_pruned() {
        let source = PointSource::with_generator(range(0.0, 10.0), counter());
        let kept = Arc::new(Recorder::default());
        let dropped = Arc::new(Recorder::default());
        source.subscribe(&kept);
        source.subscribe(&dropped);
        drop(dropped);
        assert_eq!(source.sink_count(), 1);
        source.generate_point();
        assert_eq!(kept.seen().len(), 1);
        assert_eq!(source.subscribers.read().unwrap().len(), 1);
    }

    #[test]
    fn closures_are_sinks() {
        let source = PointSource::with_generator(range(0.0, 10.0), counter());
        let total = Arc::new(Mutex::new(0.0));
        let acc = Arc::clone(&total);
        let sink = Arc::new(move |point: Point| *acc.lock().unwrap() += point.x);
        source.subscribe(&sink);
        source.generate_point();
        source.generate_point();
        assert_eq!(*total.lock().unwrap(), 3.0);
    }

    #[test]
    fn uniform_points_stay_in_range() {
        let source = PointSource::with_generator(range(-5.0, 5.0), UniformGenerator::seeded(7));
        for _ in 0..1000 {
            let point = source.generate_point();
            assert!(source.range().contains(point));
        }
    }

    #[test]
    fn seeded_generators_repeat() {
        let range = range(0.0, 100.0);
        let mut a = UniformGenerator::seeded(42);
        let mut b = UniformGenerator::seeded(42);
        for _ in 0..16 {
            assert_eq!(a.next_point(&range), b.next_point(&range));
        }
    }

    #[test]
    fn set_range_applies_to_new_points_only() {
        let source = PointSource::with_generator(range(0.0, 1.0), UniformGenerator::seeded(1));
        let sink = Arc::new(Recorder::default());
        source.subscribe(&sink);
        let first = source.generate_point();
        source.set_range(range(1000.0, 2000.0));
        let second = source.generate_point();
        assert!(first.x <= 1.0);
        assert!(second.x >= 1000.0);
        assert_eq!(sink.seen(), vec![first, second]);
    }

    #[test]
    fn publish_forwards_external_points() {
        let source = PointSource::new(range(0.0, 1.0));
        let sink = Arc::new(Recorder::default());
        source.subscribe(&sink);
        source.publish(Point::new(-3.0, 99.0));
        assert_eq!(sink.seen(), vec![Point::new(-3.0, 99.0)]);
    }
}
