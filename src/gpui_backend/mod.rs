//! GPUI integration for point panels.
//!
//! This module provides a GPUI view that paints a
//! [`PointsPanel`](crate::panel::PointsPanel) and a redraw loop that turns
//! cross-thread redraw requests into view notifications.

mod paint;
mod view;

pub use view::{FRAME_INTERVAL, GpuiPointsView, spawn_redraw_loop};
