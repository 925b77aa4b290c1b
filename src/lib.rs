//! gpui_pointpanel displays a bounded, continuously updated set of points.
//!
//! A [`PointSource`] produces points and notifies its subscribed
//! [`PointSink`]s. A [`PointsPanel`] keeps the most recent N of them in a
//! [`PointBuffer`] and asks its host to repaint; [`CoordinateMapper`] places
//! logical points inside the padded pixel area.

#![forbid(unsafe_code)]

pub mod buffer;
pub mod config;
pub mod error;
pub mod geom;
#[cfg(feature = "gpui")]
pub mod gpui_backend;
pub mod panel;
pub mod render;
pub mod source;
pub mod style;
pub mod transform;
pub mod view;

pub use buffer::{PointBuffer, RedrawRequest};
pub use config::PanelConfig;
pub use error::{Error, Result};
pub use geom::{PixelBounds, Point, ScreenPoint, ScreenRect};
#[cfg(feature = "gpui")]
pub use gpui_backend::{GpuiPointsView, spawn_redraw_loop};
pub use panel::{PointsPanel, RedrawFlag};
pub use render::{Color, RenderCommand, RenderList, build_frame};
pub use source::{PointGenerator, PointSink, PointSource, SubscriptionId, UniformGenerator};
pub use style::Theme;
pub use transform::{CoordinateMapper, Transform};
pub use view::{LogicalRange, Range};
