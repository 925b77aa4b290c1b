//! Rendering primitives for point panels.
//!
//! These types are backend-agnostic. A backend (such as the GPUI backend)
//! replays a [`RenderList`] with its own drawing calls.

use crate::geom::{Point, ScreenPoint, ScreenRect};
use crate::style::Theme;
use crate::transform::Transform;

/// RGBA color.
///
/// All components are expected to be in the 0.0..=1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Create a new color.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from 8-bit channels.
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }

    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// Fully transparent.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
}

/// Filled circle marker styling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    /// Marker color.
    pub color: Color,
    /// Marker diameter in pixels.
    pub size: f32,
}

/// Rectangle styling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectStyle {
    /// Fill color.
    pub fill: Color,
    /// Stroke color.
    pub stroke: Color,
    /// Stroke width.
    pub stroke_width: f32,
}

/// Text styling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Text color.
    pub color: Color,
    /// Font size in pixels.
    pub size: f32,
}

/// A single drawing instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Start clipping to a rectangle.
    ClipRect(ScreenRect),
    /// End clipping.
    ClipEnd,
    /// Draw markers centered on the given pixels.
    Points {
        /// Marker centers.
        points: Vec<ScreenPoint>,
        /// Marker styling.
        style: MarkerStyle,
    },
    /// Draw a rectangle.
    Rect {
        /// Rectangle bounds.
        rect: ScreenRect,
        /// Rectangle styling.
        style: RectStyle,
    },
    /// Draw text with its baseline at `position`.
    Text {
        /// Baseline origin.
        position: ScreenPoint,
        /// Text content.
        text: String,
        /// Text styling.
        style: TextStyle,
    },
}

/// Ordered render commands for one frame.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RenderList {
    commands: Vec<RenderCommand>,
}

impl RenderList {
    /// Create an empty render list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a render command.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Access all render commands.
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Marker centers of every points command, in draw order.
    pub fn points(&self) -> impl Iterator<Item = ScreenPoint> + '_ {
        self.commands
            .iter()
            .flat_map(|command| match command {
                RenderCommand::Points { points, .. } => points.as_slice(),
                _ => &[][..],
            })
            .copied()
    }

    /// Text of every label, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|command| match command {
            RenderCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// Status label describing the displayed range.
pub fn range_label(transform: &Transform) -> String {
    let range = transform.range();
    format!(
        "Range: X[{:.1}, {:.1}] Y[{:.1}, {:.1}]",
        range.x.min(),
        range.x.max(),
        range.y.min(),
        range.y.max()
    )
}

/// Status label describing buffer occupancy.
pub fn count_label(len: usize, capacity: usize) -> String {
    format!("Points: {len}/{capacity}")
}

/// Build the commands that paint a panel.
///
/// `points` is a buffer snapshot, oldest first. Markers are clipped to the
/// surface, not to the padded area, so out-of-range points stay visible while
/// they fit on screen.
pub fn build_frame(
    points: &[Point],
    capacity: usize,
    transform: &Transform,
    theme: &Theme,
) -> RenderList {
    let mut render = RenderList::new();
    let bounds = transform.bounds();
    let width = bounds.width() as i32;
    let height = bounds.height() as i32;
    let surface = ScreenRect::new(ScreenPoint::new(0, 0), ScreenPoint::new(width, height));

    render.push(RenderCommand::Rect {
        rect: surface,
        style: RectStyle {
            fill: theme.background,
            stroke: theme.outline,
            stroke_width: 1.0,
        },
    });
    render.push(RenderCommand::Rect {
        rect: bounds.drawable_rect(),
        style: RectStyle {
            fill: Color::TRANSPARENT,
            stroke: theme.frame,
            stroke_width: 1.0,
        },
    });

    render.push(RenderCommand::ClipRect(surface));
    render.push(RenderCommand::Points {
        points: points
            .iter()
            .map(|point| transform.data_to_screen(*point))
            .collect(),
        style: MarkerStyle {
            color: theme.point,
            size: theme.point_size,
        },
    });
    render.push(RenderCommand::ClipEnd);

    let label = TextStyle {
        color: theme.label,
        size: theme.label_size,
    };
    render.push(RenderCommand::Text {
        position: ScreenPoint::new(5, 15),
        text: range_label(transform),
        style: label,
    });
    render.push(RenderCommand::Text {
        position: ScreenPoint::new(5, height - 5),
        text: count_label(points.len(), capacity),
        style: label,
    });
    render
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::PixelBounds;
    use crate::view::LogicalRange;

    fn transform() -> Transform {
        Transform::new(
            LogicalRange::new(0.0, 100.0, 0.0, 100.0).unwrap(),
            PixelBounds::new(600, 400, 20).unwrap(),
        )
    }

    #[test]
    fn frame_maps_points_in_order() {
        let points = [Point::new(50.0, 50.0), Point::new(100.0, 100.0)];
        let render = build_frame(&points, 3, &transform(), &Theme::default());
        let screen: Vec<_> = render.points().collect();
        assert_eq!(screen, vec![ScreenPoint::new(300, 200), ScreenPoint::new(580, 20)]);
    }

    #[test]
    fn frame_labels_range_and_count() {
        let points = [Point::new(1.0, 1.0)];
        let render = build_frame(&points, 10, &transform(), &Theme::default());
        let texts: Vec<_> = render.texts().collect();
        assert_eq!(
            texts,
            vec!["Range: X[0.0, 100.0] Y[0.0, 100.0]", "Points: 1/10"]
        );
    }

    #[test]
    fn points_are_clipped_to_surface() {
        let render = build_frame(&[], 1, &transform(), &Theme::default());
        let commands = render.commands();
        let clip = commands
            .iter()
            .position(|command| matches!(command, RenderCommand::ClipRect(_)))
            .unwrap();
        assert!(matches!(commands[clip + 1], RenderCommand::Points { .. }));
        assert_eq!(commands[clip + 2], RenderCommand::ClipEnd);
    }

    #[test]
    fn tallest_surface_labels_fit() {
        let transform = Transform::new(
            LogicalRange::new(0.0, 100.0, 0.0, 100.0).unwrap(),
            PixelBounds::new(600, crate::geom::MAX_PIXELS, 20).unwrap(),
        );
        let render = build_frame(&[Point::new(0.0, 0.0)], 1, &transform, &Theme::default());
        let baseline = render.commands().iter().find_map(|command| match command {
            RenderCommand::Text { position, text, .. } if text.starts_with("Points") => {
                Some(*position)
            }
            _ => None,
        });
        assert_eq!(baseline, Some(ScreenPoint::new(5, i32::MAX - 5)));
        let markers: Vec<_> = render.points().collect();
        assert_eq!(markers, vec![ScreenPoint::new(20, i32::MAX - 20)]);
    }

    #[test]
    fn drawable_frame_uses_padding() {
        let render = build_frame(&[], 1, &transform(), &Theme::default());
        let rects: Vec<_> = render
            .commands()
            .iter()
            .filter_map(|command| match command {
                RenderCommand::Rect { rect, .. } => Some(*rect),
                _ => None,
            })
            .collect();
        assert_eq!(rects.len(), 2);
        assert_eq!(rects[1].min, ScreenPoint::new(20, 20));
        assert_eq!(rects[1].max, ScreenPoint::new(580, 380));
    }
}
