use gpui::{
    App, BorderStyle, Bounds, ContentMask, Corners, Edges, Pixels, Point, TextRun, Window, font,
    point, px, quad,
};

use crate::geom::{ScreenPoint, ScreenRect};
use crate::render::{Color, MarkerStyle, RectStyle, RenderCommand, RenderList, TextStyle};

/// Replay a render list with its pixel origin at `origin`.
pub(crate) fn paint_frame(
    frame: &RenderList,
    origin: Point<Pixels>,
    window: &mut Window,
    cx: &mut App,
) {
    let mut clip_stack: Vec<ContentMask<Pixels>> = Vec::new();
    for command in frame.commands() {
        match command {
            RenderCommand::ClipRect(rect) => {
                clip_stack.push(ContentMask {
                    bounds: to_bounds(origin, *rect),
                });
            }
            RenderCommand::ClipEnd => {
                clip_stack.pop();
            }
            RenderCommand::Points { points, style } => {
                with_clip(window, &clip_stack, |window| {
                    paint_points(window, origin, points, *style);
                });
            }
            RenderCommand::Rect { rect, style } => {
                with_clip(window, &clip_stack, |window| {
                    paint_rect(window, origin, *rect, *style);
                });
            }
            RenderCommand::Text {
                position,
                text,
                style,
            } => {
                with_clip(window, &clip_stack, |window| {
                    paint_text(window, cx, origin, *position, text, style);
                });
            }
        }
    }
}

fn paint_points(
    window: &mut Window,
    origin: Point<Pixels>,
    points: &[ScreenPoint],
    style: MarkerStyle,
) {
    let radius = style.size.max(2.0) * 0.5;
    let color = to_rgba(style.color);
    for pt in points {
        let center = to_point(origin, *pt);
        let bounds = Bounds::from_corners(
            point(center.x - px(radius), center.y - px(radius)),
            point(center.x + px(radius), center.y + px(radius)),
        );
        window.paint_quad(quad(
            bounds,
            Corners::all(px(radius)),
            color,
            Edges::all(px(0.0)),
            color,
            BorderStyle::default(),
        ));
    }
}

fn paint_rect(window: &mut Window, origin: Point<Pixels>, rect: ScreenRect, style: RectStyle) {
    window.paint_quad(quad(
        to_bounds(origin, rect),
        Corners::all(px(0.0)),
        to_rgba(style.fill),
        Edges::all(px(style.stroke_width)),
        to_rgba(style.stroke),
        BorderStyle::default(),
    ));
}

fn paint_text(
    window: &mut Window,
    cx: &mut App,
    origin: Point<Pixels>,
    baseline: ScreenPoint,
    text: &str,
    style: &TextStyle,
) {
    if text.is_empty() {
        return;
    }
    let run = TextRun {
        len: text.len(),
        font: font("Monospace"),
        color: to_hsla(style.color),
        background_color: None,
        underline: None,
        strikethrough: None,
    };
    let shaped = window
        .text_system()
        .shape_line(text.to_string().into(), px(style.size), &[run], None);
    let line_height = shaped.ascent + shaped.descent;
    let anchor = to_point(origin, baseline);
    let top_left = point(anchor.x, anchor.y - shaped.ascent);
    let _ = shaped.paint(top_left, line_height, window, cx);
}

fn to_rgba(color: Color) -> gpui::Rgba {
    gpui::Rgba {
        r: color.r,
        g: color.g,
        b: color.b,
        a: color.a,
    }
}

pub(crate) fn to_hsla(color: Color) -> gpui::Hsla {
    gpui::Hsla::from(to_rgba(color))
}

fn to_point(origin: Point<Pixels>, pt: ScreenPoint) -> Point<Pixels> {
    point(origin.x + px(pt.x as f32), origin.y + px(pt.y as f32))
}

fn to_bounds(origin: Point<Pixels>, rect: ScreenRect) -> Bounds<Pixels> {
    Bounds::from_corners(to_point(origin, rect.min), to_point(origin, rect.max))
}

fn with_clip(window: &mut Window, stack: &[ContentMask<Pixels>], f: impl FnOnce(&mut Window)) {
    if let Some(mask) = stack.last() {
        window.with_content_mask(Some(mask.clone()), f);
    } else {
        f(window);
    }
}
