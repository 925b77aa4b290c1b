//! Presentation constants for point panels.

use crate::render::Color;

/// Visual theme for a point panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Surface fill.
    pub background: Color,
    /// One-pixel outline around the whole surface.
    pub outline: Color,
    /// Outline of the padded drawable area.
    pub frame: Color,
    /// Point marker fill.
    pub point: Color,
    /// Marker diameter in pixels.
    pub point_size: f32,
    /// Status label color.
    pub label: Color,
    /// Status label font size in pixels.
    pub label_size: f32,
}

impl Theme {
    /// Light theme: blue markers on white.
    pub fn light() -> Self {
        Self {
            background: Color::WHITE,
            outline: Color::BLACK,
            frame: Color::rgb8(192, 192, 192),
            point: Color::rgb8(0, 120, 215),
            point_size: 6.0,
            label: Color::rgb8(64, 64, 64),
            label_size: 10.0,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
