//! Presentational primitives: colours, insets, text styles and the theme.

use serde::Serialize;

/// RGBA colour with a float alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const TEXT_BODY: Color = Color::rgb(0x21, 0x21, 0x21);
    pub const TEXT_BODY4: Color = Color::rgb(0x61, 0x61, 0x61);
    pub const LINK: Color = Color::rgb(0x21, 0x96, 0xf3);
    pub const SEPARATOR: Color = Color::rgb(0xe6, 0xe6, 0xe6);
    pub const ICON: Color = Color::rgb(0x95, 0x95, 0x95);
    pub const CODE_BACKGROUND: Color = Color::rgba(110, 198, 255, 0.12);

    /// Opaque colour.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Colour with alpha in `0.0..=1.0`.
    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// Insets on the four sides of a box.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct EdgeInsets {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl EdgeInsets {
    pub const ZERO: EdgeInsets = EdgeInsets::only(0.0, 0.0, 0.0, 0.0);

    /// Explicit insets in left, top, right, bottom order.
    pub const fn only(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Same inset on every side.
    pub const fn all(value: f32) -> Self {
        Self::only(value, value, value, value)
    }

    /// Horizontal insets only.
    pub const fn horizontal(value: f32) -> Self {
        Self::only(value, 0.0, value, 0.0)
    }

    /// Bottom inset only.
    pub const fn bottom(value: f32) -> Self {
        Self::only(0.0, 0.0, 0.0, value)
    }

    /// Copy with a different bottom inset.
    pub const fn with_bottom(self, bottom: f32) -> Self {
        Self { bottom, ..self }
    }

    /// Copy with a different top inset.
    pub const fn with_top(self, top: f32) -> Self {
        Self { top, ..self }
    }
}

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    #[default]
    Regular,
    Medium,
    Bold,
}

/// Text style applied to a run of text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextStyle {
    /// Font size in logical pixels
    pub font_size: f32,
    /// Line height multiplier
    pub line_height: f32,
    pub weight: FontWeight,
    pub color: Color,
    /// Font family name; `None` means the host default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
}

impl TextStyle {
    /// Regular-weight style in the host default family.
    pub fn new(font_size: f32, line_height: f32, color: Color) -> Self {
        Self {
            font_size,
            line_height,
            weight: FontWeight::Regular,
            color,
            family: None,
        }
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }
}

/// Styling constants used by the renderer.
///
/// `Theme::default()` reproduces the stock article look; hosts may swap any
/// style through [`RenderOptions::with_theme`](super::RenderOptions::with_theme).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Theme {
    pub heading_one: TextStyle,
    pub heading_two: TextStyle,
    pub body: TextStyle,
    pub link: TextStyle,
    pub quote: TextStyle,
    pub code: TextStyle,
    pub caption: TextStyle,

    pub background: Color,
    pub quote_border: Color,
    pub quote_border_width: f32,
    pub code_background: Color,
    pub bullet: Color,
    pub bullet_size: f32,
    pub caption_border: Color,
    pub play_icon: Color,
    pub play_icon_size: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            heading_one: TextStyle::new(24.0, 1.33, Color::TEXT_BODY).with_weight(FontWeight::Medium),
            heading_two: TextStyle::new(20.0, 1.4, Color::TEXT_BODY).with_weight(FontWeight::Medium),
            body: TextStyle::new(16.0, 1.75, Color::TEXT_BODY),
            link: TextStyle::new(16.0, 1.75, Color::LINK),
            quote: TextStyle::new(16.0, 1.75, Color::TEXT_BODY4),
            code: TextStyle::new(14.0, 1.57, Color::TEXT_BODY).with_family("Menlo"),
            caption: TextStyle::new(14.0, 1.57, Color::TEXT_BODY4),

            background: Color::WHITE,
            quote_border: Color::SEPARATOR,
            quote_border_width: 8.0,
            code_background: Color::CODE_BACKGROUND,
            bullet: Color::BLACK,
            bullet_size: 8.0,
            caption_border: Color::SEPARATOR,
            play_icon: Color::ICON,
            play_icon_size: 64.0,
        }
    }
}
