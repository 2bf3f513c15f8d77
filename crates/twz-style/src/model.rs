// SPDX-License-Identifier: Apache-2.0
//! Design layer data model, deserialized from the host's layer export.
//!
//! Field names follow the host's camelCase JSON. Lists that a layer may omit
//! (shadows, fills, borders, text runs) default to empty.

use serde::{Deserialize, Serialize};

// ── Colors ─────────────────────────────────────────────────────────────

fn opaque() -> f64 {
    1.0
}

/// An RGBA color as exported by the design tool.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Alpha in `0.0..=1.0`; ignored by palette matching.
    #[serde(default = "opaque")]
    pub a: f64,
}

impl Color {
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

/// A named project color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteColor {
    pub name: String,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl PaletteColor {
    #[must_use]
    pub fn new(name: impl Into<String>, r: u8, g: u8, b: u8) -> Self {
        Self {
            name: name.into(),
            r,
            g,
            b,
        }
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

// ── Typography ─────────────────────────────────────────────────────────

/// A text style descriptor. Sizes and spacings are in pixels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    /// Set on named project styles; ignored when comparing styles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_face: Option<String>,
    pub font_size: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_stretch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f64>,
    /// Weight as a word (`regular`, `medium`, `bold`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl TextStyle {
    /// Whether both styles describe the same typography, ignoring names.
    #[must_use]
    pub fn same_style(&self, other: &Self) -> bool {
        self.font_face == other.font_face
            && self.font_size == other.font_size
            && self.font_weight == other.font_weight
            && self.font_style == other.font_style
            && self.font_family == other.font_family
            && self.font_stretch == other.font_stretch
            && self.line_height == other.line_height
            && self.text_align == other.text_align
            && self.letter_spacing == other.letter_spacing
            && self.weight_text == other.weight_text
            && self.color == other.color
    }
}

/// Half-open `[start, end)` character offsets into a layer's content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRange {
    pub start: usize,
    pub end: usize,
}

impl TextRange {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// A contiguous span of text sharing one style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyleRun {
    pub range: TextRange,
    pub text_style: TextStyle,
}

// ── Shape attributes ───────────────────────────────────────────────────

/// Whether a shadow is drawn inside or outside the shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadowKind {
    Inner,
    Outer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    #[serde(rename = "type")]
    pub kind: ShadowKind,
    #[serde(default)]
    pub blur_radius: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    #[serde(default)]
    pub color: Option<Color>,
    #[serde(default)]
    pub position: f64,
}

/// A linear gradient between two anchor points, in layer-relative units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gradient {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub from: Point,
    #[serde(default)]
    pub to: Point,
    #[serde(default)]
    pub color_stops: Vec<ColorStop>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillKind {
    Color,
    Gradient,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fill {
    #[serde(rename = "type")]
    pub kind: FillKind,
    #[serde(default)]
    pub color: Option<Color>,
    #[serde(default)]
    pub gradient: Option<Gradient>,
}

impl Fill {
    #[must_use]
    pub fn color(color: Color) -> Self {
        Self {
            kind: FillKind::Color,
            color: Some(color),
            gradient: None,
        }
    }

    #[must_use]
    pub fn gradient(gradient: Gradient) -> Self {
        Self {
            kind: FillKind::Gradient,
            color: None,
            gradient: Some(gradient),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BorderFill {
    #[serde(default)]
    pub color: Option<Color>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Border {
    pub thickness: f64,
    #[serde(default)]
    pub fill: BorderFill,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
}

// ── Layers ─────────────────────────────────────────────────────────────

/// Attributes shared by every layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeLayer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Corner radius in pixels.
    #[serde(default)]
    pub border_radius: f64,
    #[serde(default = "opaque")]
    pub opacity: f64,
    /// Rotation in degrees, when the layer is rotated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(default)]
    pub shadows: Vec<Shadow>,
    #[serde(default)]
    pub fills: Vec<Fill>,
    #[serde(default)]
    pub borders: Vec<Border>,
    #[serde(default)]
    pub rect: Rect,
}

impl Default for ShapeLayer {
    fn default() -> Self {
        Self {
            name: None,
            border_radius: 0.0,
            opacity: 1.0,
            rotation: None,
            shadows: Vec::new(),
            fills: Vec::new(),
            borders: Vec::new(),
            rect: Rect::default(),
        }
    }
}

/// A text layer: shape attributes plus content and its style runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextLayer {
    #[serde(flatten)]
    pub shape: ShapeLayer,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub text_styles: Vec<TextStyleRun>,
}

/// A design layer, discriminated by its `type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Layer {
    Text(TextLayer),
    Shape(ShapeLayer),
}

impl Layer {
    /// The `type` tag this layer serializes with.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Shape(_) => "shape",
        }
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Text(layer) => layer.shape.name.as_deref(),
            Self::Shape(layer) => layer.name.as_deref(),
        }
    }
}
