// SPDX-License-Identifier: Apache-2.0
//! Per-layer class resolution: runs every classifier in a fixed order.

use crate::color::ColorMatcher;
use crate::model::{ShapeLayer, TextStyle};
use crate::shape::{
    background_classes, border_color_class, border_radius_class, border_width_class,
    max_width_class, opacity_class, rotation_class, shadow_class,
};
use crate::theme::ThemeConfig;
use crate::typography::{
    font_family_class, font_size_class, font_style_class, letter_spacing_class,
    line_height_class, text_align_class, text_color_class, weight_text_class,
};

/// Theme, palette matcher and project defaults bundled for one invocation.
#[derive(Debug, Clone, Copy)]
pub struct ClassResolver<'a> {
    theme: &'a ThemeConfig,
    colors: ColorMatcher<'a>,
    default_font: Option<&'a str>,
}

impl<'a> ClassResolver<'a> {
    /// Resolve against `theme` and match colors through `colors`, with no
    /// default font.
    #[must_use]
    pub fn new(theme: &'a ThemeConfig, colors: ColorMatcher<'a>) -> Self {
        Self {
            theme,
            colors,
            default_font: None,
        }
    }

    /// Font family that needs no `font-*` class.
    #[must_use]
    pub fn default_font(mut self, font: Option<&'a str>) -> Self {
        self.default_font = font;
        self
    }

    /// The theme, for breakpoints and other layer-level settings.
    #[must_use]
    pub fn theme(&self) -> &'a ThemeConfig {
        self.theme
    }

    /// Typography classes in order: size, style, family, line height,
    /// alignment, letter spacing, weight, color.
    #[must_use]
    pub fn text_style_classes(&self, style: &TextStyle) -> Vec<String> {
        [
            font_size_class(self.theme, style.font_size),
            font_style_class(style.font_style.as_deref()),
            font_family_class(style.font_family.as_deref(), self.default_font),
            line_height_class(self.theme, style.font_size, style.line_height),
            text_align_class(style.text_align.as_deref()),
            letter_spacing_class(self.theme, style.font_size, style.letter_spacing),
            weight_text_class(style.weight_text.as_deref()),
            text_color_class(&self.colors, style.color.as_ref()),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Shape classes in order: radius, opacity, shadow, background, border
    /// width, border color, max width, rotation.
    #[must_use]
    pub fn shape_classes(&self, layer: &ShapeLayer) -> Vec<String> {
        let mut classes: Vec<String> = [
            border_radius_class(self.theme, layer.border_radius),
            opacity_class(self.theme, layer.opacity),
            shadow_class(self.theme, &layer.shadows),
        ]
        .into_iter()
        .flatten()
        .collect();
        classes.extend(background_classes(self.theme, &self.colors, &layer.fills));
        classes.extend(
            [
                border_width_class(self.theme, &layer.borders),
                border_color_class(&self.colors, &layer.borders),
                max_width_class(self.theme, &layer.rect),
                layer
                    .rotation
                    .and_then(|degrees| rotation_class(self.theme, degrees)),
            ]
            .into_iter()
            .flatten(),
        );
        tracing::debug!(layer = ?layer.name, ?classes, "resolved shape classes");
        classes
    }
}
