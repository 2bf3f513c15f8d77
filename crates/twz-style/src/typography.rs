// SPDX-License-Identifier: Apache-2.0
//! Typography classifiers.
//!
//! Each function maps one text attribute to a utility class, or to `None`
//! when the attribute sits at the theme's neutral step and needs no class.

use crate::color::ColorMatcher;
use crate::model::Color;
use crate::slug::{eq_ignore_case, slugify};
use crate::theme::ThemeConfig;

/// Pixels per `rem`; pixel sizes are divided by this before scale lookup.
pub const REM: f64 = 16.0;

/// `text-<key>` for the nearest font size; `base` is neutral.
#[must_use]
pub fn font_size_class(theme: &ThemeConfig, font_size: f64) -> Option<String> {
    let sizes = theme.font_sizes();
    let key = sizes.closest_key(font_size / REM)?;
    (key != "base").then(|| format!("text-{key}"))
}

/// `font-<style>` unless the style is `normal`.
#[must_use]
pub fn font_style_class(style: Option<&str>) -> Option<String> {
    style
        .filter(|style| *style != "normal")
        .map(|style| format!("font-{style}"))
}

/// `font-<slug>` unless the family is the project's default font.
#[must_use]
pub fn font_family_class(family: Option<&str>, default_font: Option<&str>) -> Option<String> {
    let family = family?;
    if default_font.is_some_and(|font| eq_ignore_case(font, family)) {
        return None;
    }
    Some(format!("font-{}", slugify(family)))
}

/// `leading-<key>` for the `height / size` ratio.
///
/// A missing (or zero) line height means the font size. A height equal to
/// the size is suppressed regardless of the nearest key, as is `none`.
#[must_use]
pub fn line_height_class(theme: &ThemeConfig, size: f64, height: Option<f64>) -> Option<String> {
    let height = height.filter(|height| *height != 0.0).unwrap_or(size);
    if height == size {
        return None;
    }
    let ratio = height / size;
    if !ratio.is_finite() {
        return None;
    }
    let heights = theme.line_heights();
    let key = heights.closest_key(ratio)?;
    (key != "none").then(|| format!("leading-{key}"))
}

/// `text-<align>` unless alignment is absent or `left`.
#[must_use]
pub fn text_align_class(align: Option<&str>) -> Option<String> {
    align
        .filter(|align| !align.is_empty() && *align != "left")
        .map(|align| format!("text-{align}"))
}

/// `tracking-<key>` for the `spacing / size` ratio; `normal` is neutral.
#[must_use]
pub fn letter_spacing_class(
    theme: &ThemeConfig,
    size: f64,
    spacing: Option<f64>,
) -> Option<String> {
    let ratio = spacing.unwrap_or(0.0) / size;
    if !ratio.is_finite() {
        return None;
    }
    let trackings = theme.letter_spacings();
    let key = trackings.closest_key(ratio)?;
    (key != "normal").then(|| format!("tracking-{key}"))
}

/// `font-<weight>` unless the weight is `normal`.
#[must_use]
pub fn font_weight_class(weight: Option<&str>) -> Option<String> {
    weight
        .filter(|weight| *weight != "normal")
        .map(|weight| format!("font-{weight}"))
}

/// `font-<weight>` for a worded weight unless it is `regular`.
#[must_use]
pub fn weight_text_class(weight: Option<&str>) -> Option<String> {
    weight
        .filter(|weight| *weight != "regular")
        .map(|weight| format!("font-{weight}"))
}

/// `text-<name>` for the matched palette color.
#[must_use]
pub fn text_color_class(colors: &ColorMatcher<'_>, color: Option<&Color>) -> Option<String> {
    colors.class(color, "text-")
}

// ── Content ────────────────────────────────────────────────────────────

/// `uppercase` when the content has no lowercase letters.
#[must_use]
pub fn uppercase_class(content: &str) -> Option<String> {
    (content == content.to_uppercase()).then(|| "uppercase".to_string())
}

/// `truncate` when the content ends in (or contains) an ellipsis.
#[must_use]
pub fn truncate_class(content: &str) -> Option<String> {
    (content.contains("...") || content.contains('…')).then(|| "truncate".to_string())
}
