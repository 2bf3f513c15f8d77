// SPDX-License-Identifier: Apache-2.0
//! Nearest project color lookup.
//!
//! Matching is plain Euclidean distance in RGB with a hard cutoff; alpha is
//! ignored. A zero cutoff (the default) accepts exact matches only.

use crate::model::{Color, PaletteColor};
use crate::slug::eq_ignore_case;

/// Euclidean RGB distance between a layer color and a palette entry.
#[must_use]
pub fn rgb_distance(color: &Color, swatch: &PaletteColor) -> f64 {
    let dr = f64::from(color.r) - f64::from(swatch.r);
    let dg = f64::from(color.g) - f64::from(swatch.g);
    let db = f64::from(color.b) - f64::from(swatch.b);
    (dr * dr + dg * dg + db * db).sqrt()
}

/// Resolves layer colors to palette entries.
#[derive(Debug, Clone, Copy)]
pub struct ColorMatcher<'a> {
    palette: &'a [PaletteColor],
    max_distance: f64,
    base_color: Option<&'a str>,
}

impl<'a> ColorMatcher<'a> {
    /// Exact-match lookup over `palette` with no base color.
    #[must_use]
    pub fn new(palette: &'a [PaletteColor]) -> Self {
        Self {
            palette,
            max_distance: 0.0,
            base_color: None,
        }
    }

    /// Accept palette entries up to `distance` away.
    #[must_use]
    pub fn max_distance(mut self, distance: f64) -> Self {
        self.max_distance = distance;
        self
    }

    /// Never report the palette entry with this name (case-insensitive).
    #[must_use]
    pub fn base_color(mut self, name: Option<&'a str>) -> Self {
        self.base_color = name;
        self
    }

    /// The nearest palette entry within the cutoff, unless it is the base
    /// color. Ties go to the earliest palette entry.
    #[must_use]
    pub fn nearest(&self, color: Option<&Color>) -> Option<&'a PaletteColor> {
        let color = color?;
        let (swatch, distance) = self
            .palette
            .iter()
            .map(|swatch| (swatch, rgb_distance(color, swatch)))
            .fold(None, |best: Option<(&PaletteColor, f64)>, candidate| match best {
                Some(current) if current.1 <= candidate.1 => Some(current),
                _ => Some(candidate),
            })?;

        if distance > self.max_distance {
            tracing::trace!(
                nearest = %swatch.name,
                distance,
                max = self.max_distance,
                "color outside match distance"
            );
            return None;
        }
        if self
            .base_color
            .is_some_and(|base| eq_ignore_case(base, &swatch.name))
        {
            return None;
        }
        Some(swatch)
    }

    /// `<prefix><name>` for the matched palette entry.
    #[must_use]
    pub fn class(&self, color: Option<&Color>, prefix: &str) -> Option<String> {
        self.nearest(color)
            .map(|swatch| format!("{prefix}{}", swatch.name))
    }
}
