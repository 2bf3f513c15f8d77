// SPDX-License-Identifier: Apache-2.0
//! Theme configuration: the scales every classifier resolves against.
//!
//! The document shape follows a Tailwind config: scale categories live under
//! `theme` in camelCase, breakpoints under a top-level `screens` mapping.
//! Categories that are missing deserialize to empty scales.

use std::fmt;

use serde::Deserialize;
use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};
use thiserror::Error;

use crate::scale::{RawScale, ThemeScale, normalize, property_position};

/// Theme document bundled with the crate, used when no override is given.
pub const DEFAULT_THEME_JSON: &str = include_str!("../data/default-theme.json");

/// Errors raised while loading a theme configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid theme configuration: {0}")]
    InvalidThemeJson(#[from] serde_json::Error),
}

/// Responsive breakpoint prefixes in property order.
///
/// Only the keys of a `screens` mapping matter; values are accepted in any
/// shape and discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Breakpoints(Vec<String>);

impl Breakpoints {
    /// No breakpoints: rendering emits only the unprefixed element.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Iterate breakpoint prefixes in property order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Breakpoints {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut keys: Vec<String> = Vec::new();
        for key in iter {
            let key = key.into();
            if !keys.contains(&key) {
                let at = property_position(keys.iter().map(String::as_str), &key);
                keys.insert(at, key);
            }
        }
        Self(keys)
    }
}

impl<'de> Deserialize<'de> for Breakpoints {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BreakpointVisitor;

        impl<'de> Visitor<'de> for BreakpointVisitor {
            type Value = Breakpoints;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a mapping of breakpoint names")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Breakpoints, A::Error> {
                let mut keys = Vec::new();
                while let Some((key, _)) = access.next_entry::<String, IgnoredAny>()? {
                    keys.push(key);
                }
                Ok(keys.into_iter().collect())
            }
        }

        deserializer.deserialize_map(BreakpointVisitor)
    }
}

/// Scale categories of a theme, as written in the configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeScales {
    pub font_size: RawScale,
    pub border_radius: RawScale,
    pub opacity: RawScale,
    pub border_width: RawScale,
    /// CSS `box-shadow` values, or bare blur radii.
    pub box_shadow: RawScale,
    /// Unitless line-height ratios.
    pub line_height: RawScale,
    /// Letter spacing in `em`.
    pub letter_spacing: RawScale,
    pub max_width: RawScale,
    /// Rotation steps in degrees.
    pub rotate: RawScale,
    /// Directional gradient classes; values are `linear-gradient(...)` strings.
    pub background_image: RawScale,
}

/// The full theme configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub theme: ThemeScales,
    pub screens: Breakpoints,
}

impl ThemeConfig {
    /// Parse a theme document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The bundled default theme.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_json(DEFAULT_THEME_JSON)
    }

    /// Replace the breakpoints, keeping every scale.
    #[must_use]
    pub fn with_screens(mut self, screens: Breakpoints) -> Self {
        self.screens = screens;
        self
    }

    #[must_use]
    pub fn font_sizes(&self) -> ThemeScale {
        normalize(&self.theme.font_size)
    }

    #[must_use]
    pub fn border_radii(&self) -> ThemeScale {
        normalize(&self.theme.border_radius)
    }

    #[must_use]
    pub fn opacities(&self) -> ThemeScale {
        normalize(&self.theme.opacity)
    }

    #[must_use]
    pub fn border_widths(&self) -> ThemeScale {
        normalize(&self.theme.border_width)
    }

    #[must_use]
    pub fn line_heights(&self) -> ThemeScale {
        normalize(&self.theme.line_height)
    }

    #[must_use]
    pub fn letter_spacings(&self) -> ThemeScale {
        normalize(&self.theme.letter_spacing)
    }

    #[must_use]
    pub fn max_widths(&self) -> ThemeScale {
        normalize(&self.theme.max_width)
    }

    #[must_use]
    pub fn rotations(&self) -> ThemeScale {
        normalize(&self.theme.rotate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_theme_parses() {
        let theme = ThemeConfig::builtin().expect("bundled theme");
        assert_eq!(theme.font_sizes().get("base"), Some(1.0));
        assert_eq!(theme.border_radii().get("lg"), Some(0.5));
        assert_eq!(theme.opacities().get("100"), Some(1.0));
        assert!(!theme.theme.background_image.is_empty());
        let screens: Vec<&str> = theme.screens.iter().collect();
        assert_eq!(screens, ["sm", "md", "lg", "xl"]);
    }

    #[test]
    fn missing_categories_default_to_empty() {
        let theme = ThemeConfig::from_json(r#"{"theme": {"opacity": {"100": 1}}}"#)
            .expect("partial theme");
        assert!(theme.font_sizes().is_empty());
        assert!(theme.screens.is_empty());
        assert_eq!(theme.opacities().len(), 1);
    }

    #[test]
    fn screens_ignore_values_and_keep_order() {
        let theme = ThemeConfig::from_json(
            r#"{"screens": {"md": "768px", "sm": {"min": "640px"}, "print": {"raw": "print"}}}"#,
        )
        .expect("screens");
        let screens: Vec<&str> = theme.screens.iter().collect();
        assert_eq!(screens, ["md", "sm", "print"]);
    }

    #[test]
    fn numeric_screen_names_sort_first() {
        let theme = ThemeConfig::from_json(r#"{"screens": {"tablet": 1, "1280": 2, "640": 3}}"#)
            .expect("screens");
        let screens: Vec<&str> = theme.screens.iter().collect();
        assert_eq!(screens, ["640", "1280", "tablet"]);
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let error = ThemeConfig::from_json("{ not json").expect_err("malformed json");
        assert!(matches!(error, ConfigError::InvalidThemeJson(_)));
        assert!(error.to_string().starts_with("invalid theme configuration"));
    }

    #[test]
    fn with_screens_replaces_breakpoints_only() {
        let theme = ThemeConfig::builtin()
            .expect("bundled theme")
            .with_screens(Breakpoints::none());
        assert!(theme.screens.is_empty());
        assert!(!theme.font_sizes().is_empty());
    }
}
