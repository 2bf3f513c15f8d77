// SPDX-License-Identifier: Apache-2.0
//! The host capabilities the renderer depends on, and options read from them.

use std::collections::BTreeMap;

use serde::Deserialize;
use twz_style::{ColorMatcher, ConfigError, PaletteColor, TextStyle, ThemeConfig};

/// Option naming the project's default font family.
pub const OPTION_FONT: &str = "font";
/// Option naming the project's base color.
pub const OPTION_COLOR: &str = "color";
/// Option holding the maximum RGB distance for a palette match.
pub const OPTION_MAX_COLOR_DISTANCE: &str = "maxColorDistance";
/// Option holding a JSON theme document that replaces the bundled theme.
pub const OPTION_THEME: &str = "tailwind";

/// What the renderer needs from the host design tool.
pub trait HostContext {
    /// A user-configured option, if set.
    fn option(&self, name: &str) -> Option<String>;

    /// The project palette.
    fn colors(&self) -> &[PaletteColor];

    /// The named project text style that describes the same typography.
    fn find_text_style_equal(&self, style: &TextStyle) -> Option<&TextStyle>;
}

/// Project-level options, read once per invocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolveOptions {
    pub default_font: Option<String>,
    pub default_color: Option<String>,
    pub max_color_distance: f64,
}

impl ResolveOptions {
    /// Read `font`, `color` and `maxColorDistance` from `ctx`.
    ///
    /// A distance that does not parse as a finite number falls back to zero.
    pub fn from_context<C: HostContext + ?Sized>(ctx: &C) -> Self {
        let max_color_distance = match ctx.option(OPTION_MAX_COLOR_DISTANCE) {
            None => 0.0,
            Some(raw) => match raw.trim().parse::<f64>() {
                Ok(distance) if distance.is_finite() => distance,
                _ => {
                    tracing::warn!(value = %raw, "ignoring unparseable maxColorDistance option");
                    0.0
                }
            },
        };
        Self {
            default_font: ctx.option(OPTION_FONT),
            default_color: ctx.option(OPTION_COLOR),
            max_color_distance,
        }
    }

    /// A palette matcher configured with these options.
    #[must_use]
    pub fn color_matcher<'a>(&'a self, palette: &'a [PaletteColor]) -> ColorMatcher<'a> {
        ColorMatcher::new(palette)
            .max_distance(self.max_color_distance)
            .base_color(self.default_color.as_deref())
    }
}

/// The theme override from the `tailwind` option, or the bundled theme.
pub fn resolve_theme<C: HostContext + ?Sized>(ctx: &C) -> Result<ThemeConfig, ConfigError> {
    match ctx.option(OPTION_THEME) {
        Some(json) => {
            tracing::debug!(bytes = json.len(), "using theme override");
            ThemeConfig::from_json(&json)
        }
        None => ThemeConfig::builtin(),
    }
}

// ── Project context ────────────────────────────────────────────────────

/// A project export: palette and named text styles.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default)]
    pub colors: Vec<PaletteColor>,
    #[serde(default)]
    pub text_styles: Vec<TextStyle>,
}

/// A [`HostContext`] backed by a [`Project`] and an option map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectContext {
    pub project: Project,
    pub options: BTreeMap<String, String>,
}

impl ProjectContext {
    #[must_use]
    pub fn new(project: Project) -> Self {
        Self {
            project,
            options: BTreeMap::new(),
        }
    }

    /// Set an option.
    #[must_use]
    pub fn with_option(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(name.into(), value.into());
        self
    }
}

impl HostContext for ProjectContext {
    fn option(&self, name: &str) -> Option<String> {
        self.options.get(name).cloned()
    }

    fn colors(&self) -> &[PaletteColor] {
        &self.project.colors
    }

    fn find_text_style_equal(&self, style: &TextStyle) -> Option<&TextStyle> {
        self.project
            .text_styles
            .iter()
            .find(|candidate| candidate.same_style(style))
    }
}
