// SPDX-License-Identifier: Apache-2.0
//! Project-wide exports: the palette as a color map and named text
//! styles as `@apply` components.

use std::fmt::Write as _;

use serde::ser::{Serialize, Serializer};
use twz_style::{ClassResolver, PaletteColor, TextStyle, ThemeConfig, slugify};

use crate::context::{HostContext, ResolveOptions, resolve_theme};
use crate::error::{RenderError, Result};
use crate::output::{CodeOutput, ExportedFile, Language};

/// Filename of the exported color map.
pub const COLORS_FILENAME: &str = "colors.js";
/// Filename of the exported text style components.
pub const TEXT_STYLES_FILENAME: &str = "fonts.css";

/// Palette names mapped to hex, first-seen order, last value wins.
struct ColorMap(Vec<(String, String)>);

impl ColorMap {
    fn new(colors: &[PaletteColor]) -> Self {
        let mut entries: Vec<(String, String)> = Vec::with_capacity(colors.len());
        for color in colors {
            let hex = color.hex();
            match entries.iter_mut().find(|(name, _)| *name == color.name) {
                Some(entry) => entry.1 = hex,
                None => entries.push((color.name.clone(), hex)),
            }
        }
        Self(entries)
    }
}

impl Serialize for ColorMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(name, hex)| (name, hex)))
    }
}

/// `let colors = { "name": "#rrggbb", … }` with two-space indentation.
pub fn styleguide_colors(colors: &[PaletteColor]) -> Result<CodeOutput> {
    let map = serde_json::to_string_pretty(&ColorMap::new(colors)).map_err(RenderError::Output)?;
    Ok(CodeOutput::new(format!("let colors = {map}"), Language::Js))
}

/// One `.slug { @apply … }` component per named style with classes.
#[must_use]
pub fn text_styles_css<C: HostContext + ?Sized>(
    theme: &ThemeConfig,
    ctx: &C,
    styles: &[TextStyle],
) -> String {
    let options = ResolveOptions::from_context(ctx);
    let resolver = ClassResolver::new(theme, options.color_matcher(ctx.colors()))
        .default_font(options.default_font.as_deref());

    let mut css = String::new();
    for style in styles {
        let Some(name) = style.name.as_deref() else {
            tracing::debug!("skipping unnamed text style");
            continue;
        };
        let classes = resolver.text_style_classes(style);
        if classes.is_empty() {
            tracing::debug!(name, "text style has no classes");
            continue;
        }
        let _ = write!(
            css,
            ".{} {{\n  @apply .{};\n}}\n",
            slugify(name),
            classes.join(" .")
        );
    }
    css
}

/// [`text_styles_css`] with the theme the context selects.
pub fn styleguide_text_styles<C: HostContext + ?Sized>(
    ctx: &C,
    styles: &[TextStyle],
) -> Result<CodeOutput> {
    let theme = resolve_theme(ctx)?;
    Ok(CodeOutput::new(
        text_styles_css(&theme, ctx, styles),
        Language::Css,
    ))
}

pub fn export_styleguide_colors(colors: &[PaletteColor]) -> Result<ExportedFile> {
    Ok(styleguide_colors(colors)?.into_file(COLORS_FILENAME))
}

pub fn export_styleguide_text_styles<C: HostContext + ?Sized>(
    ctx: &C,
    styles: &[TextStyle],
) -> Result<ExportedFile> {
    Ok(styleguide_text_styles(ctx, styles)?.into_file(TEXT_STYLES_FILENAME))
}

/// A CSS block comment.
#[must_use]
pub fn comment(text: &str) -> String {
    format!("/* {text} */")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_names_keep_first_position() {
        let colors = [
            PaletteColor::new("red", 255, 0, 0),
            PaletteColor::new("blue", 0, 0, 255),
            PaletteColor::new("red", 200, 0, 0),
        ];
        let output = styleguide_colors(&colors).expect("colors");
        assert_eq!(
            output.code,
            "let colors = {\n  \"red\": \"#c80000\",\n  \"blue\": \"#0000ff\"\n}"
        );
    }

    #[test]
    fn empty_palette_is_an_empty_object() {
        let output = styleguide_colors(&[]).expect("colors");
        assert_eq!(output.code, "let colors = {}");
        assert_eq!(output.language, Language::Js);
    }

    #[test]
    fn comment_wraps_text() {
        assert_eq!(comment("Primary button"), "/* Primary button */");
    }
}
