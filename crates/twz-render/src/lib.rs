#![forbid(unsafe_code)]

//! Code generation on top of `twz-style`.
//!
//! `twz-render` reads project options through a [`HostContext`], loads the
//! theme they select, and turns layers and styleguide entries into HTML,
//! CSS and JS snippets.

pub mod context;
pub mod error;
pub mod layer;
pub mod markup;
pub mod output;
pub mod styleguide;

pub use context::{
    HostContext, OPTION_COLOR, OPTION_FONT, OPTION_MAX_COLOR_DISTANCE, OPTION_THEME, Project,
    ProjectContext, ResolveOptions, resolve_theme,
};
pub use error::{RenderError, Result};
pub use layer::{layer, layer_code, layer_from_value, parse_layer};
pub use markup::{classes_to_code, element};
pub use output::{CodeOutput, ExportedFile, Language};
pub use styleguide::{
    COLORS_FILENAME, TEXT_STYLES_FILENAME, comment, export_styleguide_colors,
    export_styleguide_text_styles, styleguide_colors, styleguide_text_styles, text_styles_css,
};
