#![forbid(unsafe_code)]

//! Design attribute to utility class resolution.
//!
//! # Role in twz
//! `twz-style` is the pure core: it knows how a theme's numeric scales are
//! read, how a pixel value finds its nearest scale step, how a layer color
//! finds its nearest project color, and which class each design attribute
//! turns into. It performs no I/O and holds no state between calls.
//!
//! # This crate provides
//! - [`ThemeConfig`] with ordered [`RawScale`] categories and [`Breakpoints`].
//! - [`ThemeScale::closest_key`], the nearest-value resolver.
//! - [`ColorMatcher`] for palette lookup with a distance cutoff.
//! - Per-attribute classifiers in [`typography`], [`shape`] and [`gradient`].
//! - [`merge_runs`] for collapsing text runs that share a class list.
//! - [`ClassResolver`], which runs the classifiers for a whole layer.

/// Nearest project color lookup.
pub mod color;
/// Gradient direction and color-stop classes.
pub mod gradient;
/// Layer data model.
pub mod model;
/// Whole-layer class resolution.
pub mod resolve;
/// Text run merging.
pub mod runs;
/// Scale normalization and nearest-value resolution.
pub mod scale;
/// Shape classifiers.
pub mod shape;
/// Slugs and name comparison.
pub mod slug;
/// Theme configuration.
pub mod theme;
/// Typography and content classifiers.
pub mod typography;

pub use color::{ColorMatcher, rgb_distance};
pub use gradient::{direction_class, direction_label, gradient_classes};
pub use model::{
    Border, BorderFill, Color, ColorStop, Fill, FillKind, Gradient, Layer, PaletteColor, Point,
    Rect, Shadow, ShadowKind, ShapeLayer, TextLayer, TextRange, TextStyle, TextStyleRun,
};
pub use resolve::ClassResolver;
pub use runs::{MergedRun, merge_runs, slice_content};
pub use scale::{RawScale, ScaleValue, ThemeScale, normalize, parse_numeric_prefix};
pub use slug::{eq_ignore_case, slugify};
pub use theme::{Breakpoints, ConfigError, DEFAULT_THEME_JSON, ThemeConfig, ThemeScales};
pub use typography::REM;
