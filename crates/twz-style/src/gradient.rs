// SPDX-License-Identifier: Apache-2.0
//! Linear gradient fills to direction and color-stop classes.

use crate::color::ColorMatcher;
use crate::model::{Gradient, Point};
use crate::theme::ThemeConfig;

/// Prefixes for the first, second, and any later matched stop.
const STOP_PREFIXES: [&str; 3] = ["from-", "via-", "to-"];

/// Direction label for a gradient running from `from` to `to`.
///
/// The vertical and horizontal components are derived independently and
/// combined as `"<y> <x>"` (`"bottom right"`); either may be missing, and
/// coincident anchors give an empty label.
#[must_use]
pub fn direction_label(from: Point, to: Point) -> String {
    let x = if from.x < to.x {
        Some("right")
    } else if from.x > to.x {
        Some("left")
    } else {
        None
    };
    let y = if from.y < to.y {
        Some("bottom")
    } else if from.y > to.y {
        Some("top")
    } else {
        None
    };
    match (y, x) {
        (Some(y), Some(x)) => format!("{y} {x}"),
        (Some(edge), None) | (None, Some(edge)) => edge.to_string(),
        (None, None) => String::new(),
    }
}

/// `bg-<key>` for the first `backgroundImage` entry whose value contains
/// `label`. An empty label matches nothing.
#[must_use]
pub fn direction_class(theme: &ThemeConfig, label: &str) -> Option<String> {
    if label.is_empty() {
        return None;
    }
    theme
        .theme
        .background_image
        .iter()
        .find(|(_, value)| value.as_text().is_some_and(|css| css.contains(label)))
        .map(|(key, _)| format!("bg-{key}"))
}

/// Direction class followed by one class per matched color stop.
///
/// A gradient without stops yields nothing. Stops with no palette match are
/// skipped and do not use up an ordinal: the first *matched* stop is
/// `from-`, the second `via-`, the rest `to-`.
#[must_use]
pub fn gradient_classes(
    theme: &ThemeConfig,
    colors: &ColorMatcher<'_>,
    gradient: &Gradient,
) -> Vec<String> {
    if gradient.color_stops.is_empty() {
        return Vec::new();
    }

    let label = direction_label(gradient.from, gradient.to);
    let mut classes: Vec<String> = direction_class(theme, &label).into_iter().collect();

    let mut matched = 0usize;
    for stop in &gradient.color_stops {
        let prefix = STOP_PREFIXES[matched.min(STOP_PREFIXES.len() - 1)];
        if let Some(class) = colors.class(stop.color.as_ref(), prefix) {
            classes.push(class);
            matched += 1;
        }
    }
    tracing::trace!(%label, classes = classes.len(), "resolved gradient");
    classes
}
