// SPDX-License-Identifier: Apache-2.0
//! Shape classifiers: radius, opacity, shadow, fill, border, size, rotation.
//!
//! Only the first shadow, fill and border of a layer are considered.

use crate::color::ColorMatcher;
use crate::gradient::gradient_classes;
use crate::model::{Border, Fill, FillKind, Rect, Shadow, ShadowKind};
use crate::scale::{ScaleValue, ThemeScale, parse_numeric_prefix};
use crate::theme::ThemeConfig;
use crate::typography::REM;

/// `<prefix>-<key>`, or the bare prefix for the `default` key.
fn prefixed(prefix: &str, key: &str) -> String {
    if key == "default" {
        prefix.to_string()
    } else {
        format!("{prefix}-{key}")
    }
}

/// `rounded` / `rounded-<key>` for a pixel radius; `none` is neutral.
#[must_use]
pub fn border_radius_class(theme: &ThemeConfig, radius: f64) -> Option<String> {
    let radii = theme.border_radii();
    let key = radii.closest_key(radius / REM)?;
    (key != "none").then(|| prefixed("rounded", key))
}

/// `opacity-<key>`; `100` is neutral.
#[must_use]
pub fn opacity_class(theme: &ThemeConfig, opacity: f64) -> Option<String> {
    let steps = theme.opacities();
    let key = steps.closest_key(opacity)?;
    (key != "100").then(|| format!("opacity-{key}"))
}

/// Whether a `box-shadow` entry draws inside the box.
fn is_inset(value: &ScaleValue) -> bool {
    value.as_text().is_some_and(|css| css.contains("inset"))
}

/// Blur radius of a `box-shadow` entry.
///
/// Strings are split on spaces and the blur is the third token (fourth after
/// a leading `inset`); entries without a blur token, such as `none`, count
/// as no blur. Numeric entries are the blur itself.
#[must_use]
pub fn shadow_blur(value: &ScaleValue) -> f64 {
    match value {
        ScaleValue::Number(blur) => *blur,
        ScaleValue::Text(css) => {
            let parts: Vec<&str> = css.split(' ').collect();
            let index = if parts.first() == Some(&"inset") { 3 } else { 2 };
            parts
                .get(index)
                .map_or(0.0, |token| parse_numeric_prefix(token))
        }
    }
}

/// `shadow` / `shadow-<key>` for the first layer shadow.
///
/// Inner shadows match only `inset` theme entries; outer shadows match only
/// the others.
#[must_use]
pub fn shadow_class(theme: &ThemeConfig, shadows: &[Shadow]) -> Option<String> {
    let shadow = shadows.first()?;
    let inner = shadow.kind == ShadowKind::Inner;
    let blurs: ThemeScale = theme
        .theme
        .box_shadow
        .iter()
        .filter(|(_, value)| is_inset(value) == inner)
        .map(|(key, value)| (key, shadow_blur(value)))
        .collect();
    let key = blurs.closest_key(shadow.blur_radius)?;
    (key != "none").then(|| prefixed("shadow", key))
}

/// Background classes for the first fill: `bg-<name>` for a color fill,
/// direction and stop classes for a gradient fill.
#[must_use]
pub fn background_classes(
    theme: &ThemeConfig,
    colors: &ColorMatcher<'_>,
    fills: &[Fill],
) -> Vec<String> {
    let Some(fill) = fills.first() else {
        return Vec::new();
    };
    match fill.kind {
        FillKind::Color => colors
            .class(fill.color.as_ref(), "bg-")
            .into_iter()
            .collect(),
        FillKind::Gradient => fill
            .gradient
            .as_ref()
            .map(|gradient| gradient_classes(theme, colors, gradient))
            .unwrap_or_default(),
    }
}

/// `border` / `border-<key>` for the first border's thickness; `0` is neutral.
#[must_use]
pub fn border_width_class(theme: &ThemeConfig, borders: &[Border]) -> Option<String> {
    let border = borders.first()?;
    let widths = theme.border_widths();
    let key = widths.closest_key(border.thickness)?;
    (key != "0").then(|| prefixed("border", key))
}

/// `border-<name>` for the first border's color.
#[must_use]
pub fn border_color_class(colors: &ColorMatcher<'_>, borders: &[Border]) -> Option<String> {
    let border = borders.first()?;
    colors.class(border.fill.color.as_ref(), "border-")
}

/// `max-w-<key>` for the layer width. Never suppressed; the `none` entry is
/// not a candidate.
#[must_use]
pub fn max_width_class(theme: &ThemeConfig, rect: &Rect) -> Option<String> {
    let widths = theme.max_widths().without("none");
    let key = widths.closest_key(rect.width / REM)?;
    Some(format!("max-w-{key}"))
}

/// `rotate-<key>` for positive steps, `-rotate-<abs>` for negative ones;
/// a zero step is neutral.
#[must_use]
pub fn rotation_class(theme: &ThemeConfig, degrees: f64) -> Option<String> {
    let steps = theme.rotations();
    let key = steps.closest_key(degrees)?;
    let value = steps.get(key)?;
    if value == 0.0 {
        return None;
    }
    if value < 0.0 {
        let magnitude = key.strip_prefix('-').unwrap_or(key);
        Some(format!("-rotate-{magnitude}"))
    } else {
        Some(format!("rotate-{key}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BorderFill, Color, PaletteColor};

    fn theme() -> ThemeConfig {
        ThemeConfig::builtin().expect("bundled theme")
    }

    fn palette() -> Vec<PaletteColor> {
        vec![
            PaletteColor::new("red", 255, 0, 0),
            PaletteColor::new("green", 0, 255, 0),
        ]
    }

    fn border(thickness: f64, color: Option<Color>) -> Border {
        Border {
            thickness,
            fill: BorderFill { color },
        }
    }

    #[test]
    fn radius_resolves_nearest_rem_step() {
        let theme = theme();
        assert_eq!(border_radius_class(&theme, 24.0), Some("rounded-lg".to_string()));
        assert_eq!(border_radius_class(&theme, 4.0), Some("rounded".to_string()));
        assert_eq!(border_radius_class(&theme, 0.0), None);
    }

    #[test]
    fn opacity_full_is_neutral() {
        let theme = ThemeConfig::from_json(r#"{"theme": {"opacity": {"100": 1.0, "75": 0.75}}}"#)
            .expect("theme");
        assert_eq!(opacity_class(&theme, 1.0), None);
        assert_eq!(opacity_class(&theme, 0.7), Some("opacity-75".to_string()));
    }

    #[test]
    fn shadow_blur_reads_css_tokens() {
        assert_eq!(shadow_blur(&"0 4px 6px -1px rgba(0, 0, 0, 0.1)".into()), 6.0);
        assert_eq!(shadow_blur(&"inset 0 2px 4px 0 rgba(0, 0, 0, 0.06)".into()), 4.0);
        assert_eq!(shadow_blur(&"none".into()), 0.0);
        assert_eq!(shadow_blur(&ScaleValue::Number(12.0)), 12.0);
    }

    #[test]
    fn outer_shadow_matches_drop_shadows() {
        let theme = theme();
        let shadow = Shadow {
            kind: ShadowKind::Outer,
            blur_radius: 4.0,
        };
        assert_eq!(shadow_class(&theme, &[shadow]), Some("shadow".to_string()));

        let large = Shadow {
            kind: ShadowKind::Outer,
            blur_radius: 14.0,
        };
        assert_eq!(shadow_class(&theme, &[large]), Some("shadow-lg".to_string()));
    }

    #[test]
    fn outer_shadow_never_resolves_to_inset_entry() {
        let theme = theme();
        let shadow = Shadow {
            kind: ShadowKind::Outer,
            blur_radius: 4.0,
        };
        let class = shadow_class(&theme, &[shadow]);
        assert_ne!(class.as_deref(), Some("shadow-inner"));
        assert_eq!(class.as_deref(), Some("shadow"));
    }

    #[test]
    fn inner_shadow_matches_inset_entries() {
        let theme = theme();
        let shadow = Shadow {
            kind: ShadowKind::Inner,
            blur_radius: 10.0,
        };
        assert_eq!(shadow_class(&theme, &[shadow]), Some("shadow-inner".to_string()));
    }

    #[test]
    fn unblurred_or_missing_shadow_is_neutral() {
        let theme = theme();
        assert_eq!(shadow_class(&theme, &[]), None);
        let flat = Shadow {
            kind: ShadowKind::Outer,
            blur_radius: 0.0,
        };
        assert_eq!(shadow_class(&theme, &[flat]), None);
    }

    #[test]
    fn only_first_fill_counts() {
        let theme = theme();
        let palette = palette();
        let matcher = ColorMatcher::new(&palette);
        let fills = [
            Fill::color(Color::rgb(0, 0, 1)),
            Fill::color(Color::rgb(255, 0, 0)),
        ];
        assert!(background_classes(&theme, &matcher, &fills).is_empty());
        assert_eq!(
            background_classes(&theme, &matcher, &fills[1..]),
            ["bg-red"]
        );
    }

    #[test]
    fn border_width_and_color() {
        let theme = theme();
        let palette = palette();
        let matcher = ColorMatcher::new(&palette);
        let borders = [border(1.0, Some(Color::rgb(0, 255, 0)))];
        assert_eq!(border_width_class(&theme, &borders), Some("border".to_string()));
        assert_eq!(
            border_color_class(&matcher, &borders),
            Some("border-green".to_string())
        );

        let thick = [border(3.5, None)];
        assert_eq!(border_width_class(&theme, &thick), Some("border-4".to_string()));
        assert_eq!(border_color_class(&matcher, &thick), None);

        assert_eq!(border_width_class(&theme, &[border(0.0, None)]), None);
        // `2` is enumerated before `default`, so it wins the tie at 1.5.
        assert_eq!(
            border_width_class(&theme, &[border(1.5, None)]),
            Some("border-2".to_string())
        );
        assert_eq!(border_width_class(&theme, &[]), None);
    }

    #[test]
    fn max_width_never_picks_none() {
        let theme = theme();
        let rect = Rect {
            width: 0.0,
            height: 10.0,
        };
        assert_eq!(max_width_class(&theme, &rect), Some("max-w-xs".to_string()));

        let wide = Rect {
            width: 900.0,
            height: 10.0,
        };
        assert_eq!(max_width_class(&theme, &wide), Some("max-w-4xl".to_string()));
    }

    #[test]
    fn rotation_sign_moves_to_prefix() {
        let theme = theme();
        assert_eq!(rotation_class(&theme, -45.0), Some("-rotate-45".to_string()));
        assert_eq!(rotation_class(&theme, -50.0), Some("-rotate-45".to_string()));
        assert_eq!(rotation_class(&theme, 90.0), Some("rotate-90".to_string()));
        assert_eq!(rotation_class(&theme, 5.0), None);
        // `0` is enumerated before `-45`, so the tie at -22.5 is neutral.
        assert_eq!(rotation_class(&theme, -22.5), None);
    }
}
