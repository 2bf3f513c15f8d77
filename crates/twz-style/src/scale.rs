// SPDX-License-Identifier: Apache-2.0
//! Numeric scales and nearest-value resolution.
//!
//! A theme category (font sizes, radii, opacity steps, ...) is written as a
//! mapping from a class suffix to a value that is either a plain number or a
//! unit-suffixed string such as `"1.5rem"`. [`RawScale`] keeps that mapping in
//! object property order; [`normalize`] strips units into a [`ThemeScale`],
//! which answers "which key is closest to this value" via
//! [`ThemeScale::closest_key`].
//!
//! Property order is that of a JavaScript object: array-index keys (`"0"`,
//! `"2"`, `"45"`) come first in ascending numeric order, then every other key
//! (`"default"`, `"-45"`, `"01"`) in declaration order. It is the tie-break
//! order of the resolver and the iteration order of breakpoints and gradient
//! directions.

use std::fmt;
use std::sync::LazyLock;

use regex_lite::Regex;
use serde::Deserialize;
use serde::de::{Deserializer, MapAccess, Visitor};

/// Leading numeric part of a scale value (`parseFloat` semantics).
static NUMERIC_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").expect("numeric prefix regex")
});

// ── Property order ─────────────────────────────────────────────────────

/// `key` as a canonical array index (no sign, no leading zero, below
/// `u32::MAX`).
fn array_index(key: &str) -> Option<u32> {
    let canonical = !key.is_empty()
        && key.bytes().all(|byte| byte.is_ascii_digit())
        && (key == "0" || !key.starts_with('0'));
    if !canonical {
        return None;
    }
    key.parse::<u32>().ok().filter(|&index| index != u32::MAX)
}

/// Position at which a new `key` is placed among `keys` in property order.
pub(crate) fn property_position<'k>(
    mut keys: impl ExactSizeIterator<Item = &'k str>,
    key: &str,
) -> usize {
    let len = keys.len();
    match array_index(key) {
        Some(index) => keys
            .position(|existing| array_index(existing).is_none_or(|other| other > index))
            .unwrap_or(len),
        None => len,
    }
}

// ── Raw values ─────────────────────────────────────────────────────────

/// A scale value exactly as written in a theme document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ScaleValue {
    /// A bare number (`0.75`, `100`).
    Number(f64),
    /// Any string, usually a number with a unit (`"0.5rem"`, `"2px"`).
    Text(String),
}

impl ScaleValue {
    /// The string form, if this value was written as a string.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            Self::Number(_) => None,
        }
    }

    /// The numeric value with any unit suffix stripped.
    ///
    /// Strings without a numeric prefix yield `NaN`.
    #[must_use]
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Number(value) => *value,
            Self::Text(text) => parse_numeric_prefix(text),
        }
    }
}

impl From<f64> for ScaleValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for ScaleValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ScaleValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Parse the numeric prefix of `text`, ignoring any trailing unit.
///
/// `"1.5rem"` → 1.5, `"-0.05em"` → -0.05, `".025em"` → 0.025, `"none"` → NaN.
#[must_use]
pub fn parse_numeric_prefix(text: &str) -> f64 {
    NUMERIC_PREFIX
        .find(text)
        .and_then(|found| found.as_str().trim().parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// A theme category in property order, before unit normalization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawScale {
    entries: Vec<(String, ScaleValue)>,
}

impl RawScale {
    /// Create an empty scale.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace `key`. A replaced key keeps its position; a new key
    /// is placed in property order.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ScaleValue>) {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            entry.1 = value;
            return;
        }
        let keys = self.entries.iter().map(|(existing, _)| existing.as_str());
        let at = property_position(keys, &key);
        self.entries.insert(at, (key, value));
    }

    /// Look up the raw value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ScaleValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    /// Iterate entries in property order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ScaleValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the scale has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RawScale
where
    K: Into<String>,
    V: Into<ScaleValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut scale = Self::new();
        for (key, value) in iter {
            scale.insert(key, value);
        }
        scale
    }
}

impl<'de> Deserialize<'de> for RawScale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RawScaleVisitor;

        impl<'de> Visitor<'de> for RawScaleVisitor {
            type Value = RawScale;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a mapping of scale keys to numbers or strings")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<RawScale, A::Error> {
                let mut scale = RawScale::new();
                while let Some((key, value)) = access.next_entry::<String, ScaleValue>()? {
                    scale.insert(key, value);
                }
                Ok(scale)
            }
        }

        deserializer.deserialize_map(RawScaleVisitor)
    }
}

// ── Normalized scales ──────────────────────────────────────────────────

/// A theme category with unit-free values, ready for nearest-value lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThemeScale {
    entries: Vec<(String, f64)>,
}

impl ThemeScale {
    /// Look up the value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| *value)
    }

    /// A copy of this scale without `key`.
    #[must_use]
    pub fn without(&self, key: &str) -> Self {
        self.entries
            .iter()
            .filter(|(existing, _)| existing != key)
            .cloned()
            .collect()
    }

    /// Iterate entries in scale order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), *value))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the scale has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The key whose value is nearest to `target`.
    ///
    /// Candidates are ranked by `(|value - target|, index)`, so among
    /// equidistant values the earliest key in scale order wins. `NaN` values
    /// rank after every finite distance. Returns `None` only for an empty
    /// scale.
    #[must_use]
    pub fn closest_key(&self, target: f64) -> Option<&str> {
        let mut ranked: Vec<(f64, usize)> = self
            .entries
            .iter()
            .enumerate()
            .map(|(index, (_, value))| ((value - target).abs(), index))
            .collect();
        ranked.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
        ranked
            .first()
            .map(|&(_, index)| self.entries[index].0.as_str())
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for ThemeScale {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        }
    }
}

/// Strip units from every value of `raw`, keeping keys and order.
#[must_use]
pub fn normalize(raw: &RawScale) -> ThemeScale {
    raw.iter()
        .map(|(key, value)| (key, value.to_number()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_prefix_strips_units() {
        assert_eq!(parse_numeric_prefix("1.5rem"), 1.5);
        assert_eq!(parse_numeric_prefix("9999px"), 9999.0);
        assert_eq!(parse_numeric_prefix("-0.05em"), -0.05);
        assert_eq!(parse_numeric_prefix(".025em"), 0.025);
        assert_eq!(parse_numeric_prefix("-45deg"), -45.0);
        assert_eq!(parse_numeric_prefix("100%"), 100.0);
        assert_eq!(parse_numeric_prefix("0"), 0.0);
    }

    #[test]
    fn non_numeric_values_become_nan() {
        assert!(parse_numeric_prefix("none").is_nan());
        assert!(parse_numeric_prefix("").is_nan());
        assert!(parse_numeric_prefix("rem").is_nan());
    }

    #[test]
    fn normalize_keeps_keys_and_order() {
        let raw: RawScale = [("sm", "0.125rem"), ("lg", "0.5rem"), ("none", "0")]
            .into_iter()
            .collect();
        let scale = normalize(&raw);
        let keys: Vec<&str> = scale.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, ["sm", "lg", "none"]);
        assert_eq!(scale.get("lg"), Some(0.5));
    }

    #[test]
    fn deserialize_preserves_declaration_order() {
        let raw: RawScale =
            serde_json::from_str(r#"{"z": 1, "a": "2px", "m": 0.5}"#).expect("scale json");
        let keys: Vec<&str> = raw.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, ["z", "a", "m"]);
        assert_eq!(raw.get("a"), Some(&ScaleValue::Text("2px".to_string())));
    }

    #[test]
    fn array_index_keys_come_first_in_ascending_order() {
        let raw: RawScale = serde_json::from_str(
            r#"{"default": "1px", "8": "8px", "-45": 1, "0": "0", "2": "2px", "01": 3}"#,
        )
        .expect("scale json");
        let keys: Vec<&str> = raw.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, ["0", "2", "8", "default", "-45", "01"]);
    }

    #[test]
    fn array_index_rejects_non_canonical_keys() {
        assert_eq!(array_index("0"), Some(0));
        assert_eq!(array_index("180"), Some(180));
        assert_eq!(array_index("-45"), None);
        assert_eq!(array_index("007"), None);
        assert_eq!(array_index("1.5"), None);
        assert_eq!(array_index(""), None);
        assert_eq!(array_index("4294967295"), None);
    }

    #[test]
    fn duplicate_keys_keep_first_position_and_last_value() {
        let raw: RawScale =
            serde_json::from_str(r#"{"a": 1, "b": 2, "a": 3}"#).expect("scale json");
        let scale = normalize(&raw);
        let entries: Vec<(&str, f64)> = scale.iter().collect();
        assert_eq!(entries, [("a", 3.0), ("b", 2.0)]);
    }

    #[test]
    fn closest_key_picks_minimum_distance() {
        let scale: ThemeScale = [("sm", 0.125), ("md", 0.375), ("lg", 0.5)]
            .into_iter()
            .collect();
        assert_eq!(scale.closest_key(0.4), Some("md"));
        assert_eq!(scale.closest_key(1.5), Some("lg"));
        assert_eq!(scale.closest_key(-3.0), Some("sm"));
    }

    #[test]
    fn closest_key_ties_resolve_to_first_in_order() {
        let scale: ThemeScale = [("a", 1.0), ("b", 3.0)].into_iter().collect();
        assert_eq!(scale.closest_key(2.0), Some("a"));

        let reversed: ThemeScale = [("b", 3.0), ("a", 1.0)].into_iter().collect();
        assert_eq!(reversed.closest_key(2.0), Some("b"));
    }

    #[test]
    fn closest_key_prefers_first_key_sharing_a_value() {
        let scale: ThemeScale = [("first", 2.0), ("second", 2.0)].into_iter().collect();
        assert_eq!(scale.closest_key(2.0), Some("first"));
    }

    #[test]
    fn nan_values_are_never_preferred() {
        let scale: ThemeScale = [("broken", f64::NAN), ("far", 100.0)].into_iter().collect();
        assert_eq!(scale.closest_key(0.0), Some("far"));
    }

    #[test]
    fn closest_key_on_empty_scale_is_none() {
        assert_eq!(ThemeScale::default().closest_key(1.0), None);
    }

    #[test]
    fn without_removes_only_the_named_key() {
        let scale: ThemeScale = [("none", 0.0), ("xs", 20.0)].into_iter().collect();
        let trimmed = scale.without("none");
        assert_eq!(trimmed.len(), 1);
        assert_eq!(trimmed.get("none"), None);
        assert_eq!(scale.len(), 2);
    }
}
