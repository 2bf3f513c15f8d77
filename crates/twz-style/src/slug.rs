// SPDX-License-Identifier: Apache-2.0
//! Class-name friendly slugs and case-insensitive name comparison.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Turn a display name into a class-name slug.
///
/// Accented letters are folded to their base letter (`é` → `e`). Characters
/// other than ASCII letters, digits, `_`, `-` and whitespace are then
/// dropped; the rest is lowercased, runs of whitespace and `_` become `-`,
/// repeated dashes collapse, and a leading dash is removed.
///
/// `"Sample Text Style"` → `sample-text-style`, `"SFProText"` → `sfprotext`.
#[must_use]
pub fn slugify(name: &str) -> String {
    let kept: String = name
        .nfkd()
        .filter(|ch| !is_combining_mark(*ch))
        .filter(|ch| ch.is_ascii_alphanumeric() || *ch == '_' || *ch == '-' || ch.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase();

    let mut slug = String::with_capacity(kept.len());
    for ch in kept.trim().chars() {
        let ch = if ch == '_' || ch.is_whitespace() { '-' } else { ch };
        if ch == '-' && slug.ends_with('-') {
            continue;
        }
        slug.push(ch);
    }

    match slug.strip_prefix('-') {
        Some(rest) => rest.to_string(),
        None => slug,
    }
}

/// Unicode-aware case-insensitive equality of two names.
#[must_use]
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_dasherizes_words() {
        assert_eq!(slugify("Sample Text Style"), "sample-text-style");
        assert_eq!(slugify("Sample text style with color"), "sample-text-style-with-color");
        assert_eq!(slugify("H1"), "h1");
    }

    #[test]
    fn slugify_lowercases_camel_case_without_splitting() {
        assert_eq!(slugify("SFProText"), "sfprotext");
    }

    #[test]
    fn slugify_drops_punctuation_and_collapses_separators() {
        assert_eq!(slugify("  Body / Large__Bold  "), "body-large-bold");
        assert_eq!(slugify("-Leading"), "leading");
        assert_eq!(slugify("Straße"), "strae");
    }

    #[test]
    fn slugify_folds_accents() {
        assert_eq!(slugify("Café Noir"), "cafe-noir");
        assert_eq!(slugify("Crème Brûlée"), "creme-brulee");
        assert_eq!(slugify("Ｗide"), "wide");
    }

    #[test]
    fn eq_ignore_case_matches_mixed_case() {
        assert!(eq_ignore_case("Black", "black"));
        assert!(eq_ignore_case("ÉCRU", "écru"));
        assert!(!eq_ignore_case("black", "black50"));
    }
}
