// SPDX-License-Identifier: Apache-2.0
//! Merging text style runs that resolve to the same classes.

use std::collections::HashMap;

use crate::model::{TextRange, TextStyle, TextStyleRun};

/// A run after merging: the first run's style, the class list every merged
/// run shares, and the span from the first run's start to the last merged
/// run's end.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedRun {
    pub range: TextRange,
    pub text_style: TextStyle,
    pub classes: Vec<String>,
}

/// Fold `runs` left to right, keyed by the space-joined class list.
///
/// A run whose key was already seen extends that earlier entry's end to its
/// own end, even when differently-classed runs came in between. Output is in
/// first-occurrence order of each key.
pub fn merge_runs<F>(runs: &[TextStyleRun], mut classify: F) -> Vec<MergedRun>
where
    F: FnMut(&TextStyle) -> Vec<String>,
{
    let mut merged: Vec<MergedRun> = Vec::new();
    let mut by_key: HashMap<String, usize> = HashMap::new();

    for run in runs {
        let classes = classify(&run.text_style);
        let key = classes.join(" ");
        if let Some(&index) = by_key.get(&key) {
            merged[index].range.end = run.range.end;
        } else {
            by_key.insert(key, merged.len());
            merged.push(MergedRun {
                range: run.range,
                text_style: run.text_style.clone(),
                classes,
            });
        }
    }
    merged
}

/// The characters of `content` covered by `range`, clamped to its length.
#[must_use]
pub fn slice_content(content: &str, range: TextRange) -> &str {
    let byte_offset = |chars: usize| {
        content
            .char_indices()
            .nth(chars)
            .map_or(content.len(), |(offset, _)| offset)
    };
    let start = byte_offset(range.start);
    let end = byte_offset(range.end);
    if start >= end { "" } else { &content[start..end] }
}
