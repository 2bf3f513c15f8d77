#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use twz_style::ThemeScale;

#[derive(Debug, Arbitrary)]
struct Input {
    values: Vec<f64>,
    target: f64,
}

fuzz_target!(|input: Input| {
    if input.values.len() > 256 {
        return;
    }
    let scale: ThemeScale = input
        .values
        .iter()
        .enumerate()
        .map(|(index, value)| (format!("k{index}"), *value))
        .collect();

    let first = scale.closest_key(input.target).map(str::to_string);
    let second = scale.closest_key(input.target).map(str::to_string);
    assert_eq!(first, second, "closest_key is not deterministic");

    match first {
        None => assert!(scale.is_empty()),
        Some(key) => assert!(scale.get(&key).is_some(), "unknown key {key}"),
    }
});
