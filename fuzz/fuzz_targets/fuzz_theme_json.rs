#![no_main]

use libfuzzer_sys::fuzz_target;
use twz_style::{ClassResolver, ColorMatcher, ShapeLayer, ThemeConfig};

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };
    if json.len() > 16 * 1024 {
        return;
    }
    let Ok(theme) = ThemeConfig::from_json(json) else {
        return;
    };

    // Every classifier must tolerate arbitrary scale values (NaN included).
    let resolver = ClassResolver::new(&theme, ColorMatcher::new(&[]));
    let layer = ShapeLayer {
        border_radius: 12.0,
        opacity: 0.5,
        rotation: Some(-30.0),
        ..ShapeLayer::default()
    };
    let classes = resolver.shape_classes(&layer);
    for class in &classes {
        assert!(!class.is_empty(), "empty class in {classes:?}");
    }

    // Breakpoint keys are unique.
    let screens: Vec<&str> = theme.screens.iter().collect();
    let mut deduped = screens.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(deduped.len(), screens.len(), "duplicate breakpoints");
});
