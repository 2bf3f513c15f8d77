#![no_main]

use libfuzzer_sys::fuzz_target;
use twz_render::{Project, ProjectContext, layer_code, parse_layer};
use twz_style::{PaletteColor, ThemeConfig};

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };
    if json.len() > 16 * 1024 {
        return;
    }

    // Malformed or unsupported layers must be errors, never panics.
    let Ok(layer) = parse_layer(json) else {
        return;
    };

    let Ok(theme) = ThemeConfig::builtin() else {
        return;
    };
    let ctx = ProjectContext::new(Project {
        colors: vec![
            PaletteColor::new("red", 255, 0, 0),
            PaletteColor::new("black", 0, 0, 0),
        ],
        text_styles: Vec::new(),
    })
    .with_option("maxColorDistance", "40");

    let output = layer_code(&theme, &ctx, &layer);
    assert!(
        output.code.starts_with("<div class=") || output.code.starts_with("<p class=") || output.code.is_empty(),
        "unexpected markup: {}",
        output.code
    );
});
