// SPDX-License-Identifier: Apache-2.0
//! Layer dispatch: parse a layer, resolve its classes, render its markup.

use serde_json::Value;
use twz_style::typography::{truncate_class, uppercase_class};
use twz_style::{
    Breakpoints, ClassResolver, Layer, ShapeLayer, TextLayer, ThemeConfig, merge_runs,
    slice_content, slugify,
};

use crate::context::{HostContext, ResolveOptions, resolve_theme};
use crate::error::{RenderError, Result};
use crate::markup::classes_to_code;
use crate::output::{CodeOutput, Language};

/// Parse a layer document, rejecting types other than `text` and `shape`.
pub fn parse_layer(json: &str) -> Result<Layer> {
    let value: Value = serde_json::from_str(json).map_err(RenderError::InvalidLayer)?;
    layer_from_value(value)
}

/// [`parse_layer`] for an already-decoded document.
pub fn layer_from_value(value: Value) -> Result<Layer> {
    let kind = value.get("type").and_then(Value::as_str).map(str::to_owned);
    match kind.as_deref() {
        Some("text" | "shape") | None => {
            serde_json::from_value(value).map_err(RenderError::InvalidLayer)
        }
        Some(other) => Err(RenderError::unsupported(other)),
    }
}

/// Render `layer` against an already-loaded theme.
#[must_use]
pub fn layer_code<C: HostContext + ?Sized>(
    theme: &ThemeConfig,
    ctx: &C,
    layer: &Layer,
) -> CodeOutput {
    let options = ResolveOptions::from_context(ctx);
    let resolver = ClassResolver::new(theme, options.color_matcher(ctx.colors()))
        .default_font(options.default_font.as_deref());
    let code = match layer {
        Layer::Shape(shape) => shape_code(&resolver, shape),
        Layer::Text(text) => text_code(&resolver, ctx, text),
    };
    tracing::debug!(kind = layer.kind(), name = ?layer.name(), "rendered layer");
    CodeOutput::new(code, Language::Html)
}

/// Render `layer` with the theme the context selects.
pub fn layer<C: HostContext + ?Sized>(ctx: &C, layer: &Layer) -> Result<CodeOutput> {
    let theme = resolve_theme(ctx)?;
    Ok(layer_code(&theme, ctx, layer))
}

fn shape_code(resolver: &ClassResolver<'_>, shape: &ShapeLayer) -> String {
    let classes = resolver.shape_classes(shape);
    classes_to_code(&resolver.theme().screens, "div", &classes, "")
}

/// One `p` per merged run. Text is not replicated per breakpoint.
fn text_code<C: HostContext + ?Sized>(
    resolver: &ClassResolver<'_>,
    ctx: &C,
    text: &TextLayer,
) -> String {
    let runs = merge_runs(&text.text_styles, |style| resolver.text_style_classes(style));
    runs.into_iter()
        .map(|run| {
            let content = slice_content(&text.content, run.range);
            let named = ctx
                .find_text_style_equal(&run.text_style)
                .and_then(|style| style.name.as_deref());
            let mut classes = match named {
                Some(name) => vec![slugify(name)],
                None => run.classes,
            };
            classes.extend(
                [uppercase_class(content), truncate_class(content)]
                    .into_iter()
                    .flatten(),
            );
            classes_to_code(&Breakpoints::none(), "p", &classes, content)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
