use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Args;
use twz_render::{
    CodeOutput, OPTION_THEME, Project, ProjectContext, comment, export_styleguide_colors,
    export_styleguide_text_styles, layer, parse_layer, styleguide_colors, styleguide_text_styles,
};
use twz_style::ThemeConfig;

use crate::cli::ContextArgs;
use crate::error::{CliError, Result};

#[derive(Debug, Clone, Args)]
pub struct LayerArgs {
    /// Layer JSON file, or `-` for stdin.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    #[command(flatten)]
    pub context: ContextArgs,

    /// Print `{code, language}` JSON instead of raw code.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Args)]
pub struct StyleguideArgs {
    #[command(flatten)]
    pub context: ContextArgs,

    /// Print `{code, language}` JSON instead of raw code.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub context: ContextArgs,

    /// Directory the exported files are written to.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,
}

#[derive(Debug, Clone, Args)]
pub struct CommentArgs {
    /// Comment text; words are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }
    fs::read_to_string(path).map_err(|source| CliError::ReadInput {
        path: path.to_path_buf(),
        source,
    })
}

/// Build the host context from `--project`, `--theme` and `--option` flags.
///
/// A `--theme` file is validated here and handed on as the `tailwind`
/// option; an explicit `--option tailwind=…` wins over it.
pub fn build_context(args: &ContextArgs) -> Result<ProjectContext> {
    let project: Project = match &args.project {
        Some(path) => serde_json::from_str(&read_input(path)?)?,
        None => Project::default(),
    };
    tracing::debug!(
        colors = project.colors.len(),
        text_styles = project.text_styles.len(),
        "loaded project"
    );

    let mut ctx = ProjectContext::new(project);
    if let Some(path) = &args.theme {
        let json = read_input(path)?;
        ThemeConfig::from_json(&json)?;
        ctx = ctx.with_option(OPTION_THEME, json);
    }
    for (key, value) in &args.options {
        ctx = ctx.with_option(key.as_str(), value.as_str());
    }
    Ok(ctx)
}

fn format_code(output: &CodeOutput, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(output)?)
    } else {
        Ok(output.code.clone())
    }
}

pub fn run_layer(args: &LayerArgs) -> Result<String> {
    let ctx = build_context(&args.context)?;
    let parsed = parse_layer(&read_input(&args.input)?)?;
    let output = layer(&ctx, &parsed)?;
    format_code(&output, args.json)
}

pub fn run_colors(args: &StyleguideArgs) -> Result<String> {
    let ctx = build_context(&args.context)?;
    let output = styleguide_colors(&ctx.project.colors)?;
    format_code(&output, args.json)
}

pub fn run_text_styles(args: &StyleguideArgs) -> Result<String> {
    let ctx = build_context(&args.context)?;
    let output = styleguide_text_styles(&ctx, &ctx.project.text_styles)?;
    format_code(&output, args.json)
}

/// Write both styleguide exports and list the written paths.
pub fn run_export(args: &ExportArgs) -> Result<String> {
    let ctx = build_context(&args.context)?;
    let files = [
        export_styleguide_colors(&ctx.project.colors)?,
        export_styleguide_text_styles(&ctx, &ctx.project.text_styles)?,
    ];

    fs::create_dir_all(&args.out_dir)?;
    let mut written = Vec::with_capacity(files.len());
    for file in &files {
        let path = args.out_dir.join(&file.filename);
        fs::write(&path, &file.code)?;
        tracing::debug!(path = %path.display(), language = %file.language, "wrote export");
        written.push(path.display().to_string());
    }
    Ok(written.join("\n"))
}

#[must_use]
pub fn run_comment(args: &CommentArgs) -> String {
    comment(&args.text.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_project_gives_empty_context() {
        let ctx = build_context(&ContextArgs::default()).expect("context");
        assert!(ctx.project.colors.is_empty());
        assert!(ctx.options.is_empty());
    }

    #[test]
    fn explicit_option_overrides_theme_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let theme = dir.path().join("theme.json");
        fs::write(&theme, r#"{"screens": {}}"#).expect("write theme");

        let ctx = build_context(&ContextArgs {
            theme: Some(theme),
            options: vec![("tailwind".to_string(), "{}".to_string())],
            ..ContextArgs::default()
        })
        .expect("context");
        assert_eq!(ctx.options.get("tailwind").map(String::as_str), Some("{}"));
    }

    #[test]
    fn invalid_theme_file_fails_early() {
        let dir = tempfile::tempdir().expect("tempdir");
        let theme = dir.path().join("theme.json");
        fs::write(&theme, "{ not json").expect("write theme");

        let error = build_context(&ContextArgs {
            theme: Some(theme),
            ..ContextArgs::default()
        })
        .expect_err("malformed theme");
        assert!(error.to_string().starts_with("invalid theme configuration:"));
    }

    #[test]
    fn missing_input_names_the_path() {
        let error = read_input(Path::new("/nonexistent/layer.json")).expect_err("missing file");
        assert!(error.to_string().contains("/nonexistent/layer.json"));
    }
}
