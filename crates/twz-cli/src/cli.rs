use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::commands::{
    CommentArgs, ExportArgs, LayerArgs, StyleguideArgs, run_colors, run_comment, run_export,
    run_layer, run_text_styles,
};
use crate::error::{CliError, Result};
use crate::logging;

#[derive(Debug, Parser)]
#[command(
    name = "twz",
    about = "Turn exported design layers into utility-class markup",
    version
)]
pub struct Cli {
    /// Log resolution decisions to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render one layer as HTML.
    Layer(LayerArgs),

    /// Print the project palette as a color map.
    Colors(StyleguideArgs),

    /// Print named text styles as `@apply` components.
    #[command(name = "text-styles")]
    TextStyles(StyleguideArgs),

    /// Write `colors.js` and `fonts.css` for the project.
    Export(ExportArgs),

    /// Print text as a CSS comment.
    Comment(CommentArgs),
}

/// Project and option inputs shared by every command that resolves classes.
#[derive(Debug, Clone, Default, Args)]
pub struct ContextArgs {
    /// Project JSON with `colors` and `textStyles`.
    #[arg(long, value_name = "FILE")]
    pub project: Option<PathBuf>,

    /// Host option, e.g. `font=SFProText` or `maxColorDistance=20`.
    #[arg(long = "option", short = 'o', value_name = "KEY=VALUE", value_parser = parse_option)]
    pub options: Vec<(String, String)>,

    /// Theme configuration JSON replacing the bundled theme.
    #[arg(long, value_name = "FILE")]
    pub theme: Option<PathBuf>,
}

pub(crate) fn parse_option(raw: &str) -> Result<(String, String)> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| CliError::invalid(format!("option `{raw}` is not KEY=VALUE")))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(CliError::invalid(format!("option `{raw}` has an empty key")));
    }
    Ok((key.to_string(), value.to_string()))
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.verbose);
    let output = execute(cli.command)?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

/// Run a command and return what it would print.
pub fn execute(command: Commands) -> Result<String> {
    match command {
        Commands::Layer(args) => run_layer(&args),
        Commands::Colors(args) => run_colors(&args),
        Commands::TextStyles(args) => run_text_styles(&args),
        Commands::Export(args) => run_export(&args),
        Commands::Comment(args) => Ok(run_comment(&args)),
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Commands, execute, parse_option};
    use crate::commands::CommentArgs;

    #[test]
    fn option_pairs_split_on_first_equals() {
        assert_eq!(
            parse_option("tailwind={\"a\":\"b=c\"}").expect("option"),
            ("tailwind".to_string(), "{\"a\":\"b=c\"}".to_string())
        );
        assert!(parse_option("font").is_err());
        assert!(parse_option("=value").is_err());
    }

    #[test]
    fn layer_command_parses_context_flags() {
        let cli = Cli::try_parse_from([
            "twz",
            "--verbose",
            "layer",
            "button.json",
            "--project",
            "project.json",
            "-o",
            "font=SFProText",
            "--option",
            "color=black",
            "--json",
        ])
        .expect("valid arguments");
        assert!(cli.verbose);
        let Commands::Layer(args) = cli.command else {
            panic!("expected layer command");
        };
        assert_eq!(args.input.to_str(), Some("button.json"));
        assert!(args.json);
        assert_eq!(args.context.options.len(), 2);
        assert_eq!(args.context.options[1], ("color".to_string(), "black".to_string()));
    }

    #[test]
    fn malformed_option_is_rejected_by_parser() {
        let result = Cli::try_parse_from(["twz", "colors", "--option", "font"]);
        assert!(result.is_err());
    }

    #[test]
    fn comment_command_dispatches() {
        let output = execute(Commands::Comment(CommentArgs {
            text: vec!["Primary".to_string(), "button".to_string()],
        }))
        .expect("comment");
        assert_eq!(output, "/* Primary button */");
    }
}
