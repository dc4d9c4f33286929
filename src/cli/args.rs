//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// Publish the site: commit, push main, and force-sync gh-pages
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Commit message words, joined with spaces
    /// (default: "Update portfolio - <timestamp>").
    /// Put `--` first when the message starts with a dash, e.g. `pagepush -- -v fix`
    #[arg(value_name = "WORD", trailing_var_arg = true, allow_hyphen_values = true)]
    pub message: Vec<String>,

    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (not read unless given)
    #[arg(short = 'C', long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Print executed commands and their exit statuses
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("pagepush").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_words() {
        let cli = parse(&[]);
        assert!(cli.message.is_empty());
        assert!(cli.config.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_words_collected_in_order() {
        let cli = parse(&["Add", "new", "photos"]);
        assert_eq!(cli.message, ["Add", "new", "photos"]);
    }

    #[test]
    fn test_options_before_words() {
        let cli = parse(&["-v", "-C", "deploy.toml", "fix", "typo"]);
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("deploy.toml")));
        assert_eq!(cli.message, ["fix", "typo"]);
    }

    #[test]
    fn test_hyphen_words_after_first_word() {
        let cli = parse(&["fix", "-v", "--flag"]);
        assert!(!cli.verbose);
        assert_eq!(cli.message, ["fix", "-v", "--flag"]);
    }

    #[test]
    fn test_double_dash_escapes_words() {
        let cli = parse(&["--", "-v", "first"]);
        assert!(!cli.verbose);
        assert_eq!(cli.message, ["-v", "first"]);
    }

    #[test]
    fn test_message_help_mentions_double_dash() {
        let command = Cli::command();
        let message = command
            .get_arguments()
            .find(|arg| arg.get_id() == "message")
            .unwrap();
        let help = message.get_help().unwrap().to_string();
        assert!(help.contains("`--`"));
    }

    #[test]
    fn test_unknown_color_rejected() {
        let result = Cli::try_parse_from(["pagepush", "--color", "sometimes"]);
        assert!(result.is_err());
    }
}
