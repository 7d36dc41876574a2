//! CLI argument definitions.
//!
//! All Clap derive structs for `ringside` command-line parsing.

use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::config::WeightClass;

// ============================================================================
// Root CLI
// ============================================================================

/// Live scoring and timing console for two-competitor combat matches.
#[derive(Parser, Debug)]
#[command(name = "ringside", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "RINGSIDE_COLOR")]
    pub color: ColorChoice,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive operator console for a match.
    Console(ConsoleArgs),

    /// List the selectable weight categories.
    Categories(CategoriesArgs),

    /// Display version information.
    Version(VersionArgs),
}

// ============================================================================
// Console Command
// ============================================================================

/// Arguments for `console`.
#[derive(Args, Debug)]
pub struct ConsoleArgs {
    /// Red corner competitor name.
    #[arg(long, env = "RINGSIDE_RED")]
    pub red: String,

    /// Blue corner competitor name.
    #[arg(long, env = "RINGSIDE_BLUE")]
    pub blue: String,

    /// Weight category.
    #[arg(long)]
    pub category: Option<WeightClass>,

    /// Round duration, e.g. "3m" or "150s". Clamped to 1m..=10m.
    #[arg(long, default_value = "3m", value_parser = humantime::parse_duration)]
    pub duration: Duration,

    /// Scoreboard output format (human one-liners or NDJSON snapshots).
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `categories`.
#[derive(Args, Debug)]
pub struct CategoriesArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_console(extra: &[&str]) -> Result<Cli, clap::Error> {
        let mut argv = vec!["ringside", "console", "--red", "Kim", "--blue", "Lee"];
        argv.extend_from_slice(extra);
        Cli::try_parse_from(argv)
    }

    #[test]
    fn test_console_minimal() {
        let cli = parse_console(&[]).unwrap();
        let Commands::Console(args) = cli.command else {
            panic!("expected console command");
        };
        assert_eq!(args.red, "Kim");
        assert_eq!(args.blue, "Lee");
        assert_eq!(args.category, None);
        assert_eq!(args.duration, Duration::from_secs(180));
        assert_eq!(args.format, OutputFormat::Human);
    }

    #[test]
    fn test_console_requires_names() {
        let result = Cli::try_parse_from(["ringside", "console", "--red", "Kim"]);
        assert!(result.is_err(), "expected error for missing blue name");
    }

    #[test]
    fn test_duration_parses_humantime() {
        let cli = parse_console(&["--duration", "2m 30s"]).unwrap();
        let Commands::Console(args) = cli.command else {
            panic!("expected console command");
        };
        assert_eq!(args.duration, Duration::from_secs(150));
    }

    #[test]
    fn test_invalid_duration_rejected() {
        let result = parse_console(&["--duration", "soon"]);
        assert!(result.is_err(), "expected error for unparseable duration");
    }

    #[test]
    fn test_all_categories_parse() {
        for band in [
            "under54", "under58", "under63", "under68", "under74", "under80", "over80",
        ] {
            let cli = parse_console(&["--category", band]);
            assert!(cli.is_ok(), "failed to parse category={band}");
        }
    }

    #[test]
    fn test_color_choices_parse() {
        for variant in ["auto", "always", "never"] {
            let cli = Cli::try_parse_from(["ringside", "--color", variant, "categories"]);
            assert!(cli.is_ok(), "failed to parse color={variant}");
        }
    }

    #[test]
    fn test_categories_json_format() {
        let cli = Cli::try_parse_from(["ringside", "categories", "--format", "json"]).unwrap();
        let Commands::Categories(args) = cli.command else {
            panic!("expected categories command");
        };
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn test_help_output() {
        let result = Cli::try_parse_from(["ringside", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_verbose_count() {
        let cli = Cli::try_parse_from(["ringside", "-vvv", "categories"]).unwrap();
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_quiet_flag() {
        let cli = Cli::try_parse_from(["ringside", "--quiet", "version"]).unwrap();
        assert!(cli.quiet);
    }
}
