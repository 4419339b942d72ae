//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for `--dump`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum DumpFormat {
    /// Plain text, cards collapsed
    #[default]
    Text,
    /// The resolved content as JSON
    Json,
}

/// CLI arguments for folio
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about = "A single-page portfolio, in the terminal")]
#[command(long_about = r#"
Folio renders a personal portfolio page as a scrollable terminal UI: a hero
with portrait, a rotating testimonial carousel, expandable work and approach
cards, and content that fades in as it scrolls into view.

Configuration files are loaded from (in priority order):
1. --config <path>                Explicit config file
2. ./folio.toml or ./.folio.toml  Project-level config
3. ~/.config/folio/config.toml    Global config

Environment variables prefixed with FOLIO_ override file values, with "__"
separating nested keys (e.g. FOLIO_ROTATION__INTERVAL_MS=5000).

Example:
  folio
  folio --content ./me.toml --photo ./me.png
  folio --dump json
"#)]
pub struct Cli {
    /// Content document to render instead of the bundled one
    #[arg(long, value_name = "PATH")]
    pub content: Option<PathBuf>,

    /// Profile photo, overriding the content document
    #[arg(long, value_name = "PATH")]
    pub photo: Option<String>,

    /// Disable testimonial auto-advance
    #[arg(long)]
    pub no_rotate: bool,

    /// Disable reveal transitions; everything is drawn immediately
    #[arg(long)]
    pub no_reveal: bool,

    /// Print the page to stdout instead of starting the TUI
    #[arg(
        long,
        value_enum,
        value_name = "FORMAT",
        num_args = 0..=1,
        default_missing_value = "text"
    )]
    pub dump: Option<DumpFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Write TUI logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["folio"]).unwrap();
        assert!(cli.dump.is_none());
        assert!(!cli.no_rotate);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_bare_dump_is_text() {
        let cli = Cli::try_parse_from(["folio", "--dump"]).unwrap();
        assert_eq!(cli.dump, Some(DumpFormat::Text));

        let cli = Cli::try_parse_from(["folio", "--dump", "json"]).unwrap();
        assert_eq!(cli.dump, Some(DumpFormat::Json));
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "folio",
            "--content",
            "me.toml",
            "--photo",
            "me.png",
            "--no-rotate",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.content, Some(PathBuf::from("me.toml")));
        assert_eq!(cli.photo.as_deref(), Some("me.png"));
        assert!(cli.no_rotate);
        assert_eq!(cli.verbose, 2);
    }
}
