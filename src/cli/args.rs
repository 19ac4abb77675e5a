//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Path and slug helpers for static site builds
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: tola.toml, searched upward from cwd)
    #[arg(short = 'C', long, global = true, default_value = "tola.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print results as JSON
    #[arg(short, long, global = true)]
    pub json: bool,

    #[command(flatten)]
    pub paths: PathArgs,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Overrides for the `[paths]` config section.
///
/// Boolean flags take an optional `=false` to override a config value back.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct PathArgs {
    /// Keep original case when sanitizing
    #[arg(long, global = true, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = true)]
    pub preserve_case: Option<bool>,

    /// Strip accents when sanitizing (é → e)
    #[arg(long, global = true, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = true)]
    pub remove_accents: Option<bool>,

    /// Use ugly URLs (name.html) instead of pretty ones (name/index.html)
    #[arg(long, global = true, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = true)]
    pub ugly: Option<bool>,

    /// Working directory for resolving relative paths
    #[arg(long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub working_dir: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Turn text into a path segment ("Social Media" → social-media)
    Slug {
        /// Text to convert; multiple words are joined with spaces
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Turn a path segment back into title text (social-media → social media)
    Title { path: String },

    /// Split a path into file name and extension
    Split {
        path: String,

        /// Treat the path as a URL path (always `/`-separated)
        #[arg(short, long)]
        url: bool,
    },

    /// Replace the extension of a path's file name
    Ext { path: String, ext: String },

    /// Convert a path to its pretty (or, with --ugly, ugly) form
    #[command(visible_alias = "p")]
    Pretty { path: String },

    /// Strip the first matching base directory prefix from a path
    Rel {
        path: String,

        /// Candidate base directories, tried in order
        #[arg(required = true)]
        bases: Vec<String>,
    },

    /// Compute the relative path from a base directory to a path
    Relative { path: String, base: String },

    /// `../` prefix leading from a content path back to the root
    Dotted { path: String },

    /// Resolve a path against the working directory
    Abs { path: String },

    /// Guess the content section of each path
    #[command(visible_alias = "s")]
    Section {
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Extract the first path element of each path
    Roots {
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Output path for a page of a paginated listing
    Paginate {
        /// Page number
        page: usize,

        /// Listing base path (e.g. tags/rust); empty for the site root
        base: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("tola-paths").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_parse_slug_words() {
        let cli = parse(&["slug", "Social", "Media"]);
        match cli.command {
            Commands::Slug { text } => assert_eq!(text, ["Social", "Media"]),
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(!cli.json);
        assert_eq!(cli.config, PathBuf::from("tola.toml"));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&["pretty", "/a/b.html", "--ugly", "--json"]);
        assert_eq!(cli.paths.ugly, Some(true));
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::Pretty { .. }));
    }

    #[test]
    fn test_bool_override_requires_equals() {
        let cli = parse(&["--remove-accents=false", "slug", "été"]);
        assert_eq!(cli.paths.remove_accents, Some(false));
        assert_eq!(cli.paths.preserve_case, None);

        // a bare flag does not swallow the subcommand name
        let cli = parse(&["--preserve-case", "title", "a-b"]);
        assert_eq!(cli.paths.preserve_case, Some(true));
        assert!(matches!(cli.command, Commands::Title { .. }));
    }

    #[test]
    fn test_paginate_optional_base() {
        match parse(&["paginate", "2"]).command {
            Commands::Paginate { page, base } => {
                assert_eq!(page, 2);
                assert_eq!(base, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        match parse(&["paginate", "3", "tags/rust"]).command {
            Commands::Paginate { base, .. } => assert_eq!(base.as_deref(), Some("tags/rust")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_missing_required_args() {
        assert!(Cli::try_parse_from(["tola-paths", "rel", "/a"]).is_err());
        assert!(Cli::try_parse_from(["tola-paths", "section"]).is_err());
        assert!(Cli::try_parse_from(["tola-paths", "paginate", "two"]).is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
