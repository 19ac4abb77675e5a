//! tola-paths - path and slug helpers for static site builds.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use tola_paths::{
    cli::{self, Cli},
    config::SiteConfig,
    debug, logger,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = SiteConfig::load(&cli)?;
    debug!("config"; "root: {}", config.get_root().display());

    cli::run(&cli, &config)
}
