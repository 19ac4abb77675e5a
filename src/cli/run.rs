//! Command dispatch and output.

use super::{Cli, Commands};
use crate::{
    config::SiteConfig,
    debug, log,
    path::{self, FilePath, PathComponents, PathError, UrlPath},
};
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::{Write, stdout};

/// Result of a single command, printed as text or JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Output {
    Line(String),
    Lines(Vec<String>),
    Components(PathComponents),
}

impl Output {
    /// Write to `out`: one value per line, or a single JSON document.
    pub fn write(&self, out: &mut impl Write, json: bool) -> Result<()> {
        if json {
            serde_json::to_writer(&mut *out, self)?;
            writeln!(out)?;
            return Ok(());
        }
        match self {
            Self::Line(line) => writeln!(out, "{line}")?,
            Self::Lines(lines) => {
                for line in lines {
                    writeln!(out, "{line}")?;
                }
            }
            Self::Components(PathComponents { name, extension }) => {
                writeln!(out, "{name}\t{extension}")?
            }
        }
        Ok(())
    }
}

/// Run the parsed command and print its result to stdout.
pub fn run(cli: &Cli, config: &SiteConfig) -> Result<()> {
    let output = execute(&cli.command, config)?;
    let mut stdout = stdout().lock();
    output.write(&mut stdout, cli.json)?;
    stdout.flush()?;
    Ok(())
}

/// Compute the output of `command` under `config`.
pub fn execute(command: &Commands, config: &SiteConfig) -> Result<Output> {
    let paths = &config.paths;
    let output = match command {
        Commands::Slug { text } => {
            let text = text.join(" ");
            debug!("slug"; "sanitizing {:?} with {:?}", text, paths.sanitize());
            Output::Line(path::make_path_sanitized(&text, paths.sanitize()))
        }
        Commands::Title { path } => Output::Line(path::make_title(path)),
        Commands::Split { path, url } => Output::Components(if *url {
            path::file_and_ext(path, &UrlPath)
        } else {
            path::file_and_ext(path, &FilePath)
        }),
        Commands::Ext { path, ext } => Output::Line(path::replace_extension(path, ext)),
        Commands::Pretty { path } => Output::Line(path::path_prep(paths.ugly_urls, path)),
        Commands::Rel { path, bases } => match path::make_path_relative(path, bases) {
            Ok(relative) => Output::Line(relative),
            Err(err @ PathError::UnknownPrefix { .. }) => {
                log!("warning"; "{}: {}", err, path);
                Output::Line(err.fallback_path().unwrap_or(path).to_owned())
            }
            Err(err) => return Err(err.into()),
        },
        Commands::Relative { path, base } => Output::Line(
            path::get_relative_path(path, base)
                .with_context(|| format!("failed to relate `{path}` to `{base}`"))?,
        ),
        Commands::Dotted { path } => Output::Line(path::get_dotted_relative_path(path)),
        Commands::Abs { path } => {
            debug!("abs"; "working dir: {}", paths.working_dir);
            Output::Line(path::abs_pathify(path, &paths.working_dir))
        }
        Commands::Section { paths } => {
            Output::Lines(paths.iter().map(|p| path::guess_section(p)).collect())
        }
        Commands::Roots { paths } => Output::Lines(path::extract_root_paths(paths)),
        Commands::Paginate { page, base } => Output::Line(path::paginate_alias_path(
            base.as_deref().unwrap_or_default().trim_matches('/'),
            &paths.paginate_path,
            *page,
            paths.ugly_urls,
        )),
    };
    Ok(output)
}
