//! Configuration error types.

use owo_colors::OwoColorize;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Config validation error: {0}")]
    Validation(String),
}

impl ConfigError {
    /// Build a validation error listing every collected problem.
    pub fn from_problems(problems: &[String]) -> Self {
        let list = problems
            .iter()
            .map(|p| format!("\n  {} {p}", "→".red()))
            .collect::<String>();
        Self::Validation(list)
    }
}
