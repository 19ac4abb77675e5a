//! Path computation errors.

use thiserror::Error;

/// Errors returned by the relative-path helpers.
///
/// None of these are fatal: callers decide whether to fall back to the
/// original path or surface the failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// An absolute path was given without a base directory to relate it to.
    #[error("source: missing base directory")]
    NoBaseDirectory,

    /// None of the candidate directories is a prefix of the path.
    #[error("can't extract relative path, unknown prefix")]
    UnknownPrefix { path: String },

    /// The lexical relative-path walk could not reconcile the two paths.
    #[error("Rel: can't make {target} relative to {base}")]
    Relative { base: String, target: String },
}

impl PathError {
    /// The unmodified input path, for callers that want to carry on with it.
    ///
    /// Only `UnknownPrefix` carries one.
    pub fn fallback_path(&self) -> Option<&str> {
        match self {
            Self::UnknownPrefix { path } => Some(path),
            _ => None,
        }
    }
}
