//! Path and slug helpers for static site builds.
//!
//! The [`path`] module is the core: pure functions that sanitize text into
//! path segments, split file names, switch between pretty and ugly output
//! shapes, and compute relative paths and content sections.
//!
//! [`config`], [`cli`] and [`logger`] wrap it into the `tola-paths` binary.
//!
//! ```
//! use tola_paths::path::{self, SanitizeConfig};
//!
//! let slug = path::make_path_sanitized("  Social Media ", SanitizeConfig::default());
//! assert_eq!(slug, "social-media");
//! assert_eq!(path::guess_section("/content/post/hello/"), "post");
//! ```

pub mod cli;
pub mod config;
pub mod logger;
pub mod path;
