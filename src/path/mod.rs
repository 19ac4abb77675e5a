//! Path helpers for the build pipeline.
//!
//! Pure functions over path strings. No filesystem access, no global state:
//! every policy (lower-casing, accents, URL style) comes in as an argument.
//!
//! - [`bridge`]: separator-parameterized primitives (`FilePath`, `UrlPath`)
//! - [`sanitize`]: free text → path segment (`make_path`, `unicode_sanitize`)
//! - [`file`]: name/extension split (`file_and_ext`, `replace_extension`)
//! - [`pretty`]: pretty/ugly shapes (`prettify_path`, `uglify`, `path_prep`)
//! - [`relative`]: relative, dotted and absolute paths
//! - [`section`]: section guessing (`guess_section`, `extract_root_paths`)

pub mod bridge;
mod error;
pub mod file;
pub mod pretty;
pub mod relative;
pub mod sanitize;
pub mod section;

pub use bridge::{FilePath, PathBridge, UrlPath, from_slash, to_slash};
pub use error::PathError;
pub use file::{PathComponents, file_and_ext, filename, replace_extension};
pub use pretty::{paginate_alias_path, path_prep, prettify_path, prettify_url_path, uglify};
pub use relative::{abs_pathify, get_dotted_relative_path, get_relative_path, make_path_relative};
pub use sanitize::{
    SanitizeConfig, is_path_char, make_path, make_path_sanitized, make_title, unicode_sanitize,
};
pub use section::{CONTENT_DIR, extract_root_paths, guess_section};
