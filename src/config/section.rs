//! `[paths]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [paths]
//! disable_lowercasing = false   # Keep original case in generated paths
//! remove_accents = false        # Strip diacritics (é → e) from generated paths
//! working_dir = "."             # Base for relative paths (relative to site root)
//! ugly_urls = false             # /name.html instead of /name/index.html
//! paginate_path = "page"        # /tags/rust/page/2
//! ```

use crate::path::SanitizeConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PathsConfig {
    /// Preserve original case when sanitizing paths.
    pub disable_lowercasing: bool,

    /// Remove accents from sanitized paths.
    pub remove_accents: bool,

    /// Directory relative paths are resolved against.
    pub working_dir: String,

    /// Generate `name.html` instead of `name/index.html`.
    pub ugly_urls: bool,

    /// Path element between a listing and its page number.
    pub paginate_path: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            disable_lowercasing: false,
            remove_accents: false,
            working_dir: ".".to_owned(),
            ugly_urls: false,
            paginate_path: "page".to_owned(),
        }
    }
}

impl PathsConfig {
    /// Sanitizing policy for the path helpers.
    pub const fn sanitize(&self) -> SanitizeConfig {
        SanitizeConfig {
            disable_lowercasing: self.disable_lowercasing,
            remove_accents: self.remove_accents,
        }
    }

    /// Collect problems with this section.
    pub fn validate(&self, errors: &mut Vec<String>) {
        let paginate = self.paginate_path.trim();
        if paginate.is_empty() {
            errors.push("paths.paginate_path must not be empty".to_owned());
        } else if paginate.contains(['/', '\\']) {
            errors.push(format!(
                "paths.paginate_path must be a single path element, got `{paginate}`"
            ));
        }
        if self.working_dir.is_empty() {
            errors.push("paths.working_dir must not be empty (use \".\")".to_owned());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.paths, PathsConfig::default());
        assert!(!config.paths.disable_lowercasing);
        assert!(!config.paths.remove_accents);
        assert!(!config.paths.ugly_urls);
        assert_eq!(config.paths.working_dir, ".");
        assert_eq!(config.paths.paginate_path, "page");
    }

    #[test]
    fn test_parsing() {
        let config = test_parse_config(
            "[paths]\ndisable_lowercasing = true\nremove_accents = true\nugly_urls = true\npaginate_path = \"p\"",
        );
        assert!(config.paths.disable_lowercasing);
        assert!(config.paths.remove_accents);
        assert!(config.paths.ugly_urls);
        assert_eq!(config.paths.paginate_path, "p");
        // untouched fields keep their defaults
        assert_eq!(config.paths.working_dir, ".");
    }

    #[test]
    fn test_sanitize_config() {
        let config = test_parse_config("[paths]\nremove_accents = true");
        assert_eq!(
            config.paths.sanitize(),
            SanitizeConfig {
                disable_lowercasing: false,
                remove_accents: true,
            }
        );
    }

    #[test]
    fn test_validate() {
        let mut errors = Vec::new();
        PathsConfig::default().validate(&mut errors);
        assert!(errors.is_empty());

        for bad in ["", "  ", "a/b", "a\\b"] {
            let paths = PathsConfig {
                paginate_path: bad.to_owned(),
                ..PathsConfig::default()
            };
            let mut errors = Vec::new();
            paths.validate(&mut errors);
            assert_eq!(errors.len(), 1, "paginate_path = {bad:?}");
        }
    }
}
