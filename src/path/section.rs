//! Content sections derived from source paths.

use super::{FilePath, PathBridge, to_slash};

/// Conventional root directory holding the site's content.
pub const CONTENT_DIR: &str = "content";

/// Guess the section a source path belongs to.
///
/// The section is the element between the root separator and the next one,
/// skipping a leading `content` directory:
///
/// ```text
/// /post/hello/          → post
/// /content/post/hello/  → post
/// post/                 → post
/// hello, /hello         → ""
/// ```
pub fn guess_section(path: &str) -> String {
    let sep = FilePath.separator();
    // leading and trailing separators produce empty parts: /a/b/ → ["", "a", "b", ""]
    let parts: Vec<&str> = path.split(sep).collect();

    if parts.len() < 2 {
        return String::new();
    }
    // a rooted path needs an element after the root and something after that
    if parts[0].is_empty() && parts.len() < 3 {
        return String::new();
    }

    let parts = if parts[0].is_empty() { &parts[1..] } else { &parts[..] };
    if parts[0] == CONTENT_DIR {
        return if parts.len() > 2 {
            parts[1].to_owned()
        } else {
            String::new()
        };
    }
    parts[0].to_owned()
}

/// First non-empty element of each path, e.g. `/content/section/` → `content`.
///
/// Paths are slash-normalized first. A path with no non-empty element is
/// returned as is. Duplicates are kept.
pub fn extract_root_paths<I>(paths: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    paths
        .into_iter()
        .map(|path| {
            let slashed = to_slash(path.as_ref());
            match slashed.split('/').find(|part| !part.is_empty()) {
                Some(root) => root.to_owned(),
                None => slashed,
            }
        })
        .collect()
}
