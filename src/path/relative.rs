//! Relative and absolute path resolution.

use super::{FilePath, PathBridge, PathError, from_slash};
use regex::Regex;
use std::sync::LazyLock;

/// Ends in a dot followed by one to six characters, e.g. `post.html`.
static FILE_LIKE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r".*\..{1,6}$").unwrap());

/// Strip the first of `bases` that is a literal prefix of `path`.
///
/// ```ignore
/// make_path_relative("/static/img/a.png", ["/static/"]) // Ok("img/a.png")
/// ```
///
/// When no base matches the error carries `path` unchanged, see
/// [`PathError::fallback_path`].
pub fn make_path_relative<I>(path: &str, bases: I) -> Result<String, PathError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    bases
        .into_iter()
        .find_map(|base| path.strip_prefix(base.as_ref()).map(str::to_owned))
        .ok_or_else(|| PathError::UnknownPrefix {
            path: path.to_owned(),
        })
}

/// Lexical path from `base` to `path`.
///
/// A trailing separator on `path` is kept on the result. An absolute `path`
/// needs a non-empty `base`.
pub fn get_relative_path(path: &str, base: &str) -> Result<String, PathError> {
    let bridge = FilePath;
    let sep = bridge.separator();
    if bridge.is_abs(path) && base.is_empty() {
        return Err(PathError::NoBaseDirectory);
    }

    let mut relative = bridge.rel(&bridge.clean(base), &bridge.clean(path))?;
    if from_slash(path).ends_with(sep) && !relative.ends_with(sep) {
        relative.push(sep);
    }
    Ok(relative)
}

/// `../` prefix leading from a content-relative path back to the root.
///
/// ```text
/// "."                 → "./"
/// "404.html"          → "./"
/// "post", "/post/"    → "../"
/// "/foo/bar/idx.html" → "../../"
/// "/foo/bar/foo"      → "../../../"
/// ```
///
/// A final element that looks like a file counts as being inside its
/// directory; anything else is a directory of its own.
pub fn get_dotted_relative_path(path: &str) -> String {
    let bridge = FilePath;
    let sep = bridge.separator();

    let mut path = bridge.clean(&from_slash(path));
    if path == "." {
        return "./".to_owned();
    }
    if !FILE_LIKE.is_match(&path) && !path.ends_with(sep) {
        path.push(sep);
    }
    if !path.starts_with(sep) {
        path.insert(0, sep);
    }

    let (dir, _) = bridge.split(&path);
    let depth = dir.matches(sep).count();
    if depth == 0 || dir == sep.to_string() {
        return "./".to_owned();
    }
    "../".repeat(depth - 1)
}

/// Resolve `path` against `working_dir` unless it is already absolute.
pub fn abs_pathify(path: &str, working_dir: &str) -> String {
    let bridge = FilePath;
    if bridge.is_abs(path) {
        return bridge.clean(path);
    }
    bridge.clean(&bridge.join(&[working_dir, path]))
}
