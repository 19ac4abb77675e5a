//! Splitting a path into file name and extension.

use super::{FilePath, PathBridge};
use serde::Serialize;

/// File name and extension of a path's final element.
///
/// `extension` never includes the dot. Both halves are empty for anything
/// that names a directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PathComponents {
    pub name: String,
    pub extension: String,
}

impl PathComponents {
    /// True for directory-like inputs (`""`, `.`, `..`, `/`, `foo/`).
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.extension.is_empty()
    }
}

/// Split `path` into name and extension.
///
/// | input           | name    | extension |
/// |-----------------|---------|-----------|
/// | `/foo/bar.json` | `bar`   | `json`    |
/// | `/foo/bar`      | `bar`   |           |
/// | `/a/b.tar.gz`   | `b.tar` | `gz`      |
/// | `/foo/`, `.`, `..`, `/`, `""` | | |
pub fn file_and_ext<B: PathBridge + ?Sized>(path: &str, bridge: &B) -> PathComponents {
    let sep = bridge.separator();
    let ext = bridge.ext(path);
    let base = bridge.base(path);

    let no_file = path.ends_with(|c: char| bridge.is_separator(c))
        || matches!(base.as_str(), "" | "." | "..")
        || base == sep.to_string();
    if no_file {
        return PathComponents::default();
    }

    if ext.is_empty() {
        return PathComponents {
            name: base,
            extension: String::new(),
        };
    }

    // `ext` is a suffix of the final element, leading dot included
    PathComponents {
        name: base[..base.len() - ext.len()].to_owned(),
        extension: ext[1..].to_owned(),
    }
}

/// Name of the file at `path`, without its extension.
pub fn filename(path: &str) -> String {
    file_and_ext(path, &FilePath).name
}

/// Swap the extension of `path`'s file name for `new_ext`.
///
/// Only the file name is kept: `/a/b.md` becomes `b.html`. A directory-like
/// input has no name and yields `.{new_ext}`.
pub fn replace_extension(path: &str, new_ext: &str) -> String {
    let PathComponents { name, .. } = file_and_ext(path, &FilePath);
    format!("{name}.{new_ext}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::UrlPath;

    fn split(path: &str) -> (String, String) {
        let PathComponents { name, extension } = file_and_ext(path, &UrlPath);
        (name, extension)
    }

    #[test]
    fn test_file_and_ext() {
        for (input, name, ext) in [
            ("/foo/bar.json", "bar", "json"),
            ("/foo/bar", "bar", ""),
            ("bar.json", "bar", "json"),
            ("/a/b.tar.gz", "b.tar", "gz"),
            ("/a.d/b", "b", ""),
            ("/a/.bashrc", "", "bashrc"),
            ("/a/trailing.", "trailing", ""),
        ] {
            assert_eq!(
                split(input),
                (name.to_owned(), ext.to_owned()),
                "file_and_ext({input:?})"
            );
        }
    }

    #[test]
    fn test_file_and_ext_directory_like() {
        for input in ["", ".", "..", "/", "/foo/", "foo/bar.d/", "../", "./"] {
            let components = file_and_ext(input, &UrlPath);
            assert!(components.is_empty(), "{input:?} gave {components:?}");
        }
    }

    #[test]
    fn test_file_and_ext_splits_on_slash_for_file_paths() {
        assert_eq!(
            file_and_ext("a.d/b", &FilePath),
            PathComponents {
                name: "b".into(),
                extension: String::new(),
            }
        );
        assert_eq!(file_and_ext("posts/hello.md", &FilePath).name, "hello");
        assert!(file_and_ext("posts/", &FilePath).is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_filename() {
        assert_eq!(filename("/a/b/c.md"), "c");
        assert_eq!(filename("/a/b/c"), "c");
        assert_eq!(filename("/a/b/"), "");
    }

    #[cfg(unix)]
    #[test]
    fn test_replace_extension() {
        assert_eq!(replace_extension("/a/b/c.md", "html"), "c.html");
        assert_eq!(replace_extension("c", "xml"), "c.xml");
        assert_eq!(replace_extension("c.tar.gz", "zip"), "c.tar.zip");
        // directory-like input keeps the degenerate leading dot
        assert_eq!(replace_extension("/a/b/", "html"), ".html");
    }

    #[cfg(unix)]
    #[test]
    fn test_replace_extension_rebuilds_single_dot() {
        let bridge = FilePath;
        for path in ["/posts/hello.md", "/posts/hello", "/posts/hello.tar.gz"] {
            let rebuilt = bridge.join(&[&bridge.dir(path), &replace_extension(path, "html")]);
            let stem = rebuilt.strip_suffix(".html").unwrap();
            assert_eq!(stem, bridge.join(&[&bridge.dir(path), &filename(path)]));
            assert!(!stem.ends_with('.'), "{rebuilt:?} has a doubled dot");
        }
    }
}
