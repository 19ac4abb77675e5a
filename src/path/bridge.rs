//! Lexical path primitives shared by filesystem paths and URL paths.
//!
//! Both flavors agree on everything except the separator, so the algorithms
//! live as default methods on [`PathBridge`] and the implementations only pick
//! a separator (and, for [`FilePath`], accept `/` on platforms that use `\`).
//!
//! ```text
//! FilePath  →  std::path::MAIN_SEPARATOR   (output files)
//! UrlPath   →  '/'                         (permalinks)
//! ```
//!
//! Nothing here touches the filesystem. Volume names are not interpreted.

use super::PathError;
use std::path::MAIN_SEPARATOR;

/// Separator-parameterized path operations.
pub trait PathBridge {
    fn separator(&self) -> char;

    /// Whether `c` splits path elements. Defaults to the separator alone.
    fn is_separator(&self, c: char) -> bool {
        c == self.separator()
    }

    /// Lexically simplify `path`.
    ///
    /// - repeated separators collapse to one
    /// - `.` elements are dropped
    /// - `..` removes the preceding element; directly after the root it is dropped
    /// - an empty result becomes `.` (or the separator when rooted)
    fn clean(&self, path: &str) -> String {
        clean_lexical(path, self.separator())
    }

    fn is_abs(&self, path: &str) -> bool {
        path.starts_with(|c: char| self.is_separator(c))
    }

    /// Last element of `path`, ignoring trailing separators.
    ///
    /// `""` yields `.` and a path made only of separators yields the separator.
    fn base(&self, path: &str) -> String {
        if path.is_empty() {
            return ".".to_owned();
        }
        let trimmed = path.trim_end_matches(|c: char| self.is_separator(c));
        if trimmed.is_empty() {
            return self.separator().to_string();
        }
        match last_separator_end(self, trimmed) {
            Some(i) => trimmed[i..].to_owned(),
            None => trimmed.to_owned(),
        }
    }

    /// Split just after the final separator: `dir` keeps its trailing separator.
    fn split<'a>(&self, path: &'a str) -> (&'a str, &'a str) {
        match last_separator_end(self, path) {
            Some(i) => path.split_at(i),
            None => ("", path),
        }
    }

    /// All but the last element, cleaned. `dir("a") == "."`.
    fn dir(&self, path: &str) -> String {
        let (dir, _) = self.split(path);
        self.clean(dir)
    }

    /// Extension of the final element including its dot, or `""`.
    fn ext<'a>(&self, path: &'a str) -> &'a str {
        for (i, c) in path.char_indices().rev() {
            if self.is_separator(c) {
                break;
            }
            if c == '.' {
                return &path[i..];
            }
        }
        ""
    }

    /// Join the non-empty parts with the separator and clean the result.
    ///
    /// Returns `""` when every part is empty.
    fn join(&self, parts: &[&str]) -> String {
        let parts: Vec<&str> = parts.iter().copied().filter(|p| !p.is_empty()).collect();
        if parts.is_empty() {
            return String::new();
        }
        self.clean(&parts.join(self.separator().to_string().as_str()))
    }

    /// Relative path that, joined to `base`, lexically resolves to `target`.
    ///
    /// Walks up from `base` to the common ancestor, then down to `target`.
    /// Fails when exactly one side is rooted, or when `base` still has an
    /// unresolved `..` at the point where the two diverge.
    fn rel(&self, base: &str, target: &str) -> Result<String, PathError> {
        let sep = self.separator();
        let cleaned_base = self.clean(base);
        let cleaned_target = self.clean(target);
        if cleaned_base == cleaned_target {
            return Ok(".".to_owned());
        }

        let cleaned_base = if cleaned_base == "." {
            String::new()
        } else {
            cleaned_base
        };
        if cleaned_base.starts_with(sep) != cleaned_target.starts_with(sep) {
            return Err(PathError::Relative {
                base: base.to_owned(),
                target: target.to_owned(),
            });
        }

        let base_parts: Vec<&str> = cleaned_base.split(sep).filter(|p| !p.is_empty()).collect();
        let target_parts: Vec<&str> = cleaned_target
            .split(sep)
            .filter(|p| !p.is_empty())
            .collect();

        let common = base_parts
            .iter()
            .zip(&target_parts)
            .take_while(|(b, t)| b == t)
            .count();

        if base_parts.get(common) == Some(&"..") {
            return Err(PathError::Relative {
                base: base.to_owned(),
                target: target.to_owned(),
            });
        }

        let mut out = vec![".."; base_parts.len() - common];
        out.extend_from_slice(&target_parts[common..]);
        if out.is_empty() {
            return Ok(".".to_owned());
        }
        Ok(out.join(sep.to_string().as_str()))
    }
}

/// Native filesystem paths. `/` is accepted as a separator on every platform.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilePath;

impl PathBridge for FilePath {
    fn separator(&self) -> char {
        MAIN_SEPARATOR
    }

    fn is_separator(&self, c: char) -> bool {
        c == MAIN_SEPARATOR || c == '/'
    }

    fn clean(&self, path: &str) -> String {
        clean_lexical(&from_slash(path), MAIN_SEPARATOR)
    }
}

/// Forward-slash URL paths, independent of platform.
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlPath;

impl PathBridge for UrlPath {
    fn separator(&self) -> char {
        '/'
    }
}

/// Replace `/` with the native separator.
pub fn from_slash(path: &str) -> String {
    if MAIN_SEPARATOR == '/' {
        path.to_owned()
    } else {
        path.replace('/', MAIN_SEPARATOR.to_string().as_str())
    }
}

/// Replace the native separator with `/`.
pub fn to_slash(path: &str) -> String {
    if MAIN_SEPARATOR == '/' {
        path.to_owned()
    } else {
        path.replace(MAIN_SEPARATOR, "/")
    }
}

/// Byte index just past the last separator in `path`.
fn last_separator_end<B: PathBridge + ?Sized>(bridge: &B, path: &str) -> Option<usize> {
    path.char_indices()
        .rev()
        .find(|&(_, c)| bridge.is_separator(c))
        .map(|(i, c)| i + c.len_utf8())
}

fn clean_lexical(path: &str, sep: char) -> String {
    if path.is_empty() {
        return ".".to_owned();
    }

    let rooted = path.starts_with(sep);
    let mut parts: Vec<&str> = Vec::new();
    for part in path.split(sep) {
        match part {
            "" | "." => {}
            ".." => match parts.last() {
                Some(&last) if last != ".." => {
                    parts.pop();
                }
                // `..` at the root stays at the root
                _ if rooted => {}
                _ => parts.push(".."),
            },
            _ => parts.push(part),
        }
    }

    let body = parts.join(sep.to_string().as_str());
    if rooted {
        format!("{sep}{body}")
    } else if body.is_empty() {
        ".".to_owned()
    } else {
        body
    }
}
