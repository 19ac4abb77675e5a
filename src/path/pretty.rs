//! Pretty and ugly output shapes.
//!
//! ```text
//! pretty:  /section/name/index.html
//! ugly:    /section/name.html
//! ```
//!
//! [`prettify_path`] works on output file paths (native separator),
//! [`prettify_url_path`] and [`uglify`] on permalinks (`/`).

use super::{FilePath, PathBridge, PathComponents, UrlPath, file_and_ext, from_slash};

/// File name every pretty path ends in.
const INDEX: &str = "index";

/// Rewrite an output file path into its pretty form.
///
/// - `/section/name.html`       → `/section/name/index.html`
/// - `/section/name/`           → `/section/name/index.html`
/// - `/section/name/index.html` → `/section/name/index.html`
pub fn prettify_path(path: &str) -> String {
    prettify_with(path, &FilePath)
}

/// [`prettify_path`] for `/`-separated URL paths.
pub fn prettify_url_path(path: &str) -> String {
    prettify_with(path, &UrlPath)
}

fn prettify_with<B: PathBridge + ?Sized>(path: &str, bridge: &B) -> String {
    if bridge.ext(path).is_empty() {
        if path.len() < 2 {
            return bridge.separator().to_string();
        }
        return bridge.join(&[&bridge.clean(path), "index.html"]);
    }

    let PathComponents { name, extension } = file_and_ext(path, bridge);
    if name == INDEX {
        return bridge.clean(path);
    }
    bridge.join(&[&bridge.dir(path), &name, &format!("{INDEX}.{extension}")])
}

/// Rewrite a URL path into its ugly form.
///
/// - `/section/name/`           → `/section/name.html`
/// - `/section/name/index.html` → `/section/name.html`
/// - `/section/name.html`       → `/section/name.html`
/// - `/.xml`                    → `/index.xml`
pub fn uglify(path: &str) -> String {
    let bridge = UrlPath;
    if bridge.ext(path).is_empty() {
        if path.len() < 2 {
            return "/".to_owned();
        }
        return format!("{}.html", bridge.clean(path));
    }

    let PathComponents { name, extension } = file_and_ext(path, &bridge);
    match name.as_str() {
        INDEX => {
            let dir = bridge.dir(path);
            // the site root has no parent to collapse into
            if dir.len() > 1 {
                format!("{dir}.{extension}")
            } else {
                path.to_owned()
            }
        }
        "" => bridge.join(&[&bridge.dir(path), &format!("{INDEX}.{extension}")]),
        _ => bridge.clean(path),
    }
}

/// Pick the ugly or pretty form according to the site's URL style.
pub fn path_prep(ugly: bool, path: &str) -> String {
    if ugly { uglify(path) } else { prettify_path(path) }
}

/// Output path of page `page` of a paginated listing under `base`.
///
/// `base = "tags/rust"`, `paginate_path = "page"`, `page = 2` gives
/// `/tags/rust/page/2` (with `.html` appended for ugly URLs), using the
/// native separator.
pub fn paginate_alias_path(base: &str, paginate_path: &str, page: usize, ugly: bool) -> String {
    let path = if base.is_empty() {
        format!("/{paginate_path}/{page}")
    } else {
        format!("/{base}/{paginate_path}/{page}")
    };
    let mut path = from_slash(&path);
    if ugly {
        path.push_str(".html");
    }
    path
}
