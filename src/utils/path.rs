//! Path and route utilities.
//!
//! Filesystem paths are normalized to absolute form; site routes are the
//! `/`-separated URL paths used by locales, navbar links and sidebar prefixes.

use std::path::{Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first, falling back to joining with the current
/// directory when the path does not exist yet.
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Expand a leading `~` in a user-supplied path.
pub fn expand_tilde(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).into_owned()),
        None => path.to_path_buf(),
    }
}

/// Check if a link is external (has a URL scheme like `https:` or `mailto:`).
#[inline]
pub fn is_external_link(link: &str) -> bool {
    link.find(':').is_some_and(|pos| {
        pos > 0
            && link[..pos]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// Check that a route is an absolute site path (`/`, `/posts/`, `/intro.html`).
#[inline]
pub fn is_absolute_route(route: &str) -> bool {
    route.starts_with('/') && !route.starts_with("//")
}

/// Join a route with a relative segment.
///
/// Absolute segments replace the base entirely, matching how sidebar
/// prefixes are resolved against their group path.
///
/// # Examples
/// ```ignore
/// assert_eq!(join_route("/", "tutorials/"), "/tutorials/");
/// assert_eq!(join_route("/zh/", "posts/"), "/zh/posts/");
/// assert_eq!(join_route("/zh/", "/posts/"), "/posts/");
/// assert_eq!(join_route("/zh/posts/", ""), "/zh/posts/");
/// ```
pub fn join_route(base: &str, segment: &str) -> String {
    if segment.starts_with('/') {
        return segment.to_string();
    }
    if base.ends_with('/') || base.is_empty() {
        format!("{base}{segment}")
    } else {
        format!("{base}/{segment}")
    }
}

/// Convert a site route to a relative filesystem path below the docs dir.
///
/// `"/zh/posts/"` -> `zh/posts`
pub fn route_to_rel_path(route: &str) -> PathBuf {
    route
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect()
}
