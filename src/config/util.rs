//! Configuration utility functions.

use crate::config::{ConfigDiagnostics, FieldPath};
use std::path::{Path, PathBuf};

/// Extract path component from a URL string
///
/// Returns `None` if the URL is invalid
///
/// # Examples
/// ```ignore
/// extract_url_path("https://example.github.io/my-blog/") -> Some("my-blog")
/// extract_url_path("https://example.com")                -> Some("")
/// extract_url_path("invalid")                            -> None
/// ```
pub fn extract_url_path(url_str: &str) -> Option<String> {
    let parsed = url::Url::parse(url_str).ok()?;
    let path = parsed.path().trim_matches('/');
    Some(path.to_string())
}

/// Find config file by searching upward from current directory
///
/// # Example
/// ```text
/// /home/user/blog/src/posts/  ← cwd
/// /home/user/blog/blog.toml   ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

/// Walk up from `start` looking for `config_name`.
pub fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None,
        }
    }
}

/// Checks `owner/name`.
pub fn is_repo_slug(repo: &str) -> bool {
    let valid = |part: &str| {
        !part.is_empty()
            && part
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
    };
    repo.split_once('/')
        .is_some_and(|(owner, name)| valid(owner) && valid(name))
}

/// URL must parse, use http or https, and carry a host.
pub fn check_http_url(value: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    match url::Url::parse(value) {
        Ok(parsed) => {
            if !matches!(parsed.scheme(), "http" | "https") {
                diag.error_with_hint(
                    field.clone(),
                    format!(
                        "scheme '{}' not supported, must be http or https",
                        parsed.scheme()
                    ),
                    "use format like https://example.com",
                );
            }
            if parsed.host_str().is_none() {
                diag.error_with_hint(
                    field,
                    "URL must have a valid host",
                    "use format like https://example.com",
                );
            }
        }
        Err(e) => {
            diag.error_with_hint(
                field,
                format!("invalid URL: {e}"),
                "use format like https://example.com",
            );
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_extract_url_path() {
        assert_eq!(
            extract_url_path("https://techstay.github.io/techblog/"),
            Some("techblog".to_string())
        );
        assert_eq!(extract_url_path("https://techstay.tech"), Some(String::new()));
        assert_eq!(
            extract_url_path("https://example.com:8080/a/b?x=1#y"),
            Some("a/b".to_string())
        );
        assert_eq!(extract_url_path("invalid-url"), None);
    }

    #[test]
    fn test_find_config_file_walks_up() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("src/posts/2024");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(temp.path().join("blog.toml"), "").unwrap();

        let found = find_config_file_from(&nested, Path::new("blog.toml")).unwrap();
        assert_eq!(found, temp.path().join("blog.toml"));
    }

    #[test]
    fn test_find_config_file_missing() {
        let temp = TempDir::new().unwrap();
        assert!(find_config_file_from(temp.path(), Path::new("no-such-blogcfg-file.toml")).is_none());
    }

    #[test]
    fn test_is_repo_slug() {
        assert!(is_repo_slug("techstay/techblog"));
        assert!(is_repo_slug("a-b/c.d_e"));
        assert!(!is_repo_slug("techblog"));
        assert!(!is_repo_slug("/techblog"));
        assert!(!is_repo_slug("a/b/c"));
    }

    #[test]
    fn test_check_http_url() {
        let mut diag = ConfigDiagnostics::new();
        check_http_url("https://techstay.tech", FieldPath::new("a"), &mut diag);
        assert!(diag.is_empty());

        check_http_url("not a url", FieldPath::new("b"), &mut diag);
        check_http_url("mailto:x@y.z", FieldPath::new("c"), &mut diag);
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        // mailto fails both the scheme and the host check
        assert_eq!(fields, ["b", "c", "c"]);
    }
}
