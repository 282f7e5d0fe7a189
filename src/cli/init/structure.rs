//! Content directory creation.

use crate::config::{FieldPath, SiteConfig};
use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

/// Create the docs directory and one directory per structure-derived
/// sidebar section. Returns the section directories, in sidebar order.
pub fn create_structure(config: &SiteConfig) -> Result<Vec<PathBuf>> {
    let docs = config.docs_dir();
    fs::create_dir_all(&docs)
        .with_context(|| format!("Failed to create directory '{}'", docs.display()))?;

    let mut dirs = Vec::new();
    for (prefix, locale) in &config.theme.locales {
        let Some(sidebar) = &locale.sidebar else {
            continue;
        };
        for resolved in sidebar.sections(prefix, &FieldPath::new("sidebar")) {
            if !resolved.section.children.is_structure() {
                continue;
            }
            let dir = config.content_dir_for(&resolved.route);
            fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create directory '{}'", dir.display()))?;
            dirs.push(dir);
        }
    }
    Ok(dirs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use tempfile::TempDir;

    #[test]
    fn test_create_structure() {
        let temp = TempDir::new().unwrap();
        let mut config = test_parse_config(
            r#"
[theme]
docs_dir = "docs"

[theme.locales."/"]
navbar = ["/"]
sidebar = ["", { text = "Posts", prefix = "posts/", children = "structure" }, { text = "About", prefix = "about/", children = ["me"] }]
"#,
        );
        config.set_root(temp.path());

        let dirs = create_structure(&config).unwrap();

        assert_eq!(dirs, [temp.path().join("docs/posts")]);
        assert!(temp.path().join("docs/posts").is_dir());
        assert!(!temp.path().join("docs/about").exists());
    }

    #[test]
    fn test_create_structure_existing_dirs() {
        let temp = TempDir::new().unwrap();
        let mut config = test_parse_config("");
        config.set_root(temp.path());
        fs::create_dir_all(temp.path().join("src")).unwrap();

        assert!(create_structure(&config).unwrap().is_empty());
        assert!(temp.path().join("src").is_dir());
    }
}
