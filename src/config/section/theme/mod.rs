//! `[theme]` section configuration.
//!
//! Site metadata, markdown extensions and the per-locale menus.
//!
//! # Example
//!
//! ```toml
//! [theme]
//! hostname = "https://techstay.tech"
//! logo = "/logo.png"
//! repo = "techstay/techblog"
//! docs_dir = "src"
//!
//! [theme.author]
//! name = "techstay"
//! url = "https://github.com/techstay"
//!
//! [theme.blog.medias]
//! GitHub = "https://github.com/techstay"
//!
//! [theme.locales."/"]
//! footer = "Techstay's tech blog."
//! display_footer = true
//! navbar = ["/"]
//! sidebar = ["", "intro"]
//! ```

mod locale;
mod markdown;

pub use locale::{LocaleBlogConfig, LocaleThemeConfig};
pub use markdown::{MarkdownConfig, MarkdownFeature, to_camel_case};

use super::locale::LocaleTable;
use crate::config::util::{check_http_url, is_repo_slug};
use crate::config::{ConfigDiagnostics, FieldPath};
use crate::utils::path::is_external_link;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Theme section configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSectionConfig {
    /// Canonical site URL (used for feeds and sitemaps by the framework).
    pub hostname: Option<String>,

    pub author: AuthorConfig,

    pub logo: Option<String>,

    /// Source repository, `owner/name` or a full URL.
    pub repo: Option<String>,

    /// Copyright notice (HTML allowed).
    pub copyright: String,

    /// Content directory, relative to the project root.
    pub docs_dir: PathBuf,

    pub hot_reload: bool,

    pub blog: BlogConfig,

    pub markdown: MarkdownConfig,

    /// Per-locale menus and strings, keyed by locale prefix.
    pub locales: BTreeMap<String, LocaleThemeConfig>,
}

impl Default for ThemeSectionConfig {
    fn default() -> Self {
        Self {
            hostname: None,
            author: AuthorConfig::default(),
            logo: None,
            repo: None,
            copyright: String::new(),
            docs_dir: "src".into(),
            hot_reload: false,
            blog: BlogConfig::default(),
            markdown: MarkdownConfig::default(),
            locales: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorConfig {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    /// Social links shown on the blogger card, name → URL.
    pub medias: BTreeMap<String, String>,
}

impl ThemeSectionConfig {
    /// Validate metadata and every locale, cross-checked with the locale table.
    ///
    /// # Checks
    /// - `hostname` / `author.url` are http(s) URLs with a host
    /// - `repo` is `owner/name` or a URL
    /// - `docs_dir` is relative
    /// - no two markdown keys share a camelCase name
    /// - locale table and `theme.locales` have the same keys
    pub fn validate(&self, locales: &LocaleTable, diag: &mut ConfigDiagnostics) {
        let root = FieldPath::new("theme");

        if let Some(hostname) = &self.hostname {
            check_http_url(hostname, root.field("hostname"), diag);
        }
        if let Some(url) = &self.author.url {
            check_http_url(url, root.field("author").field("url"), diag);
        }

        if let Some(repo) = &self.repo
            && !is_external_link(repo)
            && !is_repo_slug(repo)
        {
            diag.error_with_hint(
                root.field("repo"),
                format!("repo '{repo}' is not of the form owner/name"),
                "e.g. \"techstay/techblog\" or a full https:// URL",
            );
        }

        if self.docs_dir.is_absolute() {
            diag.error_with_hint(
                root.field("docs_dir"),
                format!("docs_dir '{}' must be relative", self.docs_dir.display()),
                "use a path relative to the project root, e.g. \"src\"",
            );
        }

        for (name, link) in &self.blog.medias {
            if !is_external_link(link) {
                diag.error(
                    root.field("blog").field("medias").key(name),
                    format!("media link '{link}' is not a URL"),
                );
            }
        }

        self.markdown.validate(&root.field("markdown"), diag);
        self.validate_locales(locales, &root.field("locales"), diag);
    }

    fn validate_locales(&self, locales: &LocaleTable, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        for prefix in locales.prefixes() {
            if !self.locales.contains_key(prefix) {
                diag.error_with_hint(
                    field.key(prefix),
                    format!("locale '{prefix}' has no theme entry"),
                    format!("add [theme.locales.\"{prefix}\"] with navbar and sidebar"),
                );
            }
        }

        for (prefix, locale) in &self.locales {
            let locale_field = field.key(prefix);
            if !locales.contains(prefix) {
                diag.error_with_hint(
                    locale_field.clone(),
                    format!("theme locale '{prefix}' is not in the locale table"),
                    format!("add [locales.\"{prefix}\"] or remove this entry"),
                );
            }
            locale.validate(prefix, locales, &locale_field, diag);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::section::locale::LocaleEntry;
    use crate::config::section::nav::{NavEntry, Navbar};
    use crate::config::section::sidebar::Sidebar;
    use crate::config::test_parse_config;

    fn table(prefixes: &[&str]) -> LocaleTable {
        let mut table = LocaleTable::new();
        for prefix in prefixes {
            table
                .insert(*prefix, LocaleEntry::new("en-US", "Blog", ""))
                .unwrap();
        }
        table
    }

    fn locale_theme() -> LocaleThemeConfig {
        LocaleThemeConfig::new(Navbar::new([NavEntry::link("/")]), Sidebar::default())
    }

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.theme.docs_dir, PathBuf::from("src"));
        assert!(config.theme.hostname.is_none());
        assert!(!config.theme.hot_reload);
        assert!(config.theme.markdown.is_empty());
    }

    #[test]
    fn test_parse_metadata() {
        let config = test_parse_config(
            r#"[theme]
hostname = "https://techstay.tech"
repo = "techstay/techblog"
hot_reload = true

[theme.author]
name = "techstay"
url = "https://github.com/techstay"

[theme.blog.medias]
Email = "mailto:someone@example.com"
GitHub = "https://github.com/techstay"
"#,
        );
        assert_eq!(config.theme.author.name, "techstay");
        assert_eq!(config.theme.blog.medias.len(), 2);
        assert!(config.theme.hot_reload);
    }

    #[test]
    fn test_orphan_locales_reported_both_ways() {
        let mut theme = ThemeSectionConfig::default();
        theme.locales.insert("/".into(), locale_theme());
        theme.locales.insert("/fr/".into(), locale_theme());

        let mut diag = ConfigDiagnostics::new();
        theme.validate(&table(&["/", "/zh/"]), &mut diag);

        let messages: Vec<_> = diag.errors().iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages.len(), 2);
        assert!(messages.iter().any(|m| m.contains("'/zh/' has no theme entry")));
        assert!(messages.iter().any(|m| m.contains("'/fr/' is not in the locale table")));
    }

    #[test]
    fn test_matching_locales_pass() {
        let mut theme = ThemeSectionConfig::default();
        theme.locales.insert("/".into(), locale_theme());
        let mut diag = ConfigDiagnostics::new();
        theme.validate(&table(&["/"]), &mut diag);
        assert!(diag.is_empty(), "{diag}");
    }

    #[test]
    fn test_hostname_and_repo_checks() {
        let mut theme = ThemeSectionConfig {
            hostname: Some("ftp://techstay.tech".into()),
            repo: Some("techblog".into()),
            ..ThemeSectionConfig::default()
        };
        theme.locales.insert("/".into(), locale_theme());
        let mut diag = ConfigDiagnostics::new();
        theme.validate(&table(&["/"]), &mut diag);
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["theme.hostname", "theme.repo"]);
    }
}
