//! Theme assembly.
//!
//! Merges the locale table, head tags, theme metadata, markdown toggles,
//! per-locale menus and plugin options into the single object the site
//! framework consumes. The merge adds nothing that is not configured, and
//! every map is ordered, so the same `SiteConfig` always yields the same
//! output.
//!
//! # Output shape
//!
//! ```json
//! {
//!   "base": "/",
//!   "locales": { "/": { "lang": "en-US", "title": "...", "description": "..." } },
//!   "head": [["script", { "src": "https://events.vercount.one/js", "defer": true }]],
//!   "theme": {
//!     "hostname": "https://techstay.tech",
//!     "docsDir": "src",
//!     "markdown": { "imgLazyload": true, "math": { "type": "katex" } },
//!     "locales": { "/": { "navbar": [...], "sidebar": {...}, "displayFooter": true } },
//!     "plugins": { "blog": true, "comment": { "provider": "Giscus" } }
//!   }
//! }
//! ```

pub mod structure;

use crate::config::SiteConfig;
use crate::config::section::head::HeadTag;
use crate::config::section::theme::{AuthorConfig, BlogConfig, LocaleBlogConfig};
use crate::config::section::{LocaleEntry, Navbar, Sidebar};
use crate::debug;
use anyhow::{Context, Result, anyhow};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default)]
pub struct AssembleOptions {
    /// Replace `children = "structure"` with the content directory listing.
    pub resolve_structure: bool,
}

/// The merged framework configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssembledConfig {
    pub base: String,
    pub locales: BTreeMap<String, LocaleEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub head: Vec<HeadTag>,
    pub theme: ThemeOutput,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    pub author: AuthorConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub copyright: String,
    pub docs_dir: PathBuf,
    pub hot_reload: bool,
    pub blog: BlogConfig,
    pub markdown: Map<String, Value>,
    pub locales: BTreeMap<String, LocaleOutput>,
    pub plugins: Map<String, Value>,
}

/// Menus and strings of one locale.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleOutput {
    pub navbar: Navbar,
    pub sidebar: Sidebar,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub footer: String,
    pub display_footer: bool,
    pub blog: LocaleBlogConfig,
}

impl AssembledConfig {
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        json.context("Failed to serialize assembled configuration")
    }
}

/// Merge `config` into the framework configuration.
///
/// Locales are taken from the locale table; each one must have a theme
/// entry with a navbar and a sidebar. A locale only ever receives its own
/// menus.
pub fn assemble(config: &SiteConfig, options: &AssembleOptions) -> Result<AssembledConfig> {
    let theme = &config.theme;
    let docs_dir = config.docs_dir();

    let mut locales = BTreeMap::new();
    for (prefix, _) in config.locales.iter() {
        let locale = theme
            .locales
            .get(prefix)
            .ok_or_else(|| anyhow!("locale '{prefix}' has no theme entry"))?;
        let navbar = locale
            .navbar
            .clone()
            .ok_or_else(|| anyhow!("locale '{prefix}' has no navbar"))?;
        let sidebar = locale
            .sidebar
            .as_ref()
            .ok_or_else(|| anyhow!("locale '{prefix}' has no sidebar"))?;

        let sidebar = if options.resolve_structure {
            debug!("assemble"; "resolving sidebar structure of {prefix}");
            structure::resolve_sidebar(sidebar, prefix, &docs_dir)
        } else {
            sidebar.clone()
        };

        locales.insert(
            prefix.to_string(),
            LocaleOutput {
                navbar,
                sidebar,
                footer: locale.footer.clone(),
                display_footer: locale.display_footer,
                blog: locale.blog.clone(),
            },
        );
    }

    Ok(AssembledConfig {
        base: config.base(),
        locales: config
            .locales
            .iter()
            .map(|(prefix, entry)| (prefix.to_string(), entry.clone()))
            .collect(),
        head: config.head.tags(),
        theme: ThemeOutput {
            hostname: theme.hostname.clone(),
            author: theme.author.clone(),
            logo: theme.logo.clone(),
            repo: theme.repo.clone(),
            copyright: theme.copyright.clone(),
            docs_dir: theme.docs_dir.clone(),
            hot_reload: theme.hot_reload,
            blog: theme.blog.clone(),
            markdown: theme.markdown.to_json(),
            locales,
            plugins: config.plugins.to_json(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use std::fs;
    use tempfile::TempDir;

    const TWO_LOCALES: &str = r#"
[locales."/zh/"]
lang = "zh-CN"
title = "技术博客"
description = "懒人一个"

[head]
scripts = [{ src = "https://events.vercount.one/js", defer = true }]

[theme]
hostname = "https://techstay.tech"
repo = "techstay/techblog"

[theme.author]
name = "techstay"
url = "https://github.com/techstay"

[theme.markdown]
img_lazyload = true
tabs = true
math = { type = "katex" }

[theme.locales."/"]
navbar = [
  "/",
  { text = "Tutorials", icon = "material-symbols:school", link = "/tutorials/" },
  { text = "Posts", icon = "mdi:blog-outline", link = "/posts/" },
]
footer = "Tech blog"
display_footer = true

[theme.locales."/".sidebar]
"/" = ["", { text = "Posts", icon = "mdi:blog-outline", prefix = "posts/", children = "structure" }, "intro"]

[theme.locales."/zh/"]
navbar = ["/zh/", { text = "文章", icon = "blog", link = "/zh/posts/" }]
blog = { description = "懒人一个" }

[theme.locales."/zh/".sidebar]
"/zh/" = ["", { text = "文章", icon = "blog", prefix = "posts/", children = "structure" }]

[plugins]
blog = true

[plugins.comment]
provider = "giscus"
repo = "techstay/techblog"
repo_id = "R_kgDOJZ7KHA"
category = "Announcements"
category_id = "DIC_kwDOJZ7KHM4CV9lO"
"#;

    fn assembled_json(config: &SiteConfig) -> Value {
        let assembled = assemble(config, &AssembleOptions::default()).unwrap();
        serde_json::to_value(&assembled).unwrap()
    }

    #[test]
    fn test_assembly_is_idempotent() {
        let config = test_parse_config(TWO_LOCALES);
        let options = AssembleOptions::default();
        let first = assemble(&config, &options).unwrap();
        let second = assemble(&config, &options).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.to_json(true).unwrap(), second.to_json(true).unwrap());
    }

    #[test]
    fn test_two_locales_without_leakage() {
        let config = test_parse_config(TWO_LOCALES);
        let json = assembled_json(&config);

        let locales = json["theme"]["locales"].as_object().unwrap();
        assert_eq!(locales.len(), 2);

        let root_nav = locales["/"]["navbar"].as_array().unwrap();
        let zh_nav = locales["/zh/"]["navbar"].as_array().unwrap();
        assert_eq!(root_nav.len(), 3);
        assert_eq!(zh_nav.len(), 2);
        assert!(zh_nav[1]["link"].as_str().unwrap().starts_with("/zh/"));

        let zh_sidebar = locales["/zh/"]["sidebar"].as_object().unwrap();
        assert_eq!(zh_sidebar.keys().collect::<Vec<_>>(), ["/zh/"]);
        assert_eq!(locales["/"]["footer"], "Tech blog");
        assert!(locales["/zh/"].get("footer").is_none());
        assert_eq!(locales["/zh/"]["blog"]["description"], "懒人一个");

        assert_eq!(json["locales"]["/zh/"]["lang"], "zh-CN");
        assert_eq!(json["locales"]["/"]["lang"], "en-US");
    }

    #[test]
    fn test_navbar_order_preserved() {
        let config = test_parse_config(TWO_LOCALES);
        let json = assembled_json(&config);
        let links: Vec<_> = json["theme"]["locales"]["/"]["navbar"]
            .as_array()
            .unwrap()
            .iter()
            .map(|entry| entry.get("link").unwrap_or(entry).as_str().unwrap().to_string())
            .collect();
        assert_eq!(links, ["/", "/tutorials/", "/posts/"]);

        let sidebar = &json["theme"]["locales"]["/"]["sidebar"]["/"];
        assert_eq!(sidebar[0], "");
        assert_eq!(sidebar[1]["children"], "structure");
        assert_eq!(sidebar[2], "intro");
    }

    #[test]
    fn test_metadata_markdown_plugins_and_head() {
        let config = test_parse_config(TWO_LOCALES);
        let json = assembled_json(&config);
        let theme = &json["theme"];

        assert_eq!(json["base"], "/");
        assert_eq!(json["head"][0][0], "script");
        assert_eq!(json["head"][0][1]["defer"], true);
        assert_eq!(theme["hostname"], "https://techstay.tech");
        assert_eq!(theme["author"]["name"], "techstay");
        assert_eq!(theme["docsDir"], "src");
        assert!(theme.get("logo").is_none());
        assert_eq!(theme["markdown"]["imgLazyload"], true);
        assert_eq!(theme["markdown"]["math"]["type"], "katex");
        assert_eq!(theme["plugins"]["blog"], true);
        assert_eq!(theme["plugins"]["comment"]["provider"], "Giscus");
        assert_eq!(theme["plugins"]["comment"]["repoId"], "R_kgDOJZ7KHA");
    }

    #[test]
    fn test_missing_theme_locale_fails() {
        let config = test_parse_config("[theme.locales.\"/zh/\"]\nnavbar = []\nsidebar = []");
        let err = assemble(&config, &AssembleOptions::default()).unwrap_err();
        assert!(err.to_string().contains("'/' has no theme entry"));
    }

    #[test]
    fn test_resolve_structure_from_docs_dir() {
        let temp = TempDir::new().unwrap();
        let posts = temp.path().join("src/zh/posts");
        fs::create_dir_all(&posts).unwrap();
        fs::write(posts.join("hello.md"), "# hello").unwrap();

        let mut config = test_parse_config(TWO_LOCALES);
        config.set_root(temp.path());
        let options = AssembleOptions {
            resolve_structure: true,
        };
        let json = serde_json::to_value(assemble(&config, &options).unwrap()).unwrap();

        let zh_posts = &json["theme"]["locales"]["/zh/"]["sidebar"]["/zh/"][1];
        assert_eq!(zh_posts["children"], serde_json::json!(["hello"]));
        let root_posts = &json["theme"]["locales"]["/"]["sidebar"]["/"][1];
        assert_eq!(root_posts["children"], serde_json::json!([]));
    }
}
