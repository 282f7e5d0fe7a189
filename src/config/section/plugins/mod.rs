//! `[plugins]` section configuration.
//!
//! Known plugins are typed; any other table under `[plugins]` is handed to
//! the framework as-is under its own name.
//!
//! # Example
//!
//! ```toml
//! [plugins]
//! blog = true
//!
//! [plugins.icon]
//! assets = "iconify"
//!
//! [plugins.analytics]
//! id = "G-XXXXXXXXXX"
//!
//! [plugins.feed]
//! rss = true
//!
//! [plugins.copy_code]
//! show_in_mobile = false
//! ```

mod comment;
mod feed;
mod search;

pub use comment::{CommentConfig, CommentProvider};
pub use feed::{FeedConfig, FeedFormat};
pub use search::SearchConfig;

use crate::config::section::locale::LocaleTable;
use crate::config::section::theme::to_camel_case;
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginsConfig {
    /// Blog features (article lists, categories, tags, timeline).
    pub blog: bool,
    pub icon: Option<IconConfig>,
    pub comment: Option<CommentConfig>,
    pub feed: Option<FeedConfig>,
    pub search: Option<SearchConfig>,
    pub analytics: Option<AnalyticsConfig>,
    /// Any other plugin, passed through unchanged.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    /// Icon asset source: "iconify", "fontawesome", or a URL.
    pub assets: String,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            assets: "iconify".into(),
        }
    }
}

/// Page-view analytics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Tracking ID, e.g. "G-XXXXXXXXXX".
    pub id: String,
}

impl PluginsConfig {
    pub fn validate(&self, locales: &LocaleTable, diag: &mut ConfigDiagnostics) {
        let root = FieldPath::new("plugins");

        if let Some(icon) = &self.icon
            && icon.assets.trim().is_empty()
        {
            diag.error(root.field("icon").field("assets"), "icon assets source is empty");
        }
        if let Some(comment) = &self.comment {
            comment.validate(&root.field("comment"), diag);
        }
        if let Some(search) = &self.search {
            search.validate(locales, &root.field("search"), diag);
        }
        if let Some(analytics) = &self.analytics
            && analytics.id.trim().is_empty()
        {
            diag.error_with_hint(
                root.field("analytics").field("id"),
                "analytics is configured without a tracking id",
                "set id or remove [plugins.analytics]",
            );
        }
        if let Some(feed) = &self.feed
            && feed.formats().is_empty()
        {
            diag.warn(root.field("feed"), "feed plugin enabled with no output format");
        }
        for (name, options) in &self.extra {
            if !matches!(options, Value::Bool(_) | Value::Object(_)) {
                diag.error(
                    root.key(name),
                    format!("plugin '{name}' must be a switch or an options table"),
                );
            }
        }
        self.validate_output_names(&root, diag);
    }

    /// Extra plugins are emitted in camelCase next to the typed ones; two
    /// plugins must never end up under one name.
    fn validate_output_names(&self, root: &FieldPath, diag: &mut ConfigDiagnostics) {
        let typed = [
            ("blog", "blog", self.blog),
            ("icon", "icon", self.icon.is_some()),
            ("comment", "comment", self.comment.is_some()),
            ("feed", "feed", self.feed.is_some()),
            ("search", "search", self.search.is_some()),
            ("googleAnalytics", "analytics", self.analytics.is_some()),
        ];
        let mut emitted: BTreeMap<String, &str> = typed
            .into_iter()
            .filter(|(.., configured)| *configured)
            .map(|(output, name, _)| (output.to_string(), name))
            .collect();

        for name in self.extra.keys() {
            let output = to_camel_case(name);
            match emitted.get(&output) {
                Some(first) => diag.error_with_hint(
                    root.key(name),
                    format!("plugin '{name}' is emitted as '{output}', which '{first}' already uses"),
                    "rename or remove one of them",
                ),
                None => {
                    emitted.insert(output, name);
                }
            }
        }
    }

    /// Framework form. Only configured plugins appear.
    pub fn to_json(&self) -> Map<String, Value> {
        let mut out = Map::new();
        if self.blog {
            out.insert("blog".into(), Value::Bool(true));
        }
        if let Some(icon) = &self.icon {
            out.insert("icon".into(), json!({ "assets": icon.assets }));
        }
        if let Some(comment) = &self.comment {
            out.insert("comment".into(), Value::Object(comment.to_json()));
        }
        if let Some(feed) = &self.feed {
            out.insert("feed".into(), Value::Object(feed.to_json()));
        }
        if let Some(search) = &self.search {
            out.insert("search".into(), Value::Object(search.to_json()));
        }
        if let Some(analytics) = &self.analytics {
            out.insert("googleAnalytics".into(), json!({ "id": analytics.id }));
        }
        for (name, options) in &self.extra {
            out.insert(to_camel_case(name), options.clone());
        }
        out
    }
}
