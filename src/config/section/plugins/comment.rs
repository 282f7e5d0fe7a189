//! `[plugins.comment]` settings.
//!
//! ```toml
//! [plugins.comment]
//! provider = "giscus"
//! repo = "techstay/techblog"
//! repo_id = "R_kgDOJZ7KHA"
//! category = "Announcements"
//! category_id = "DIC_kwDOJZ7KHM4CV9lO"
//! mapping = "pathname"
//! ```
//!
//! Giscus threads live in GitHub discussions and need the repo and category
//! identifiers. The other providers talk to a self-hosted server.

use crate::config::util::{check_http_url, is_repo_slug};
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentProvider {
    #[default]
    #[serde(alias = "Giscus")]
    Giscus,
    #[serde(alias = "Waline")]
    Waline,
    #[serde(alias = "Twikoo")]
    Twikoo,
    #[serde(alias = "Artalk")]
    Artalk,
}

impl CommentProvider {
    /// Name in the framework's spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Giscus => "Giscus",
            Self::Waline => "Waline",
            Self::Twikoo => "Twikoo",
            Self::Artalk => "Artalk",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentConfig {
    pub provider: CommentProvider,
    /// `owner/name` of the discussion repository (giscus).
    pub repo: String,
    pub repo_id: String,
    pub category: String,
    pub category_id: String,
    /// How pages map to discussions (giscus).
    pub mapping: String,
    /// Comment server (waline, twikoo, artalk).
    pub server_url: Option<String>,
}

impl Default for CommentConfig {
    fn default() -> Self {
        Self {
            provider: CommentProvider::Giscus,
            repo: String::new(),
            repo_id: String::new(),
            category: String::new(),
            category_id: String::new(),
            mapping: "pathname".into(),
            server_url: None,
        }
    }
}

impl CommentConfig {
    pub fn validate(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        match self.provider {
            CommentProvider::Giscus => {
                if !is_repo_slug(&self.repo) {
                    diag.error_with_hint(
                        field.field("repo"),
                        format!("repo '{}' is not of the form owner/name", self.repo),
                        "e.g. \"techstay/techblog\"",
                    );
                }
                for (name, value) in [("repo_id", &self.repo_id), ("category_id", &self.category_id)] {
                    if value.trim().is_empty() {
                        diag.error_with_hint(
                            field.field(name),
                            format!("{name} is required for giscus"),
                            "copy it from the giscus configuration page",
                        );
                    }
                }
            }
            CommentProvider::Waline | CommentProvider::Twikoo | CommentProvider::Artalk => {
                match &self.server_url {
                    Some(url) => check_http_url(url, field.field("server_url"), diag),
                    None => diag.error(
                        field.field("server_url"),
                        format!("server_url is required for {}", self.provider.as_str()),
                    ),
                }
            }
        }
    }

    /// Framework form: camelCase keys, provider-specific fields only.
    pub fn to_json(&self) -> Map<String, Value> {
        let mut out = Map::new();
        out.insert("provider".into(), self.provider.as_str().into());
        match self.provider {
            CommentProvider::Giscus => {
                out.insert("repo".into(), self.repo.clone().into());
                out.insert("repoId".into(), self.repo_id.clone().into());
                if !self.category.is_empty() {
                    out.insert("category".into(), self.category.clone().into());
                }
                out.insert("categoryId".into(), self.category_id.clone().into());
                out.insert("mapping".into(), self.mapping.clone().into());
            }
            _ => {
                if let Some(url) = &self.server_url {
                    out.insert("serverURL".into(), url.clone().into());
                }
            }
        }
        out
    }
}
