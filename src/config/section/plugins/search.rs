//! `[plugins.search]` settings: full-text search with per-locale placeholders.
//!
//! ```toml
//! [plugins.search]
//! max_suggestions = 10
//! placeholder = { "/" = "Search", "/zh/" = "搜索" }
//! ```

use crate::config::section::locale::LocaleTable;
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum number of suggestions; framework default when unset.
    pub max_suggestions: Option<u32>,
    /// Input placeholder per locale prefix.
    pub placeholder: BTreeMap<String, String>,
}

impl SearchConfig {
    pub fn validate(&self, locales: &LocaleTable, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        for prefix in self.placeholder.keys() {
            if !locales.contains(prefix) {
                diag.error_with_hint(
                    field.field("placeholder").key(prefix),
                    format!("placeholder for unknown locale '{prefix}'"),
                    "placeholder keys must match a [locales] prefix",
                );
            }
        }
        if self.max_suggestions == Some(0) {
            diag.warn(field.field("max_suggestions"), "0 disables suggestions");
        }
    }

    pub fn to_json(&self) -> Map<String, Value> {
        let mut out = Map::new();
        if let Some(max) = self.max_suggestions {
            out.insert("maxSuggestions".into(), json!(max));
        }
        if !self.placeholder.is_empty() {
            let locales: Map<String, Value> = self
                .placeholder
                .iter()
                .map(|(prefix, text)| (prefix.clone(), json!({ "placeholder": text })))
                .collect();
            out.insert("locales".into(), Value::Object(locales));
        }
        out
    }
}
