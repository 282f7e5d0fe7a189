//! `[theme.markdown]` extension toggles.
//!
//! Each key names a markdown extension. The value is either a switch or an
//! options table handed to the extension unchanged:
//!
//! ```toml
//! [theme.markdown]
//! figure = true
//! img_lazyload = true
//! math = { type = "katex" }
//! ```
//!
//! Keys may be written in snake_case; they are emitted in camelCase. Two
//! spellings of the same key (`img_lazyload` and `imgLazyload`) are an error.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MarkdownFeature {
    Toggle(bool),
    Options(Map<String, Value>),
}

impl MarkdownFeature {
    /// An options table counts as enabled.
    pub const fn is_enabled(&self) -> bool {
        match self {
            Self::Toggle(on) => *on,
            Self::Options(_) => true,
        }
    }

    fn to_json(&self) -> Value {
        match self {
            Self::Toggle(on) => Value::Bool(*on),
            Self::Options(options) => Value::Object(options.clone()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarkdownConfig(BTreeMap<String, MarkdownFeature>);

impl MarkdownConfig {
    pub fn set(mut self, name: impl Into<String>, feature: MarkdownFeature) -> Self {
        self.0.insert(name.into(), feature);
        self
    }

    /// Whether an extension is switched on. Unlisted extensions are off.
    pub fn is_enabled(&self, name: &str) -> bool {
        self.0.get(name).is_some_and(MarkdownFeature::is_enabled)
            || self
                .0
                .iter()
                .any(|(key, feature)| to_camel_case(key) == name && feature.is_enabled())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Report keys that would be emitted under the same camelCase name.
    pub fn validate(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        let mut emitted: BTreeMap<String, &str> = BTreeMap::new();
        for key in self.0.keys() {
            let name = to_camel_case(key);
            match emitted.get(&name) {
                Some(first) => diag.error_with_hint(
                    field.key(key),
                    format!("'{key}' and '{first}' are both emitted as '{name}'"),
                    "keep one spelling of this extension",
                ),
                None => {
                    emitted.insert(name, key);
                }
            }
        }
    }

    /// Framework form: camelCase keys, values unchanged.
    pub fn to_json(&self) -> Map<String, Value> {
        self.0
            .iter()
            .map(|(key, feature)| (to_camel_case(key), feature.to_json()))
            .collect()
    }
}

/// `img_lazyload` -> `imgLazyload`; camelCase input is returned unchanged.
pub fn to_camel_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper = false;
    for c in key.chars() {
        if c == '_' {
            upper = !out.is_empty();
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}
