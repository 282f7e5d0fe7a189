//! `[locales]` table: URL path prefix → language, title, description.
//!
//! # Example
//!
//! ```toml
//! [locales."/"]
//! lang = "en-US"
//! title = "Techstay's Tech Blog"
//! description = "A tech blog"
//!
//! [locales."/zh/"]
//! lang = "zh-CN"
//! title = "易艾福G的技术博客"
//! description = "我的技术博客，专注于技术"
//! ```

use crate::config::{ConfigDiagnostics, ConfigError, FieldPath};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Strings for one locale of the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleEntry {
    /// BCP 47 language tag (e.g. "en-US", "zh-CN").
    pub lang: String,
    /// Site title shown for this locale.
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl LocaleEntry {
    pub fn new(
        lang: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            lang: lang.into(),
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Locale table keyed by path prefix.
///
/// Prefixes are unique: TOML rejects duplicate keys when parsing a file,
/// and [`LocaleTable::insert`] rejects them when building in code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleTable(BTreeMap<String, LocaleEntry>);

impl LocaleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a locale. Fails if the prefix is already present.
    pub fn insert(
        &mut self,
        prefix: impl Into<String>,
        entry: LocaleEntry,
    ) -> Result<(), ConfigError> {
        let prefix = prefix.into();
        if self.0.contains_key(&prefix) {
            return Err(ConfigError::DuplicateLocale(prefix));
        }
        self.0.insert(prefix, entry);
        Ok(())
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, prefix: impl Into<String>, entry: LocaleEntry) -> Result<Self, ConfigError> {
        self.insert(prefix, entry)?;
        Ok(self)
    }

    pub fn get(&self, prefix: &str) -> Option<&LocaleEntry> {
        self.0.get(prefix)
    }

    pub fn contains(&self, prefix: &str) -> bool {
        self.0.contains_key(prefix)
    }

    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// The locale serving `route`: the longest configured prefix it starts with.
    pub fn owner_of(&self, route: &str) -> Option<&str> {
        self.prefixes()
            .filter(|prefix| route.starts_with(prefix))
            .max_by_key(|prefix| prefix.len())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LocaleEntry)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Validate prefixes and required strings.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let root = FieldPath::new("locales");

        if self.is_empty() {
            diag.error_with_hint(
                root,
                "no locales configured",
                "add at least [locales.\"/\"] with lang and title",
            );
            return;
        }

        for (prefix, entry) in self.iter() {
            let field = root.key(prefix);
            if !is_locale_prefix(prefix) {
                diag.error_with_hint(
                    field.clone(),
                    format!("locale prefix '{prefix}' must start and end with '/'"),
                    "use \"/\" for the default locale and \"/xx/\" for others",
                );
            }
            if entry.lang.trim().is_empty() {
                diag.error(field.field("lang"), "language tag is empty");
            }
            if entry.title.trim().is_empty() {
                diag.warn(field.field("title"), "title is empty");
            }
        }
    }
}

impl<'a> IntoIterator for &'a LocaleTable {
    type Item = (&'a String, &'a LocaleEntry);
    type IntoIter = std::collections::btree_map::Iter<'a, String, LocaleEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Locale prefixes look like `/` or `/zh/`.
#[inline]
pub fn is_locale_prefix(prefix: &str) -> bool {
    prefix.starts_with('/') && prefix.ends_with('/') && !prefix.contains("//")
}
