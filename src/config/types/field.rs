//! Config field paths used in diagnostics.

use owo_colors::OwoColorize;
use std::fmt;

/// Dotted path to a config field, e.g. `theme.locales."/zh/".navbar[2].link`.
///
/// Locale keys are dynamic (they come from the user's file), so paths are
/// built at runtime with [`FieldPath::key`] and [`FieldPath::index`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath(String);

impl FieldPath {
    #[inline]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Append a plain field name.
    pub fn field(&self, name: &str) -> Self {
        if self.0.is_empty() {
            Self(name.to_string())
        } else {
            Self(format!("{}.{name}", self.0))
        }
    }

    /// Append a map key. Keys that are not bare TOML keys are quoted.
    pub fn key(&self, key: &str) -> Self {
        let is_bare = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-'));
        if is_bare {
            self.field(key)
        } else {
            self.field(&format!("\"{key}\""))
        }
    }

    /// Append an array index.
    pub fn index(&self, i: usize) -> Self {
        Self(format!("{}[{i}]", self.0))
    }

    /// Top-level section: `theme.locales."/".navbar` -> `theme`.
    pub fn section(&self) -> &str {
        self.0
            .split(['.', '['])
            .next()
            .unwrap_or_default()
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FieldPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}
