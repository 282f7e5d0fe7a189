//! `[plugins.feed]` settings.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Feed output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedFormat {
    /// RSS 2.0.
    Rss,
    /// Atom 1.0.
    Atom,
    /// JSON Feed 1.1.
    Json,
}

impl FeedFormat {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rss => "rss",
            Self::Atom => "atom",
            Self::Json => "json",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub rss: bool,
    pub atom: bool,
    pub json: bool,
}

impl FeedConfig {
    /// Enabled formats in a fixed order.
    pub fn formats(&self) -> Vec<FeedFormat> {
        [
            (self.rss, FeedFormat::Rss),
            (self.atom, FeedFormat::Atom),
            (self.json, FeedFormat::Json),
        ]
        .into_iter()
        .filter_map(|(on, format)| on.then_some(format))
        .collect()
    }

    /// Only enabled formats are emitted.
    pub fn to_json(&self) -> Map<String, Value> {
        self.formats()
            .into_iter()
            .map(|format| (format.as_str().to_string(), Value::Bool(true)))
            .collect()
    }
}
