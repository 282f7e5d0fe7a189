//! Per-locale navigation bar.
//!
//! A navbar is an ordered list. Each entry is either a bare link (the
//! framework labels it with the target page's title) or a full item:
//!
//! ```toml
//! navbar = [
//!   "/",
//!   { text = "Tutorials", icon = "material-symbols:school", link = "/tutorials/" },
//!   { text = "Posts", icon = "mdi:blog-outline", link = "/posts/" },
//! ]
//! ```
//!
//! Entry order is display order. Nothing is sorted or deduplicated.

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::utils::path::is_absolute_route;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// A labelled navbar link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub text: String,
    /// Icon identifier understood by the icon plugin (e.g. "mdi:blog-outline").
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub icon: String,
    pub link: String,
}

impl NavItem {
    pub fn new(text: impl Into<String>, icon: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            icon: icon.into(),
            link: link.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavEntry {
    /// Bare page link, e.g. `"/"`.
    Link(String),
    Item(NavItem),
}

impl NavEntry {
    pub fn link(path: impl Into<String>) -> Self {
        Self::Link(path.into())
    }

    /// Target route of this entry.
    pub fn target(&self) -> &str {
        match self {
            Self::Link(link) | Self::Item(NavItem { link, .. }) => link,
        }
    }

    /// Display label, if the entry carries one.
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Link(_) => None,
            Self::Item(item) => Some(&item.text),
        }
    }
}

impl From<NavItem> for NavEntry {
    fn from(item: NavItem) -> Self {
        Self::Item(item)
    }
}

/// Ordered navbar entries for one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Navbar(Vec<NavEntry>);

impl Navbar {
    pub fn new(entries: impl IntoIterator<Item = NavEntry>) -> Self {
        Self(entries.into_iter().collect())
    }

    /// Append an entry at the end (rightmost position).
    pub fn push(mut self, entry: impl Into<NavEntry>) -> Self {
        self.0.push(entry.into());
        self
    }

    pub fn entries(&self) -> &[NavEntry] {
        &self.0
    }

    /// Every link target, in display order.
    pub fn links(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(NavEntry::target)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every link must be an absolute site route; items need a label.
    /// Repeated links are kept but reported as warnings.
    pub fn validate(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        let mut seen = FxHashSet::default();
        for (i, entry) in self.0.iter().enumerate() {
            let entry_field = field.index(i);
            let link = entry.target();
            if !is_absolute_route(link) {
                let link_field = match entry {
                    NavEntry::Link(_) => entry_field.clone(),
                    NavEntry::Item(_) => entry_field.field("link"),
                };
                diag.error_with_hint(
                    link_field,
                    format!("link '{link}' is not an absolute path"),
                    format!("navbar links start with '/', e.g. \"/{}\"", link.trim_start_matches('/')),
                );
            }
            if entry.label().is_some_and(|text| text.trim().is_empty()) {
                diag.error(entry_field.field("text"), "navbar item has an empty label");
            }
            if !seen.insert(link) {
                diag.warn(entry_field, format!("link '{link}' appears more than once"));
            }
        }
    }
}

impl FromIterator<NavEntry> for Navbar {
    fn from_iter<I: IntoIterator<Item = NavEntry>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Wrapper {
        navbar: Navbar,
    }

    fn parse(content: &str) -> Navbar {
        toml::from_str::<Wrapper>(content).unwrap().navbar
    }

    #[test]
    fn test_parse_mixed_entries_preserves_order() {
        let navbar = parse(
            r#"navbar = [
  "/",
  { text = "Tutorials", icon = "material-symbols:school", link = "/tutorials/" },
  { text = "Posts", link = "/posts/" },
]"#,
        );
        assert_eq!(navbar.len(), 3);
        assert_eq!(navbar.entries()[0], NavEntry::link("/"));
        assert_eq!(
            navbar.entries()[1],
            NavEntry::Item(NavItem::new("Tutorials", "material-symbols:school", "/tutorials/"))
        );
        assert_eq!(navbar.entries()[2].label(), Some("Posts"));
        let links: Vec<_> = navbar.links().collect();
        assert_eq!(links, ["/", "/tutorials/", "/posts/"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let navbar = Navbar::default()
            .push(NavEntry::link("/posts/"))
            .push(NavEntry::link("/posts/"));
        assert_eq!(navbar.len(), 2);
    }

    #[test]
    fn test_validate_relative_link() {
        let navbar = Navbar::default()
            .push(NavItem::new("Posts", "blog", "posts/"))
            .push(NavEntry::link("/"));
        let mut diag = ConfigDiagnostics::new();
        navbar.validate(&FieldPath::new("navbar"), &mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "navbar[0].link");
    }

    #[test]
    fn test_validate_duplicate_link_warns() {
        let navbar = Navbar::new([
            NavEntry::link("/posts/"),
            NavItem::new("Posts", "blog", "/posts/").into(),
        ]);
        let mut diag = ConfigDiagnostics::new();
        navbar.validate(&FieldPath::new("navbar"), &mut diag);
        assert!(diag.is_empty());
        assert_eq!(diag.warnings().len(), 1);
        assert_eq!(diag.warnings()[0].field.as_str(), "navbar[1]");
    }

    #[test]
    fn test_validate_empty_label() {
        let navbar = Navbar::new([NavItem::new(" ", "", "/posts/").into()]);
        let mut diag = ConfigDiagnostics::new();
        navbar.validate(&FieldPath::new("navbar"), &mut diag);
        assert_eq!(diag.errors()[0].field.as_str(), "navbar[0].text");
    }

    #[test]
    fn test_serialize_omits_empty_icon() {
        let json = serde_json::to_string(&Navbar::new([
            NavEntry::link("/"),
            NavItem::new("Posts", "", "/posts/").into(),
        ]))
        .unwrap();
        assert_eq!(json, r#"["/",{"text":"Posts","link":"/posts/"}]"#);
    }
}
