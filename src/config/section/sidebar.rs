//! Per-locale sidebar trees.
//!
//! A sidebar is either a flat list (scoped to the locale prefix) or a map
//! of absolute group path to list. Entries are page identifiers relative to
//! the enclosing prefix (`""` is the index page) or sections:
//!
//! ```toml
//! [theme.locales."/".sidebar]
//! "/" = [
//!   "",
//!   { text = "Posts", icon = "mdi:blog-outline", prefix = "posts/", children = "structure" },
//!   "intro",
//! ]
//! ```
//!
//! `children = "structure"` asks for the section to be filled from the
//! content directory; an array lists the pages explicitly, in order.

use super::locale::LocaleTable;
use crate::config::{ConfigDiagnostics, FieldPath};
use crate::utils::path::{is_absolute_route, join_route};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sentinel for directory-derived children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Directive {
    #[serde(rename = "structure")]
    Structure,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Children {
    /// Enumerate the content directory named by the section prefix.
    Directive(Directive),
    /// Explicit ordered entries.
    Explicit(Vec<SidebarEntry>),
}

impl Default for Children {
    fn default() -> Self {
        Self::Explicit(Vec::new())
    }
}

impl Children {
    pub const fn is_structure(&self) -> bool {
        matches!(self, Self::Directive(Directive::Structure))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarSection {
    pub text: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub icon: String,
    /// Path prefix for children, relative to the enclosing prefix unless it
    /// starts with `/`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub prefix: String,
    /// Page the section header links to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsible: Option<bool>,
    #[serde(default)]
    pub children: Children,
}

impl SidebarSection {
    pub fn new(text: impl Into<String>, icon: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            icon: icon.into(),
            prefix: prefix.into(),
            link: None,
            collapsible: None,
            children: Children::default(),
        }
    }

    /// Derive children from the content directory.
    pub fn structure(mut self) -> Self {
        self.children = Children::Directive(Directive::Structure);
        self
    }

    /// Use an explicit ordered list of children.
    pub fn children(mut self, entries: impl IntoIterator<Item = SidebarEntry>) -> Self {
        self.children = Children::Explicit(entries.into_iter().collect());
        self
    }

    pub fn collapsible(mut self, collapsible: bool) -> Self {
        self.collapsible = Some(collapsible);
        self
    }

    pub fn link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SidebarEntry {
    /// Page identifier relative to the enclosing prefix.
    Page(String),
    Section(SidebarSection),
}

impl SidebarEntry {
    pub fn page(id: impl Into<String>) -> Self {
        Self::Page(id.into())
    }
}

impl From<SidebarSection> for SidebarEntry {
    fn from(section: SidebarSection) -> Self {
        Self::Section(section)
    }
}

/// A section together with its resolved absolute route and config location.
#[derive(Debug, Clone)]
pub struct ResolvedSection<'a> {
    pub route: String,
    pub field: FieldPath,
    pub section: &'a SidebarSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Sidebar {
    /// Entries scoped to the locale prefix.
    Flat(Vec<SidebarEntry>),
    /// Group path → entries.
    Grouped(BTreeMap<String, Vec<SidebarEntry>>),
}

impl Default for Sidebar {
    fn default() -> Self {
        Self::Flat(Vec::new())
    }
}

impl Sidebar {
    pub fn flat(entries: impl IntoIterator<Item = SidebarEntry>) -> Self {
        Self::Flat(entries.into_iter().collect())
    }

    /// Add a group to the sidebar of `locale`.
    ///
    /// A non-empty flat sidebar keeps its entries under the `locale` key.
    pub fn group(
        self,
        locale: &str,
        path: impl Into<String>,
        entries: impl IntoIterator<Item = SidebarEntry>,
    ) -> Self {
        let mut groups = match self {
            Self::Grouped(groups) => groups,
            Self::Flat(entries) if entries.is_empty() => BTreeMap::new(),
            Self::Flat(entries) => BTreeMap::from([(locale.to_string(), entries)]),
        };
        groups.insert(path.into(), entries.into_iter().collect());
        Self::Grouped(groups)
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Flat(entries) => entries.is_empty(),
            Self::Grouped(groups) => groups.is_empty(),
        }
    }

    /// Normalize both shapes to `(group route, entries, config field)`.
    pub fn groups<'a>(
        &'a self,
        locale: &str,
        field: &FieldPath,
    ) -> Vec<(String, &'a [SidebarEntry], FieldPath)> {
        match self {
            Self::Flat(entries) => vec![(locale.to_string(), entries.as_slice(), field.clone())],
            Self::Grouped(groups) => groups
                .iter()
                .map(|(path, entries)| (path.clone(), entries.as_slice(), field.key(path)))
                .collect(),
        }
    }

    /// Every section in the tree, depth first, with its absolute route.
    pub fn sections<'a>(&'a self, locale: &str, field: &FieldPath) -> Vec<ResolvedSection<'a>> {
        let mut out = Vec::new();
        for (route, entries, group_field) in self.groups(locale, field) {
            collect_sections(&route, entries, &group_field, &mut out);
        }
        out
    }

    /// Validate group scoping and section routes.
    ///
    /// Every group and section route must be served by `locale`: it starts
    /// with the locale prefix and no longer prefix in `locales` claims it.
    /// Sections of a group that is already out of scope are not checked
    /// for scope again.
    pub fn validate(
        &self,
        locale: &str,
        locales: &LocaleTable,
        field: &FieldPath,
        diag: &mut ConfigDiagnostics,
    ) {
        for (route, entries, group_field) in self.groups(locale, field) {
            let in_scope = if !is_absolute_route(&route) {
                diag.error_with_hint(
                    group_field.clone(),
                    format!("sidebar group '{route}' is not an absolute path"),
                    format!("use a key like \"{locale}\""),
                );
                false
            } else if !in_locale(&route, locale, locales) {
                diag.error_with_hint(
                    group_field.clone(),
                    format!("sidebar group '{route}' lies outside locale '{locale}'"),
                    scope_hint(&route, locale, locales),
                );
                false
            } else {
                true
            };

            let mut sections = Vec::new();
            collect_sections(&route, entries, &group_field, &mut sections);
            for resolved in sections {
                validate_section(&resolved, diag);
                if in_scope
                    && is_absolute_route(&resolved.route)
                    && !in_locale(&resolved.route, locale, locales)
                {
                    diag.error_with_hint(
                        resolved.field.field("prefix"),
                        format!(
                            "section path '{}' lies outside locale '{locale}'",
                            resolved.route
                        ),
                        scope_hint(&resolved.route, locale, locales),
                    );
                }
            }
        }
    }
}

/// Whether `route` is served by `locale` rather than another configured locale.
///
/// A locale missing from `locales` is reported elsewhere; only the plain
/// prefix match applies to it.
fn in_locale(route: &str, locale: &str, locales: &LocaleTable) -> bool {
    route.starts_with(locale) && (!locales.contains(locale) || locales.owner_of(route) == Some(locale))
}

fn scope_hint(route: &str, locale: &str, locales: &LocaleTable) -> String {
    match locales.owner_of(route) {
        Some(owner) if owner != locale => {
            format!("'{route}' belongs to locale '{owner}'; move it to that locale's sidebar")
        }
        _ => format!("routes of this locale start with \"{locale}\""),
    }
}

fn validate_section(resolved: &ResolvedSection<'_>, diag: &mut ConfigDiagnostics) {
    let section = resolved.section;
    if section.text.trim().is_empty() {
        diag.error(resolved.field.field("text"), "sidebar section has an empty label");
    }
    if !is_absolute_route(&resolved.route) {
        diag.error(
            resolved.field.field("prefix"),
            format!("section path '{}' is not an absolute path", resolved.route),
        );
    }
    if section.prefix.split('/').any(|segment| segment == "..") {
        diag.error(
            resolved.field.field("prefix"),
            format!("prefix '{}' escapes its parent directory", section.prefix),
        );
    }
    if let Some(link) = &section.link
        && !is_absolute_route(&join_route(&resolved.route, link))
    {
        diag.error(
            resolved.field.field("link"),
            format!("link '{link}' is not an absolute path"),
        );
    }
}

fn collect_sections<'a>(
    base: &str,
    entries: &'a [SidebarEntry],
    field: &FieldPath,
    out: &mut Vec<ResolvedSection<'a>>,
) {
    for (i, entry) in entries.iter().enumerate() {
        let SidebarEntry::Section(section) = entry else {
            continue;
        };
        let route = join_route(base, &section.prefix);
        let entry_field = field.index(i);
        if let Children::Explicit(children) = &section.children {
            collect_sections(&route, children, &entry_field.field("children"), out);
        }
        out.push(ResolvedSection {
            route,
            field: entry_field,
            section,
        });
    }
}
