//! `[theme.locales."<prefix>"]`: menus, footer and blog strings of one locale.

use crate::config::section::locale::LocaleTable;
use crate::config::section::nav::Navbar;
use crate::config::section::sidebar::Sidebar;
use crate::config::{ConfigDiagnostics, FieldPath};
use crate::utils::path::is_absolute_route;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleThemeConfig {
    pub navbar: Option<Navbar>,
    pub sidebar: Option<Sidebar>,
    /// Footer HTML template.
    pub footer: String,
    pub display_footer: bool,
    pub blog: LocaleBlogConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleBlogConfig {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Route of the author introduction page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intro: Option<String>,
}

impl LocaleThemeConfig {
    pub fn new(navbar: Navbar, sidebar: Sidebar) -> Self {
        Self {
            navbar: Some(navbar),
            sidebar: Some(sidebar),
            ..Self::default()
        }
    }

    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = footer.into();
        self.display_footer = true;
        self
    }

    pub fn blog(mut self, description: impl Into<String>, intro: Option<&str>) -> Self {
        self.blog = LocaleBlogConfig {
            description: description.into(),
            intro: intro.map(str::to_string),
        };
        self
    }

    pub fn validate(
        &self,
        prefix: &str,
        locales: &LocaleTable,
        field: &FieldPath,
        diag: &mut ConfigDiagnostics,
    ) {
        match &self.navbar {
            Some(navbar) => navbar.validate(&field.field("navbar"), diag),
            None => diag.error(field.field("navbar"), format!("locale '{prefix}' has no navbar")),
        }

        match &self.sidebar {
            Some(sidebar) => sidebar.validate(prefix, locales, &field.field("sidebar"), diag),
            None => diag.error(field.field("sidebar"), format!("locale '{prefix}' has no sidebar")),
        }

        if self.display_footer && self.footer.trim().is_empty() {
            diag.warn(field.field("footer"), "display_footer is set but footer is empty");
        }

        if let Some(intro) = &self.blog.intro
            && !is_absolute_route(intro)
        {
            diag.error(
                field.field("blog").field("intro"),
                format!("intro '{intro}' is not an absolute path"),
            );
        }
    }
}
