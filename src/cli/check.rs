//! `blogcfg check`: report on a configuration that passed validation.
//!
//! Loading already rejects invalid configurations, so this command only
//! summarizes and, with `--content`, looks at the content directory.

use crate::{
    config::{FieldPath, SiteConfig},
    log,
    utils::plural_count,
};
use anyhow::Result;

pub fn check_config(config: &SiteConfig, content: bool) -> Result<()> {
    if content {
        let diag = config.content_diagnostics();
        diag.print_warnings();
    }
    log!("check"; "{}: {}", config.config_path.display(), summary(config));
    Ok(())
}

/// e.g. "2 locales, 6 navbar entries, 4 sidebar sections"
fn summary(config: &SiteConfig) -> String {
    let mut nav_entries = 0;
    let mut sections = 0;
    for (prefix, locale) in &config.theme.locales {
        if let Some(navbar) = &locale.navbar {
            nav_entries += navbar.len();
        }
        if let Some(sidebar) = &locale.sidebar {
            sections += sidebar.sections(prefix, &FieldPath::new("sidebar")).len();
        }
    }
    format!(
        "{}, {}, {}",
        plural_count(config.locales.len(), "locale"),
        match nav_entries {
            1 => "1 navbar entry".to_string(),
            n => format!("{n} navbar entries"),
        },
        plural_count(sections, "sidebar section")
    )
}
