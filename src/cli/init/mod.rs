//! Blog initialization.
//!
//! Writes the starter `blog.toml` and creates the content directories its
//! sidebars read from.
//!
//! # Module Structure
//!
//! - [`validate`]: Pre-initialization validation
//! - [`structure`]: Content directory creation

mod structure;
mod validate;

use crate::{
    config::SiteConfig,
    embed::init::{BLOG_TOML, BlogVars},
    log,
};
use anyhow::{Context, Result};
use std::{fs, path::Path};

use validate::InitMode;

/// Title used when the target directory has no usable name.
const DEFAULT_TITLE: &str = "My Blog";

/// Create a new blog at the configured root.
///
/// # Steps
/// 1. Validate target directory
/// 2. Create content directories
/// 3. Write the configuration file
///
/// If `dry_run` is true, only prints the config template to stdout
pub fn new_blog(site_config: &SiteConfig, has_name: bool, dry_run: bool) -> Result<()> {
    let root = site_config.get_root();
    let content = render_template(root);

    if dry_run {
        print!("{content}");
        return Ok(());
    }

    let mode = if has_name {
        InitMode::NewDir
    } else {
        InitMode::CurrentDir
    };
    validate::validate_target(root, &site_config.config_path, mode)?;

    let mut starter = SiteConfig::from_str(&content)?;
    starter.set_root(root);
    let dirs = structure::create_structure(&starter)?;

    let path = &site_config.config_path;
    fs::write(path, &content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    log!(
        "init";
        "blog initialized at {} ({})",
        root.display(),
        match dirs.len() {
            1 => "1 content directory".to_string(),
            n => format!("{n} content directories"),
        }
    );
    Ok(())
}

/// Starter configuration titled after the blog directory.
fn render_template(root: &Path) -> String {
    let title = root
        .file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_TITLE);
    BLOG_TOML.render(&BlogVars { title })
}
