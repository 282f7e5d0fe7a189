//! Pre-initialization validation.
//!
//! Validates target directory state before the blog is created.

use anyhow::{Result, bail};
use std::path::Path;

/// Initialization mode determines validation rules.
#[derive(Debug, Clone, Copy)]
pub enum InitMode {
    /// `blogcfg init` - initialize in current directory (no config yet)
    CurrentDir,
    /// `blogcfg init <name>` - create new subdirectory (must not exist)
    NewDir,
}

/// Validate target directory for initialization.
///
/// # Rules
/// - `CurrentDir`: the config file must not exist yet
/// - `NewDir`: directory must not exist
pub fn validate_target(root: &Path, config_path: &Path, mode: InitMode) -> Result<()> {
    match mode {
        InitMode::CurrentDir => {
            if config_path.exists() {
                bail!(
                    "'{}' already exists.\n\
                     Use `blogcfg init <name>` to create a blog in a new subdirectory.",
                    config_path.display()
                );
            }
        }
        InitMode::NewDir => {
            if root.exists() {
                bail!(
                    "Directory '{}' already exists.\n\
                     Choose a different name or remove the existing directory.",
                    root.display()
                );
            }
        }
    }
    Ok(())
}
