//! Site configuration management for `blog.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── locale     # [locales]
//! │   ├── nav        # navbar entries
//! │   ├── sidebar    # sidebar trees
//! │   ├── head       # [head]
//! │   ├── theme/     # [theme], [theme.markdown], [theme.locales]
//! │   └── plugins/   # [plugins]
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section            | Purpose                                        |
//! |--------------------|------------------------------------------------|
//! | `base`             | URL base the site is served under              |
//! | `[locales]`        | Path prefix → language tag, title, description |
//! | `[head]`           | Script and style tags injected in every page   |
//! | `[theme]`          | Metadata, markdown toggles, per-locale menus   |
//! | `[plugins]`        | Search, comments, feed, analytics and others   |

pub mod section;
pub mod types;
pub(crate) mod util;

use util::{extract_url_path, find_config_file};

pub use section::{
    HeadConfig, LocaleEntry, LocaleTable, LocaleThemeConfig, PluginsConfig, ThemeSectionConfig,
};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{BuildArgs, Cli, Commands},
    debug, log,
    utils::path::{expand_tilde, normalize_path, route_to_rel_path},
};
use anyhow::{Context, Result, bail};
use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing blog.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// URL base, e.g. "/" or "/techblog/". Derived from `theme.hostname`
    /// when unset.
    #[serde(default)]
    pub base: Option<String>,

    #[serde(default)]
    pub locales: LocaleTable,

    #[serde(default)]
    pub head: HeadConfig,

    #[serde(default)]
    pub theme: ThemeSectionConfig,

    #[serde(default)]
    pub plugins: PluginsConfig,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// For non-init commands, searches upward from cwd to find the config
    /// file. The project root is the config file's parent directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let (config_path, exists) = Self::resolve_config_path(cli)?;

        if cli.is_init() {
            let mut config = Self::default();
            config.config_path = config_path;
            config.finalize(cli);
            return Ok(config);
        }

        if !exists {
            bail!(ConfigError::Validation(format!(
                "config file '{}' not found, run `blogcfg init` to create one",
                cli.config.display()
            )));
        }

        let mut config = Self::from_path(&config_path, cli.yes)?;
        config.config_path = config_path;
        config.finalize(cli);
        config.validate()?;

        Ok(config)
    }

    /// Resolve config file path based on command.
    fn resolve_config_path(cli: &Cli) -> Result<(PathBuf, bool)> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        let config_name = expand_tilde(&cli.config);

        match &cli.command {
            Commands::Init { name: Some(name), .. } => {
                let path = cwd.join(name).join(&config_name);
                let exists = path.exists();
                Ok((path, exists))
            }
            Commands::Init { name: None, .. } => {
                let path = cwd.join(&config_name);
                let exists = path.exists();
                Ok((path, exists))
            }
            _ => match find_config_file(&config_name) {
                Some(path) => Ok((path, true)),
                None => Ok((cwd.join(&config_name), false)),
            },
        }
    }

    /// Finalize configuration after loading.
    fn finalize(&mut self, cli: &Cli) {
        crate::logger::set_verbose(cli.verbose);

        let root = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        self.set_root(&normalize_path(&root));
        self.config_path = normalize_path(&self.config_path);

        if let Commands::Build { build_args } = &cli.command {
            self.apply_build_args(build_args);
        }
    }

    /// Apply build arguments from CLI.
    ///
    /// The base path follows the overridden hostname through [`Self::base`].
    fn apply_build_args(&mut self, args: &BuildArgs) {
        if let Some(hostname) = &args.hostname {
            debug!("config"; "hostname overridden by CLI: {}", hostname);
            self.theme.hostname = Some(hostname.clone());
        }
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path, assume_yes: bool) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
            if !assume_yes && !Self::prompt_continue()? {
                bail!("Aborted due to unknown config fields");
            }
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Unknown keys are usually typos (`hostnmae`), so list them all.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        log!(
            "warning";
            "{} ignores {}:",
            path.display(),
            crate::utils::plural_count(fields.len(), "unknown field")
        );
        for field in fields {
            eprintln!("  {}", field.as_str().cyan());
        }
    }

    /// Prompt user to continue. Returns true only if user explicitly confirms.
    fn prompt_continue() -> Result<bool> {
        use std::io::{self, Write};

        eprint!("Continue? [y/N] ");
        io::stderr().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        let input = input.trim().to_lowercase();
        Ok(input == "y" || input == "yes")
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    /// Absolute content directory (`<root>/<theme.docs_dir>`).
    pub fn docs_dir(&self) -> PathBuf {
        self.root.join(&self.theme.docs_dir)
    }

    /// Content directory of a site route, e.g. `/zh/posts/` → `<docs>/zh/posts`.
    pub fn content_dir_for(&self, route: &str) -> PathBuf {
        self.docs_dir().join(route_to_rel_path(route))
    }

    /// Effective URL base.
    ///
    /// Explicit `base` wins; otherwise the path of `theme.hostname`
    /// (`https://user.github.io/techblog` → `/techblog/`); otherwise `/`.
    pub fn base(&self) -> String {
        if let Some(base) = &self.base {
            return base.clone();
        }
        match self.theme.hostname.as_deref().and_then(extract_url_path) {
            Some(path) if !path.is_empty() => format!("/{path}/"),
            _ => "/".to_string(),
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the whole configuration.
    ///
    /// Collects all errors and returns them at once; warnings are printed.
    pub fn validate(&self) -> Result<()> {
        let diag = self.diagnostics();
        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Run every check and return the collected diagnostics.
    pub fn diagnostics(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        if let Some(base) = &self.base
            && !section::locale::is_locale_prefix(base)
        {
            diag.error_with_hint(
                FieldPath::new("base"),
                format!("base '{base}' must start and end with '/'"),
                "e.g. \"/\" or \"/techblog/\"",
            );
        }

        self.locales.validate(&mut diag);
        self.head.validate(&mut diag);
        self.theme.validate(&self.locales, &mut diag);
        self.plugins.validate(&self.locales, &mut diag);

        diag
    }

    /// Report structure-derived sidebar sections whose directory is missing.
    ///
    /// The framework renders such sections empty, so these are warnings.
    pub fn content_diagnostics(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        let docs = self.docs_dir();

        if !docs.is_dir() {
            diag.warn(
                FieldPath::new("theme.docs_dir"),
                format!("content directory '{}' does not exist", docs.display()),
            );
            return diag;
        }

        let locales_field = FieldPath::new("theme.locales");
        for (prefix, locale) in &self.theme.locales {
            let Some(sidebar) = &locale.sidebar else {
                continue;
            };
            let field = locales_field.key(prefix).field("sidebar");
            for resolved in sidebar.sections(prefix, &field) {
                if !resolved.section.children.is_structure() {
                    continue;
                }
                let dir = self.content_dir_for(&resolved.route);
                if !dir.is_dir() {
                    diag.warn(
                        resolved.field.field("prefix"),
                        format!(
                            "directory for '{}' not found, section will be empty",
                            resolved.route
                        ),
                    );
                }
            }
        }

        diag
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with a minimal root locale.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!(
        "[locales.\"/\"]\nlang = \"en-US\"\ntitle = \"Test\"\ndescription = \"Test\"\n{extra}"
    );
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const TWO_LOCALES: &str = r#"
[locales."/zh/"]
lang = "zh-CN"
title = "博客"

[theme.locales."/"]
navbar = ["/", { text = "Posts", icon = "mdi:blog-outline", link = "/posts/" }]
sidebar = ["", { text = "Posts", prefix = "posts/", children = "structure" }, "intro"]

[theme.locales."/zh/"]
navbar = ["/zh/", { text = "文章", icon = "blog", link = "/zh/posts/" }]

[theme.locales."/zh/".sidebar]
"/zh/" = ["", { text = "文章", prefix = "posts/", children = "structure" }]
"#;

    #[test]
    fn test_from_str_invalid_toml() {
        let result = SiteConfig::from_str("[base\ntitle = \"My Blog\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();
        assert_eq!(config.get_root(), Path::new(""));
        assert!(config.locales.is_empty());
        assert_eq!(config.base(), "/");
        assert_eq!(config.theme.docs_dir, PathBuf::from("src"));
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[locales.\"/\"]\nlang = \"en-US\"\ntitle = \"T\"\n[theme]\nhostnmae = \"x\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert_eq!(config.locales.len(), 1);
        assert_eq!(ignored, ["theme.hostnmae"]);
    }

    #[test]
    fn test_two_locale_config_is_valid() {
        let config = test_parse_config(TWO_LOCALES);
        let diag = config.diagnostics();
        assert!(diag.is_empty(), "{diag}");
    }

    #[test]
    fn test_orphan_locale_is_an_error() {
        let config = test_parse_config(
            r#"
[locales."/zh/"]
lang = "zh-CN"
title = "博客"

[theme.locales."/"]
navbar = ["/"]
sidebar = [""]
"#,
        );
        let diag = config.diagnostics();
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "theme.locales.\"/zh/\"");
    }

    #[test]
    fn test_root_locale_cannot_claim_other_locale_routes() {
        let config = test_parse_config(
            r#"
[locales."/zh/"]
lang = "zh-CN"
title = "博客"

[theme.locales."/"]
navbar = ["/"]

[theme.locales."/".sidebar]
"/zh/" = ["", "intro"]

[theme.locales."/zh/"]
navbar = ["/zh/"]
sidebar = [{ text = "Posts", prefix = "/posts/", children = "structure" }]
"#,
        );
        let diag = config.diagnostics();
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            [
                "theme.locales.\"/\".sidebar.\"/zh/\"",
                "theme.locales.\"/zh/\".sidebar[0].prefix",
            ]
        );
    }

    #[test]
    fn test_base_derived_from_hostname() {
        let mut config = SiteConfig::default();
        config.theme.hostname = Some("https://techstay.github.io/techblog".into());
        assert_eq!(config.base(), "/techblog/");

        config.base = Some("/".into());
        assert_eq!(config.base(), "/");
    }

    #[test]
    fn test_invalid_base() {
        let mut config = test_parse_config(TWO_LOCALES);
        config.base = Some("techblog".into());
        let diag = config.diagnostics();
        assert_eq!(diag.errors()[0].field.as_str(), "base");
    }

    #[test]
    fn test_content_diagnostics_missing_dirs() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("src/posts")).unwrap();

        let mut config = test_parse_config(TWO_LOCALES);
        config.set_root(temp.path());

        let diag = config.content_diagnostics();
        assert!(diag.is_empty());
        assert_eq!(diag.warnings().len(), 1);
        assert_eq!(
            diag.warnings()[0].field.as_str(),
            "theme.locales.\"/zh/\".sidebar.\"/zh/\"[1].prefix"
        );
    }

    #[test]
    fn test_content_diagnostics_missing_docs_dir() {
        let temp = TempDir::new().unwrap();
        let mut config = test_parse_config(TWO_LOCALES);
        config.set_root(temp.path());
        let diag = config.content_diagnostics();
        assert_eq!(diag.warnings().len(), 1);
        assert_eq!(diag.warnings()[0].field.as_str(), "theme.docs_dir");
    }

    #[test]
    fn test_content_dir_for() {
        let mut config = SiteConfig::default();
        config.set_root(Path::new("/blog"));
        assert_eq!(config.content_dir_for("/zh/posts/"), PathBuf::from("/blog/src/zh/posts"));
        assert_eq!(config.content_dir_for("/"), PathBuf::from("/blog/src"));
    }
}
