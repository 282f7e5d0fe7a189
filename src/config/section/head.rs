//! `[head]` tags injected into every page.
//!
//! # Example
//!
//! ```toml
//! [head]
//! scripts = [{ src = "https://events.vercount.one/js", defer = true }]
//! styles = ["/styles/extra.css"]
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::utils::path::{is_absolute_route, is_external_link};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadConfig {
    /// Script tags, in insertion order.
    pub scripts: Vec<ScriptEntry>,
    /// Stylesheet URLs, emitted as `<link rel="stylesheet">`.
    pub styles: Vec<String>,
}

/// A head tag in the framework's `[tag, attributes]` tuple form.
pub type HeadTag = (String, Map<String, Value>);

impl HeadConfig {
    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty() && self.styles.is_empty()
    }

    /// Render to head tuples: scripts first, then styles.
    pub fn tags(&self) -> Vec<HeadTag> {
        let scripts = self.scripts.iter().map(|script| {
            let mut attrs = Map::new();
            attrs.insert("src".into(), Value::String(script.src().to_string()));
            if script.is_defer() {
                attrs.insert("defer".into(), Value::Bool(true));
            }
            if script.is_async() {
                attrs.insert("async".into(), Value::Bool(true));
            }
            ("script".to_string(), attrs)
        });
        let styles = self.styles.iter().map(|href| {
            let mut attrs = Map::new();
            attrs.insert("rel".into(), Value::String("stylesheet".into()));
            attrs.insert("href".into(), Value::String(href.clone()));
            ("link".to_string(), attrs)
        });
        scripts.chain(styles).collect()
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let root = FieldPath::new("head");
        for (i, script) in self.scripts.iter().enumerate() {
            check_source(script.src(), root.field("scripts").index(i), diag);
        }
        for (i, style) in self.styles.iter().enumerate() {
            check_source(style, root.field("styles").index(i), diag);
        }
    }
}

fn check_source(src: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    if src.trim().is_empty() {
        diag.error(field, "source is empty");
    } else if !is_external_link(src) && !is_absolute_route(src) {
        diag.error_with_hint(
            field,
            format!("source '{src}' is neither a URL nor an absolute path"),
            "use https://... or a path starting with '/'",
        );
    }
}

// ============================================================================
// Script Entry
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScriptEntry {
    /// Plain source URL.
    Simple(String),
    /// Source with `defer`/`async` attributes.
    WithOptions {
        src: String,
        #[serde(default)]
        defer: bool,
        #[serde(default)]
        r#async: bool,
    },
}

impl ScriptEntry {
    pub fn src(&self) -> &str {
        match self {
            Self::Simple(src) | Self::WithOptions { src, .. } => src,
        }
    }

    pub const fn is_defer(&self) -> bool {
        match self {
            Self::Simple(_) => false,
            Self::WithOptions { defer, .. } => *defer,
        }
    }

    pub const fn is_async(&self) -> bool {
        match self {
            Self::Simple(_) => false,
            Self::WithOptions { r#async, .. } => *r#async,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert!(config.head.is_empty());
        assert!(config.head.tags().is_empty());
    }

    #[test]
    fn test_scripts_with_options() {
        let config = test_parse_config(
            r#"[head]
scripts = [
    { src = "https://events.vercount.one/js", defer = true },
    "/scripts/b.js",
    { src = "/scripts/c.js", async = true }
]"#,
        );
        let scripts = &config.head.scripts;
        assert_eq!(scripts.len(), 3);
        assert!(scripts[0].is_defer() && !scripts[0].is_async());
        assert!(!scripts[1].is_defer() && !scripts[1].is_async());
        assert!(!scripts[2].is_defer() && scripts[2].is_async());
        assert_eq!(scripts[1].src(), "/scripts/b.js");
    }

    #[test]
    fn test_tags_render_tuples() {
        let head = HeadConfig {
            scripts: vec![ScriptEntry::WithOptions {
                src: "https://events.vercount.one/js".into(),
                defer: true,
                r#async: false,
            }],
            styles: vec!["/extra.css".into()],
        };
        let json = serde_json::to_string(&head.tags()).unwrap();
        assert_eq!(
            json,
            r#"[["script",{"src":"https://events.vercount.one/js","defer":true}],["link",{"rel":"stylesheet","href":"/extra.css"}]]"#
        );
    }

    #[test]
    fn test_validate_sources() {
        let head = HeadConfig {
            scripts: vec![ScriptEntry::Simple(String::new()), ScriptEntry::Simple("x.js".into())],
            styles: vec!["https://cdn.example.com/a.css".into()],
        };
        let mut diag = ConfigDiagnostics::new();
        head.validate(&mut diag);
        assert_eq!(diag.len(), 2);
        assert_eq!(diag.errors()[0].field.as_str(), "head.scripts[0]");
        assert_eq!(diag.errors()[1].field.as_str(), "head.scripts[1]");
    }
}
