//! Embedded static resources.
//!
//! # Usage
//!
//! ```ignore
//! use embed::init::{BLOG_TOML, BlogVars};
//!
//! let toml = BLOG_TOML.render(&BlogVars { title: "My Blog" });
//! ```

mod template;

pub use template::{Template, TemplateVars};

pub mod init {
    use super::{Template, TemplateVars};

    /// Variables for the starter blog.toml.
    pub struct BlogVars<'a> {
        /// Title of the root locale.
        pub title: &'a str,
    }

    impl TemplateVars for BlogVars<'_> {
        /// `__TITLE__` is replaced by a quoted TOML string, not raw text.
        fn apply(&self, content: &str) -> String {
            let title = toml::Value::String(self.title.to_string()).to_string();
            content
                .replace("__VERSION__", env!("CARGO_PKG_VERSION"))
                .replace("__TITLE__", &title)
        }
    }

    /// Starter configuration: two locales with menus, plugins and a head script.
    pub const BLOG_TOML: Template<BlogVars<'static>> = Template::new(include_str!("init/blog.toml"));
}
