//! Configuration section definitions.
//!
//! Each module corresponds to a part of `blog.toml`:
//!
//! | Module     | TOML Section          | Purpose                              |
//! |------------|-----------------------|--------------------------------------|
//! | `locale`   | `[locales]`           | Path prefix → lang, title, desc.     |
//! | `nav`      | `navbar = [...]`      | Per-locale navigation bar            |
//! | `sidebar`  | `sidebar = ...`       | Per-locale sidebar tree              |
//! | `head`     | `[head]`              | Injected script/style tags           |
//! | `theme`    | `[theme]`             | Metadata, markdown, per-locale menus |
//! | `plugins`  | `[plugins]`           | Search, comments, feed, analytics    |

pub mod head;
pub mod locale;
pub mod nav;
pub mod plugins;
pub mod sidebar;
pub mod theme;

pub use head::{HeadConfig, HeadTag, ScriptEntry};
pub use locale::{LocaleEntry, LocaleTable};
pub use nav::{NavEntry, NavItem, Navbar};
pub use plugins::PluginsConfig;
pub use sidebar::{Children, Directive, Sidebar, SidebarEntry, SidebarSection};
pub use theme::{LocaleThemeConfig, ThemeSectionConfig};
