//! `blogcfg tree`: print the navbar and sidebar of each locale.
//!
//! ```text
//! / (en-US) Techstay's Tech Blog
//! ├── navbar
//! │   ├── /
//! │   └── Posts → /posts/
//! └── sidebar
//!     └── /
//!         ├── /
//!         ├── Posts /posts/ [structure]
//!         └── /intro
//! ```

use crate::{
    assemble::structure::resolve_sidebar,
    config::{
        FieldPath, SiteConfig,
        section::{Children, NavEntry, Navbar, Sidebar, SidebarEntry},
    },
    utils::path::join_route,
};
use anyhow::{Result, bail};
use owo_colors::OwoColorize;

/// One line of the tree and everything below it.
#[derive(Debug, Default)]
struct Node {
    label: String,
    children: Vec<Node>,
}

impl Node {
    fn leaf(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
        }
    }

    fn branch(label: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            label: label.into(),
            children,
        }
    }
}

/// Print the menus of every locale, or only of `locale`.
pub fn print_tree(config: &SiteConfig, locale: Option<&str>, resolve: bool) -> Result<()> {
    if let Some(prefix) = locale
        && !config.locales.contains(prefix)
    {
        bail!(
            "locale '{prefix}' is not configured (known: {})",
            config.locales.prefixes().collect::<Vec<_>>().join(", ")
        );
    }
    print!("{}", render(config, locale, resolve));
    Ok(())
}

fn render(config: &SiteConfig, only: Option<&str>, resolve: bool) -> String {
    let mut out = String::new();
    for (prefix, entry) in config.locales.iter() {
        if only.is_some_and(|p| p != prefix) {
            continue;
        }
        out.push_str(&format!(
            "{} {} {}\n",
            prefix.bold(),
            format!("({})", entry.lang).dimmed(),
            entry.title
        ));

        let nodes = match config.theme.locales.get(prefix) {
            Some(theme) => {
                let mut nodes = Vec::new();
                if let Some(navbar) = &theme.navbar {
                    nodes.push(Node::branch("navbar", navbar_nodes(navbar)));
                }
                if let Some(sidebar) = &theme.sidebar {
                    let sidebar = if resolve {
                        resolve_sidebar(sidebar, prefix, &config.docs_dir())
                    } else {
                        sidebar.clone()
                    };
                    nodes.push(Node::branch("sidebar", sidebar_nodes(&sidebar, prefix)));
                }
                nodes
            }
            None => vec![Node::leaf("(no theme entry)".red().to_string())],
        };
        write_children(&mut out, &nodes, "");
    }
    out
}

fn navbar_nodes(navbar: &Navbar) -> Vec<Node> {
    navbar
        .entries()
        .iter()
        .map(|entry| match entry {
            NavEntry::Link(link) => Node::leaf(link.clone()),
            NavEntry::Item(item) => Node::leaf(format!("{} → {}", item.text, item.link)),
        })
        .collect()
}

fn sidebar_nodes(sidebar: &Sidebar, locale: &str) -> Vec<Node> {
    sidebar
        .groups(locale, &FieldPath::new("sidebar"))
        .into_iter()
        .map(|(route, entries, _)| Node::branch(route.cyan().to_string(), entry_nodes(&route, entries)))
        .collect()
}

fn entry_nodes(base: &str, entries: &[SidebarEntry]) -> Vec<Node> {
    entries
        .iter()
        .map(|entry| match entry {
            SidebarEntry::Page(id) => Node::leaf(join_route(base, id)),
            SidebarEntry::Section(section) => {
                let route = join_route(base, &section.prefix);
                match &section.children {
                    Children::Directive(_) => Node::leaf(format!(
                        "{} {} {}",
                        section.text,
                        route.dimmed(),
                        "[structure]".yellow()
                    )),
                    Children::Explicit(children) => Node::branch(
                        format!("{} {}", section.text, route.dimmed()),
                        entry_nodes(&route, children),
                    ),
                }
            }
        })
        .collect()
}

fn write_children(out: &mut String, nodes: &[Node], indent: &str) {
    for (i, node) in nodes.iter().enumerate() {
        let last = i + 1 == nodes.len();
        let (branch, next) = if last {
            ("└── ", "    ")
        } else {
            ("├── ", "│   ")
        };
        out.push_str(&format!("{indent}{branch}{}\n", node.label));
        write_children(out, &node.children, &format!("{indent}{next}"));
    }
}
