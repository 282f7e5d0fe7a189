//! Expand `children = "structure"` from the content directory.
//!
//! Markdown files become page identifiers (`README.md` / `index.md` become
//! `""`, listed first); sub-directories become nested sections. Everything
//! else is listed alphabetically, ignoring case (`alpha.md` before
//! `Zeta.md`; names equal up to case fall back to byte order). Missing
//! directories yield no children.

use crate::config::section::{Children, Sidebar, SidebarEntry, SidebarSection};
use crate::debug;
use crate::utils::path::{join_route, route_to_rel_path};
use jwalk::WalkDir;
use std::collections::BTreeMap;
use std::path::Path;

/// Index file names, in lookup order.
const INDEX_FILES: &[&str] = &["README.md", "readme.md", "index.md"];

/// Return a copy of `sidebar` with every structure directive expanded.
///
/// `docs_dir` is the content root; section routes map to directories below it.
pub fn resolve_sidebar(sidebar: &Sidebar, locale: &str, docs_dir: &Path) -> Sidebar {
    match sidebar {
        Sidebar::Flat(entries) => Sidebar::Flat(resolve_entries(locale, entries, docs_dir)),
        Sidebar::Grouped(groups) => Sidebar::Grouped(
            groups
                .iter()
                .map(|(route, entries)| (route.clone(), resolve_entries(route, entries, docs_dir)))
                .collect::<BTreeMap<_, _>>(),
        ),
    }
}

fn resolve_entries(base: &str, entries: &[SidebarEntry], docs_dir: &Path) -> Vec<SidebarEntry> {
    entries
        .iter()
        .map(|entry| match entry {
            SidebarEntry::Page(_) => entry.clone(),
            SidebarEntry::Section(section) => {
                SidebarEntry::Section(resolve_section(base, section, docs_dir))
            }
        })
        .collect()
}

fn resolve_section(base: &str, section: &SidebarSection, docs_dir: &Path) -> SidebarSection {
    let route = join_route(base, &section.prefix);
    let children = match &section.children {
        Children::Directive(_) => scan_dir(&docs_dir.join(route_to_rel_path(&route))),
        Children::Explicit(children) => resolve_entries(&route, children, docs_dir),
    };
    SidebarSection {
        children: Children::Explicit(children),
        ..section.clone()
    }
}

/// List one directory level, recursing into sub-directories.
fn scan_dir(dir: &Path) -> Vec<SidebarEntry> {
    if !dir.is_dir() {
        debug!("structure"; "{} not found, section left empty", dir.display());
        return Vec::new();
    }
    debug!("structure"; "scanning {}", dir.display());

    let mut listing: Vec<_> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .skip_hidden(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter_map(|entry| {
            let name = entry.file_name().to_str()?.to_string();
            Some((name, entry.file_type().is_dir(), entry.path()))
        })
        .collect();
    listing.sort_by(|(a, ..), (b, ..)| {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    });

    let mut has_index = false;
    let mut entries = Vec::new();

    for (name, is_dir, path) in listing {
        if is_dir {
            let children = scan_dir(&path);
            if !children.is_empty() {
                let section = SidebarSection::new(name.clone(), "", format!("{name}/"))
                    .children(children);
                entries.push(section.into());
            }
        } else if INDEX_FILES.contains(&name.as_str()) {
            has_index = true;
        } else if let Some(stem) = markdown_stem(&name) {
            entries.push(SidebarEntry::page(stem));
        }
    }

    if has_index {
        entries.insert(0, SidebarEntry::page(""));
    }
    entries
}

/// `intro.md` -> `intro`; non-markdown files -> `None`.
fn markdown_stem(file_name: &str) -> Option<&str> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    (ext.eq_ignore_ascii_case("md") && !stem.is_empty()).then_some(stem)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "# page\n").unwrap();
    }

    fn section_children(entry: &SidebarEntry) -> &[SidebarEntry] {
        match entry {
            SidebarEntry::Section(SidebarSection {
                children: Children::Explicit(children),
                ..
            }) => children,
            other => panic!("expected resolved section, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_orders_index_then_alphabetical() {
        let temp = TempDir::new().unwrap();
        let docs = temp.path();
        touch(docs, "posts/zeta.md");
        touch(docs, "posts/README.md");
        touch(docs, "posts/alpha.md");
        touch(docs, "posts/rust/ownership.md");
        touch(docs, "posts/notes.txt");
        touch(docs, "posts/empty/.keep");

        let sidebar = Sidebar::flat([
            SidebarEntry::page(""),
            SidebarSection::new("Posts", "blog", "posts/").structure().into(),
        ]);
        let Sidebar::Flat(entries) = resolve_sidebar(&sidebar, "/", docs) else {
            panic!("shape changed");
        };

        assert_eq!(entries[0], SidebarEntry::page(""));
        let children = section_children(&entries[1]);
        assert_eq!(children.len(), 4);
        assert_eq!(children[0], SidebarEntry::page(""));
        assert_eq!(children[1], SidebarEntry::page("alpha"));
        assert_eq!(
            section_children(&children[2]),
            [SidebarEntry::page("ownership")]
        );
        assert_eq!(children[3], SidebarEntry::page("zeta"));
    }

    #[test]
    fn test_resolve_sorts_ignoring_case() {
        let temp = TempDir::new().unwrap();
        let docs = temp.path();
        touch(docs, "posts/Zeta.md");
        touch(docs, "posts/alpha.md");
        touch(docs, "posts/Beta/intro.md");
        touch(docs, "posts/index.md");

        let sidebar = Sidebar::flat([SidebarSection::new("Posts", "", "posts/").structure().into()]);
        let Sidebar::Flat(entries) = resolve_sidebar(&sidebar, "/", docs) else {
            panic!("shape changed");
        };
        let children = section_children(&entries[0]);
        assert_eq!(children.len(), 4);
        assert_eq!(children[0], SidebarEntry::page(""));
        assert_eq!(children[1], SidebarEntry::page("alpha"));
        assert!(matches!(&children[2], SidebarEntry::Section(s) if s.text == "Beta"));
        assert_eq!(children[3], SidebarEntry::page("Zeta"));
    }

    #[test]
    fn test_missing_directory_yields_empty_section() {
        let temp = TempDir::new().unwrap();
        let sidebar = Sidebar::default().group(
            "/zh/",
            "/zh/",
            [SidebarSection::new("技能", "speed", "skill/").structure().into()],
        );
        let Sidebar::Grouped(groups) = resolve_sidebar(&sidebar, "/zh/", temp.path()) else {
            panic!("shape changed");
        };
        assert!(section_children(&groups["/zh/"][0]).is_empty());
    }

    #[test]
    fn test_explicit_children_keep_order_and_resolve_nested() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "guide/deep/b.md");
        touch(temp.path(), "guide/deep/a.md");

        let sidebar = Sidebar::flat([SidebarSection::new("Guide", "", "guide/")
            .children([
                SidebarEntry::page("z-last-first"),
                SidebarSection::new("Deep", "", "deep/").structure().into(),
            ])
            .into()]);
        let Sidebar::Flat(entries) = resolve_sidebar(&sidebar, "/", temp.path()) else {
            panic!("shape changed");
        };
        let children = section_children(&entries[0]);
        assert_eq!(children[0], SidebarEntry::page("z-last-first"));
        assert_eq!(
            section_children(&children[1]),
            [SidebarEntry::page("a"), SidebarEntry::page("b")]
        );
    }

    #[test]
    fn test_markdown_stem() {
        assert_eq!(markdown_stem("intro.md"), Some("intro"));
        assert_eq!(markdown_stem("Intro.MD"), Some("Intro"));
        assert_eq!(markdown_stem("image.png"), None);
        assert_eq!(markdown_stem(".md"), None);
        assert_eq!(markdown_stem("README"), None);
    }
}
