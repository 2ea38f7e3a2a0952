//! CLI output formatting for resolved navigation.
//!
//! Output leads with what a reader of the sidebar sees (position and label),
//! with the backing content path shown as an indented `Source:` line so any
//! entry can be traced back to its file.
//!
//! ```text
//! 001 Python → /python/ (2 pages)
//!     001 Introduction to Python → /python/010-intro/
//!         Source: python/010-intro.md
//!     002 Data types → /python/020-data-types/
//!         Source: python/020-data-types.md
//! 002 Django → /django/ (empty)
//! ```
//!
//! `format_*` functions are pure and return lines; `print_*` wrappers write
//! them to stdout.

use crate::manifest::Manifest;
use crate::types::{NavEntry, NavTarget};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("1 {noun}")
    } else {
        format!("{n} {noun}s")
    }
}

fn page_count(n: usize) -> String {
    match n {
        0 => "empty".to_string(),
        n => plural(n, "page"),
    }
}

/// Route a page is served at: extension dropped, `index` folded into its
/// directory, always slash-terminated.
///
/// - `python/intro.md` → `/python/intro/`
/// - `python/index.md` → `/python/`
/// - `index.mdx` → `/`
pub fn route_for(path: &str) -> String {
    let without_ext = match path.rsplit_once('.') {
        Some((stem, ext)) if !ext.contains('/') => stem,
        _ => path,
    };
    let route = if without_ext == "index" {
        ""
    } else {
        without_ext.strip_suffix("/index").unwrap_or(without_ext)
    };
    if route.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", route.trim_matches('/'))
    }
}

/// Format the navigation tree, one header line per entry plus context lines.
pub fn format_navigation(nav: &[NavEntry]) -> Vec<String> {
    let mut lines = Vec::new();
    format_entries(nav, 0, &mut lines);
    lines
}

fn format_entries(entries: &[NavEntry], depth: usize, lines: &mut Vec<String>) {
    for (i, entry) in entries.iter().enumerate() {
        let pad = indent(depth);
        let index = format_index(i + 1);
        match &entry.target {
            NavTarget::Group { link, items } => {
                lines.push(format!(
                    "{pad}{index} {} → {link} ({})",
                    entry.label,
                    page_count(items.len())
                ));
                format_entries(items, depth + 1, lines);
            }
            NavTarget::Link(path) => {
                lines.push(format!("{pad}{index} {} → {}", entry.label, route_for(path)));
                lines.push(format!("{}Source: {path}", indent(depth + 1)));
            }
        }
    }
}

/// Summary line for a finished build.
pub fn format_summary(manifest: &Manifest) -> String {
    let unlisted = manifest
        .content_count
        .saturating_sub(distinct_links(&manifest.navigation));
    format!(
        "Resolved {}, {} from {} ({} not in navigation)",
        plural(manifest.navigation.len(), "topic"),
        plural(manifest.link_count(), "link"),
        plural(manifest.content_count, "page"),
        unlisted
    )
}

fn distinct_links(nav: &[NavEntry]) -> usize {
    let mut paths: Vec<&str> = nav
        .iter()
        .flat_map(|t| t.items().iter().map(NavEntry::link))
        .collect();
    paths.sort_unstable();
    paths.dedup();
    paths.len()
}

pub fn print_navigation(manifest: &Manifest) {
    for line in format_navigation(&manifest.navigation) {
        println!("{}", line);
    }
    println!();
    println!("{}", format_summary(manifest));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn link(label: &str, path: &str) -> NavEntry {
        NavEntry {
            label: label.to_string(),
            target: NavTarget::Link(path.to_string()),
        }
    }

    fn group(label: &str, link: &str, items: Vec<NavEntry>) -> NavEntry {
        NavEntry {
            label: label.to_string(),
            target: NavTarget::Group {
                link: link.to_string(),
                items,
            },
        }
    }

    fn sample() -> Vec<NavEntry> {
        vec![
            group(
                "Python",
                "/python/",
                vec![
                    link("Introduction to Python", "python/010-intro.md"),
                    link("Data types", "python/020-data-types.md"),
                ],
            ),
            group("Django", "/django/", vec![]),
            group(
                "Guides",
                "/guides/",
                vec![link("Introduction to Python", "python/010-intro.md")],
            ),
        ]
    }

    #[test]
    fn route_strips_extension() {
        assert_eq!(route_for("python/intro.md"), "/python/intro/");
    }

    #[test]
    fn route_folds_index() {
        assert_eq!(route_for("python/index.md"), "/python/");
        assert_eq!(route_for("fastapi/02-path-parameters/index.md"), "/fastapi/02-path-parameters/");
        assert_eq!(route_for("index.mdx"), "/");
    }

    #[test]
    fn route_dot_in_directory_only() {
        assert_eq!(route_for("v1.2/notes"), "/v1.2/notes/");
    }

    #[test]
    fn format_navigation_tree() {
        let lines = format_navigation(&sample());
        assert_eq!(
            lines,
            vec![
                "001 Python → /python/ (2 pages)",
                "    001 Introduction to Python → /python/010-intro/",
                "        Source: python/010-intro.md",
                "    002 Data types → /python/020-data-types/",
                "        Source: python/020-data-types.md",
                "002 Django → /django/ (empty)",
                "003 Guides → /guides/ (1 page)",
                "    001 Introduction to Python → /python/010-intro/",
                "        Source: python/010-intro.md",
            ]
        );
    }

    #[test]
    fn format_empty_navigation() {
        assert!(format_navigation(&[]).is_empty());
    }

    #[test]
    fn summary_counts_duplicates_once_for_unlisted() {
        let manifest = Manifest {
            content_dir: PathBuf::from("docs"),
            content_count: 5,
            navigation: sample(),
        };
        assert_eq!(
            format_summary(&manifest),
            "Resolved 3 topics, 3 links from 5 pages (3 not in navigation)"
        );
    }

    #[test]
    fn summary_singular_counts() {
        let manifest = Manifest {
            content_dir: PathBuf::from("docs"),
            content_count: 1,
            navigation: vec![group(
                "Python",
                "/python/",
                vec![link("Intro", "python/intro.md")],
            )],
        };
        assert_eq!(
            format_summary(&manifest),
            "Resolved 1 topic, 1 link from 1 page (0 not in navigation)"
        );
    }
}
