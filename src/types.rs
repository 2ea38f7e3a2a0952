//! Shared types for topic declarations, content snapshots and the resolved
//! navigation tree.
//!
//! Topic declarations come from `nav.toml`, content entries from the
//! [`content`](crate::content) scanner, and [`NavEntry`] trees are what the
//! resolver hands back. The navigation types serialize to the JSON manifest.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Topic id → replacement glob list.
///
/// An entry here replaces the topic's own content globs wholesale.
pub type OverrideMap = BTreeMap<String, Vec<String>>;

/// One declared topic: a top-level sidebar group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TopicDefinition {
    /// Unique id, used as the key into the override map.
    pub id: String,
    /// Display name of the group.
    pub label: String,
    /// Root link of the topic (e.g. `/python/`).
    pub link: String,
    /// Glob patterns over content paths, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub globs: Vec<String>,
    /// Autogenerate shorthand: `directory = "python"` adds `python/**`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
    /// Pages pinned under a chosen label, listed before glob matches.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<PinnedItem>,
}

/// An explicit sidebar entry: one page under a fixed label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PinnedItem {
    pub label: String,
    /// Content path, relative to the content root.
    pub path: String,
}

impl PinnedItem {
    pub fn new(label: &str, path: &str) -> Self {
        Self {
            label: label.to_string(),
            path: path.to_string(),
        }
    }
}

impl TopicDefinition {
    pub fn new(id: &str, label: &str, link: &str, globs: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            link: link.to_string(),
            globs: globs.iter().map(|g| g.to_string()).collect(),
            directory: None,
            items: Vec::new(),
        }
    }

    /// The topic's own globs, with the `directory` shorthand expanded last.
    pub fn content_globs(&self) -> Vec<String> {
        let mut globs = self.globs.clone();
        if let Some(dir) = &self.directory {
            let dir = dir.trim_matches('/');
            if !dir.is_empty() {
                globs.push(format!("{dir}/**"));
            }
        }
        globs
    }

    /// True when the topic can list nothing: no globs and no pinned items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.content_globs().is_empty()
    }
}

/// A content file known at build time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentEntry {
    /// Path relative to the content root, `/`-separated.
    pub path: String,
    /// Title metadata from the page itself, if it declares one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl ContentEntry {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
            title: None,
        }
    }

    pub fn titled(path: &str, title: &str) -> Self {
        Self {
            path: path.to_string(),
            title: Some(title.to_string()),
        }
    }
}

/// Resolved navigation tree node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    pub label: String,
    #[serde(flatten)]
    pub target: NavTarget,
}

/// Where a navigation entry points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavTarget {
    /// A single page, by content path.
    Link(String),
    /// A topic group: its root link plus ordered children.
    Group { link: String, items: Vec<NavEntry> },
}

impl NavEntry {
    /// Children of a group; empty for a plain link.
    pub fn items(&self) -> &[NavEntry] {
        match &self.target {
            NavTarget::Group { items, .. } => items,
            NavTarget::Link(_) => &[],
        }
    }

    /// The entry's link: the content path for pages, the root link for groups.
    pub fn link(&self) -> &str {
        match &self.target {
            NavTarget::Link(path) => path,
            NavTarget::Group { link, .. } => link,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self.target, NavTarget::Group { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_shorthand_expands_to_recursive_glob() {
        let mut topic = TopicDefinition::new("django", "Django", "/django/", &[]);
        topic.directory = Some("django/".to_string());
        assert_eq!(topic.content_globs(), vec!["django/**"]);
    }

    #[test]
    fn directory_appended_after_explicit_globs() {
        let mut topic = TopicDefinition::new("python", "Python", "/python/", &["intro.md"]);
        topic.directory = Some("python".to_string());
        assert_eq!(topic.content_globs(), vec!["intro.md", "python/**"]);
    }

    #[test]
    fn blank_directory_adds_nothing() {
        let mut topic = TopicDefinition::new("x", "X", "/x/", &[]);
        topic.directory = Some("/".to_string());
        assert!(topic.content_globs().is_empty());
    }

    #[test]
    fn pinned_items_make_topic_non_empty() {
        let mut topic = TopicDefinition::new("guides", "Guides", "/guides/", &[]);
        assert!(topic.is_empty());
        topic.items.push(PinnedItem::new("Example Guide", "guides/example.md"));
        assert!(!topic.is_empty());
        assert!(topic.content_globs().is_empty());
    }

    #[test]
    fn link_entry_has_no_items() {
        let entry = NavEntry {
            label: "Intro".to_string(),
            target: NavTarget::Link("python/intro.md".to_string()),
        };
        assert!(entry.items().is_empty());
        assert!(!entry.is_group());
        assert_eq!(entry.link(), "python/intro.md");
    }

    #[test]
    fn nav_entry_serializes_flat() {
        let entry = NavEntry {
            label: "Python".to_string(),
            target: NavTarget::Group {
                link: "/python/".to_string(),
                items: vec![NavEntry {
                    label: "Intro".to_string(),
                    target: NavTarget::Link("python/intro.md".to_string()),
                }],
            },
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["label"], "Python");
        assert_eq!(json["group"]["link"], "/python/");
        assert_eq!(json["group"]["items"][0]["link"], "python/intro.md");
    }
}
