//! Topic navigation resolution.
//!
//! Turns declared topics plus a content snapshot into the sidebar tree:
//!
//! ```text
//! topics ──► effective globs (override or own) ──► match content
//!                                                     │
//!                     global excludes (applied last) ◄┘
//!                                                     │
//!          Group { link, items: one Link per page } ◄─┘
//! ```
//!
//! Topic order is display order and is preserved. A page matching several
//! topics is listed under each of them; a page matching none is left out.
//! Pinned items come first, under their own labels, then the glob matches.
//! Excludes always win, whichever topic or pinned item pulled a path in.
//!
//! All validation (duplicate ids, empty topics, malformed patterns) happens
//! before any content is matched, so a bad configuration never produces a
//! partial tree.

use crate::naming;
use crate::pattern::{InvalidPattern, PatternSet, path_order};
use crate::types::{ContentEntry, NavEntry, NavTarget, OverrideMap, TopicDefinition};
use std::collections::HashSet;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("Duplicate topic id: {0}")]
    DuplicateTopicId(String),
    #[error("Topic '{0}' has no content globs")]
    EmptyTopic(String),
    #[error("Invalid glob pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

impl From<InvalidPattern> for ConfigurationError {
    fn from(e: InvalidPattern) -> Self {
        ConfigurationError::InvalidPattern {
            pattern: e.pattern,
            reason: e.reason,
        }
    }
}

/// A topic with its effective patterns compiled.
struct CompiledTopic<'a> {
    topic: &'a TopicDefinition,
    globs: PatternSet,
}

/// Check topic declarations without matching any content.
///
/// Used by config loading so mistakes surface before the content is scanned.
pub fn validate(
    topics: &[TopicDefinition],
    excludes: &[String],
    overrides: &OverrideMap,
) -> Result<(), ConfigurationError> {
    compile(topics, excludes, overrides).map(|_| ())
}

fn compile<'a>(
    topics: &'a [TopicDefinition],
    excludes: &[String],
    overrides: &OverrideMap,
) -> Result<(Vec<CompiledTopic<'a>>, PatternSet), ConfigurationError> {
    let mut seen = HashSet::new();
    for topic in topics {
        if !seen.insert(topic.id.as_str()) {
            return Err(ConfigurationError::DuplicateTopicId(topic.id.clone()));
        }
    }
    if let Some(topic) = topics.iter().find(|t| t.is_empty()) {
        return Err(ConfigurationError::EmptyTopic(topic.id.clone()));
    }

    let compiled = topics
        .iter()
        .map(|topic| {
            let globs = match overrides.get(&topic.id) {
                Some(globs) => PatternSet::compile(globs)?,
                None => PatternSet::compile(&topic.content_globs())?,
            };
            Ok(CompiledTopic { topic, globs })
        })
        .collect::<Result<Vec<_>, ConfigurationError>>()?;

    // Overrides for unknown ids are still compiled so typos in them fail too.
    for (id, globs) in overrides {
        if !seen.contains(id.as_str()) {
            PatternSet::compile(globs)?;
            warn!("Override for unknown topic '{}' ignored", id);
        }
    }

    let excludes = PatternSet::compile(excludes)?;
    Ok((compiled, excludes))
}

/// Resolve topics against the content snapshot into ordered navigation.
pub fn resolve(
    topics: &[TopicDefinition],
    excludes: &[String],
    overrides: &OverrideMap,
    content: &[ContentEntry],
) -> Result<Vec<NavEntry>, ConfigurationError> {
    let (compiled, excludes) = compile(topics, excludes, overrides)?;

    let mut pages: Vec<&ContentEntry> = content.iter().collect();
    pages.sort_by(|a, b| path_order(&a.path, &b.path));
    pages.dedup_by(|a, b| a.path == b.path);

    let navigation = compiled
        .iter()
        .map(|c| {
            let items = topic_items(c, &pages, &excludes);
            info!("{}: {} pages", c.topic.id, items.len());

            NavEntry {
                label: c.topic.label.clone(),
                target: NavTarget::Group {
                    link: c.topic.link.clone(),
                    items,
                },
            }
        })
        .collect();

    Ok(navigation)
}

/// Children of one topic: pinned items, then glob matches not already pinned.
fn topic_items(
    c: &CompiledTopic<'_>,
    pages: &[&ContentEntry],
    excludes: &PatternSet,
) -> Vec<NavEntry> {
    let excluded = |path: &str| {
        let hit = excludes.matches(path);
        if hit {
            debug!("{}: excluded {}", c.topic.id, path);
        }
        hit
    };

    let mut listed = HashSet::new();
    let mut items = Vec::new();

    for pinned in &c.topic.items {
        let path = pinned.path.trim_start_matches('/');
        let Some(page) = pages.iter().find(|p| p.path == path) else {
            warn!("{}: pinned page '{}' not found", c.topic.id, path);
            continue;
        };
        if excluded(page.path.as_str()) || !listed.insert(page.path.as_str()) {
            continue;
        }
        debug!("{}: pinned {}", c.topic.id, page.path);
        items.push(NavEntry {
            label: pinned.label.clone(),
            target: NavTarget::Link(page.path.clone()),
        });
    }

    for page in pages {
        if !c.globs.matches(&page.path) || excluded(page.path.as_str()) {
            continue;
        }
        if listed.insert(page.path.as_str()) {
            debug!("{}: listed {}", c.topic.id, page.path);
            items.push(page_entry(page));
        }
    }

    items
}

fn page_entry(page: &ContentEntry) -> NavEntry {
    let label = page
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| naming::label_from_path(&page.path));
    NavEntry {
        label,
        target: NavTarget::Link(page.path.clone()),
    }
}
