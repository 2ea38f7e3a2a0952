//! Shared test utilities for the topic-nav test suite.
//!
//! Builders for content snapshots plus lookups and shape assertions over
//! resolved navigation.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let manifest = build(&tmp.path().join("nav.toml"), None).unwrap();
//!
//! assert_nav_shape(&manifest.navigation, &[
//!     ("Python", &["Introduction", "Data types"]),
//!     ("FastAPI", &["Getting started"]),
//! ]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::types::{ContentEntry, NavEntry};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/` (docs tree plus `nav.toml`) to a temp directory.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// Builders
// =========================================================================

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Untitled content entries for each path.
pub fn content(paths: &[&str]) -> Vec<ContentEntry> {
    paths.iter().map(|p| ContentEntry::new(p)).collect()
}

// =========================================================================
// Navigation lookups — panics with a clear message on miss
// =========================================================================

/// Top-level labels in order.
pub fn nav_labels(nav: &[NavEntry]) -> Vec<&str> {
    nav.iter().map(|n| n.label.as_str()).collect()
}

/// Find a top-level entry by label. Panics if not found.
pub fn find_topic<'a>(nav: &'a [NavEntry], label: &str) -> &'a NavEntry {
    nav.iter().find(|n| n.label == label).unwrap_or_else(|| {
        let labels = nav_labels(nav);
        panic!("topic '{label}' not found. Available: {labels:?}")
    })
}

/// Child content paths under a topic.
pub fn child_paths<'a>(nav: &'a [NavEntry], label: &str) -> Vec<&'a str> {
    find_topic(nav, label).items().iter().map(|c| c.link()).collect()
}

/// Child labels under a topic.
pub fn child_labels<'a>(nav: &'a [NavEntry], label: &str) -> Vec<&'a str> {
    find_topic(nav, label)
        .items()
        .iter()
        .map(|c| c.label.as_str())
        .collect()
}

/// Assert the full tree: each entry is `(topic label, child labels)`.
pub fn assert_nav_shape(nav: &[NavEntry], expected: &[(&str, &[&str])]) {
    let expected_labels: Vec<&str> = expected.iter().map(|(t, _)| *t).collect();
    assert_eq!(nav_labels(nav), expected_labels, "nav top-level labels mismatch");

    for (label, children) in expected {
        assert_eq!(
            child_labels(nav, label),
            children.to_vec(),
            "nav children of '{label}' mismatch"
        );
    }
}
