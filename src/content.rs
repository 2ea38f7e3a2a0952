//! Content directory scanning.
//!
//! Produces the content snapshot the resolver matches topics against: every
//! page file under the content root, as a `/`-separated relative path plus
//! whatever title the page declares for itself.
//!
//! ## Directory Layout
//!
//! ```text
//! src/content/docs/               # Content root
//! ├── index.mdx
//! ├── guides/
//! │   └── example.md
//! ├── python/
//! │   ├── 010-intro.md            # Ordering prefix, stripped from fallback labels
//! │   └── drafts/
//! │       └── wip.md
//! └── fastapi/
//!     └── 02-path-parameters/
//!         └── index.md            # Labelled after its directory
//! ```
//!
//! ## Titles
//!
//! First available wins:
//!
//! 1. `title` in YAML front matter (a `---` fenced block at the top)
//! 2. The first level-1 markdown heading
//! 3. None (the resolver derives a label from the file name)
//!
//! Hidden files and directories (leading `.`) are skipped.

use crate::pattern::path_order;
use crate::types::ContentEntry;
use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};
use regex::Regex;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Content root not found: {0}")]
    MissingRoot(PathBuf),
}

/// The subset of front matter the scanner cares about; other keys are ignored.
#[derive(Debug, Default, Deserialize)]
struct FrontMatter {
    #[serde(default)]
    title: Option<String>,
}

static FRONT_MATTER_REGEX: OnceLock<Regex> = OnceLock::new();

fn front_matter_regex() -> &'static Regex {
    FRONT_MATTER_REGEX.get_or_init(|| {
        Regex::new(r"(?s)\A\x{FEFF}?---[ \t]*\r?\n(.*?)\r?\n---[ \t]*(?:\r?\n(.*))?\z")
            .expect("front matter regex is valid")
    })
}

/// Walk `root` and collect every page whose extension is in `extensions`.
///
/// Entries come back in path-segment order.
pub fn scan<S: AsRef<str>>(root: &Path, extensions: &[S]) -> Result<Vec<ContentEntry>, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::MissingRoot(root.to_path_buf()));
    }

    let mut entries = Vec::new();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e));

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() || !has_extension(entry.path(), extensions) {
            continue;
        }

        let Some(rel) = relative_path(entry.path(), root) else {
            continue;
        };
        let bytes = fs::read(entry.path()).map_err(|source| ScanError::Io {
            path: entry.path().to_path_buf(),
            source,
        })?;
        let title = match std::str::from_utf8(&bytes) {
            Ok(source) => extract_title(source, &rel),
            Err(e) => {
                warn!("{} is not valid UTF-8, ignoring its title: {}", rel, e);
                None
            }
        };
        debug!("Found {} (title: {:?})", rel, title);
        entries.push(ContentEntry { path: rel, title });
    }

    entries.sort_by(|a, b| path_order(&a.path, &b.path));
    Ok(entries)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

fn has_extension<S: AsRef<str>>(path: &Path, extensions: &[S]) -> bool {
    path.extension()
        .map(|ext| {
            let ext = ext.to_string_lossy();
            extensions
                .iter()
                .any(|e| e.as_ref().trim_start_matches('.').eq_ignore_ascii_case(&ext))
        })
        .unwrap_or(false)
}

/// `/`-joined path of `path` relative to `root`, regardless of platform.
fn relative_path(path: &Path, root: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let segments: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().to_string())
        .collect();
    Some(segments.join("/"))
}

/// Title from front matter, then the first `# heading`.
///
/// `path` is only used for diagnostics.
pub fn extract_title(source: &str, path: &str) -> Option<String> {
    let body = match front_matter_regex().captures(source) {
        Some(caps) => {
            let yaml = caps.get(1).map_or("", |m| m.as_str());
            let parsed = if yaml.trim().is_empty() {
                Ok(FrontMatter::default())
            } else {
                serde_yaml::from_str::<FrontMatter>(yaml)
            };
            match parsed {
                Ok(fm) => {
                    if let Some(title) = fm
                        .title
                        .map(|t| t.trim().to_string())
                        .filter(|t| !t.is_empty())
                    {
                        return Some(title);
                    }
                }
                Err(e) => warn!("Invalid front matter in {}: {}", path, e),
            }
            caps.get(2).map_or("", |m| m.as_str())
        }
        None => source,
    };
    first_heading(body)
}

fn first_heading(markdown: &str) -> Option<String> {
    let mut in_h1 = false;
    let mut text = String::new();
    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) => in_h1 = true,
            Event::End(TagEnd::Heading(HeadingLevel::H1)) => {
                let heading = text.trim();
                if !heading.is_empty() {
                    return Some(heading.to_string());
                }
                in_h1 = false;
                text.clear();
            }
            Event::Text(t) | Event::Code(t) if in_h1 => text.push_str(&t),
            _ => {}
        }
    }
    None
}
