//! Fallback labels for pages that declare no title.
//!
//! Content files may carry an ordering prefix (`NNN-`) that only exists to
//! sort them on disk. When a page has neither front matter nor a heading to
//! name it, the label comes from the file name with that prefix removed and
//! dashes turned into spaces:
//!
//! - `python/010-getting-started.md` → "getting started"
//! - `fastapi/02-path-parameters/index.md` → "path parameters"
//! - `reference/example.md` → "example"

/// A file or directory name split into its ordering prefix and the rest.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedName<'a> {
    /// Ordering prefix, if present (`10` from `010-intro`).
    pub number: Option<u32>,
    /// Everything after `NNN-`, or the whole name when unprefixed.
    pub name: &'a str,
}

impl ParsedName<'_> {
    /// Name with dashes and underscores rendered as spaces.
    pub fn display(&self) -> String {
        self.name.replace(['-', '_'], " ").trim().to_string()
    }
}

/// Split `NNN-name` into prefix and name. A bare number has an empty name.
pub fn parse_entry_name(name: &str) -> ParsedName<'_> {
    if let Some((prefix, rest)) = name.split_once('-')
        && let Ok(number) = prefix.parse::<u32>()
    {
        return ParsedName {
            number: Some(number),
            name: rest,
        };
    }
    match name.parse::<u32>() {
        Ok(number) => ParsedName {
            number: Some(number),
            name: "",
        },
        Err(_) => ParsedName { number: None, name },
    }
}

/// Derive a display label from a `/`-separated content path.
///
/// `index` pages are named after their directory. If stripping the prefix
/// leaves nothing, the raw stem is used so the label is never empty.
pub fn label_from_path(path: &str) -> String {
    let mut segments = path.trim_end_matches('/').rsplit('/');
    let file = segments.next().unwrap_or_default();
    let stem = file.rsplit_once('.').map_or(file, |(stem, _)| stem);

    let source = if stem == "index" {
        segments.next().unwrap_or(stem)
    } else {
        stem
    };

    let label = parse_entry_name(source).display();
    if label.is_empty() {
        source.to_string()
    } else {
        label
    }
}
