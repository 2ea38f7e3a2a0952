//! Glob compilation and content-path ordering.
//!
//! Patterns are matched against `/`-separated paths relative to the content
//! root. `*`, `?` and `[...]` stay within one path segment; `**` as a whole
//! segment spans any depth, so `python/**` covers `python/intro.md` and
//! `python/drafts/wip.md` alike.

use glob::{MatchOptions, Pattern};
use std::cmp::Ordering;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// A compiled, ordered list of glob patterns.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<Pattern>,
}

/// A pattern that failed to compile, with the parser's explanation.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidPattern {
    pub pattern: String,
    pub reason: String,
}

impl PatternSet {
    /// Compile every pattern, failing on the first malformed one.
    pub fn compile<S: AsRef<str>>(patterns: &[S]) -> Result<Self, InvalidPattern> {
        let patterns = patterns
            .iter()
            .map(|p| {
                let p = p.as_ref();
                Pattern::new(p).map_err(|e| InvalidPattern {
                    pattern: p.to_string(),
                    reason: e.msg.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// True if any pattern matches `path`.
    pub fn matches(&self, path: &str) -> bool {
        self.patterns
            .iter()
            .any(|p| p.matches_with(path, MATCH_OPTIONS))
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }
}

/// Compare two content paths segment by segment.
///
/// Unlike plain string order this keeps a directory's contents together:
/// `python/intro.md` sorts before `python-extras/a.md` because the segment
/// `python` is a prefix of `python-extras`.
pub fn path_order(a: &str, b: &str) -> Ordering {
    a.split('/').cmp(b.split('/'))
}
