//! # Topic Nav
//!
//! Resolves the sidebar of a static documentation site from a declaration of
//! *topics*. Each topic (Python, Django, FastAPI, Guides, ...) names the
//! content it lists through glob patterns over the content directory; the
//! resolver turns those declarations plus the current content tree into an
//! ordered navigation tree.
//!
//! ```text
//! nav.toml ──► config ──┐
//!                       ├──► resolve ──► Vec<NavEntry> ──► output / JSON
//! docs/    ──► content ─┘
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`resolve`] | The resolver: effective globs, matching, global excludes, ordering |
//! | [`pattern`] | Glob compilation and path-segment ordering |
//! | [`types`] | Topic declarations, content entries, navigation entries |
//! | [`config`] | `nav.toml` loading and validation, stock config |
//! | [`content`] | Content directory scan with front matter / heading titles |
//! | [`naming`] | Fallback page labels from `NNN-name` file names |
//! | [`manifest`] | One build: config → scan → resolve |
//! | [`output`] | CLI formatting of the navigation tree |
//!
//! # Resolution Rules
//!
//! - Topic order in the config is display order.
//! - An override for a topic id replaces that topic's globs entirely.
//! - Excludes are global and applied last: an excluded path never appears,
//!   whichever topic matched it.
//! - A path matching several topics appears under each; a path matching none
//!   is simply not listed.
//! - A topic with nothing left after exclusion is still shown, with no
//!   children.
//! - Duplicate topic ids and malformed globs are rejected before any content
//!   is matched.
//!
//! Resolution is a pure function of its inputs. Each build recomputes
//! everything from the config and the content tree as they are now.

pub mod config;
pub mod content;
pub mod manifest;
pub mod naming;
pub mod output;
pub mod pattern;
pub mod resolve;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
