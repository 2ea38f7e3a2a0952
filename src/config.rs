//! Navigation configuration module.
//!
//! Handles loading and validating `nav.toml`, the declaration of which
//! topics the sidebar shows and which content each one pulls in.
//!
//! ## Configuration Options
//!
//! ```toml
//! # Content directory, relative to this file
//! content_root = "src/content/docs"
//!
//! # Page file extensions picked up by the scanner
//! extensions = ["md", "mdx"]
//!
//! # Paths omitted from every topic, whichever globs matched them
//! excludes = ["python/drafts/**"]
//!
//! # Topics, in display order
//! [[topics]]
//! id = "guides"
//! label = "Guides"
//! link = "/guides/"
//! items = [{ label = "Example Guide", path = "guides/example.md" }]
//!
//! [[topics]]
//! id = "python"
//! label = "Python"
//! link = "/python/"
//! directory = "python"       # shorthand for globs = ["python/**"]
//!
//! [[topics]]
//! id = "fastapi"
//! label = "FastAPI"
//! link = "/fastapi/"
//! globs = ["fastapi/**"]
//!
//! # Replace a topic's globs without touching its declaration
//! [overrides]
//! python = ["python/advanced/**"]
//! ```
//!
//! Unknown keys are rejected to catch typos early. Topic ids must be unique
//! and every glob must parse; both are checked at load time, before any
//! content is scanned.

use crate::resolve::{self, ConfigurationError};
use crate::types::{OverrideMap, TopicDefinition};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Invalid navigation: {0}")]
    Invalid(#[from] ConfigurationError),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Navigation configuration loaded from `nav.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavConfig {
    /// Content directory, relative to the config file.
    pub content_root: String,
    /// Page file extensions (without the dot).
    pub extensions: Vec<String>,
    /// Global exclude globs, applied after topic matching.
    pub excludes: Vec<String>,
    /// Declared topics, in display order.
    pub topics: Vec<TopicDefinition>,
    /// Topic id → globs replacing that topic's own.
    pub overrides: OverrideMap,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            content_root: "src/content/docs".to_string(),
            extensions: vec!["md".to_string(), "mdx".to_string()],
            excludes: Vec::new(),
            topics: Vec::new(),
            overrides: OverrideMap::new(),
        }
    }
}

impl NavConfig {
    /// Validate scanner settings and the topic declarations.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.extensions.iter().all(|e| e.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "extensions must not be empty".into(),
            ));
        }
        if self.topics.iter().any(|t| t.id.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "topic ids must not be empty".into(),
            ));
        }
        resolve::validate(&self.topics, &self.excludes, &self.overrides)?;
        Ok(())
    }

    /// Content directory for a config loaded from `config_path`.
    ///
    /// Relative roots are taken from the config file's directory.
    pub fn content_dir(&self, config_path: &Path) -> PathBuf {
        let root = Path::new(&self.content_root);
        if root.is_absolute() {
            return root.to_path_buf();
        }
        config_path
            .parent()
            .map(|dir| dir.join(root))
            .unwrap_or_else(|| root.to_path_buf())
    }
}

/// Parse and validate a config from TOML text.
pub fn parse_config(content: &str) -> Result<NavConfig, ConfigError> {
    let config: NavConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load `nav.toml` from `path`, rejecting unknown keys and invalid topics.
pub fn load_config(path: &Path) -> Result<NavConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content)
}

/// Returns a fully-commented starter `nav.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Topic Navigation Configuration
# ==============================
# Declares the sidebar topics of a documentation site and which content
# pages each topic lists. Unknown keys cause an error.

# Content directory, relative to this file.
content_root = "src/content/docs"

# File extensions treated as pages.
extensions = ["md", "mdx"]

# Paths omitted from every topic. Excludes are applied after topic
# matching and always win.
excludes = []

# ---------------------------------------------------------------------------
# Topics, in display order
# ---------------------------------------------------------------------------
# Each topic needs a unique id, a label, its root link, and at least one
# content glob or pinned item. `directory = "x"` is shorthand for
# `globs = ["x/**"]`. `items` pins single pages under a label of your own;
# they are listed first, and excludes still apply to them.
#
# Glob syntax: `*` and `?` stay within one path segment, `**` spans any
# number of segments, `[abc]` matches one listed character.

[[topics]]
id = "guides"
label = "Guides"
link = "/guides/"
items = [{ label = "Example Guide", path = "guides/example.md" }]

[[topics]]
id = "reference"
label = "Reference"
link = "/reference/"
directory = "reference"

[[topics]]
id = "python"
label = "Python"
link = "/python/"
directory = "python"

[[topics]]
id = "django"
label = "Django"
link = "/django/"
directory = "django"

[[topics]]
id = "fastapi"
label = "FastAPI"
link = "/fastapi/"
directory = "fastapi"

# ---------------------------------------------------------------------------
# Overrides
# ---------------------------------------------------------------------------
# Replace a topic's globs by id, e.g. to narrow a topic temporarily.
[overrides]
# python = ["python/basics/**"]
"##
}
