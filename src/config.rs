//! Plugin options and the crate's error type.
//!
//! Options come from a TOML file:
//!
//! ```toml
//! block_type = "php"
//! embedded_prefix = "script_"
//! ```
//!
//! Every key is optional.  The export marker name and the parser setup
//! are fixed and deliberately not configurable.
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "php-sfc.toml";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Which blocks and embedded codes the plugin acts on.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PluginOptions {
    /// Tag name of the custom blocks holding PHP code.
    pub block_type: String,
    /// Only embedded codes whose id starts with this prefix are extended.
    pub embedded_prefix: String,
}

impl Default for PluginOptions {
    fn default() -> Self {
        Self {
            block_type: "php".to_string(),
            embedded_prefix: "script_".to_string(),
        }
    }
}

impl PluginOptions {
    pub fn from_toml(path: &Path, text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load options from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(path, &text)
    }

    /// Load options from `explicit` when given, otherwise from
    /// [`DEFAULT_CONFIG_FILE`] in `dir` if it exists, otherwise defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "using config file");
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }
}
