//! Generator configuration for llmsgen.
//!
//! An optional TOML file supplies overrides; CLI flags override config file
//! values, which override defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LlmsGenError, Result};

/// Default file name of the index document.
pub const DEFAULT_INDEX_FILE: &str = "llms.txt";

/// Default file name of the full-content dump.
pub const DEFAULT_FULL_FILE: &str = "llms-full.txt";

/// Default prefix joined to each page path in rendered links.
pub const DEFAULT_LINK_PREFIX: &str = "wiki/";

// ---------------------------------------------------------------------------
// Config structs
// ---------------------------------------------------------------------------

/// Top-level generator config, deserialized from TOML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Display name override; skips repository name resolution when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Output file settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[output]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// File name of the index document, written inside the wiki directory.
    #[serde(default = "default_index_file")]
    pub index_file: String,

    /// File name of the full-content dump, written inside the wiki directory.
    #[serde(default = "default_full_file")]
    pub full_file: String,

    /// Prefix for page links in both documents.
    #[serde(default = "default_link_prefix")]
    pub link_prefix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            index_file: default_index_file(),
            full_file: default_full_file(),
            link_prefix: default_link_prefix(),
        }
    }
}

fn default_index_file() -> String {
    DEFAULT_INDEX_FILE.into()
}
fn default_full_file() -> String {
    DEFAULT_FULL_FILE.into()
}
fn default_link_prefix() -> String {
    DEFAULT_LINK_PREFIX.into()
}

impl GeneratorConfig {
    /// Reject output names that would escape the wiki directory or collide.
    pub fn validate(&self) -> Result<()> {
        for (key, file) in [
            ("output.index_file", &self.output.index_file),
            ("output.full_file", &self.output.full_file),
        ] {
            if file.is_empty() || file.contains(['/', '\\']) || file == "." || file == ".." {
                return Err(LlmsGenError::config(format!(
                    "{key} must be a plain file name, got '{file}'"
                )));
            }
        }

        if self.output.index_file == self.output.full_file {
            return Err(LlmsGenError::config(format!(
                "output.index_file and output.full_file are both '{}'",
                self.output.index_file
            )));
        }

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Load and validate the generator config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<GeneratorConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| LlmsGenError::io(path, e))?;

    let config: GeneratorConfig = toml::from_str(&content).map_err(|e| {
        LlmsGenError::config(format!("failed to parse {}: {e}", path.display()))
    })?;
    config.validate()?;

    tracing::debug!(?path, "loaded config file");
    Ok(config)
}

/// Load the config from `path` if given, otherwise return defaults.
pub fn load_config(path: Option<&Path>) -> Result<GeneratorConfig> {
    match path {
        Some(p) => load_config_from(p),
        None => Ok(GeneratorConfig::default()),
    }
}
