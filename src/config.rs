use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Default config file looked up in the current directory.
pub const CONFIG_FILE: &str = "srclist.toml";

/// Main configuration for srclist
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GenConfig {
    /// Directory to scan
    pub root: PathBuf,
    /// Name of the CMake variable holding header files
    pub header_list_name: String,
    /// Name of the CMake variable holding source files
    pub source_list_name: String,
    /// Token substituted for the scan root in every emitted path
    pub placeholder: String,
    /// Sort each list instead of keeping traversal order
    pub sort: bool,
    /// Write to this file instead of stdout
    pub output: Option<PathBuf>,
    /// Enable debug logging on stderr
    pub verbose: bool,
}

impl GenConfig {
    /// Rejects settings that would produce an unusable CMake fragment.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.header_list_name.trim().is_empty() {
            anyhow::bail!("Header list name must not be empty");
        }
        if self.source_list_name.trim().is_empty() {
            anyhow::bail!("Source list name must not be empty");
        }
        if self.placeholder.is_empty() {
            anyhow::bail!("Placeholder root token must not be empty");
        }
        Ok(())
    }

    /// Loads `srclist.toml` from the current directory, if there is one.
    pub fn load_from_file() -> anyhow::Result<Option<Self>> {
        Self::load_if_present(Path::new(CONFIG_FILE))
    }

    /// `Ok(None)` when `path` does not exist; a file that exists but cannot be read or parsed is an error.
    pub fn load_if_present(path: &Path) -> anyhow::Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from_path(path).map(Some)
    }

    /// Loads an explicitly named config file; unlike [`Self::load_from_file`], failures are errors.
    pub fn load_from_path(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Invalid config file: {:?}", path))
    }
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            header_list_name: "HEADER_LIST".to_string(),
            source_list_name: "SRC_LIST".to_string(),
            placeholder: "${CMAKE_CURRENT_SOURCE_DIR}".to_string(),
            sort: false,
            output: None,
            verbose: false,
        }
    }
}
