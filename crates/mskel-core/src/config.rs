//! Project configuration (`mskel.toml`).
//!
//! Holds defaults the CLI seeds new surveys with: the shared header
//! fields, the author block, and the export directory. Every field is
//! optional in the file; a missing file means defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub header: HeaderDefaults,
    #[serde(default)]
    pub author: AuthorDefaults,
    #[serde(default)]
    pub export: ExportConfig,
}

/// Default shared header applied to a fresh survey.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HeaderDefaults {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub division: String,
    #[serde(default)]
    pub class: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AuthorDefaults {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub contact: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_export_dir")]
    pub dir: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dir: default_export_dir(),
        }
    }
}

fn default_export_dir() -> String {
    ".".to_string()
}

impl ProjectConfig {
    /// Load config from `path`; a missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let rendered =
            toml::to_string_pretty(self).context("failed to serialize project config")?;
        fs::write(path, rendered)
            .with_context(|| format!("failed to write config file {}", path.display()))
    }
}
