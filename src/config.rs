//! Generator configuration
//!
//! Optional `gatewaygen.toml` next to the descriptor (or passed explicitly):
//!
//! ```toml
//! format = true
//! api_doc = "greeter.swagger.json"
//!
//! [[imports]]
//! path = "super::pb"
//! standard = false
//! ```

use crate::descriptor::{FileUnit, ImportSpec};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name looked up next to the descriptor.
pub const CONFIG_FILE_NAME: &str = "gatewaygen.toml";

/// Environment variable naming the formatter binary (defaults to `rustfmt`).
pub const RUSTFMT_ENV: &str = "GATEWAYGEN_RUSTFMT_BIN";

fn default_format() -> bool {
    true
}

/// Settings loaded from `gatewaygen.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Run rustfmt on written output
    #[serde(default = "default_format")]
    pub format: bool,

    /// Documentation file to embed, relative to the config file.
    /// Replaces whatever the descriptor carries.
    #[serde(default)]
    pub api_doc: Option<PathBuf>,

    /// Imports appended after the descriptor's own
    #[serde(default)]
    pub imports: Vec<ImportSpec>,

    /// Directory the config was loaded from; relative paths resolve against it
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            format: default_format(),
            api_doc: None,
            imports: Vec::new(),
            base_dir: None,
        }
    }
}

impl GeneratorConfig {
    /// Merge the configuration into a loaded descriptor.
    pub fn apply(&self, unit: &mut FileUnit) -> anyhow::Result<()> {
        if let Some(doc) = &self.api_doc {
            let doc_path = match &self.base_dir {
                Some(dir) => dir.join(doc),
                None => doc.clone(),
            };
            unit.api_doc = std::fs::read(&doc_path)
                .with_context(|| format!("Failed to read API doc: {}", doc_path.display()))?;
        }
        unit.imports.extend(self.imports.iter().cloned());
        Ok(())
    }
}

/// Load the configuration from a TOML file.
///
/// Returns `Ok(None)` when the file does not exist.
pub fn load_config(config_path: &Path) -> anyhow::Result<Option<GeneratorConfig>> {
    if !config_path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read generator config: {}", config_path.display()))?;
    let mut config: GeneratorConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse generator config: {}", config_path.display()))?;
    config.base_dir = config_path.parent().map(Path::to_path_buf);
    Ok(Some(config))
}

/// Resolve the config path.
///
/// Priority:
/// 1. Explicitly provided path (via CLI)
/// 2. `gatewaygen.toml` alongside the descriptor
/// 3. None (defaults apply)
pub fn resolve_config_path(explicit_path: Option<&Path>, descriptor_path: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(path.to_path_buf());
    }
    let candidate = descriptor_path.parent()?.join(CONFIG_FILE_NAME);
    candidate.exists().then_some(candidate)
}

/// Resolve and load the configuration, falling back to defaults.
///
/// An explicit path that does not exist is an error; a missing auto-detected
/// file is not.
pub fn load_for_descriptor(
    explicit_path: Option<&Path>,
    descriptor_path: &Path,
) -> anyhow::Result<GeneratorConfig> {
    let Some(path) = resolve_config_path(explicit_path, descriptor_path) else {
        return Ok(GeneratorConfig::default());
    };
    match load_config(&path)? {
        Some(config) => Ok(config),
        None => anyhow::bail!("Config file not found: {}", path.display()),
    }
}

/// Formatter binary: `$GATEWAYGEN_RUSTFMT_BIN` or `rustfmt`.
pub fn rustfmt_bin() -> String {
    std::env::var(RUSTFMT_ENV).unwrap_or_else(|_| "rustfmt".to_string())
}
