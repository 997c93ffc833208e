//! Configuration file support for vcpkg-sbom.
//!
//! Provides YAML-based configuration through `vcpkg-sbom.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use vcpkg_sbom::sbom_generation::policies::VersionMode;
use vcpkg_sbom::shared::Result;

pub const CONFIG_FILENAME: &str = "vcpkg-sbom.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub mapping: Option<PathBuf>,
    pub cpedict: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub skip_missing: Option<bool>,
    pub cpe_version: Option<String>,
    pub suggestion_limit: Option<usize>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// The configured version mode, if any. Only valid after validation.
    pub fn version_mode(&self) -> Option<VersionMode> {
        self.cpe_version
            .as_deref()
            .and_then(|mode| mode.parse().ok())
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref mode) = config.cpe_version {
        if let Err(e) = mode.parse::<VersionMode>() {
            bail!(
                "Invalid config: cpe_version: {}\n\n\
                 💡 Hint: Use 'raw' to keep the port revision (1.3.1#2) or 'upstream' to strip it.",
                e
            );
        }
    }

    if config.suggestion_limit == Some(0) {
        bail!(
            "Invalid config: suggestion_limit must be at least 1.\n\n\
             💡 Hint: Remove the field to use the default of 3 suggestions."
        );
    }

    for (field, value) in [("mapping", &config.mapping), ("cpedict", &config.cpedict)] {
        if value
            .as_deref()
            .is_some_and(|path| path.as_os_str().is_empty())
        {
            bail!("Invalid config: {} must not be empty.", field);
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
