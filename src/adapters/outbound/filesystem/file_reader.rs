use crate::ports::outbound::{CpeDictionaryReader, PortCatalog, SpdxSourceReader};
use crate::sbom_generation::domain::{CpeDictionary, CpeDictionaryEntry};
use crate::shared::error::SbomError;
use crate::shared::security::{read_checked, validate_not_symlink};
use crate::shared::Result;
use serde::Deserialize;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// File name vcpkg gives every per-port SPDX document
pub const SPDX_FILE_NAME: &str = "vcpkg.spdx.json";

/// Directory two levels above each SPDX document (`share/<port>/...`)
const SHARE_DIR_NAME: &str = "share";

/// Directory of port definitions inside a vcpkg checkout
const PORTS_DIR_NAME: &str = "ports";

/// One row of the CPE dictionary CSV; other columns are ignored
#[derive(Debug, Deserialize)]
struct CpeRow {
    #[serde(default)]
    vendor: Option<String>,
    #[serde(default)]
    product: Option<String>,
}

/// FileSystemReader adapter for everything the tool reads from disk
///
/// Implements SpdxSourceReader, CpeDictionaryReader and PortCatalog.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    fn require_directory(path: &Path) -> Result<()> {
        if !path.is_dir() {
            return Err(SbomError::InvalidPath {
                path: path.to_path_buf(),
                reason: "Directory does not exist or is not a directory".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Depth-first walk that never follows symlinked directories
    fn collect_spdx_files(dir: &Path, found: &mut Vec<PathBuf>) -> Result<()> {
        let entries = fs::read_dir(dir)
            .map_err(|e| anyhow::anyhow!("Failed to read directory {}: {}", dir.display(), e))?;

        for entry in entries {
            let entry = entry?;
            let file_type = entry.file_type()?;
            let path = entry.path();

            if file_type.is_dir() {
                Self::collect_spdx_files(&path, found)?;
            } else if file_type.is_file() && is_port_spdx_document(&path) {
                found.push(path);
            }
        }

        Ok(())
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Matches `**/share/<port>/vcpkg.spdx.json`
fn is_port_spdx_document(path: &Path) -> bool {
    path.file_name() == Some(OsStr::new(SPDX_FILE_NAME))
        && path
            .parent()
            .and_then(Path::parent)
            .and_then(Path::file_name)
            == Some(OsStr::new(SHARE_DIR_NAME))
}

impl SpdxSourceReader for FileSystemReader {
    fn discover_sources(&self, installed_root: &Path) -> Result<Vec<PathBuf>> {
        Self::require_directory(installed_root)?;

        let mut found = Vec::new();
        Self::collect_spdx_files(installed_root, &mut found)?;
        found.sort();
        Ok(found)
    }

    fn read_source(&self, path: &Path) -> Result<String> {
        read_checked(path, SPDX_FILE_NAME).map_err(|e| {
            SbomError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl CpeDictionaryReader for FileSystemReader {
    fn load_dictionary(&self, path: &Path) -> Result<CpeDictionary> {
        if !path.exists() {
            return Ok(CpeDictionary::empty());
        }

        validate_not_symlink(path, "read")?;

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|e| SbomError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        // Unparsable rows are dropped the same way blank ones are
        let rows = reader
            .deserialize::<CpeRow>()
            .filter_map(|row| row.ok())
            .map(|row| {
                CpeDictionaryEntry::new(
                    row.vendor.unwrap_or_default(),
                    row.product.unwrap_or_default(),
                )
            });

        Ok(CpeDictionary::from_entries(rows))
    }
}

impl PortCatalog for FileSystemReader {
    fn list_ports(&self, vcpkg_root: &Path) -> Result<Vec<String>> {
        let ports_dir = vcpkg_root.join(PORTS_DIR_NAME);
        Self::require_directory(&ports_dir)?;

        let entries = fs::read_dir(&ports_dir).map_err(|e| SbomError::FileReadError {
            path: ports_dir.clone(),
            details: e.to_string(),
        })?;

        let mut ports = Vec::new();
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                ports.push(name.to_string());
            }
        }

        ports.sort();
        Ok(ports)
    }
}
