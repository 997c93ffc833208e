use crate::ports::outbound::MappingRepository;
use crate::sbom_generation::domain::{MappingEntry, MappingTable};
use crate::shared::error::SbomError;
use crate::shared::security::{read_checked, validate_not_symlink};
use crate::shared::Result;
use indexmap::IndexMap;
use std::fs;
use std::path::Path;

/// JsonMappingRepository adapter for `mapping.json`
///
/// The file is a JSON object of pattern -> `{"cpe": ..., "purl": ...}`.
/// Key order and any extra per-entry keys are kept on load and on
/// write-back.
pub struct JsonMappingRepository;

impl JsonMappingRepository {
    pub fn new() -> Self {
        Self
    }

    fn persist_error(path: &Path, details: impl ToString) -> SbomError {
        SbomError::MappingPersistError {
            path: path.to_path_buf(),
            details: details.to_string(),
        }
    }
}

impl Default for JsonMappingRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MappingRepository for JsonMappingRepository {
    fn load_mapping(&self, path: &Path) -> Result<MappingTable> {
        if !path.exists() {
            return Err(SbomError::MappingFileNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        let content = read_checked(path, "mapping file").map_err(|e| SbomError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        let entries: IndexMap<String, MappingEntry> =
            serde_json::from_str(&content).map_err(|e| SbomError::MappingParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        Ok(MappingTable::from_entries(entries))
    }

    fn save_mapping(&self, path: &Path, table: &MappingTable) -> Result<()> {
        if path.exists() {
            validate_not_symlink(path, "write").map_err(|e| Self::persist_error(path, e))?;
        }

        let mut content = serde_json::to_string_pretty(table.entries())
            .map_err(|e| Self::persist_error(path, e))?;
        content.push('\n');

        fs::write(path, content).map_err(|e| Self::persist_error(path, e))?;
        Ok(())
    }
}
