use crate::sbom_generation::domain::MappingTable;
use crate::shared::Result;
use std::path::Path;

/// MappingRepository port for loading and persisting the Mapping Table
pub trait MappingRepository {
    /// Loads the Mapping Table, keeping the key order of the stored file
    ///
    /// # Errors
    /// - `MappingFileNotFound` if `path` does not exist
    /// - `MappingParseError` if the content is not a pattern -> entry object
    fn load_mapping(&self, path: &Path) -> Result<MappingTable>;

    /// Writes the table back as pretty-printed JSON with a trailing newline
    ///
    /// # Errors
    /// Returns `MappingPersistError` if the file cannot be written
    fn save_mapping(&self, path: &Path, table: &MappingTable) -> Result<()>;
}
