use indexmap::IndexMap;
use std::path::Path;
use std::sync::{Arc, Mutex};
use vcpkg_sbom::prelude::*;
use vcpkg_sbom::shared::error::SbomError;

/// Mock MappingRepository holding the table in memory and recording saves
#[derive(Clone, Default)]
pub struct MockMappingRepository {
    entries: Option<IndexMap<String, MappingEntry>>,
    pub saved: Arc<Mutex<Vec<MappingTable>>>,
}

#[allow(dead_code)]
impl MockMappingRepository {
    pub fn new() -> Self {
        Self {
            entries: Some(IndexMap::new()),
            saved: Arc::default(),
        }
    }

    /// A repository whose mapping file does not exist
    pub fn missing() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, pattern: &str, cpe: &str, purl: &str) -> Self {
        self.entries
            .get_or_insert_with(IndexMap::new)
            .insert(pattern.to_string(), MappingEntry::new(cpe, purl));
        self
    }

    pub fn save_count(&self) -> usize {
        self.saved.lock().unwrap().len()
    }

    pub fn last_saved(&self) -> Option<MappingTable> {
        self.saved.lock().unwrap().last().cloned()
    }
}

impl MappingRepository for MockMappingRepository {
    fn load_mapping(&self, path: &Path) -> Result<MappingTable> {
        match &self.entries {
            Some(entries) => Ok(MappingTable::from_entries(entries.clone())),
            None => Err(SbomError::MappingFileNotFound {
                path: path.to_path_buf(),
            }
            .into()),
        }
    }

    fn save_mapping(&self, _path: &Path, table: &MappingTable) -> Result<()> {
        self.saved.lock().unwrap().push(table.clone());
        Ok(())
    }
}
