use std::path::Path;
use vcpkg_sbom::prelude::*;

/// Mock CpeDictionaryReader returning a fixed set of vendor/product rows
#[derive(Default)]
pub struct MockCpeDictionaryReader {
    rows: Vec<(String, String)>,
}

#[allow(dead_code)]
impl MockCpeDictionaryReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_row(mut self, vendor: &str, product: &str) -> Self {
        self.rows.push((vendor.to_string(), product.to_string()));
        self
    }
}

impl CpeDictionaryReader for MockCpeDictionaryReader {
    fn load_dictionary(&self, _path: &Path) -> Result<CpeDictionary> {
        Ok(CpeDictionary::from_entries(
            self.rows
                .iter()
                .map(|(vendor, product)| CpeDictionaryEntry::new(vendor.as_str(), product.as_str())),
        ))
    }
}
