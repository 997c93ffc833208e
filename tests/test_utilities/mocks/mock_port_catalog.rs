use std::path::Path;
use vcpkg_sbom::prelude::*;

/// Mock PortCatalog listing a fixed set of port names
pub struct MockPortCatalog {
    ports: Vec<String>,
}

#[allow(dead_code)]
impl MockPortCatalog {
    pub fn new(ports: &[&str]) -> Self {
        Self {
            ports: ports.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl PortCatalog for MockPortCatalog {
    fn list_ports(&self, _vcpkg_root: &Path) -> Result<Vec<String>> {
        Ok(self.ports.clone())
    }
}
