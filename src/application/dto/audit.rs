use serde::Serialize;
use std::path::PathBuf;

/// AuditRequest - input of the `audit` use case
#[derive(Debug, Clone)]
pub struct AuditRequest {
    /// vcpkg checkout whose `ports/` directory is enumerated
    pub vcpkg_root: PathBuf,
    pub mapping_path: PathBuf,
}

impl AuditRequest {
    pub fn new(vcpkg_root: PathBuf, mapping_path: PathBuf) -> Self {
        Self {
            vcpkg_root,
            mapping_path,
        }
    }
}

/// One line of the audit report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortAuditEntry {
    pub port: String,
    pub mapped: bool,
}

/// AuditResponse - mapping coverage of every port, sorted by port name
#[derive(Debug, Clone, Default)]
pub struct AuditResponse {
    pub entries: Vec<PortAuditEntry>,
}

impl AuditResponse {
    pub fn mapped_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.mapped).count()
    }

    pub fn unmapped(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|entry| !entry.mapped)
            .map(|entry| entry.port.as_str())
    }
}
