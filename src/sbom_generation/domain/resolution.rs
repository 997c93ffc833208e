use super::cpe_dictionary::CpeDictionaryEntry;
use super::package::SourcePackage;
use std::path::PathBuf;
use thiserror::Error;

/// Fully rendered identity of one port
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIdentity {
    pub name: String,
    pub version: String,
    pub cpe: String,
    pub purl: String,
    /// Mapping Table key that produced this identity
    pub matched_pattern: String,
}

/// A resolved port together with the SPDX metadata carried into the BOM
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedComponent {
    pub identity: ResolvedIdentity,
    pub description: Option<String>,
    pub license: Option<String>,
    pub homepage: Option<String>,
}

impl ResolvedComponent {
    pub fn new(identity: ResolvedIdentity, source: &SourcePackage) -> Self {
        Self {
            identity,
            description: source.description().map(String::from),
            license: source.license().map(String::from),
            homepage: source.homepage().map(String::from),
        }
    }
}

/// Recoverable, per-package errors.
///
/// These are accumulated over a run and reported together at the end;
/// none of them stops the batch by itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackageError {
    #[error("{path}: {reason}")]
    SourceRecordMalformed { path: PathBuf, reason: String },

    #[error("Port {name} ({version}) missing in mapping table{}", format_suggestions(.suggestions))]
    MappingMissing {
        name: String,
        version: String,
        suggestions: Vec<CpeDictionaryEntry>,
    },

    #[error("Port {name} has incomplete mapping (rendered CPE or PURL is empty)")]
    IncompleteMapping { name: String },

    #[error("Port {name}: invalid purl '{purl}': {details}")]
    InvalidPurl {
        name: String,
        purl: String,
        details: String,
    },
}

impl PackageError {
    pub fn is_mapping_missing(&self) -> bool {
        matches!(self, PackageError::MappingMissing { .. })
    }
}

fn format_suggestions(suggestions: &[CpeDictionaryEntry]) -> String {
    if suggestions.is_empty() {
        return String::new();
    }
    let formatted: Vec<String> = suggestions.iter().map(ToString::to_string).collect();
    format!(" (suggest: {})", formatted.join(", "))
}
