use crate::sbom_generation::domain::SbomMetadata;
use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;

/// Tool name written into `metadata.tools`
pub const TOOL_NAME: &str = "vcpkg-sbom";

/// SbomGenerator service for BOM-level metadata
///
/// Every run gets a fresh `urn:uuid:` serial number and a UTC timestamp.
pub struct SbomGenerator;

impl SbomGenerator {
    /// Metadata stamped with an explicit point in time
    pub fn generate_metadata_at(
        generated_at: DateTime<Utc>,
        tool_name: &str,
        tool_version: &str,
    ) -> SbomMetadata {
        SbomMetadata::new(
            generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            tool_name.to_string(),
            tool_version.to_string(),
            format!("urn:uuid:{}", Uuid::new_v4()),
        )
    }

    pub fn generate_metadata(tool_name: &str, tool_version: &str) -> SbomMetadata {
        Self::generate_metadata_at(Utc::now(), tool_name, tool_version)
    }

    /// Metadata for this binary, using the compile-time crate version
    pub fn generate_default_metadata() -> SbomMetadata {
        Self::generate_metadata(TOOL_NAME, env!("CARGO_PKG_VERSION"))
    }
}
