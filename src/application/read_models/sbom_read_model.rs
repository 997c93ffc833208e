//! SBOM read model for query operations
//!
//! Everything a formatter needs to render one BOM document.

use super::component_view::ComponentView;

/// Main read model for SBOM data
///
/// Components are already sorted; formatters emit them in this order.
#[derive(Debug, Clone)]
pub struct SbomReadModel {
    pub metadata: SbomMetadataView,
    pub components: Vec<ComponentView>,
}

/// View representation of SBOM metadata
#[derive(Debug, Clone)]
pub struct SbomMetadataView {
    /// RFC 3339 creation time
    pub timestamp: String,
    pub tool_name: String,
    pub tool_version: String,
    /// `urn:uuid:` serial number
    pub serial_number: String,
}
