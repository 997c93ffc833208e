//! Component view structs for read model
//!
//! A flattened, output-ready view of one resolved port.

/// View representation of a BOM component
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentView {
    /// BOM reference identifier (the PURL)
    pub bom_ref: String,
    pub name: String,
    /// Raw vcpkg version, port revision included
    pub version: String,
    pub purl: String,
    /// CPE 2.3 formatted string
    pub cpe: String,
    pub description: Option<String>,
    pub license: Option<LicenseView>,
    /// Upstream project homepage, emitted as a `website` external reference
    pub homepage: Option<String>,
}

/// View representation of license information
#[derive(Debug, Clone, PartialEq)]
pub struct LicenseView {
    /// SPDX license expression as found in the port's SPDX document
    pub expression: String,
}
