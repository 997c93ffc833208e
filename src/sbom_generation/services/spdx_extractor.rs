use crate::sbom_generation::domain::{PackageError, PackageIdentity, SourcePackage};
use crate::sbom_generation::policies::LicenseSelection;
use serde::Deserialize;
use std::path::Path;

/// SPDXID of the package entry describing the port itself
const PORT_SPDX_ID: &str = "spdxref-port";

#[derive(Debug, Deserialize)]
struct SpdxDocument {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    packages: Vec<SpdxPackage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SpdxPackage {
    #[serde(default, rename = "SPDXID")]
    spdx_id_upper: Option<String>,
    #[serde(default)]
    spdx_id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    version_info: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    license_concluded: Option<String>,
    #[serde(default)]
    license_declared: Option<String>,
    #[serde(default)]
    homepage: Option<String>,
}

impl SpdxPackage {
    fn is_port(&self) -> bool {
        self.spdx_id_upper
            .as_deref()
            .or(self.spdx_id.as_deref())
            .is_some_and(|id| id.eq_ignore_ascii_case(PORT_SPDX_ID))
    }
}

/// SpdxExtractor service - pulls the port record out of a `vcpkg.spdx.json`
///
/// The port is the package whose SPDXID is `SPDXRef-port` (case-insensitive).
/// When that package has no `versionInfo`, the version is recovered from the
/// document name (`<port>@<version> <triplet> ...`).
pub struct SpdxExtractor;

impl SpdxExtractor {
    /// Extracts the port package from SPDX document content
    ///
    /// # Errors
    /// Returns `SourceRecordMalformed` if the document is not valid JSON,
    /// has no port package, or the port has no usable name or version
    pub fn extract(content: &str, path: &Path) -> Result<SourcePackage, PackageError> {
        let malformed = |reason: String| PackageError::SourceRecordMalformed {
            path: path.to_path_buf(),
            reason,
        };

        let document: SpdxDocument = serde_json::from_str(content)
            .map_err(|e| malformed(format!("invalid SPDX document: {}", e)))?;

        let SpdxDocument { name: doc_name, packages } = document;
        let port = packages
            .into_iter()
            .find(SpdxPackage::is_port)
            .ok_or_else(|| malformed("missing port package definition".to_string()))?;

        let name = port
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| malformed("missing port name (SPDXRef-port)".to_string()))?;

        let version = port
            .version_info
            .as_deref()
            .filter(|version| !version.is_empty())
            .or_else(|| doc_name.as_deref().and_then(version_from_document_name))
            .ok_or_else(|| malformed("missing version (SPDXRef-port)".to_string()))?;

        let identity = PackageIdentity::new(name.to_string(), version.to_string())
            .map_err(|e| malformed(e.to_string()))?;

        let license = LicenseSelection::select(
            port.license_concluded.as_deref(),
            port.license_declared.as_deref(),
        );

        Ok(SourcePackage::new(identity, path.to_path_buf())
            .with_description(non_blank(port.description))
            .with_license(license)
            .with_homepage(non_blank(port.homepage).filter(|url| url != "NOASSERTION")))
    }
}

/// `zlib@1.3.1 x64-linux 7c3d...` -> `1.3.1`
fn version_from_document_name(doc_name: &str) -> Option<&str> {
    let (_, rest) = doc_name.split_once('@')?;
    rest.split_whitespace().next()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
