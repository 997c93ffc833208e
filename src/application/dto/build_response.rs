use crate::sbom_generation::domain::{PackageError, ResolvedComponent, SbomMetadata};

/// BuildResponse - outcome of the `build` use case
///
/// Per-port errors are collected in `diagnostics`; the caller decides the
/// exit status and whether documents are written.
#[derive(Debug, Clone)]
pub struct BuildResponse {
    pub components: Vec<ResolvedComponent>,
    /// Names of unmapped ports omitted because of `skip_missing`
    pub skipped: Vec<String>,
    pub diagnostics: Vec<PackageError>,
    pub metadata: SbomMetadata,
    /// True when interactive edits were written back to the mapping file
    pub mapping_updated: bool,
}

impl BuildResponse {
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}
