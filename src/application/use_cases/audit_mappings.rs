use crate::application::dto::{AuditRequest, AuditResponse, PortAuditEntry};
use crate::ports::outbound::{MappingRepository, PortCatalog, ProgressReporter};
use crate::shared::Result;

/// AuditMappingsUseCase - reports which ports of a vcpkg checkout have a
/// Mapping Table entry
///
/// A port counts as mapped when `build` would find an entry for it, so
/// wildcard patterns cover every port they match.
pub struct AuditMappingsUseCase<PC, MR, PR> {
    port_catalog: PC,
    mapping_repository: MR,
    progress_reporter: PR,
}

impl<PC, MR, PR> AuditMappingsUseCase<PC, MR, PR>
where
    PC: PortCatalog,
    MR: MappingRepository,
    PR: ProgressReporter,
{
    pub fn new(port_catalog: PC, mapping_repository: MR, progress_reporter: PR) -> Self {
        Self {
            port_catalog,
            mapping_repository,
            progress_reporter,
        }
    }

    /// # Errors
    /// Returns an error if the mapping file cannot be loaded or the ports
    /// directory cannot be listed
    pub fn execute(&self, request: AuditRequest) -> Result<AuditResponse> {
        let table = self.mapping_repository.load_mapping(&request.mapping_path)?;

        self.progress_reporter.report(&format!(
            "🔍 Auditing ports under: {}",
            request.vcpkg_root.join("ports").display()
        ));
        let mut ports = self.port_catalog.list_ports(&request.vcpkg_root)?;
        ports.sort();

        let entries: Vec<PortAuditEntry> = ports
            .into_iter()
            .map(|port| {
                let mapped = table.contains(&port.to_lowercase());
                PortAuditEntry { port, mapped }
            })
            .collect();

        let response = AuditResponse { entries };
        self.progress_reporter.report_completion(&format!(
            "✅ {} of {} port(s) mapped",
            response.mapped_count(),
            response.entries.len()
        ));

        Ok(response)
    }
}
