/// Use cases module containing application business logic orchestration
mod audit_mappings;
mod generate_sbom;

pub use audit_mappings::AuditMappingsUseCase;
pub use generate_sbom::GenerateSbomUseCase;
