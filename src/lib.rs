//! vcpkg-sbom - SBOM generation tool for vcpkg installed trees
//!
//! This library turns the per-port `vcpkg.spdx.json` documents of a vcpkg
//! installed tree into a CycloneDX SBOM whose components carry a CPE 2.3
//! and a Package URL, resolved through a user-maintained mapping table and
//! an optional CPE dictionary. It follows hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sbom_generation`): Mapping resolution, suggestions and SBOM metadata
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use vcpkg_sbom::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create use case; no prompt, so unmapped ports become diagnostics
//! let use_case = GenerateSbomUseCase::new(
//!     FileSystemReader::new(),
//!     JsonMappingRepository::new(),
//!     FileSystemReader::new(),
//!     StderrProgressReporter::new(),
//!     None::<ConsoleMappingPrompt<std::io::StdinLock<'static>, std::io::Stderr>>,
//! );
//!
//! // Execute
//! let request = BuildRequest::new(
//!     PathBuf::from("vcpkg_installed/x64-linux"),
//!     PathBuf::from("mapping.json"),
//!     PathBuf::from("cpedict/data/cpes.csv"),
//! );
//! let response = use_case.execute(request)?;
//!
//! // Format output
//! let model = SbomReadModelBuilder::build(&response.components, &response.metadata);
//! let output = CycloneDxFormatter::new().format(&model)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod sbom_generation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{ConsoleMappingPrompt, StderrProgressReporter};
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, JsonMappingRepository, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        AuditReportFormatter, CycloneDxFormatter, CycloneDxXmlFormatter,
    };
    pub use crate::application::dto::{
        AuditRequest, AuditResponse, BuildRequest, BuildResponse, OutputFormat,
    };
    pub use crate::application::read_models::{SbomReadModel, SbomReadModelBuilder};
    pub use crate::application::use_cases::{AuditMappingsUseCase, GenerateSbomUseCase};
    pub use crate::ports::outbound::{
        CpeDictionaryReader, MappingPrompt, MappingRepository, OutputPresenter, PortCatalog,
        ProgressReporter, PromptDecision, SbomFormatter, SpdxSourceReader,
    };
    pub use crate::sbom_generation::domain::{
        CpeDictionary, CpeDictionaryEntry, MappingEntry, MappingTable, PackageError,
        ResolvedComponent, SbomMetadata, SourcePackage,
    };
    pub use crate::sbom_generation::policies::VersionMode;
    pub use crate::sbom_generation::services::{MappingResolver, SbomGenerator, SuggestionEngine};
    pub use crate::shared::Result;
}
