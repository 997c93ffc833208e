pub mod cpe_dictionary;
pub mod mapping;
pub mod package;
pub mod pattern;
pub mod resolution;
pub mod sbom_metadata;

pub use cpe_dictionary::{CpeDictionary, CpeDictionaryEntry};
pub use mapping::{MappingEntry, MappingMatch, MappingTable, DEFAULT_PURL_TEMPLATE};
pub use package::{PackageIdentity, PackageName, PackageVersion, SourcePackage};
pub use resolution::{PackageError, ResolvedComponent, ResolvedIdentity};
pub use sbom_metadata::SbomMetadata;
