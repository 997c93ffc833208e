//! Read models for CQRS-lite pattern
//!
//! View-optimized structs the formatters render from.

pub mod component_view;
pub mod sbom_read_model;
pub mod sbom_read_model_builder;

pub use component_view::{ComponentView, LicenseView};
pub use sbom_read_model::{SbomMetadataView, SbomReadModel};
pub use sbom_read_model_builder::SbomReadModelBuilder;
