mod mapping_resolver;
mod sbom_generator;
mod spdx_extractor;
mod suggestion_engine;
mod template_renderer;

pub use mapping_resolver::MappingResolver;
pub use sbom_generator::{SbomGenerator, TOOL_NAME};
pub use spdx_extractor::SpdxExtractor;
pub use suggestion_engine::{SuggestionEngine, DEFAULT_SUGGESTION_LIMIT};
pub use template_renderer::{TemplateRenderer, PORT_PLACEHOLDER, VERSION_PLACEHOLDER};
