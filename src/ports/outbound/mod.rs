/// Outbound ports (driven ports) - infrastructure interfaces
///
/// The use cases reach the file system, the console and the operator only
/// through these traits.
pub mod cpe_dictionary_reader;
pub mod formatter;
pub mod mapping_prompt;
pub mod mapping_repository;
pub mod output_presenter;
pub mod port_catalog;
pub mod progress_reporter;
pub mod spdx_source_reader;

pub use cpe_dictionary_reader::CpeDictionaryReader;
pub use formatter::SbomFormatter;
pub use mapping_prompt::{MappingPrompt, PromptDecision};
pub use mapping_repository::MappingRepository;
pub use output_presenter::OutputPresenter;
pub use port_catalog::PortCatalog;
pub use progress_reporter::ProgressReporter;
pub use spdx_source_reader::SpdxSourceReader;
