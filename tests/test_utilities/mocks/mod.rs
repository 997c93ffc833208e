/// Mock implementations for testing
mod mock_cpe_dictionary_reader;
mod mock_mapping_prompt;
mod mock_mapping_repository;
mod mock_port_catalog;
mod mock_progress_reporter;
mod mock_spdx_source_reader;

pub use mock_cpe_dictionary_reader::MockCpeDictionaryReader;
pub use mock_mapping_prompt::MockMappingPrompt;
pub use mock_mapping_repository::MockMappingRepository;
pub use mock_port_catalog::MockPortCatalog;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_spdx_source_reader::MockSpdxSourceReader;
