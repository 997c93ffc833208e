/// Filesystem adapters for file I/O operations
mod file_reader;
mod file_writer;
mod mapping_repository;

pub use file_reader::{FileSystemReader, SPDX_FILE_NAME};
pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use mapping_repository::JsonMappingRepository;
