use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between a run that left
/// packages unresolved and a run that could not complete at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every discovered package was resolved (or skipped on request)
    Success = 0,
    /// One or more packages could not be resolved to a CPE/PURL identity
    UnresolvedPackages = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (missing mapping file, I/O error, aborted run, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::UnresolvedPackages => write!(f, "Unresolved Packages (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Fatal errors that stop a run before any output is written.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum SbomError {
    #[error("Mapping file not found: {path}\n\n💡 Hint: Create the mapping file or point to it with the --mapping option")]
    MappingFileNotFound { path: PathBuf },

    #[error("Failed to parse mapping file: {path}\nDetails: {details}\n\n💡 Hint: The mapping file must be a JSON object of pattern -> {{\"cpe\": ..., \"purl\": ...}}")]
    MappingParseError { path: PathBuf, details: String },

    #[error("No vcpkg.spdx.json files found under {root}\n\n💡 Hint: Point the build command at a vcpkg installed root (e.g. ./vcpkg_installed) after installing packages")]
    NoSourceFilesFound { root: PathBuf },

    #[error("Failed to update mapping file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that you have write permissions for the mapping file")]
    MappingPersistError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid path: {path}\nReason: {reason}\n\n💡 Hint: Please specify an existing directory")]
    InvalidPath { path: PathBuf, reason: String },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    #[error("Aborted by user request")]
    Aborted,
}
