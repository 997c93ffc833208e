/// Data Transfer Objects for the application layer
///
/// Requests carry already-merged CLI/config values; responses carry domain
/// results for the CLI to render.
mod audit;
mod build_request;
mod build_response;
mod output_format;

pub use audit::{AuditRequest, AuditResponse, PortAuditEntry};
pub use build_request::BuildRequest;
pub use build_response::BuildResponse;
pub use output_format::OutputFormat;
