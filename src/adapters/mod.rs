/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: file system, console
/// and document formatters.
pub mod outbound;
