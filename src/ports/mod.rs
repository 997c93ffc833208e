/// Ports module for the hexagonal architecture
///
/// Only driven (outbound) ports exist: the CLI calls the use cases directly.
pub mod outbound;
