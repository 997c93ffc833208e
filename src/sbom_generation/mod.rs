/// Domain layer - Mapping resolution, CPE dictionary and SBOM metadata
///
/// Pure business logic with no I/O. Everything here is driven by the
/// application layer through plain values.
pub mod domain;
pub mod policies;
pub mod services;
