use crate::application::read_models::SbomReadModel;
use crate::shared::Result;

/// SbomFormatter port for rendering a BOM document
///
/// One implementation per output encoding (CycloneDX JSON, CycloneDX XML).
pub trait SbomFormatter {
    /// Renders the read model into the target encoding
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &SbomReadModel) -> Result<String>;
}
