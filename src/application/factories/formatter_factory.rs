use crate::adapters::outbound::formatters::{CycloneDxFormatter, CycloneDxXmlFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::SbomFormatter;

/// Factory for creating SBOM formatters
///
/// Lives in the application layer because it picks infrastructure adapters
/// based on an application-level choice.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates the formatter for one output encoding
    ///
    /// # Examples
    /// ```
    /// use vcpkg_sbom::application::dto::OutputFormat;
    /// use vcpkg_sbom::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::CycloneDxXml);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn SbomFormatter> {
        match format {
            OutputFormat::CycloneDxJson => Box::new(CycloneDxFormatter::new()),
            OutputFormat::CycloneDxXml => Box::new(CycloneDxXmlFormatter::new()),
        }
    }

    /// Progress line shown before rendering `format`
    ///
    /// # Examples
    /// ```
    /// use vcpkg_sbom::application::dto::OutputFormat;
    /// use vcpkg_sbom::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::CycloneDxJson);
    /// assert_eq!(message, "📝 Generating CycloneDX JSON output...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::CycloneDxJson => "📝 Generating CycloneDX JSON output...",
            OutputFormat::CycloneDxXml => "📝 Generating CycloneDX XML output...",
        }
    }
}
