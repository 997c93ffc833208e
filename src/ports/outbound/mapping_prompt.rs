use crate::sbom_generation::domain::CpeDictionaryEntry;

/// Operator answer for one unmapped port
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptDecision {
    /// Zero-based index into the offered suggestions
    Select(usize),
    Custom {
        vendor: String,
        product: String,
        purl_template: String,
    },
    Skip,
    Abort,
}

/// MappingPrompt port for interactively extending the Mapping Table
///
/// Only consulted when interactive mode is enabled and a port has no
/// mapping. Implementations block until the operator answers; end of
/// input counts as `Abort`.
pub trait MappingPrompt {
    fn prompt(
        &self,
        name: &str,
        version: &str,
        suggestions: &[CpeDictionaryEntry],
    ) -> PromptDecision;
}
