use crate::application::dto::AuditResponse;
use crate::shared::Result;

/// AuditReportFormatter adapter rendering the mapping coverage report
///
/// Output is a pretty-printed JSON array of `{"port": ..., "mapped": ...}`.
pub struct AuditReportFormatter;

impl AuditReportFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format(&self, response: &AuditResponse) -> Result<String> {
        let mut json = serde_json::to_string_pretty(&response.entries)?;
        json.push('\n');
        Ok(json)
    }
}

impl Default for AuditReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}
