/// Formatter adapters for CycloneDX documents and the audit report
mod audit_report_formatter;
mod cyclonedx_formatter;
mod cyclonedx_xml_formatter;

pub use audit_report_formatter::AuditReportFormatter;
pub use cyclonedx_formatter::CycloneDxFormatter;
pub use cyclonedx_xml_formatter::CycloneDxXmlFormatter;
