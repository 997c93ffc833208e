/// Output encodings written by the `build` command
///
/// Every successful build writes all of them, side by side in the output
/// directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// CycloneDX JSON
    CycloneDxJson,
    /// CycloneDX XML
    CycloneDxXml,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 2] = [OutputFormat::CycloneDxJson, OutputFormat::CycloneDxXml];

    /// File name used inside the output directory
    pub fn file_name(self) -> &'static str {
        match self {
            OutputFormat::CycloneDxJson => "sbom.cyclonedx.json",
            OutputFormat::CycloneDxXml => "sbom.cyclonedx.xml",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::CycloneDxJson),
            "xml" => Ok(OutputFormat::CycloneDxXml),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'json' or 'xml'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::CycloneDxJson => write!(f, "json"),
            OutputFormat::CycloneDxXml => write!(f, "xml"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_file_names() {
        assert_eq!(OutputFormat::CycloneDxJson.file_name(), "sbom.cyclonedx.json");
        assert_eq!(OutputFormat::CycloneDxXml.file_name(), "sbom.cyclonedx.xml");
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::CycloneDxJson);
        assert_eq!(OutputFormat::from_str("xml").unwrap(), OutputFormat::CycloneDxXml);
    }

    #[test]
    fn test_from_str_invalid() {
        let error = OutputFormat::from_str("markdown").unwrap_err();
        assert!(error.contains("Invalid format: markdown"));
    }

    #[test]
    fn test_display_round_trip() {
        for format in OutputFormat::ALL {
            assert_eq!(OutputFormat::from_str(&format.to_string()).unwrap(), format);
        }
    }
}
