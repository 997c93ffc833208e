use crate::sbom_generation::domain::PackageVersion;

/// VersionMode policy deciding which version string replaces `{version}`
/// in CPE and PURL templates.
///
/// One mode applies to the whole run and to both templates. The BOM
/// component `version` field always carries the raw version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VersionMode {
    /// Raw vcpkg version, port revision included (`1.3.1#2`)
    #[default]
    Raw,
    /// Upstream version with the port revision stripped (`1.3.1`)
    Upstream,
}

impl VersionMode {
    /// Returns the version string to substitute for `{version}`
    pub fn apply<'a>(&self, version: &'a PackageVersion) -> &'a str {
        match self {
            VersionMode::Raw => version.as_str(),
            VersionMode::Upstream => version.upstream(),
        }
    }
}

impl std::str::FromStr for VersionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "raw" => Ok(VersionMode::Raw),
            "upstream" => Ok(VersionMode::Upstream),
            _ => Err(format!(
                "Invalid version mode: {}. Please specify 'raw' or 'upstream'",
                s
            )),
        }
    }
}

impl std::fmt::Display for VersionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VersionMode::Raw => write!(f, "raw"),
            VersionMode::Upstream => write!(f, "upstream"),
        }
    }
}
