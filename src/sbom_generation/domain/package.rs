use crate::shared::Result;
use std::path::{Path, PathBuf};

/// Separator between the upstream version and the vcpkg port revision
const PORT_REVISION_SEPARATOR: char = '#';

/// NewType wrapper for a port name
///
/// The name is stored trimmed; it is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: String) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            anyhow::bail!("Package name cannot be empty");
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Key used for Mapping Table lookups and interactive insertions
    pub fn lookup_key(&self) -> String {
        self.0.to_lowercase()
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// NewType wrapper for a port version, possibly carrying a port revision
/// (`1.3.1#2`)
///
/// The string is kept exactly as recorded in `versionInfo`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageVersion(String);

impl PackageVersion {
    pub fn new(version: String) -> Result<Self> {
        if version.is_empty() {
            anyhow::bail!("Package version cannot be empty");
        }

        Ok(Self(version))
    }

    /// The raw version string, port revision included
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The version without its trailing port revision
    pub fn upstream(&self) -> &str {
        upstream_version(&self.0)
    }
}

impl std::fmt::Display for PackageVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strips the port revision (everything from the last `#`) from a version.
///
/// A `#` at index 0 is not treated as a separator.
pub fn upstream_version(version: &str) -> &str {
    match version.rfind(PORT_REVISION_SEPARATOR) {
        Some(index) if index > 0 => &version[..index],
        _ => version,
    }
}

/// PackageIdentity value object: the name/version pair being resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageIdentity {
    name: PackageName,
    version: PackageVersion,
}

impl PackageIdentity {
    pub fn new(name: String, version: String) -> Result<Self> {
        Ok(Self {
            name: PackageName::new(name)?,
            version: PackageVersion::new(version)?,
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn version(&self) -> &str {
        self.version.as_str()
    }

    pub fn package_name(&self) -> &PackageName {
        &self.name
    }

    pub fn package_version(&self) -> &PackageVersion {
        &self.version
    }
}

/// A port record extracted from one `vcpkg.spdx.json` document
#[derive(Debug, Clone, PartialEq)]
pub struct SourcePackage {
    identity: PackageIdentity,
    description: Option<String>,
    license: Option<String>,
    homepage: Option<String>,
    source_path: PathBuf,
}

impl SourcePackage {
    pub fn new(identity: PackageIdentity, source_path: PathBuf) -> Self {
        Self {
            identity,
            description: None,
            license: None,
            homepage: None,
            source_path,
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn with_license(mut self, license: Option<String>) -> Self {
        self.license = license;
        self
    }

    pub fn with_homepage(mut self, homepage: Option<String>) -> Self {
        self.homepage = homepage;
        self
    }

    pub fn identity(&self) -> &PackageIdentity {
        &self.identity
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn license(&self) -> Option<&str> {
        self.license.as_deref()
    }

    pub fn homepage(&self) -> Option<&str> {
        self.homepage.as_deref()
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_name_trims() {
        let name = PackageName::new("  zlib \n".to_string()).unwrap();
        assert_eq!(name.as_str(), "zlib");
    }

    #[test]
    fn test_package_name_whitespace_only() {
        assert!(PackageName::new("   ".to_string()).is_err());
    }

    #[test]
    fn test_package_name_lookup_key_lowercases() {
        let name = PackageName::new("LibPNG".to_string()).unwrap();
        assert_eq!(name.lookup_key(), "libpng");
        assert_eq!(name.as_str(), "LibPNG");
    }

    #[test]
    fn test_package_name_has_no_length_cap() {
        let long = "a".repeat(1024);
        assert_eq!(PackageName::new(long.clone()).unwrap().as_str(), long);
    }

    #[test]
    fn test_version_empty() {
        assert!(PackageVersion::new(String::new()).is_err());
    }

    #[test]
    fn test_version_kept_verbatim() {
        let version = PackageVersion::new(" 1.3.1#1 ".to_string()).unwrap();
        assert_eq!(version.as_str(), " 1.3.1#1 ");

        let long = "1.".repeat(200);
        assert_eq!(PackageVersion::new(long.clone()).unwrap().as_str(), long);
    }

    #[test]
    fn test_upstream_version_strips_port_revision() {
        assert_eq!(upstream_version("1.3#4"), "1.3");
    }

    #[test]
    fn test_upstream_version_without_revision() {
        assert_eq!(upstream_version("1.3"), "1.3");
    }

    #[test]
    fn test_upstream_version_leading_hash_is_not_a_separator() {
        assert_eq!(upstream_version("#4"), "#4");
    }

    #[test]
    fn test_upstream_version_uses_last_hash() {
        assert_eq!(upstream_version("2024#1#3"), "2024#1");
    }

    #[test]
    fn test_package_version_upstream() {
        let version = PackageVersion::new("1.3.1#1".to_string()).unwrap();
        assert_eq!(version.as_str(), "1.3.1#1");
        assert_eq!(version.upstream(), "1.3.1");
    }

    #[test]
    fn test_identity_accessors() {
        let identity = PackageIdentity::new("zlib".to_string(), "1.3.1".to_string()).unwrap();
        assert_eq!(identity.name(), "zlib");
        assert_eq!(identity.version(), "1.3.1");
    }

    #[test]
    fn test_source_package_builders() {
        let identity = PackageIdentity::new("zlib".to_string(), "1.3.1".to_string()).unwrap();
        let source = SourcePackage::new(identity, PathBuf::from("share/zlib/vcpkg.spdx.json"))
            .with_description(Some("compression library".to_string()))
            .with_license(Some("Zlib".to_string()))
            .with_homepage(None);

        assert_eq!(source.description(), Some("compression library"));
        assert_eq!(source.license(), Some("Zlib"));
        assert!(source.homepage().is_none());
        assert_eq!(
            source.source_path(),
            Path::new("share/zlib/vcpkg.spdx.json")
        );
    }
}
