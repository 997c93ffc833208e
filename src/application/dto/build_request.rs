use crate::sbom_generation::policies::VersionMode;
use crate::sbom_generation::services::DEFAULT_SUGGESTION_LIMIT;
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::path::PathBuf;

/// BuildRequest - input of the `build` use case
#[derive(Debug, Clone)]
pub struct BuildRequest {
    /// vcpkg installed root searched for `share/<port>/vcpkg.spdx.json`
    pub installed_root: PathBuf,
    /// Mapping Table file
    pub mapping_path: PathBuf,
    /// CPE dictionary CSV; may point at a missing file
    pub cpedict_path: PathBuf,
    /// Ask the operator about unmapped ports
    pub edit_mapping: bool,
    /// Omit unmapped ports instead of failing
    pub skip_missing: bool,
    pub version_mode: VersionMode,
    pub suggestion_limit: usize,
}

impl BuildRequest {
    pub fn new(installed_root: PathBuf, mapping_path: PathBuf, cpedict_path: PathBuf) -> Self {
        Self {
            installed_root,
            mapping_path,
            cpedict_path,
            edit_mapping: false,
            skip_missing: false,
            version_mode: VersionMode::default(),
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }

    pub fn with_edit_mapping(mut self, edit_mapping: bool) -> Self {
        self.edit_mapping = edit_mapping;
        self
    }

    pub fn with_skip_missing(mut self, skip_missing: bool) -> Self {
        self.skip_missing = skip_missing;
        self
    }

    pub fn with_version_mode(mut self, version_mode: VersionMode) -> Self {
        self.version_mode = version_mode;
        self
    }

    pub fn with_suggestion_limit(mut self, suggestion_limit: usize) -> Self {
        self.suggestion_limit = suggestion_limit;
        self
    }

    /// # Errors
    /// Returns `Validation` when the suggestion limit is zero
    pub fn validate(&self) -> Result<()> {
        if self.suggestion_limit == 0 {
            return Err(SbomError::Validation {
                message: "suggestion limit must be at least 1".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> BuildRequest {
        BuildRequest::new(
            PathBuf::from("vcpkg_installed"),
            PathBuf::from("mapping.json"),
            PathBuf::from("cpedict/data/cpes.csv"),
        )
    }

    #[test]
    fn test_defaults() {
        let request = request();

        assert!(!request.edit_mapping);
        assert!(!request.skip_missing);
        assert_eq!(request.version_mode, VersionMode::Raw);
        assert_eq!(request.suggestion_limit, 3);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_with_setters() {
        let request = request()
            .with_edit_mapping(true)
            .with_skip_missing(true)
            .with_version_mode(VersionMode::Upstream)
            .with_suggestion_limit(5);

        assert!(request.edit_mapping);
        assert!(request.skip_missing);
        assert_eq!(request.version_mode, VersionMode::Upstream);
        assert_eq!(request.suggestion_limit, 5);
    }

    #[test]
    fn test_zero_suggestion_limit_is_invalid() {
        let err = request().with_suggestion_limit(0).validate().unwrap_err();
        assert!(err.to_string().contains("suggestion limit"));
    }
}
