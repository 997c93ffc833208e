use crate::shared::Result;
use std::path::{Path, PathBuf};

/// SpdxSourceReader port for locating and reading per-port SPDX documents
///
/// A vcpkg installed tree holds one `share/<port>/vcpkg.spdx.json` per
/// installed port. This port hides the directory walk and file access.
pub trait SpdxSourceReader {
    /// Finds every `**/share/<port>/vcpkg.spdx.json` below `installed_root`
    ///
    /// # Returns
    /// Paths of the discovered documents, sorted
    ///
    /// # Errors
    /// Returns an error if `installed_root` is not a readable directory
    fn discover_sources(&self, installed_root: &Path) -> Result<Vec<PathBuf>>;

    /// Reads one SPDX document
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or fails the file safety
    /// checks (symlink, size limit)
    fn read_source(&self, path: &Path) -> Result<String>;
}
