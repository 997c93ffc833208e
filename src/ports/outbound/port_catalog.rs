use crate::shared::Result;
use std::path::Path;

/// PortCatalog port for enumerating the ports of a vcpkg checkout
pub trait PortCatalog {
    /// Lists the port names found under `<vcpkg_root>/ports`, sorted
    ///
    /// # Errors
    /// Returns an error if the ports directory is missing or unreadable
    fn list_ports(&self, vcpkg_root: &Path) -> Result<Vec<String>>;
}
