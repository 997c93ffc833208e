mod license_selection;
mod version_policy;

pub use license_selection::LicenseSelection;
pub use version_policy::VersionMode;
