/// SPDX placeholder values that carry no license information
const NON_LICENSE_VALUES: [&str; 2] = ["NOASSERTION", "NONE"];

/// LicenseSelection policy for picking the license expression of a port
///
/// Priority order:
/// 1. `licenseConcluded` (if it is a real expression)
/// 2. `licenseDeclared` (if it is a real expression)
pub struct LicenseSelection;

impl LicenseSelection {
    /// Selects the license expression to put in the BOM
    ///
    /// # Arguments
    /// * `concluded` - `licenseConcluded` of the SPDX port package
    /// * `declared` - `licenseDeclared` of the SPDX port package
    ///
    /// # Returns
    /// The selected expression, or None if neither field carries one
    pub fn select(concluded: Option<&str>, declared: Option<&str>) -> Option<String> {
        concluded
            .and_then(Self::meaningful)
            .or_else(|| declared.and_then(Self::meaningful))
    }

    fn meaningful(value: &str) -> Option<String> {
        let value = value.trim();
        if value.is_empty() || NON_LICENSE_VALUES.contains(&value) {
            None
        } else {
            Some(value.to_string())
        }
    }
}
