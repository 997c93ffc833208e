use crate::sbom_generation::domain::CpeDictionary;
use crate::shared::Result;
use std::path::Path;

/// CpeDictionaryReader port for the optional CPE vendor/product dataset
pub trait CpeDictionaryReader {
    /// Loads the dictionary from a delimited file with `vendor` and
    /// `product` columns.
    ///
    /// A missing file is not an error: an empty dictionary is returned.
    fn load_dictionary(&self, path: &Path) -> Result<CpeDictionary>;
}
