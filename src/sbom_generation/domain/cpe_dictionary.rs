use std::collections::HashMap;

/// A (vendor, product) pair from the CPE dictionary dataset
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CpeDictionaryEntry {
    pub vendor: String,
    pub product: String,
}

impl CpeDictionaryEntry {
    pub fn new(vendor: impl Into<String>, product: impl Into<String>) -> Self {
        Self {
            vendor: vendor.into(),
            product: product.into(),
        }
    }
}

impl std::fmt::Display for CpeDictionaryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.vendor, self.product)
    }
}

/// CpeDictionary - read-only index over the CPE vendor/product dataset
///
/// Built once per run. Two lookup structures are kept next to the raw
/// entries:
/// - `by_product`: lower-cased product -> every entry with that product
/// - `by_vendor`: lower-cased vendor -> (lower-cased product -> canonical
///   product spelling). Later rows overwrite earlier ones.
///
/// An empty dictionary is a valid value and stands for "no dictionary".
#[derive(Debug, Clone, Default)]
pub struct CpeDictionary {
    entries: Vec<CpeDictionaryEntry>,
    by_product: HashMap<String, Vec<CpeDictionaryEntry>>,
    by_vendor: HashMap<String, HashMap<String, String>>,
}

impl CpeDictionary {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds the index from raw rows.
    ///
    /// Rows whose vendor or product is blank after trimming are skipped.
    pub fn from_entries<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = CpeDictionaryEntry>,
    {
        let mut dictionary = Self::default();

        for row in rows {
            let vendor = row.vendor.trim();
            let product = row.product.trim();
            if vendor.is_empty() || product.is_empty() {
                continue;
            }

            let entry = CpeDictionaryEntry::new(vendor, product);
            let product_lower = product.to_lowercase();
            let vendor_lower = vendor.to_lowercase();

            dictionary
                .by_product
                .entry(product_lower.clone())
                .or_default()
                .push(entry.clone());
            dictionary
                .by_vendor
                .entry(vendor_lower)
                .or_default()
                .insert(product_lower, product.to_string());
            dictionary.entries.push(entry);
        }

        dictionary
    }

    pub fn entries(&self) -> &[CpeDictionaryEntry] {
        &self.entries
    }

    /// All entries whose lower-cased product equals `product_lower`
    pub fn products_named(&self, product_lower: &str) -> &[CpeDictionaryEntry] {
        self.by_product
            .get(product_lower)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Lower-cased product -> canonical spelling for one vendor
    pub fn vendor_products(&self, vendor_lower: &str) -> Option<&HashMap<String, String>> {
        self.by_vendor
            .get(vendor_lower)
            .filter(|products| !products.is_empty())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
