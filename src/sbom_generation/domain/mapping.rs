use super::pattern::{self, GlobPattern};
use crate::shared::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// PURL template used when an interactive mapping does not supply one
pub const DEFAULT_PURL_TEMPLATE: &str = "pkg:generic/{port}@{version}";

/// One Mapping Table value: CPE and PURL templates for a port or port pattern
///
/// Any other keys the user keeps in an entry are carried in `extra` and
/// written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MappingEntry {
    #[serde(default)]
    pub cpe: String,
    #[serde(default)]
    pub purl: String,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl MappingEntry {
    pub fn new(cpe: impl Into<String>, purl: impl Into<String>) -> Self {
        Self {
            cpe: cpe.into(),
            purl: purl.into(),
            extra: IndexMap::new(),
        }
    }

    /// Builds an entry from a vendor/product pair chosen by the operator.
    ///
    /// Vendor and product are trimmed and lower-cased into the fixed
    /// template `cpe:2.3:a:<vendor>:<product>:{version}:*:*:*:*:*:*:*`.
    /// A blank PURL template falls back to [`DEFAULT_PURL_TEMPLATE`].
    ///
    /// # Errors
    /// Returns an error if vendor or product is blank
    pub fn from_vendor_product(vendor: &str, product: &str, purl_template: &str) -> Result<Self> {
        let vendor = vendor.trim().to_lowercase();
        let product = product.trim().to_lowercase();
        if vendor.is_empty() || product.is_empty() {
            anyhow::bail!("Vendor and product must be provided for mapping entry");
        }

        let purl = match purl_template.trim() {
            "" => DEFAULT_PURL_TEMPLATE,
            template => template,
        };

        Ok(Self::new(
            format!("cpe:2.3:a:{}:{}:{{version}}:*:*:*:*:*:*:*", vendor, product),
            purl,
        ))
    }
}

/// Result of a successful Mapping Table lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappingMatch<'a> {
    pub entry: &'a MappingEntry,
    /// The key that matched: the name itself or a glob pattern
    pub pattern: &'a str,
}

impl MappingMatch<'_> {
    pub fn is_wildcard(&self) -> bool {
        pattern::has_wildcard(self.pattern)
    }
}

/// MappingTable - ordered pattern -> MappingEntry table
///
/// Keys are literal port names or glob patterns. Insertion order is the
/// file order and decides which of several matching wildcard patterns
/// wins. The table tracks whether it was modified so that it is written
/// back only when needed. Wildcard keys are compiled once, in table order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MappingTable {
    entries: IndexMap<String, MappingEntry>,
    globs: Vec<GlobPattern>,
    dirty: bool,
}

impl MappingTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: IndexMap<String, MappingEntry>) -> Self {
        let globs = entries
            .keys()
            .filter_map(|key| GlobPattern::compile(key))
            .collect();
        Self {
            entries,
            globs,
            dirty: false,
        }
    }

    /// Finds the entry for `name`.
    ///
    /// An exact key always wins. Otherwise the first wildcard pattern (in
    /// table order) that matches is returned. Keys without metacharacters
    /// only ever match exactly.
    pub fn find(&self, name: &str) -> Option<MappingMatch<'_>> {
        if let Some((pattern, entry)) = self.entries.get_key_value(name) {
            return Some(MappingMatch { entry, pattern });
        }

        self.globs
            .iter()
            .find(|glob| glob.is_match(name))
            .and_then(|glob| self.entries.get_key_value(glob.as_str()))
            .map(|(pattern, entry)| MappingMatch { entry, pattern })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Inserts (or replaces) an entry and marks the table dirty
    pub fn insert(&mut self, key: impl Into<String>, entry: MappingEntry) {
        let key = key.into();
        if !self.entries.contains_key(&key) {
            self.globs.extend(GlobPattern::compile(&key));
        }
        self.entries.insert(key, entry);
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &IndexMap<String, MappingEntry> {
        &self.entries
    }
}
