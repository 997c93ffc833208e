use crate::sbom_generation::domain::{CpeDictionary, CpeDictionaryEntry};
use std::collections::HashSet;

/// Default number of suggestions shown for an unmapped port
pub const DEFAULT_SUGGESTION_LIMIT: usize = 3;

/// Dictionary products shorter than this are never suggested because they
/// happen to be a substring of the port name
const MIN_CONTAINED_PRODUCT_LENGTH: usize = 4;

/// SuggestionEngine service - proposes vendor/product pairs for unmapped ports
///
/// Candidates are collected in three phases, stopping as soon as `limit`
/// unique pairs are found:
/// 1. Dictionary products equal to the lower-cased port name
/// 2. Dictionary products equal to the name with `-` replaced by `_`
/// 3. Substring containment in either direction, in dictionary order
pub struct SuggestionEngine;

impl SuggestionEngine {
    pub fn suggest(
        name: &str,
        dictionary: &CpeDictionary,
        limit: usize,
    ) -> Vec<CpeDictionaryEntry> {
        let name_lower = name.trim().to_lowercase();
        if name_lower.is_empty() || limit == 0 {
            return Vec::new();
        }

        let mut collector = Collector::new(limit);

        if collector.extend(dictionary.products_named(&name_lower)) {
            return collector.finish();
        }

        let normalized = name_lower.replace('-', "_");
        if collector.extend(dictionary.products_named(&normalized)) {
            return collector.finish();
        }

        let partial = dictionary.entries().iter().filter(|entry| {
            let product_lower = entry.product.to_lowercase();
            product_lower.contains(&name_lower)
                || (product_lower.len() >= MIN_CONTAINED_PRODUCT_LENGTH
                    && name_lower.contains(&product_lower))
        });
        collector.extend(partial);

        collector.finish()
    }
}

/// Ordered, de-duplicated accumulator with a fixed capacity
struct Collector<'a> {
    limit: usize,
    seen: HashSet<&'a CpeDictionaryEntry>,
    found: Vec<CpeDictionaryEntry>,
}

impl<'a> Collector<'a> {
    fn new(limit: usize) -> Self {
        Self {
            limit,
            seen: HashSet::new(),
            found: Vec::new(),
        }
    }

    /// Adds candidates; returns true once the limit is reached
    fn extend<I>(&mut self, candidates: I) -> bool
    where
        I: IntoIterator<Item = &'a CpeDictionaryEntry>,
    {
        for candidate in candidates {
            if !self.seen.insert(candidate) {
                continue;
            }
            self.found.push(candidate.clone());
            if self.found.len() >= self.limit {
                return true;
            }
        }
        false
    }

    fn finish(self) -> Vec<CpeDictionaryEntry> {
        self.found
    }
}
