use super::template_renderer::{TemplateRenderer, PORT_PLACEHOLDER};
use crate::sbom_generation::domain::pattern;
use crate::sbom_generation::domain::{
    CpeDictionary, MappingTable, PackageError, PackageIdentity, ResolvedIdentity,
};
use crate::sbom_generation::policies::VersionMode;
use packageurl::PackageUrl;
use std::str::FromStr;

/// Number of colon-separated fields in a CPE 2.3 formatted string
const CPE_FIELD_COUNT: usize = 13;

const CPE_VENDOR_FIELD: usize = 3;
const CPE_PRODUCT_FIELD: usize = 4;

/// MappingResolver service - turns a port name/version into a CPE and PURL
///
/// Resolution steps:
/// 1. Look the lower-cased port name up in the Mapping Table
/// 2. Render the CPE template field by field; when the product field uses
///    `{port}`, the CPE dictionary supplies the canonical product spelling
/// 3. Render the PURL template and validate it against the purl grammar
///
/// An empty dictionary disables step 2's lookup and the raw port name is
/// used as product.
pub struct MappingResolver;

impl MappingResolver {
    /// Resolves one port against the Mapping Table and CPE dictionary
    ///
    /// # Arguments
    /// * `identity` - Port name and version
    /// * `table` - Mapping Table to look the port up in
    /// * `dictionary` - CPE dictionary (may be empty)
    /// * `version_mode` - Which version string replaces `{version}`
    ///
    /// # Errors
    /// - `MappingMissing` if no table key matches (without suggestions)
    /// - `IncompleteMapping` if the rendered CPE or PURL is blank
    /// - `InvalidPurl` if the rendered PURL does not parse
    pub fn resolve(
        identity: &PackageIdentity,
        table: &MappingTable,
        dictionary: &CpeDictionary,
        version_mode: VersionMode,
    ) -> Result<ResolvedIdentity, PackageError> {
        let name = identity.name();
        let version = version_mode.apply(identity.package_version());

        let found = table
            .find(&identity.package_name().lookup_key())
            .ok_or_else(|| PackageError::MappingMissing {
                name: name.to_string(),
                version: identity.version().to_string(),
                suggestions: Vec::new(),
            })?;

        let cpe = Self::render_cpe(&found.entry.cpe, name, version, Some(found.pattern), dictionary)
            .trim()
            .to_string();
        let purl = TemplateRenderer::render(&found.entry.purl, name, version)
            .trim()
            .to_string();

        if cpe.is_empty() || purl.is_empty() {
            return Err(PackageError::IncompleteMapping {
                name: name.to_string(),
            });
        }

        if let Err(e) = PackageUrl::from_str(&purl) {
            return Err(PackageError::InvalidPurl {
                name: name.to_string(),
                purl,
                details: e.to_string(),
            });
        }

        Ok(ResolvedIdentity {
            name: name.to_string(),
            version: identity.version().to_string(),
            cpe,
            purl,
            matched_pattern: found.pattern.to_string(),
        })
    }

    /// Renders a CPE template.
    ///
    /// Templates that are not 13 colon-separated fields are rendered as a
    /// whole string without any field logic.
    pub fn render_cpe(
        template: &str,
        name: &str,
        version: &str,
        matched_pattern: Option<&str>,
        dictionary: &CpeDictionary,
    ) -> String {
        let fields: Vec<&str> = template.split(':').collect();
        if fields.len() != CPE_FIELD_COUNT {
            return TemplateRenderer::render(template, name, version);
        }

        let vendor = TemplateRenderer::render(fields[CPE_VENDOR_FIELD], name, version)
            .trim()
            .to_string();

        let product_template = fields[CPE_PRODUCT_FIELD];
        let product_template = if product_template.contains(PORT_PLACEHOLDER) {
            let canonical = Self::choose_product(name, &vendor, matched_pattern, dictionary);
            product_template.replace(PORT_PLACEHOLDER, &canonical)
        } else {
            product_template.to_string()
        };
        let product = TemplateRenderer::render(&product_template, name, version)
            .trim()
            .to_string();

        let rendered: Vec<String> = fields
            .iter()
            .enumerate()
            .map(|(idx, field)| match idx {
                CPE_VENDOR_FIELD => vendor.clone(),
                CPE_PRODUCT_FIELD => product.clone(),
                _ => TemplateRenderer::render(field, name, version).trim().to_string(),
            })
            .collect();

        rendered.join(":")
    }

    /// Picks the CPE product spelling for a port under a given vendor.
    ///
    /// Candidates, first hit wins: the lower-cased name, the name with `-`
    /// replaced by `_`, the literal prefix of a wildcard pattern, and the
    /// vendor itself. Falls back to the raw port name.
    pub fn choose_product(
        name: &str,
        vendor: &str,
        matched_pattern: Option<&str>,
        dictionary: &CpeDictionary,
    ) -> String {
        let Some(products) = dictionary.vendor_products(&vendor.to_lowercase()) else {
            return name.to_string();
        };

        let name_lower = name.to_lowercase();
        let normalized = name_lower.replace('-', "_");
        let prefix = matched_pattern
            .filter(|p| pattern::has_wildcard(p))
            .map(pattern::literal_prefix)
            .filter(|p| !p.is_empty());

        [
            Some(name_lower),
            Some(normalized),
            prefix,
            Some(vendor.to_lowercase()),
        ]
        .into_iter()
        .flatten()
        .find_map(|candidate| products.get(&candidate).cloned())
        .unwrap_or_else(|| name.to_string())
    }
}
