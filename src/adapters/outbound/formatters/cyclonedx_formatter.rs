use crate::application::read_models::{ComponentView, SbomMetadataView, SbomReadModel};
use crate::ports::outbound::SbomFormatter;
use crate::shared::Result;
use serde::Serialize;

pub(super) const BOM_FORMAT: &str = "CycloneDX";
pub(super) const SPEC_VERSION: &str = "1.6";
pub(super) const COMPONENT_TYPE_LIBRARY: &str = "library";
pub(super) const TOOL_COMPONENT_TYPE: &str = "application";
pub(super) const WEBSITE_REFERENCE_TYPE: &str = "website";

const SCHEMA_URL: &str = "http://cyclonedx.org/schema/bom-1.6.schema.json";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Bom<'a> {
    #[serde(rename = "$schema")]
    schema: &'static str,
    bom_format: &'static str,
    spec_version: &'static str,
    serial_number: &'a str,
    version: u32,
    metadata: Metadata<'a>,
    components: Vec<Component<'a>>,
}

#[derive(Debug, Serialize)]
struct Metadata<'a> {
    timestamp: &'a str,
    tools: Tools<'a>,
}

#[derive(Debug, Serialize)]
struct Tools<'a> {
    components: Vec<ToolComponent<'a>>,
}

#[derive(Debug, Serialize)]
struct ToolComponent<'a> {
    #[serde(rename = "type")]
    component_type: &'static str,
    name: &'a str,
    version: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Component<'a> {
    #[serde(rename = "type")]
    component_type: &'static str,
    #[serde(rename = "bom-ref")]
    bom_ref: &'a str,
    name: &'a str,
    version: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    licenses: Vec<LicenseChoice<'a>>,
    cpe: &'a str,
    purl: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    external_references: Vec<ExternalReference<'a>>,
}

#[derive(Debug, Serialize)]
struct LicenseChoice<'a> {
    expression: &'a str,
}

#[derive(Debug, Serialize)]
struct ExternalReference<'a> {
    #[serde(rename = "type")]
    reference_type: &'static str,
    url: &'a str,
}

/// CycloneDxFormatter adapter for CycloneDX 1.6 JSON
pub struct CycloneDxFormatter;

impl CycloneDxFormatter {
    pub fn new() -> Self {
        Self
    }

    fn build_metadata(metadata: &SbomMetadataView) -> Metadata<'_> {
        Metadata {
            timestamp: &metadata.timestamp,
            tools: Tools {
                components: vec![ToolComponent {
                    component_type: TOOL_COMPONENT_TYPE,
                    name: &metadata.tool_name,
                    version: &metadata.tool_version,
                }],
            },
        }
    }

    fn build_component(view: &ComponentView) -> Component<'_> {
        Component {
            component_type: COMPONENT_TYPE_LIBRARY,
            bom_ref: &view.bom_ref,
            name: &view.name,
            version: &view.version,
            description: view.description.as_deref(),
            licenses: view
                .license
                .iter()
                .map(|license| LicenseChoice {
                    expression: &license.expression,
                })
                .collect(),
            cpe: &view.cpe,
            purl: &view.purl,
            external_references: view
                .homepage
                .iter()
                .map(|url| ExternalReference {
                    reference_type: WEBSITE_REFERENCE_TYPE,
                    url,
                })
                .collect(),
        }
    }
}

impl Default for CycloneDxFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for CycloneDxFormatter {
    fn format(&self, model: &SbomReadModel) -> Result<String> {
        let bom = Bom {
            schema: SCHEMA_URL,
            bom_format: BOM_FORMAT,
            spec_version: SPEC_VERSION,
            serial_number: &model.metadata.serial_number,
            version: 1,
            metadata: Self::build_metadata(&model.metadata),
            components: model.components.iter().map(Self::build_component).collect(),
        };

        let mut json = serde_json::to_string_pretty(&bom)?;
        json.push('\n');
        Ok(json)
    }
}
