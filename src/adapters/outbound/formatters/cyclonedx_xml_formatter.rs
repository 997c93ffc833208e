use super::cyclonedx_formatter::{
    COMPONENT_TYPE_LIBRARY, SPEC_VERSION, TOOL_COMPONENT_TYPE, WEBSITE_REFERENCE_TYPE,
};
use crate::application::read_models::{ComponentView, SbomReadModel};
use crate::ports::outbound::SbomFormatter;
use crate::shared::Result;
use quick_xml::se::Serializer;
use serde::Serialize;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

fn namespace() -> String {
    format!("http://cyclonedx.org/schema/bom/{}", SPEC_VERSION)
}

#[derive(Debug, Serialize)]
#[serde(rename = "bom")]
struct XmlBom<'a> {
    #[serde(rename = "@xmlns")]
    xmlns: String,
    #[serde(rename = "@serialNumber")]
    serial_number: &'a str,
    #[serde(rename = "@version")]
    version: u32,
    metadata: XmlMetadata<'a>,
    components: XmlComponents<'a>,
}

#[derive(Debug, Serialize)]
struct XmlMetadata<'a> {
    timestamp: &'a str,
    tools: XmlTools<'a>,
}

#[derive(Debug, Serialize)]
struct XmlTools<'a> {
    components: XmlToolComponents<'a>,
}

#[derive(Debug, Serialize)]
struct XmlToolComponents<'a> {
    component: Vec<XmlToolComponent<'a>>,
}

#[derive(Debug, Serialize)]
struct XmlToolComponent<'a> {
    #[serde(rename = "@type")]
    component_type: &'static str,
    name: &'a str,
    version: &'a str,
}

#[derive(Debug, Serialize)]
struct XmlComponents<'a> {
    component: Vec<XmlComponent<'a>>,
}

#[derive(Debug, Serialize)]
struct XmlComponent<'a> {
    #[serde(rename = "@type")]
    component_type: &'static str,
    #[serde(rename = "@bom-ref")]
    bom_ref: &'a str,
    name: &'a str,
    version: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    licenses: Option<XmlLicenses<'a>>,
    cpe: &'a str,
    purl: &'a str,
    #[serde(rename = "externalReferences", skip_serializing_if = "Option::is_none")]
    external_references: Option<XmlExternalReferences<'a>>,
}

#[derive(Debug, Serialize)]
struct XmlLicenses<'a> {
    expression: &'a str,
}

#[derive(Debug, Serialize)]
struct XmlExternalReferences<'a> {
    reference: Vec<XmlReference<'a>>,
}

#[derive(Debug, Serialize)]
struct XmlReference<'a> {
    #[serde(rename = "@type")]
    reference_type: &'static str,
    url: &'a str,
}

/// CycloneDxXmlFormatter adapter for CycloneDX 1.6 XML
///
/// Carries the same information as the JSON document; element order follows
/// the CycloneDX XML schema.
pub struct CycloneDxXmlFormatter;

impl CycloneDxXmlFormatter {
    pub fn new() -> Self {
        Self
    }

    fn build_component(view: &ComponentView) -> XmlComponent<'_> {
        XmlComponent {
            component_type: COMPONENT_TYPE_LIBRARY,
            bom_ref: &view.bom_ref,
            name: &view.name,
            version: &view.version,
            description: view.description.as_deref(),
            licenses: view.license.as_ref().map(|license| XmlLicenses {
                expression: &license.expression,
            }),
            cpe: &view.cpe,
            purl: &view.purl,
            external_references: view.homepage.as_deref().map(|url| XmlExternalReferences {
                reference: vec![XmlReference {
                    reference_type: WEBSITE_REFERENCE_TYPE,
                    url,
                }],
            }),
        }
    }
}

impl Default for CycloneDxXmlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for CycloneDxXmlFormatter {
    fn format(&self, model: &SbomReadModel) -> Result<String> {
        let bom = XmlBom {
            xmlns: namespace(),
            serial_number: &model.metadata.serial_number,
            version: 1,
            metadata: XmlMetadata {
                timestamp: &model.metadata.timestamp,
                tools: XmlTools {
                    components: XmlToolComponents {
                        component: vec![XmlToolComponent {
                            component_type: TOOL_COMPONENT_TYPE,
                            name: &model.metadata.tool_name,
                            version: &model.metadata.tool_version,
                        }],
                    },
                },
            },
            components: XmlComponents {
                component: model.components.iter().map(Self::build_component).collect(),
            },
        };

        let mut body = String::new();
        let mut serializer = Serializer::new(&mut body);
        serializer.indent(' ', 2);
        bom.serialize(serializer)?;

        Ok(format!("{}\n{}\n", XML_DECLARATION, body))
    }
}
