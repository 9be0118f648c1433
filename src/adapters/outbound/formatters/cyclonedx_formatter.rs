use crate::ports::outbound::SbomFormatter;
use crate::sbom_generation::domain::{Component, Sbom};
use crate::shared::Result;
use anyhow::Context;
use serde::{Deserialize, Serialize};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename = "bom")]
struct Bom {
    #[serde(rename = "@xmlns", default)]
    xmlns: String,
    #[serde(rename = "@version")]
    version: String,
    #[serde(rename = "@serialNumber")]
    serial_number: String,
    #[serde(default)]
    components: Components,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Components {
    #[serde(rename = "component", default)]
    component: Vec<XmlComponent>,
}

#[derive(Debug, Serialize, Deserialize)]
struct XmlComponent {
    #[serde(rename = "@type")]
    component_type: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    group: Option<String>,
    name: String,
    version: String,
    purl: String,
}

/// CycloneDxFormatter adapter for generating CycloneDX 1.1 XML
///
/// This is the document shape the governance server's `sources/cyclone` scan
/// endpoint ingests. Non-Maven components carry no `group` element.
pub struct CycloneDxFormatter;

impl CycloneDxFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Reads back a document produced by [`SbomFormatter::format`].
    pub fn parse(&self, xml: &str) -> Result<Sbom> {
        let bom: Bom = quick_xml::de::from_str(xml).context("Failed to parse CycloneDX XML")?;
        let components = bom
            .components
            .component
            .into_iter()
            .map(|c| Component::new(c.group, c.name, c.version, c.purl))
            .collect();
        Ok(Sbom::new(bom.serial_number, components))
    }

    fn build_components(&self, components: &[Component]) -> Vec<XmlComponent> {
        components
            .iter()
            .map(|c| XmlComponent {
                component_type: c.component_type().to_string(),
                group: c.group().map(str::to_string),
                name: c.name().to_string(),
                version: c.version().to_string(),
                purl: c.purl().to_string(),
            })
            .collect()
    }
}

impl Default for CycloneDxFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for CycloneDxFormatter {
    fn format(&self, sbom: &Sbom) -> Result<String> {
        let bom = Bom {
            xmlns: sbom.namespace().to_string(),
            version: sbom.version().to_string(),
            serial_number: sbom.serial_number().to_string(),
            components: Components {
                component: self.build_components(sbom.components()),
            },
        };

        let body = quick_xml::se::to_string(&bom).context("Failed to serialize CycloneDX XML")?;
        Ok(format!("{}{}", XML_DECLARATION, body))
    }
}
