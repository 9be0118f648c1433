/// A single SBOM entry.
///
/// Components are created by the SBOM builder and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    group: Option<String>,
    name: String,
    version: String,
    purl: String,
}

impl Component {
    /// CycloneDX component type; everything this tool emits is a library.
    pub const COMPONENT_TYPE: &'static str = "library";

    pub fn new(group: Option<String>, name: String, version: String, purl: String) -> Self {
        Self {
            group,
            name,
            version,
            purl,
        }
    }

    pub fn component_type(&self) -> &'static str {
        Self::COMPONENT_TYPE
    }

    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn purl(&self) -> &str {
        &self.purl
    }
}
