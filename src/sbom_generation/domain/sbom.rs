use crate::sbom_generation::domain::Component;

/// CycloneDX 1.1 bill of materials submitted to the governance server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sbom {
    serial_number: String,
    components: Vec<Component>,
}

impl Sbom {
    /// XML namespace of the CycloneDX schema revision the governance server ingests
    pub const NAMESPACE: &'static str = "http://cyclonedx.org/schema/bom/1.1";

    /// BOM document version
    pub const VERSION: &'static str = "1";

    pub fn new(serial_number: String, components: Vec<Component>) -> Self {
        Self {
            serial_number,
            components,
        }
    }

    pub fn namespace(&self) -> &'static str {
        Self::NAMESPACE
    }

    pub fn version(&self) -> &'static str {
        Self::VERSION
    }

    /// `urn:uuid:<uuid>` identifier, unique per build
    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
