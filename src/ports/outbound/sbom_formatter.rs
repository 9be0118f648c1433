use crate::sbom_generation::domain::Sbom;
use crate::shared::Result;

/// SbomFormatter port for serializing an SBOM into its wire format
pub trait SbomFormatter {
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, sbom: &Sbom) -> Result<String>;
}
