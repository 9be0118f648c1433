pub mod purl_builder;
pub mod sbom_builder;

pub use purl_builder::PurlBuilder;
pub use sbom_builder::SbomBuilder;
