/// SBOM generation domain
///
/// Pure logic turning repository dependency records into a CycloneDX bill of
/// materials. Nothing in here performs I/O.
pub mod domain;
pub mod services;
