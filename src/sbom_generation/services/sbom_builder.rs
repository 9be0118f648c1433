use crate::sbom_generation::domain::{Component, Dependency, PackageManager, Sbom};
use crate::sbom_generation::services::PurlBuilder;
use crate::shared::error::AuditError;
use crate::shared::Result;
use uuid::Uuid;

/// SbomBuilder service turning dependency records into a CycloneDX BOM
///
/// Dependencies without a usable version and dependencies of unsupported
/// package managers are dropped silently. Component order follows input order.
pub struct SbomBuilder;

impl SbomBuilder {
    /// Builds an SBOM with a fresh `urn:uuid` serial number.
    ///
    /// # Errors
    /// Returns [`AuditError::InvalidPackageName`] when a Maven dependency is not
    /// named `<group>:<artifact>`.
    pub fn build(dependencies: &[Dependency]) -> Result<Sbom> {
        let mut components = Vec::with_capacity(dependencies.len());
        for dependency in dependencies {
            if let Some(component) = Self::build_component(dependency)? {
                components.push(component);
            }
        }

        let serial_number = format!("urn:uuid:{}", Uuid::new_v4());
        Ok(Sbom::new(serial_number, components))
    }

    fn build_component(dependency: &Dependency) -> Result<Option<Component>> {
        let Some(version) = dependency.pinned_version() else {
            return Ok(None);
        };

        let component = match dependency.ecosystem() {
            PackageManager::Maven => {
                let (group, artifact) = Self::split_maven_coordinates(dependency)?;
                let purl = PurlBuilder::maven_jar(group, artifact, version)?;
                Component::new(
                    Some(group.to_string()),
                    artifact.to_string(),
                    version.to_string(),
                    purl,
                )
            }
            ecosystem @ (PackageManager::Npm | PackageManager::Nuget) => {
                let purl_type = ecosystem.purl_type().unwrap_or_default();
                let purl = PurlBuilder::unqualified(purl_type, dependency.package_name(), version)?;
                Component::new(
                    None,
                    dependency.package_name().to_string(),
                    version.to_string(),
                    purl,
                )
            }
            PackageManager::Unsupported => return Ok(None),
        };

        Ok(Some(component))
    }

    /// Splits `group:artifact` on the first colon.
    fn split_maven_coordinates(dependency: &Dependency) -> Result<(&str, &str)> {
        let invalid = |reason: &str| AuditError::InvalidPackageName {
            package_manager: dependency.package_manager().to_string(),
            package_name: dependency.package_name().to_string(),
            reason: reason.to_string(),
        };

        let (group, artifact) = dependency
            .package_name()
            .split_once(':')
            .ok_or_else(|| invalid("expected '<group>:<artifact>'"))?;

        if group.is_empty() {
            return Err(invalid("group id is empty").into());
        }
        if artifact.is_empty() {
            return Err(invalid("artifact id is empty").into());
        }

        Ok((group, artifact))
    }
}
