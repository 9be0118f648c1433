use crate::shared::Result;
use anyhow::Context;
use packageurl::PackageUrl;

/// Builds canonical package-URL strings.
///
/// Encoding is delegated to the `packageurl` crate; the governance server
/// matches components on the exact string, so nothing here formats purls by
/// hand.
pub struct PurlBuilder;

impl PurlBuilder {
    /// `pkg:maven/<group>/<artifact>@<version>?type=jar`
    pub fn maven_jar(group: &str, artifact: &str, version: &str) -> Result<String> {
        let mut purl = PackageUrl::new("maven", artifact)
            .with_context(|| format!("Invalid maven artifact name '{}'", artifact))?;
        purl.with_namespace(group).with_version(version);
        purl.add_qualifier("type", "jar")
            .context("Invalid package-URL qualifier")?;
        Ok(purl.to_string())
    }

    /// `pkg:<purl_type>/<name>@<version>` with no namespace and no qualifiers
    pub fn unqualified(purl_type: &str, name: &str, version: &str) -> Result<String> {
        let mut purl = PackageUrl::new(purl_type, name)
            .with_context(|| format!("Invalid {} package name '{}'", purl_type, name))?;
        purl.with_version(version);
        Ok(purl.to_string())
    }
}
