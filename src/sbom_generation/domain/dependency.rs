/// Characters that make up requirement operators such as `>=`, `~>` or `^`
const OPERATOR_CHARS: [char; 6] = ['<', '>', '=', '~', '^', '!'];

/// A dependency as listed in one of a repository's dependency manifests.
///
/// `requirements` is the raw requirement string reported by the source host,
/// e.g. `">= 1.2.3"` or `"= 4.17.21"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    package_manager: String,
    package_name: String,
    requirements: String,
}

impl Dependency {
    pub fn new(
        package_manager: impl Into<String>,
        package_name: impl Into<String>,
        requirements: impl Into<String>,
    ) -> Self {
        Self {
            package_manager: package_manager.into(),
            package_name: package_name.into(),
            requirements: requirements.into(),
        }
    }

    pub fn package_manager(&self) -> &str {
        &self.package_manager
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn requirements(&self) -> &str {
        &self.requirements
    }

    /// The version with the relational operator prefix removed.
    ///
    /// Requirement strings of two bytes or fewer carry no version and yield
    /// `None`; every longer requirement yields a version. Leading operator
    /// characters (`<>=~^!`) and whitespace are dropped, so `">=1.2.3"`,
    /// `"= 1.2.3"` and `"^1.2.3"` all give `"1.2.3"` and a bare `"1.2.3"` is
    /// kept as is. A requirement made only of operators is kept verbatim,
    /// minus surrounding whitespace.
    pub fn pinned_version(&self) -> Option<&str> {
        if self.requirements.len() <= 2 {
            return None;
        }
        let version = self
            .requirements
            .trim_start_matches(|c: char| OPERATOR_CHARS.contains(&c) || c.is_whitespace())
            .trim_end();
        if version.is_empty() {
            Some(self.requirements.trim())
        } else {
            Some(version)
        }
    }

    pub fn ecosystem(&self) -> PackageManager {
        PackageManager::parse(&self.package_manager)
    }
}

/// Package managers the governance server can match components for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Maven,
    Npm,
    Nuget,
    Unsupported,
}

impl PackageManager {
    /// Case-insensitive lookup; anything unknown is `Unsupported`.
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "maven" => PackageManager::Maven,
            "npm" => PackageManager::Npm,
            "nuget" => PackageManager::Nuget,
            _ => PackageManager::Unsupported,
        }
    }

    /// Package-URL type for this ecosystem.
    pub fn purl_type(&self) -> Option<&'static str> {
        match self {
            PackageManager::Maven => Some("maven"),
            PackageManager::Npm => Some("npm"),
            PackageManager::Nuget => Some("nuget"),
            PackageManager::Unsupported => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pinned_version_strips_operator() {
        let dep = Dependency::new("NPM", "left-pad", "^ 1.0.0");
        assert_eq!(dep.pinned_version(), Some("1.0.0"));

        let dep = Dependency::new("MAVEN", "com.example:foo", ">=1.2.3");
        assert_eq!(dep.pinned_version(), Some("1.2.3"));
    }

    #[test]
    fn test_pinned_version_too_short() {
        assert_eq!(Dependency::new("npm", "a", "").pinned_version(), None);
        assert_eq!(Dependency::new("npm", "a", "=").pinned_version(), None);
        assert_eq!(Dependency::new("npm", "a", ">=").pinned_version(), None);
        assert_eq!(Dependency::new("npm", "a", ">=1").pinned_version(), Some("1"));
    }

    #[test]
    fn test_pinned_version_single_character_operator() {
        let dep = Dependency::new("npm", "left-pad", "^1.0.0");
        assert_eq!(dep.pinned_version(), Some("1.0.0"));

        let dep = Dependency::new("nuget", "Newtonsoft.Json", "= 13.0.1");
        assert_eq!(dep.pinned_version(), Some("13.0.1"));
    }

    #[test]
    fn test_pinned_version_operator_only() {
        assert_eq!(Dependency::new("npm", "a", ">= ").pinned_version(), Some(">="));
        assert_eq!(Dependency::new("npm", "a", "~> ").pinned_version(), Some("~>"));
    }

    #[test]
    fn test_pinned_version_bare_version_is_kept() {
        assert_eq!(Dependency::new("npm", "a", "1.2.3").pinned_version(), Some("1.2.3"));
        assert_eq!(Dependency::new("npm", "a", "~1.2.3").pinned_version(), Some("1.2.3"));
    }

    #[test]
    fn test_pinned_version_length_counts_bytes() {
        // two characters, three bytes
        assert_eq!(Dependency::new("npm", "a", "é1").pinned_version(), Some("é1"));
        assert_eq!(Dependency::new("npm", "a", "1.").pinned_version(), None);
    }

    #[test]
    fn test_package_manager_parse_case_insensitive() {
        assert_eq!(PackageManager::parse("MAVEN"), PackageManager::Maven);
        assert_eq!(PackageManager::parse("Npm"), PackageManager::Npm);
        assert_eq!(PackageManager::parse("nuget"), PackageManager::Nuget);
        assert_eq!(PackageManager::parse("PIP"), PackageManager::Unsupported);
        assert_eq!(PackageManager::parse(""), PackageManager::Unsupported);
    }

    #[test]
    fn test_purl_type() {
        assert_eq!(PackageManager::Maven.purl_type(), Some("maven"));
        assert_eq!(PackageManager::Npm.purl_type(), Some("npm"));
        assert_eq!(PackageManager::Nuget.purl_type(), Some("nuget"));
        assert_eq!(PackageManager::Unsupported.purl_type(), None);
    }
}
