use crate::sbom_generation::domain::Dependency;

/// A downloadable file attached to a release or a package version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub name: String,
    pub url: String,
}

impl Asset {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// A source repository found by the search query.
///
/// `release_assets` holds the files of the latest release and
/// `package_files` those of the latest version of the latest package; either
/// is `None` when the repository publishes no release or package.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Repository {
    pub name: String,
    pub name_with_owner: String,
    pub url: String,
    pub ssh_url: String,
    pub dependencies: Vec<Dependency>,
    pub release_assets: Option<Vec<Asset>>,
    pub package_files: Option<Vec<Asset>>,
}

impl Repository {
    /// The HTTPS URL with its scheme downgraded to `http`, as some governance
    /// applications were registered with it.
    pub fn http_url(&self) -> String {
        self.url.replacen("https", "http", 1)
    }
}
