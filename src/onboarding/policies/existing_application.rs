use crate::onboarding::domain::{Application, Repository};

/// Decides whether a repository is already onboarded.
///
/// A repository counts as onboarded when an application's configured source
/// URL equals its HTTPS URL, that URL downgraded to `http`, or its SSH URL.
/// Applications without a configured URL never match.
pub struct ExistingApplicationPolicy;

impl ExistingApplicationPolicy {
    pub fn find<'a>(
        applications: &'a [Application],
        repository: &Repository,
    ) -> Option<&'a Application> {
        let http_url = repository.http_url();
        applications.iter().find(|application| {
            let url = application.repository_url.as_str();
            !url.is_empty() && (url == repository.url || url == http_url || url == repository.ssh_url)
        })
    }
}
