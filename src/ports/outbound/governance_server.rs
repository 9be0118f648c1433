use crate::onboarding::domain::{Application, Organization, ScanTicket};
use crate::sbom_generation::domain::Sbom;
use crate::shared::Result;
use async_trait::async_trait;

/// GovernanceServer port for the policy server applications are onboarded to
///
/// Implementations must report unparseable responses as
/// [`AuditError::UnexpectedResponse`](crate::shared::error::AuditError::UnexpectedResponse),
/// except for [`fetch_scan_status`](GovernanceServer::fetch_scan_status) which
/// hands back the raw body for the poller to interpret.
#[async_trait]
pub trait GovernanceServer: Send + Sync {
    /// Lists all applications together with their configured source URL.
    async fn list_applications(&self) -> Result<Vec<Application>>;

    /// Returns the organization called `name`, creating it if needed.
    async fn get_or_create_organization(&self, name: &str) -> Result<Organization>;

    /// Stores the source host token used by the organization's applications.
    async fn configure_organization_scm(&self, organization_id: &str, token: &str) -> Result<()>;

    /// Returns the application with `public_id`, creating it in the organization if needed.
    async fn get_or_create_application(
        &self,
        organization_id: &str,
        public_id: &str,
        name: &str,
    ) -> Result<Application>;

    /// Points the application at its source repository.
    async fn configure_application_scm(&self, application_id: &str, repository_url: &str)
        -> Result<()>;

    /// Submits an SBOM for evaluation; the scan completes asynchronously.
    async fn submit_sbom(&self, application_id: &str, sbom: &Sbom) -> Result<ScanTicket>;

    /// Fetches the scan status resource and returns its body unparsed.
    async fn fetch_scan_status(&self, status_url: &str) -> Result<String>;
}
