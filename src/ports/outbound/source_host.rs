use crate::onboarding::domain::Repository;
use crate::shared::Result;
use async_trait::async_trait;

/// SourceHost port for the service hosting the audited repositories
#[async_trait]
pub trait SourceHost: Send + Sync {
    /// Returns every repository matching `query`, including forks.
    ///
    /// # Errors
    /// Returns [`AuditError::SourceHostQueryFailed`](crate::shared::error::AuditError::SourceHostQueryFailed)
    /// once the search has failed too often.
    async fn search_repositories(&self, query: &str) -> Result<Vec<Repository>>;

    /// Downloads a release asset or package file.
    async fn download(&self, url: &str) -> Result<Vec<u8>>;

    /// Opens an issue on the repository `name_with_owner` (`owner/name`).
    async fn create_issue(&self, name_with_owner: &str, title: &str, body: &str) -> Result<()>;
}
