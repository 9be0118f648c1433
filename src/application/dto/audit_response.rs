use crate::onboarding::domain::AuditIssue;

/// AuditResponse - Outcome of a completed audit run
#[derive(Debug, Clone, Default)]
pub struct AuditResponse {
    /// Repositories returned by the search
    pub repositories_found: usize,
    /// Repositories skipped because an application already tracks them
    pub repositories_skipped: usize,
    /// One issue per onboarded repository, in processing order
    pub issues: Vec<AuditIssue>,
    /// Issues opened on the source host (zero when issue creation is skipped)
    pub issues_created: usize,
}

impl AuditResponse {
    pub fn repositories_onboarded(&self) -> usize {
        self.issues.len()
    }
}
