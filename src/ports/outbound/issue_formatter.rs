use crate::onboarding::domain::AuditIssue;
use crate::shared::Result;

/// IssueFormatter port for rendering the body of an onboarding issue
pub trait IssueFormatter {
    fn format(&self, issue: &AuditIssue) -> Result<String>;
}
