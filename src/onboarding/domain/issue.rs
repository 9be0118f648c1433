/// Data for the tracking issue opened on an onboarded repository.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditIssue {
    pub iq_server_url: String,
    pub audit_report_url: Option<String>,
    pub release_report_url: Option<String>,
    pub package_report_url: Option<String>,
    /// Public id of the governance application
    pub repository: String,
    pub contact: String,
    pub name_with_owner: String,
}

impl AuditIssue {
    /// Title every onboarding issue is created with
    pub const TITLE: &'static str = "Configure Nexus IQ";
}
