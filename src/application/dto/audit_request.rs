/// AuditRequest - Input of one audit run
#[derive(Debug, Clone, Default)]
pub struct AuditRequest {
    /// Repository search query on the source host (`fork:true` is appended)
    pub query: String,
    /// Token the governance server uses to read the source host
    pub source_host_token: String,
    /// Base URL of the governance server, linked from every issue
    pub iq_server_url: String,
    /// Organization new applications are created in
    pub organization: String,
    /// Who to contact for governance server access, shown in every issue
    pub contact: String,
    pub skip_issue_creation: bool,
    /// Skip repositories an application is already configured for
    pub skip_existing_applications: bool,
    /// Skip downloading and evaluating release and package artifacts
    pub skip_evaluations: bool,
}
