/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define what the audit needs from the outside world: the source
/// host, the governance server, the evaluation CLI, the local disk and the
/// console.
pub mod artifact_store;
pub mod governance_server;
pub mod issue_formatter;
pub mod policy_evaluator;
pub mod progress_reporter;
pub mod sbom_formatter;
pub mod source_host;

pub use artifact_store::ArtifactStore;
pub use governance_server::GovernanceServer;
pub use issue_formatter::IssueFormatter;
pub use policy_evaluator::PolicyEvaluator;
pub use progress_reporter::ProgressReporter;
pub use sbom_formatter::SbomFormatter;
pub use source_host::SourceHost;
