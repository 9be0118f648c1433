/// Mock implementations for testing
mod mock_governance_server;
mod mock_policy_evaluator;
mod mock_progress_reporter;
mod mock_source_host;

pub use mock_governance_server::MockGovernanceServer;
pub use mock_policy_evaluator::MockPolicyEvaluator;
pub use mock_progress_reporter::{MockProgressReporter, ReportedEvent};
pub use mock_source_host::MockSourceHost;
