/// Use cases module containing application business logic orchestration
mod poll_scan_result;
mod run_audit;

pub use poll_scan_result::{PollPolicy, ScanResultPoller};
pub use run_audit::RunAuditUseCase;
