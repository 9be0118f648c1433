pub mod application;
pub mod issue;
pub mod repository;
pub mod scan;

pub use application::{Application, Organization};
pub use issue::AuditIssue;
pub use repository::{Asset, Repository};
pub use scan::{EvaluationResult, EvaluationStage, ScanResult, ScanTicket};
