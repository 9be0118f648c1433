//! iq-scm-audit - Onboard GitHub repositories to Nexus IQ
//!
//! This library registers source repositories as Nexus IQ applications, scans
//! their dependency graphs as CycloneDX SBOMs, evaluates their latest release
//! and package artifacts, and opens tracking issues. It follows hexagonal
//! architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sbom_generation`, `onboarding`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use iq_scm_audit::prelude::*;
//!
//! # async fn audit() -> Result<()> {
//! // Create adapters
//! let source_host = GitHubClient::new("ghp_token")?;
//! let governance_server = IqClient::new("https://iq.example.com", "admin", "secret")?;
//! let policy_evaluator = IqCliEvaluator::new(
//!     IqCliEvaluator::DEFAULT_JAR,
//!     "https://iq.example.com",
//!     "admin",
//!     "secret",
//! );
//!
//! // Create use case
//! let use_case = RunAuditUseCase::new(
//!     source_host,
//!     governance_server,
//!     policy_evaluator,
//!     WorkDirectory::create()?,
//!     IssueMarkdownFormatter::new(),
//!     StderrProgressReporter::new(),
//!     ScanResultPoller::default(),
//! );
//!
//! // Execute
//! let request = AuditRequest {
//!     query: "org:octo".to_string(),
//!     source_host_token: "ghp_token".to_string(),
//!     iq_server_url: "https://iq.example.com".to_string(),
//!     organization: "GitHub".to_string(),
//!     contact: "security@example.com".to_string(),
//!     ..Default::default()
//! };
//! let response = use_case.execute(request).await?;
//! println!("{} repositories onboarded", response.repositories_onboarded());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod onboarding;
pub mod ports;
pub mod sbom_generation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::WorkDirectory;
    pub use crate::adapters::outbound::formatters::{CycloneDxFormatter, IssueMarkdownFormatter};
    pub use crate::adapters::outbound::network::{GitHubClient, IqClient};
    pub use crate::adapters::outbound::process::IqCliEvaluator;
    pub use crate::application::dto::{AuditRequest, AuditResponse};
    pub use crate::application::use_cases::{PollPolicy, RunAuditUseCase, ScanResultPoller};
    pub use crate::onboarding::domain::{
        Application, Asset, AuditIssue, EvaluationResult, EvaluationStage, Organization,
        Repository, ScanResult, ScanTicket,
    };
    pub use crate::onboarding::policies::ExistingApplicationPolicy;
    pub use crate::ports::outbound::{
        ArtifactStore, GovernanceServer, IssueFormatter, PolicyEvaluator, ProgressReporter,
        SbomFormatter, SourceHost,
    };
    pub use crate::sbom_generation::domain::{Component, Dependency, PackageManager, Sbom};
    pub use crate::sbom_generation::services::{PurlBuilder, SbomBuilder};
    pub use crate::shared::Result;
}
