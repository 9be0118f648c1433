use crate::onboarding::domain::{EvaluationResult, EvaluationStage};
use crate::shared::Result;
use async_trait::async_trait;
use std::path::Path;

/// PolicyEvaluator port for evaluating downloaded artifacts
#[async_trait]
pub trait PolicyEvaluator: Send + Sync {
    /// Evaluates every file in `directory` against the application's policies.
    ///
    /// # Errors
    /// Returns [`AuditError::EvaluationFailed`](crate::shared::error::AuditError::EvaluationFailed)
    /// if the evaluation does not complete.
    async fn evaluate(
        &self,
        directory: &Path,
        application_public_id: &str,
        stage: EvaluationStage,
    ) -> Result<EvaluationResult>;
}
