use async_trait::async_trait;
use iq_scm_audit::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// One recorded evaluation: directory, its files at evaluation time, public id, stage
pub type Evaluation = (PathBuf, Vec<String>, String, EvaluationStage);

/// Mock PolicyEvaluator recording what it was asked to evaluate
#[derive(Default, Clone)]
pub struct MockPolicyEvaluator {
    pub evaluations: Arc<Mutex<Vec<Evaluation>>>,
}

impl MockPolicyEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recorded(&self) -> Vec<Evaluation> {
        self.evaluations.lock().unwrap().clone()
    }
}

#[async_trait]
impl PolicyEvaluator for MockPolicyEvaluator {
    async fn evaluate(
        &self,
        directory: &Path,
        application_public_id: &str,
        stage: EvaluationStage,
    ) -> Result<EvaluationResult> {
        let mut files: Vec<String> = std::fs::read_dir(directory)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().to_string())
            .collect();
        files.sort();

        self.evaluations.lock().unwrap().push((
            directory.to_path_buf(),
            files,
            application_public_id.to_string(),
            stage,
        ));
        Ok(EvaluationResult {
            report_url: format!("ui/links/{}/{}", application_public_id, stage),
        })
    }
}
