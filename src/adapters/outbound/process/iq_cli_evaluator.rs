use crate::onboarding::domain::{EvaluationResult, EvaluationStage};
use crate::ports::outbound::PolicyEvaluator;
use crate::shared::error::AuditError;
use crate::shared::security::read_regular_file;
use crate::shared::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command;

const RESULTS_FILE_NAME: &str = "evaluation-results.json";

/// IqCliEvaluator adapter running the Nexus IQ CLI jar
///
/// Each evaluation runs `java -jar <jar>` against a download directory and
/// reads the report URL back from the results file the CLI writes into that
/// same directory.
pub struct IqCliEvaluator {
    java: String,
    jar: PathBuf,
    server_url: String,
    username: String,
    password: String,
}

impl IqCliEvaluator {
    pub const DEFAULT_JAR: &'static str = "./iq/nexus-iq-cli-1.78.0-02.jar";

    pub fn new(jar: impl Into<PathBuf>, server_url: &str, username: &str, password: &str) -> Self {
        Self {
            java: "java".to_string(),
            jar: jar.into(),
            server_url: server_url.to_string(),
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    /// Overrides the Java launcher, `java` from `PATH` by default.
    pub fn with_java(mut self, java: impl Into<String>) -> Self {
        self.java = java.into();
        self
    }

    fn jar_path(&self) -> PathBuf {
        std::path::absolute(&self.jar).unwrap_or_else(|_| self.jar.clone())
    }

    fn command_args(
        &self,
        directory: &Path,
        application_public_id: &str,
        stage: EvaluationStage,
    ) -> Vec<String> {
        vec![
            "-jar".to_string(),
            self.jar_path().display().to_string(),
            "-s".to_string(),
            self.server_url.clone(),
            "-a".to_string(),
            format!("{}:{}", self.username, self.password),
            "-i".to_string(),
            application_public_id.to_string(),
            "-t".to_string(),
            stage.as_str().to_string(),
            "-r".to_string(),
            directory.join(RESULTS_FILE_NAME).display().to_string(),
            directory.display().to_string(),
        ]
    }

    fn read_results(path: &Path) -> Result<EvaluationResult> {
        let body = read_regular_file(path, "evaluation results")?;
        serde_json::from_str(&body).map_err(|_| {
            AuditError::UnexpectedResponse {
                endpoint: path.display().to_string(),
                body,
            }
            .into()
        })
    }
}

#[async_trait]
impl PolicyEvaluator for IqCliEvaluator {
    async fn evaluate(
        &self,
        directory: &Path,
        application_public_id: &str,
        stage: EvaluationStage,
    ) -> Result<EvaluationResult> {
        let output = Command::new(&self.java)
            .args(self.command_args(directory, application_public_id, stage))
            .output()
            .await
            .map_err(|e| AuditError::EvaluationFailed {
                application: application_public_id.to_string(),
                stage: stage.to_string(),
                stdout: String::new(),
                stderr: format!("Failed to start {}: {}", self.java, e),
            })?;

        if !output.status.success() {
            return Err(AuditError::EvaluationFailed {
                application: application_public_id.to_string(),
                stage: stage.to_string(),
                stdout: String::from_utf8_lossy(&output.stdout).to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            }
            .into());
        }

        Self::read_results(&directory.join(RESULTS_FILE_NAME))
    }
}
