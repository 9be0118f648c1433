use serde::Deserialize;

/// Handle of an in-progress SBOM scan, as returned by the scan submission.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanTicket {
    pub status_url: String,
}

/// Terminal state of an SBOM scan.
///
/// Field names follow the governance server's status payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    pub policy_action: String,
    #[serde(rename = "reportHtmlUrl")]
    pub report_url: String,
    #[serde(default)]
    pub is_error: bool,
}

/// Outcome of a CLI evaluation of downloaded artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EvaluationResult {
    #[serde(rename = "reportHtmlUrl")]
    pub report_url: String,
}

/// Stage an artifact evaluation is recorded under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationStage {
    /// Latest release assets
    StageRelease,
    /// Latest package version files
    Release,
}

impl EvaluationStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            EvaluationStage::StageRelease => "stage-release",
            EvaluationStage::Release => "release",
        }
    }

    /// Name of the per-repository download directory for this stage.
    pub fn download_directory(&self) -> &'static str {
        match self {
            EvaluationStage::StageRelease => "latest-release",
            EvaluationStage::Release => "latest-package",
        }
    }
}

impl std::fmt::Display for EvaluationStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
