use crate::onboarding::domain::EvaluationStage;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// ArtifactStore port for the local directory downloads are evaluated from
///
/// All directories live under one batch root that is removed when the store
/// is dropped.
pub trait ArtifactStore {
    /// Creates (if needed) and returns the download directory of a repository
    /// for the given stage.
    fn stage_directory(&self, name_with_owner: &str, stage: EvaluationStage) -> Result<PathBuf>;

    /// Writes a downloaded file into `directory` and returns its path.
    fn store(&self, directory: &Path, file_name: &str, content: &[u8]) -> Result<PathBuf>;
}
