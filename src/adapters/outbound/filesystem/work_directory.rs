use crate::onboarding::domain::EvaluationStage;
use crate::ports::outbound::ArtifactStore;
use crate::shared::error::AuditError;
use crate::shared::security::validate_asset_file_name;
use crate::shared::Result;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tempfile::TempDir;

/// WorkDirectory adapter holding downloaded artifacts for one audit batch
///
/// The root is a fresh temporary directory; it and everything below it is
/// removed when the `WorkDirectory` is dropped, i.e. after the whole batch.
/// Repositories get `<root>/<owner>/<name>/<latest-release|latest-package>`.
pub struct WorkDirectory {
    root: TempDir,
}

impl WorkDirectory {
    const PREFIX: &'static str = "iq-scm-audit-";

    /// Creates the batch root under the system temporary directory.
    pub fn create() -> Result<Self> {
        let root = tempfile::Builder::new()
            .prefix(Self::PREFIX)
            .tempdir()
            .map_err(|e| AuditError::FileWriteError {
                path: std::env::temp_dir(),
                details: format!("Failed to create work directory: {}", e),
            })?;
        Ok(Self { root })
    }

    /// Creates the batch root inside `parent`.
    pub fn create_in(parent: &Path) -> Result<Self> {
        let root = tempfile::Builder::new()
            .prefix(Self::PREFIX)
            .tempdir_in(parent)
            .map_err(|e| AuditError::FileWriteError {
                path: parent.to_path_buf(),
                details: format!("Failed to create work directory: {}", e),
            })?;
        Ok(Self { root })
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// `owner/name` must stay a relative path of plain components.
    fn validate_name_with_owner(name_with_owner: &str) -> Result<()> {
        let path = Path::new(name_with_owner);
        let plain = !name_with_owner.is_empty()
            && path
                .components()
                .all(|component| matches!(component, Component::Normal(_)));
        if plain {
            Ok(())
        } else {
            Err(AuditError::SecurityError {
                path: path.to_path_buf(),
                reason: "repository name is not a relative owner/name path".to_string(),
                hint: "Check the repository search results of the source host".to_string(),
            }
            .into())
        }
    }
}

impl ArtifactStore for WorkDirectory {
    fn stage_directory(&self, name_with_owner: &str, stage: EvaluationStage) -> Result<PathBuf> {
        Self::validate_name_with_owner(name_with_owner)?;
        let directory = self
            .root
            .path()
            .join(name_with_owner)
            .join(stage.download_directory());

        fs::create_dir_all(&directory).map_err(|e| AuditError::FileWriteError {
            path: directory.clone(),
            details: e.to_string(),
        })?;
        Ok(directory)
    }

    fn store(&self, directory: &Path, file_name: &str, content: &[u8]) -> Result<PathBuf> {
        validate_asset_file_name(file_name)?;
        let path = directory.join(file_name);
        fs::write(&path, content).map_err(|e| AuditError::FileWriteError {
            path: path.clone(),
            details: e.to_string(),
        })?;
        Ok(path)
    }
}
