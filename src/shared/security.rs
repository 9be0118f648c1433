use crate::shared::error::AuditError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Upper bound for local files the tool reads (config, issue template, evaluation results)
pub const MAX_READ_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Validates a file name reported by the source host before it is joined onto a
/// download directory.
///
/// Asset and package file names come from a remote API, so anything that could
/// escape the target directory is rejected.
pub fn validate_asset_file_name(name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        Some("file name is empty")
    } else if name.contains('/') || name.contains('\\') {
        Some("file name contains path separators")
    } else if name == "." || name == ".." {
        Some("file name refers to a directory")
    } else if name.contains('\0') {
        Some("file name contains a NUL byte")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(AuditError::SecurityError {
            path: name.into(),
            reason: reason.to_string(),
            hint: "The asset was published with an unsafe name; rename it on the source host"
                .to_string(),
        }
        .into()),
        None => Ok(()),
    }
}

/// Reads a local text file after checking it is a regular, reasonably sized file.
///
/// Symbolic links are rejected.
pub fn read_regular_file(path: &Path, file_description: &str) -> Result<String> {
    let metadata = fs::symlink_metadata(path).map_err(|e| AuditError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read {} metadata: {}", file_description, e),
    })?;

    if metadata.is_symlink() {
        return Err(AuditError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} is a symbolic link", file_description),
            hint: "Point the option at the real file instead of a link".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(AuditError::FileReadError {
            path: path.to_path_buf(),
            details: format!("{} is not a regular file", file_description),
        }
        .into());
    }

    if metadata.len() > MAX_READ_FILE_SIZE {
        return Err(AuditError::FileReadError {
            path: path.to_path_buf(),
            details: format!(
                "{} is too large ({} bytes). Maximum allowed size is {} bytes.",
                file_description,
                metadata.len(),
                MAX_READ_FILE_SIZE
            ),
        }
        .into());
    }

    fs::read_to_string(path).map_err(|e| {
        AuditError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        }
        .into()
    })
}
