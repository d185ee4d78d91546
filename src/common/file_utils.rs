use crate::error::{AnalysisError, DockerfileGenError, SecurityError};
use std::fs;
use std::path::{Path, PathBuf};

/// Validates that the project path exists and is a directory
pub fn validate_project_path(path: &Path) -> Result<PathBuf, DockerfileGenError> {
    // Try to canonicalize, but be more forgiving on Windows
    let canonical = match path.canonicalize() {
        Ok(p) => p,
        Err(e) => {
            if path.exists() {
                path.to_path_buf()
            } else {
                return Err(SecurityError::InvalidPath(format!(
                    "Invalid path '{}': {}",
                    path.display(),
                    e
                ))
                .into());
            }
        }
    };

    if !canonical.is_dir() {
        return Err(SecurityError::InvalidPath(format!(
            "'{}' is not a directory",
            path.display()
        ))
        .into());
    }

    Ok(canonical)
}

/// Checks whether a marker entry is present in `root`.
///
/// Any kind of entry counts, directories included.
pub fn marker_exists(root: &Path, name: &str) -> bool {
    root.join(name).exists()
}

/// Reads a manifest with a size limit
pub fn read_file_safe(path: &Path, max_size: u64) -> Result<String, AnalysisError> {
    let metadata = fs::metadata(path).map_err(|source| AnalysisError::ManifestRead {
        file: path.to_path_buf(),
        source,
    })?;

    if metadata.len() > max_size {
        return Err(AnalysisError::ManifestTooLarge {
            file: path.to_path_buf(),
            limit: max_size,
        });
    }

    fs::read_to_string(path).map_err(|source| AnalysisError::ManifestRead {
        file: path.to_path_buf(),
        source,
    })
}
