use crate::analyzer::ProjectAnalysis;
use crate::config::OutputConfig;
use crate::error::{GeneratorError, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub mod dockerfile_gen;
pub mod templates;

/// Generate a Dockerfile based on project analysis
pub fn generate_dockerfile(analysis: &ProjectAnalysis) -> Result<String> {
    dockerfile_gen::generate(analysis)
}

/// Writes `contents` to the configured output file in `root`, replacing
/// whatever was there.
pub fn write_dockerfile(root: &Path, output: &OutputConfig, contents: &str) -> Result<PathBuf> {
    let path = root.join(&output.file_name);
    fs::write(&path, contents).map_err(|source| GeneratorError::OutputCreation {
        path: path.clone(),
        source,
    })?;
    log::info!("Wrote {}", path.display());
    Ok(path)
}
