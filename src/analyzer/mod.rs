//! # Analyzer Module
//!
//! Works out what kind of project lives in a directory and which base image
//! version its Dockerfile should use:
//! - Project type from marker files, first match wins
//! - Version from built-in defaults, or `engines.node` for Node projects

use crate::common::file_utils;
use crate::config::Config;
use crate::error::{AnalysisError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub mod language_detector;
pub mod version_resolver;

pub use language_detector::detect_project_type;
pub use version_resolver::resolve_version;

/// Type of project detected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    /// Maven or Gradle project (pom.xml, build.gradle)
    Java,
    /// Go module (go.mod)
    Go,
    /// Python project (requirements.txt, pyproject.toml)
    Python,
    /// Node.js project (package.json)
    Node,
}

impl ProjectType {
    /// Detection order; earlier entries win when several marker sets exist.
    pub const PRIORITY: [ProjectType; 4] = [
        ProjectType::Java,
        ProjectType::Go,
        ProjectType::Python,
        ProjectType::Node,
    ];

    /// Get the marker files that identify this project type
    pub fn marker_files(&self) -> &'static [&'static str] {
        match self {
            ProjectType::Java => &["pom.xml", "build.gradle"],
            ProjectType::Go => &["go.mod"],
            ProjectType::Python => &["requirements.txt", "pyproject.toml"],
            ProjectType::Node => &["package.json"],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Java => "java",
            ProjectType::Go => "go",
            ProjectType::Python => "python",
            ProjectType::Node => "node",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectType {
    type Err = AnalysisError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "java" => Ok(ProjectType::Java),
            "go" => Ok(ProjectType::Go),
            "python" => Ok(ProjectType::Python),
            "node" => Ok(ProjectType::Node),
            _ => Err(AnalysisError::UnsupportedProject(s.to_string())),
        }
    }
}

/// Result of analysing a project directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectAnalysis {
    pub project_root: PathBuf,
    pub project_type: ProjectType,
    pub version: String,
}

/// Analyzes a project: detects its type, then resolves the version
pub fn analyze_project(path: &Path, config: &Config) -> Result<ProjectAnalysis> {
    let project_root = file_utils::validate_project_path(path)?;

    log::info!("Starting analysis of project: {}", project_root.display());

    let project_type = detect_project_type(&project_root).ok_or_else(|| {
        AnalysisError::LanguageDetection {
            path: project_root.clone(),
        }
    })?;

    build_analysis(project_root, project_type, config)
}

/// Analyzes a project whose type was given by the caller, skipping detection
pub fn analyze_project_as(
    path: &Path,
    project_type: ProjectType,
    config: &Config,
) -> Result<ProjectAnalysis> {
    let project_root = file_utils::validate_project_path(path)?;
    log::info!(
        "Using {} project type for {}",
        project_type,
        project_root.display()
    );
    build_analysis(project_root, project_type, config)
}

fn build_analysis(
    project_root: PathBuf,
    project_type: ProjectType,
    config: &Config,
) -> Result<ProjectAnalysis> {
    let version = resolve_version(&project_root, project_type, config)?;
    log::info!("Resolved {} version {}", project_type, version);

    Ok(ProjectAnalysis {
        project_root,
        project_type,
        version,
    })
}
