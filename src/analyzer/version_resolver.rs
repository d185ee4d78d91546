use crate::analyzer::ProjectType;
use crate::common::file_utils;
use crate::config::Config;
use crate::error::{AnalysisError, Result};
use serde_json::Value as JsonValue;
use std::path::Path;

/// Node manifest read for the `engines.node` override.
pub const PACKAGE_JSON: &str = "package.json";

/// Resolves the base image version for a project type.
///
/// Only Node projects look at the filesystem: `engines.node` from
/// `package.json` wins over the configured default. A missing or malformed
/// `package.json` is an error in that case.
pub fn resolve_version(root: &Path, project_type: ProjectType, config: &Config) -> Result<String> {
    let defaults = &config.versions;
    let version = match project_type {
        ProjectType::Java => defaults.java.clone(),
        ProjectType::Go => defaults.go.clone(),
        ProjectType::Python => defaults.python.clone(),
        ProjectType::Node => {
            let manifest = root.join(PACKAGE_JSON);
            let content = file_utils::read_file_safe(&manifest, config.analysis.max_manifest_size)?;
            let package_json: JsonValue = serde_json::from_str(&content).map_err(|source| {
                AnalysisError::ManifestParse {
                    file: manifest.clone(),
                    source,
                }
            })?;

            match node_engine_version(&package_json) {
                Some(version) => {
                    log::debug!("Using engines.node {} from {}", version, manifest.display());
                    version
                }
                None => {
                    log::debug!("No engines.node in {}, using default", manifest.display());
                    defaults.node.clone()
                }
            }
        }
    };

    Ok(version)
}

/// Reads `engines.node`; absence at any level yields `None`.
fn node_engine_version(package_json: &JsonValue) -> Option<String> {
    match package_json.get("engines")?.get("node")? {
        JsonValue::String(version) => Some(version.clone()),
        JsonValue::Number(version) => Some(version.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DockerfileGenError;
    use std::fs;
    use tempfile::TempDir;

    fn node_version(package_json: &str) -> Result<String> {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(PACKAGE_JSON), package_json).unwrap();
        resolve_version(temp_dir.path(), ProjectType::Node, &Config::default())
    }

    #[test]
    fn test_constant_versions() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::default();

        let resolve = |project_type| resolve_version(temp_dir.path(), project_type, &config).unwrap();
        assert_eq!(resolve(ProjectType::Java), "17");
        assert_eq!(resolve(ProjectType::Go), "1.21");
        assert_eq!(resolve(ProjectType::Python), "3.11");
    }

    #[test]
    fn test_node_engine_version() {
        let package_json = r#"
{
  "name": "test-project",
  "version": "1.0.0",
  "engines": {
    "node": "18"
  }
}
"#;
        assert_eq!(node_version(package_json).unwrap(), "18");
    }

    #[test]
    fn test_node_fallbacks() {
        assert_eq!(node_version(r#"{"engines": {}}"#).unwrap(), "20");
        assert_eq!(node_version(r#"{"name": "app"}"#).unwrap(), "20");
        assert_eq!(node_version(r#"{"engines": "node"}"#).unwrap(), "20");
        assert_eq!(node_version(r#"{"engines": {"node": null}}"#).unwrap(), "20");
        assert_eq!(node_version("[]").unwrap(), "20");
    }

    #[test]
    fn test_node_numeric_engine() {
        assert_eq!(node_version(r#"{"engines": {"node": 18}}"#).unwrap(), "18");
    }

    #[test]
    fn test_node_range_kept_verbatim() {
        assert_eq!(
            node_version(r#"{"engines": {"node": ">=16.0.0"}}"#).unwrap(),
            ">=16.0.0"
        );
    }

    #[test]
    fn test_malformed_package_json() {
        let err = node_version("{ not json").unwrap_err();
        assert!(matches!(
            err,
            DockerfileGenError::Analysis(AnalysisError::ManifestParse { .. })
        ));
    }

    #[test]
    fn test_configured_defaults() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(PACKAGE_JSON), "{}").unwrap();

        let mut config = Config::default();
        config.versions.node = "22".to_string();
        config.versions.go = "1.22".to_string();

        assert_eq!(
            resolve_version(temp_dir.path(), ProjectType::Node, &config).unwrap(),
            "22"
        );
        assert_eq!(
            resolve_version(temp_dir.path(), ProjectType::Go, &config).unwrap(),
            "1.22"
        );
    }
}
