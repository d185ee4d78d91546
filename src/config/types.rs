use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub versions: VersionDefaults,
    pub analysis: AnalysisConfig,
    pub output: OutputConfig,
}

/// Base image versions used when a project does not pin one itself
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VersionDefaults {
    pub java: String,
    pub go: String,
    pub python: String,
    /// Used only when package.json has no `engines.node`.
    pub node: String,
}

/// Analysis configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    pub max_manifest_size: u64,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub file_name: String,
}

impl Default for VersionDefaults {
    fn default() -> Self {
        Self {
            java: "17".to_string(),
            go: "1.21".to_string(),
            python: "3.11".to_string(),
            node: "20".to_string(),
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_manifest_size: 1024 * 1024, // 1MB
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file_name: "Dockerfile".to_string(),
        }
    }
}
