use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DockerfileGenError {
    #[error("Project analysis failed: {0}")]
    Analysis(#[from] AnalysisError),

    #[error("Dockerfile generation failed: {0}")]
    Generation(#[from] GeneratorError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Security error: {0}")]
    Security(#[from] SecurityError),
}

impl DockerfileGenError {
    /// True when no marker file matched; the binary reports this without a crash.
    pub fn is_detection_empty(&self) -> bool {
        matches!(
            self,
            DockerfileGenError::Analysis(AnalysisError::LanguageDetection { .. })
        )
    }
}

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Unsupported project type: {0}")]
    UnsupportedProject(String),

    #[error("Failed to detect language in {path}")]
    LanguageDetection { path: PathBuf },

    #[error("Failed to read {file}: {source}")]
    ManifestRead {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {file}: {source}")]
    ManifestParse {
        file: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Manifest {file} is larger than {limit} bytes")]
    ManifestTooLarge { file: PathBuf, limit: u64 },
}

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Template rendering failed: {0}")]
    TemplateRendering(String),

    #[error("No Dockerfile template for project type: {0}")]
    UnsupportedProject(String),

    #[error("Output file creation failed: {path}: {source}")]
    OutputCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration file: {0}")]
    InvalidFile(String),

    #[error("Missing configuration file: {0}")]
    MissingConfig(PathBuf),

    #[error("Configuration parsing failed: {0}")]
    ParsingFailed(String),
}

#[derive(Error, Debug)]
pub enum SecurityError {
    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

pub type Result<T> = std::result::Result<T, DockerfileGenError>;
