//! # dockerfile-gen
//!
//! Detects a project's language from marker files in a directory and writes a
//! matching Dockerfile next to them.
//!
//! ## Pipeline
//!
//! - **Detection**: `pom.xml`/`build.gradle`, then `go.mod`, then
//!   `requirements.txt`/`pyproject.toml`, then `package.json`; first match wins
//! - **Version**: fixed defaults, except Node which honours `engines.node`
//! - **Generation**: one template per project type, version substituted
//!
//! ## Example
//!
//! ```rust,no_run
//! use dockerfile_gen::{analyze_project, generate_dockerfile, config::Config};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let analysis = analyze_project(Path::new("./my-project"), &Config::default())?;
//! let dockerfile = generate_dockerfile(&analysis)?;
//! println!("{}", dockerfile);
//! # Ok(())
//! # }
//! ```

pub mod analyzer;
pub mod cli;
pub mod common;
pub mod config;
pub mod error;
pub mod generator;

// Re-export commonly used types and functions
pub use analyzer::{analyze_project, analyze_project_as, ProjectAnalysis, ProjectType};
pub use error::{DockerfileGenError, Result};
pub use generator::{generate_dockerfile, write_dockerfile};

/// Printed when no marker file is found.
pub const NO_DETECTION_MESSAGE: &str =
    "Couldn’t detect project type. Add a manual hint or supported files.";

/// The current version of the CLI tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
