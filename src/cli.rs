use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "generate-dockerfile")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate a Dockerfile from your project's marker files")]
#[command(long_about = "Detects the project type (Java, Go, Python or Node) from marker files such as pom.xml, go.mod, requirements.txt or package.json, and writes a matching Dockerfile into the project directory.")]
pub struct Cli {
    /// Path to the project directory
    #[arg(value_name = "PROJECT_PATH", default_value = ".")]
    pub path: PathBuf,

    /// Skip detection and use this project type (java, go, python, node)
    #[arg(short, long, value_name = "TYPE")]
    pub language: Option<String>,

    /// Print the Dockerfile instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", env = "DOCKERFILE_GEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all logging
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }
}
