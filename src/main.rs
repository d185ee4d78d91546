use clap::Parser;
use dockerfile_gen::{
    analyzer::{self, ProjectType},
    cli::Cli,
    config, generator, NO_DETECTION_MESSAGE,
};
use std::process;

fn main() {
    if let Err(e) = run() {
        if e.is_detection_empty() {
            println!("{}", NO_DETECTION_MESSAGE);
        } else {
            eprintln!("Error: {}", e);
        }
        process::exit(1);
    }
}

fn run() -> dockerfile_gen::Result<()> {
    let cli = Cli::parse();
    cli.init_logging();

    let config = config::load_config(cli.config.as_deref(), &cli.path)?;

    let analysis = match cli.language.as_deref() {
        Some(tag) => {
            let project_type: ProjectType = tag.parse()?;
            analyzer::analyze_project_as(&cli.path, project_type, &config)?
        }
        None => analyzer::analyze_project(&cli.path, &config)?,
    };

    let dockerfile = generator::generate_dockerfile(&analysis)?;

    if cli.dry_run {
        print!("{}", dockerfile);
        return Ok(());
    }

    generator::write_dockerfile(&analysis.project_root, &config.output, &dockerfile)?;
    println!(
        "Generated Dockerfile for {} with version {}",
        analysis.project_type, analysis.version
    );

    Ok(())
}
