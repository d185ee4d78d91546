use crate::analyzer::{ProjectAnalysis, ProjectType};
use crate::error::{GeneratorError, Result};
use crate::generator::templates;
use tera::{Context, Tera};

/// Generate a Dockerfile based on project analysis
pub fn generate(analysis: &ProjectAnalysis) -> Result<String> {
    let tera = templates::registry()
        .map_err(|e| GeneratorError::TemplateRendering(e.to_string()))?;
    render(&tera, analysis.project_type, &analysis.version)
}

/// Renders the template registered for `project_type` with `version` substituted
pub fn render(tera: &Tera, project_type: ProjectType, version: &str) -> Result<String> {
    let name = templates::template_name(project_type);
    if !tera.get_template_names().any(|registered| registered == name) {
        return Err(GeneratorError::UnsupportedProject(project_type.to_string()).into());
    }

    let mut context = Context::new();
    context.insert("version", version);

    let dockerfile = tera
        .render(&name, &context)
        .map_err(|e| GeneratorError::TemplateRendering(format!("{}: {}", name, e)))?;
    log::debug!("Rendered {} ({} bytes)", name, dockerfile.len());

    Ok(dockerfile)
}
