use crate::analyzer::ProjectType;
use crate::common::file_utils;
use std::path::Path;

/// Detects the project type from marker files directly inside `root`.
///
/// Types are probed in [`ProjectType::PRIORITY`] order and the first one with
/// any marker present is returned. Nothing is read, only existence is checked.
pub fn detect_project_type(root: &Path) -> Option<ProjectType> {
    let matched: Vec<ProjectType> = ProjectType::PRIORITY
        .into_iter()
        .filter(|project_type| has_any_marker(root, *project_type))
        .collect();

    let detected = matched.first().copied();
    match detected {
        Some(project_type) if matched.len() > 1 => log::debug!(
            "Multiple project types found {:?}, using {}",
            matched,
            project_type
        ),
        Some(project_type) => log::debug!("Detected {} project", project_type),
        None => log::debug!("No marker files found in {}", root.display()),
    }

    detected
}

fn has_any_marker(root: &Path, project_type: ProjectType) -> bool {
    project_type.marker_files().iter().any(|marker| {
        let found = file_utils::marker_exists(root, marker);
        log::trace!("{} marker {}: {}", project_type, marker, found);
        found
    })
}
