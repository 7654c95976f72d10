use std::path::Path;

use crate::project::Project;

use super::{ValidationCheck, ValidationError, ValidationReport};

/// Step 1: the file exists and parses as a project.
///
/// A file that does not parse is recorded as a failed check and yields
/// `Ok(None)`.
pub(crate) fn check_structure(
    path: &Path,
    report: &mut ValidationReport,
) -> Result<Option<Project>, ValidationError> {
    if !path.exists() {
        report.add_check(ValidationCheck::failed(
            "Path exists",
            format!("Path does not exist: {}", path.display()),
        ));
        return Err(ValidationError::StructureError(format!(
            "Path does not exist: {}",
            path.display()
        )));
    }
    report.add_check(ValidationCheck::ok("Path exists"));

    if !path.is_file() {
        report.add_check(ValidationCheck::failed(
            "Regular file",
            "Path is not a file",
        ));
        return Err(ValidationError::StructureError(
            "Path is not a file".to_string(),
        ));
    }

    if path.extension().and_then(|e| e.to_str()) != Some("json") {
        report.add_check(ValidationCheck::warning(
            "File extension",
            "Project files are normally saved with a .json extension",
        ));
    }

    match Project::load_json(path) {
        Ok(project) => {
            report.add_check(ValidationCheck::ok(format!(
                "Project parses ({} tests)",
                project.tests.len()
            )));
            Ok(Some(project))
        }
        Err(e) => {
            report.add_check(ValidationCheck::failed("Project parses", e.to_string()));
            Ok(None)
        }
    }
}
