//! # Project Validation Module
//!
//! Sanity checks for ScaleWiz project files, run before a project is scored
//! or handed to a customer.
//!
//! ## Validation Checklist
//!
//! 1. **Structure Check**: the file exists and parses as a project
//! 2. **Scoring Parameters**: time limit, interval, ceiling and baseline are usable
//! 3. **Test Data**: blanks and trials are present, readings are ordered and
//!    within limits, stored results match a fresh scoring pass
//!
//! ## Usage
//!
//! ```rust,no_run
//! use scalewiz::validator::validate_project_file;
//! use std::path::Path;
//!
//! match validate_project_file(Path::new("project.json")) {
//!     Ok(report) => println!("{}", report),
//!     Err(e) => eprintln!("Validation failed: {}", e),
//! }
//! ```

use std::path::Path;

use crate::project::Project;

pub use report::{CheckStatus, ValidationCheck, ValidationReport};

mod data;
mod parameters;
mod report;
mod structure;

/// Validation error types
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// The file is missing or is not a file
    #[error("Structure error: {0}")]
    StructureError(String),
}

/// Validate a project file on disk
pub fn validate_project_file(path: &Path) -> Result<ValidationReport, ValidationError> {
    let mut report = ValidationReport::new(path.display().to_string());

    // 1. Structure Check
    let Some(project) = structure::check_structure(path, &mut report)? else {
        return Ok(report);
    };

    // 2. and 3.
    check_project(&project, &mut report);

    Ok(report)
}

/// Validate a project already in memory
pub fn validate_project(project: &Project) -> ValidationReport {
    let label = project
        .path
        .as_deref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| project.name.clone());
    let mut report = ValidationReport::new(label);
    check_project(project, &mut report);
    report
}

fn check_project(project: &Project, report: &mut ValidationReport) {
    let parameters_ok = parameters::check_parameters(project, report);
    data::check_test_data(project, parameters_ok, report);
}
