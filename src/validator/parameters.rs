use crate::project::Project;

use super::{ValidationCheck, ValidationReport};

fn positive(name: &str, value: f64, report: &mut ValidationReport) -> bool {
    if value.is_finite() && value > 0.0 {
        report.add_check(ValidationCheck::ok(name));
        true
    } else {
        report.add_check(ValidationCheck::failed(
            name,
            format!("must be a positive number, got {}", value),
        ));
        false
    }
}

/// Step 2: scoring parameters. Returns whether scoring can run at all.
pub(crate) fn check_parameters(project: &Project, report: &mut ValidationReport) -> bool {
    if project.name.trim().is_empty() {
        report.add_check(ValidationCheck::warning(
            "Project name",
            "Project has no name; saved reports will be named from its numbers only",
        ));
    } else {
        report.add_check(ValidationCheck::ok("Project name"));
    }

    let interval_ok = positive("Reading interval", project.interval, report);
    let time_ok = positive("Time limit", project.limit_min, report);
    let psi_ok = positive("Pressure limit", project.limit_psi, report);

    if !project.baseline.is_finite() || project.baseline < 0.0 {
        report.add_check(ValidationCheck::failed(
            "Baseline pressure",
            format!("must be zero or more, got {}", project.baseline),
        ));
    } else if psi_ok && project.baseline >= project.limit_psi {
        report.add_check(ValidationCheck::warning(
            "Baseline pressure",
            format!(
                "baseline {} psi is not below the {} psi limit",
                project.baseline, project.limit_psi
            ),
        ));
    } else {
        report.add_check(ValidationCheck::ok("Baseline pressure"));
    }

    interval_ok && time_ok
}
