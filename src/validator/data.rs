use std::collections::HashSet;

use crate::project::Project;
use crate::scoring::{self, formula, ScoringError};
use crate::selection::select_readings;

use super::{ValidationCheck, ValidationReport};

/// Step 3: test data sanity
pub(crate) fn check_test_data(project: &Project, parameters_ok: bool, report: &mut ValidationReport) {
    check_composition(project, report);
    check_reading_order(project, report);

    if !parameters_ok {
        return;
    }

    check_reading_counts(project, report);
    check_pressure_limit(project, report);
    check_stored_results(project, report);
}

fn check_composition(project: &Project, report: &mut ValidationReport) {
    let included = project.blanks().filter(|b| b.include_on_rep).count();
    if included == 0 {
        report.add_check(ValidationCheck::failed(
            "Included blanks",
            "No blank is included on the report; trials cannot be scored",
        ));
    } else {
        report.add_check(ValidationCheck::ok("Included blanks"));
    }

    if project.trials().next().is_none() {
        report.add_check(ValidationCheck::warning("Trials", "Project has no trials to score"));
    } else {
        report.add_check(ValidationCheck::ok("Trials"));
    }

    let mut seen = HashSet::new();
    let duplicates: Vec<&str> = project
        .tests
        .iter()
        .filter(|t| !seen.insert(t.name.as_str()))
        .map(|t| t.name.as_str())
        .collect();
    if duplicates.is_empty() {
        report.add_check(ValidationCheck::ok("Unique test names"));
    } else {
        report.add_check(ValidationCheck::warning(
            "Unique test names",
            format!("Duplicate names: {}", duplicates.join(", ")),
        ));
    }
}

fn check_reading_order(project: &Project, report: &mut ValidationReport) {
    let mut all_ordered = true;
    for test in &project.tests {
        let ordered = test
            .readings
            .windows(2)
            .all(|pair| pair[0].elapsed_min <= pair[1].elapsed_min);
        if !ordered {
            all_ordered = false;
            report.add_check(ValidationCheck::failed(
                format!("Reading order: {}", test.name),
                "Elapsed times go backwards",
            ));
        }
    }
    if all_ordered {
        report.add_check(ValidationCheck::ok("Reading order"));
    }
}

fn check_reading_counts(project: &Project, report: &mut ValidationReport) {
    let max_readings = formula::max_readings(project.limit_min, project.interval);
    let mut clean = true;
    for test in &project.tests {
        let count = test.readings.len();
        if count == 0 {
            clean = false;
            report.add_check(ValidationCheck::warning(
                format!("Reading count: {}", test.name),
                "Test has no readings",
            ));
        } else if count > max_readings {
            clean = false;
            report.add_check(ValidationCheck::warning(
                format!("Reading count: {}", test.name),
                format!(
                    "{} readings exceed the {} expected for a full-length test",
                    count, max_readings
                ),
            ));
        }
    }
    if clean {
        report.add_check(ValidationCheck::ok("Reading count"));
    }
}

fn check_pressure_limit(project: &Project, report: &mut ValidationReport) {
    let mut clean = true;
    for test in &project.tests {
        let peak = select_readings(test)
            .into_iter()
            .fold(f64::NEG_INFINITY, f64::max);
        if peak > project.limit_psi {
            clean = false;
            report.add_check(ValidationCheck::warning(
                format!("Pressure limit: {}", test.name),
                format!("peaks at {} psi, above the {} psi limit", peak, project.limit_psi),
            ));
        }
    }
    if clean {
        report.add_check(ValidationCheck::ok("Pressure limit"));
    }
}

fn check_stored_results(project: &Project, report: &mut ValidationReport) {
    let mut rescored = project.clone();
    match scoring::score(&mut rescored) {
        Ok(_) => {
            let stale: Vec<&str> = project
                .tests
                .iter()
                .zip(&rescored.tests)
                .filter(|(stored, fresh)| match (stored.result, fresh.result) {
                    (Some(a), Some(b)) => (a - b).abs() > 1e-9,
                    (None, None) => false,
                    _ => true,
                })
                .map(|(stored, _)| stored.name.as_str())
                .collect();
            if stale.is_empty() {
                report.add_check(ValidationCheck::ok("Stored results"));
            } else {
                report.add_check(ValidationCheck::warning(
                    "Stored results",
                    format!("Out of date, re-score the project: {}", stale.join(", ")),
                ));
            }
        }
        Err(e @ ScoringError::DegenerateDenominator { .. }) => {
            report.add_check(ValidationCheck::failed("Protectable area", e.to_string()));
        }
        // Missing blanks and bad parameters are reported by earlier checks
        Err(_) => {}
    }
}
