use super::*;
use crate::project::{Reading, Test};

/// 60 minute tests at 2 s intervals against a 2000 psi ceiling
fn reference_project() -> Project {
    let mut project = Project::new("Reference");
    project.limit_min = 60.0;
    project.interval = 2.0;
    project.limit_psi = 2000.0;
    project.baseline = 0.0;
    project
}

/// A test whose pump 1 readings are all zero except the first
fn test_with_total(mut test: Test, count: usize, total: f64) -> Test {
    for i in 0..count {
        let psi = if i == 0 { total } else { 0.0 };
        test.push_reading(Reading::new((i + 1) as f64 / 30.0, psi, 0.0));
    }
    test
}

#[test]
fn test_reference_scenario() {
    let mut project = reference_project();
    project.add_test(test_with_total(Test::blank("Blank 1"), 1800, 2000.0));
    project.add_test(test_with_total(Test::new("Trial 1"), 1800, 1000.0));

    let report = score(&mut project).unwrap();

    assert_eq!(report.max_readings, 1800);
    assert_eq!(report.baseline_area, 0.0);
    assert_eq!(report.blank_areas.len(), 1);
    assert_eq!(report.blank_areas[0].integral_psi, 2000.0);
    assert_eq!(report.blank_areas[0].area, 3_598_000.0);
    assert_eq!(report.avg_blank_area, 3_598_000.0);
    assert_eq!(report.avg_protectable_area, 2000.0);
    assert_eq!(report.result_for("Trial 1"), Some(0.5));
    assert_eq!(project.test("Trial 1").unwrap().result, Some(0.5));
    assert_eq!(project.test("Blank 1").unwrap().result, None);
}

#[test]
fn test_short_trial_padding() {
    let mut project = reference_project();
    project.add_test(test_with_total(Test::blank("Blank 1"), 1800, 2000.0));
    project.add_test(test_with_total(Test::new("Short"), 1000, 1_601_000.0));

    let report = score(&mut project).unwrap();
    let trial = &report.trials[0];

    assert_eq!(trial.reading_count, 1000);
    assert_eq!(trial.integral_psi, 1_601_000.0 + 800.0 * 2000.0);
    // 1 - 3_201_000 / 2000
    assert_eq!(trial.result, -1599.5);
}

#[test]
fn test_no_included_blanks_leaves_results_untouched() {
    let mut project = reference_project();
    let mut blank = test_with_total(Test::blank("Blank 1"), 1800, 2000.0);
    blank.include_on_rep = false;
    project.add_test(blank);
    let mut trial = test_with_total(Test::new("Trial 1"), 1800, 1000.0);
    trial.result = Some(0.75);
    project.add_test(trial);
    project.add_test(test_with_total(Test::new("Trial 2"), 1800, 1000.0));

    let err = score(&mut project).unwrap_err();

    assert_eq!(err, ScoringError::InsufficientBlanks);
    assert_eq!(project.test("Trial 1").unwrap().result, Some(0.75));
    assert_eq!(project.test("Trial 2").unwrap().result, None);
}

#[test]
fn test_zero_protectable_area_is_reported() {
    let mut project = reference_project();
    // A blank that never builds pressure covers the whole ceiling area
    project.add_test(test_with_total(Test::blank("Flat"), 1800, 0.0));
    project.add_test(test_with_total(Test::new("Trial 1"), 1800, 1000.0));

    let err = score(&mut project).unwrap_err();

    assert_eq!(
        err,
        ScoringError::DegenerateDenominator {
            avg_protectable_area: 0.0,
            avg_blank_area: 3_600_000.0,
            limit_psi: 2000.0,
            max_readings: 1800,
        }
    );
    assert_eq!(project.test("Trial 1").unwrap().result, None);
}

#[test]
fn test_invalid_interval() {
    let mut project = reference_project();
    project.interval = 0.0;
    project.add_test(test_with_total(Test::blank("Blank 1"), 10, 20.0));

    assert_eq!(
        score(&mut project).unwrap_err(),
        ScoringError::InvalidParameter {
            name: "interval",
            value: 0.0
        }
    );
}

#[test]
fn test_non_finite_baseline_is_rejected() {
    let mut project = reference_project();
    project.baseline = f64::NAN;
    project.add_test(test_with_total(Test::blank("Blank 1"), 1800, 2000.0));
    project.add_test(test_with_total(Test::new("Trial 1"), 1800, 1000.0));

    let err = score(&mut project).unwrap_err();

    assert!(matches!(
        err,
        ScoringError::InvalidParameter { name: "baseline", value } if value.is_nan()
    ));
    assert_eq!(project.test("Trial 1").unwrap().result, None);
}

#[test]
fn test_result_rounds_exact_stored_value() {
    // Two readings per test against a 100 psi ceiling
    let mut project = Project::new("Rounding");
    project.limit_min = 1.0;
    project.interval = 30.0;
    project.limit_psi = 100.0;
    project.baseline = 0.0;
    project.add_test(test_with_total(Test::blank("Blank 1"), 2, 80.0));
    project.add_test(test_with_total(Test::new("Trial 1"), 2, 3.0));
    project.add_test(test_with_total(Test::new("Trial 2"), 2, 9.0));

    let report = score(&mut project).unwrap();

    assert_eq!(report.avg_protectable_area, 80.0);
    assert_eq!(report.result_for("Trial 1"), Some(0.963));
    assert_eq!(report.result_for("Trial 2"), Some(0.887));
}

#[test]
fn test_excluded_trials_are_still_scored() {
    let mut project = reference_project();
    project.add_test(test_with_total(Test::blank("Blank 1"), 1800, 2000.0));
    let mut trial = test_with_total(Test::new("Hidden"), 1800, 1000.0);
    trial.include_on_rep = false;
    project.add_test(trial);

    score(&mut project).unwrap();
    assert_eq!(project.test("Hidden").unwrap().result, Some(0.5));
}

#[test]
fn test_blank_areas_are_averaged() {
    let mut project = reference_project();
    project.add_test(test_with_total(Test::blank("Blank 1"), 1800, 2000.0));
    project.add_test(test_with_total(Test::blank("Blank 2"), 1800, 4000.0));
    let mut excluded = test_with_total(Test::blank("Blank 3"), 1800, 0.0);
    excluded.include_on_rep = false;
    project.add_test(excluded);
    project.add_test(test_with_total(Test::new("Trial 1"), 1800, 1500.0));

    let report = score(&mut project).unwrap();

    let names: Vec<&str> = report.blank_areas.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["Blank 1", "Blank 2"]);
    assert_eq!(report.avg_blank_area, 3_597_000.0);
    assert_eq!(report.avg_protectable_area, 3000.0);
    assert_eq!(report.result_for("Trial 1"), Some(0.5));
}

#[test]
fn test_log_order_and_content() {
    let mut project = reference_project();
    project.add_test(test_with_total(Test::new("Trial 1"), 1800, 1000.0));
    project.add_test(test_with_total(Test::blank("Blank 1"), 1800, 2000.0));
    project.add_test(test_with_total(Test::new("Trial 2"), 900, 0.0));

    let report = score(&mut project).unwrap();
    let body = report.log.body();

    assert_eq!(body[0], "Max readings: limitMin * 60 / reading interval");
    assert_eq!(body[1], "Max readings: 60 * 60 / 2");
    assert_eq!(body[2], "Max readings: 1800");
    assert_eq!(body[5], "Baseline area: 0");

    let position = |needle: &str| body.iter().position(|l| l == needle).unwrap();
    let blank = position("Evaluating Blank 1");
    let first = position("Evaluating Trial 1");
    let second = position("Evaluating Trial 2");
    assert!(blank < first && first < second);

    assert!(body.contains(&"Area over blank: 2000 * 1800 - 2000".to_string()));
    assert!(body.contains(&"Average protectable area: 2000".to_string()));
    assert!(body.contains(&"Integral PSI: 0 + (1800 - 900) * 2000".to_string()));
    assert!(body.contains(&"Result: 1 - (1000 - 0) / 2000".to_string()));
    assert!(body.contains(&"Result: 0.5".to_string()));

    let text = report.log.to_string();
    assert!(text.starts_with("Evaluating results for Reference..."));
    assert!(text.contains("Finished in "));
}

#[test]
fn test_rescoring_is_idempotent() {
    let mut project = reference_project();
    project.add_test(test_with_total(Test::blank("Blank 1"), 1800, 2000.0));
    project.add_test(test_with_total(Test::new("Trial 1"), 1700, 900.0));
    project.add_test(test_with_total(Test::new("Trial 2"), 1800, 1234.0));

    let first = score(&mut project).unwrap();
    let results: Vec<Option<f64>> = project.tests.iter().map(|t| t.result).collect();
    let second = score(&mut project).unwrap();
    let again: Vec<Option<f64>> = project.tests.iter().map(|t| t.result).collect();

    assert_eq!(results, again);
    assert_eq!(first.trials, second.trials);
    assert_eq!(first.log.body(), second.log.body());
}
