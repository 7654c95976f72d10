//! Integration tests for scalewiz
//!
//! These tests run the full pipeline from a project file on disk through
//! scoring to the saved artifacts.

use scalewiz::evaluation::{EditorKind, EvaluationError, ProjectHandle, SaveOptions};
use scalewiz::export::export_csv;
use scalewiz::project::{Project, Reading, ReadingSelection, Test};
use scalewiz::scoring::{score, ScoringError};
use scalewiz::validator::validate_project_file;
use std::fs;
use tempfile::tempdir;

/// A 90 minute project at 3 s intervals, 1500 psi ceiling, 75 psi baseline
fn lab_project() -> Project {
    let mut project = Project::new("Acme Field Water");
    project.numbers = "12345".to_string();
    project.limit_min = 90.0;
    project.interval = 3.0;
    project.limit_psi = 1500.0;
    project.baseline = 75.0;

    // Blanks plug linearly from the baseline to the ceiling in 30 minutes
    for (name, fail_at) in [("Blank 1", 600usize), ("Blank 2", 600usize)] {
        let mut blank = Test::blank(name);
        blank.to_consider = ReadingSelection::Max;
        for i in 0..fail_at {
            let psi = 75.0 + 1425.0 * i as f64 / fail_at as f64;
            blank.push_reading(Reading::new((i + 1) as f64 * 0.05, psi, psi - 5.0));
        }
        project.add_test(blank);
    }

    // A good trial holds baseline for the full run
    let mut good = Test::new("Inhibitor A 10 ppm");
    for i in 0..1800 {
        good.push_reading(Reading::new((i + 1) as f64 * 0.05, 75.0, 75.0));
    }
    project.add_test(good);

    // A weak trial plugs at 60 minutes
    let mut weak = Test::new("Inhibitor B 2 ppm");
    for i in 0..1200 {
        let psi = 75.0 + 1425.0 * i as f64 / 1200.0;
        weak.push_reading(Reading::new((i + 1) as f64 * 0.05, psi, psi));
    }
    project.add_test(weak);
    project
}

#[test]
fn test_score_and_save_cycle() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("acme.json");
    lab_project().dump_json(&path).unwrap();

    let mut handle = ProjectHandle::load("System 1", &path).unwrap();
    let saved = {
        let mut evaluation = handle.evaluate().unwrap();
        let report = evaluation.score().unwrap();

        assert_eq!(report.max_readings, 1800);
        assert_eq!(report.baseline_area, 135_000.0);
        assert_eq!(report.blank_areas.len(), 2);
        // A trial that never leaves the baseline is fully protected
        assert_eq!(report.result_for("Inhibitor A 10 ppm"), Some(1.0));
        let weak = report.result_for("Inhibitor B 2 ppm").unwrap();
        assert!(weak > 0.0 && weak < 1.0, "weak trial scored {}", weak);

        evaluation
            .save(&SaveOptions {
                export_csv: true,
                ..Default::default()
            })
            .unwrap()
    };

    let log = fs::read_to_string(saved.log.unwrap()).unwrap();
    assert!(log.contains("Evaluating Blank 1"));
    assert!(log.contains("Baseline area: 75 * 1800"));
    let csv = fs::read_to_string(saved.data.unwrap()).unwrap();
    assert_eq!(csv.lines().count(), 5);

    handle.reload().unwrap();
    assert_eq!(
        handle.project().test("Inhibitor A 10 ppm").unwrap().result,
        Some(1.0)
    );
    assert!(handle.project().modified.is_some());
}

#[test]
fn test_rescoring_after_reload_is_identical() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("acme.json");

    let mut project = lab_project();
    let first = score(&mut project).unwrap();
    project.dump_json(&path).unwrap();

    let mut reloaded = Project::load_json(&path).unwrap();
    let second = score(&mut reloaded).unwrap();

    assert_eq!(first.trials, second.trials);
    assert_eq!(first.log.body(), second.log.body());
}

#[test]
fn test_locked_project_cannot_be_evaluated() {
    let mut handle = ProjectHandle::new("System 2", lab_project());
    handle.open_editor(EditorKind::Editor).unwrap();

    assert!(matches!(
        handle.evaluate(),
        Err(EvaluationError::ProjectLocked { .. })
    ));
}

#[test]
fn test_blanks_excluded_on_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no-blanks.json");

    let mut project = lab_project();
    for test in project.tests.iter_mut().filter(|t| t.is_blank) {
        test.include_on_rep = false;
    }
    project.dump_json(&path).unwrap();

    let mut loaded = Project::load_json(&path).unwrap();
    assert!(matches!(
        score(&mut loaded),
        Err(ScoringError::InsufficientBlanks)
    ));
    assert!(loaded.trials().all(|t| t.result.is_none()));
}

#[test]
fn test_validate_and_export_files() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("acme.json");
    let mut project = lab_project();
    score(&mut project).unwrap();
    project.dump_json(&path).unwrap();

    let report = validate_project_file(&path).unwrap();
    assert!(!report.has_failures(), "{}", report);

    let csv_path = dir.path().join("table.csv");
    assert_eq!(export_csv(&project, &csv_path).unwrap(), 4);
}
