use super::*;

const SAMPLE_PROJECT: &str = r#"{
    "name": "Acme Field Water",
    "numbers": "12345, 12346",
    "limitMin": 90.0,
    "limitPsi": 1500.0,
    "interval": 3.0,
    "baseline": 75.0,
    "tests": [
        {
            "name": "Blank 1",
            "reportAs": "Blank 1",
            "isBlank": true,
            "toConsider": "max",
            "includeOnRep": true,
            "readings": [
                { "elapsedMin": 0.05, "pump 1": 75.0, "pump 2": 80.0 },
                { "elapsedMin": 0.1, "pump 1": 90.0, "pump 2": 85.0 }
            ]
        },
        {
            "name": "Inhibitor A 10 ppm",
            "reportAs": "A 10",
            "toConsider": "pump 2",
            "readings": [],
            "result": 0.85
        }
    ]
}"#;

#[test]
fn test_project_parsing() {
    let project = Project::from_json(SAMPLE_PROJECT).unwrap();

    assert_eq!(project.name, "Acme Field Water");
    assert_eq!(project.tests.len(), 2);
    assert_eq!(project.blanks().count(), 1);
    assert_eq!(project.trials().count(), 1);

    let blank = project.test("Blank 1").unwrap();
    assert_eq!(blank.to_consider, ReadingSelection::Max);
    assert_eq!(blank.readings[1], Reading::new(0.1, 90.0, 85.0));
    assert_eq!(blank.result, None);

    let trial = project.test("Inhibitor A 10 ppm").unwrap();
    assert!(!trial.is_blank);
    assert!(trial.include_on_rep);
    assert_eq!(trial.to_consider, ReadingSelection::Pump2);
    assert_eq!(trial.result, Some(0.85));
    assert!(project.path.is_none());
}

#[test]
fn test_unknown_selection_rejected_on_load() {
    let json = SAMPLE_PROJECT.replace("\"max\"", "\"median\"");
    assert!(matches!(
        Project::from_json(&json),
        Err(ProjectError::JsonError(_))
    ));
}

#[test]
fn test_selection_from_str() {
    assert_eq!(
        "Pump 1".parse::<ReadingSelection>().unwrap(),
        ReadingSelection::Pump1
    );
    assert_eq!(
        " average ".parse::<ReadingSelection>().unwrap(),
        ReadingSelection::Average
    );
    for sel in ReadingSelection::ALL {
        assert_eq!(sel.as_str().parse::<ReadingSelection>().unwrap(), sel);
    }

    let err = "pump 3".parse::<ReadingSelection>().unwrap_err();
    assert_eq!(err.to_string(), "Unknown reading selection: \"pump 3\"");
}

#[test]
fn test_reading_channels() {
    let reading = Reading::new(1.0, 100.0, 300.0);
    assert_eq!(ReadingSelection::Pump1.pick(&reading), 100.0);
    assert_eq!(ReadingSelection::Pump2.pick(&reading), 300.0);
    assert_eq!(ReadingSelection::Max.pick(&reading), 300.0);
    assert_eq!(ReadingSelection::Min.pick(&reading), 100.0);
    assert_eq!(ReadingSelection::Average.pick(&reading), 200.0);
}

#[test]
fn test_test_helpers() {
    let mut trial = Test::new("T1");
    assert_eq!(trial.duration_min(), 0.0);
    trial.push_reading(Reading::new(0.05, 1.0, 2.0));
    trial.push_reading(Reading::new(12.5, 1.0, 2.0));
    assert_eq!(trial.duration_min(), 12.5);

    trial.report_as = "  ".to_string();
    assert_eq!(trial.label(), "T1");

    let blank = Test::blank("B1");
    assert!(blank.is_blank);
    assert!(!blank.is_trial());
}

#[test]
fn test_compact_numbers() {
    let mut project = Project::new("P");
    project.numbers = "12345, 12346".to_string();
    assert_eq!(project.compact_numbers(), "12345,12346");
}

#[test]
fn test_save_without_path() {
    let mut project = Project::new("Unsaved");
    let err = project.save().unwrap_err();
    assert!(matches!(err, ProjectError::MissingPath(name) if name == "Unsaved"));
}

#[test]
fn test_dump_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("project.json");

    let mut project = Project::from_json(SAMPLE_PROJECT).unwrap();
    project.dump_json(&path).unwrap();
    assert_eq!(project.path.as_deref(), Some(path.as_path()));

    let loaded = Project::load_json(&path).unwrap();
    assert_eq!(loaded, project);
    assert_eq!(loaded.directory(), Some(dir.path()));
}
