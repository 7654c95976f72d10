use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ProjectError, Test};

/// A set of tests and the parameters they are scored against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Project name
    #[serde(default)]
    pub name: String,

    /// Project number(s), e.g. "12345, 12346"
    #[serde(default)]
    pub numbers: String,

    /// Maximum test duration in minutes
    pub limit_min: f64,

    /// Pressure ceiling in psi
    pub limit_psi: f64,

    /// Seconds between readings
    pub interval: f64,

    /// Baseline pressure in psi
    #[serde(default)]
    pub baseline: f64,

    /// Path of the last saved plot image
    #[serde(default)]
    pub plot: String,

    /// Time of the last save
    #[serde(default)]
    pub modified: Option<DateTime<Utc>>,

    /// Tests in the order they were added
    #[serde(default)]
    pub tests: Vec<Test>,

    /// File this project was loaded from or last saved to
    #[serde(skip)]
    pub path: Option<PathBuf>,
}

impl Default for Project {
    fn default() -> Self {
        Self {
            name: String::new(),
            numbers: String::new(),
            limit_min: 90.0,
            limit_psi: 1500.0,
            interval: 3.0,
            baseline: 75.0,
            plot: String::new(),
            modified: None,
            tests: Vec::new(),
            path: None,
        }
    }
}

impl Project {
    /// Create an empty project with default scoring parameters
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Add a test to the end of the project
    pub fn add_test(&mut self, test: Test) {
        self.tests.push(test);
    }

    /// Blanks in project order
    pub fn blanks(&self) -> impl Iterator<Item = &Test> {
        self.tests.iter().filter(|t| t.is_blank)
    }

    /// Trials in project order
    pub fn trials(&self) -> impl Iterator<Item = &Test> {
        self.tests.iter().filter(|t| t.is_trial())
    }

    /// Find a test by name
    pub fn test(&self, name: &str) -> Option<&Test> {
        self.tests.iter().find(|t| t.name == name)
    }

    /// Find a test by name for editing
    pub fn test_mut(&mut self, name: &str) -> Option<&mut Test> {
        self.tests.iter_mut().find(|t| t.name == name)
    }

    /// Project numbers with whitespace removed, as used in file names
    pub fn compact_numbers(&self) -> String {
        self.numbers.chars().filter(|c| !c.is_whitespace()).collect()
    }

    /// Directory that holds this project's file, if it has one
    pub fn directory(&self) -> Option<&Path> {
        self.path.as_deref().and_then(Path::parent)
    }

    /// Serialize the project to pretty-printed JSON
    pub fn to_json(&self) -> Result<String, ProjectError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize a project from JSON
    pub fn from_json(json: &str) -> Result<Self, ProjectError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a project from any reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ProjectError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Load a project from a JSON file and remember its path
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self, ProjectError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let mut project = Self::from_reader(BufReader::new(file))?;
        project.path = Some(path.to_path_buf());
        log::debug!(
            "Loaded project '{}' with {} tests from {}",
            project.name,
            project.tests.len(),
            path.display()
        );
        Ok(project)
    }

    /// Write the project as JSON to the given file and remember the path
    pub fn dump_json<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ProjectError> {
        let path = path.as_ref();
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        self.path = Some(path.to_path_buf());
        log::debug!("Saved project '{}' to {}", self.name, path.display());
        Ok(())
    }

    /// Stamp the project with the current time and rewrite it in place
    pub fn save(&mut self) -> Result<(), ProjectError> {
        let path = self
            .path
            .clone()
            .ok_or_else(|| ProjectError::MissingPath(self.name.clone()))?;
        self.modified = Some(Utc::now());
        self.dump_json(path)
    }
}
