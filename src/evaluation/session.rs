use std::fs;
use std::path::PathBuf;

use log::info;

use crate::export::export_csv;
use crate::project::{Project, ProjectError, ReadingSelection, Test};
use crate::scoring::{self, ScoreReport};

use super::{artifact_path, Artifact, EditorKind, EvaluationError};

/// What [`Evaluation::save`] writes
#[derive(Debug, Clone, PartialEq)]
pub struct SaveOptions {
    /// Write the derivation log text file
    pub save_log: bool,
    /// Rewrite the project JSON
    pub save_project: bool,
    /// Write the CSV data table
    pub export_csv: bool,
    /// Directory for the log and data files; defaults to the project's
    pub output_dir: Option<PathBuf>,
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self {
            save_log: true,
            save_project: true,
            export_csv: false,
            output_dir: None,
        }
    }
}

/// Paths written by [`Evaluation::save`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SavedArtifacts {
    /// Derivation log
    pub log: Option<PathBuf>,
    /// CSV data table
    pub data: Option<PathBuf>,
    /// Project JSON
    pub project: Option<PathBuf>,
}

/// An open evaluation of one project.
///
/// Changing a report setting re-scores the project immediately, so the
/// latest report always reflects the current settings.
pub struct Evaluation<'a> {
    project: &'a mut Project,
    report: Option<ScoreReport>,
    lock: Option<&'a mut Option<EditorKind>>,
}

impl<'a> Evaluation<'a> {
    /// Evaluate a project that is not behind a [`super::ProjectHandle`]
    pub fn new(project: &'a mut Project) -> Self {
        Self {
            project,
            report: None,
            lock: None,
        }
    }

    pub(super) fn locked(project: &'a mut Project, lock: &'a mut Option<EditorKind>) -> Self {
        *lock = Some(EditorKind::Evaluation);
        Self {
            project,
            report: None,
            lock: Some(lock),
        }
    }

    /// Project under evaluation
    pub fn project(&self) -> &Project {
        &*self.project
    }

    /// Report from the last successful scoring pass
    pub fn report(&self) -> Option<&ScoreReport> {
        self.report.as_ref()
    }

    /// Re-score the project. A failed pass clears the last report.
    pub fn score(&mut self) -> Result<&ScoreReport, EvaluationError> {
        match scoring::score(self.project) {
            Ok(report) => Ok(&*self.report.insert(report)),
            Err(e) => {
                self.report = None;
                Err(e.into())
            }
        }
    }

    fn update(
        &mut self,
        name: &str,
        apply: impl FnOnce(&mut Test),
    ) -> Result<&ScoreReport, EvaluationError> {
        let test = self
            .project
            .test_mut(name)
            .ok_or_else(|| EvaluationError::UnknownTest(name.to_string()))?;
        apply(test);
        self.score()
    }

    /// Change a test's report label and re-score
    pub fn set_report_as(
        &mut self,
        name: &str,
        label: &str,
    ) -> Result<&ScoreReport, EvaluationError> {
        self.update(name, |test| test.report_as = label.to_string())
    }

    /// Change which readings count for a test and re-score
    pub fn set_to_consider(
        &mut self,
        name: &str,
        selection: ReadingSelection,
    ) -> Result<&ScoreReport, EvaluationError> {
        self.update(name, |test| test.to_consider = selection)
    }

    /// Include or exclude a test from the report and re-score
    pub fn set_include_on_rep(
        &mut self,
        name: &str,
        include: bool,
    ) -> Result<&ScoreReport, EvaluationError> {
        self.update(name, |test| test.include_on_rep = include)
    }

    /// Write the selected artifacts, scoring first if needed.
    ///
    /// Every target path is resolved before anything is written, so a project
    /// that has never been saved fails without leaving a log file behind.
    pub fn save(&mut self, options: &SaveOptions) -> Result<SavedArtifacts, EvaluationError> {
        let log_text = match self.report.as_ref().map(|r| r.log.to_string()) {
            Some(text) => text,
            None => self.score()?.log.to_string(),
        };

        let output_dir = options.output_dir.as_deref();
        let log_path = if options.save_log {
            Some(artifact_path(self.project, Artifact::Log, output_dir)?)
        } else {
            None
        };
        let data_path = if options.export_csv {
            Some(artifact_path(self.project, Artifact::Data, output_dir)?)
        } else {
            None
        };
        if options.save_project && self.project.path.is_none() {
            return Err(ProjectError::MissingPath(self.project.name.clone()).into());
        }

        if let Some(dir) = output_dir {
            fs::create_dir_all(dir)?;
        }

        let mut saved = SavedArtifacts::default();

        if let Some(path) = log_path {
            fs::write(&path, log_text)?;
            info!("Wrote derivation log to {}", path.display());
            saved.log = Some(path);
        }

        if let Some(path) = data_path {
            export_csv(self.project, &path)?;
            saved.data = Some(path);
        }

        if options.save_project {
            self.project.save()?;
            saved.project = self.project.path.clone();
        }

        Ok(saved)
    }
}

impl Drop for Evaluation<'_> {
    fn drop(&mut self) {
        if let Some(lock) = self.lock.as_mut() {
            **lock = None;
        }
    }
}
