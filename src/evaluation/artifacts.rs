use std::path::{Path, PathBuf};

use crate::project::Project;

use super::EvaluationError;

/// Files saved alongside a project after evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    /// Derivation log text
    Log,
    /// CSV data table
    Data,
}

impl Artifact {
    fn suffix(&self) -> &'static str {
        match self {
            Artifact::Log => "(Log).txt",
            Artifact::Data => "(Data).csv",
        }
    }

    /// File name for this artifact of the given project
    pub fn file_name(&self, project: &Project) -> String {
        format!(
            "{} {} Scale Block Analysis {}",
            project.compact_numbers(),
            project.name,
            self.suffix()
        )
    }
}

/// Where an artifact goes: `output_dir` if given, else the project's directory.
pub fn artifact_path(
    project: &Project,
    artifact: Artifact,
    output_dir: Option<&Path>,
) -> Result<PathBuf, EvaluationError> {
    let dir = output_dir
        .or_else(|| project.directory())
        .ok_or_else(|| EvaluationError::NoOutputDirectory(project.name.clone()))?;
    Ok(dir.join(artifact.file_name(project)))
}
