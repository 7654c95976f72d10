//! # Evaluation
//!
//! Everything a technician does with a finished project: re-score it as
//! report settings change, then save the derivation log, the data table and
//! the rewritten project next to the project file.
//!
//! A [`ProjectHandle`] owns the authoritative project for one test rig and
//! refuses to open a second editor or evaluation while one is open.

mod artifacts;
mod handle;
mod session;

pub use artifacts::{artifact_path, Artifact};
pub use handle::{EditorKind, ProjectHandle};
pub use session::{Evaluation, SaveOptions, SavedArtifacts};

use crate::export::ExportError;
use crate::project::ProjectError;
use crate::scoring::ScoringError;

/// Errors raised while evaluating or saving a project
#[derive(Debug, thiserror::Error)]
pub enum EvaluationError {
    /// Scoring did not produce results
    #[error(transparent)]
    Scoring(#[from] ScoringError),

    /// Loading or saving the project failed
    #[error(transparent)]
    Project(#[from] ProjectError),

    /// Writing the data table failed
    #[error(transparent)]
    Export(#[from] ExportError),

    /// Writing the log file failed
    #[error("Failed to write log file: {0}")]
    IoError(#[from] std::io::Error),

    /// No test with this name in the project
    #[error("No test named '{0}' in the project")]
    UnknownTest(String),

    /// Another editor or evaluation is open
    #[error("Project '{project}' is locked by an open {holder}")]
    ProjectLocked {
        /// Project name
        project: String,
        /// What holds the lock
        holder: EditorKind,
    },

    /// Nowhere to put saved files
    #[error("Project '{0}' has no file path and no output directory was given")]
    NoOutputDirectory(String),
}
