//! # ScaleWiz - Scale Block Test Scoring
//!
//! `scalewiz` scores dynamic scale block tests: a brine is pumped through a
//! narrow tube while the back pressure is recorded, and scale that forms in
//! the tube shows up as rising pressure. Blanks (no inhibitor) establish how
//! fast the tube plugs; trials (with inhibitor) are scored by how much of
//! that pressure rise they prevent.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scalewiz::project::Project;
//! use scalewiz::scoring::score;
//!
//! let mut project = Project::load_json("project.json")?;
//! let report = score(&mut project)?;
//!
//! print!("{}", report.log);
//! for trial in &report.trials {
//!     println!("{}: {}", trial.name, trial.result);
//! }
//! project.save()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Scoring
//!
//! | Quantity | Formula |
//! |----------|---------|
//! | max readings | `round(limitMin * 60 / interval)` |
//! | baseline area | `round(baseline * max readings)` |
//! | area over blank | `limitPsi * # readings - sum(readings)` |
//! | avg protectable area | `limitPsi * max readings - round(mean(blank areas))` |
//! | trial integral | `sum(readings) + (max readings - # readings) * limitPsi` |
//! | result | `round(1 - (integral - baseline area) / avg protectable area, 3)` |
//!
//! ## Architecture
//!
//! - [`project`]: tests, readings and scoring parameters, JSON load/save
//! - [`selection`]: which pressure channel of a test counts
//! - [`scoring`]: the scoring pass and its derivation log
//! - [`evaluation`]: re-scoring on setting changes, saving artifacts, editor lock
//! - [`export`]: CSV data table
//! - [`sort`]: natural ordering of test names
//! - [`validator`]: project sanity checks

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod evaluation;
pub mod export;
pub mod project;
pub mod scoring;
pub mod selection;
pub mod sort;
pub mod validator;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::evaluation::{
        Artifact, EditorKind, Evaluation, EvaluationError, ProjectHandle, SaveOptions,
        SavedArtifacts,
    };
    pub use crate::export::{export_csv, table_rows, ExportError, TestRow};
    pub use crate::project::{Project, ProjectError, Reading, ReadingSelection, Test};
    pub use crate::scoring::{score, DerivationLog, ScoreReport, ScoringError, TrialScore};
    pub use crate::selection::select_readings;
    pub use crate::sort::{natural_cmp, sort_nicely};
    pub use crate::validator::{validate_project, validate_project_file, ValidationReport};
}
