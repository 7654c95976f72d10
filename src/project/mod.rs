//! # Project Model
//!
//! A project groups the tests run for one inhibitor evaluation together with
//! the parameters every test in it is scored against.
//!
//! ## Contents
//!
//! 1. **Readings**: timestamped pressure samples from the two pumps of a
//!    scale block rig
//!
//! 2. **Tests**: one experimental run each, either a calibration blank or an
//!    inhibitor trial
//!
//! 3. **Project**: the tests plus the scoring parameters (time limit, pressure
//!    ceiling, reading interval, baseline pressure), persisted as JSON

mod error;
mod reading;
mod record;
mod scale_project;

#[cfg(test)]
mod tests;

pub use error::ProjectError;
pub use reading::Reading;
pub use record::{ReadingSelection, Test};
pub use scale_project::Project;
