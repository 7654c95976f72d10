//! # Scoring Engine
//!
//! Scores every inhibitor trial in a project against the project's blanks.
//!
//! ## Procedure
//!
//! 1. **Parameters**: the expected reading count of a full-length test and the
//!    area under the baseline pressure across it
//! 2. **Blanks**: for each blank included on the report, the area between the
//!    pressure ceiling and its curve
//! 3. **Protectable area**: the ceiling area of a full-length test minus the
//!    rounded mean blank area
//! 4. **Trials**: for every trial, one minus its integral (with missing
//!    readings counted at the ceiling, less the baseline area) over the
//!    protectable area, rounded to three decimals
//!
//! Every intermediate number is recorded in a [`DerivationLog`], in the order
//! it was computed. A pass either writes a result onto every trial or, on
//! error, leaves all of them untouched.
//!
//! ## Usage
//!
//! ```rust
//! use scalewiz::project::{Project, Reading, Test};
//! use scalewiz::scoring::score;
//!
//! let mut project = Project::new("Demo");
//! project.limit_min = 1.0;
//! project.interval = 30.0;
//! project.limit_psi = 100.0;
//! project.baseline = 0.0;
//!
//! let mut blank = Test::blank("Blank");
//! blank.push_reading(Reading::new(0.5, 60.0, 60.0));
//! blank.push_reading(Reading::new(1.0, 100.0, 100.0));
//! project.add_test(blank);
//!
//! let mut trial = Test::new("Trial");
//! trial.push_reading(Reading::new(0.5, 0.0, 0.0));
//! trial.push_reading(Reading::new(1.0, 20.0, 20.0));
//! project.add_test(trial);
//!
//! let report = score(&mut project)?;
//! assert_eq!(report.avg_protectable_area, 160.0);
//! assert_eq!(project.tests[1].result, Some(0.875));
//! # Ok::<(), scalewiz::scoring::ScoringError>(())
//! ```

use std::time::{Duration, Instant};

use log::{debug, info, warn};

use crate::project::{Project, ReadingSelection};
use crate::selection::select_readings;

mod derivation;
mod error;
pub mod formula;

pub use derivation::DerivationLog;
pub use error::ScoringError;

/// Area computed for one included blank
#[derive(Debug, Clone, PartialEq)]
pub struct BlankArea {
    /// Blank name
    pub name: String,
    /// Selection policy its readings were taken with
    pub to_consider: ReadingSelection,
    /// Number of selected readings
    pub reading_count: usize,
    /// Sum of the selected readings
    pub integral_psi: f64,
    /// Area between the ceiling and the blank curve
    pub area: f64,
}

/// Score computed for one trial
#[derive(Debug, Clone, PartialEq)]
pub struct TrialScore {
    /// Trial name
    pub name: String,
    /// Selection policy its readings were taken with
    pub to_consider: ReadingSelection,
    /// Number of selected readings
    pub reading_count: usize,
    /// Padded integral of the selected readings
    pub integral_psi: f64,
    /// Score written onto the trial
    pub result: f64,
}

/// Everything a successful scoring pass computed
#[derive(Debug, Clone)]
pub struct ScoreReport {
    /// Expected reading count of a full-length test
    pub max_readings: usize,
    /// Area under the baseline pressure
    pub baseline_area: f64,
    /// One entry per included blank, in project order
    pub blank_areas: Vec<BlankArea>,
    /// Rounded mean of the blank areas
    pub avg_blank_area: f64,
    /// Denominator of every trial score
    pub avg_protectable_area: f64,
    /// One entry per trial, in project order
    pub trials: Vec<TrialScore>,
    /// Human-readable derivation of all of the above
    pub log: DerivationLog,
    /// Wall time of the pass
    pub elapsed: Duration,
}

impl ScoreReport {
    /// Score of the named trial
    pub fn result_for(&self, name: &str) -> Option<f64> {
        self.trials
            .iter()
            .find(|t| t.name == name)
            .map(|t| t.result)
    }
}

fn check_parameter(name: &'static str, value: f64) -> Result<(), ScoringError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ScoringError::InvalidParameter { name, value })
    }
}

fn check_finite(name: &'static str, value: f64) -> Result<(), ScoringError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ScoringError::InvalidParameter { name, value })
    }
}

/// Score every trial in the project and write the results onto them.
///
/// Returns [`ScoringError::InsufficientBlanks`] when no blank is included on
/// the report and [`ScoringError::DegenerateDenominator`] when the protectable
/// area is zero; in both cases no trial is modified.
pub fn score(project: &mut Project) -> Result<ScoreReport, ScoringError> {
    let start = Instant::now();

    check_parameter("interval", project.interval)?;
    check_parameter("limitMin", project.limit_min)?;
    check_finite("baseline", project.baseline)?;

    let limit_psi = project.limit_psi;
    let mut log = DerivationLog::new(&project.name);

    let max_readings = formula::max_readings(project.limit_min, project.interval);
    log.derivation(
        "Max readings",
        "limitMin * 60 / reading interval",
        Some(format!(
            "{} * 60 / {}",
            project.limit_min, project.interval
        )),
        max_readings,
    );

    let baseline_area = formula::baseline_area(project.baseline, max_readings);
    log.derivation(
        "Baseline area",
        "baseline PSI * max readings",
        Some(format!("{} * {}", project.baseline, max_readings)),
        baseline_area,
    );
    log.rule();

    let mut blank_areas = Vec::new();
    for blank in project.blanks().filter(|t| t.include_on_rep) {
        let readings = select_readings(blank);
        let integral_psi = formula::integral_psi(&readings);
        let area = formula::area_over_blank(limit_psi, readings.len(), integral_psi);

        log.line(format!("Evaluating {}", blank.name));
        log.line(format!("Considering data: {}", blank.to_consider));
        log.line(format!("Total readings: {}", readings.len()));
        log.derivation(
            "Integral PSI",
            "sum of all pressure readings",
            None,
            integral_psi,
        );
        log.derivation(
            "Area over blank",
            "limit_psi * # of readings - integral PSI",
            Some(format!(
                "{} * {} - {}",
                limit_psi,
                readings.len(),
                integral_psi
            )),
            area,
        );
        log.gap();

        debug!(
            "{}: blank '{}' area {} over {} readings",
            project.name,
            blank.name,
            area,
            readings.len()
        );
        blank_areas.push(BlankArea {
            name: blank.name.clone(),
            to_consider: blank.to_consider,
            reading_count: readings.len(),
            integral_psi,
            area,
        });
    }

    let areas: Vec<f64> = blank_areas.iter().map(|b| b.area).collect();
    let Some(avg_blank_area) = formula::average_blank_area(&areas) else {
        warn!(
            "{}: no blanks included on the report, trials left unscored",
            project.name
        );
        return Err(ScoringError::InsufficientBlanks);
    };
    log.derivation(
        "Average area over blanks",
        "sum of areas over blanks / # of blanks",
        Some(format!(
            "{} / {}",
            areas.iter().sum::<f64>(),
            areas.len()
        )),
        avg_blank_area,
    );

    let avg_protectable_area =
        formula::avg_protectable_area(limit_psi, max_readings, avg_blank_area);
    log.derivation(
        "Average protectable area",
        "limit_psi * max_readings - average area over blanks",
        Some(format!(
            "{} * {} - {}",
            limit_psi, max_readings, avg_blank_area
        )),
        avg_protectable_area,
    );
    log.rule();

    if avg_protectable_area == 0.0 || !avg_protectable_area.is_finite() {
        warn!(
            "{}: average protectable area is {}, trials left unscored",
            project.name, avg_protectable_area
        );
        return Err(ScoringError::DegenerateDenominator {
            avg_protectable_area,
            avg_blank_area,
            limit_psi,
            max_readings,
        });
    }

    let mut trials = Vec::new();
    for trial in project.trials() {
        let readings = select_readings(trial);
        let integral_psi = formula::padded_integral_psi(&readings, max_readings, limit_psi);
        let result = formula::trial_result(integral_psi, baseline_area, avg_protectable_area);

        log.line(format!("Evaluating {}", trial.name));
        log.line(format!("Considering data: {}", trial.to_consider));
        log.line(format!("Total readings: {}", readings.len()));
        log.derivation(
            "Integral PSI",
            "sum of all pressure readings + (max readings - # of readings) * limit_psi",
            Some(format!(
                "{} + ({} - {}) * {}",
                formula::integral_psi(&readings),
                max_readings,
                readings.len(),
                limit_psi
            )),
            integral_psi,
        );
        log.derivation(
            "Result",
            "1 - (integral PSI - baseline area) / avg protectable area",
            Some(format!(
                "1 - ({} - {}) / {}",
                integral_psi, baseline_area, avg_protectable_area
            )),
            result,
        );
        log.gap();

        debug!("{}: trial '{}' scored {}", project.name, trial.name, result);
        trials.push(TrialScore {
            name: trial.name.clone(),
            to_consider: trial.to_consider,
            reading_count: readings.len(),
            integral_psi,
            result,
        });
    }
    log.line("-".repeat(80));

    let mut scored = trials.iter();
    for test in project.tests.iter_mut().filter(|t| t.is_trial()) {
        test.result = scored.next().map(|t| t.result);
    }

    let elapsed = start.elapsed();
    log.finish(elapsed);
    info!(
        "{}: scored {} trials against {} blanks in {:.3} s",
        project.name,
        trials.len(),
        blank_areas.len(),
        elapsed.as_secs_f64()
    );

    Ok(ScoreReport {
        max_readings,
        baseline_area,
        blank_areas,
        avg_blank_area,
        avg_protectable_area,
        trials,
        log,
        elapsed,
    })
}

#[cfg(test)]
mod tests;
