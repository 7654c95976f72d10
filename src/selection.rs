//! Reading selection.
//!
//! Each test names which pressure channel counts toward its score. This
//! module turns a test's raw readings into the ordered sequence of pressure
//! values the scoring formulas work on. It knows nothing about the formulas.

use crate::project::Test;

/// Pressure values that count toward a test's score, in recorded order.
pub fn select_readings(test: &Test) -> Vec<f64> {
    test.readings
        .iter()
        .map(|reading| test.to_consider.pick(reading))
        .collect()
}

/// Lowest and highest selected pressure, or `None` for a test with no readings.
pub fn pressure_range(test: &Test) -> Option<(f64, f64)> {
    let values = select_readings(test);
    let first = *values.first()?;
    Some(
        values
            .iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
    )
}
