//! Scoring formulas.
//!
//! Every function here is pure. Rounding is half-to-even throughout so that
//! stored results match those produced by earlier versions of the tool.

/// Round to the nearest integer, ties to even.
pub fn round_half_even(value: f64) -> f64 {
    value.round_ties_even()
}

/// Round to `digits` decimal places, ties to even.
///
/// Rounds the exact binary value of `value`: 0.9625 is stored slightly above
/// the tie and rounds up, while 0.0625 is an exact tie and rounds to even.
/// Scaling by a power of ten first would create ties that are not there.
pub fn round_to(value: f64, digits: usize) -> f64 {
    format!("{:.*}", digits, value).parse().unwrap_or(value)
}

/// Expected reading count of a test that runs the full time limit.
///
/// `interval` is in seconds, `limit_min` in minutes. Both must be positive
/// and finite; the caller checks this.
pub fn max_readings(limit_min: f64, interval: f64) -> usize {
    round_half_even(limit_min * 60.0 / interval) as usize
}

/// Area under the baseline pressure across a full-length test.
pub fn baseline_area(baseline: f64, max_readings: usize) -> f64 {
    round_half_even(baseline * max_readings as f64)
}

/// Sum of the selected pressure readings.
pub fn integral_psi(readings: &[f64]) -> f64 {
    readings.iter().sum()
}

/// Area between the pressure ceiling and a blank's curve.
pub fn area_over_blank(limit_psi: f64, reading_count: usize, integral_psi: f64) -> f64 {
    limit_psi * reading_count as f64 - integral_psi
}

/// Rounded mean of the blank areas, or `None` when there are none.
pub fn average_blank_area(areas: &[f64]) -> Option<f64> {
    if areas.is_empty() {
        return None;
    }
    Some(round_half_even(areas.iter().sum::<f64>() / areas.len() as f64))
}

/// Area a perfect inhibitor could protect, relative to the average blank.
pub fn avg_protectable_area(limit_psi: f64, max_readings: usize, avg_blank_area: f64) -> f64 {
    limit_psi * max_readings as f64 - avg_blank_area
}

/// Readings missing from a full-length test (negative when a test overran).
pub fn missing_readings(max_readings: usize, reading_count: usize) -> f64 {
    max_readings as f64 - reading_count as f64
}

/// Integral of a trial, with missing readings counted at the pressure ceiling.
pub fn padded_integral_psi(readings: &[f64], max_readings: usize, limit_psi: f64) -> f64 {
    integral_psi(readings) + missing_readings(max_readings, readings.len()) * limit_psi
}

/// Trial score, rounded to three decimals.
pub fn trial_result(integral_psi: f64, baseline_area: f64, avg_protectable_area: f64) -> f64 {
    round_to(1.0 - (integral_psi - baseline_area) / avg_protectable_area, 3)
}
