use serde::{Deserialize, Serialize};

/// A single timestamped measurement from both pumps
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Reading {
    /// Minutes since the test started
    #[serde(rename = "elapsedMin")]
    pub elapsed_min: f64,

    /// Pump 1 pressure in psi
    #[serde(rename = "pump 1")]
    pub pump1: f64,

    /// Pump 2 pressure in psi
    #[serde(rename = "pump 2")]
    pub pump2: f64,
}

impl Reading {
    /// Create a reading from an elapsed time and both pump pressures
    pub fn new(elapsed_min: f64, pump1: f64, pump2: f64) -> Self {
        Self {
            elapsed_min,
            pump1,
            pump2,
        }
    }

    /// Higher of the two pump pressures
    pub fn max_psi(&self) -> f64 {
        self.pump1.max(self.pump2)
    }

    /// Lower of the two pump pressures
    pub fn min_psi(&self) -> f64 {
        self.pump1.min(self.pump2)
    }

    /// Mean of the two pump pressures
    pub fn average_psi(&self) -> f64 {
        (self.pump1 + self.pump2) / 2.0
    }
}
