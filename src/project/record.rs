use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{ProjectError, Reading};

/// Which pressure channel of a test's readings counts toward its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReadingSelection {
    /// Pump 1 only
    #[default]
    #[serde(rename = "pump 1")]
    Pump1,
    /// Pump 2 only
    #[serde(rename = "pump 2")]
    Pump2,
    /// Higher of the two pumps at each reading
    #[serde(rename = "max")]
    Max,
    /// Lower of the two pumps at each reading
    #[serde(rename = "min")]
    Min,
    /// Mean of the two pumps at each reading
    #[serde(rename = "average")]
    Average,
}

impl ReadingSelection {
    /// All selection policies, in menu order.
    pub const ALL: [ReadingSelection; 5] = [
        ReadingSelection::Pump1,
        ReadingSelection::Pump2,
        ReadingSelection::Max,
        ReadingSelection::Min,
        ReadingSelection::Average,
    ];

    /// Label as stored in project files
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadingSelection::Pump1 => "pump 1",
            ReadingSelection::Pump2 => "pump 2",
            ReadingSelection::Max => "max",
            ReadingSelection::Min => "min",
            ReadingSelection::Average => "average",
        }
    }

    /// Pressure this policy takes from one reading
    pub fn pick(&self, reading: &Reading) -> f64 {
        match self {
            ReadingSelection::Pump1 => reading.pump1,
            ReadingSelection::Pump2 => reading.pump2,
            ReadingSelection::Max => reading.max_psi(),
            ReadingSelection::Min => reading.min_psi(),
            ReadingSelection::Average => reading.average_psi(),
        }
    }
}

impl fmt::Display for ReadingSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReadingSelection {
    type Err = ProjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|sel| sel.as_str() == normalized)
            .ok_or_else(|| ProjectError::UnknownSelection(s.to_string()))
    }
}

/// One experimental run: either a calibration blank or an inhibitor trial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Test {
    /// Name as entered by the technician
    pub name: String,

    /// Label used on reports and plots
    #[serde(default)]
    pub report_as: String,

    /// Whether this run is a blank (no inhibitor)
    #[serde(default)]
    pub is_blank: bool,

    /// Which readings count toward scoring
    #[serde(default)]
    pub to_consider: ReadingSelection,

    /// Whether to include this run on the report
    #[serde(default = "default_include")]
    pub include_on_rep: bool,

    /// Water clarity observed after the run
    #[serde(default)]
    pub clarity: String,

    /// Free-form notes
    #[serde(default)]
    pub notes: String,

    /// Readings in the order they were recorded
    #[serde(default)]
    pub readings: Vec<Reading>,

    /// Score computed for trials; blanks keep `None`
    #[serde(default)]
    pub result: Option<f64>,
}

fn default_include() -> bool {
    true
}

impl Test {
    /// Create an empty trial with the given name
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            report_as: name.to_string(),
            is_blank: false,
            to_consider: ReadingSelection::default(),
            include_on_rep: true,
            clarity: String::new(),
            notes: String::new(),
            readings: Vec::new(),
            result: None,
        }
    }

    /// Create an empty blank with the given name
    pub fn blank(name: &str) -> Self {
        Self {
            is_blank: true,
            ..Self::new(name)
        }
    }

    /// Append a reading
    pub fn push_reading(&mut self, reading: Reading) {
        self.readings.push(reading);
    }

    /// Elapsed minutes of the last reading, or zero with no readings
    pub fn duration_min(&self) -> f64 {
        self.readings.last().map(|r| r.elapsed_min).unwrap_or(0.0)
    }

    /// Whether this run is a trial (not a blank)
    pub fn is_trial(&self) -> bool {
        !self.is_blank
    }

    /// Label for reports, falling back to the name when unset
    pub fn label(&self) -> &str {
        if self.report_as.trim().is_empty() {
            &self.name
        } else {
            &self.report_as
        }
    }
}
