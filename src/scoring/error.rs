/// Reasons a scoring pass stops without touching any trial result
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringError {
    /// No blank is marked for inclusion on the report
    #[error("No blanks are included on the report; at least one is required to score trials")]
    InsufficientBlanks,

    /// The average protectable area is zero (or not a finite number)
    #[error(
        "Average protectable area is {avg_protectable_area} \
         (limit psi {limit_psi} * max readings {max_readings} - average blank area {avg_blank_area}); \
         trials cannot be scored against it"
    )]
    DegenerateDenominator {
        /// The offending denominator
        avg_protectable_area: f64,
        /// Average area over the included blanks
        avg_blank_area: f64,
        /// Pressure ceiling of the project
        limit_psi: f64,
        /// Expected reading count of a full-length test
        max_readings: usize,
    },

    /// A project parameter is unusable for scoring
    #[error("Invalid project parameter {name}: {value}")]
    InvalidParameter {
        /// Parameter name as it appears in project files
        name: &'static str,
        /// Rejected value
        value: f64,
    },
}
