/// A configuration defect that was corrected while normalizing an axis.
///
/// Issues are never returned as errors: the axis keeps drawing with the
/// corrected values and reports what it changed.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigIssue {
    #[error("minimum {minimum} is greater than maximum {maximum}, the bounds were swapped")]
    SwappedRange { minimum: f64, maximum: f64 },

    #[error("minimum and maximum are both {0}, labels and ticks are disabled")]
    DegenerateRange(f64),

    #[error("{field} is not a number and was replaced by {replacement}")]
    NotANumber {
        field: &'static str,
        replacement: f64,
    },

    #[error("interval {0} is not a positive number and was ignored")]
    InvalidInterval(f64),

    #[error("interval {0} produces too many ticks and was replaced by an automatic interval")]
    TooManyTicks(f64),
}
