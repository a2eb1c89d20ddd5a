use crate::error::ConfigIssue;
use crate::math::{normalize_degrees, ANGLE_EPSILON};

/// The amount a full-circle sweep is shortened by, in degrees.
///
/// A sweep of exactly 360 would make the start and end of the arc coincide
/// and collapse the filled arc to zero area.
pub const FULL_CIRCLE_NUDGE: f64 = 0.01;

/// The canonical value range of an axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub minimum: f64,
    pub maximum: f64,
}

impl ValueRange {
    /// Returns `true` if the range has no extent. Degenerate ranges produce no
    /// ticks or labels.
    pub fn is_degenerate(&self) -> bool {
        self.maximum <= self.minimum
    }

    pub fn delta(&self) -> f64 {
        self.maximum - self.minimum
    }

    /// Clamps `value` into the range.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.minimum, self.maximum.max(self.minimum))
    }
}

/// The canonical angular span of an axis, in degrees.
///
/// `start` lies in `[0, 360)`, `end` is at least `start` and may exceed 360,
/// and `sweep` lies in `(0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleSpan {
    pub start: f64,
    pub end: f64,
    pub sweep: f64,
}

impl AngleSpan {
    /// Returns `true` if the span was requested as a full circle.
    pub fn is_full_circle(&self) -> bool {
        self.sweep >= 360.0 - FULL_CIRCLE_NUDGE - ANGLE_EPSILON
    }

    /// Returns `true` if `angle` lies within the span, both ends included.
    pub fn contains(&self, angle: f64) -> bool {
        angle >= self.start - ANGLE_EPSILON && angle <= self.end + ANGLE_EPSILON
    }
}

/// Validates `minimum` and `maximum` into a [`ValueRange`].
///
/// A reversed range is swapped. `NaN` bounds are replaced by `0`. Equal
/// bounds are kept and reported as degenerate.
pub fn normalize_range(minimum: f64, maximum: f64, issues: &mut Vec<ConfigIssue>) -> ValueRange {
    let minimum = replace_nan(minimum, "minimum", issues);
    let maximum = replace_nan(maximum, "maximum", issues);

    if minimum > maximum {
        issues.push(ConfigIssue::SwappedRange { minimum, maximum });
        return ValueRange {
            minimum: maximum,
            maximum: minimum,
        };
    }

    if minimum == maximum {
        issues.push(ConfigIssue::DegenerateRange(minimum));
    }

    ValueRange { minimum, maximum }
}

/// Normalizes user angles into an [`AngleSpan`].
pub fn normalize_angles(start: f64, end: f64, issues: &mut Vec<ConfigIssue>) -> AngleSpan {
    let start = normalize_degrees(replace_nan(start, "start angle", issues));
    let mut end = normalize_degrees(replace_nan(end, "end angle", issues));

    if (end - start).abs() < ANGLE_EPSILON {
        end -= FULL_CIRCLE_NUDGE;
    }

    while end < start {
        end += 360.0;
    }

    AngleSpan {
        start,
        end,
        sweep: end - start,
    }
}

fn replace_nan(value: f64, field: &'static str, issues: &mut Vec<ConfigIssue>) -> f64 {
    if value.is_nan() {
        issues.push(ConfigIssue::NotANumber {
            field,
            replacement: 0.0,
        });
        0.0
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn angles(start: f64, end: f64) -> AngleSpan {
        normalize_angles(start, end, &mut Vec::new())
    }

    #[test]
    fn default_gauge_wraps_past_360() {
        let span = angles(130.0, 50.0);
        assert_eq!(span.start, 130.0);
        assert_eq!(span.end, 410.0);
        assert_eq!(span.sweep, 280.0);
        assert!(!span.is_full_circle());
    }

    #[test]
    fn full_circle_keeps_a_positive_sweep() {
        for (start, end) in [(0.0, 360.0), (90.0, 90.0), (270.0, -90.0), (45.0, 765.0)] {
            let span = angles(start, end);
            assert!(span.sweep > 0.0 && span.sweep <= 360.0, "{start} {end}");
            assert!((span.sweep - 359.99).abs() < 1e-9, "{start} {end}");
            assert!(span.is_full_circle());
        }
    }

    #[test]
    fn start_is_reduced_into_one_turn() {
        let span = angles(-90.0, 0.0);
        assert_eq!(span.start, 270.0);
        assert_eq!(span.end, 360.0);
        assert_eq!(span.sweep, 90.0);

        let span = angles(540.0, 720.0 + 45.0);
        assert_eq!(span.start, 180.0);
        assert_eq!(span.end, 405.0);
    }

    #[test]
    fn nan_angles_are_reported() {
        let mut issues = Vec::new();
        let span = normalize_angles(f64::NAN, 90.0, &mut issues);
        assert_eq!(span.start, 0.0);
        assert_eq!(span.sweep, 90.0);
        assert_eq!(
            issues,
            vec![ConfigIssue::NotANumber {
                field: "start angle",
                replacement: 0.0
            }]
        );
    }

    #[test]
    fn reversed_range_is_swapped() {
        let mut issues = Vec::new();
        let range = normalize_range(100.0, 0.0, &mut issues);
        assert_eq!(range.minimum, 0.0);
        assert_eq!(range.maximum, 100.0);
        assert!(!range.is_degenerate());
        assert_eq!(
            issues,
            vec![ConfigIssue::SwappedRange {
                minimum: 100.0,
                maximum: 0.0
            }]
        );
    }

    #[test]
    fn equal_range_is_degenerate() {
        let mut issues = Vec::new();
        let range = normalize_range(5.0, 5.0, &mut issues);
        assert!(range.is_degenerate());
        assert_eq!(issues, vec![ConfigIssue::DegenerateRange(5.0)]);
    }
}
