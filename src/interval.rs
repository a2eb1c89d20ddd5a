//! Major interval selection and tick value generation.

use std::f64::consts::PI;

use crate::center_fit::usable_size;
use crate::error::ConfigIssue;
use crate::math::{round_to, SizeF64};
use crate::range::{AngleSpan, ValueRange};

/// Multipliers of a power of ten that make a "nice" interval, largest first.
const NICE_DIVISIONS: [f64; 4] = [10.0, 5.0, 2.0, 1.0];

/// Significant digits below the interval kept when stripping floating point
/// drift from scale values.
const VALUE_PRECISION: i32 = 9;

/// Explicit intervals that would produce more major values than this are
/// replaced by the automatic interval.
pub const MAX_MAJOR_VALUES: f64 = 1000.0;

/// Digits printed beyond the magnitude of the interval at most.
const MAX_EXTRA_DECIMALS: i32 = 6;

/// The largest decimal count `round_to` can scale by without overflowing.
const MAX_DECIMALS: i32 = 300;

/// Relative tolerance when comparing generated values to the range bounds.
const STEP_EPSILON: f64 = 1e-9;

/// The values of the major and minor ticks of an axis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScaleValues {
    pub interval: f64,
    pub majors: Vec<f64>,
    pub minors: Vec<f64>,
}

/// The length of the visible arc in logical points for an axis that fills
/// `available`.
pub fn arc_length(available: SizeF64, span: &AngleSpan) -> f64 {
    let available = usable_size(available);
    let radius = available.width.min(available.height) / 2.0;
    2.0 * PI * radius.max(0.0) * span.sweep / 360.0
}

/// The number of intervals the label density budget allows on an arc of
/// `arc_length` logical points.
pub fn desired_interval_count(arc_length: f64, maximum_labels_count: f64) -> f64 {
    let count = arc_length * maximum_labels_count / 100.0;
    if count.is_finite() {
        count.max(1.0)
    } else {
        1.0
    }
}

/// Picks an interval of the form `{1, 2, 5, 10} × 10^k` that splits `delta`
/// into at most `desired_count` intervals.
pub fn nice_interval(delta: f64, desired_count: f64) -> f64 {
    let mut nice = delta / desired_count;
    let magnitude = 10f64.powf(nice.log10().floor());

    for division in NICE_DIVISIONS {
        let candidate = magnitude * division;
        if desired_count < delta / candidate {
            break;
        }
        nice = candidate;
    }

    nice
}

/// Resolves the major interval: `explicit` when usable, otherwise a nice
/// interval fitting the density budget.
pub fn resolve_interval(
    explicit: Option<f64>,
    range: &ValueRange,
    span: &AngleSpan,
    available: SizeF64,
    maximum_labels_count: f64,
    issues: &mut Vec<ConfigIssue>,
) -> f64 {
    if let Some(interval) = explicit {
        if !(interval.is_finite() && interval > 0.0) {
            issues.push(ConfigIssue::InvalidInterval(interval));
        } else if range.delta() / interval > MAX_MAJOR_VALUES {
            log::warn!(
                "interval {interval} splits a range of {} into too many ticks, using an automatic interval",
                range.delta()
            );
            issues.push(ConfigIssue::TooManyTicks(interval));
        } else {
            return interval;
        }
    }

    let desired = desired_interval_count(arc_length(available, span), maximum_labels_count);
    nice_interval(range.delta(), desired)
}

/// The values of the major ticks: every `interval` from the minimum, plus
/// the maximum when the steps do not land on it.
///
/// At most [`MAX_MAJOR_VALUES`] steps are taken before the maximum is
/// appended.
pub fn major_values(range: &ValueRange, interval: f64) -> Vec<f64> {
    if range.is_degenerate() || !(interval > 0.0) {
        return Vec::new();
    }

    let tolerance = interval * STEP_EPSILON;
    let mut values: Vec<f64> = Vec::new();

    for step in 0..MAX_MAJOR_VALUES as u32 {
        let value = snap(range.minimum + f64::from(step) * interval, interval);
        if value > range.maximum + tolerance {
            break;
        }
        push_increasing(&mut values, value.min(range.maximum));
    }

    match values.last() {
        Some(&last) if last < range.maximum - tolerance => values.push(range.maximum),
        _ => {}
    }

    values
}

/// The values of `per_interval` minor ticks between each pair of majors.
///
/// Minor ticks that would land on or past the next major are dropped, which
/// happens in the shortened last interval.
pub fn minor_values(majors: &[f64], interval: f64, per_interval: usize) -> Vec<f64> {
    if per_interval == 0 || !(interval > 0.0) {
        return Vec::new();
    }

    let step = interval / (per_interval as f64 + 1.0);
    let tolerance = step * 1e-6;
    let mut values = Vec::new();

    for pair in majors.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        for i in 1..=per_interval {
            let value = snap(from + i as f64 * step, step);
            if value >= to - tolerance {
                break;
            }
            if value > from {
                push_increasing(&mut values, value);
            }
        }
    }

    values
}

/// The power of ten of the leading digit of `value`.
fn magnitude(value: f64) -> i32 {
    if value == 0.0 || !value.is_finite() {
        return 0;
    }

    let mut exponent = value.abs().log10().floor() as i32;
    // `log10` may land just below an exact power of ten.
    if 10f64.powi(exponent + 1) <= value.abs() {
        exponent += 1;
    }
    exponent
}

/// Strips floating point drift from `value`, keeping [`VALUE_PRECISION`]
/// digits below the magnitude of `step`.
fn snap(value: f64, step: f64) -> f64 {
    let decimals = (VALUE_PRECISION - magnitude(step)).clamp(-MAX_DECIMALS, MAX_DECIMALS);
    let snapped = round_to(value, decimals);
    if snapped.is_finite() {
        snapped
    } else {
        value
    }
}

fn push_increasing(values: &mut Vec<f64>, value: f64) {
    if values.last().map_or(true, |&last| value > last) {
        values.push(value);
    }
}

/// Generates the tick values for a range.
pub fn plan(range: &ValueRange, interval: f64, minor_per_interval: usize) -> ScaleValues {
    let majors = major_values(range, interval);
    let minors = minor_values(&majors, interval, minor_per_interval);

    ScaleValues {
        interval,
        majors,
        minors,
    }
}

/// The number of decimal places needed to print values that are multiples
/// of `interval`.
pub fn decimal_places(interval: f64) -> usize {
    if !(interval.is_finite() && interval > 0.0) {
        return 0;
    }

    let most = (MAX_EXTRA_DECIMALS - magnitude(interval)).clamp(0, MAX_DECIMALS);
    (0..=most)
        .find(|&d| (round_to(interval, d) - interval).abs() <= interval * 1e-9)
        .unwrap_or(most) as usize
}

/// Formats a label value with the decimal places of `interval`.
pub fn format_value(value: f64, interval: f64) -> String {
    let decimals = decimal_places(interval);
    let text = format!("{value:.decimals$}");
    // Avoid printing "-0".
    if text.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') {
        text.trim_start_matches('-').to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::size;
    use crate::range::normalize_angles;

    fn range(minimum: f64, maximum: f64) -> ValueRange {
        ValueRange { minimum, maximum }
    }

    #[test]
    fn nice_interval_stays_within_budget() {
        assert_eq!(nice_interval(100.0, 7.3), 20.0);
        assert_eq!(nice_interval(100.0, 22.0), 5.0);
        assert_eq!(nice_interval(100.0, 10.0), 10.0);
        assert_eq!(nice_interval(1.0, 4.0), 0.5);
        assert_eq!(nice_interval(100.0, 1.0), 100.0);
    }

    #[test]
    fn auto_interval_is_a_nice_step() {
        let span = normalize_angles(130.0, 50.0, &mut Vec::new());
        let r = range(0.0, 100.0);
        let available = size(100.0, 100.0);
        let interval = resolve_interval(None, &r, &span, available, 3.0, &mut Vec::new());
        assert!([10.0, 20.0, 25.0, 50.0].contains(&interval), "{interval}");

        let desired = desired_interval_count(arc_length(available, &span), 3.0);
        assert!(r.delta() / interval <= desired);
    }

    #[test]
    fn invalid_explicit_interval_is_reported() {
        let span = normalize_angles(130.0, 50.0, &mut Vec::new());
        let mut issues = Vec::new();
        let interval = resolve_interval(
            Some(-5.0),
            &range(0.0, 100.0),
            &span,
            size(100.0, 100.0),
            3.0,
            &mut issues,
        );
        assert!(interval > 0.0);
        assert_eq!(issues, vec![ConfigIssue::InvalidInterval(-5.0)]);
    }

    #[test]
    fn majors_end_on_the_maximum() {
        assert_eq!(
            major_values(&range(0.0, 100.0), 30.0),
            vec![0.0, 30.0, 60.0, 90.0, 100.0]
        );
        assert_eq!(
            major_values(&range(0.0, 100.0), 25.0),
            vec![0.0, 25.0, 50.0, 75.0, 100.0]
        );
    }

    #[test]
    fn majors_do_not_drift() {
        let values = major_values(&range(0.0, 1.0), 0.1);
        assert_eq!(values.len(), 11);
        assert_eq!(values[3], 0.3);
        assert_eq!(*values.last().unwrap(), 1.0);
    }

    #[test]
    fn tiny_ranges_step_without_repeats() {
        for (maximum, interval) in [(1e-12, 1e-13), (1e-10, 1e-11), (3e-9, 5e-10)] {
            let values = major_values(&range(0.0, maximum), interval);
            assert!(values.windows(2).all(|w| w[0] < w[1]), "{values:?}");
            assert!(values.len() as f64 <= maximum / interval + 2.0, "{values:?}");
            assert_eq!(values[0], 0.0);
            assert_eq!(*values.last().unwrap(), maximum);
        }

        let values = major_values(&range(0.0, 1e-12), 1e-13);
        assert_eq!(values.len(), 11);
        let minors = minor_values(&values, 1e-13, 1);
        assert_eq!(minors.len(), 10);
        assert!(minors.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn major_values_are_capped() {
        let values = major_values(&range(0.0, 1e6), 1e-6);
        assert_eq!(values.len(), MAX_MAJOR_VALUES as usize + 1);
        assert_eq!(*values.last().unwrap(), 1e6);
    }

    #[test]
    fn dense_explicit_interval_falls_back_to_automatic() {
        let span = normalize_angles(130.0, 50.0, &mut Vec::new());
        let mut issues = Vec::new();
        let r = range(0.0, 1e6);
        let interval = resolve_interval(
            Some(1e-6),
            &r,
            &span,
            size(100.0, 100.0),
            3.0,
            &mut issues,
        );

        assert!(r.delta() / interval <= MAX_MAJOR_VALUES, "{interval}");
        assert_eq!(issues, vec![ConfigIssue::TooManyTicks(1e-6)]);

        let mut issues = Vec::new();
        let exact = resolve_interval(Some(1000.0), &r, &span, size(100.0, 100.0), 3.0, &mut issues);
        assert_eq!(exact, 1000.0);
        assert!(issues.is_empty());
    }

    #[test]
    fn degenerate_range_has_no_ticks() {
        assert!(major_values(&range(5.0, 5.0), 1.0).is_empty());
    }

    #[test]
    fn minors_fill_each_interval() {
        let majors = vec![0.0, 10.0, 20.0];
        assert_eq!(
            minor_values(&majors, 10.0, 4),
            vec![2.0, 4.0, 6.0, 8.0, 12.0, 14.0, 16.0, 18.0]
        );
    }

    #[test]
    fn minors_stop_at_the_shortened_last_interval() {
        let majors = vec![0.0, 30.0, 60.0, 90.0, 100.0];
        let minors = minor_values(&majors, 30.0, 2);
        assert_eq!(minors, vec![10.0, 20.0, 40.0, 50.0, 70.0, 80.0]);
    }

    #[test]
    fn formats_with_interval_precision() {
        assert_eq!(format_value(20.0, 20.0), "20");
        assert_eq!(format_value(0.5, 0.25), "0.50");
        assert_eq!(format_value(-0.0, 1.0), "0");
        assert_eq!(decimal_places(0.1), 1);
    }

    #[test]
    fn small_intervals_keep_labels_apart() {
        assert_eq!(decimal_places(1e-8), 8);
        assert_eq!(decimal_places(1e-13), 13);
        assert_ne!(format_value(3e-8, 1e-8), format_value(0.0, 1e-8));
        assert_eq!(format_value(3e-8, 1e-8), "0.00000003");
        assert_ne!(format_value(1e-10, 1e-10), format_value(0.0, 1e-10));
        assert_eq!(decimal_places(f64::NAN), 0);
    }
}
