use crate::config::AxisConfig;
use crate::error::ConfigIssue;
use crate::math::{unit_vector, PointF64, VectorF64};
use crate::range::{normalize_angles, normalize_range, AngleSpan, ValueRange};

/// Converts between axis values, normalized factors, angles and points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub range: ValueRange,
    pub span: AngleSpan,
    pub is_inversed: bool,
}

impl Scale {
    pub fn new(range: ValueRange, span: AngleSpan, is_inversed: bool) -> Self {
        Self {
            range,
            span,
            is_inversed,
        }
    }

    /// Normalizes the range and angles of `config`.
    ///
    /// Returns the scale together with every correction that was applied.
    pub fn from_config(config: &AxisConfig) -> (Self, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        let range = normalize_range(config.minimum, config.maximum, &mut issues);
        let span = normalize_angles(config.start_angle, config.end_angle, &mut issues);
        (Self::new(range, span, config.is_inversed), issues)
    }

    /// The position of `value` along the range, `0` at the minimum and `1`
    /// at the maximum (reversed when inversed).
    ///
    /// A degenerate range maps every value to `0`.
    pub fn value_to_factor(&self, value: f64) -> f64 {
        if self.range.is_degenerate() {
            return 0.0;
        }

        let factor = (value - self.range.minimum) / self.range.delta();
        if self.is_inversed {
            1.0 - factor
        } else {
            factor
        }
    }

    /// The inverse of [`Scale::value_to_factor`].
    pub fn factor_to_value(&self, factor: f64) -> f64 {
        let factor = if self.is_inversed {
            1.0 - factor
        } else {
            factor
        };
        self.range.minimum + factor * self.range.delta()
    }

    pub fn factor_to_angle(&self, factor: f64) -> f64 {
        self.span.start + factor * self.span.sweep
    }

    pub fn angle_to_factor(&self, angle: f64) -> f64 {
        (angle - self.span.start) / self.span.sweep
    }

    pub fn value_to_angle(&self, value: f64) -> f64 {
        self.factor_to_angle(self.value_to_factor(value))
    }

    pub fn angle_to_value(&self, angle: f64) -> f64 {
        self.factor_to_value(self.angle_to_factor(angle))
    }

    /// The unit vector at `factor` along the sweep.
    pub fn factor_to_unit(&self, factor: f64) -> VectorF64 {
        unit_vector(self.factor_to_angle(factor))
    }

    pub fn value_to_unit(&self, value: f64) -> VectorF64 {
        self.factor_to_unit(self.value_to_factor(value))
    }

    /// The screen point of `value` on the circle around `center`.
    pub fn value_to_point(&self, value: f64, center: PointF64, radius: f64) -> PointF64 {
        center + self.value_to_unit(value) * radius
    }
}
