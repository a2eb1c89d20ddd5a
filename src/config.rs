use crate::color::Color;
#[cfg(feature = "gradient")]
use crate::gradient::GradientStops;
use crate::style::{
    AxisLineStyle, LabelPosition, LabelStyle, Length, TickPosition, TickStyle,
};

/// The fraction of the available radius used by the axis, always within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "f64", into = "f64"))]
pub struct RadiusFactor(f64);

impl RadiusFactor {
    /// Creates a radius factor, clamping `factor` into `[0, 1]`.
    ///
    /// `NaN` is treated as `1`.
    pub fn new(factor: f64) -> Self {
        if factor.is_nan() {
            log::warn!("radius factor is not a number, using 1.0");
            return Self(1.0);
        }

        let clamped = factor.clamp(0.0, 1.0);
        if clamped != factor {
            log::warn!("radius factor {factor} is outside of 0.0..=1.0, clamped to {clamped}");
        }
        Self(clamped)
    }

    pub fn get(&self) -> f64 {
        self.0
    }
}

impl Default for RadiusFactor {
    fn default() -> Self {
        Self(0.95)
    }
}

impl From<f64> for RadiusFactor {
    fn from(f: f64) -> Self {
        Self::new(f)
    }
}

impl From<RadiusFactor> for f64 {
    fn from(f: RadiusFactor) -> Self {
        f.0
    }
}

/// A colored band along the axis between two values.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeSpec {
    pub start_value: f64,
    pub end_value: f64,
    /// Width of the band at `start_value`, measured inwards from its outer edge.
    pub start_width: Length,
    /// Width of the band at `end_value`. Differs from `start_width` for tapered bands.
    pub end_width: Length,
    /// Distance from the outer edge of the axis line to the outer edge of the band.
    pub offset: Length,
    pub color: Color,
    /// Colors along the value range. Overrides `color` when not empty.
    #[cfg(feature = "gradient")]
    pub gradient: GradientStops,
}

impl RangeSpec {
    pub fn new(start_value: f64, end_value: f64, color: impl Into<Color>) -> Self {
        Self {
            start_value,
            end_value,
            start_width: Length::px(10.0),
            end_width: Length::px(10.0),
            offset: Length::ZERO,
            color: color.into(),
            #[cfg(feature = "gradient")]
            gradient: GradientStops::new(),
        }
    }

    pub fn with_width(mut self, width: impl Into<Length>) -> Self {
        let width = width.into();
        self.start_width = width;
        self.end_width = width;
        self
    }

    pub fn with_widths(mut self, start: impl Into<Length>, end: impl Into<Length>) -> Self {
        self.start_width = start.into();
        self.end_width = end.into();
        self
    }

    pub fn with_offset(mut self, offset: impl Into<Length>) -> Self {
        self.offset = offset.into();
        self
    }

    #[cfg(feature = "gradient")]
    pub fn with_gradient(mut self, gradient: GradientStops) -> Self {
        self.gradient = gradient;
        self
    }

    /// Returns `true` if `value` lies between the two ends of this range.
    pub fn contains(&self, value: f64) -> bool {
        let (lo, hi) = if self.start_value <= self.end_value {
            (self.start_value, self.end_value)
        } else {
            (self.end_value, self.start_value)
        };
        value >= lo && value <= hi
    }

    /// The color this range shows at `value`.
    pub fn color_at(&self, value: f64) -> Color {
        #[cfg(feature = "gradient")]
        if let Some(color) = self.gradient.color_at(value) {
            return color;
        }

        let _ = value;
        self.color
    }
}

/// A pointer whose value is revealed by the pointer animation phase.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerSpec {
    pub value: f64,
}

impl PointerSpec {
    pub const fn new(value: f64) -> Self {
        Self { value }
    }
}

/// The user-facing configuration of a radial axis.
///
/// Values are kept as written; [`Scale::from_config`](crate::Scale::from_config)
/// derives the canonical range and angles from them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisConfig {
    pub minimum: f64,
    pub maximum: f64,
    /// Angle of the minimum in degrees, clockwise from the positive x-axis.
    pub start_angle: f64,
    /// Angle of the maximum in degrees, clockwise from the positive x-axis.
    pub end_angle: f64,
    pub is_inversed: bool,
    pub radius_factor: RadiusFactor,
    /// Moves and grows the axis so that a partial arc fills the available area.
    pub can_scale_to_fit: bool,

    /// Explicit distance between major ticks. `None` picks a nice interval.
    pub interval: Option<f64>,
    /// Label density budget in labels per 100 logical points of arc length.
    pub maximum_labels_count: f64,
    pub minor_ticks_per_interval: usize,

    pub show_axis_line: bool,
    pub show_ticks: bool,
    pub show_labels: bool,
    pub show_first_label: bool,
    pub show_last_label: bool,
    /// Rotates labels to follow the tangent of the axis.
    pub can_rotate_labels: bool,
    /// Colors ticks and labels with the color of the range their value falls in.
    pub use_range_color_for_axis: bool,

    pub tick_position: TickPosition,
    pub label_position: LabelPosition,
    pub tick_offset: Length,
    pub label_offset: Length,

    pub axis_line_style: AxisLineStyle,
    pub major_tick_style: TickStyle,
    pub minor_tick_style: TickStyle,
    pub label_style: LabelStyle,

    pub ranges: Vec<RangeSpec>,
    pub pointers: Vec<PointerSpec>,
    /// Number of annotations revealed by the annotation animation phase.
    pub annotation_count: usize,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            minimum: 0.0,
            maximum: 100.0,
            start_angle: 130.0,
            end_angle: 50.0,
            is_inversed: false,
            radius_factor: RadiusFactor::default(),
            can_scale_to_fit: false,
            interval: None,
            maximum_labels_count: 3.0,
            minor_ticks_per_interval: 1,
            show_axis_line: true,
            show_ticks: true,
            show_labels: true,
            show_first_label: true,
            show_last_label: true,
            can_rotate_labels: false,
            use_range_color_for_axis: false,
            tick_position: TickPosition::default(),
            label_position: LabelPosition::default(),
            tick_offset: Length::ZERO,
            label_offset: Length::px(4.0),
            axis_line_style: AxisLineStyle::default(),
            major_tick_style: TickStyle::major(),
            minor_tick_style: TickStyle::minor(),
            label_style: LabelStyle::default(),
            ranges: Vec::new(),
            pointers: Vec::new(),
            annotation_count: 0,
        }
    }
}

impl AxisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_range(mut self, minimum: f64, maximum: f64) -> Self {
        self.minimum = minimum;
        self.maximum = maximum;
        self
    }

    pub fn with_angles(mut self, start_angle: f64, end_angle: f64) -> Self {
        self.start_angle = start_angle;
        self.end_angle = end_angle;
        self
    }

    pub fn with_inversed(mut self, is_inversed: bool) -> Self {
        self.is_inversed = is_inversed;
        self
    }

    /// Sets the radius factor. Values outside `[0, 1]` are clamped.
    pub fn with_radius_factor(mut self, factor: f64) -> Self {
        self.radius_factor = RadiusFactor::new(factor);
        self
    }

    pub fn with_scale_to_fit(mut self, can_scale_to_fit: bool) -> Self {
        self.can_scale_to_fit = can_scale_to_fit;
        self
    }

    pub fn with_interval(mut self, interval: f64) -> Self {
        self.interval = Some(interval);
        self
    }

    pub fn with_maximum_labels_count(mut self, count: f64) -> Self {
        self.maximum_labels_count = count;
        self
    }

    pub fn with_minor_ticks_per_interval(mut self, count: usize) -> Self {
        self.minor_ticks_per_interval = count;
        self
    }

    pub fn with_positions(mut self, ticks: TickPosition, labels: LabelPosition) -> Self {
        self.tick_position = ticks;
        self.label_position = labels;
        self
    }

    pub fn with_offsets(mut self, tick: impl Into<Length>, label: impl Into<Length>) -> Self {
        self.tick_offset = tick.into();
        self.label_offset = label.into();
        self
    }

    pub fn with_axis_line_style(mut self, style: AxisLineStyle) -> Self {
        self.axis_line_style = style;
        self
    }

    pub fn with_label_style(mut self, style: LabelStyle) -> Self {
        self.label_style = style;
        self
    }

    pub fn with_labels_rotated(mut self, can_rotate_labels: bool) -> Self {
        self.can_rotate_labels = can_rotate_labels;
        self
    }

    pub fn with_first_last_labels(mut self, first: bool, last: bool) -> Self {
        self.show_first_label = first;
        self.show_last_label = last;
        self
    }

    pub fn with_ranges(mut self, ranges: impl IntoIterator<Item = RangeSpec>) -> Self {
        self.ranges = ranges.into_iter().collect();
        self
    }

    pub fn with_pointers(mut self, pointers: impl IntoIterator<Item = PointerSpec>) -> Self {
        self.pointers = pointers.into_iter().collect();
        self
    }

    /// The color of the first range containing `value`, when
    /// `use_range_color_for_axis` is enabled.
    pub fn range_color_at(&self, value: f64) -> Option<Color> {
        if !self.use_range_color_for_axis {
            return None;
        }

        self.ranges
            .iter()
            .find(|range| range.contains(value))
            .map(|range| range.color_at(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_factor_is_clamped_on_write() {
        assert_eq!(RadiusFactor::new(1.5).get(), 1.0);
        assert_eq!(RadiusFactor::new(-0.2).get(), 0.0);
        assert_eq!(RadiusFactor::new(0.4).get(), 0.4);
        assert_eq!(RadiusFactor::new(f64::NAN).get(), 1.0);

        let config = AxisConfig::new().with_radius_factor(1.5);
        assert_eq!(config.radius_factor.get(), 1.0);
    }

    #[test]
    fn defaults_describe_a_280_degree_gauge() {
        let config = AxisConfig::default();
        assert_eq!(config.minimum, 0.0);
        assert_eq!(config.maximum, 100.0);
        assert_eq!(config.start_angle, 130.0);
        assert_eq!(config.end_angle, 50.0);
    }

    #[test]
    fn range_color_requires_opt_in() {
        let red = Color::new(1.0, 0.0, 0.0, 1.0);
        let mut config = AxisConfig::new().with_ranges([RangeSpec::new(60.0, 20.0, red)]);
        assert_eq!(config.range_color_at(40.0), None);

        config.use_range_color_for_axis = true;
        assert_eq!(config.range_color_at(40.0), Some(red));
        assert_eq!(config.range_color_at(70.0), None);
    }
}
