//! Colored bands between two values along the axis.

use gaugevg_path::Fill;

use crate::axis_line::{ArcSegment, ArcShape};
use crate::config::{AxisConfig, RangeSpec};
use crate::math::PointF64;
use crate::placement::AxisMetrics;
use crate::scale::Scale;

#[cfg(feature = "gradient")]
use crate::axis_line::{gradient_fill, gradient_spans};

/// Builds the segments of every range of `config`.
///
/// Ranges are measured inwards from the outer edge of the axis line and
/// clamped to the axis range. `opacity` fades all of them at once.
pub fn build_ranges(
    config: &AxisConfig,
    scale: &Scale,
    metrics: &AxisMetrics,
    center: PointF64,
    opacity: f32,
) -> Vec<ArcSegment> {
    if opacity <= 0.0 || scale.range.is_degenerate() {
        return Vec::new();
    }

    config
        .ranges
        .iter()
        .flat_map(|range| build_range(range, scale, metrics, center, opacity))
        .collect()
}

fn build_range(
    range: &RangeSpec,
    scale: &Scale,
    metrics: &AxisMetrics,
    center: PointF64,
    opacity: f32,
) -> Vec<ArcSegment> {
    let basis = metrics.outer_radius;
    let start_value = scale.range.clamp(range.start_value);
    let end_value = scale.range.clamp(range.end_value);
    if start_value == end_value {
        return Vec::new();
    }

    let mut start = (scale.value_to_angle(start_value), range.start_width.resolve(basis));
    let mut end = (scale.value_to_angle(end_value), range.end_width.resolve(basis));
    if start.0 > end.0 {
        std::mem::swap(&mut start, &mut end);
    }

    let outer = (metrics.outer_radius - range.offset.resolve(basis)).max(0.0);
    if outer <= 0.0 {
        return Vec::new();
    }

    let shape = ArcShape::tapered(
        center,
        start.0,
        end.0,
        outer,
        (outer - start.1).max(0.0),
        (outer - end.1).max(0.0),
    );

    #[cfg(feature = "gradient")]
    if !range.gradient.is_empty() {
        let sweep = shape.end_angle - shape.start_angle;
        return gradient_spans(scale, shape.start_angle, shape.end_angle, &range.gradient)
            .iter()
            .map(|span| {
                let t0 = (span.start_angle - shape.start_angle) / sweep;
                let t1 = (span.end_angle - shape.start_angle) / sweep;
                let piece = ArcShape::tapered(
                    center,
                    span.start_angle,
                    span.end_angle,
                    outer,
                    shape.inner_radius_at(t0),
                    shape.inner_radius_at(t1),
                );
                let inner = piece.inner_start_radius.min(piece.inner_end_radius);
                ArcSegment::new(piece, gradient_fill(center, outer, inner, span).mul_alpha(opacity))
            })
            .collect();
    }

    vec![ArcSegment::new(shape, Fill::from(range.color).mul_alpha(opacity))]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::math::{point, size};
    use crate::style::Length;

    fn red() -> Color {
        Color::new(1.0, 0.0, 0.0, 1.0)
    }

    fn layout(config: &AxisConfig) -> (Scale, AxisMetrics) {
        let (scale, _) = Scale::from_config(config);
        let metrics = AxisMetrics::compute(config, 100.0, size(0.0, 0.0));
        (scale, metrics)
    }

    #[test]
    fn range_sits_inside_the_axis_line() {
        let config = AxisConfig::new()
            .with_ranges([RangeSpec::new(20.0, 60.0, red()).with_offset(2.0)]);
        let (scale, metrics) = layout(&config);
        let segments = build_ranges(&config, &scale, &metrics, point(0.0, 0.0), 1.0);

        assert_eq!(segments.len(), 1);
        let segment = &segments[0];
        assert_eq!(segment.outer_radius, metrics.outer_radius - 2.0);
        assert_eq!(segment.inner_start_radius, metrics.outer_radius - 12.0);
        assert_eq!(segment.start_angle, scale.value_to_angle(20.0));
        assert_eq!(segment.end_angle, scale.value_to_angle(60.0));
        assert!(segment.path.is_closed());
    }

    #[test]
    fn reversed_and_inversed_ranges_run_forwards() {
        let config = AxisConfig::new()
            .with_inversed(true)
            .with_ranges([RangeSpec::new(20.0, 60.0, red()).with_widths(4.0, 16.0)]);
        let (scale, metrics) = layout(&config);
        let segment = &build_ranges(&config, &scale, &metrics, point(0.0, 0.0), 1.0)[0];

        assert!(segment.start_angle < segment.end_angle);
        assert_eq!(segment.start_angle, scale.value_to_angle(60.0));
        // The wider end follows its value.
        assert_eq!(segment.inner_start_radius, metrics.outer_radius - 16.0);
        assert!(segment.is_tapered());
        assert!(segment.path.is_closed());
    }

    #[test]
    fn ranges_are_clamped_and_faded() {
        let config = AxisConfig::new().with_ranges([
            RangeSpec::new(-50.0, 150.0, red()).with_width(Length::factor(0.1)),
            RangeSpec::new(120.0, 150.0, red()),
        ]);
        let (scale, metrics) = layout(&config);
        let segments = build_ranges(&config, &scale, &metrics, point(0.0, 0.0), 0.5);

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].start_angle, 130.0);
        assert_eq!(segments[0].end_angle, 410.0);
        assert!((segments[0].inner_start_radius - metrics.outer_radius * 0.9).abs() < 1e-9);
        assert_eq!(segments[0].fill, Fill::from(red().mul_alpha(0.5)));

        assert!(build_ranges(&config, &scale, &metrics, point(0.0, 0.0), 0.0).is_empty());
    }

    #[cfg(feature = "gradient")]
    #[test]
    fn gradient_range_follows_the_taper() {
        use crate::gradient::GradientStops;

        let gradient = GradientStops::new()
            .add_stop(0.0, red())
            .add_stop(50.0, Color::new(0.0, 1.0, 0.0, 1.0))
            .add_stop(100.0, Color::new(0.0, 0.0, 1.0, 1.0));
        let config = AxisConfig::new().with_ranges([RangeSpec::new(0.0, 100.0, red())
            .with_widths(0.0, 20.0)
            .with_gradient(gradient)]);
        let (scale, metrics) = layout(&config);
        let segments = build_ranges(&config, &scale, &metrics, point(0.0, 0.0), 1.0);

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].inner_end_radius, segments[1].inner_start_radius);
        assert!((segments[1].inner_start_radius - (metrics.outer_radius - 10.0)).abs() < 1e-9);
        for segment in &segments {
            assert!(segment.path.is_closed());
        }
    }
}
