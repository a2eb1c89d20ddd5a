//! Filled arc geometry for the axis line and ranges.
//!
//! An arc is a closed ring segment: the outer edge is traced forwards, the
//! inner edge backwards, optionally joined by half circle caps. Dash patterns
//! split the arc into several segments, and gradients split it at every
//! stop so that each segment can be filled with a two-stop linear gradient.

use gaugevg_path::{ArcPath, Fill, Path, PathBuilder};

use crate::center_fit::arc_unit_bounds;
use crate::config::AxisConfig;
use crate::math::{point, point_on_circle, Box2DF64, PointF64, ANGLE_EPSILON};
use crate::placement::{corner_angle, AxisMetrics};
use crate::scale::Scale;
use crate::style::{CornerStyle, DashArray};

#[cfg(feature = "gradient")]
use crate::color::Color;
#[cfg(feature = "gradient")]
use crate::gradient::{GradientStops, LinearGradient};

/// Angle in degrees between the vertices of a tapered inner edge.
const TAPER_STEP: f64 = 2.0;

/// Dash patterns that would produce more spans than this draw a solid line.
const MAX_DASH_SPANS: f64 = 4096.0;

/// A ring segment between two angles.
///
/// When `inner_start_radius` and `inner_end_radius` differ the segment is
/// tapered: its inner edge moves linearly from one radius to the other and
/// it never gets caps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcShape {
    pub center: PointF64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub outer_radius: f64,
    pub inner_start_radius: f64,
    pub inner_end_radius: f64,
    pub start_cap: bool,
    pub end_cap: bool,
}

impl ArcShape {
    /// A ring segment of constant thickness with flat ends.
    pub fn ring(center: PointF64, start_angle: f64, end_angle: f64, outer: f64, inner: f64) -> Self {
        Self {
            center,
            start_angle,
            end_angle,
            outer_radius: outer,
            inner_start_radius: inner,
            inner_end_radius: inner,
            start_cap: false,
            end_cap: false,
        }
    }

    /// A ring segment whose inner radius changes from `inner_start` to
    /// `inner_end`.
    pub fn tapered(
        center: PointF64,
        start_angle: f64,
        end_angle: f64,
        outer: f64,
        inner_start: f64,
        inner_end: f64,
    ) -> Self {
        Self {
            inner_start_radius: inner_start,
            inner_end_radius: inner_end,
            ..Self::ring(center, start_angle, end_angle, outer, inner_start)
        }
    }

    pub fn with_caps(mut self, start: bool, end: bool) -> Self {
        self.start_cap = start;
        self.end_cap = end;
        self
    }

    pub fn is_tapered(&self) -> bool {
        (self.inner_start_radius - self.inner_end_radius).abs() > f64::EPSILON
    }

    /// The inner radius at `t` along the sweep, from `0` at the start to `1`
    /// at the end.
    pub fn inner_radius_at(&self, t: f64) -> f64 {
        let radius = self.inner_start_radius + (self.inner_end_radius - self.inner_start_radius) * t;
        radius.max(0.0)
    }

    /// Builds the closed outline of this segment.
    pub fn build_path(&self) -> Path {
        let thickness = (self.outer_radius - self.inner_start_radius).max(0.0);
        let caps = !self.is_tapered() && thickness > 0.0;
        let start_cap = caps && self.start_cap;
        let end_cap = caps && self.end_cap;

        let mid = self.outer_radius - thickness / 2.0;
        let corner = if caps {
            corner_angle(thickness, mid)
        } else {
            0.0
        };

        let mut start = self.start_angle + if start_cap { corner } else { 0.0 };
        let mut end = self.end_angle - if end_cap { corner } else { 0.0 };
        if start > end {
            // Too short for its caps, which now meet in the middle.
            let middle = (self.start_angle + self.end_angle) / 2.0;
            start = middle;
            end = middle;
        }

        let mut builder = PathBuilder::new().arc(ArcPath::from_degrees(
            self.center,
            self.outer_radius,
            start,
            end,
        ));

        if end_cap {
            let cap_center = point_on_circle(self.center, mid, end);
            builder = builder.arc(ArcPath::from_degrees(
                cap_center,
                thickness / 2.0,
                end,
                end + 180.0,
            ));
        }

        builder = if self.is_tapered() {
            self.trace_tapered_inner_edge(builder, start, end)
        } else {
            builder.arc(ArcPath::from_degrees(
                self.center,
                self.inner_start_radius.max(0.0),
                end,
                start,
            ))
        };

        if start_cap {
            let cap_center = point_on_circle(self.center, mid, start);
            builder = builder.arc(ArcPath::from_degrees(
                cap_center,
                thickness / 2.0,
                start + 180.0,
                start + 360.0,
            ));
        }

        builder.close().build()
    }

    fn trace_tapered_inner_edge(&self, mut builder: PathBuilder, start: f64, end: f64) -> PathBuilder {
        let sweep = end - start;
        let steps = ((sweep / TAPER_STEP).ceil() as usize).max(1);

        for i in (0..=steps).rev() {
            let t = i as f64 / steps as f64;
            let angle = start + sweep * t;
            builder = builder.line_to(point_on_circle(self.center, self.inner_radius_at(t), angle));
        }

        builder
    }
}

/// A filled piece of the axis line or of a range.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcSegment {
    pub start_angle: f64,
    pub end_angle: f64,
    pub outer_radius: f64,
    pub inner_start_radius: f64,
    pub inner_end_radius: f64,
    pub fill: Fill,
    pub path: Path,
}

impl ArcSegment {
    pub fn new(shape: ArcShape, fill: impl Into<Fill>) -> Self {
        Self {
            start_angle: shape.start_angle,
            end_angle: shape.end_angle,
            outer_radius: shape.outer_radius,
            inner_start_radius: shape.inner_start_radius,
            inner_end_radius: shape.inner_end_radius,
            fill: fill.into(),
            path: shape.build_path(),
        }
    }

    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    pub fn is_tapered(&self) -> bool {
        (self.inner_start_radius - self.inner_end_radius).abs() > f64::EPSILON
    }
}

/// Splits `[start, end]` into the drawn spans of a dash pattern measured
/// along a circle of `radius`.
///
/// The last span is clipped to `end`. Invalid patterns yield a single span.
pub fn dash_spans(start: f64, end: f64, radius: f64, dash: &DashArray) -> Vec<(f64, f64)> {
    if !dash.is_valid() || radius <= 0.0 {
        return vec![(start, end)];
    }

    let dash_angle = (dash.dash / radius).to_degrees();
    let gap_angle = (dash.gap / radius).to_degrees();
    if (end - start) / (dash_angle + gap_angle) > MAX_DASH_SPANS {
        log::warn!(
            "dash pattern {} / {} is too dense for the axis line, drawing it solid",
            dash.dash,
            dash.gap
        );
        return vec![(start, end)];
    }

    let mut spans = Vec::new();
    let mut from = start;
    while from < end - ANGLE_EPSILON {
        let to = (from + dash_angle).min(end);
        spans.push((from, to));
        from = to + gap_angle;
    }

    spans
}

/// A span of the axis with the colors at both of its ends.
#[cfg(feature = "gradient")]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientSpan {
    pub start_angle: f64,
    pub end_angle: f64,
    pub start_color: Color,
    pub end_color: Color,
}

/// Splits `[start, end]` at the angle of every gradient stop inside it.
///
/// Spans wider than 180 degrees are halved, the two halves sharing the color
/// in their middle.
#[cfg(feature = "gradient")]
pub fn gradient_spans(scale: &Scale, start: f64, end: f64, stops: &GradientStops) -> Vec<GradientSpan> {
    let mut cuts: Vec<f64> = Vec::with_capacity(stops.len() + 2);
    cuts.push(start);
    cuts.extend(
        stops
            .iter()
            .map(|stop| scale.value_to_angle(stop.value))
            .filter(|&angle| angle > start + ANGLE_EPSILON && angle < end - ANGLE_EPSILON),
    );
    cuts.push(end);
    cuts.sort_by(f64::total_cmp);
    cuts.dedup_by(|a, b| (*a - *b).abs() < ANGLE_EPSILON);

    let color_at = |angle: f64| {
        stops
            .color_at(scale.angle_to_value(angle))
            .unwrap_or(Color::TRANSPARENT)
    };

    let mut spans = Vec::with_capacity(cuts.len());
    for pair in cuts.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let (from_color, to_color) = (color_at(from), color_at(to));

        if to - from > 180.0 {
            let middle = (from + to) / 2.0;
            let middle_color = from_color.lerp(to_color, 0.5);
            spans.push(GradientSpan {
                start_angle: from,
                end_angle: middle,
                start_color: from_color,
                end_color: middle_color,
            });
            spans.push(GradientSpan {
                start_angle: middle,
                end_angle: to,
                start_color: middle_color,
                end_color: to_color,
            });
        } else {
            spans.push(GradientSpan {
                start_angle: from,
                end_angle: to,
                start_color: from_color,
                end_color: to_color,
            });
        }
    }

    spans
}

/// The gradient vector for a segment starting at `start_angle`, as points
/// relative to the segment's bounding box.
pub fn gradient_direction(start_angle: f64) -> (PointF64, PointF64) {
    let angle = crate::math::normalize_degrees(start_angle);
    if angle < 90.0 {
        (point(1.0, 0.0), point(0.0, 1.0))
    } else if angle < 180.0 {
        (point(1.0, 1.0), point(0.0, 0.0))
    } else if angle < 270.0 {
        (point(0.0, 1.0), point(1.0, 0.0))
    } else {
        (point(0.0, 0.0), point(1.0, 1.0))
    }
}

/// The bounding box of a ring segment.
pub fn segment_bounds(center: PointF64, start: f64, end: f64, outer: f64, inner: f64) -> Box2DF64 {
    let unit = arc_unit_bounds(start, end);
    let scaled = |radius: f64| {
        Box2DF64::new(
            center + unit.min.to_vector() * radius,
            center + unit.max.to_vector() * radius,
        )
    };
    scaled(outer).union(&scaled(inner.max(0.0)))
}

/// A linear gradient fill running across the bounding box of a segment.
#[cfg(feature = "gradient")]
pub fn gradient_fill(center: PointF64, outer: f64, inner: f64, span: &GradientSpan) -> Fill {
    let bounds = segment_bounds(center, span.start_angle, span.end_angle, outer, inner);
    let (from, to) = gradient_direction(span.start_angle);
    let at = |relative: PointF64| {
        point(
            bounds.min.x + relative.x * bounds.width(),
            bounds.min.y + relative.y * bounds.height(),
        )
    };

    Fill::from(LinearGradient::new(
        at(from),
        at(to),
        span.start_color,
        span.end_color,
    ))
}

/// Builds the segments of the axis line.
///
/// `reveal` is the visible share of the sweep, from `0` (nothing) to `1`
/// (the whole axis).
pub fn build_axis_line(
    config: &AxisConfig,
    scale: &Scale,
    metrics: &AxisMetrics,
    center: PointF64,
    reveal: f64,
) -> Vec<ArcSegment> {
    if !config.show_axis_line || metrics.thickness <= 0.0 || metrics.outer_radius <= 0.0 || reveal <= 0.0 {
        return Vec::new();
    }

    let style = &config.axis_line_style;
    let start = scale.span.start;
    let end = start + scale.span.sweep * reveal.min(1.0);
    let outer = metrics.outer_radius;
    let inner = metrics.inner_radius();

    let start_cap = style.corner_style.contains(CornerStyle::START_CURVE);
    let end_cap = style.corner_style.contains(CornerStyle::END_CURVE);
    let shape = |from: f64, to: f64| {
        ArcShape::ring(center, from, to, outer, inner).with_caps(
            start_cap && (from - start).abs() < ANGLE_EPSILON,
            end_cap && (to - end).abs() < ANGLE_EPSILON,
        )
    };

    if let Some(dash) = style.dash_array.filter(DashArray::is_valid) {
        return dash_spans(start, end, metrics.mid_radius(), &dash)
            .into_iter()
            .map(|(from, to)| {
                let color = line_color_at(config, scale, (from + to) / 2.0);
                ArcSegment::new(shape(from, to), color)
            })
            .collect();
    }

    #[cfg(feature = "gradient")]
    if !style.gradient.is_empty() {
        return gradient_spans(scale, start, end, &style.gradient)
            .iter()
            .map(|span| {
                ArcSegment::new(
                    shape(span.start_angle, span.end_angle),
                    gradient_fill(center, outer, inner, span),
                )
            })
            .collect();
    }

    vec![ArcSegment::new(shape(start, end), style.color)]
}

fn line_color_at(config: &AxisConfig, scale: &Scale, angle: f64) -> crate::color::Color {
    let style = &config.axis_line_style;

    #[cfg(feature = "gradient")]
    if let Some(color) = style.gradient.color_at(scale.angle_to_value(angle)) {
        return color;
    }

    let _ = (scale, angle);
    style.color
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::size;
    use crate::style::AxisLineStyle;

    fn metrics(config: &AxisConfig) -> AxisMetrics {
        AxisMetrics::compute(config, 100.0, size(0.0, 0.0))
    }

    #[test]
    fn ring_paths_are_closed() {
        let center = point(100.0, 100.0);
        for shape in [
            ArcShape::ring(center, 130.0, 410.0, 90.0, 80.0),
            ArcShape::ring(center, 130.0, 410.0, 90.0, 80.0).with_caps(true, true),
            ArcShape::ring(center, 0.0, 359.99, 90.0, 80.0),
            ArcShape::ring(center, 10.0, 11.0, 90.0, 80.0).with_caps(true, true),
            ArcShape::ring(center, 10.0, 60.0, 90.0, 0.0),
            ArcShape::tapered(center, 200.0, 300.0, 90.0, 88.0, 70.0),
        ] {
            let path = shape.build_path();
            assert_eq!(path.sub_path_count(), 1);
            assert!(path.is_closed(), "{shape:?}");
            assert_eq!(path.first_point(), path.last_point());
        }
    }

    #[test]
    fn caps_shorten_the_outer_edge() {
        let center = point(0.0, 0.0);
        let shape = ArcShape::ring(center, 180.0, 360.0, 50.0, 40.0).with_caps(true, false);
        let first = shape.build_path().first_point().unwrap();
        let expected = point_on_circle(center, 50.0, 180.0 + corner_angle(10.0, 45.0));
        assert!((first - expected).length() < 1e-3);
    }

    #[test]
    fn caps_round_the_end_corner() {
        let center = point(0.0, 0.0);
        let flat = ArcShape::ring(center, 180.0, 270.0, 50.0, 40.0).build_path();
        let capped = ArcShape::ring(center, 180.0, 270.0, 50.0, 40.0)
            .with_caps(false, true)
            .build_path();

        let flat = flat.bounding_rect().unwrap();
        let capped = capped.bounding_rect().unwrap();
        // The cap stays within the sweep but cuts off the outer corner.
        assert!((capped.max_x() - flat.max_x()).abs() < 0.05);
        assert!(capped.min_y() > flat.min_y() + 0.1);
    }

    #[test]
    fn tapered_inner_edge_moves_between_radii() {
        let center = point(0.0, 0.0);
        let path = ArcShape::tapered(center, 0.0, 90.0, 50.0, 45.0, 20.0).build_path();
        assert!(path.is_closed());

        let reaches = |x: f32, y: f32| {
            path.raw.iter().any(|event| match event {
                gaugevg_path::lyon::path::PathEvent::Line { to, .. } => {
                    (to.x - x).abs() < 1e-3 && (to.y - y).abs() < 1e-3
                }
                _ => false,
            })
        };
        assert!(reaches(0.0, 20.0));
        assert!(reaches(45.0, 0.0));
    }

    #[test]
    fn dashes_alternate_and_clip() {
        let radius = 180.0 / std::f64::consts::PI;
        // One logical point is one degree on this radius.
        let spans = dash_spans(0.0, 25.0, radius, &DashArray::new(4.0, 2.0));
        assert_eq!(spans.len(), 5);
        assert!((spans[1].0 - 6.0).abs() < 1e-9);
        assert!((spans[4].0 - 24.0).abs() < 1e-9);
        assert_eq!(spans[4].1, 25.0);

        assert_eq!(dash_spans(0.0, 25.0, radius, &DashArray::new(0.0, 2.0)), vec![(0.0, 25.0)]);
    }

    #[test]
    fn dashed_axis_caps_first_and_last_span() {
        let config = AxisConfig::new().with_axis_line_style(
            AxisLineStyle::default()
                .with_corner_style(CornerStyle::BOTH_CURVE)
                .with_dash_array(DashArray::new(20.0, 10.0)),
        );
        let (scale, _) = Scale::from_config(&config);
        let segments = build_axis_line(&config, &scale, &metrics(&config), point(0.0, 0.0), 1.0);

        assert!(segments.len() > 2);
        assert_eq!(segments[0].start_angle, 130.0);
        assert_eq!(segments.last().unwrap().end_angle, 410.0);
        for segment in &segments {
            assert!(segment.path.is_closed());
        }
    }

    #[test]
    fn quadrant_lookup() {
        assert_eq!(gradient_direction(45.0), (point(1.0, 0.0), point(0.0, 1.0)));
        assert_eq!(gradient_direction(90.0), (point(1.0, 1.0), point(0.0, 0.0)));
        assert_eq!(gradient_direction(200.0), (point(0.0, 1.0), point(1.0, 0.0)));
        assert_eq!(gradient_direction(390.0), (point(1.0, 0.0), point(0.0, 1.0)));
        assert_eq!(gradient_direction(300.0), (point(0.0, 0.0), point(1.0, 1.0)));
    }

    #[test]
    fn partial_reveal_shortens_the_line() {
        let config = AxisConfig::new();
        let (scale, _) = Scale::from_config(&config);
        let m = metrics(&config);
        let segments = build_axis_line(&config, &scale, &m, point(0.0, 0.0), 0.5);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].end_angle, 270.0);
        assert!(build_axis_line(&config, &scale, &m, point(0.0, 0.0), 0.0).is_empty());
    }

    #[cfg(feature = "gradient")]
    mod gradient {
        use super::*;
        use crate::color::Color;
        use crate::gradient::GradientStops;

        fn stops() -> GradientStops {
            GradientStops::new()
                .add_stop(0.0, Color::new(1.0, 0.0, 0.0, 1.0))
                .add_stop(20.0, Color::new(0.0, 1.0, 0.0, 1.0))
                .add_stop(80.0, Color::new(0.0, 0.0, 1.0, 1.0))
        }

        #[test]
        fn wide_spans_are_halved() {
            let config = AxisConfig::new().with_angles(0.0, 330.0);
            let (scale, _) = Scale::from_config(&config);
            let spans = gradient_spans(&scale, 0.0, 330.0, &stops());

            assert_eq!(spans.len(), 4);
            assert!((spans[0].end_angle - 66.0).abs() < 1e-9);
            assert!((spans[1].end_angle - 165.0).abs() < 1e-9);
            assert_eq!(spans[1].end_color, spans[2].start_color);
            assert!((spans[2].end_angle - 264.0).abs() < 1e-9);
            assert_eq!(spans[3].end_angle, 330.0);
        }

        #[test]
        fn gradient_axis_has_a_segment_per_span() {
            let config = AxisConfig::new()
                .with_angles(0.0, 330.0)
                .with_axis_line_style(AxisLineStyle::default().with_gradient(stops()));
            let (scale, _) = Scale::from_config(&config);
            let segments = build_axis_line(&config, &scale, &metrics(&config), point(0.0, 0.0), 1.0);

            assert_eq!(segments.len(), 4);
            for segment in &segments {
                assert!(matches!(segment.fill.style, gaugevg_path::FillStyle::Gradient(_)));
                assert!(segment.path.is_closed());
            }
        }
    }
}
