//! Radial placement of ticks and labels around the axis line.
//!
//! Every radius is derived from the outer edge of the axis line (`R`), the
//! axis line thickness, the tick length, the tick and label offsets and half
//! of the largest label extent.

use gaugevg_path::Stroke;

use crate::config::AxisConfig;
use crate::math::{normalize_degrees, point_on_circle, PointF64, SizeF64};
use crate::scale::Scale;
use crate::style::{CornerStyle, LabelPosition, LabelStyle, TickPosition, TickStyle};

/// The resolved radial measurements of an axis, in logical points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisMetrics {
    /// The outer edge of the axis line.
    pub outer_radius: f64,
    pub thickness: f64,
    pub major_tick_length: f64,
    pub minor_tick_length: f64,
    pub tick_offset: f64,
    pub label_offset: f64,
    /// Half of the largest width or height of any label.
    pub label_half_extent: f64,
    pub tick_position: TickPosition,
    pub label_position: LabelPosition,
}

impl AxisMetrics {
    /// Resolves the metrics of `config` for a circle of `radius`.
    ///
    /// Elements placed outside of the axis line shrink it so that they stay
    /// within `radius * radius_factor`. When they cannot fit at all, tick
    /// lengths and offsets shrink proportionally and the axis line collapses
    /// to the center.
    pub fn compute(config: &AxisConfig, radius: f64, max_label_size: SizeF64) -> Self {
        let available = (radius * config.radius_factor.get()).max(0.0);

        let thickness = if config.show_axis_line {
            config.axis_line_style.thickness.resolve(available)
        } else {
            0.0
        };

        let (major_tick_length, minor_tick_length, tick_offset) = if config.show_ticks {
            (
                config.major_tick_style.length.resolve(available),
                config.minor_tick_style.length.resolve(available),
                config.tick_offset.resolve(available),
            )
        } else {
            (0.0, 0.0, 0.0)
        };

        let (label_offset, label_half_extent) = if config.show_labels {
            let extent = max_label_size.width.max(max_label_size.height);
            (
                config.label_offset.resolve(available),
                if extent.is_finite() { extent.max(0.0) / 2.0 } else { 0.0 },
            )
        } else {
            (0.0, 0.0)
        };

        let mut metrics = Self {
            outer_radius: available,
            thickness,
            major_tick_length,
            minor_tick_length,
            tick_offset,
            label_offset,
            label_half_extent,
            tick_position: config.tick_position,
            label_position: config.label_position,
        };

        let mut extent = metrics.outside_extent();
        if extent > available {
            let k = available / extent;
            metrics.major_tick_length *= k;
            metrics.minor_tick_length *= k;
            metrics.tick_offset *= k;
            metrics.label_offset *= k;
            extent = metrics.outside_extent();
            log::debug!("outside elements exceed the radius {available}, scaled by {k}");
        }

        metrics.outer_radius = (available - extent).max(0.0);
        metrics
    }

    pub fn inner_radius(&self) -> f64 {
        (self.outer_radius - self.thickness).max(0.0)
    }

    /// The radius of the middle of the axis line, where caps are centered.
    pub fn mid_radius(&self) -> f64 {
        (self.outer_radius - self.thickness / 2.0).max(0.0)
    }

    /// The angle in degrees a rounded cap takes away from each end of the
    /// axis line.
    pub fn corner_angle(&self) -> f64 {
        corner_angle(self.thickness, self.mid_radius())
    }

    /// The inner and outer radius of a tick of `length`.
    pub fn tick_radii(&self, length: f64) -> (f64, f64) {
        let r = self.outer_radius;
        let (start, end) = match self.tick_position {
            TickPosition::Inside => {
                let start = r - self.thickness - self.tick_offset;
                (start, start - length)
            }
            TickPosition::Outside => {
                let start = r + self.tick_offset;
                (start, start + length)
            }
            TickPosition::Cross => {
                let mid = r - self.thickness / 2.0;
                (mid - length / 2.0, mid + length / 2.0)
            }
        };

        (start.max(0.0), end.max(0.0))
    }

    /// The radius of label centers.
    pub fn label_radius(&self) -> f64 {
        (self.outer_radius + self.label_delta()).max(0.0)
    }

    /// Signed distance from the outer edge of the axis line to the label
    /// centers.
    fn label_delta(&self) -> f64 {
        let t = self.thickness;
        let to = self.tick_offset;
        let l = self.major_tick_length;
        let lo = self.label_offset;
        let half = self.label_half_extent;

        match (self.tick_position, self.label_position) {
            (TickPosition::Inside, LabelPosition::Inside) => -t - to - l - lo - half,
            (TickPosition::Inside, LabelPosition::Outside) => lo + half,
            (TickPosition::Outside, LabelPosition::Inside) => -t - lo - half,
            (TickPosition::Outside, LabelPosition::Outside) => to + l + lo + half,
            (TickPosition::Cross, LabelPosition::Inside) => {
                -t / 2.0 - (t / 2.0).max(l / 2.0) - lo - half
            }
            (TickPosition::Cross, LabelPosition::Outside) => {
                -t / 2.0 + (t / 2.0).max(l / 2.0) + lo + half
            }
        }
    }

    /// How far ticks and labels reach beyond the outer edge of the axis line.
    fn outside_extent(&self) -> f64 {
        let tick_length = self.major_tick_length.max(self.minor_tick_length);
        let ticks = match self.tick_position {
            TickPosition::Inside => 0.0,
            TickPosition::Outside => self.tick_offset + tick_length,
            TickPosition::Cross => tick_length / 2.0 - self.thickness / 2.0,
        };
        let labels = match self.label_position {
            LabelPosition::Inside => 0.0,
            LabelPosition::Outside => self.label_delta() + self.label_half_extent,
        };

        ticks.max(labels).max(0.0)
    }
}

/// The angle in degrees covered by a rounded cap of an arc of `thickness`
/// whose middle lies on `mid_radius`.
pub fn corner_angle(thickness: f64, mid_radius: f64) -> f64 {
    if thickness <= 0.0 || mid_radius <= 0.0 {
        return 0.0;
    }
    ((thickness / 2.0) / mid_radius).min(1.0).asin().to_degrees()
}

/// A tick line ready to be stroked.
#[derive(Debug, Clone, PartialEq)]
pub struct TickSpec {
    pub value: f64,
    pub start: PointF64,
    pub end: PointF64,
    pub is_major: bool,
    pub stroke: Stroke,
}

/// A label ready to be drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelSpec {
    pub value: f64,
    pub text: String,
    /// The measured size of `text`.
    pub size: SizeF64,
    /// The center of the label.
    pub position: PointF64,
    pub style: LabelStyle,
    /// Clockwise rotation in degrees around `position`. `0` when labels are
    /// not rotated.
    pub rotation: f64,
}

/// Places the ticks of `values`.
///
/// Major ticks on a rounded end of the axis line are moved inside the cap.
pub fn place_ticks(
    config: &AxisConfig,
    scale: &Scale,
    metrics: &AxisMetrics,
    center: PointF64,
    values: &[f64],
    is_major: bool,
) -> Vec<TickSpec> {
    let style: &TickStyle = if is_major {
        &config.major_tick_style
    } else {
        &config.minor_tick_style
    };
    let length = if is_major {
        metrics.major_tick_length
    } else {
        metrics.minor_tick_length
    };
    let (inner, outer) = metrics.tick_radii(length);

    let corners = if is_major && config.show_axis_line {
        config.axis_line_style.corner_style
    } else {
        CornerStyle::empty()
    };
    let corner = metrics.corner_angle();

    values
        .iter()
        .map(|&value| {
            let mut angle = scale.value_to_angle(value);
            if corners.contains(CornerStyle::START_CURVE) && (angle - scale.span.start).abs() < 1e-9 {
                angle += corner;
            }
            if corners.contains(CornerStyle::END_CURVE) && (angle - scale.span.end).abs() < 1e-9 {
                angle -= corner;
            }

            let color = config.range_color_at(value).unwrap_or(style.color);

            TickSpec {
                value,
                start: point_on_circle(center, inner, angle),
                end: point_on_circle(center, outer, angle),
                is_major,
                stroke: Stroke::new(color, style.thickness).with_dash(style.dash.clone()),
            }
        })
        .collect()
}

/// Places a measured label at `value`.
#[allow(clippy::too_many_arguments)]
pub fn place_label(
    scale: &Scale,
    metrics: &AxisMetrics,
    center: PointF64,
    value: f64,
    text: String,
    size: SizeF64,
    style: LabelStyle,
    rotate: bool,
) -> LabelSpec {
    let angle = scale.value_to_angle(value);

    LabelSpec {
        value,
        text,
        size,
        position: point_on_circle(center, metrics.label_radius(), angle),
        style,
        rotation: if rotate { tangent_rotation(angle) } else { 0.0 },
    }
}

/// The rotation that aligns text with the tangent at `angle`, kept within
/// `(-90, 90]` so that labels never read upside down.
pub fn tangent_rotation(angle: f64) -> f64 {
    let rotation = normalize_degrees(angle + 90.0);
    if rotation > 90.0 && rotation <= 270.0 {
        rotation - 180.0
    } else if rotation > 270.0 {
        rotation - 360.0
    } else {
        rotation
    }
}
