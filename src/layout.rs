//! A complete layout pass over an axis configuration.

use std::fmt;
use std::sync::Arc;

use crate::animation::{pointer_value, RevealProgress};
use crate::axis_line::{build_axis_line, ArcSegment};
use crate::center_fit;
use crate::config::AxisConfig;
use crate::error::ConfigIssue;
use crate::hit;
use crate::interval::{self, ScaleValues};
use crate::math::{PointF64, SizeF64};
use crate::painter::{Painter, TextMeasurer};
use crate::placement::{place_label, place_ticks, AxisMetrics, LabelSpec, TickSpec};
use crate::range_arc::build_ranges;
use crate::scale::Scale;
use crate::style::LabelStyle;

/// Produces the text of a label from its value and the major interval.
pub type LabelFormatter = Arc<dyn Fn(f64, f64) -> String + Send + Sync>;

/// Adjusts a label after its text has been formatted.
pub type LabelCustomizer = Arc<dyn Fn(&mut LabelCreated) + Send + Sync>;

/// A label about to be measured, handed to the [`LabelCustomizer`].
#[derive(Debug, Clone, PartialEq)]
pub struct LabelCreated {
    pub value: f64,
    pub text: String,
    /// Replaces the axis label style for this label when set.
    pub style: Option<LabelStyle>,
}

/// User hooks that take part in creating labels.
#[derive(Clone, Default)]
pub struct LabelHooks {
    pub formatter: Option<LabelFormatter>,
    pub customizer: Option<LabelCustomizer>,
}

impl LabelHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_formatter(
        mut self,
        formatter: impl Fn(f64, f64) -> String + Send + Sync + 'static,
    ) -> Self {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    pub fn with_customizer(
        mut self,
        customizer: impl Fn(&mut LabelCreated) + Send + Sync + 'static,
    ) -> Self {
        self.customizer = Some(Arc::new(customizer));
        self
    }

    fn create(&self, config: &AxisConfig, value: f64, interval: f64) -> (String, LabelStyle) {
        let text = match &self.formatter {
            Some(formatter) => formatter(value, interval),
            None => interval::format_value(value, interval),
        };

        let mut created = LabelCreated {
            value,
            text,
            style: None,
        };
        if let Some(customizer) = &self.customizer {
            customizer(&mut created);
        }

        let style = created.style.unwrap_or_else(|| {
            let mut style = config.label_style.clone();
            if let Some(color) = config.range_color_at(value) {
                style.color = color;
            }
            style
        });

        (created.text, style)
    }
}

impl fmt::Debug for LabelHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LabelHooks")
            .field("formatter", &self.formatter.is_some())
            .field("customizer", &self.customizer.is_some())
            .finish()
    }
}

/// The circle an axis is drawn on and the radii derived from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub center: PointF64,
    /// The radius fitted into the available area, before the radius factor.
    pub radius: f64,
    pub axis_outer_radius: f64,
    pub axis_inner_radius: f64,
    /// The angle in degrees a rounded cap of the axis line covers.
    pub corner_radius_angle: f64,
    pub metrics: AxisMetrics,
}

/// Everything an axis draws, computed from a configuration and a size.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLayout {
    pub scale: Scale,
    pub geometry: Geometry,
    /// The major interval. `0` for a degenerate range.
    pub interval: f64,
    pub major_ticks: Vec<TickSpec>,
    pub minor_ticks: Vec<TickSpec>,
    pub labels: Vec<LabelSpec>,
    pub axis_line: Vec<ArcSegment>,
    pub ranges: Vec<ArcSegment>,
    /// The value every pointer currently shows.
    pub pointer_values: Vec<f64>,
    pub annotation_opacity: f64,
    /// The corrections applied to the configuration.
    pub issues: Vec<ConfigIssue>,
}

impl AxisLayout {
    /// The point of `value` on the outer edge of the axis line.
    pub fn value_to_point(&self, value: f64) -> PointF64 {
        self.scale.value_to_point(
            value,
            self.geometry.center,
            self.geometry.axis_outer_radius,
        )
    }

    pub fn point_to_value(&self, point: PointF64) -> Option<f64> {
        hit::point_to_value(&self.scale, self.geometry.center, point)
    }

    pub fn draw_axis_line<P: Painter + ?Sized>(&self, painter: &mut P) {
        for segment in &self.axis_line {
            painter.fill_path(&segment.path, &segment.fill);
        }
    }

    pub fn draw_ranges<P: Painter + ?Sized>(&self, painter: &mut P) {
        for segment in &self.ranges {
            painter.fill_path(&segment.path, &segment.fill);
        }
    }

    pub fn draw_major_ticks<P: Painter + ?Sized>(&self, painter: &mut P) {
        for tick in &self.major_ticks {
            painter.stroke_line(tick.start, tick.end, &tick.stroke);
        }
    }

    pub fn draw_minor_ticks<P: Painter + ?Sized>(&self, painter: &mut P) {
        for tick in &self.minor_ticks {
            painter.stroke_line(tick.start, tick.end, &tick.stroke);
        }
    }

    pub fn draw_labels<P: Painter + ?Sized>(&self, painter: &mut P) {
        for label in &self.labels {
            painter.draw_text(&label.text, label.position, label.rotation, &label.style);
        }
    }

    /// Draws every element, back to front.
    pub fn draw<P: Painter + ?Sized>(&self, painter: &mut P) {
        self.draw_axis_line(painter);
        self.draw_ranges(painter);
        self.draw_minor_ticks(painter);
        self.draw_major_ticks(painter);
        self.draw_labels(painter);
    }
}

/// Lays out an axis of `config` inside `available`.
///
/// This is a pure function of its inputs: running it twice produces equal
/// layouts.
pub fn recompute<M: TextMeasurer + ?Sized>(
    config: &AxisConfig,
    hooks: &LabelHooks,
    available: SizeF64,
    measurer: &mut M,
    progress: &RevealProgress,
) -> AxisLayout {
    let (scale, mut issues) = Scale::from_config(config);
    let fit = center_fit::solve(available, &scale.span, config.can_scale_to_fit);

    let values = if scale.range.is_degenerate() {
        ScaleValues::default()
    } else {
        let interval = interval::resolve_interval(
            config.interval,
            &scale.range,
            &scale.span,
            available,
            config.maximum_labels_count,
            &mut issues,
        );
        interval::plan(&scale.range, interval, config.minor_ticks_per_interval)
    };

    let mut measured = Vec::new();
    let mut max_label_size = SizeF64::zero();
    if config.show_labels {
        for &value in label_values(config, &scale, &values.majors) {
            let (text, style) = hooks.create(config, value, values.interval);
            let size = measurer.measure(&text, &style);
            max_label_size.width = max_label_size.width.max(size.width);
            max_label_size.height = max_label_size.height.max(size.height);
            measured.push((value, text, style, size));
        }
    }

    let metrics = AxisMetrics::compute(config, fit.radius, max_label_size);
    let center = fit.center;

    let reveal = progress.ticks_and_labels.clamp(0.0, 1.0) as f32;
    let (major_ticks, minor_ticks) = if config.show_ticks && reveal > 0.0 {
        (
            fade_ticks(place_ticks(config, &scale, &metrics, center, &values.majors, true), reveal),
            fade_ticks(place_ticks(config, &scale, &metrics, center, &values.minors, false), reveal),
        )
    } else {
        (Vec::new(), Vec::new())
    };

    let labels = if reveal > 0.0 {
        measured
            .into_iter()
            .map(|(value, text, mut style, size)| {
                style.color = style.color.mul_alpha(reveal);
                place_label(
                    &scale,
                    &metrics,
                    center,
                    value,
                    text,
                    size,
                    style,
                    config.can_rotate_labels,
                )
            })
            .collect()
    } else {
        Vec::new()
    };

    let axis_line = build_axis_line(config, &scale, &metrics, center, progress.axis_line);
    let ranges = build_ranges(
        config,
        &scale,
        &metrics,
        center,
        progress.ranges.clamp(0.0, 1.0) as f32,
    );

    let pointer_values = config
        .pointers
        .iter()
        .map(|pointer| {
            pointer_value(
                scale.range.minimum,
                scale.range.clamp(pointer.value),
                progress.pointers,
            )
        })
        .collect();

    log::debug!(
        "axis layout: interval {}, {} major ticks, {} minor ticks, {} labels, {} axis line segments",
        values.interval,
        major_ticks.len(),
        minor_ticks.len(),
        labels.len(),
        axis_line.len(),
    );

    AxisLayout {
        scale,
        geometry: Geometry {
            center,
            radius: fit.radius,
            axis_outer_radius: metrics.outer_radius,
            axis_inner_radius: metrics.inner_radius(),
            corner_radius_angle: metrics.corner_angle(),
            metrics,
        },
        interval: values.interval,
        major_ticks,
        minor_ticks,
        labels,
        axis_line,
        ranges,
        pointer_values,
        annotation_opacity: progress.annotations,
        issues,
    }
}

/// The major values that get a label.
///
/// On a full circle the first and last label land on the same spot, so the
/// last one is dropped when both are shown.
fn label_values<'a>(config: &AxisConfig, scale: &Scale, majors: &'a [f64]) -> &'a [f64] {
    let mut values = majors;

    let overlapping = scale.span.is_full_circle()
        && config.show_first_label
        && config.show_last_label
        && values.len() > 1;

    if !config.show_first_label {
        values = values.get(1..).unwrap_or_default();
    }
    if !config.show_last_label || overlapping {
        values = values.get(..values.len().saturating_sub(1)).unwrap_or_default();
    }

    values
}

fn fade_ticks(mut ticks: Vec<TickSpec>, alpha: f32) -> Vec<TickSpec> {
    if alpha < 1.0 {
        for tick in &mut ticks {
            tick.stroke.color = tick.stroke.color.mul_alpha(alpha);
        }
    }
    ticks
}
