use smallvec::SmallVec;
use std::cmp::Ordering;

use crate::color::Color;
use crate::math::PointF64;

/// The number of stops stored inline before [`GradientStops`] spills to the heap.
pub const INLINE_STOPS: usize = 8;

/// A color pinned to a position along the value range of an axis.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradientStop {
    /// Position of the stop in axis values (not normalized).
    pub value: f64,

    /// The color of the gradient at the specified [`value`].
    ///
    /// [`value`]: Self::value
    pub color: Color,
}

impl GradientStop {
    pub const fn new(value: f64, color: Color) -> Self {
        Self { value, color }
    }
}

/// An ordered set of [`GradientStop`]s.
///
/// Stops are kept sorted by value. Values outside of an axis range are
/// allowed; they still influence the interpolated colors inside the range.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradientStops {
    stops: SmallVec<[GradientStop; INLINE_STOPS]>,
}

impl GradientStops {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a new stop, defined by a value and a color.
    ///
    /// Any stop with a non-finite `value` will be silently ignored.
    pub fn add_stop(mut self, value: f64, color: impl Into<Color>) -> Self {
        self.insert(GradientStop::new(value, color.into()));
        self
    }

    /// Adds multiple [`GradientStop`]s.
    pub fn add_stops(mut self, stops: impl IntoIterator<Item = GradientStop>) -> Self {
        for stop in stops {
            self.insert(stop);
        }
        self
    }

    fn insert(&mut self, stop: GradientStop) {
        if !stop.value.is_finite() {
            log::warn!("Gradient stop value must be finite, got {}.", stop.value);
            return;
        }

        // Equal values keep insertion order so a later stop forms a hard edge.
        let index = self
            .stops
            .iter()
            .position(|s| s.value.partial_cmp(&stop.value) == Some(Ordering::Greater))
            .unwrap_or(self.stops.len());

        self.stops.insert(index, stop);
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GradientStop> {
        self.stops.iter()
    }

    /// The interpolated color at `value`.
    ///
    /// Values before the first stop take the first color, values after the
    /// last stop take the last color. Returns `None` if there are no stops.
    pub fn color_at(&self, value: f64) -> Option<Color> {
        let first = self.stops.first()?;
        let last = self.stops.last()?;

        if value <= first.value {
            return Some(first.color);
        }
        if value >= last.value {
            return Some(last.color);
        }

        let upper = self
            .stops
            .iter()
            .position(|s| s.value >= value)
            .unwrap_or(self.stops.len() - 1);
        let a = self.stops[upper.saturating_sub(1)];
        let b = self.stops[upper];

        let span = b.value - a.value;
        if span <= 0.0 {
            return Some(b.color);
        }

        Some(a.color.lerp(b.color, ((value - a.value) / span) as f32))
    }
}

impl FromIterator<GradientStop> for GradientStops {
    fn from_iter<T: IntoIterator<Item = GradientStop>>(iter: T) -> Self {
        Self::new().add_stops(iter)
    }
}

/// A point along the gradient vector where the specified [`color`] is unmixed.
///
/// [`color`]: Self::color
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorStop {
    /// Offset along the gradient vector in the range `[0.0, 1.0]`.
    pub offset: f32,

    /// The color of the gradient at the specified [`offset`].
    ///
    /// [`offset`]: Self::offset
    pub color: Color,
}

/// A two-stop linear gradient between two points in logical coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearGradient {
    /// Where the first stop is unmixed.
    pub start: PointF64,
    /// Where the second stop is unmixed.
    pub end: PointF64,
    pub stops: [ColorStop; 2],
}

impl LinearGradient {
    pub fn new(start: PointF64, end: PointF64, start_color: Color, end_color: Color) -> Self {
        Self {
            start,
            end,
            stops: [
                ColorStop {
                    offset: 0.0,
                    color: start_color,
                },
                ColorStop {
                    offset: 1.0,
                    color: end_color,
                },
            ],
        }
    }

    pub fn start_color(&self) -> Color {
        self.stops[0].color
    }

    pub fn end_color(&self) -> Color {
        self.stops[1].color
    }

    /// Adjust the opacity of the gradient by a multiplier applied to each color stop.
    pub fn mul_alpha(mut self, alpha_multiplier: f32) -> Self {
        for stop in self.stops.iter_mut() {
            stop.color = stop.color.mul_alpha(alpha_multiplier);
        }
        self
    }
}
