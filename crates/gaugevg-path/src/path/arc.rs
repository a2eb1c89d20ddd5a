//! Circular arc segments.
use gaugevg_core::math::{point_on_circle, AngleF64, PointF64};

/// A segment of a circle.
///
/// Angles rotate clockwise from the positive x-axis (screen space). An
/// `end_angle` smaller than `start_angle` traces the arc counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcPath {
    /// The center of the arc.
    pub center: PointF64,
    /// The radius of the arc.
    pub radius: f64,
    /// The start of the segment's angle.
    pub start_angle: AngleF64,
    /// The end of the segment's angle.
    pub end_angle: AngleF64,
}

impl ArcPath {
    /// Creates an arc from angles given in degrees.
    pub fn from_degrees(center: PointF64, radius: f64, start: f64, end: f64) -> Self {
        Self {
            center,
            radius,
            start_angle: AngleF64::degrees(start),
            end_angle: AngleF64::degrees(end),
        }
    }

    /// The point the arc starts at.
    pub fn from(&self) -> PointF64 {
        point_on_circle(self.center, self.radius, self.start_angle.to_degrees())
    }

    /// The point the arc ends at.
    pub fn to(&self) -> PointF64 {
        point_on_circle(self.center, self.radius, self.end_angle.to_degrees())
    }

    /// Returns `true` if the center, radius and angles all stay finite in
    /// the `f32` space of the path.
    pub fn is_finite(&self) -> bool {
        let center = self.center.to_f32();
        center.x.is_finite()
            && center.y.is_finite()
            && (self.radius as f32).is_finite()
            && (self.start_angle.radians as f32).is_finite()
            && (self.end_angle.radians as f32).is_finite()
    }

    /// The same arc traced in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self {
            start_angle: self.end_angle,
            end_angle: self.start_angle,
            ..*self
        }
    }

    pub(crate) fn to_lyon(self) -> lyon::geom::Arc<f32> {
        lyon::geom::Arc {
            center: self.center.to_f32(),
            radii: lyon::math::Vector::new(self.radius as f32, self.radius as f32),
            x_rotation: lyon::math::Angle::radians(0.0),
            start_angle: lyon::math::Angle::radians(self.start_angle.radians as f32),
            sweep_angle: lyon::math::Angle::radians(
                (self.end_angle - self.start_angle).radians as f32,
            ),
        }
    }
}
