/// A point in units of logical points, as consumed by the path builder.
///
/// Alias for ```euclid::default::Point2D<f32>```.
pub type Point = euclid::default::Point2D<f32>;

/// A vector in units of logical points, as consumed by the path builder.
///
/// Alias for ```euclid::default::Vector2D<f32>```.
pub type Vector = euclid::default::Vector2D<f32>;

/// A point in units of logical points.
///
/// Alias for ```euclid::default::Point2D<f64>```.
pub type PointF64 = euclid::default::Point2D<f64>;

/// A vector in units of logical points.
///
/// Alias for ```euclid::default::Vector2D<f64>```.
pub type VectorF64 = euclid::default::Vector2D<f64>;

/// A size in units of logical points.
///
/// Alias for ```euclid::default::Size2D<f64>```.
pub type SizeF64 = euclid::default::Size2D<f64>;

/// Alias for ```euclid::default::Box2D<f64>```
pub type Box2DF64 = euclid::default::Box2D<f64>;

/// A rectangle in units of logical points.
///
/// Alias for ```euclid::default::Rect<f64>```
pub type RectF64 = euclid::default::Rect<f64>;

/// An angle in radians (f32).
///
/// Alias for ```euclid::Angle<f32>```
pub type Angle = euclid::Angle<f32>;

/// An angle in radians (f64).
///
/// Alias for ```euclid::Angle<f64>```
pub type AngleF64 = euclid::Angle<f64>;

/// Tolerance used when comparing angles in degrees.
pub const ANGLE_EPSILON: f64 = 1e-9;

/// Shorthand for `PointF64::new(x, y)`.
#[inline]
pub const fn point(x: f64, y: f64) -> PointF64 {
    PointF64::new(x, y)
}

/// Shorthand for `SizeF64::new(w, h)`.
#[inline]
pub const fn size(w: f64, h: f64) -> SizeF64 {
    SizeF64::new(w, h)
}

/// Shorthand for `VectorF64::new(x, y)`.
#[inline]
pub const fn vector(x: f64, y: f64) -> VectorF64 {
    VectorF64::new(x, y)
}

/// Shorthand for `AngleF64 { radians: value * PI / 180.0 }`.
#[inline]
pub fn degrees(degrees: f64) -> AngleF64 {
    AngleF64::degrees(degrees)
}

/// Reduces an angle in degrees into `[0, 360)`. `NaN` maps to `0`.
#[inline]
pub fn normalize_degrees(degrees: f64) -> f64 {
    if degrees.is_nan() {
        return 0.0;
    }

    let reduced = degrees.rem_euclid(360.0);
    // `rem_euclid` can round up to exactly 360 for tiny negative inputs.
    if reduced >= 360.0 {
        0.0
    } else {
        reduced
    }
}

/// The unit vector pointing at `degrees`, measured clockwise from the
/// positive x-axis in screen space (y grows downwards).
#[inline]
pub fn unit_vector(degrees: f64) -> VectorF64 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    VectorF64::new(cos, sin)
}

/// The point on the circle described by `center` and `radius` at `degrees`.
#[inline]
pub fn point_on_circle(center: PointF64, radius: f64, degrees: f64) -> PointF64 {
    center + unit_vector(degrees) * radius
}

/// Converts a geometry point into the `f32` space of the path builder.
#[inline]
pub fn to_path_point(point: PointF64) -> Point {
    point.to_f32()
}

/// Returns `true` if `a` and `b` are within `epsilon` of each other.
#[inline]
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() <= epsilon
}

/// Rounds `value` to a fixed number of decimal places.
///
/// Used to strip accumulated floating point drift from generated scale values.
#[inline]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_wraps_into_one_turn() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(410.0), 50.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(f64::NAN), 0.0);
        assert!(normalize_degrees(-1e-18) < 360.0);
    }

    #[test]
    fn unit_vector_follows_screen_orientation() {
        let down = unit_vector(90.0);
        assert!(approx_eq(down.x, 0.0, 1e-12));
        assert!(approx_eq(down.y, 1.0, 1e-12));

        let p = point_on_circle(point(10.0, 10.0), 5.0, 180.0);
        assert!(approx_eq(p.x, 5.0, 1e-12));
        assert!(approx_eq(p.y, 10.0, 1e-12));
    }

    #[test]
    fn round_to_strips_drift() {
        assert_eq!(round_to(0.1 + 0.2, 10), 0.3);
    }
}
