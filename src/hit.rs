use crate::math::{normalize_degrees, PointF64, ANGLE_EPSILON};
use crate::scale::Scale;

/// Maps a screen point back to the axis value under it.
///
/// Only the direction of the point from `center` matters, not its distance.
/// Returns `None` for the center itself, for directions outside of the
/// sweep, and for degenerate ranges.
pub fn point_to_value(scale: &Scale, center: PointF64, point: PointF64) -> Option<f64> {
    if scale.range.is_degenerate() {
        return None;
    }

    let d = point - center;
    if d.x == 0.0 && d.y == 0.0 {
        return None;
    }

    let mut angle = normalize_degrees(d.y.atan2(d.x).to_degrees());
    if angle < scale.span.start - ANGLE_EPSILON {
        angle += 360.0;
    }

    if !scale.span.contains(angle) {
        return None;
    }

    Some(scale.range.clamp(scale.angle_to_value(angle)))
}
