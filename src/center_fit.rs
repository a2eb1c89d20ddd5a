//! Center and radius selection for partial arcs.
//!
//! A gauge whose sweep is not a full circle wastes space when drawn around
//! the center of its rectangle. The solver looks at which axis-aligned
//! extremes of the unit circle the arc passes through ("touches") and moves
//! the center so that the arc itself, not the whole circle, is centered.

use smallvec::SmallVec;

use crate::math::{point, unit_vector, vector, Box2DF64, PointF64, SizeF64, VectorF64};
use crate::range::AngleSpan;

/// Boundary angles checked for touches, covering sweeps that start anywhere
/// in one turn and run past a second one.
const BOUNDARY_ANGLES: [f64; 16] = [
    -630.0, -540.0, -450.0, -360.0, -270.0, -180.0, -90.0, 0.0, 90.0, 180.0, 270.0, 360.0,
    450.0, 540.0, 630.0, 720.0,
];

/// Touches closer than this to the ends of the sweep are ignored; the end
/// points already cover them.
const TOUCH_EPSILON: f64 = 1e-9;

/// How many axis-aligned extremes of the unit circle an arc passes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchCount {
    Zero,
    One,
    Two,
    Three,
}

/// The circle an axis is drawn on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenterFit {
    pub center: PointF64,
    pub radius: f64,
}

/// The unit points of the boundary angles strictly inside the span.
pub fn boundary_touches(span: &AngleSpan) -> SmallVec<[VectorF64; 4]> {
    BOUNDARY_ANGLES
        .iter()
        .filter(|&&angle| angle > span.start + TOUCH_EPSILON && angle < span.end - TOUCH_EPSILON)
        .map(|&angle| {
            let v = unit_vector(angle);
            vector(v.x.round(), v.y.round())
        })
        .collect()
}

/// The bounding box of the arc of `span` on the unit circle.
pub fn arc_unit_bounds(start: f64, end: f64) -> Box2DF64 {
    let span = AngleSpan {
        start,
        end,
        sweep: end - start,
    };

    let s = unit_vector(start);
    let e = unit_vector(end);
    let mut bounds = Box2DF64::new(point(s.x.min(e.x), s.y.min(e.y)), point(s.x.max(e.x), s.y.max(e.y)));

    for touch in boundary_touches(&span) {
        bounds.min.x = bounds.min.x.min(touch.x);
        bounds.min.y = bounds.min.y.min(touch.y);
        bounds.max.x = bounds.max.x.max(touch.x);
        bounds.max.y = bounds.max.y.max(touch.y);
    }

    bounds
}

/// No extremes touched: the arc's bounds are spanned by its end points.
fn midpoint_zero(s: VectorF64, e: VectorF64) -> VectorF64 {
    vector((s.x + e.x) / 2.0, (s.y + e.y) / 2.0)
}

/// One extreme touched: the touched axis runs from the extreme to the
/// farther end point, the other axis stays between the end points.
fn midpoint_one(s: VectorF64, e: VectorF64, t: VectorF64) -> VectorF64 {
    if t.x != 0.0 {
        let far = if t.x > 0.0 { s.x.min(e.x) } else { s.x.max(e.x) };
        vector((t.x + far) / 2.0, (s.y + e.y) / 2.0)
    } else {
        let far = if t.y > 0.0 { s.y.min(e.y) } else { s.y.max(e.y) };
        vector((s.x + e.x) / 2.0, (t.y + far) / 2.0)
    }
}

/// Two adjacent extremes touched: one on each axis.
fn midpoint_two(s: VectorF64, e: VectorF64, t1: VectorF64, t2: VectorF64) -> VectorF64 {
    let (tx, ty) = if t1.x != 0.0 { (t1.x, t2.y) } else { (t2.x, t1.y) };
    let far_x = if tx > 0.0 { s.x.min(e.x) } else { s.x.max(e.x) };
    let far_y = if ty > 0.0 { s.y.min(e.y) } else { s.y.max(e.y) };
    vector((tx + far_x) / 2.0, (ty + far_y) / 2.0)
}

/// Three extremes touched: one axis is covered from -1 to 1, the other
/// runs from its single extreme to the farther end point.
fn midpoint_three(s: VectorF64, e: VectorF64, touches: &[VectorF64]) -> VectorF64 {
    let x_touches = touches.iter().filter(|t| t.x != 0.0).count();
    if x_touches == 2 {
        let ty = touches.iter().map(|t| t.y).find(|y| *y != 0.0).unwrap_or(0.0);
        let far = if ty > 0.0 { s.y.min(e.y) } else { s.y.max(e.y) };
        vector(0.0, (ty + far) / 2.0)
    } else {
        let tx = touches.iter().map(|t| t.x).find(|x| *x != 0.0).unwrap_or(0.0);
        let far = if tx > 0.0 { s.x.min(e.x) } else { s.x.max(e.x) };
        vector((tx + far) / 2.0, 0.0)
    }
}

/// The center of the arc's bounding box on the unit circle, selected by the
/// number of touched extremes.
pub fn arc_midpoint(span: &AngleSpan, touch_count: TouchCount, touches: &[VectorF64]) -> VectorF64 {
    let s = unit_vector(span.start);
    let e = unit_vector(span.end);

    match touch_count {
        TouchCount::Zero => midpoint_zero(s, e),
        TouchCount::One => midpoint_one(s, e, touches[0]),
        TouchCount::Two => midpoint_two(s, e, touches[0], touches[1]),
        TouchCount::Three => midpoint_three(s, e, touches),
    }
}

/// Solves the circle an axis of `span` is drawn on inside `available`.
///
/// Without `scale_to_fit`, or for a full circle, the circle is centered in
/// the rectangle with a radius of half its shorter side.
pub fn solve(available: SizeF64, span: &AngleSpan, scale_to_fit: bool) -> CenterFit {
    let usable = usable_size(available);
    let (width, height) = (usable.width, usable.height);
    let naive = CenterFit {
        center: point(width / 2.0, height / 2.0),
        radius: width.min(height) / 2.0,
    };

    if !scale_to_fit || span.is_full_circle() {
        return naive;
    }

    let touches = boundary_touches(span);
    let touch_count = match touches.len() {
        0 => TouchCount::Zero,
        1 => TouchCount::One,
        2 => TouchCount::Two,
        3 => TouchCount::Three,
        _ => return naive,
    };

    let mid = arc_midpoint(span, touch_count, &touches);
    let bounds = arc_unit_bounds(span.start, span.end);

    let fit = fit_radius(width, height, bounds.width(), bounds.height());
    let radius = fit.clamp(naive.radius, naive.radius + (width / 2.0 - height / 2.0).abs());

    let mut shift = -mid * radius;
    let length = shift.length();
    if length > radius && length > 0.0 {
        shift = shift * (radius / length);
    }

    log::trace!("center fit: {touch_count:?}, midpoint {mid:?}, radius {radius}");

    CenterFit {
        center: naive.center + shift,
        radius,
    }
}

/// Clamps `available` to a finite, non-negative size.
///
/// An unbounded or `NaN` side takes the length of the other side, so the
/// circle still fits the bounded direction. With no usable side the size is
/// zero.
pub fn usable_size(available: SizeF64) -> SizeF64 {
    let usable = |side: f64| side.is_finite().then(|| side.max(0.0));

    match (usable(available.width), usable(available.height)) {
        (Some(width), Some(height)) => SizeF64::new(width, height),
        (Some(side), None) | (None, Some(side)) => SizeF64::new(side, side),
        (None, None) => SizeF64::zero(),
    }
}

fn fit_radius(width: f64, height: f64, unit_width: f64, unit_height: f64) -> f64 {
    let along = |available: f64, extent: f64| {
        if extent > f64::EPSILON {
            available / extent
        } else {
            f64::INFINITY
        }
    };

    along(width, unit_width).min(along(height, unit_height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::size;
    use crate::range::normalize_angles;

    fn span(start: f64, end: f64) -> AngleSpan {
        normalize_angles(start, end, &mut Vec::new())
    }

    #[test]
    fn unbounded_sizes_fall_back_to_the_bounded_side() {
        assert_eq!(usable_size(size(f64::INFINITY, 200.0)), size(200.0, 200.0));
        assert_eq!(usable_size(size(300.0, f64::NAN)), size(300.0, 300.0));
        assert_eq!(usable_size(size(f64::INFINITY, f64::NEG_INFINITY)), size(0.0, 0.0));
        assert_eq!(usable_size(size(-5.0, 40.0)), size(0.0, 40.0));

        let fit = solve(size(f64::INFINITY, 200.0), &span(180.0, 0.0), true);
        assert!(fit.center.x.is_finite() && fit.center.y.is_finite());
        assert!(fit.radius.is_finite() && fit.radius >= 100.0);

        let fit = solve(size(f64::NAN, f64::INFINITY), &span(130.0, 50.0), true);
        assert_eq!(fit.radius, 0.0);
        assert_eq!(fit.center, point(0.0, 0.0));
    }

    fn assert_near(a: VectorF64, b: VectorF64) {
        assert!((a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9, "{a:?} != {b:?}");
    }

    fn bounds_center(span: &AngleSpan) -> VectorF64 {
        arc_unit_bounds(span.start, span.end).center().to_vector()
    }

    #[test]
    fn touches_are_counted_inside_the_span() {
        assert_eq!(boundary_touches(&span(10.0, 80.0)).len(), 0);
        assert_eq!(boundary_touches(&span(180.0, 360.0)).len(), 1);
        assert_eq!(boundary_touches(&span(130.0, 50.0)).len(), 3);
        assert_eq!(boundary_touches(&span(0.0, 360.0)).len(), 3);
        assert_eq!(boundary_touches(&span(45.0, 44.0)).len(), 4);
    }

    #[test]
    fn each_formula_matches_the_bounding_box() {
        for (start, end, count) in [
            (10.0, 80.0, TouchCount::Zero),
            (-45.0, 45.0, TouchCount::One),
            (200.0, 300.0, TouchCount::One),
            (-30.0, 120.0, TouchCount::Two),
            (150.0, 300.0, TouchCount::Two),
            (130.0, 50.0, TouchCount::Three),
            (-100.0, 100.0, TouchCount::Three),
        ] {
            let s = span(start, end);
            let touches = boundary_touches(&s);
            let mid = arc_midpoint(&s, count, &touches);
            assert_near(mid, bounds_center(&s));
        }
    }

    #[test]
    fn full_circle_keeps_the_naive_center() {
        let fit = solve(size(300.0, 200.0), &span(0.0, 360.0), true);
        assert_eq!(fit.center, point(150.0, 100.0));
        assert_eq!(fit.radius, 100.0);
    }

    #[test]
    fn disabled_fit_keeps_the_naive_center() {
        let fit = solve(size(300.0, 150.0), &span(180.0, 360.0), false);
        assert_eq!(fit.center, point(150.0, 75.0));
        assert_eq!(fit.radius, 75.0);
    }

    #[test]
    fn top_half_gauge_fills_a_wide_rectangle() {
        let fit = solve(size(300.0, 150.0), &span(180.0, 360.0), true);
        assert!((fit.radius - 150.0).abs() < 1e-9);
        assert!((fit.center.x - 150.0).abs() < 1e-9);
        assert!((fit.center.y - 150.0).abs() < 1e-9);
    }

    #[test]
    fn partial_arcs_stay_inside_the_rectangle() {
        let available = size(240.0, 180.0);
        for (start, end) in [(10.0, 80.0), (180.0, 270.0), (130.0, 50.0), (-30.0, 120.0), (90.0, 180.0)] {
            let s = span(start, end);
            let fit = solve(available, &s, true);
            let bounds = arc_unit_bounds(s.start, s.end);
            let min = fit.center + bounds.min.to_vector() * fit.radius;
            let max = fit.center + bounds.max.to_vector() * fit.radius;
            assert!(min.x >= -1e-6 && min.y >= -1e-6, "{start}..{end}: {min:?}");
            assert!(max.x <= available.width + 1e-6, "{start}..{end}: {max:?}");
            assert!(max.y <= available.height + 1e-6, "{start}..{end}: {max:?}");
        }
    }
}
