use super::{ArcPath, Path};

use gaugevg_core::math::{to_path_point, PointF64};

use lyon::math;
use lyon::path::builder;

/// Points closer than this are treated as the same vertex.
const VERTEX_EPSILON: f32 = 1e-4;

/// A [`Path`] builder.
///
/// Points and arcs with non-finite coordinates are skipped. Once a [`Path`]
/// is built, it can no longer be mutated.
pub struct PathBuilder {
    pub raw: builder::WithSvg<lyon::path::path::BuilderImpl>,
    sub_path_start: Option<math::Point>,
}

impl PathBuilder {
    /// Creates a new [`PathBuilder`].
    pub fn new() -> Self {
        Self {
            raw: lyon::path::Path::builder().with_svg(),
            sub_path_start: None,
        }
    }

    /// Moves the starting point of a new sub-path to the given point.
    pub fn move_to(mut self, point: PointF64) -> Self {
        if !is_finite(point) {
            return self;
        }

        let point = to_path_point(point);
        let _ = self.raw.move_to(point);
        self.sub_path_start = Some(point);
        self
    }

    /// Connects the last point in the [`Path`] to the given point with a
    /// straight line.
    ///
    /// Starts a new sub-path if none is open.
    pub fn line_to(mut self, point: PointF64) -> Self {
        if !is_finite(point) {
            return self;
        }
        if self.sub_path_start.is_none() {
            return self.move_to(point);
        }

        let point = to_path_point(point);
        if !approx_same(self.raw.current_position(), point) {
            let _ = self.raw.line_to(point);
        }
        self
    }

    /// Adds an [`ArcPath`] to the current sub-path.
    ///
    /// If a sub-path is open, a straight line joins its current position to
    /// the start of the arc. Otherwise the arc starts a new sub-path.
    pub fn arc(mut self, arc: ArcPath) -> Self {
        if !arc.is_finite() {
            return self;
        }

        let arc = arc.to_lyon();
        let from = arc.sample(0.0);

        if self.sub_path_start.is_none() {
            let _ = self.raw.move_to(from);
            self.sub_path_start = Some(from);
        } else if !approx_same(self.raw.current_position(), from) {
            let _ = self.raw.line_to(from);
        }

        if arc.sweep_angle.radians == 0.0 || arc.radii.x <= 0.0 {
            return self;
        }

        arc.for_each_quadratic_bezier(&mut |curve| {
            let _ = self.raw.quadratic_bezier_to(curve.ctrl, curve.to);
        });

        self
    }

    /// Closes the current sub-path in the [`Path`].
    ///
    /// The sub-path is first brought back to its starting vertex so that its
    /// last point coincides with its first point.
    pub fn close(mut self) -> Self {
        if let Some(start) = self.sub_path_start.take() {
            if self.raw.current_position() != start {
                let _ = self.raw.line_to(start);
            }
            self.raw.close();
        }
        self
    }

    /// Builds the [`Path`] of this [`PathBuilder`].
    pub fn build(self) -> Path {
        Path {
            raw: self.raw.build(),
        }
    }
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Checks the point in the `f32` space lyon stores it in.
fn is_finite(point: PointF64) -> bool {
    let point = to_path_point(point);
    point.x.is_finite() && point.y.is_finite()
}

fn approx_same(a: math::Point, b: math::Point) -> bool {
    (a - b).square_length() <= VERTEX_EPSILON * VERTEX_EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;
    use gaugevg_core::math::point;

    #[test]
    fn closing_returns_to_the_first_vertex() {
        let path = PathBuilder::new()
            .move_to(point(0.0, 0.0))
            .line_to(point(10.0, 0.0))
            .line_to(point(10.0, 10.0))
            .close()
            .build();

        assert!(path.is_closed());
        assert_eq!(path.first_point(), Some(point(0.0, 0.0)));
        assert_eq!(path.last_point(), Some(point(0.0, 0.0)));
    }

    #[test]
    fn unclosed_path_is_not_closed() {
        let path = PathBuilder::new()
            .move_to(point(0.0, 0.0))
            .line_to(point(10.0, 0.0))
            .build();

        assert!(!path.is_closed());
    }

    #[test]
    fn arc_starts_a_sub_path() {
        let arc = ArcPath::from_degrees(point(0.0, 0.0), 10.0, 0.0, 90.0);
        let path = PathBuilder::new().arc(arc).close().build();

        assert_eq!(path.sub_path_count(), 1);
        assert!(path.is_closed());

        let first = path.first_point().unwrap();
        assert!((first.x - 10.0).abs() < 1e-4);
        assert!(first.y.abs() < 1e-4);
    }

    #[test]
    fn quarter_arc_bounds() {
        let arc = ArcPath::from_degrees(point(0.0, 0.0), 10.0, 0.0, 90.0);
        let path = PathBuilder::new().arc(arc).close().build();
        let bounds = path.bounding_rect().unwrap();

        assert!(bounds.min_x().abs() < 1e-3);
        assert!(bounds.min_y().abs() < 1e-3);
        assert!((bounds.max_x() - 10.0).abs() < 1e-3);
        assert!((bounds.max_y() - 10.0).abs() < 1e-3);
    }

    #[test]
    fn non_finite_input_is_skipped() {
        let inf = f64::INFINITY;
        let path = PathBuilder::new()
            .move_to(point(inf, 0.0))
            .line_to(point(0.0, 0.0))
            .line_to(point(10.0, f64::NAN))
            .arc(ArcPath::from_degrees(point(inf, 0.0), 10.0, 0.0, 90.0))
            .arc(ArcPath::from_degrees(point(0.0, 0.0), f64::NAN, 0.0, 90.0))
            .line_to(point(10.0, 0.0))
            .line_to(point(10.0, 10.0))
            .close()
            .build();

        assert_eq!(path.sub_path_count(), 1);
        assert!(path.is_closed());
        assert_eq!(path.first_point(), Some(point(0.0, 0.0)));
        let bounds = path.bounding_rect().unwrap();
        assert_eq!(bounds.max_x(), 10.0);
        assert_eq!(bounds.max_y(), 10.0);
    }

    #[test]
    fn reversed_arc_swaps_endpoints() {
        let arc = ArcPath::from_degrees(point(0.0, 0.0), 10.0, 0.0, 90.0);
        let rev = arc.reversed();
        assert_eq!(arc.from(), rev.to());
        assert_eq!(arc.to(), rev.from());
    }
}
