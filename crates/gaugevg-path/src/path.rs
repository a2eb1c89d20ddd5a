mod arc;
mod builder;

#[doc(no_inline)]
pub use arc::ArcPath;
pub use builder::PathBuilder;

use gaugevg_core::math::{PointF64, RectF64};
use lyon::path::PathEvent;

/// An immutable set of points that may or may not be connected.
///
/// Paths produced by the gauge engine are always made of closed sub-paths.
#[derive(Debug, Clone)]
pub struct Path {
    pub raw: lyon::path::Path,
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.raw.iter().eq(other.raw.iter())
    }
}

impl Path {
    pub fn builder() -> PathBuilder {
        PathBuilder::new()
    }

    /// Creates a new [`Path`] representing a line segment given its starting
    /// and end points.
    pub fn line(from: PointF64, to: PointF64) -> Self {
        PathBuilder::new().move_to(from).line_to(to).build()
    }

    /// Returns `true` if the path contains no sub-paths.
    pub fn is_empty(&self) -> bool {
        self.raw.iter().next().is_none()
    }

    /// The number of sub-paths in this path.
    pub fn sub_path_count(&self) -> usize {
        self.raw
            .iter()
            .filter(|event| matches!(event, PathEvent::Begin { .. }))
            .count()
    }

    /// The first vertex of the first sub-path.
    pub fn first_point(&self) -> Option<PointF64> {
        self.raw.iter().find_map(|event| match event {
            PathEvent::Begin { at } => Some(at.to_f64()),
            _ => None,
        })
    }

    /// The last vertex of the last sub-path, before any closing segment.
    pub fn last_point(&self) -> Option<PointF64> {
        self.raw.iter().fold(None, |last, event| match event {
            PathEvent::End { last, .. } => Some(last.to_f64()),
            _ => last,
        })
    }

    /// Returns `true` if every sub-path has been explicitly closed and ends
    /// on the vertex it started from.
    pub fn is_closed(&self) -> bool {
        let mut any = false;
        for event in self.raw.iter() {
            if let PathEvent::End { last, first, close } = event {
                if !close || last != first {
                    return false;
                }
                any = true;
            }
        }
        any
    }

    /// The exact axis-aligned bounds of the path.
    pub fn bounding_rect(&self) -> Option<RectF64> {
        let mut bounds: Option<lyon::math::Box2D> = None;
        let mut include = |b: lyon::math::Box2D| {
            bounds = Some(match bounds {
                Some(current) => current.union(&b),
                None => b,
            });
        };

        for event in self.raw.iter() {
            match event {
                PathEvent::Begin { at } => include(lyon::math::Box2D::new(at, at)),
                PathEvent::Line { from, to } => {
                    include(lyon::geom::LineSegment { from, to }.bounding_box())
                }
                PathEvent::Quadratic { from, ctrl, to } => {
                    include(lyon::geom::QuadraticBezierSegment { from, ctrl, to }.bounding_box())
                }
                PathEvent::Cubic {
                    from,
                    ctrl1,
                    ctrl2,
                    to,
                } => include(
                    lyon::geom::CubicBezierSegment {
                        from,
                        ctrl1,
                        ctrl2,
                        to,
                    }
                    .bounding_box(),
                ),
                PathEvent::End { .. } => {}
            }
        }

        bounds.map(|b| b.to_rect().to_f64())
    }
}
