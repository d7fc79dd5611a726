// MIT/Apache2 License

use crate::{point, Point, Tolerance};
use lyon_geom::CubicBezierSegment;

/// A bezier curve, with four control points. Lines, quadratic curves and arcs are all expressed as one or more
/// of these before they reach the containment engine.
///
/// `start` and `end` lie on the curve; `control1` and `control2` generally do not.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CubicSegment {
    /// The starting point.
    pub start: Point,
    /// The first control point.
    pub control1: Point,
    /// The second control point.
    pub control2: Point,
    /// The ending point.
    pub end: Point,
}

impl CubicSegment {
    /// Create a new segment from its four points.
    #[must_use]
    #[inline]
    pub const fn new(start: Point, control1: Point, control2: Point, end: Point) -> CubicSegment {
        CubicSegment {
            start,
            control1,
            control2,
            end,
        }
    }

    /// A straight line expressed as a cubic, with both control points sitting on the anchors.
    #[must_use]
    #[inline]
    pub const fn line(from: Point, to: Point) -> CubicSegment {
        CubicSegment::new(from, from, to, to)
    }

    /// Evaluate the bezier curve at a certain `t`.
    ///
    /// This is exact at the ends: `eval_at(0.0)` is `start` and `eval_at(1.0)` is `end`.
    #[must_use]
    #[inline]
    pub fn eval_at(&self, t: f64) -> Point {
        let t2 = t * t;
        let t3 = t2 * t;
        let mt = 1.0 - t;
        let mt2 = mt * mt;
        let mt3 = mt2 * mt;
        let x = (self.start.x * mt3)
            + (3.0 * self.control1.x * mt2 * t)
            + (3.0 * self.control2.x * mt * t2)
            + (self.end.x * t3);
        let y = (self.start.y * mt3)
            + (3.0 * self.control1.y * mt2 * t)
            + (3.0 * self.control2.y * mt * t2)
            + (self.end.y * t3);
        point(x, y)
    }

    /// The point halfway along the parameter range, used to stand in for the whole segment when classifying it.
    #[must_use]
    #[inline]
    pub fn midpoint(&self) -> Point {
        self.eval_at(0.5)
    }

    /// The Y coordinates of the four points, translated so that the horizontal line `y = height` becomes
    /// `y = 0`.
    #[must_use]
    #[inline]
    pub fn ys_relative_to(&self, height: f64) -> [f64; 4] {
        [
            self.start.y - height,
            self.control1.y - height,
            self.control2.y - height,
            self.end.y - height,
        ]
    }

    /// Whether all four points coincide, making the segment a single point.
    #[must_use]
    pub fn is_point(&self, tolerance: Tolerance) -> bool {
        let eps = tolerance.into_inner();
        [self.control1, self.control2, self.end].iter().all(|p| {
            approx::abs_diff_eq!(p.x, self.start.x, epsilon = eps)
                && approx::abs_diff_eq!(p.y, self.start.y, epsilon = eps)
        })
    }
}

impl From<CubicBezierSegment<f64>> for CubicSegment {
    #[inline]
    fn from(seg: CubicBezierSegment<f64>) -> CubicSegment {
        CubicSegment::new(seg.from, seg.ctrl1, seg.ctrl2, seg.to)
    }
}

impl From<CubicSegment> for CubicBezierSegment<f64> {
    #[inline]
    fn from(seg: CubicSegment) -> CubicBezierSegment<f64> {
        CubicBezierSegment {
            from: seg.start,
            ctrl1: seg.control1,
            ctrl2: seg.control2,
            to: seg.end,
        }
    }
}
