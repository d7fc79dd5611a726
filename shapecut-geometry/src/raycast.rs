// MIT/Apache2 License

//! Even-odd containment by casting a horizontal ray towards `+x` and counting where it meets a boundary.
//!
//! A ray passing exactly through a boundary vertex, or tangent to a boundary segment, can be counted twice or
//! missed. No special case corrects for that.

use crate::{unit_roots, CubicSegment, Curve, Point, Tolerance};

/// Whether a ray crossed a boundary an odd or even number of times.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    /// The parity of a crossing count.
    #[must_use]
    #[inline]
    pub fn of(crossings: usize) -> Parity {
        if crossings % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }

    /// Under the even-odd rule, an odd number of crossings means the ray started inside.
    #[must_use]
    #[inline]
    pub fn is_inside(self) -> bool {
        matches!(self, Parity::Odd)
    }
}

/// Count the points where a ray leaving `origin` in the `+x` direction meets `segment`.
///
/// Intersections exactly at `origin.x` are counted.
#[must_use]
pub fn segment_crossings(segment: &CubicSegment, origin: Point, tolerance: Tolerance) -> usize {
    let roots = unit_roots(segment.ys_relative_to(origin.y), tolerance);
    let crossings = roots
        .clone()
        .map(|t| segment.eval_at(t))
        .filter(|hit| hit.x >= origin.x)
        .count();

    log::trace!(
        "segment {:?}: roots {:?}, {} crossing(s) right of {:?}",
        segment,
        roots,
        crossings,
        origin
    );

    crossings
}

/// Count the points where a ray leaving `origin` in the `+x` direction meets any segment of `boundary`.
#[must_use]
pub fn ray_crossings(boundary: &Curve, origin: Point, tolerance: Tolerance) -> usize {
    boundary
        .segments()
        .map(|segment| segment_crossings(segment, origin, tolerance))
        .sum()
}

/// Classify a point against a closed boundary.
#[must_use]
#[inline]
pub fn parity_at(boundary: &Curve, origin: Point, tolerance: Tolerance) -> Parity {
    Parity::of(ray_crossings(boundary, origin, tolerance))
}

/// Classify a whole candidate segment by its midpoint.
///
/// This stands for the segment only if the segment never crosses the boundary between its ends, which holds
/// when candidates have been cut at every intersection with the boundary beforehand.
#[must_use]
pub fn segment_parity(boundary: &Curve, segment: &CubicSegment, tolerance: Tolerance) -> Parity {
    let midpoint = segment.midpoint();
    let crossings = ray_crossings(boundary, midpoint, tolerance);
    log::debug!("midpoint {:?}: {} crossing(s)", midpoint, crossings);
    Parity::of(crossings)
}
