// MIT/Apache2 License

#![allow(clippy::module_name_repetitions)]

use crate::{CubicSegment, Degenerate, Point, Tolerance};
use core::iter::FromIterator;
use lyon_geom::QuadraticBezierSegment;
use lyon_path::{Event, Path, PathEvent};
use std::{slice, vec};

/// A vertex in anchor/control form: the handle leading into the anchor, the anchor itself, and the handle
/// leading out of it. A run of these describes a subpath the way vector editors store it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Node {
    /// The control point of the segment arriving at this anchor.
    pub before: Point,
    /// The on-curve point.
    pub anchor: Point,
    /// The control point of the segment leaving this anchor.
    pub after: Point,
}

impl Node {
    /// A corner node whose handles sit on the anchor.
    #[must_use]
    #[inline]
    pub const fn corner(anchor: Point) -> Node {
        Node {
            before: anchor,
            anchor,
            after: anchor,
        }
    }
}

/// A connected run of cubic segments, where every segment starts where the previous one ended.
///
/// The connectivity is a contract on the caller and is not re-checked here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Subpath {
    segments: Vec<CubicSegment>,
}

impl Subpath {
    /// Create a subpath from segments that are already connected end to start.
    #[must_use]
    #[inline]
    pub fn new(segments: Vec<CubicSegment>) -> Subpath {
        Subpath { segments }
    }

    /// Decompose a run of anchor/control nodes into the segments between consecutive anchors.
    ///
    /// A single node produces an empty subpath.
    #[must_use]
    pub fn from_nodes(nodes: &[Node]) -> Subpath {
        nodes
            .windows(2)
            .map(|pair| CubicSegment::new(pair[0].anchor, pair[0].after, pair[1].before, pair[1].anchor))
            .collect()
    }

    /// Get the segments that make up this subpath.
    #[must_use]
    #[inline]
    pub fn segments(&self) -> &[CubicSegment] {
        &self.segments
    }

    /// Get the first segment, if there is one.
    #[must_use]
    #[inline]
    pub fn first_segment(&self) -> Option<&CubicSegment> {
        self.segments.first()
    }

    /// Number of segments.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether this subpath contains no segments.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Add a segment to the end of this subpath.
    #[inline]
    pub fn push(&mut self, segment: CubicSegment) {
        self.segments.push(segment);
    }

    /// The first anchor of the subpath.
    #[must_use]
    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.segments.first().map(|seg| seg.start)
    }

    /// The last anchor of the subpath.
    #[must_use]
    #[inline]
    pub fn end(&self) -> Option<Point> {
        self.segments.last().map(|seg| seg.end)
    }

    /// Whether the subpath ends where it starts. An empty subpath is not closed.
    #[must_use]
    pub fn is_closed(&self, tolerance: Tolerance) -> bool {
        let eps = tolerance.into_inner();
        match (self.start(), self.end()) {
            (Some(start), Some(end)) => {
                approx::abs_diff_eq!(start.x, end.x, epsilon = eps)
                    && approx::abs_diff_eq!(start.y, end.y, epsilon = eps)
            }
            _ => false,
        }
    }

    /// Check that this subpath can be classified by the midpoint of its first segment. `index` is used for
    /// error reporting only.
    pub fn check_candidate(&self, index: usize, tolerance: Tolerance) -> Result<&CubicSegment, Degenerate> {
        let first = self
            .first_segment()
            .ok_or(Degenerate::EmptySubpath { subpath: index })?;
        if first.is_point(tolerance) {
            return Err(Degenerate::PointSegment {
                subpath: index,
                segment: 0,
            });
        }
        Ok(first)
    }

    /// Check that this subpath can take part in a boundary. `index` is used for error reporting only.
    pub fn check_boundary(&self, index: usize, tolerance: Tolerance) -> Result<(), Degenerate> {
        if self.is_empty() {
            return Err(Degenerate::EmptySubpath { subpath: index });
        }
        if !self.is_closed(tolerance) {
            return Err(Degenerate::OpenSubpath { subpath: index });
        }
        if self.segments.iter().all(|seg| seg.is_point(tolerance)) {
            return Err(Degenerate::PointSubpath { subpath: index });
        }
        Ok(())
    }
}

impl FromIterator<CubicSegment> for Subpath {
    #[inline]
    fn from_iter<T: IntoIterator<Item = CubicSegment>>(iter: T) -> Subpath {
        Subpath {
            segments: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Subpath {
    type Item = &'a CubicSegment;
    type IntoIter = slice::Iter<'a, CubicSegment>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

/// An ordered collection of subpaths. For a boundary the order does not matter; for a candidate it is the order
/// of the output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Curve {
    subpaths: Vec<Subpath>,
}

impl Curve {
    /// Create a new, empty curve.
    #[must_use]
    #[inline]
    pub fn new() -> Curve {
        Curve { subpaths: vec![] }
    }

    /// Get the subpaths of this curve.
    #[must_use]
    #[inline]
    pub fn subpaths(&self) -> &[Subpath] {
        &self.subpaths
    }

    /// Add a subpath to the end of this curve.
    #[inline]
    pub fn push(&mut self, subpath: Subpath) {
        self.subpaths.push(subpath);
    }

    /// Whether the curve has no subpaths.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.subpaths.is_empty()
    }

    /// Get an iterator over every segment of every subpath.
    #[inline]
    pub fn segments(&self) -> impl Iterator<Item = &CubicSegment> + '_ {
        self.subpaths.iter().flat_map(Subpath::segments)
    }

    /// Check that this curve can serve as a containment boundary: it has at least one subpath, and every
    /// subpath is non-empty, closed, and not collapsed to a point.
    pub fn check_boundary(&self, tolerance: Tolerance) -> Result<(), Degenerate> {
        if self.is_empty() {
            return Err(Degenerate::EmptyBoundary);
        }

        self.subpaths
            .iter()
            .enumerate()
            .try_for_each(|(i, subpath)| subpath.check_boundary(i, tolerance))
    }

    /// Build a curve from path events. Lines and quadratic curves are elevated to cubics; closing an open run
    /// adds the closing line.
    pub fn from_events<I: IntoIterator<Item = Event<Point, Point>>>(events: I) -> Curve {
        let mut curve = Curve::new();
        let mut current = Subpath::default();

        for event in events {
            match event {
                Event::Begin { .. } => {
                    current = Subpath::default();
                }
                Event::Line { from, to } => current.push(CubicSegment::line(from, to)),
                Event::Quadratic { from, ctrl, to } => {
                    current.push(QuadraticBezierSegment { from, ctrl, to }.to_cubic().into());
                }
                Event::Cubic {
                    from,
                    ctrl1,
                    ctrl2,
                    to,
                } => current.push(CubicSegment::new(from, ctrl1, ctrl2, to)),
                Event::End { last, first, close } => {
                    if close && last != first {
                        current.push(CubicSegment::line(last, first));
                    }
                    curve.push(core::mem::take(&mut current));
                }
            }
        }

        curve
    }

    /// Build a curve from a `lyon_path::Path`, widening its coordinates to `f64`.
    #[must_use]
    pub fn from_path(path: &Path) -> Curve {
        Curve::from_events(path.iter().map(widen))
    }

    /// Convert this curve into a `lyon_path::Path` for rendering. Coordinates are narrowed to `f32`.
    #[must_use]
    pub fn to_path(&self, tolerance: Tolerance) -> Path {
        let mut builder = Path::builder();

        for subpath in self.subpaths.iter().filter(|s| !s.is_empty()) {
            let mut started = false;
            for seg in subpath {
                if !started {
                    builder.begin(seg.start.to_f32());
                    started = true;
                }
                builder.cubic_bezier_to(seg.control1.to_f32(), seg.control2.to_f32(), seg.end.to_f32());
            }
            builder.end(subpath.is_closed(tolerance));
        }

        builder.build()
    }
}

fn widen(event: PathEvent) -> Event<Point, Point> {
    match event {
        Event::Begin { at } => Event::Begin { at: at.to_f64() },
        Event::Line { from, to } => Event::Line {
            from: from.to_f64(),
            to: to.to_f64(),
        },
        Event::Quadratic { from, ctrl, to } => Event::Quadratic {
            from: from.to_f64(),
            ctrl: ctrl.to_f64(),
            to: to.to_f64(),
        },
        Event::Cubic {
            from,
            ctrl1,
            ctrl2,
            to,
        } => Event::Cubic {
            from: from.to_f64(),
            ctrl1: ctrl1.to_f64(),
            ctrl2: ctrl2.to_f64(),
            to: to.to_f64(),
        },
        Event::End { last, first, close } => Event::End {
            last: last.to_f64(),
            first: first.to_f64(),
            close,
        },
    }
}

impl FromIterator<Subpath> for Curve {
    #[inline]
    fn from_iter<T: IntoIterator<Item = Subpath>>(iter: T) -> Curve {
        Curve {
            subpaths: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Curve {
    type Item = Subpath;
    type IntoIter = vec::IntoIter<Subpath>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.subpaths.into_iter()
    }
}

impl<'a> IntoIterator for &'a Curve {
    type Item = &'a Subpath;
    type IntoIter = slice::Iter<'a, Subpath>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.subpaths.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point;
    use lyon_path::math::point as point32;

    fn square() -> Curve {
        let corners = [
            point(0.0, 0.0),
            point(10.0, 0.0),
            point(10.0, 10.0),
            point(0.0, 10.0),
            point(0.0, 0.0),
        ];
        let nodes: Vec<Node> = corners.iter().copied().map(Node::corner).collect();
        core::iter::once(Subpath::from_nodes(&nodes)).collect()
    }

    #[test]
    fn nodes_become_segments_between_anchors() {
        let nodes = [
            Node {
                before: point(-1.0, 0.0),
                anchor: point(0.0, 0.0),
                after: point(1.0, 1.0),
            },
            Node {
                before: point(2.0, 1.0),
                anchor: point(3.0, 0.0),
                after: point(4.0, -1.0),
            },
            Node::corner(point(6.0, 0.0)),
        ];
        let subpath = Subpath::from_nodes(&nodes);
        assert_eq!(
            subpath.segments(),
            &[
                CubicSegment::new(point(0.0, 0.0), point(1.0, 1.0), point(2.0, 1.0), point(3.0, 0.0)),
                CubicSegment::new(point(3.0, 0.0), point(4.0, -1.0), point(6.0, 0.0), point(6.0, 0.0)),
            ]
        );
        assert!(Subpath::from_nodes(&nodes[..1]).is_empty());
    }

    #[test]
    fn square_is_a_valid_boundary() {
        let tol = Tolerance::default();
        let square = square();
        assert_eq!(square.segments().count(), 4);
        assert!(square.subpaths()[0].is_closed(tol));
        assert_eq!(square.check_boundary(tol), Ok(()));
    }

    #[test]
    fn open_and_empty_boundaries_are_rejected() {
        let tol = Tolerance::default();
        assert_eq!(Curve::new().check_boundary(tol), Err(Degenerate::EmptyBoundary));

        let open: Curve = core::iter::once(Subpath::new(vec![CubicSegment::line(
            point(0.0, 0.0),
            point(1.0, 0.0),
        )]))
        .collect();
        assert_eq!(
            open.check_boundary(tol),
            Err(Degenerate::OpenSubpath { subpath: 0 })
        );

        let mut with_empty = square();
        with_empty.push(Subpath::default());
        assert_eq!(
            with_empty.check_boundary(tol),
            Err(Degenerate::EmptySubpath { subpath: 1 })
        );

        let dot: Curve = core::iter::once(Subpath::new(vec![CubicSegment::line(
            point(2.0, 2.0),
            point(2.0, 2.0),
        )]))
        .collect();
        assert_eq!(
            dot.check_boundary(tol),
            Err(Degenerate::PointSubpath { subpath: 0 })
        );
    }

    #[test]
    fn candidate_checks_first_segment() {
        let tol = Tolerance::default();
        let p = point(1.0, 1.0);
        let dotted = Subpath::new(vec![CubicSegment::line(p, p), CubicSegment::line(p, point(2.0, 1.0))]);
        assert_eq!(
            dotted.check_candidate(4, tol),
            Err(Degenerate::PointSegment { subpath: 4, segment: 0 })
        );
        assert_eq!(
            Subpath::default().check_candidate(2, tol),
            Err(Degenerate::EmptySubpath { subpath: 2 })
        );
    }

    #[test]
    fn lyon_paths_round_trip() {
        let mut builder = Path::builder();
        builder.begin(point32(0.0, 0.0));
        builder.line_to(point32(10.0, 0.0));
        builder.quadratic_bezier_to(point32(10.0, 10.0), point32(0.0, 10.0));
        builder.end(true);
        builder.begin(point32(20.0, 20.0));
        builder.cubic_bezier_to(point32(21.0, 22.0), point32(23.0, 22.0), point32(24.0, 20.0));
        builder.end(false);
        let path = builder.build();

        let curve = Curve::from_path(&path);
        let tol = Tolerance::default();
        assert_eq!(curve.subpaths().len(), 2);
        // line, elevated quadratic, closing line
        assert_eq!(curve.subpaths()[0].len(), 3);
        assert!(curve.subpaths()[0].is_closed(tol));
        assert!(!curve.subpaths()[1].is_closed(tol));

        let back = Curve::from_path(&curve.to_path(tol));
        assert_eq!(back.subpaths().len(), 2);
        assert_eq!(back.segments().count(), curve.segments().count());
        for (a, b) in back.segments().zip(curve.segments()) {
            approx::assert_abs_diff_eq!(a.end.x, b.end.x, epsilon = 1e-4);
            approx::assert_abs_diff_eq!(a.end.y, b.end.y, epsilon = 1e-4);
        }
    }
}
