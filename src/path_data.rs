// MIT/Apache2 License

//! Reading and writing SVG path data.
//!
//! Reading tokenizes with `svgtypes` and converts every drawing command into absolute cubic segments: lines keep their control points on the
//! anchors, quadratic curves are elevated, and elliptical arcs are approximated by cubic curves. Writing emits
//! absolute `M`, `C` and `Z` commands only.

use crate::{Error, Result};
use lyon_geom::{vector, Angle, ArcFlags, QuadraticBezierSegment, SvgArc, Vector};
use shapecut_geometry::{point, CubicSegment, Curve, Point, Subpath, Tolerance};
use std::{
    fmt::{self, Write as _},
    result::Result as StdResult,
};
use svgtypes::{NumberListParser, PathParser, PathSegment};

/// An owned string of SVG path data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PathData(String);

impl PathData {
    /// Wrap a string of path data without checking it.
    #[must_use]
    #[inline]
    pub fn new(data: String) -> PathData {
        PathData(data)
    }

    /// Get the path data as a string slice.
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwrap the inner string.
    #[must_use]
    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Whether the path data draws nothing at all.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Parse this path data into absolute cubic segments.
    #[inline]
    pub fn to_curve(&self) -> Result<Curve> {
        parse(&self.0)
    }

    /// Parse this path data into a `lyon_path::Path`.
    #[inline]
    pub fn to_path(&self, tolerance: Tolerance) -> Result<lyon_path::Path> {
        Ok(self.to_curve()?.to_path(tolerance))
    }
}

impl fmt::Display for PathData {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PathData {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Parse SVG path data into a curve of absolute cubic segments.
///
/// Subpaths that consist of a lone move are dropped.
pub fn parse(data: &str) -> Result<Curve> {
    let mut absolute = Absolute::new();
    for (i, segment) in PathParser::from(data).enumerate() {
        let segment = segment?;
        if i == 0 && !matches!(segment, PathSegment::MoveTo { .. }) {
            return Err(Error::path_data(NO_LEADING_MOVE));
        }
        absolute.apply(segment)?;
    }
    Ok(absolute.finish())
}

/// Write a curve as absolute SVG path data. Closed subpaths end with `Z`.
#[must_use]
pub fn write(curve: &Curve, tolerance: Tolerance) -> PathData {
    let mut out = String::new();
    for subpath in curve.subpaths() {
        write_subpath(&mut out, subpath, tolerance);
    }
    PathData(out)
}

/// Write one subpath as absolute SVG path data, starting with `M`.
pub(crate) fn write_subpath(out: &mut String, subpath: &Subpath, tolerance: Tolerance) {
    let start = match subpath.start() {
        Some(start) => start,
        None => return,
    };

    if !out.is_empty() {
        out.push(' ');
    }

    // writing into a String never fails
    let _ = write!(out, "M{},{}", start.x, start.y);
    for seg in subpath {
        let _ = write!(
            out,
            " C{},{} {},{} {},{}",
            seg.control1.x, seg.control1.y, seg.control2.x, seg.control2.y, seg.end.x, seg.end.y
        );
    }
    if subpath.is_closed(tolerance) {
        out.push_str(" Z");
    }
}

/// Rewrite a leading relative move (`m`) into an absolute one (`M`).
///
/// Coordinate pairs following the first one in a move are implicit line commands, relative in the original
/// text; they are kept relative by inserting an explicit `l`. Returns `None` for empty or whitespace-only data.
pub(crate) fn absolute_leading_move(data: &str) -> Result<Option<String>> {
    let trimmed = data.trim_start();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let (x, y) = match PathParser::from(trimmed).next() {
        Some(Ok(PathSegment::MoveTo { abs: true, .. })) => return Ok(Some(trimmed.to_owned())),
        Some(Ok(PathSegment::MoveTo { abs: false, x, y })) => (x, y),
        Some(Err(err)) => return Err(err.into()),
        _ => return Err(Error::path_data(NO_LEADING_MOVE)),
    };

    // the move's coordinates run up to the next command letter
    let rest_at = trimmed[1..]
        .find(|c: char| c.is_ascii_alphabetic() && c != 'e' && c != 'E')
        .map_or(trimmed.len(), |i| i + 1);
    let numbers = NumberListParser::from(trimmed[1..rest_at].trim())
        .collect::<StdResult<Vec<f64>, _>>()?;
    if numbers.len() == 2 {
        return Ok(Some(format!("M{}", &trimmed[1..])));
    }

    let implicit = numbers.get(2..).unwrap_or_default();
    if implicit.len() % 2 != 0 {
        return Err(Error::path_data("odd number of coordinates in move command"));
    }

    let mut out = String::with_capacity(trimmed.len() + 2);
    // writing into a String never fails
    let _ = write!(out, "M{},{} l", x, y);
    for (i, pair) in implicit.chunks_exact(2).enumerate() {
        let sep = if i == 0 { "" } else { " " };
        let _ = write!(out, "{}{},{}", sep, pair[0], pair[1]);
    }
    out.push_str(&trimmed[rest_at..]);
    Ok(Some(out))
}

const NO_LEADING_MOVE: &str = "path data must begin with a move command";

/// Reject coordinates that overflowed while parsing or resolving.
#[inline]
fn finite(p: Point) -> Result<Point> {
    if p.x.is_finite() && p.y.is_finite() {
        Ok(p)
    } else {
        Err(Error::path_data("number out of range"))
    }
}

/// Control point left behind by the previous command, for the smooth `S` and `T` commands.
#[derive(Copy, Clone)]
enum Smooth {
    None,
    Cubic(Point),
    Quadratic(Point),
}

/// Turns parsed path segments into absolute cubic segments.
struct Absolute {
    curve: Curve,
    current: Subpath,
    cursor: Point,
    start: Point,
    smooth: Smooth,
}

impl Absolute {
    fn new() -> Self {
        Absolute {
            curve: Curve::new(),
            current: Subpath::default(),
            cursor: point(0.0, 0.0),
            start: point(0.0, 0.0),
            smooth: Smooth::None,
        }
    }

    fn finish(mut self) -> Curve {
        self.finish_subpath();
        self.curve
    }

    fn finish_subpath(&mut self) {
        if !self.current.is_empty() {
            self.curve.push(std::mem::take(&mut self.current));
        }
    }

    /// Offset a coordinate pair by the cursor for relative commands.
    #[inline]
    fn resolve(&self, abs: bool, x: f64, y: f64) -> Result<Point> {
        if abs {
            finite(point(x, y))
        } else {
            finite(self.cursor + vector(x, y))
        }
    }

    fn push(&mut self, segment: CubicSegment) {
        self.cursor = segment.end;
        self.current.push(segment);
    }

    fn apply(&mut self, segment: PathSegment) -> Result {
        let mut smooth = Smooth::None;

        match segment {
            PathSegment::MoveTo { abs, x, y } => {
                let to = self.resolve(abs, x, y)?;
                self.finish_subpath();
                self.cursor = to;
                self.start = to;
            }
            PathSegment::LineTo { abs, x, y } => {
                let to = self.resolve(abs, x, y)?;
                self.push(CubicSegment::line(self.cursor, to));
            }
            PathSegment::HorizontalLineTo { abs, x } => {
                let to = if abs {
                    finite(point(x, self.cursor.y))?
                } else {
                    self.resolve(false, x, 0.0)?
                };
                self.push(CubicSegment::line(self.cursor, to));
            }
            PathSegment::VerticalLineTo { abs, y } => {
                let to = if abs {
                    finite(point(self.cursor.x, y))?
                } else {
                    self.resolve(false, 0.0, y)?
                };
                self.push(CubicSegment::line(self.cursor, to));
            }
            PathSegment::CurveTo {
                abs,
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => {
                let ctrl1 = self.resolve(abs, x1, y1)?;
                let ctrl2 = self.resolve(abs, x2, y2)?;
                let to = self.resolve(abs, x, y)?;
                self.push(CubicSegment::new(self.cursor, ctrl1, ctrl2, to));
                smooth = Smooth::Cubic(ctrl2);
            }
            PathSegment::SmoothCurveTo { abs, x2, y2, x, y } => {
                let ctrl2 = self.resolve(abs, x2, y2)?;
                let to = self.resolve(abs, x, y)?;
                let ctrl1 = match self.smooth {
                    Smooth::Cubic(prev) => self.reflect(prev),
                    _ => self.cursor,
                };
                self.push(CubicSegment::new(self.cursor, ctrl1, ctrl2, to));
                smooth = Smooth::Cubic(ctrl2);
            }
            PathSegment::Quadratic { abs, x1, y1, x, y } => {
                let ctrl = self.resolve(abs, x1, y1)?;
                let to = self.resolve(abs, x, y)?;
                self.push_quadratic(ctrl, to);
                smooth = Smooth::Quadratic(ctrl);
            }
            PathSegment::SmoothQuadratic { abs, x, y } => {
                let to = self.resolve(abs, x, y)?;
                let ctrl = match self.smooth {
                    Smooth::Quadratic(prev) => self.reflect(prev),
                    _ => self.cursor,
                };
                self.push_quadratic(ctrl, to);
                smooth = Smooth::Quadratic(ctrl);
            }
            PathSegment::EllipticalArc {
                abs,
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                x,
                y,
            } => {
                let to = self.resolve(abs, x, y)?;
                let radii = finite(point(rx.abs(), ry.abs()))?.to_vector();
                if !x_axis_rotation.is_finite() {
                    return Err(Error::path_data("number out of range"));
                }
                self.push_arc(radii, x_axis_rotation, ArcFlags { large_arc, sweep }, to);
            }
            PathSegment::ClosePath { .. } => {
                if self.cursor != self.start {
                    self.push(CubicSegment::line(self.cursor, self.start));
                }
                self.finish_subpath();
                self.cursor = self.start;
            }
        }

        self.smooth = smooth;
        Ok(())
    }

    /// Mirror a control point through the cursor.
    #[inline]
    fn reflect(&self, ctrl: Point) -> Point {
        self.cursor + (self.cursor - ctrl)
    }

    fn push_quadratic(&mut self, ctrl: Point, to: Point) {
        let quad = QuadraticBezierSegment {
            from: self.cursor,
            ctrl,
            to,
        };
        self.push(quad.to_cubic().into());
    }

    fn push_arc(&mut self, radii: Vector<f64>, rotation: f64, flags: ArcFlags, to: Point) {
        if to == self.cursor {
            // an arc to its own start point draws nothing
            return;
        }

        let arc = SvgArc {
            from: self.cursor,
            to,
            radii,
            x_rotation: Angle::degrees(rotation),
            flags,
        };
        if arc.is_straight_line() {
            self.push(CubicSegment::line(self.cursor, to));
            return;
        }

        let current = &mut self.current;
        arc.to_arc()
            .for_each_cubic_bezier(&mut |seg| current.push(CubicSegment::from(*seg)));
        // land exactly on the requested end point
        self.cursor = to;
    }
}
