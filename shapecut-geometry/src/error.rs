// MIT/Apache2 License

use core::fmt;

/// Geometry that cannot be classified meaningfully.
///
/// Subpath and segment indices are zero-based positions within the curve they were found in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Degenerate {
    /// The boundary has no subpaths at all.
    EmptyBoundary,
    /// A subpath has no segments.
    EmptySubpath { subpath: usize },
    /// A boundary subpath does not end where it starts.
    OpenSubpath { subpath: usize },
    /// Every segment of a boundary subpath collapses to a single point.
    PointSubpath { subpath: usize },
    /// A candidate segment collapses to a single point, so its midpoint says nothing about the segment.
    PointSegment { subpath: usize, segment: usize },
}

impl fmt::Display for Degenerate {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBoundary => f.write_str("boundary curve has no subpaths"),
            Self::EmptySubpath { subpath } => write!(f, "subpath #{} has no segments", subpath),
            Self::OpenSubpath { subpath } => {
                write!(f, "boundary subpath #{} is not closed", subpath)
            }
            Self::PointSubpath { subpath } => {
                write!(f, "boundary subpath #{} collapses to a single point", subpath)
            }
            Self::PointSegment { subpath, segment } => write!(
                f,
                "segment #{} of subpath #{} collapses to a single point",
                segment, subpath
            ),
        }
    }
}

impl std::error::Error for Degenerate {}
