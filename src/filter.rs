// MIT/Apache2 License

use crate::{
    path_data::{self, write_subpath, PathData},
    reconstruct::Reconstructor,
    Error, KeepPolicy, Options, Result,
};
use shapecut_geometry::{segment_parity, CubicSegment, Curve, Degenerate, Subpath};

/// A candidate piece that was left out of the output because it could not be classified.
#[derive(Debug, Clone, PartialEq)]
pub struct Skipped {
    /// Position of the piece in the candidate.
    pub index: usize,
    /// Why it could not be classified.
    pub reason: Error,
}

/// The outcome of a filtering pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filtered {
    path_data: PathData,
    kept: Vec<usize>,
    skipped: Vec<Skipped>,
}

impl Filtered {
    /// The compound path made of every kept piece.
    #[must_use]
    #[inline]
    pub fn path_data(&self) -> &PathData {
        &self.path_data
    }

    /// Take the compound path.
    #[must_use]
    #[inline]
    pub fn into_path_data(self) -> PathData {
        self.path_data
    }

    /// Positions of the kept pieces, in output order.
    #[must_use]
    #[inline]
    pub fn kept(&self) -> &[usize] {
        &self.kept
    }

    /// Pieces that were skipped because their geometry was degenerate or their path data malformed.
    #[must_use]
    #[inline]
    pub fn skipped(&self) -> &[Skipped] {
        &self.skipped
    }
}

/// Removes the pieces of a candidate curve that fall on the unwanted side of a closed boundary.
///
/// Each piece is judged by the midpoint of its first segment. That is only meaningful if no piece crosses the
/// boundary, so the candidate must already have been cut at every point where it meets the boundary.
#[derive(Debug, Clone, Copy)]
pub struct Filter<'a> {
    boundary: &'a Curve,
    options: Options,
}

impl<'a> Filter<'a> {
    /// Create a filter, checking that every subpath of the boundary is closed and has some extent.
    pub fn new(boundary: &'a Curve, options: Options) -> Result<Filter<'a>> {
        boundary.check_boundary(options.tolerance)?;
        Ok(Filter { boundary, options })
    }

    /// The policy deciding which side is kept.
    #[must_use]
    #[inline]
    pub fn keep_policy(&self) -> KeepPolicy {
        self.options.keep
    }

    /// Whether a single segment is kept, judged by its midpoint.
    #[must_use]
    pub fn keeps_segment(&self, segment: &CubicSegment) -> bool {
        let parity = segment_parity(self.boundary, segment, self.options.tolerance);
        self.options.keep.keeps(parity)
    }

    /// Whether a whole subpath is kept, judged by its first segment. `index` only labels errors.
    pub fn keeps_subpath(&self, index: usize, subpath: &Subpath) -> std::result::Result<bool, Degenerate> {
        let first = subpath.check_candidate(index, self.options.tolerance)?;
        Ok(self.keeps_segment(first))
    }

    /// Filter the subpaths of a candidate curve. Kept subpaths are written as absolute path data, in their
    /// original order.
    pub fn filter_curve(&self, candidate: &Curve) -> Result<Filtered> {
        let mut reconstructor = Reconstructor::new();
        let mut filtered = Filtered::default();

        for (index, subpath) in candidate.subpaths().iter().enumerate() {
            match self.keeps_subpath(index, subpath) {
                Ok(true) => {
                    let mut data = String::new();
                    write_subpath(&mut data, subpath, self.options.tolerance);
                    reconstructor.push(&data)?;
                    filtered.kept.push(index);
                }
                Ok(false) => log::debug!("dropping subpath #{}", index),
                Err(reason) => filtered.skip(index, reason.into()),
            }
        }

        filtered.path_data = reconstructor.finish();
        Ok(filtered)
    }

    /// Filter a candidate given as one string of path data per piece, as left behind by cutting a path into
    /// separate elements. A piece is judged by the first segment of its first subpath and, when kept, its path
    /// data is passed through unchanged apart from its leading move.
    pub fn filter_pieces<I>(&self, pieces: I) -> Result<Filtered>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut reconstructor = Reconstructor::new();
        let mut filtered = Filtered::default();

        for (index, piece) in pieces.into_iter().enumerate() {
            let piece = piece.as_ref();
            match self.keeps_piece(piece) {
                Ok(true) => {
                    reconstructor.push(piece)?;
                    filtered.kept.push(index);
                }
                Ok(false) => log::debug!("dropping piece #{}", index),
                Err(reason) => filtered.skip(index, reason),
            }
        }

        filtered.path_data = reconstructor.finish();
        Ok(filtered)
    }

    fn keeps_piece(&self, piece: &str) -> Result<bool> {
        let curve = path_data::parse(piece)?;
        let first = curve
            .subpaths()
            .first()
            .ok_or(Degenerate::EmptySubpath { subpath: 0 })?;
        Ok(self.keeps_subpath(0, first)?)
    }
}

impl Filtered {
    fn skip(&mut self, index: usize, reason: Error) {
        log::warn!("skipping piece #{}: {}", index, reason);
        self.skipped.push(Skipped { index, reason });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapecut_geometry::{point, Tolerance};

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn square() -> Curve {
        path_data::parse("M0,0 L10,0 L10,10 L0,10 Z").unwrap()
    }

    #[test]
    fn open_boundary_is_rejected() {
        let open = path_data::parse("M0,0 L10,0 L10,10").unwrap();
        assert_eq!(
            Filter::new(&open, Options::default()).unwrap_err(),
            Error::Degenerate(Degenerate::OpenSubpath { subpath: 0 })
        );
    }

    #[test]
    fn keeps_segments_by_policy() {
        init();
        let boundary = square();
        let inside = Filter::new(&boundary, Options::new()).unwrap();
        let outside = Filter::new(&boundary, Options::new().keep(KeepPolicy::Outside)).unwrap();

        let middle = CubicSegment::line(point(0.0, 5.0), point(10.0, 5.0));
        let left = CubicSegment::line(point(-5.0, 5.0), point(0.0, 5.0));

        assert_eq!(outside.keep_policy(), KeepPolicy::Outside);
        assert!(inside.keeps_segment(&middle));
        assert!(!inside.keeps_segment(&left));
        assert!(!outside.keeps_segment(&middle));
        assert!(outside.keeps_segment(&left));
    }

    #[test]
    fn subpath_is_judged_by_its_first_segment() {
        let boundary = square();
        let filter = Filter::new(&boundary, Options::new()).unwrap();
        // starts inside, wanders out without having been cut
        let subpath = path_data::parse("M2,5 L8,5 L30,5").unwrap().into_iter().next().unwrap();
        assert_eq!(filter.keeps_subpath(0, &subpath), Ok(true));
    }

    #[test]
    fn filters_curve_subpaths_in_order() {
        init();
        let boundary = square();
        let candidate = path_data::parse("M-5,5 L0,5 M0,5 L10,5 M10,5 L15,5 M2,2 L3,3").unwrap();

        let inside = Filter::new(&boundary, Options::new()).unwrap();
        let filtered = inside.filter_curve(&candidate).unwrap();
        assert_eq!(filtered.kept(), &[1, 3]);
        assert_eq!(
            filtered.path_data().as_str(),
            "M0,5 C0,5 10,5 10,5M2,2 C2,2 3,3 3,3"
        );

        let outside = Filter::new(&boundary, Options::new().keep(KeepPolicy::Outside)).unwrap();
        let filtered = outside.filter_curve(&candidate).unwrap();
        assert_eq!(filtered.kept(), &[0, 2]);
        assert!(filtered.skipped().is_empty());
    }

    #[test]
    fn degenerate_pieces_are_skipped_not_fatal() {
        init();
        let boundary = square();
        let filter = Filter::new(&boundary, Options::new()).unwrap();
        let pieces = ["M5,5 L5,5 L6,6", "M 1 x", "M4,4", "M1,1 L2,2"];

        let filtered = filter.filter_pieces(pieces.iter()).unwrap();
        assert_eq!(filtered.kept(), &[3]);
        assert_eq!(filtered.path_data().as_str(), "M1,1 L2,2");

        let skipped = filtered.skipped();
        assert_eq!(skipped.iter().map(|s| s.index).collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(
            skipped[0].reason,
            Error::Degenerate(Degenerate::PointSegment {
                subpath: 0,
                segment: 0
            })
        );
        assert!(matches!(skipped[1].reason, Error::PathData(_)));
        assert_eq!(
            skipped[2].reason,
            Error::Degenerate(Degenerate::EmptySubpath { subpath: 0 })
        );
    }

    #[test]
    fn tolerance_reaches_the_boundary_check() {
        let nearly_closed = path_data::parse("M0,0 L10,0 L10,10 L0,10 L0,0.001").unwrap();
        assert!(Filter::new(&nearly_closed, Options::new()).is_err());

        let loose = Options::new().tolerance(Tolerance::new(0.01).unwrap());
        assert!(Filter::new(&nearly_closed, loose).is_ok());
    }
}
