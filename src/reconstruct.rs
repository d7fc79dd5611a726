// MIT/Apache2 License

use crate::{
    path_data::{absolute_leading_move, PathData},
    Result,
};

/// Joins the path data of kept pieces into one compound path.
///
/// Pieces are appended verbatim, except that a leading relative move is made absolute. Once pieces share one
/// path, a relative move would be measured from the end of the previous piece instead of from the origin,
/// shifting every disconnected piece after the first.
#[derive(Debug, Clone, Default)]
pub struct Reconstructor {
    data: String,
    pieces: usize,
}

impl Reconstructor {
    /// Create a new, empty reconstructor.
    #[must_use]
    #[inline]
    pub fn new() -> Reconstructor {
        Reconstructor::default()
    }

    /// Append the path data of one piece. Empty pieces are ignored.
    pub fn push(&mut self, piece: &str) -> Result {
        if let Some(piece) = absolute_leading_move(piece)? {
            self.data.push_str(&piece);
            self.pieces += 1;
        }
        Ok(())
    }

    /// Number of pieces appended so far.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.pieces
    }

    /// Whether nothing has been appended yet.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pieces == 0
    }

    /// Take the compound path.
    #[must_use]
    #[inline]
    pub fn finish(self) -> PathData {
        PathData::new(self.data)
    }
}

/// Join the path data of several pieces into one compound path.
pub fn reconstruct<I>(pieces: I) -> Result<PathData>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut reconstructor = Reconstructor::new();
    for piece in pieces {
        reconstructor.push(piece.as_ref())?;
    }
    Ok(reconstructor.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn relative_moves_keep_their_absolute_position() {
        let pieces = ["m 20,20 l 5,0", "m 40,40 l 5,0"];
        let joined = reconstruct(pieces.iter()).unwrap();
        assert_eq!(joined.as_str(), "M 20,20 l 5,0M 40,40 l 5,0");

        let curve = joined.to_curve().unwrap();
        let starts: Vec<_> = curve.subpaths().iter().map(|sp| sp.start().unwrap()).collect();
        assert_eq!(starts.len(), 2);
        assert_eq!((starts[0].x, starts[0].y), (20.0, 20.0));
        assert_eq!((starts[1].x, starts[1].y), (40.0, 40.0));
    }

    #[test]
    fn naive_concatenation_would_shift_pieces() {
        let naive = PathData::new("m 20,20 l 5,0m 40,40 l 5,0".to_owned());
        let curve = naive.to_curve().unwrap();
        let second = curve.subpaths()[1].start().unwrap();
        assert_eq!((second.x, second.y), (65.0, 60.0));
    }

    #[test]
    fn implicit_lines_stay_relative() {
        let joined = reconstruct(vec!["M 0,0 L 1,0", "m 10,10 1,0 0,1"]).unwrap();
        let curve = joined.to_curve().unwrap();
        let second = &curve.subpaths()[1];
        assert_eq!(second.start().map(|p| (p.x, p.y)), Some((10.0, 10.0)));
        assert_eq!(second.end().map(|p| (p.x, p.y)), Some((11.0, 11.0)));
    }

    #[test]
    fn skips_blank_pieces_and_rejects_headless_ones() {
        let mut reconstructor = Reconstructor::new();
        reconstructor.push("  ").unwrap();
        assert!(reconstructor.is_empty());
        reconstructor.push("M1 1 L2 2").unwrap();
        assert_eq!(reconstructor.len(), 1);

        assert!(matches!(
            reconstructor.push("L 3 3"),
            Err(Error::PathData(_))
        ));
        assert_eq!(reconstructor.finish().as_str(), "M1 1 L2 2");
    }
}
