// MIT/Apache2 License

//! Removes the parts of a path that fall inside or outside a closed mask shape.
//!
//! The path is expected to have been cut already wherever it meets the mask, so that every piece lies wholly on
//! one side of it. Each piece is then judged by the midpoint of its first segment, using an even-odd ray cast
//! against the mask, and the surviving pieces are joined back into a single compound path.
//!
//! ```
//! let kept = shapecut::cut_and_remove(
//!     "M0,0 L10,0 L10,10 L0,10 Z",
//!     ["M-5,5 L0,5", "M0,5 L10,5", "M10,5 L15,5"],
//!     "inside",
//! )
//! .unwrap();
//! assert_eq!(kept.as_str(), "M0,5 L10,5");
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]

mod error;
mod filter;
mod keep;
mod reconstruct;

pub mod path_data;

pub use error::*;
pub use filter::*;
pub use keep::*;
pub use path_data::PathData;
pub use reconstruct::*;

pub use shapecut_geometry::{
    parity_at, point, ray_crossings, segment_crossings, segment_parity, unit_roots, CubicSegment, Curve,
    Degenerate, Node, Parity, Point, Polynomial, Roots, Subpath, Tolerance,
};

/// Keep the pieces of a pre-cut path that lie on one side of a closed boundary.
///
/// `keep` is checked before any geometry is read, so an invalid policy is reported even when the path data is
/// malformed too. Pieces that cannot be classified are left out and logged; use [`Filter`] to inspect them.
pub fn cut_and_remove<I>(boundary: &str, pieces: I, keep: &str) -> Result<PathData>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let keep: KeepPolicy = keep.parse()?;
    let boundary = path_data::parse(boundary)?;
    let filter = Filter::new(&boundary, Options::new().keep(keep))?;
    Ok(filter.filter_pieces(pieces)?.into_path_data())
}
