// MIT/Apache2 License

//! Contains the geometry behind the `shapecut` crate: cubic Bezier segments, the subpaths and curves built out
//! of them, the cubic root solver used to intersect a segment with a horizontal line, and the even-odd ray
//! casting that decides whether a point lies inside a closed boundary.
//!
//! Coordinates are `f64` throughout. Every "approximately equal" test goes through a [`Tolerance`].

#![warn(clippy::pedantic)]
#![allow(clippy::many_single_char_names, clippy::must_use_candidate)]

mod cubic;
pub use cubic::*;

mod curve;
pub use curve::*;

mod error;
pub use error::*;

mod path;
pub use path::*;

mod raycast;
pub use raycast::*;

mod roots;
pub use roots::*;

mod tolerance;
pub use tolerance::*;

pub(crate) mod util;

/// A point in two-dimensional space, in document coordinates.
pub type Point = lyon_geom::Point<f64>;

/// Shorthand for building a [`Point`].
#[must_use]
#[inline]
pub fn point(x: f64, y: f64) -> Point {
    lyon_geom::point(x, y)
}
