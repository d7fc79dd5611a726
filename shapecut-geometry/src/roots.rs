// MIT/Apache2 License

use core::{iter::FusedIterator, mem};

/// The real roots of a polynomial of degree three or lower. There are never more than three of them.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Roots {
    Three(f64, f64, f64),
    Two(f64, f64),
    One(f64),
    Empty,
}

impl Roots {
    /// Build a root set from up to three values, dropping those rejected by `keep`.
    fn collect_from(values: &[f64], mut keep: impl FnMut(f64) -> bool) -> Roots {
        values
            .iter()
            .copied()
            .filter(|&t| keep(t))
            .fold(Roots::Empty, Roots::push)
    }

    #[inline]
    fn push(self, root: f64) -> Roots {
        match self {
            Roots::Empty => Roots::One(root),
            Roots::One(a) => Roots::Two(a, root),
            Roots::Two(a, b) => Roots::Three(a, b, root),
            // never produced by the solver
            full @ Roots::Three(..) => full,
        }
    }

    /// Keep only the roots that lie in the parameter domain of a Bezier segment, `[0, 1]` inclusive.
    #[must_use]
    #[inline]
    pub fn within_unit_interval(self) -> Roots {
        self.retain(|t| (0.0..=1.0).contains(&t))
    }

    /// Keep only the roots for which `keep` returns `true`, preserving their order.
    #[must_use]
    #[inline]
    pub fn retain(self, keep: impl FnMut(f64) -> bool) -> Roots {
        match self {
            Roots::Three(a, b, c) => Roots::collect_from(&[a, b, c], keep),
            Roots::Two(a, b) => Roots::collect_from(&[a, b], keep),
            Roots::One(a) => Roots::collect_from(&[a], keep),
            Roots::Empty => Roots::Empty,
        }
    }

    /// Whether there are no roots at all.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Roots::Empty)
    }
}

impl Default for Roots {
    #[inline]
    fn default() -> Roots {
        Roots::Empty
    }
}

impl Iterator for Roots {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        match mem::replace(self, Roots::Empty) {
            Roots::Three(first, second, third) => {
                *self = Roots::Two(second, third);
                Some(first)
            }
            Roots::Two(first, second) => {
                *self = Roots::One(second);
                Some(first)
            }
            Roots::One(first) => Some(first),
            Roots::Empty => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = match self {
            Roots::Three(..) => 3,
            Roots::Two(..) => 2,
            Roots::One(_) => 1,
            Roots::Empty => 0,
        };
        (len, Some(len))
    }

    fn count(self) -> usize {
        self.len()
    }
}

impl FusedIterator for Roots {}

impl ExactSizeIterator for Roots {}
