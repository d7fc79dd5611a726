// MIT/Apache2 License

use core::fmt;
use ordered_float::NotNan;

/// The absolute tolerance used by every "approximately equal" test in this crate.
///
/// This type is essentially a wrapper around an `f64`, but with two invariants:
///
/// * The inner value will never be `NaN` or infinite.
/// * The inner value will never be negative.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Tolerance {
    inner: NotNan<f64>,
}

impl Tolerance {
    /// The tolerance used when none is configured.
    pub const DEFAULT_EPSILON: f64 = 1e-6;

    /// Create a new `Tolerance`. If the value does not meet the invariants mentioned above, this function
    /// returns `None`.
    #[must_use]
    #[inline]
    pub fn new(epsilon: f64) -> Option<Tolerance> {
        if !epsilon.is_finite() || epsilon < 0.0 {
            return None;
        }

        NotNan::new(epsilon).ok().map(|inner| Tolerance { inner })
    }

    /// Get the inner value of the `Tolerance`.
    #[must_use]
    #[inline]
    pub fn into_inner(self) -> f64 {
        self.inner.into_inner()
    }

    /// Tell whether `value` is within this tolerance of zero.
    #[must_use]
    #[inline]
    pub fn is_zero(self, value: f64) -> bool {
        crate::util::approximately(value, 0.0, self.into_inner())
    }
}

impl Default for Tolerance {
    #[inline]
    fn default() -> Tolerance {
        Tolerance::new(Tolerance::DEFAULT_EPSILON).expect("default tolerance is finite and positive")
    }
}

impl From<Tolerance> for f64 {
    #[inline]
    fn from(t: Tolerance) -> f64 {
        t.into_inner()
    }
}

impl fmt::Display for Tolerance {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.into_inner(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_values() {
        assert!(Tolerance::new(f64::NAN).is_none());
        assert!(Tolerance::new(f64::INFINITY).is_none());
        assert!(Tolerance::new(-1e-3).is_none());
        assert_eq!(Tolerance::new(0.0).map(Tolerance::into_inner), Some(0.0));
    }

    #[test]
    fn default_is_one_millionth() {
        let tol = Tolerance::default();
        assert_eq!(tol.into_inner(), 1e-6);
        assert!(tol.is_zero(5e-7));
        assert!(!tol.is_zero(2e-6));
    }
}
