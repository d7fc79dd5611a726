// MIT/Apache2 License

use crate::{Error, Result};
use shapecut_geometry::{Parity, Tolerance};
use std::{fmt, str::FromStr};

/// Which side of the boundary survives the cut.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum KeepPolicy {
    /// Keep the pieces inside the boundary, as if it were a clipping mask.
    Inside,
    /// Keep the pieces outside the boundary, punching a hole where it lies.
    Outside,
}

impl KeepPolicy {
    /// Decide whether a piece whose midpoint has the given crossing parity is kept.
    #[must_use]
    #[inline]
    pub fn keeps(self, parity: Parity) -> bool {
        match self {
            KeepPolicy::Inside => parity == Parity::Odd,
            KeepPolicy::Outside => parity == Parity::Even,
        }
    }

    /// The name used on the command line.
    #[must_use]
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            KeepPolicy::Inside => "inside",
            KeepPolicy::Outside => "outside",
        }
    }
}

impl Default for KeepPolicy {
    #[inline]
    fn default() -> KeepPolicy {
        KeepPolicy::Inside
    }
}

impl FromStr for KeepPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<KeepPolicy> {
        let name = s.trim();
        if name.eq_ignore_ascii_case("inside") {
            Ok(KeepPolicy::Inside)
        } else if name.eq_ignore_ascii_case("outside") {
            Ok(KeepPolicy::Outside)
        } else {
            Err(Error::InvalidKeepPolicy(s.to_owned()))
        }
    }
}

impl fmt::Display for KeepPolicy {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings for one filtering pass.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Options {
    /// Which side of the boundary survives.
    pub keep: KeepPolicy,
    /// Tolerance for every approximate comparison, from closure checks to the root solver.
    pub tolerance: Tolerance,
}

impl Options {
    /// Default options: keep the inside, with a tolerance of `1e-6`.
    #[must_use]
    #[inline]
    pub fn new() -> Options {
        Options::default()
    }

    /// Set the keep policy.
    #[must_use]
    #[inline]
    pub fn keep(mut self, keep: KeepPolicy) -> Options {
        self.keep = keep;
        self
    }

    /// Set the tolerance.
    #[must_use]
    #[inline]
    pub fn tolerance(mut self, tolerance: Tolerance) -> Options {
        self.tolerance = tolerance;
        self
    }

    /// Set the tolerance from a raw value, rejecting values that are negative, infinite or `NaN`.
    #[inline]
    pub fn epsilon(self, epsilon: f64) -> Result<Options> {
        let tolerance = Tolerance::new(epsilon).ok_or(Error::InvalidTolerance(epsilon))?;
        Ok(self.tolerance(tolerance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_policies() {
        assert_eq!("inside".parse::<KeepPolicy>(), Ok(KeepPolicy::Inside));
        assert_eq!(" Outside ".parse::<KeepPolicy>(), Ok(KeepPolicy::Outside));
        assert_eq!(KeepPolicy::Outside.to_string(), "outside");
    }

    #[test]
    fn rejects_unknown_policy() {
        let err = "both".parse::<KeepPolicy>().unwrap_err();
        assert_eq!(err, Error::InvalidKeepPolicy("both".to_owned()));
        assert!(err.is_configuration());
    }

    #[test]
    fn policy_selects_parity() {
        assert!(KeepPolicy::Inside.keeps(Parity::Odd));
        assert!(!KeepPolicy::Inside.keeps(Parity::Even));
        assert!(KeepPolicy::Outside.keeps(Parity::Even));
        assert!(!KeepPolicy::Outside.keeps(Parity::Odd));
    }

    #[test]
    fn options_validate_epsilon() {
        let options = Options::new().keep(KeepPolicy::Outside).epsilon(1e-3).unwrap();
        assert_eq!(options.keep, KeepPolicy::Outside);
        assert_eq!(options.tolerance.into_inner(), 1e-3);

        assert!(Options::new()
            .epsilon(f64::NAN)
            .unwrap_err()
            .is_configuration());
        assert_eq!(
            Options::new().epsilon(-1.0),
            Err(Error::InvalidTolerance(-1.0))
        );
    }
}
