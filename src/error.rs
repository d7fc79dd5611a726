// MIT/Apache2 License

use shapecut_geometry::Degenerate;
use std::fmt;

/// Sum error type for shapecut operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The keep policy was neither `inside` nor `outside`.
    InvalidKeepPolicy(String),
    /// The tolerance was negative, infinite or not a number.
    InvalidTolerance(f64),
    /// The geometry cannot be classified.
    Degenerate(Degenerate),
    /// Malformed SVG path data, with a description of the problem.
    PathData(String),
}

impl Error {
    /// Whether this error comes from configuration rather than from the geometry.
    #[must_use]
    #[inline]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::InvalidKeepPolicy(_) | Self::InvalidTolerance(_))
    }

    #[inline]
    pub(crate) fn path_data(msg: &str) -> Self {
        Self::PathData(msg.to_owned())
    }
}

impl std::error::Error for Error {
    #[inline]
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Degenerate(d) => Some(d),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKeepPolicy(s) => write!(
                f,
                "Invalid keep policy \"{}\", expected \"inside\" or \"outside\"",
                s
            ),
            Self::InvalidTolerance(t) => write!(f, "Invalid tolerance {}", t),
            Self::Degenerate(d) => fmt::Display::fmt(d, f),
            Self::PathData(msg) => write!(f, "Malformed path data: {}", msg),
        }
    }
}

impl From<Degenerate> for Error {
    #[inline]
    fn from(d: Degenerate) -> Self {
        Self::Degenerate(d)
    }
}

impl From<svgtypes::Error> for Error {
    #[inline]
    fn from(err: svgtypes::Error) -> Self {
        Self::PathData(err.to_string())
    }
}

/// Convenience result type.
pub type Result<T = ()> = std::result::Result<T, Error>;
