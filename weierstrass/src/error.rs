//! Error types.

use core::fmt;

/// Result type with the `weierstrass` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Curve arithmetic errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// Domain parameters do not describe a usable curve.
    InvalidParameters(&'static str),

    /// Point does not satisfy the curve equation.
    PointNotOnCurve,

    /// Point at infinity where a finite point is required.
    IdentityPoint,

    /// Value is not the x-coordinate of a curve point.
    InvalidX,

    /// Value has no inverse modulo the given modulus.
    NotInvertible,

    /// Malformed byte encoding.
    InvalidEncoding(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidParameters(msg) => write!(f, "invalid curve parameters: {msg}"),
            Error::PointNotOnCurve => f.write_str("point not on curve"),
            Error::IdentityPoint => f.write_str("point at infinity"),
            Error::InvalidX => f.write_str("invalid x-coordinate"),
            Error::NotInvertible => f.write_str("value not invertible"),
            Error::InvalidEncoding(msg) => write!(f, "invalid encoding: {msg}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
