//! Error types.

use core::fmt;

/// Result type with the `btc-dsa` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Scalar an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Component {
    /// Signature `r` value.
    R,

    /// Signature `s` value.
    S,

    /// Ephemeral key `k`.
    Nonce,

    /// Private key `d`.
    PrivateKey,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Component::R => "r",
            Component::S => "s",
            Component::Nonce => "ephemeral key",
            Component::PrivateKey => "private key",
        })
    }
}

/// ECDSA errors.
///
/// Strict entry points report the failing step; the boolean verifiers
/// collapse every variant into `false`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Scalar outside `[1, n-1]`.
    InvalidRange(Component),

    /// Point off the curve, or the point at infinity where a finite point
    /// is required.
    InvalidPoint,

    /// Digest length differs from the hash function's output size.
    DigestSizeMismatch {
        /// Output size of the hash function.
        expected: usize,

        /// Length of the supplied digest.
        actual: usize,
    },

    /// Signing produced `r = 0` or `s = 0`.
    SignatureFailed(Component),

    /// Signature does not match the message and public key.
    VerificationFailed,

    /// Malformed byte encoding.
    InvalidEncoding(&'static str),

    /// Malformed ASN.1 DER signature.
    Der(der::Error),

    /// Curve arithmetic failure.
    Arithmetic(weierstrass::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidRange(c) => write!(f, "{c} not in [1, n-1]"),
            Error::InvalidPoint => f.write_str("invalid curve point"),
            Error::DigestSizeMismatch { expected, actual } => write!(
                f,
                "hash function digest size ({expected}) does not match digest length ({actual})"
            ),
            Error::SignatureFailed(c) => write!(f, "{c} = 0, failed to sign"),
            Error::VerificationFailed => f.write_str("signature verification failed"),
            Error::InvalidEncoding(msg) => write!(f, "invalid encoding: {msg}"),
            Error::Der(err) => write!(f, "ASN.1 DER: {err}"),
            Error::Arithmetic(err) => write!(f, "curve arithmetic: {err}"),
        }
    }
}

impl From<weierstrass::Error> for Error {
    fn from(err: weierstrass::Error) -> Error {
        match err {
            weierstrass::Error::PointNotOnCurve
            | weierstrass::Error::IdentityPoint
            | weierstrass::Error::InvalidX => Error::InvalidPoint,
            weierstrass::Error::InvalidEncoding(msg) => Error::InvalidEncoding(msg),
            other => Error::Arithmetic(other),
        }
    }
}

impl From<der::Error> for Error {
    fn from(err: der::Error) -> Error {
        Error::Der(err)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Arithmetic(err) => Some(err),
            Error::Der(err) => Some(err),
            _ => None,
        }
    }
}
