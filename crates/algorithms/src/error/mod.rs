//! Error handling for the key-agreement primitives

use std::borrow::Cow;
use std::fmt;

/// The error type for MQV key-agreement operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error.
    Parameter {
        /// Name of the invalid parameter.
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid.
        reason: Cow<'static, str>,
    },

    /// Length validation error.
    Length {
        /// Context where the length error occurred.
        context: &'static str,
        /// Expected length in bytes.
        expected: usize,
        /// Actual length in bytes.
        actual: usize,
    },

    /// The random byte source failed or returned short.
    Random {
        /// Operation that needed randomness.
        context: &'static str,
        /// Error reported by the source.
        details: String,
    },

    /// A private key is longer than the curve order's byte length.
    InvalidPrivateKey {
        /// Operation that rejected the key.
        context: &'static str,
    },

    /// The curve is not in the supported set.
    UnsupportedCurve {
        /// Name of the offending curve.
        name: Cow<'static, str>,
    },

    /// A computation produced the point at infinity where a proper point
    /// was required, indicating a malformed peer key.
    PointAtInfinity {
        /// Operation whose result degenerated.
        operation: &'static str,
    },
}

impl Error {
    /// Shorthand to create a `Parameter` error.
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for key-agreement operations.
pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::Random { context, details } => {
                write!(f, "random generation failed during {}: {}", context, details)
            }
            Error::InvalidPrivateKey { context } => {
                write!(f, "invalid private key supplied to {}", context)
            }
            Error::UnsupportedCurve { name } => {
                write!(f, "failed to determine cofactor of curve {:?}", name)
            }
            Error::PointAtInfinity { operation } => {
                write!(f, "{} produced the point at infinity", operation)
            }
        }
    }
}

impl std::error::Error for Error {}

pub mod validate;
