//! Error types.

use core::fmt;

/// Errors raised while constructing curves or parsing curve identifiers.
///
/// Curve operations themselves never fail: every variant other than
/// [`Error::UnknownCurve`] describes a corrupted domain parameter and is
/// only ever observed at construction time.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// A hex-encoded domain parameter could not be parsed.
    MalformedConstant {
        /// Name of the curve the constant belongs to.
        curve: &'static str,
    },

    /// The isomorphism scalar has no inverse modulo the field prime.
    NotInvertible {
        /// Name of the curve the scalar belongs to.
        curve: &'static str,
    },

    /// The engine only supports curves with `a = -3`.
    UnsupportedCoefficient {
        /// Name of the rejected curve.
        curve: &'static str,
    },

    /// The generator does not satisfy the curve equation.
    GeneratorNotOnCurve {
        /// Name of the rejected curve.
        curve: &'static str,
    },

    /// The isomorphism does not map the regular base point onto the twisted
    /// base point.
    BasePointMismatch {
        /// Name of the rejected curve.
        curve: &'static str,
    },

    /// The curve name is not one of the RFC 5639 curves.
    UnknownCurve,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MalformedConstant { curve } => {
                write!(f, "{curve}: malformed domain parameter")
            }
            Error::NotInvertible { curve } => {
                write!(f, "{curve}: isomorphism scalar is not invertible")
            }
            Error::UnsupportedCoefficient { curve } => {
                write!(f, "{curve}: curve coefficient a must be -3")
            }
            Error::GeneratorNotOnCurve { curve } => {
                write!(f, "{curve}: generator is not on the curve")
            }
            Error::BasePointMismatch { curve } => {
                write!(f, "{curve}: base point does not map onto the twisted base point")
            }
            Error::UnknownCurve => write!(f, "unknown curve name"),
        }
    }
}

impl core::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
