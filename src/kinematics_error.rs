//! Errors of the exponential map, forward kinematics and pose comparison

use std::error::Error;
use std::fmt;

/// Failures are always caused by the input data: the same call with the same
/// arguments fails the same way, so there is nothing to retry.
#[derive(Debug, Clone, PartialEq)]
pub enum KinematicsError {
    /// The number of screw axes differs from the number of joint values.
    DimensionMismatch { screws: usize, joints: usize },

    /// The angular part of the twist is not zero but also does not have unit length.
    UnnormalizedAxis { norm: f64 },

    /// The twist cannot describe a motion (zero twist with non-zero angle, non-finite values).
    InvalidTwist(String),

    /// The comparator only accepts 4 x 4 matrices.
    ShapeMismatch { rows: usize, cols: usize },

    /// Comparison tolerance must be a non-negative number.
    InvalidTolerance(f64),

    /// The error above occurred while processing the given joint (zero based).
    Joint { index: usize, source: Box<KinematicsError> },
}

impl KinematicsError {
    /// The underlying error, without the joint it was reported for.
    pub fn root_cause(&self) -> &KinematicsError {
        match self {
            KinematicsError::Joint { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

impl fmt::Display for KinematicsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            KinematicsError::DimensionMismatch { screws, joints } =>
                write!(f, "Dimension mismatch: {} screw axes but {} joint values", screws, joints),
            KinematicsError::UnnormalizedAxis { norm } =>
                write!(f, "Unnormalized axis: angular part has norm {}, expected 0 or 1", norm),
            KinematicsError::InvalidTwist(msg) =>
                write!(f, "Invalid twist: {}", msg),
            KinematicsError::ShapeMismatch { rows, cols } =>
                write!(f, "Shape mismatch: expected 4x4 transform, found {}x{}", rows, cols),
            KinematicsError::InvalidTolerance(tolerance) =>
                write!(f, "Invalid tolerance: {} (must be non-negative)", tolerance),
            KinematicsError::Joint { index, source } =>
                write!(f, "Joint {}: {}", index + 1, source),
        }
    }
}

impl Error for KinematicsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            KinematicsError::Joint { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}
