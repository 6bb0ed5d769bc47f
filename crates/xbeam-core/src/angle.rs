//! Angle and direction helpers shared by every beam comparison and setter.

use nalgebra::Vector3;
use tracing::warn;

use crate::errors::BeamError;

/// Returns the angle in radians between two vectors.
///
/// Both inputs are normalised and the cosine is clamped to `[-1, 1]` before
/// `acos`, so parallel and antiparallel vectors never leave the domain through
/// round-off. Identical directions return exactly 0 even when the normalised
/// dot product rounds below 1. The result is symmetric in its arguments. A
/// zero-length input yields NaN, which fails every tolerance comparison.
pub fn angle_safe(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    let (a, b) = (a.normalize(), b.normalize());
    if a == b {
        return 0.0;
    }
    a.dot(&b).clamp(-1.0, 1.0).acos()
}

/// Returns the Euclidean length of `vector`, rejecting zero and non-finite lengths.
pub fn nonzero_length(vector: &Vector3<f64>, field: &str) -> Result<f64, BeamError> {
    let length = vector.norm();
    if !length.is_finite() || length <= 0.0 {
        warn!(field, length, "rejected direction-like vector");
        return Err(
            BeamError::invalid_argument("zero-length-vector", "vector must have a positive length")
                .with_context("field", field)
                .with_context("length", length),
        );
    }
    Ok(length)
}

/// Normalises a direction-like vector, the rule applied by every direction setter.
pub fn unit_direction(vector: &Vector3<f64>, field: &str) -> Result<Vector3<f64>, BeamError> {
    let length = nonzero_length(vector, field)?;
    Ok(vector / length)
}
