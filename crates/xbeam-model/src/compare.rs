//! Field-level comparison helpers shared by both beam variants.
//!
//! Each helper logs the failing field at `debug` level so convergence loops
//! can tell which quantity kept two beams apart.

use nalgebra::Vector3;
use tracing::debug;
use xbeam_core::{angle_safe, CoreTolerances, Probe, STRICT_EPSILON};

/// Absolute difference of two scalars within `tolerance`.
pub(crate) fn scalar(field: &'static str, lhs: f64, rhs: f64, tolerance: f64) -> bool {
    let delta = (lhs - rhs).abs();
    let passed = delta <= tolerance;
    if !passed {
        debug!(field, lhs, rhs, delta, tolerance, "beam field outside tolerance");
    }
    passed
}

/// Angle between two direction-like vectors within `tolerance` radians.
pub(crate) fn angular(
    field: &'static str,
    lhs: &Vector3<f64>,
    rhs: &Vector3<f64>,
    tolerance: f64,
) -> bool {
    let angle = angle_safe(lhs, rhs).abs();
    let passed = angle <= tolerance;
    if !passed {
        debug!(field, angle, tolerance, "beam direction outside tolerance");
    }
    passed
}

pub(crate) fn probe(lhs: Probe, rhs: Probe) -> bool {
    let passed = lhs == rhs;
    if !passed {
        debug!(lhs = lhs.name(), rhs = rhs.name(), "beam probe mismatch");
    }
    passed
}

fn l1_distance(lhs: &Vector3<f64>, rhs: &Vector3<f64>) -> f64 {
    lhs.iter().zip(rhs.iter()).map(|(a, b)| (a - b).abs()).sum()
}

fn counts_match(lhs: &[Vector3<f64>], rhs: &[Vector3<f64>]) -> bool {
    let passed = lhs.len() == rhs.len();
    if !passed {
        debug!(lhs = lhs.len(), rhs = rhs.len(), "scan point count mismatch");
    }
    passed
}

/// Strict scan-point check: skipped when neither side is scan varying,
/// otherwise counts must match and each pair must agree within
/// [`STRICT_EPSILON`] summed over the three components.
pub(crate) fn scan_points_equal(lhs: &[Vector3<f64>], rhs: &[Vector3<f64>]) -> bool {
    if lhs.is_empty() && rhs.is_empty() {
        return true;
    }
    if !counts_match(lhs, rhs) {
        return false;
    }
    lhs.iter().zip(rhs).enumerate().all(|(index, (a, b))| {
        let distance = l1_distance(a, b);
        let passed = distance <= STRICT_EPSILON;
        if !passed {
            debug!(index, distance, "scan point wave vector mismatch");
        }
        passed
    })
}

/// Tolerance scan-point check on the wavelength and direction implied by each
/// per-point wave vector.
pub(crate) fn scan_points_similar(
    lhs: &[Vector3<f64>],
    rhs: &[Vector3<f64>],
    tolerances: &CoreTolerances,
) -> bool {
    if !counts_match(lhs, rhs) {
        return false;
    }
    lhs.iter().zip(rhs).all(|(a, b)| {
        angular("scan_point_direction", a, b, tolerances.direction)
            && scalar(
                "scan_point_wavelength",
                1.0 / a.norm(),
                1.0 / b.norm(),
                tolerances.wavelength,
            )
    })
}
