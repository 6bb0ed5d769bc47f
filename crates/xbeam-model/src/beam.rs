use std::fmt;

use nalgebra::Vector3;
use tracing::debug;
use xbeam_core::errors::BeamError;
use xbeam_core::{BeamModel, CoreTolerances, Probe, SimilarityTolerances};

use crate::monochromatic::MonochromaticBeam;
use crate::polychromatic::PolychromaticBeam;

/// A beam of either variant.
///
/// Beams of different variants are never equal and never similar.
#[derive(Debug, Clone)]
pub enum Beam {
    /// Fixed wavelength beam.
    Monochromatic(MonochromaticBeam),
    /// Beam without a fixed wavelength.
    Polychromatic(PolychromaticBeam),
}

macro_rules! delegate {
    ($self:ident, $beam:ident => $body:expr) => {
        match $self {
            Beam::Monochromatic($beam) => $body,
            Beam::Polychromatic($beam) => $body,
        }
    };
}

impl Beam {
    /// Returns whether this beam has no fixed wavelength.
    pub fn is_polychromatic(&self) -> bool {
        matches!(self, Beam::Polychromatic(_))
    }

    /// Returns the monochromatic beam, if that is the variant.
    pub fn as_monochromatic(&self) -> Option<&MonochromaticBeam> {
        match self {
            Beam::Monochromatic(beam) => Some(beam),
            Beam::Polychromatic(_) => None,
        }
    }

    /// Returns the polychromatic beam, if that is the variant.
    pub fn as_polychromatic(&self) -> Option<&PolychromaticBeam> {
        match self {
            Beam::Polychromatic(beam) => Some(beam),
            Beam::Monochromatic(_) => None,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Beam::Monochromatic(_) => "monochromatic",
            Beam::Polychromatic(_) => "polychromatic",
        }
    }

    fn log_variant_mismatch(&self, other: &Self) {
        debug!(lhs = self.kind(), rhs = other.kind(), "beam variant mismatch");
    }
}

impl Default for Beam {
    fn default() -> Self {
        Beam::Monochromatic(MonochromaticBeam::default())
    }
}

impl From<MonochromaticBeam> for Beam {
    fn from(beam: MonochromaticBeam) -> Self {
        Beam::Monochromatic(beam)
    }
}

impl From<PolychromaticBeam> for Beam {
    fn from(beam: PolychromaticBeam) -> Self {
        Beam::Polychromatic(beam)
    }
}

impl PartialEq for Beam {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Beam::Monochromatic(lhs), Beam::Monochromatic(rhs)) => lhs == rhs,
            (Beam::Polychromatic(lhs), Beam::Polychromatic(rhs)) => lhs == rhs,
            _ => {
                self.log_variant_mismatch(other);
                false
            }
        }
    }
}

impl fmt::Display for Beam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        delegate!(self, beam => fmt::Display::fmt(beam, f))
    }
}

impl BeamModel for Beam {
    fn sample_to_source_direction(&self) -> Vector3<f64> {
        delegate!(self, beam => beam.sample_to_source_direction())
    }

    fn set_direction(&mut self, direction: Vector3<f64>) -> Result<(), BeamError> {
        delegate!(self, beam => beam.set_direction(direction))
    }

    fn wavelength(&self) -> Result<f64, BeamError> {
        delegate!(self, beam => beam.wavelength())
    }

    fn set_wavelength(&mut self, wavelength: f64) -> Result<(), BeamError> {
        delegate!(self, beam => beam.set_wavelength(wavelength))
    }

    fn s0(&self) -> Result<Vector3<f64>, BeamError> {
        delegate!(self, beam => beam.s0())
    }

    fn set_s0(&mut self, s0: Vector3<f64>) -> Result<(), BeamError> {
        delegate!(self, beam => beam.set_s0(s0))
    }

    fn unit_s0(&self) -> Vector3<f64> {
        delegate!(self, beam => beam.unit_s0())
    }

    fn set_unit_s0(&mut self, unit_s0: Vector3<f64>) -> Result<(), BeamError> {
        delegate!(self, beam => beam.set_unit_s0(unit_s0))
    }

    fn divergence(&self) -> f64 {
        delegate!(self, beam => beam.divergence())
    }

    fn set_divergence(&mut self, divergence: f64) {
        delegate!(self, beam => beam.set_divergence(divergence))
    }

    fn sigma_divergence(&self) -> f64 {
        delegate!(self, beam => beam.sigma_divergence())
    }

    fn set_sigma_divergence(&mut self, sigma_divergence: f64) {
        delegate!(self, beam => beam.set_sigma_divergence(sigma_divergence))
    }

    fn polarization_normal(&self) -> Vector3<f64> {
        delegate!(self, beam => beam.polarization_normal())
    }

    fn set_polarization_normal(
        &mut self,
        polarization_normal: Vector3<f64>,
    ) -> Result<(), BeamError> {
        delegate!(self, beam => beam.set_polarization_normal(polarization_normal))
    }

    fn polarization_fraction(&self) -> f64 {
        delegate!(self, beam => beam.polarization_fraction())
    }

    fn set_polarization_fraction(&mut self, polarization_fraction: f64) {
        delegate!(self, beam => beam.set_polarization_fraction(polarization_fraction))
    }

    fn flux(&self) -> f64 {
        delegate!(self, beam => beam.flux())
    }

    fn set_flux(&mut self, flux: f64) {
        delegate!(self, beam => beam.set_flux(flux))
    }

    fn transmission(&self) -> f64 {
        delegate!(self, beam => beam.transmission())
    }

    fn set_transmission(&mut self, transmission: f64) {
        delegate!(self, beam => beam.set_transmission(transmission))
    }

    fn probe(&self) -> Probe {
        delegate!(self, beam => beam.probe())
    }

    fn set_probe(&mut self, probe: Probe) {
        delegate!(self, beam => beam.set_probe(probe))
    }

    fn sample_to_source_distance(&self) -> f64 {
        delegate!(self, beam => beam.sample_to_source_distance())
    }

    fn set_sample_to_source_distance(&mut self, distance: f64) -> Result<(), BeamError> {
        delegate!(self, beam => beam.set_sample_to_source_distance(distance))
    }

    fn num_scan_points(&self) -> Result<usize, BeamError> {
        delegate!(self, beam => beam.num_scan_points())
    }

    fn s0_at_scan_points(&self) -> Result<&[Vector3<f64>], BeamError> {
        delegate!(self, beam => beam.s0_at_scan_points())
    }

    fn set_s0_at_scan_points(&mut self, s0: &[Vector3<f64>]) -> Result<(), BeamError> {
        delegate!(self, beam => beam.set_s0_at_scan_points(s0))
    }

    fn s0_at_scan_point(&self, index: usize) -> Result<Vector3<f64>, BeamError> {
        delegate!(self, beam => beam.s0_at_scan_point(index))
    }

    fn reset_scan_points(&mut self) -> Result<(), BeamError> {
        delegate!(self, beam => beam.reset_scan_points())
    }

    fn rotate_around_origin(&mut self, axis: Vector3<f64>, angle: f64) -> Result<(), BeamError> {
        delegate!(self, beam => beam.rotate_around_origin(axis, angle))
    }

    fn is_similar_to(&self, other: &Self, tolerances: &CoreTolerances) -> bool {
        match (self, other) {
            (Beam::Monochromatic(lhs), Beam::Monochromatic(rhs)) => {
                lhs.is_similar_to(rhs, tolerances)
            }
            (Beam::Polychromatic(lhs), Beam::Polychromatic(rhs)) => {
                lhs.is_similar_to(rhs, tolerances)
            }
            _ => {
                self.log_variant_mismatch(other);
                false
            }
        }
    }

    fn is_similar_to_with(&self, other: &Self, tolerances: &SimilarityTolerances) -> bool {
        match (self, other) {
            (Beam::Monochromatic(lhs), Beam::Monochromatic(rhs)) => {
                lhs.is_similar_to_with(rhs, tolerances)
            }
            (Beam::Polychromatic(lhs), Beam::Polychromatic(rhs)) => {
                lhs.is_similar_to_with(rhs, tolerances)
            }
            _ => {
                self.log_variant_mismatch(other);
                false
            }
        }
    }
}
