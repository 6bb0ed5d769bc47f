use std::fmt;

use nalgebra::Vector3;
use xbeam_core::errors::BeamError;
use xbeam_core::{BeamModel, CoreTolerances, Probe, SimilarityTolerances};

use crate::common::BeamCore;
use crate::display;
use crate::properties::{BeamProperties, MONOCHROMATIC_POLARIZATION_FRACTION};

/// Beam without a fixed wavelength.
///
/// Wavelength, wave vector and scan-point operations have no meaning here and
/// fail with [`BeamError::Unsupported`]. The unit wave vector is a pure
/// direction and stays available.
#[derive(Debug, Clone)]
pub struct PolychromaticBeam {
    core: BeamCore,
}

fn no_wavelength() -> BeamError {
    BeamError::unsupported(
        "no-fixed-wavelength",
        "PolychromaticBeam has no fixed wavelength",
    )
}

fn no_s0() -> BeamError {
    BeamError::unsupported("no-fixed-s0", "PolychromaticBeam has no fixed s0")
}

impl PolychromaticBeam {
    /// Beam along +z with the polychromatic defaults.
    pub fn new() -> Self {
        Self {
            core: BeamCore::along_z(BeamProperties::polychromatic()),
        }
    }

    /// Beam along `direction` (sample to source) with the polychromatic defaults.
    pub fn with_direction(direction: Vector3<f64>) -> Result<Self, BeamError> {
        Self::with_properties(direction, BeamProperties::polychromatic())
    }

    /// Beam along `direction` at the given sample to source distance (mm).
    ///
    /// Unlike the other profiles this one uses a polarization fraction of
    /// 0.999.
    pub fn with_distance(direction: Vector3<f64>, distance: f64) -> Result<Self, BeamError> {
        let properties = BeamProperties {
            polarization_fraction: MONOCHROMATIC_POLARIZATION_FRACTION,
            ..BeamProperties::polychromatic()
        }
        .with_sample_to_source_distance(distance);
        Self::with_properties(direction, properties)
    }

    /// Beam along `direction` with divergence statistics.
    pub fn with_divergence(
        direction: Vector3<f64>,
        divergence: f64,
        sigma_divergence: f64,
    ) -> Result<Self, BeamError> {
        let properties =
            BeamProperties::polychromatic().with_divergence(divergence, sigma_divergence);
        Self::with_properties(direction, properties)
    }

    /// Beam with every field explicit.
    pub fn with_properties(
        direction: Vector3<f64>,
        properties: BeamProperties,
    ) -> Result<Self, BeamError> {
        Ok(Self {
            core: BeamCore::new(direction, properties)?,
        })
    }

    /// Returns every field apart from the direction.
    pub fn properties(&self) -> BeamProperties {
        self.core.properties()
    }
}

impl Default for PolychromaticBeam {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for PolychromaticBeam {
    fn eq(&self, other: &Self) -> bool {
        self.core.strictly_equal(&other.core)
    }
}

impl fmt::Display for PolychromaticBeam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::write_beam(f, &self.core, None)
    }
}

impl BeamModel for PolychromaticBeam {
    fn sample_to_source_direction(&self) -> Vector3<f64> {
        self.core.direction
    }

    fn set_direction(&mut self, direction: Vector3<f64>) -> Result<(), BeamError> {
        self.core.set_direction(direction)
    }

    fn wavelength(&self) -> Result<f64, BeamError> {
        Err(no_wavelength())
    }

    fn set_wavelength(&mut self, _wavelength: f64) -> Result<(), BeamError> {
        Err(no_wavelength())
    }

    fn s0(&self) -> Result<Vector3<f64>, BeamError> {
        Err(no_s0())
    }

    fn set_s0(&mut self, _s0: Vector3<f64>) -> Result<(), BeamError> {
        Err(no_s0())
    }

    fn unit_s0(&self) -> Vector3<f64> {
        -self.core.direction
    }

    fn set_unit_s0(&mut self, unit_s0: Vector3<f64>) -> Result<(), BeamError> {
        self.core.set_unit_s0(unit_s0)
    }

    fn divergence(&self) -> f64 {
        self.core.divergence
    }

    fn set_divergence(&mut self, divergence: f64) {
        self.core.divergence = divergence;
    }

    fn sigma_divergence(&self) -> f64 {
        self.core.sigma_divergence
    }

    fn set_sigma_divergence(&mut self, sigma_divergence: f64) {
        self.core.sigma_divergence = sigma_divergence;
    }

    fn polarization_normal(&self) -> Vector3<f64> {
        self.core.polarization_normal
    }

    fn set_polarization_normal(
        &mut self,
        polarization_normal: Vector3<f64>,
    ) -> Result<(), BeamError> {
        self.core.set_polarization_normal(polarization_normal)
    }

    fn polarization_fraction(&self) -> f64 {
        self.core.polarization_fraction
    }

    fn set_polarization_fraction(&mut self, polarization_fraction: f64) {
        self.core.polarization_fraction = polarization_fraction;
    }

    fn flux(&self) -> f64 {
        self.core.flux
    }

    fn set_flux(&mut self, flux: f64) {
        self.core.flux = flux;
    }

    fn transmission(&self) -> f64 {
        self.core.transmission
    }

    fn set_transmission(&mut self, transmission: f64) {
        self.core.transmission = transmission;
    }

    fn probe(&self) -> Probe {
        self.core.probe
    }

    fn set_probe(&mut self, probe: Probe) {
        self.core.probe = probe;
    }

    fn sample_to_source_distance(&self) -> f64 {
        self.core.sample_to_source_distance
    }

    fn set_sample_to_source_distance(&mut self, distance: f64) -> Result<(), BeamError> {
        self.core.set_sample_to_source_distance(distance)
    }

    fn num_scan_points(&self) -> Result<usize, BeamError> {
        Err(no_s0())
    }

    fn s0_at_scan_points(&self) -> Result<&[Vector3<f64>], BeamError> {
        Err(no_s0())
    }

    fn set_s0_at_scan_points(&mut self, _s0: &[Vector3<f64>]) -> Result<(), BeamError> {
        Err(no_s0())
    }

    fn s0_at_scan_point(&self, _index: usize) -> Result<Vector3<f64>, BeamError> {
        Err(no_s0())
    }

    fn reset_scan_points(&mut self) -> Result<(), BeamError> {
        Err(no_s0())
    }

    fn rotate_around_origin(&mut self, axis: Vector3<f64>, angle: f64) -> Result<(), BeamError> {
        self.core.rotate_around_origin(axis, angle)
    }

    /// The wavelength tolerance is ignored; secondary fields use their 1e-6 defaults.
    fn is_similar_to(&self, other: &Self, tolerances: &CoreTolerances) -> bool {
        self.is_similar_to_with(other, &SimilarityTolerances::from_core(*tolerances))
    }

    fn is_similar_to_with(&self, other: &Self, tolerances: &SimilarityTolerances) -> bool {
        self.core.similar_core(&other.core, &tolerances.core)
            && self.core.similar_secondary(&other.core, tolerances)
    }
}
