use std::fmt;

use nalgebra::Vector3;
use tracing::debug;
use xbeam_core::errors::{BeamError, ErrorInfo};
use xbeam_core::{
    nonzero_length, BeamModel, CoreTolerances, Probe, SimilarityTolerances, STRICT_EPSILON,
};

use crate::common::BeamCore;
use crate::compare;
use crate::display;
use crate::properties::BeamProperties;

/// Beam with a single fixed wavelength.
///
/// The wave vector is derived as `s0 = -direction / wavelength`; setting it
/// through [`BeamModel::set_s0`] updates both direction and wavelength, while
/// [`BeamModel::set_unit_s0`] only updates the direction. Direction-only
/// recalibration must not silently change the wavelength.
///
/// An optional scan-varying model stores one wave vector per scan point. An
/// empty list means the beam is static across the scan.
#[derive(Debug, Clone)]
pub struct MonochromaticBeam {
    core: BeamCore,
    wavelength: f64,
    s0_at_scan_points: Vec<Vector3<f64>>,
}

impl MonochromaticBeam {
    /// Beam along +z with wavelength 0 and default properties.
    pub fn new() -> Self {
        Self::along_z(0.0)
    }

    pub(crate) fn along_z(wavelength: f64) -> Self {
        Self {
            core: BeamCore::along_z(BeamProperties::default()),
            wavelength,
            s0_at_scan_points: Vec::new(),
        }
    }

    /// Beam defined by its wave vector.
    pub fn from_s0(s0: Vector3<f64>) -> Result<Self, BeamError> {
        Self::from_s0_with_divergence(s0, 0.0, 0.0)
    }

    /// Beam along `direction` (sample to source) with the given wavelength.
    pub fn with_wavelength(direction: Vector3<f64>, wavelength: f64) -> Result<Self, BeamError> {
        Self::with_properties(direction, wavelength, BeamProperties::default())
    }

    /// Beam defined by its wave vector and divergence statistics.
    pub fn from_s0_with_divergence(
        s0: Vector3<f64>,
        divergence: f64,
        sigma_divergence: f64,
    ) -> Result<Self, BeamError> {
        let length = nonzero_length(&s0, "s0")?;
        let properties = BeamProperties::default().with_divergence(divergence, sigma_divergence);
        Self::with_properties(-s0 / length, 1.0 / length, properties)
    }

    /// Beam along `direction` with wavelength and divergence statistics.
    pub fn with_divergence(
        direction: Vector3<f64>,
        wavelength: f64,
        divergence: f64,
        sigma_divergence: f64,
    ) -> Result<Self, BeamError> {
        let properties = BeamProperties::default().with_divergence(divergence, sigma_divergence);
        Self::with_properties(direction, wavelength, properties)
    }

    /// Beam with every field explicit.
    pub fn with_properties(
        direction: Vector3<f64>,
        wavelength: f64,
        properties: BeamProperties,
    ) -> Result<Self, BeamError> {
        Ok(Self {
            core: BeamCore::new(direction, properties)?,
            wavelength,
            s0_at_scan_points: Vec::new(),
        })
    }

    /// Returns every field apart from direction and wavelength.
    pub fn properties(&self) -> BeamProperties {
        self.core.properties()
    }

    /// Returns whether a scan-varying model is stored.
    pub fn is_scan_varying(&self) -> bool {
        !self.s0_at_scan_points.is_empty()
    }
}

impl Default for MonochromaticBeam {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for MonochromaticBeam {
    fn eq(&self, other: &Self) -> bool {
        compare::scan_points_equal(&self.s0_at_scan_points, &other.s0_at_scan_points)
            && self.core.strictly_equal(&other.core)
            && compare::scalar("wavelength", self.wavelength, other.wavelength, STRICT_EPSILON)
    }
}

impl fmt::Display for MonochromaticBeam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::write_beam(f, &self.core, Some(self.wavelength))
    }
}

impl BeamModel for MonochromaticBeam {
    fn sample_to_source_direction(&self) -> Vector3<f64> {
        self.core.direction
    }

    fn set_direction(&mut self, direction: Vector3<f64>) -> Result<(), BeamError> {
        self.core.set_direction(direction)
    }

    fn wavelength(&self) -> Result<f64, BeamError> {
        Ok(self.wavelength)
    }

    fn set_wavelength(&mut self, wavelength: f64) -> Result<(), BeamError> {
        self.wavelength = wavelength;
        Ok(())
    }

    fn s0(&self) -> Result<Vector3<f64>, BeamError> {
        if self.wavelength == 0.0 {
            return Err(BeamError::InvalidState(
                ErrorInfo::new("zero-wavelength", "wave vector is undefined for wavelength 0")
                    .with_hint("set a wavelength or a wave vector first"),
            ));
        }
        Ok(-self.core.direction / self.wavelength)
    }

    fn set_s0(&mut self, s0: Vector3<f64>) -> Result<(), BeamError> {
        let length = nonzero_length(&s0, "s0")?;
        self.core.direction = -s0 / length;
        self.wavelength = 1.0 / length;
        Ok(())
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
        Ok(self.s0_at_scan_points.len())
    }

    fn s0_at_scan_points(&self) -> Result<&[Vector3<f64>], BeamError> {
        Ok(&self.s0_at_scan_points)
    }

    fn set_s0_at_scan_points(&mut self, s0: &[Vector3<f64>]) -> Result<(), BeamError> {
        debug!(count = s0.len(), "replacing scan point wave vectors");
        self.s0_at_scan_points = s0.to_vec();
        Ok(())
    }

    fn s0_at_scan_point(&self, index: usize) -> Result<Vector3<f64>, BeamError> {
        self.s0_at_scan_points.get(index).copied().ok_or_else(|| {
            BeamError::OutOfRange(ErrorInfo::new(
                "scan-point-index",
                "scan point index out of range",
            ))
            .with_context("index", index)
            .with_context("count", self.s0_at_scan_points.len())
        })
    }

    fn reset_scan_points(&mut self) -> Result<(), BeamError> {
        debug!(
            count = self.s0_at_scan_points.len(),
            "clearing scan point wave vectors"
        );
        self.s0_at_scan_points.clear();
        Ok(())
    }

    fn rotate_around_origin(&mut self, axis: Vector3<f64>, angle: f64) -> Result<(), BeamError> {
        self.core.rotate_around_origin(axis, angle)
    }

    fn is_similar_to(&self, other: &Self, tolerances: &CoreTolerances) -> bool {
        compare::scan_points_similar(&self.s0_at_scan_points, &other.s0_at_scan_points, tolerances)
            && self.core.similar_core(&other.core, tolerances)
            && compare::scalar(
                "wavelength",
                self.wavelength,
                other.wavelength,
                tolerances.wavelength,
            )
    }

    fn is_similar_to_with(&self, other: &Self, tolerances: &SimilarityTolerances) -> bool {
        self.is_similar_to(other, &tolerances.core)
            && self.core.similar_secondary(&other.core, tolerances)
    }
}
