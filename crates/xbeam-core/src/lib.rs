#![deny(missing_docs)]
#![doc = "Core traits and data types for incident beam models used in diffraction data processing."]

use std::fmt;

use nalgebra::Vector3;

pub mod angle;
pub mod config;
pub mod errors;
pub mod probe;

pub use angle::{angle_safe, nonzero_length, unit_direction};
pub use config::{CoreTolerances, SimilarityTolerances, STRICT_EPSILON};
pub use errors::{BeamError, ErrorInfo};
pub use probe::Probe;

/// Capability set shared by every beam variant.
///
/// Directions follow the sample to source convention and are always stored as
/// unit vectors. Variants without a fixed wavelength answer the wavelength,
/// wave vector and scan-point operations with [`BeamError::Unsupported`].
pub trait BeamModel: fmt::Debug + fmt::Display + Send + Sync {
    /// Returns the unit direction pointing from the sample to the source.
    fn sample_to_source_direction(&self) -> Vector3<f64>;

    /// Sets the sample to source direction; the vector is normalised on storage.
    fn set_direction(&mut self, direction: Vector3<f64>) -> Result<(), BeamError>;

    /// Returns the wavelength.
    fn wavelength(&self) -> Result<f64, BeamError>;

    /// Sets the wavelength without touching the direction.
    fn set_wavelength(&mut self, wavelength: f64) -> Result<(), BeamError>;

    /// Returns the wave vector `-direction / wavelength`.
    fn s0(&self) -> Result<Vector3<f64>, BeamError>;

    /// Sets direction and wavelength from a wave vector.
    fn set_s0(&mut self, s0: Vector3<f64>) -> Result<(), BeamError>;

    /// Returns the unit wave vector, `-direction`.
    fn unit_s0(&self) -> Vector3<f64>;

    /// Sets the direction from a wave vector, leaving the wavelength untouched.
    fn set_unit_s0(&mut self, unit_s0: Vector3<f64>) -> Result<(), BeamError>;

    /// Returns the beam divergence in radians.
    fn divergence(&self) -> f64;

    /// Sets the beam divergence in radians.
    fn set_divergence(&mut self, divergence: f64);

    /// Returns the standard deviation of the beam divergence.
    fn sigma_divergence(&self) -> f64;

    /// Sets the standard deviation of the beam divergence.
    fn set_sigma_divergence(&mut self, sigma_divergence: f64);

    /// Returns the normal of the polarization plane.
    fn polarization_normal(&self) -> Vector3<f64>;

    /// Sets the normal of the polarization plane. Zero vectors are rejected.
    fn set_polarization_normal(
        &mut self,
        polarization_normal: Vector3<f64>,
    ) -> Result<(), BeamError>;

    /// Returns the polarization fraction.
    fn polarization_fraction(&self) -> f64;

    /// Sets the polarization fraction.
    fn set_polarization_fraction(&mut self, polarization_fraction: f64);

    /// Returns the beam flux.
    fn flux(&self) -> f64;

    /// Sets the beam flux.
    fn set_flux(&mut self, flux: f64);

    /// Returns the beam transmission.
    fn transmission(&self) -> f64;

    /// Sets the beam transmission.
    fn set_transmission(&mut self, transmission: f64);

    /// Returns the radiation probe.
    fn probe(&self) -> Probe;

    /// Sets the radiation probe.
    fn set_probe(&mut self, probe: Probe);

    /// Returns the NeXus name of the probe.
    fn probe_name(&self) -> &'static str {
        self.probe().name()
    }

    /// Returns the sample to source distance in mm.
    fn sample_to_source_distance(&self) -> f64;

    /// Sets the sample to source distance in mm. Negative distances are rejected.
    fn set_sample_to_source_distance(&mut self, distance: f64) -> Result<(), BeamError>;

    /// Returns the number of scan points with a stored wave vector.
    fn num_scan_points(&self) -> Result<usize, BeamError>;

    /// Returns the wave vectors stored per scan point.
    fn s0_at_scan_points(&self) -> Result<&[Vector3<f64>], BeamError>;

    /// Replaces the per scan point wave vectors.
    fn set_s0_at_scan_points(&mut self, s0: &[Vector3<f64>]) -> Result<(), BeamError>;

    /// Returns the wave vector of a single scan point.
    fn s0_at_scan_point(&self, index: usize) -> Result<Vector3<f64>, BeamError>;

    /// Clears the per scan point wave vectors.
    fn reset_scan_points(&mut self) -> Result<(), BeamError>;

    /// Rotates the direction and polarization normal about `axis` through the origin.
    fn rotate_around_origin(&mut self, axis: Vector3<f64>, angle: f64) -> Result<(), BeamError>;

    /// Compares the core fields against the supplied tolerances.
    fn is_similar_to(&self, other: &Self, tolerances: &CoreTolerances) -> bool
    where
        Self: Sized;

    /// Compares core and secondary fields against the supplied tolerances.
    fn is_similar_to_with(&self, other: &Self, tolerances: &SimilarityTolerances) -> bool
    where
        Self: Sized;
}
