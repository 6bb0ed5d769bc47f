use nalgebra::Vector3;
use xbeam_core::Probe;

/// Fields shared by every beam variant apart from the direction.
///
/// Used by the fully explicit construction profiles. The [`Default`] values
/// are the monochromatic defaults; [`BeamProperties::polychromatic`] returns
/// the polychromatic ones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeamProperties {
    /// Beam divergence in radians.
    pub divergence: f64,
    /// Standard deviation of the beam divergence.
    pub sigma_divergence: f64,
    /// Normal of the polarization plane. Must not be the zero vector.
    pub polarization_normal: Vector3<f64>,
    /// Polarization fraction.
    pub polarization_fraction: f64,
    /// Beam flux.
    pub flux: f64,
    /// Beam transmission.
    pub transmission: f64,
    /// Radiation probe.
    pub probe: Probe,
    /// Sample to source distance in mm. Must not be negative.
    pub sample_to_source_distance: f64,
}

/// Polarization fraction used by the monochromatic profiles.
pub const MONOCHROMATIC_POLARIZATION_FRACTION: f64 = 0.999;

/// Polarization fraction used by most polychromatic profiles.
pub const POLYCHROMATIC_POLARIZATION_FRACTION: f64 = 0.5;

impl BeamProperties {
    /// Defaults used by the polychromatic construction profiles.
    pub fn polychromatic() -> Self {
        Self {
            polarization_fraction: POLYCHROMATIC_POLARIZATION_FRACTION,
            ..Self::default()
        }
    }

    /// Returns a copy with the divergence statistics replaced.
    pub fn with_divergence(mut self, divergence: f64, sigma_divergence: f64) -> Self {
        self.divergence = divergence;
        self.sigma_divergence = sigma_divergence;
        self
    }

    /// Returns a copy with the polarization replaced.
    pub fn with_polarization(mut self, normal: Vector3<f64>, fraction: f64) -> Self {
        self.polarization_normal = normal;
        self.polarization_fraction = fraction;
        self
    }

    /// Returns a copy with the probe replaced.
    pub fn with_probe(mut self, probe: Probe) -> Self {
        self.probe = probe;
        self
    }

    /// Returns a copy with the sample to source distance replaced.
    pub fn with_sample_to_source_distance(mut self, distance: f64) -> Self {
        self.sample_to_source_distance = distance;
        self
    }
}

impl Default for BeamProperties {
    fn default() -> Self {
        Self {
            divergence: 0.0,
            sigma_divergence: 0.0,
            polarization_normal: Vector3::y(),
            polarization_fraction: MONOCHROMATIC_POLARIZATION_FRACTION,
            flux: 0.0,
            transmission: 1.0,
            probe: Probe::XRay,
            sample_to_source_distance: 0.0,
        }
    }
}
