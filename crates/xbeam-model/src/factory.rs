//! Convenience constructors for the common beam set-ups.

use nalgebra::Vector3;
use tracing::warn;
use xbeam_core::errors::BeamError;

use crate::monochromatic::MonochromaticBeam;
use crate::polychromatic::PolychromaticBeam;
use crate::properties::BeamProperties;

/// `h·c` in eV·Å, used to convert photon energy to wavelength.
pub const HC_EV_ANGSTROM: f64 = 12398.419843320026;

/// Monochromatic beam along +z with the given wavelength.
pub fn simple(wavelength: f64) -> MonochromaticBeam {
    MonochromaticBeam::along_z(wavelength)
}

/// Monochromatic beam along `direction` (sample to source).
pub fn simple_directional(
    direction: Vector3<f64>,
    wavelength: f64,
) -> Result<MonochromaticBeam, BeamError> {
    MonochromaticBeam::with_wavelength(direction, wavelength)
}

/// Monochromatic beam with an explicit polarization.
pub fn complex(
    direction: Vector3<f64>,
    polarization_fraction: f64,
    polarization_normal: Vector3<f64>,
    wavelength: f64,
) -> Result<MonochromaticBeam, BeamError> {
    let properties =
        BeamProperties::default().with_polarization(polarization_normal, polarization_fraction);
    MonochromaticBeam::with_properties(direction, wavelength, properties)
}

/// Polychromatic beam along `direction` with the given properties.
///
/// Pass [`BeamProperties::polychromatic`] for the usual defaults.
pub fn polychromatic(
    direction: Vector3<f64>,
    properties: BeamProperties,
) -> Result<PolychromaticBeam, BeamError> {
    PolychromaticBeam::with_properties(direction, properties)
}

/// Monochromatic X-ray beam from a photon energy in eV.
pub fn from_energy(
    direction: Vector3<f64>,
    energy_ev: f64,
) -> Result<MonochromaticBeam, BeamError> {
    if !(energy_ev.is_finite() && energy_ev > 0.0) {
        warn!(energy_ev, "rejected photon energy");
        return Err(
            BeamError::invalid_argument("invalid-energy", "photon energy must be positive")
                .with_context("energy_ev", energy_ev),
        );
    }
    MonochromaticBeam::with_wavelength(direction, HC_EV_ANGSTROM / energy_ev)
}

