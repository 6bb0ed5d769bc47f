use std::fmt;

use nalgebra::Vector3;

use crate::common::BeamCore;

struct Braced<'a>(&'a Vector3<f64>);

impl fmt::Display for Braced<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{},{},{}}}", self.0.x, self.0.y, self.0.z)
    }
}

/// Writes the fixed-layout beam dump; `wavelength` is only present for
/// monochromatic beams.
pub(crate) fn write_beam(
    f: &mut fmt::Formatter<'_>,
    core: &BeamCore,
    wavelength: Option<f64>,
) -> fmt::Result {
    writeln!(f, "Beam:")?;
    writeln!(f, "    probe: {}", core.probe)?;
    if let Some(wavelength) = wavelength {
        writeln!(f, "    wavelength: {wavelength}")?;
    }
    writeln!(f, "    sample to source direction: {}", Braced(&core.direction))?;
    writeln!(f, "    divergence: {}", core.divergence)?;
    writeln!(f, "    sigma divergence: {}", core.sigma_divergence)?;
    writeln!(
        f,
        "    polarization normal: {}",
        Braced(&core.polarization_normal)
    )?;
    writeln!(f, "    polarization fraction: {}", core.polarization_fraction)?;
    writeln!(f, "    flux: {}", core.flux)?;
    writeln!(f, "    transmission: {}", core.transmission)?;
    writeln!(
        f,
        "    sample to source distance: {}",
        core.sample_to_source_distance
    )
}
