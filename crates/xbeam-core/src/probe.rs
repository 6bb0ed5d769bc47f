//! Radiation probe types and their NeXus `NXsource/probe` names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{BeamError, ErrorInfo};

/// Type of radiation used in the experiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Probe {
    /// X-ray photons.
    #[default]
    #[serde(rename = "x-ray")]
    XRay,
    /// Electrons.
    #[serde(rename = "electron")]
    Electron,
    /// Neutrons.
    #[serde(rename = "neutron")]
    Neutron,
}

impl Probe {
    /// All probe values in declaration order.
    pub const ALL: [Probe; 3] = [Probe::XRay, Probe::Electron, Probe::Neutron];

    /// Returns the NeXus name of the probe.
    pub fn name(self) -> &'static str {
        match self {
            Probe::XRay => "x-ray",
            Probe::Electron => "electron",
            Probe::Neutron => "neutron",
        }
    }

    /// Looks up a probe by its NeXus name. Matching is exact.
    pub fn from_name(name: &str) -> Result<Self, BeamError> {
        match name {
            "x-ray" => Ok(Probe::XRay),
            "electron" => Ok(Probe::Electron),
            "neutron" => Ok(Probe::Neutron),
            other => Err(BeamError::UnknownProbe(
                ErrorInfo::new("unknown-probe", format!("unknown probe {other}"))
                    .with_context("name", other)
                    .with_hint("expected one of x-ray, electron, neutron"),
            )),
        }
    }
}

impl fmt::Display for Probe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Probe {
    type Err = BeamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Probe::from_name(s)
    }
}
