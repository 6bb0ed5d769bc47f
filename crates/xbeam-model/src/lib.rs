#![deny(missing_docs)]
#![doc = "Monochromatic and polychromatic beam models implementing the `xbeam-core` contracts."]

mod beam;
mod common;
mod compare;
mod display;
pub mod factory;
mod monochromatic;
mod polychromatic;
mod properties;
mod serialization;

pub use beam::Beam;
pub use monochromatic::MonochromaticBeam;
pub use polychromatic::PolychromaticBeam;
pub use properties::{
    BeamProperties, MONOCHROMATIC_POLARIZATION_FRACTION, POLYCHROMATIC_POLARIZATION_FRACTION,
};

/// Re-export serialization helpers for downstream crates.
pub use serialization::{beam_from_json, beam_to_json};
