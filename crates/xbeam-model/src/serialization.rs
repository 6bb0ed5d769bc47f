use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use xbeam_core::errors::{BeamError, ErrorInfo};
use xbeam_core::{BeamModel, Probe};

use crate::beam::Beam;
use crate::monochromatic::MonochromaticBeam;
use crate::polychromatic::PolychromaticBeam;
use crate::properties::BeamProperties;

/// Serializes the beam to a JSON string.
pub fn beam_to_json(beam: &Beam) -> Result<String, BeamError> {
    let serializable = SerializableBeam::from_beam(beam)?;
    serde_json::to_string_pretty(&serializable)
        .map_err(|err| BeamError::Serde(ErrorInfo::new("json-encode", err.to_string())))
}

/// Restores a beam from a JSON string.
///
/// The beam is rebuilt through the validating constructors, so payloads that
/// no constructor would accept are rejected.
pub fn beam_from_json(json: &str) -> Result<Beam, BeamError> {
    let serializable: SerializableBeam = serde_json::from_str(json)
        .map_err(|err| BeamError::Serde(ErrorInfo::new("json-decode", err.to_string())))?;
    serializable.into_beam()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum SerializableKind {
    Monochromatic,
    Polychromatic,
}

#[derive(Debug, Serialize, Deserialize)]
struct SerializableBeam {
    kind: SerializableKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    wavelength: Option<f64>,
    direction: [f64; 3],
    divergence: f64,
    sigma_divergence: f64,
    polarization_normal: [f64; 3],
    polarization_fraction: f64,
    flux: f64,
    transmission: f64,
    probe: String,
    sample_to_source_distance: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    s0_at_scan_points: Vec<[f64; 3]>,
}

impl SerializableBeam {
    fn from_beam(beam: &Beam) -> Result<Self, BeamError> {
        let (kind, wavelength, s0_at_scan_points) = match beam {
            Beam::Monochromatic(mono) => (
                SerializableKind::Monochromatic,
                Some(mono.wavelength()?),
                mono.s0_at_scan_points()?
                    .iter()
                    .map(|s0| [s0.x, s0.y, s0.z])
                    .collect(),
            ),
            Beam::Polychromatic(_) => (SerializableKind::Polychromatic, None, Vec::new()),
        };
        let direction = beam.sample_to_source_direction();
        let normal = beam.polarization_normal();
        Ok(Self {
            kind,
            wavelength,
            direction: [direction.x, direction.y, direction.z],
            divergence: beam.divergence(),
            sigma_divergence: beam.sigma_divergence(),
            polarization_normal: [normal.x, normal.y, normal.z],
            polarization_fraction: beam.polarization_fraction(),
            flux: beam.flux(),
            transmission: beam.transmission(),
            probe: beam.probe_name().to_owned(),
            sample_to_source_distance: beam.sample_to_source_distance(),
            s0_at_scan_points,
        })
    }

    fn into_beam(self) -> Result<Beam, BeamError> {
        let probe = Probe::from_name(&self.probe).map_err(invalid_record)?;
        let properties = BeamProperties {
            divergence: self.divergence,
            sigma_divergence: self.sigma_divergence,
            polarization_normal: Vector3::from(self.polarization_normal),
            polarization_fraction: self.polarization_fraction,
            flux: self.flux,
            transmission: self.transmission,
            probe,
            sample_to_source_distance: self.sample_to_source_distance,
        };
        let direction = Vector3::from(self.direction);
        match self.kind {
            SerializableKind::Monochromatic => {
                let wavelength = self.wavelength.ok_or_else(|| {
                    record_error("monochromatic record without a wavelength")
                })?;
                let mut beam = MonochromaticBeam::with_properties(direction, wavelength, properties)
                    .map_err(invalid_record)?;
                let scan_points: Vec<Vector3<f64>> = self
                    .s0_at_scan_points
                    .into_iter()
                    .map(Vector3::from)
                    .collect();
                beam.set_s0_at_scan_points(&scan_points)?;
                Ok(Beam::Monochromatic(beam))
            }
            SerializableKind::Polychromatic => {
                if self.wavelength.is_some() {
                    return Err(record_error("polychromatic record carries a wavelength"));
                }
                if !self.s0_at_scan_points.is_empty() {
                    return Err(record_error("polychromatic record carries scan points")
                        .with_context("count", self.s0_at_scan_points.len()));
                }
                let beam = PolychromaticBeam::with_properties(direction, properties)
                    .map_err(invalid_record)?;
                Ok(Beam::Polychromatic(beam))
            }
        }
    }
}

fn record_error(message: &str) -> BeamError {
    BeamError::Serde(ErrorInfo::new("invalid-record", message))
}

fn invalid_record(err: BeamError) -> BeamError {
    let info = err.info();
    let mut wrapped = ErrorInfo::new("invalid-record", info.message.clone())
        .with_context("cause", info.code.clone());
    wrapped.context.extend(info.context.clone());
    BeamError::Serde(wrapped)
}
