//! Comparison tolerances, configurable from YAML or JSON.

use serde::{Deserialize, Serialize};

use crate::errors::{BeamError, ErrorInfo};

/// Fixed epsilon used by strict beam equality.
pub const STRICT_EPSILON: f64 = 1.0e-6;

fn default_tolerance() -> f64 {
    STRICT_EPSILON
}

/// Tolerances for the core similarity check.
///
/// Angular tolerances are in radians, the wavelength tolerance is in the
/// beam's wavelength unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoreTolerances {
    /// Maximum absolute wavelength difference.
    #[serde(default = "default_tolerance")]
    pub wavelength: f64,
    /// Maximum angle between beam directions.
    #[serde(default = "default_tolerance")]
    pub direction: f64,
    /// Maximum angle between polarization normals.
    #[serde(default = "default_tolerance")]
    pub polarization_normal: f64,
    /// Maximum absolute polarization fraction difference.
    #[serde(default = "default_tolerance")]
    pub polarization_fraction: f64,
}

impl CoreTolerances {
    /// Creates tolerances from explicit values.
    pub const fn new(
        wavelength: f64,
        direction: f64,
        polarization_normal: f64,
        polarization_fraction: f64,
    ) -> Self {
        Self {
            wavelength,
            direction,
            polarization_normal,
            polarization_fraction,
        }
    }

    /// Tolerances that accept only bit-for-bit agreement (up to `acos` round-off).
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

impl Default for CoreTolerances {
    fn default() -> Self {
        Self::new(
            default_tolerance(),
            default_tolerance(),
            default_tolerance(),
            default_tolerance(),
        )
    }
}

/// Tolerances for the extended similarity check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimilarityTolerances {
    /// Tolerances shared with the core check.
    #[serde(flatten)]
    pub core: CoreTolerances,
    /// Maximum absolute divergence difference.
    #[serde(default = "default_tolerance")]
    pub divergence: f64,
    /// Maximum absolute sigma divergence difference.
    #[serde(default = "default_tolerance")]
    pub sigma_divergence: f64,
    /// Maximum absolute flux difference.
    #[serde(default = "default_tolerance")]
    pub flux: f64,
    /// Maximum absolute transmission difference.
    #[serde(default = "default_tolerance")]
    pub transmission: f64,
    /// Maximum absolute sample to source distance difference (mm).
    #[serde(default = "default_tolerance")]
    pub sample_to_source_distance: f64,
}

impl SimilarityTolerances {
    /// Extends core tolerances with the default secondary tolerances.
    pub fn from_core(core: CoreTolerances) -> Self {
        Self {
            core,
            ..Self::default()
        }
    }

    /// Every tolerance set to zero.
    pub fn zero() -> Self {
        Self {
            core: CoreTolerances::zero(),
            divergence: 0.0,
            sigma_divergence: 0.0,
            flux: 0.0,
            transmission: 0.0,
            sample_to_source_distance: 0.0,
        }
    }

    /// Parses tolerances from a YAML document. Missing keys take their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, BeamError> {
        serde_yaml::from_str(yaml)
            .map_err(|err| BeamError::Config(ErrorInfo::new("yaml-read", err.to_string())))
    }

    /// Parses tolerances from a JSON document. Missing keys take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, BeamError> {
        serde_json::from_str(json)
            .map_err(|err| BeamError::Config(ErrorInfo::new("json-read", err.to_string())))
    }
}

impl Default for SimilarityTolerances {
    fn default() -> Self {
        Self {
            core: CoreTolerances::default(),
            divergence: default_tolerance(),
            sigma_divergence: default_tolerance(),
            flux: default_tolerance(),
            transmission: default_tolerance(),
            sample_to_source_distance: default_tolerance(),
        }
    }
}

impl From<CoreTolerances> for SimilarityTolerances {
    fn from(core: CoreTolerances) -> Self {
        Self::from_core(core)
    }
}
