use nalgebra::{Rotation3, Unit, Vector3};
use tracing::warn;
use xbeam_core::errors::BeamError;
use xbeam_core::{unit_direction, CoreTolerances, Probe, SimilarityTolerances, STRICT_EPSILON};

use crate::compare;
use crate::properties::BeamProperties;

/// Field set owned by every beam variant.
#[derive(Debug, Clone)]
pub(crate) struct BeamCore {
    pub(crate) direction: Vector3<f64>,
    pub(crate) divergence: f64,
    pub(crate) sigma_divergence: f64,
    pub(crate) polarization_normal: Vector3<f64>,
    pub(crate) polarization_fraction: f64,
    pub(crate) flux: f64,
    pub(crate) transmission: f64,
    pub(crate) probe: Probe,
    pub(crate) sample_to_source_distance: f64,
}

impl BeamCore {
    /// Validates every field before anything is stored.
    pub(crate) fn new(
        direction: Vector3<f64>,
        properties: BeamProperties,
    ) -> Result<Self, BeamError> {
        let direction = unit_direction(&direction, "direction")?;
        check_polarization_normal(&properties.polarization_normal)?;
        check_distance(properties.sample_to_source_distance)?;
        Ok(Self {
            direction,
            divergence: properties.divergence,
            sigma_divergence: properties.sigma_divergence,
            polarization_normal: properties.polarization_normal,
            polarization_fraction: properties.polarization_fraction,
            flux: properties.flux,
            transmission: properties.transmission,
            probe: properties.probe,
            sample_to_source_distance: properties.sample_to_source_distance,
        })
    }

    /// The default field set along +z with the given properties.
    ///
    /// Only called with property values known to be valid.
    pub(crate) fn along_z(properties: BeamProperties) -> Self {
        Self {
            direction: Vector3::z(),
            divergence: properties.divergence,
            sigma_divergence: properties.sigma_divergence,
            polarization_normal: properties.polarization_normal,
            polarization_fraction: properties.polarization_fraction,
            flux: properties.flux,
            transmission: properties.transmission,
            probe: properties.probe,
            sample_to_source_distance: properties.sample_to_source_distance,
        }
    }

    pub(crate) fn properties(&self) -> BeamProperties {
        BeamProperties {
            divergence: self.divergence,
            sigma_divergence: self.sigma_divergence,
            polarization_normal: self.polarization_normal,
            polarization_fraction: self.polarization_fraction,
            flux: self.flux,
            transmission: self.transmission,
            probe: self.probe,
            sample_to_source_distance: self.sample_to_source_distance,
        }
    }

    pub(crate) fn set_direction(&mut self, direction: Vector3<f64>) -> Result<(), BeamError> {
        self.direction = unit_direction(&direction, "direction")?;
        Ok(())
    }

    pub(crate) fn set_unit_s0(&mut self, unit_s0: Vector3<f64>) -> Result<(), BeamError> {
        self.direction = -unit_direction(&unit_s0, "unit_s0")?;
        Ok(())
    }

    pub(crate) fn set_polarization_normal(
        &mut self,
        normal: Vector3<f64>,
    ) -> Result<(), BeamError> {
        check_polarization_normal(&normal)?;
        self.polarization_normal = normal;
        Ok(())
    }

    pub(crate) fn set_sample_to_source_distance(&mut self, distance: f64) -> Result<(), BeamError> {
        check_distance(distance)?;
        self.sample_to_source_distance = distance;
        Ok(())
    }

    /// Applies the same rotation to the direction and the polarization normal.
    pub(crate) fn rotate_around_origin(
        &mut self,
        axis: Vector3<f64>,
        angle: f64,
    ) -> Result<(), BeamError> {
        let axis = Unit::new_unchecked(unit_direction(&axis, "axis")?);
        let rotation = Rotation3::from_axis_angle(&axis, angle);
        // Re-normalise so repeated rotations cannot drift off the unit sphere.
        self.direction = (rotation * self.direction).normalize();
        self.polarization_normal = rotation * self.polarization_normal;
        Ok(())
    }

    pub(crate) fn strictly_equal(&self, other: &Self) -> bool {
        let eps = STRICT_EPSILON;
        compare::angular("direction", &self.direction, &other.direction, eps)
            && compare::scalar("divergence", self.divergence, other.divergence, eps)
            && compare::scalar(
                "sigma_divergence",
                self.sigma_divergence,
                other.sigma_divergence,
                eps,
            )
            && compare::angular(
                "polarization_normal",
                &self.polarization_normal,
                &other.polarization_normal,
                eps,
            )
            && compare::scalar(
                "polarization_fraction",
                self.polarization_fraction,
                other.polarization_fraction,
                eps,
            )
            && compare::scalar("flux", self.flux, other.flux, eps)
            && compare::scalar("transmission", self.transmission, other.transmission, eps)
            && compare::scalar(
                "sample_to_source_distance",
                self.sample_to_source_distance,
                other.sample_to_source_distance,
                eps,
            )
            && compare::probe(self.probe, other.probe)
    }

    /// Direction, polarization and probe.
    pub(crate) fn similar_core(&self, other: &Self, tolerances: &CoreTolerances) -> bool {
        compare::angular(
            "direction",
            &self.direction,
            &other.direction,
            tolerances.direction,
        ) && compare::angular(
            "polarization_normal",
            &self.polarization_normal,
            &other.polarization_normal,
            tolerances.polarization_normal,
        ) && compare::scalar(
            "polarization_fraction",
            self.polarization_fraction,
            other.polarization_fraction,
            tolerances.polarization_fraction,
        ) && compare::probe(self.probe, other.probe)
    }

    /// Divergence statistics, flux, transmission and distance.
    pub(crate) fn similar_secondary(
        &self,
        other: &Self,
        tolerances: &SimilarityTolerances,
    ) -> bool {
        compare::scalar(
            "divergence",
            self.divergence,
            other.divergence,
            tolerances.divergence,
        ) && compare::scalar(
            "sigma_divergence",
            self.sigma_divergence,
            other.sigma_divergence,
            tolerances.sigma_divergence,
        ) && compare::scalar("flux", self.flux, other.flux, tolerances.flux)
            && compare::scalar(
                "transmission",
                self.transmission,
                other.transmission,
                tolerances.transmission,
            )
            && compare::scalar(
                "sample_to_source_distance",
                self.sample_to_source_distance,
                other.sample_to_source_distance,
                tolerances.sample_to_source_distance,
            )
    }
}

fn check_polarization_normal(normal: &Vector3<f64>) -> Result<(), BeamError> {
    unit_direction(normal, "polarization_normal").map(|_| ())
}

fn check_distance(distance: f64) -> Result<(), BeamError> {
    if distance.is_nan() || distance < 0.0 {
        warn!(distance, "rejected sample to source distance");
        return Err(BeamError::invalid_argument(
            "negative-distance",
            "sample to source distance must not be negative",
        )
        .with_context("distance", distance));
    }
    Ok(())
}
