use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::resources::{ConfigError, Result};

/// How the attitude quaternion is derived from the pitch/yaw/roll scalars.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttitudeModel {
    /// Rebuilt every tick as Rx(pitch) * Ry(yaw) * Rz(roll).
    #[default]
    Composed,
    /// Per-tick scalar deltas applied as a body-frame rotation to the previous attitude.
    Incremental,
}

/// Tuning parameters of the flight model.
///
/// All rates are per tick and all distances are in world units (altitude reads
/// as feet). Read-only once the simulation is running.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightTuning {
    /// Speed above which the aircraft can rotate for takeoff and has full control authority.
    pub min_speed: f64,
    pub max_thrust: f64,
    pub thrust_increment: f64,
    /// Rolling friction multiplier applied to velocity while grounded.
    pub ground_friction: f64,
    pub lift_coefficient: f64,
    pub gravity: f64,
    pub drag_coefficient: f64,
    /// Angle of attack beyond which lift collapses (rad).
    pub stall_angle: f64,
    /// Angle of attack at which the lift multiplier reaches one (rad).
    pub optimal_aoa: f64,
    /// Pitch added per tick while rotating on the runway (rad).
    pub rotation_speed: f64,
    /// Height the aircraft is pinned to while grounded.
    pub ground_height: f64,
    /// Uniform velocity damping applied every tick in both modes.
    pub air_resistance: f64,
    /// Altitude over which air density falls by a factor of e.
    pub density_scale_height: f64,
    pub start_position: Vector3<f64>,
    pub start_yaw: f64,
    pub attitude_model: AttitudeModel,
}

impl Default for FlightTuning {
    fn default() -> Self {
        Self {
            min_speed: 0.4,
            max_thrust: 0.015,
            thrust_increment: 0.0003,
            ground_friction: 0.997,
            lift_coefficient: 0.008,
            gravity: 0.0006,
            drag_coefficient: 0.002,
            stall_angle: std::f64::consts::FRAC_PI_6,
            optimal_aoa: std::f64::consts::PI / 12.0,
            rotation_speed: 0.015,
            ground_height: 0.5,
            air_resistance: 0.998,
            density_scale_height: 1000.0,
            // Threshold end of the runway, facing down its length (-Z).
            start_position: Vector3::new(0.0, 0.5, 40.0),
            start_yaw: 0.0,
            attitude_model: AttitudeModel::Composed,
        }
    }
}

impl FlightTuning {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let tuning: Self = serde_yaml::from_str(yaml)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn with_attitude_model(mut self, model: AttitudeModel) -> Self {
        self.attitude_model = model;
        self
    }

    pub fn validate(&self) -> Result<()> {
        let scalars = [
            ("min_speed", self.min_speed),
            ("max_thrust", self.max_thrust),
            ("thrust_increment", self.thrust_increment),
            ("ground_friction", self.ground_friction),
            ("lift_coefficient", self.lift_coefficient),
            ("gravity", self.gravity),
            ("drag_coefficient", self.drag_coefficient),
            ("stall_angle", self.stall_angle),
            ("optimal_aoa", self.optimal_aoa),
            ("rotation_speed", self.rotation_speed),
            ("ground_height", self.ground_height),
            ("air_resistance", self.air_resistance),
            ("density_scale_height", self.density_scale_height),
            ("start_yaw", self.start_yaw),
        ];
        for (name, value) in scalars {
            if !value.is_finite() {
                return Err(invalid(name, value, "must be finite"));
            }
        }
        if self.start_position.iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::ValidationError(format!(
                "start_position must be finite, got {:?}",
                self.start_position
            )));
        }

        for (name, value) in [
            ("min_speed", self.min_speed),
            ("max_thrust", self.max_thrust),
            ("density_scale_height", self.density_scale_height),
            ("optimal_aoa", self.optimal_aoa),
        ] {
            if value <= 0.0 {
                return Err(invalid(name, value, "must be positive"));
            }
        }

        for (name, value) in [
            ("thrust_increment", self.thrust_increment),
            ("lift_coefficient", self.lift_coefficient),
            ("gravity", self.gravity),
            ("drag_coefficient", self.drag_coefficient),
            ("rotation_speed", self.rotation_speed),
        ] {
            if value < 0.0 {
                return Err(invalid(name, value, "must not be negative"));
            }
        }

        for (name, value) in [
            ("ground_friction", self.ground_friction),
            ("air_resistance", self.air_resistance),
        ] {
            if value <= 0.0 || value > 1.0 {
                return Err(invalid(name, value, "must lie in (0, 1]"));
            }
        }

        if self.optimal_aoa >= self.stall_angle {
            return Err(ConfigError::ValidationError(format!(
                "optimal_aoa ({}) must be below stall_angle ({})",
                self.optimal_aoa, self.stall_angle
            )));
        }

        Ok(())
    }
}

fn invalid(name: &str, value: f64, reason: &str) -> ConfigError {
    ConfigError::ValidationError(format!("{} {}, got {}", name, reason, value))
}
