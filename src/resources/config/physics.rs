use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::resources::{ConfigError, Result};

/// Fixed-step scheduling for the flight model.
///
/// One tick is one application of the per-tick update. All tuning constants
/// are expressed per tick, so changing `timestep` changes how fast the
/// simulation runs against wall time, not the shape of the flight envelope.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Duration of one tick (s).
    pub timestep: f64,
    /// Upper bound on ticks run for a single presentation frame.
    pub max_substeps: u32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            timestep: 1.0 / 60.0,
            max_substeps: 8,
        }
    }
}

impl PhysicsConfig {
    pub fn with_timestep(timestep: f64) -> Self {
        Self {
            timestep,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.timestep.is_finite() || self.timestep <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "timestep must be positive, got {}",
                self.timestep
            )));
        }
        if self.max_substeps == 0 {
            return Err(ConfigError::ValidationError(
                "max_substeps must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Tick rate implied by the timestep (Hz).
    pub fn tick_rate(&self) -> f64 {
        1.0 / self.timestep
    }
}
