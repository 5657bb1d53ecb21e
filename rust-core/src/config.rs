// Constants and environment configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LatticeError;
use crate::interfaces::N_DIM;
use crate::lattice::constraints::ConstraintTable;
use crate::lattice::lattice_types::LatticeSystem;
use crate::Result;

// Projection bounds. Found empirically: wide enough for angles in 10-170 degrees and
// lengths in 1-1000 Angstrom, narrow enough for the exponential map to stay stable.
pub const DEFAULT_MIN_PROJECTION_VALUES: [f64; N_DIM] = [-1.5, -1.5, -1.5, -4.5, -3.0, -1.5];
pub const DEFAULT_MAX_PROJECTION_VALUES: [f64; N_DIM] = [1.5, 1.5, 1.5, 4.5, 3.0, 7.0];

// Tolerances
pub const LOGM_TOLERANCE: f64 = 1e-9; // Relative residual accepted from the matrix logarithm
pub const LATTICE_TOLERANCE: f64 = 1e-10; // For most lattice operations

pub const DEFAULT_MAX_INCREMENT: f64 = 0.1;

/// Runtime configuration of a [`LatticeParametersEnv`](crate::environment::LatticeParametersEnv).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvConfig {
    pub lattice_system: LatticeSystem,
    pub min_projection_values: [f64; N_DIM],
    pub max_projection_values: [f64; N_DIM],
    pub logm_tolerance: f64,
    /// Largest per-dimension increment drawn by the random action sampler.
    pub max_increment: f64,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            lattice_system: LatticeSystem::Triclinic,
            min_projection_values: DEFAULT_MIN_PROJECTION_VALUES,
            max_projection_values: DEFAULT_MAX_PROJECTION_VALUES,
            logm_tolerance: LOGM_TOLERANCE,
            max_increment: DEFAULT_MAX_INCREMENT,
        }
    }
}

impl EnvConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: EnvConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> Result<()> {
        for (i, (min, max)) in self
            .min_projection_values
            .iter()
            .zip(self.max_projection_values.iter())
            .enumerate()
        {
            if !(min < max) {
                return Err(LatticeError::Config(format!(
                    "projection bounds of dimension {i} are empty: min {min} >= max {max}"
                )));
            }
        }
        // Every system must fit, set_lattice_system can switch after construction
        for system in LatticeSystem::ALL {
            let fixed = ConstraintTable::for_system(system).projection.fixed_values();
            for (i, value) in fixed.iter().enumerate() {
                let Some(value) = value else { continue };
                let (min, max) = (self.min_projection_values[i], self.max_projection_values[i]);
                if !(min <= *value && *value <= max) {
                    return Err(LatticeError::Config(format!(
                        "projection bounds of dimension {i} [{min}, {max}] exclude \
                         the {system} fixed value {value}"
                    )));
                }
            }
        }
        if !(self.logm_tolerance > 0.0) {
            return Err(LatticeError::Config(format!(
                "logm_tolerance must be positive, got {}",
                self.logm_tolerance
            )));
        }
        if !(self.max_increment > 0.0 && self.max_increment <= 1.0) {
            return Err(LatticeError::Config(format!(
                "max_increment must lie in (0, 1], got {}",
                self.max_increment
            )));
        }
        Ok(())
    }
}
