use std::num::ParseFloatError;

use thiserror::Error;

use crate::interfaces::Space;

/// Errors raised by the lattice-parameter environment.
#[derive(Debug, Error)]
pub enum LatticeError {
    #[error("{0} is not a valid lattice system")]
    InvalidLatticeSystem(String),

    #[error("logm error {residual:e} larger than {tolerance:e}")]
    NumericInstability { residual: f64, tolerance: f64 },

    #[error("metric tensor is not positive definite (smallest eigenvalue {min_eigenvalue:e})")]
    NonPositiveDefinite { min_eigenvalue: f64 },

    #[error("invalid lattice parameters: {0}")]
    InvalidParameters(String),

    #[error("cannot determine all six parameters")]
    MissingParameters,

    #[error("malformed readable lattice parameters: {0}")]
    Parse(String),

    #[error(transparent)]
    ParseFloat(#[from] ParseFloatError),

    #[error(
        "{space} dimension {index} is tied to dimension {target}, which is not resolved before it"
    )]
    InvalidConstraint {
        space: Space,
        index: usize,
        target: usize,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
