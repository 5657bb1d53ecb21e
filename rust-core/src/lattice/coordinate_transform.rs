//! Maps between the three coordinate spaces of the environment.
//!
//! State space is the unit hypercube. Projection space re-scales every state
//! dimension affinely into its own `[min, max]` range; its coordinates weight the
//! symmetric basis matrices of [`base_matrix`](super::base_matrix). Lattice
//! parameter space holds (a, b, c, alpha, beta, gamma), reached through
//! `J = exp(2S)`. Since `J` is the exponential of a symmetric matrix it is
//! symmetric positive definite, so every projection vector yields a cell of
//! strictly positive volume.

use log::warn;
use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_MAX_PROJECTION_VALUES, DEFAULT_MIN_PROJECTION_VALUES, EnvConfig};
use crate::error::LatticeError;
use crate::interfaces::{N_DIM, ProjectionVector, StateVector};
use crate::lattice::base_matrix::{coefficients_from_symmetric, symmetric_from_coefficients};
use crate::lattice::lattice_types::LatticeParameters;
use crate::Result;

/// Per-dimension bounds of projection space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionBounds {
    pub min: [f64; N_DIM],
    pub max: [f64; N_DIM],
}

impl Default for ProjectionBounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_PROJECTION_VALUES,
            max: DEFAULT_MAX_PROJECTION_VALUES,
        }
    }
}

impl ProjectionBounds {
    pub fn from_config(config: &EnvConfig) -> Self {
        Self {
            min: config.min_projection_values,
            max: config.max_projection_values,
        }
    }

    /// projection[i] = min[i] + state[i] * (max[i] - min[i])
    pub fn state_to_projection(&self, state: &StateVector) -> ProjectionVector {
        std::array::from_fn(|i| self.min[i] + state[i] * (self.max[i] - self.min[i]))
    }

    pub fn projection_to_state(&self, projection: &ProjectionVector) -> StateVector {
        std::array::from_fn(|i| (projection[i] - self.min[i]) / (self.max[i] - self.min[i]))
    }

    /// True when every component lies within its closed `[min, max]` range.
    pub fn contains(&self, projection: &ProjectionVector) -> bool {
        projection
            .iter()
            .zip(self.min.iter().zip(self.max.iter()))
            .all(|(p, (min, max))| p >= min && p <= max)
    }
}

/// Projection coefficients → lattice parameters through `J = exp(2S)`.
///
/// Extreme coefficients overflow the exponential and propagate as non-finite
/// parameters; the environment bounds keep states well away from that regime.
pub fn projection_to_lattice(projection: &ProjectionVector) -> LatticeParameters {
    let s = symmetric_from_coefficients(projection);
    let j = (s * 2.0).exp();

    let a = j[(0, 0)].sqrt();
    let b = j[(1, 1)].sqrt();
    let c = j[(2, 2)].sqrt();
    let alpha = angle_degrees(j[(1, 2)], b * c);
    let beta = angle_degrees(j[(0, 2)], a * c);
    let gamma = angle_degrees(j[(0, 1)], a * b);

    LatticeParameters::new([a, b, c], [alpha, beta, gamma])
}

/// Lattice parameters → projection coefficients through `S = logm(J) / 2`.
///
/// Fails when the parameters describe no real cell, or when the logarithm
/// does not reproduce `J` to within `logm_tolerance` (relative 1-norm).
pub fn lattice_to_projection(
    params: &LatticeParameters,
    logm_tolerance: f64,
) -> Result<ProjectionVector> {
    params.check_physical()?;
    let j = params.metric_tensor();
    let s = symmetric_logm(&j, logm_tolerance)? / 2.0;
    Ok(coefficients_from_symmetric(&s))
}

// acos of the normalised off-diagonal entry, clamped against rounding just outside [-1, 1]
fn angle_degrees(off_diagonal: f64, norm: f64) -> f64 {
    (off_diagonal / norm).clamp(-1.0, 1.0).acos().to_degrees()
}

/// Principal logarithm of a symmetric positive-definite matrix.
fn symmetric_logm(j: &Matrix3<f64>, tolerance: f64) -> Result<Matrix3<f64>> {
    let eigen = j.symmetric_eigen();
    let min_eigenvalue = eigen
        .eigenvalues
        .iter()
        .copied()
        .fold(f64::INFINITY, f64::min);
    if !(min_eigenvalue > 0.0) {
        warn!("Metric tensor has non-positive eigenvalue {min_eigenvalue:e}");
        return Err(LatticeError::NonPositiveDefinite { min_eigenvalue });
    }

    let log_eigenvalues = eigen.eigenvalues.map(f64::ln);
    let log = eigen.eigenvectors
        * Matrix3::from_diagonal(&log_eigenvalues)
        * eigen.eigenvectors.transpose();

    let residual = one_norm(&(log.exp() - j)) / one_norm(j);
    if !(residual <= tolerance) {
        warn!("Matrix logarithm residual {residual:e} exceeds {tolerance:e}");
        return Err(LatticeError::NumericInstability {
            residual,
            tolerance,
        });
    }
    Ok(log)
}

// Induced 1-norm: largest absolute column sum
fn one_norm(m: &Matrix3<f64>) -> f64 {
    m.column_iter()
        .map(|column| column.iter().map(|v| v.abs()).sum::<f64>())
        .fold(0.0, f64::max)
}
