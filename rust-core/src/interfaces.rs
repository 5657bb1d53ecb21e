// Definitions that are used throughout all modules

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of lattice parameters (a, b, c, alpha, beta, gamma).
pub const N_DIM: usize = 6;

/// Names of the lattice parameters, in state order.
pub const PARAMETER_NAMES: [&str; N_DIM] = ["a", "b", "c", "alpha", "beta", "gamma"];

/// A point in the unit hypercube, one coordinate per lattice parameter.
pub type StateVector = [f64; N_DIM];

/// Coefficients of the six symmetric basis matrices.
pub type ProjectionVector = [f64; N_DIM];

// Enumeration to track which coordinate space a vector lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Space {
    Projection,
    LatticeParameters,
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Space::Projection => "projection",
            Space::LatticeParameters => "lattice parameter",
        };
        f.write_str(name)
    }
}
