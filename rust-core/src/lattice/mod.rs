// Lattice module: lattice systems, the symmetric basis and the state/projection/lattice maps
// This module holds the pure numeric parts of the environment; nothing here keeps state

// ======================== MODULE DECLARATIONS ========================
pub mod base_matrix;
pub mod constraints;
pub mod coordinate_transform;
pub mod lattice_types;

// Test modules
mod _tests_constraints;
mod _tests_coordinate_transform;

// ======================== LATTICE SYSTEMS & PARAMETERS ========================
pub use lattice_types::{
    LatticeParameters,       // struct - lengths (a, b, c) and angles (alpha, beta, gamma) in degrees
    LatticeSystem,           // enum - the seven lattice systems (Triclinic .. Cubic)
    approx_equal,            // fn(a: f64, b: f64, tol: f64) -> bool
    identify_lattice_system, // fn(params: &LatticeParameters, tol: f64) -> LatticeSystem - most symmetric compatible system
};
// LatticeParameters impl methods:
//   new(lengths, angles) -> Self / from_array([f64; 6]) -> Self / to_array(&self) -> [f64; 6]
//   from_parts(parameters, lengths, angles) -> Result<Self>  - sextuple or lengths + angles
//   check_physical(&self) -> Result<()>                      - finite, positive lengths, angles in (0, 180)
//   metric_tensor(&self) -> Matrix3<f64>                     - Gram matrix G
//   volume(&self) -> f64                                     - sqrt(det G)

// ======================== SYMMETRIC BASIS ========================
pub use base_matrix::{
    basis_matrices,              // fn() -> [Matrix3<f64>; 6] - B1..B6
    coefficients_from_symmetric, // fn(s: &Matrix3<f64>) -> [f64; 6] - k1..k6 of a symmetric matrix
    symmetric_from_coefficients, // fn(k: &[f64; 6]) -> Matrix3<f64> - sum k_i B_i
};

// ======================== COORDINATE TRANSFORMS ========================
pub use coordinate_transform::{
    ProjectionBounds,      // struct - per-dimension [min, max] of projection space
    lattice_to_projection, // fn(params: &LatticeParameters, logm_tolerance: f64) -> Result<[f64; 6]>
    projection_to_lattice, // fn(projection: &[f64; 6]) -> LatticeParameters
};
// ProjectionBounds impl methods:
//   state_to_projection(&self, state) -> [f64; 6]   - affine, total
//   projection_to_state(&self, projection) -> [f64; 6]
//   contains(&self, projection) -> bool

// ======================== CONSTRAINTS ========================
pub use constraints::{
    ConstraintTable,     // struct - ignored dims + projection and lattice constraints of a system
    DimensionConstraint, // enum - Free, Fixed(value), Tied(index)
    SpaceConstraints,    // struct - constraints of the six dimensions of one space
};
