//! Crystal lattice-parameter environment
//!
//! This library provides the lattice-parameter stage of a GFlowNet crystal generator:
//! a continuous hypercube state mapped through a symmetric-matrix basis and a
//! matrix exponential onto valid unit cells, with the constraints of each of the
//! seven lattice systems enforced after every step.

pub mod config;
pub mod environment;
pub mod error;
pub mod interfaces;
pub mod lattice;

pub use environment::{CubeAction, LatticeParametersEnv};
pub use error::LatticeError;
pub use lattice::{LatticeParameters, LatticeSystem};

/// Common result type used throughout the library
pub type Result<T> = std::result::Result<T, LatticeError>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
