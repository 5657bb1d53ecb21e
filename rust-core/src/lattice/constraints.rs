//! Per-lattice-system constraints in projection space and lattice parameter space.
//!
//! Every dimension is either free, fixed to a constant, or tied to the already
//! resolved value of a lower-indexed dimension. Fixed takes precedence over tied.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::LatticeError;
use crate::interfaces::{N_DIM, PARAMETER_NAMES, Space};
use crate::lattice::lattice_types::LatticeSystem;
use crate::Result;

/// Constraint acting on a single dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DimensionConstraint {
    Free,
    Fixed(f64),
    /// Equal to the resolved value of the given (lower) index.
    Tied(usize),
}

/// The constraints of all six dimensions of one space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpaceConstraints {
    space: Space,
    dims: [DimensionConstraint; N_DIM],
}

impl SpaceConstraints {
    /// Builds the constraints from parallel fixed/tied arrays.
    ///
    /// Tie targets must be strictly lower than the tied index so that a single
    /// left-to-right pass resolves every dimension.
    pub fn new(
        space: Space,
        fixed: [Option<f64>; N_DIM],
        tied: [Option<usize>; N_DIM],
    ) -> Result<Self> {
        for (index, target) in tied.iter().enumerate() {
            if let Some(target) = *target {
                if target >= index {
                    return Err(LatticeError::InvalidConstraint {
                        space,
                        index,
                        target,
                    });
                }
            }
        }

        let dims = std::array::from_fn(|i| match (fixed[i], tied[i]) {
            (Some(value), _) => DimensionConstraint::Fixed(value),
            (None, Some(target)) => DimensionConstraint::Tied(target),
            (None, None) => DimensionConstraint::Free,
        });
        Ok(Self { space, dims })
    }

    pub fn unconstrained(space: Space) -> Self {
        Self {
            space,
            dims: [DimensionConstraint::Free; N_DIM],
        }
    }

    pub fn space(&self) -> Space {
        self.space
    }

    pub fn dims(&self) -> &[DimensionConstraint; N_DIM] {
        &self.dims
    }

    pub fn fixed_values(&self) -> [Option<f64>; N_DIM] {
        self.dims.map(|dim| match dim {
            DimensionConstraint::Fixed(value) => Some(value),
            _ => None,
        })
    }

    pub fn tied_values(&self) -> [Option<usize>; N_DIM] {
        self.dims.map(|dim| match dim {
            DimensionConstraint::Tied(target) => Some(target),
            _ => None,
        })
    }

    /// Resolves every dimension in index order: fixed value, else the already
    /// resolved tie target, else the input value.
    pub fn apply(&self, values: &[f64; N_DIM]) -> [f64; N_DIM] {
        let mut constrained = *values;
        for (i, dim) in self.dims.iter().enumerate() {
            constrained[i] = match *dim {
                DimensionConstraint::Fixed(value) => value,
                DimensionConstraint::Tied(target) => constrained[target],
                DimensionConstraint::Free => values[i],
            };
        }
        constrained
    }

    /// Whether `values` already satisfies every constraint within `tol`.
    pub fn is_satisfied_by(&self, values: &[f64; N_DIM], tol: f64) -> bool {
        self.apply(values)
            .iter()
            .zip(values.iter())
            .all(|(constrained, value)| (constrained - value).abs() <= tol)
    }
}

/// Everything a lattice system imposes on the environment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConstraintTable {
    pub system: LatticeSystem,
    /// State dimensions whose value is derived rather than chosen by the policy.
    pub ignored_dims: [bool; N_DIM],
    pub projection: SpaceConstraints,
    pub lattice: SpaceConstraints,
}

impl ConstraintTable {
    pub fn for_system(system: LatticeSystem) -> Self {
        use LatticeSystem::*;

        const T: bool = true;
        const F: bool = false;
        const NO_FIX: [Option<f64>; N_DIM] = [None; N_DIM];
        const NO_TIE: [Option<usize>; N_DIM] = [None; N_DIM];

        let (ignored_dims, projection_fixed, projection_tied, lattice_fixed, lattice_tied) =
            match system {
                Triclinic => ([F; N_DIM], NO_FIX, NO_TIE, NO_FIX, NO_TIE),
                // α = γ = 90°
                Monoclinic => (
                    [T, F, T, F, F, F],
                    [Some(0.0), None, Some(0.0), None, None, None],
                    NO_TIE,
                    [None, None, None, Some(90.0), None, Some(90.0)],
                    NO_TIE,
                ),
                // α = β = γ = 90°
                Orthorhombic => (
                    [T, T, T, F, F, F],
                    [Some(0.0), Some(0.0), Some(0.0), None, None, None],
                    NO_TIE,
                    [None, None, None, Some(90.0), Some(90.0), Some(90.0)],
                    NO_TIE,
                ),
                // α = β = γ = 90°, a = b
                Tetragonal => (
                    [T, T, T, T, F, F],
                    [Some(0.0), Some(0.0), Some(0.0), Some(0.0), None, None],
                    NO_TIE,
                    [None, None, None, Some(90.0), Some(90.0), Some(90.0)],
                    [None, Some(0), None, None, None, None],
                ),
                // α = β = 90°, γ = 120°, a = b
                Hexagonal => (
                    [T, T, T, T, F, F],
                    [
                        Some(-(3.0_f64).ln() / 4.0),
                        Some(0.0),
                        Some(0.0),
                        Some(0.0),
                        None,
                        None,
                    ],
                    NO_TIE,
                    [None, None, None, Some(90.0), Some(90.0), Some(120.0)],
                    [None, Some(0), None, None, None, None],
                ),
                // α = β = γ, a = b = c
                Rhombohedral => (
                    [F, T, T, T, T, F],
                    [None, None, None, Some(0.0), Some(0.0), None],
                    [None, Some(0), Some(0), None, None, None],
                    NO_FIX,
                    [None, Some(0), Some(0), None, Some(3), Some(3)],
                ),
                // α = β = γ = 90°, a = b = c
                Cubic => (
                    [T, T, T, T, T, F],
                    [Some(0.0), Some(0.0), Some(0.0), Some(0.0), Some(0.0), None],
                    NO_TIE,
                    [None, None, None, Some(90.0), Some(90.0), Some(90.0)],
                    [None, Some(0), Some(0), None, None, None],
                ),
            };

        let projection = SpaceConstraints::new(Space::Projection, projection_fixed, projection_tied)
            .expect("projection ties of the built-in tables point to lower indices");
        let lattice = SpaceConstraints::new(Space::LatticeParameters, lattice_fixed, lattice_tied)
            .expect("lattice ties of the built-in tables point to lower indices");

        ConstraintTable {
            system,
            ignored_dims,
            projection,
            lattice,
        }
    }
}

impl fmt::Display for ConstraintTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "lattice system: {}", self.system)?;
        writeln!(f, "{:<6} {:<8} {:<22} {:<22}", "dim", "ignored", "projection", "lattice")?;
        for i in 0..N_DIM {
            writeln!(
                f,
                "{:<6} {:<8} {:<22} {:<22}",
                PARAMETER_NAMES[i],
                self.ignored_dims[i],
                describe(&self.projection.dims[i]),
                describe(&self.lattice.dims[i]),
            )?;
        }
        Ok(())
    }
}

fn describe(dim: &DimensionConstraint) -> String {
    match dim {
        DimensionConstraint::Free => "free".to_string(),
        DimensionConstraint::Fixed(value) => format!("fixed {value:.6}"),
        DimensionConstraint::Tied(target) => format!("tied to {}", PARAMETER_NAMES[*target]),
    }
}
