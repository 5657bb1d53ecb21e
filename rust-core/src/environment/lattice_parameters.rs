//! Lattice-parameter environment with projection-based constraint enforcement.
//!
//! The state lives in the unit hypercube and is advanced by a [`HypercubeStepper`].
//! After every accepted step the state is mapped to projection space, the
//! constraints of the active lattice system are applied there and the result is
//! mapped back, so every committed state encodes a constraint-satisfying cell.

use log::{debug, trace};
use nalgebra::DMatrix;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::EnvConfig;
use crate::environment::cube::{
    ActionMask, ContinuousCube, CubeAction, HypercubeStepper, StepOutcome,
};
use crate::environment::readable::{format_readable, parse_readable};
use crate::interfaces::{N_DIM, StateVector};
use crate::lattice::constraints::ConstraintTable;
use crate::lattice::coordinate_transform::{
    ProjectionBounds, lattice_to_projection, projection_to_lattice,
};
use crate::lattice::lattice_types::{LatticeParameters, LatticeSystem};
use crate::Result;

/// Environment over the six lattice parameters of a unit cell.
#[derive(Debug, Clone)]
pub struct LatticeParametersEnv<S: HypercubeStepper = ContinuousCube> {
    stepper: S,
    state: StateVector,
    constraints: ConstraintTable,
    bounds: ProjectionBounds,
    logm_tolerance: f64,
}

impl LatticeParametersEnv<ContinuousCube> {
    pub fn new(config: &EnvConfig) -> Result<Self> {
        Self::with_stepper(config, ContinuousCube::default())
    }
}

impl<S: HypercubeStepper> LatticeParametersEnv<S> {
    pub fn with_stepper(config: &EnvConfig, stepper: S) -> Result<Self> {
        config.validate()?;
        let mut env = LatticeParametersEnv {
            stepper,
            state: Self::source(),
            constraints: ConstraintTable::for_system(config.lattice_system),
            bounds: ProjectionBounds::from_config(config),
            logm_tolerance: config.logm_tolerance,
        };
        env.set_lattice_system(config.lattice_system);
        Ok(env)
    }

    // ======================== LIFECYCLE ========================

    /// The all-zero state every trajectory starts from.
    pub fn source() -> StateVector {
        [0.0; N_DIM]
    }

    pub fn reset(&mut self) {
        self.state = Self::source();
        self.stepper.reset();
    }

    /// True at the source or at its constrained image, which is where a
    /// backward trajectory lands once every free dimension is back at zero.
    pub fn is_source(&self) -> bool {
        let source = Self::source();
        self.state == source || self.state == self.constrain_state(&source)
    }

    pub fn state(&self) -> &StateVector {
        &self.state
    }

    /// Overwrites the current state, e.g. when restoring a saved trajectory.
    pub fn set_state(&mut self, state: StateVector) {
        self.state = state;
    }

    pub fn is_done(&self) -> bool {
        self.stepper.is_done()
    }

    pub fn stepper(&self) -> &S {
        &self.stepper
    }

    pub fn bounds(&self) -> &ProjectionBounds {
        &self.bounds
    }

    // ======================== CONSTRAINTS ========================

    pub fn lattice_system(&self) -> LatticeSystem {
        self.constraints.system
    }

    /// Regenerates the constraint table. The current state is left as is.
    pub fn set_lattice_system(&mut self, system: LatticeSystem) {
        self.constraints = ConstraintTable::for_system(system);
        self.stepper.set_ignored_dims(self.constraints.ignored_dims);
        debug!(
            "Lattice system set to {system}, ignored dims {:?}",
            self.constraints.ignored_dims
        );
    }

    pub fn constraints(&self) -> &ConstraintTable {
        &self.constraints
    }

    pub fn ignored_dims(&self) -> [bool; N_DIM] {
        self.constraints.ignored_dims
    }

    // ======================== STEPPING ========================

    /// Delegates the move to the stepping engine and, if it is accepted,
    /// re-projects the candidate through the projection-space constraints.
    pub fn step(&mut self, action: &CubeAction, backward: bool) -> StepOutcome {
        let outcome = self.stepper.step(&self.state, action, backward);
        if !outcome.valid {
            trace!("Step {action:?} rejected, state kept at {:?}", self.state);
            return StepOutcome {
                state: self.state,
                ..outcome
            };
        }

        self.state = self.constrain_state(&outcome.state);
        trace!("Committed state {:?}", self.state);
        StepOutcome {
            state: self.state,
            ..outcome
        }
    }

    pub fn mask_invalid_actions_forward(&self) -> ActionMask {
        self.stepper.mask_invalid_actions_forward(&self.state)
    }

    pub fn mask_invalid_actions_backward(&self) -> ActionMask {
        self.stepper.mask_invalid_actions_backward(&self.state)
    }

    /// state → projection → constraints → state
    pub fn constrain_state(&self, state: &StateVector) -> StateVector {
        let projection = self
            .constraints
            .projection
            .apply(&self.bounds.state_to_projection(state));
        self.bounds.projection_to_state(&projection)
    }

    // ======================== CONVERSIONS ========================

    /// Full forward pipeline, applying the constraints in both projection and
    /// lattice parameter space.
    pub fn state_to_lattice(&self, state: &StateVector) -> LatticeParameters {
        state_to_lattice(&self.bounds, &self.constraints, state)
    }

    /// Lattice parameters of the current state.
    pub fn lattice_parameters(&self) -> LatticeParameters {
        self.state_to_lattice(&self.state)
    }

    /// Inverse pipeline lattice → projection → state.
    pub fn parameters_to_state(&self, params: &LatticeParameters) -> Result<StateVector> {
        let projection = lattice_to_projection(params, self.logm_tolerance)?;
        Ok(self.bounds.projection_to_state(&projection))
    }

    pub fn lengths_angles_to_state(
        &self,
        lengths: [f64; 3],
        angles: [f64; 3],
    ) -> Result<StateVector> {
        self.parameters_to_state(&LatticeParameters::new(lengths, angles))
    }

    /// Valid iff every projection component, before constraints, lies in its bounds.
    pub fn is_valid(&self, state: &StateVector) -> bool {
        self.bounds.contains(&self.bounds.state_to_projection(state))
    }

    /// Lattice parameters of a batch of states, one row per state in input order.
    pub fn states_to_proxy(&self, states: &[StateVector]) -> DMatrix<f64> {
        let bounds = &self.bounds;
        let constraints = &self.constraints;

        #[cfg(feature = "parallel")]
        let rows: Vec<[f64; N_DIM]> = states
            .par_iter()
            .map(|state| state_to_lattice(bounds, constraints, state).to_array())
            .collect();
        #[cfg(not(feature = "parallel"))]
        let rows: Vec<[f64; N_DIM]> = states
            .iter()
            .map(|state| state_to_lattice(bounds, constraints, state).to_array())
            .collect();

        DMatrix::from_fn(rows.len(), N_DIM, |i, j| rows[i][j])
    }

    pub fn state_to_readable(&self, state: &StateVector) -> String {
        format_readable(&self.state_to_lattice(state))
    }

    pub fn readable_to_state(&self, readable: &str) -> Result<StateVector> {
        self.parameters_to_state(&parse_readable(readable)?)
    }
}

fn state_to_lattice(
    bounds: &ProjectionBounds,
    constraints: &ConstraintTable,
    state: &StateVector,
) -> LatticeParameters {
    let projection = constraints.projection.apply(&bounds.state_to_projection(state));
    let params = projection_to_lattice(&projection);
    LatticeParameters::from_array(constraints.lattice.apply(&params.to_array()))
}
