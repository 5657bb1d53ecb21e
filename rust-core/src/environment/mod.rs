// Environment module: the stateful side of the crate
// This module couples the hypercube stepping engine with the lattice constraints

// ======================== MODULE DECLARATIONS ========================
pub mod cube;
pub mod lattice_parameters;
pub mod readable;

// Test modules
mod _tests_cube;

// ======================== STEPPING ENGINE ========================
pub use cube::{
    ActionMask,       // struct - invalid-action mask (true = invalid) for moves and EOS
    ContinuousCube,   // struct - reference hypercube engine with ignored dimensions
    CubeAction,       // enum - Move(increments) or Eos
    HypercubeStepper, // trait - step/mask/ignored-dims contract consumed by the environment
    StepOutcome,      // struct - (state, applied action, valid)
};

// ======================== LATTICE PARAMETER ENVIRONMENT ========================
pub use lattice_parameters::LatticeParametersEnv; // struct - constrained lattice-parameter environment
// LatticeParametersEnv impl methods:
//   new(config: &EnvConfig) -> Result<Self>                         - with the reference ContinuousCube
//   with_stepper(config: &EnvConfig, stepper: S) -> Result<Self>     - with any HypercubeStepper
//   source() -> StateVector / reset(&mut self) / is_source(&self) -> bool
//   set_lattice_system(&mut self, system) / lattice_system(&self) -> LatticeSystem
//   step(&mut self, action: &CubeAction, backward: bool) -> StepOutcome - re-projects accepted states
//   state_to_lattice(&self, state) -> LatticeParameters              - both constraint passes
//   parameters_to_state(&self, params) -> Result<StateVector>         - via the matrix logarithm
//   is_valid(&self, state) -> bool                                  - projection within bounds
//   states_to_proxy(&self, states) -> DMatrix<f64>                  - [batch, 6], lengths then angles
//   state_to_readable(&self, state) -> String / readable_to_state(&self, text) -> Result<StateVector>

// ======================== READABLE FORMAT ========================
pub use readable::{
    format_readable, // fn(params: &LatticeParameters) -> String - "(a, b, c), (alpha, beta, gamma)"
    parse_readable,  // fn(readable: &str) -> Result<LatticeParameters>
};
