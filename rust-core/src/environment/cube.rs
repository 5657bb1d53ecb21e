//! Continuous hypercube stepping engine.
//!
//! The lattice environment only relies on the [`HypercubeStepper`] trait;
//! [`ContinuousCube`] is the reference engine it ships with.

use log::trace;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::LATTICE_TOLERANCE;
use crate::interfaces::{N_DIM, StateVector};

/// An action on the hypercube.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CubeAction {
    /// Non-negative per-dimension increments (subtracted when stepping backward).
    Move([f64; N_DIM]),
    /// End of trajectory.
    Eos,
}

/// Result of a step: the candidate state, the action actually applied and
/// whether the step was accepted. Rejected steps carry the unchanged state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutcome {
    pub state: StateVector,
    pub action: CubeAction,
    pub valid: bool,
}

/// Invalid-action mask; `true` marks an action that may not be taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionMask {
    pub moves: bool,
    pub eos: bool,
}

pub trait HypercubeStepper {
    fn step(&mut self, state: &StateVector, action: &CubeAction, backward: bool) -> StepOutcome;

    fn mask_invalid_actions_forward(&self, state: &StateVector) -> ActionMask;

    fn mask_invalid_actions_backward(&self, state: &StateVector) -> ActionMask;

    fn set_ignored_dims(&mut self, ignored_dims: [bool; N_DIM]);

    fn ignored_dims(&self) -> [bool; N_DIM];

    fn is_done(&self) -> bool;

    fn reset(&mut self);
}

#[derive(Debug, Clone, Default)]
pub struct ContinuousCube {
    ignored_dims: [bool; N_DIM],
    done: bool,
}

impl ContinuousCube {
    pub fn new(ignored_dims: [bool; N_DIM]) -> Self {
        Self {
            ignored_dims,
            done: false,
        }
    }

    /// Samples uniform increments on the non-ignored dimensions, each bounded by
    /// `max_increment` and by the room left before the cube boundary.
    pub fn random_action<R: Rng + ?Sized>(
        &self,
        state: &StateVector,
        backward: bool,
        max_increment: f64,
        rng: &mut R,
    ) -> CubeAction {
        let increments = std::array::from_fn(|i| {
            if self.ignored_dims[i] {
                return 0.0;
            }
            let room = if backward { state[i] } else { 1.0 - state[i] };
            rng.gen::<f64>() * max_increment.min(room.max(0.0))
        });
        CubeAction::Move(increments)
    }

    fn has_room(&self, state: &StateVector, backward: bool) -> bool {
        state
            .iter()
            .zip(self.ignored_dims.iter())
            .filter(|(_, ignored)| !**ignored)
            .any(|(value, _)| {
                if backward {
                    *value > LATTICE_TOLERANCE
                } else {
                    *value < 1.0 - LATTICE_TOLERANCE
                }
            })
    }

    fn apply_move(
        &self,
        state: &StateVector,
        increments: &[f64; N_DIM],
        backward: bool,
    ) -> Option<([f64; N_DIM], StateVector)> {
        let mut applied = [0.0; N_DIM];
        let mut next = *state;
        for i in 0..N_DIM {
            if self.ignored_dims[i] {
                continue;
            }
            let increment = increments[i];
            if !increment.is_finite() || increment < 0.0 {
                return None;
            }
            let value = if backward {
                state[i] - increment
            } else {
                state[i] + increment
            };
            if value < -LATTICE_TOLERANCE || value > 1.0 + LATTICE_TOLERANCE {
                return None;
            }
            applied[i] = increment;
            // snap onto the faces so the source stays reachable despite rounding
            next[i] = if value < LATTICE_TOLERANCE {
                0.0
            } else if value > 1.0 - LATTICE_TOLERANCE {
                1.0
            } else {
                value
            };
        }
        Some((applied, next))
    }
}

impl HypercubeStepper for ContinuousCube {
    fn step(&mut self, state: &StateVector, action: &CubeAction, backward: bool) -> StepOutcome {
        let rejected = StepOutcome {
            state: *state,
            action: *action,
            valid: false,
        };

        match (action, backward) {
            (CubeAction::Eos, false) => {
                if self.done {
                    return rejected;
                }
                self.done = true;
                StepOutcome { valid: true, ..rejected }
            }
            (CubeAction::Eos, true) => {
                if !self.done {
                    return rejected;
                }
                self.done = false;
                StepOutcome { valid: true, ..rejected }
            }
            (CubeAction::Move(increments), _) => {
                if self.done {
                    return rejected;
                }
                match self.apply_move(state, increments, backward) {
                    Some((applied, next)) => StepOutcome {
                        state: next,
                        action: CubeAction::Move(applied),
                        valid: true,
                    },
                    None => {
                        trace!("Rejected cube move {increments:?} (backward: {backward})");
                        rejected
                    }
                }
            }
        }
    }

    fn mask_invalid_actions_forward(&self, state: &StateVector) -> ActionMask {
        if self.done {
            return ActionMask {
                moves: true,
                eos: true,
            };
        }
        ActionMask {
            moves: !self.has_room(state, false),
            eos: false,
        }
    }

    fn mask_invalid_actions_backward(&self, state: &StateVector) -> ActionMask {
        if self.done {
            return ActionMask {
                moves: true,
                eos: false,
            };
        }
        ActionMask {
            moves: !self.has_room(state, true),
            eos: true,
        }
    }

    fn set_ignored_dims(&mut self, ignored_dims: [bool; N_DIM]) {
        self.ignored_dims = ignored_dims;
    }

    fn ignored_dims(&self) -> [bool; N_DIM] {
        self.ignored_dims
    }

    fn is_done(&self) -> bool {
        self.done
    }

    fn reset(&mut self) {
        self.done = false;
    }
}
