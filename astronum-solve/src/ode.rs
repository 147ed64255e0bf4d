//! Fixed-step solvers for ordinary differential equations.
//!
//! Every solver separates *what* is integrated (an equation from
//! `astronum-core`) from *how* it is advanced (a [`Method`]). The
//! step-size/iteration-count pair comes from a [`StepPolicy`] when the solver
//! targets a final `x`, or is passed in directly for incremental stepping.

mod chained;
mod coupled;
mod error;
mod grid;
mod method;
mod scalar;
mod step_policy;

pub use chained::ChainedPair;
pub use coupled::CoupledSystem;
pub use error::Error;
pub use method::Method;
pub use scalar::ScalarSolver;
pub use step_policy::{
    ConfigError, DEFAULT_ITERATION_CAP, DEFAULT_STEP_SIZE, Resolution, StepPolicy,
};
