use thiserror::Error;

/// Errors raised when an ODE solver is built or driven with malformed
/// arguments.
///
/// These are caller errors. Infeasible solve requests, such as a target
/// before the starting point, are reported as `None` instead.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("a coupled system needs at least 2 equations, found {found}")]
    TooFewEquations { found: usize },

    #[error("{equations} equations but {initial_conditions} initial conditions")]
    LengthMismatch {
        equations: usize,
        initial_conditions: usize,
    },

    #[error("expected {expected} equations, found {found}")]
    EquationCount { expected: usize, found: usize },

    #[error("step size must be finite and positive, got {step}")]
    NonPositiveStep { step: f64 },

    #[error("iteration count must be at least 1")]
    ZeroIterations,
}

impl Error {
    /// Checks that `step` can advance a solution.
    pub(super) fn check_step(step: f64) -> Result<(), Self> {
        if step.is_finite() && step > 0.0 {
            Ok(())
        } else {
            Err(Self::NonPositiveStep { step })
        }
    }
}
