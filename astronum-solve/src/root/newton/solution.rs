/// Indicates whether the solver converged or hit the iteration cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Two successive iterates were within the configured precision.
    Converged,
    /// Reached the iteration cap without converging.
    MaxIterations,
}

/// The result of a Newton-Raphson solve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Final solver status.
    pub status: Status,
    /// Last iterate.
    pub root: f64,
    /// Number of updates performed.
    pub iterations: usize,
}

/// One recorded update of the solver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Iterate {
    /// Update counter, starting at 1.
    pub iteration: usize,
    /// Iterate produced by this update.
    pub x: f64,
}
