//! Equation traits consumed by the solvers.
//!
//! Each trait has a blanket implementation for the matching closure shape,
//! so callers usually pass closures and never name these traits.

/// A first-order equation `y' = f(x, y)`.
pub trait ScalarEquation {
    /// Returns `dy/dx` at `(x, y)`.
    fn derivative(&self, x: f64, y: f64) -> f64;
}

impl<F> ScalarEquation for F
where
    F: Fn(f64, f64) -> f64,
{
    fn derivative(&self, x: f64, y: f64) -> f64 {
        self(x, y)
    }
}

/// One half of a second-order equation split into two chained first-order
/// equations over the state `(x, y, z)`, where `z = y'`.
pub trait ChainedEquation {
    /// Returns the derivative of this equation's variable at `(x, y, z)`.
    fn derivative(&self, x: f64, y: f64, z: f64) -> f64;
}

impl<F> ChainedEquation for F
where
    F: Fn(f64, f64, f64) -> f64,
{
    fn derivative(&self, x: f64, y: f64, z: f64) -> f64 {
        self(x, y, z)
    }
}

/// One equation of a coupled first-order system.
///
/// The equation reads any variable of the system by index from a read-only
/// snapshot and returns the derivative of its own variable. It never writes
/// to the state; the solver decides when new values become visible.
pub trait CoupledEquation {
    /// Returns the derivative of this equation's variable given `variables`.
    fn derivative(&self, variables: &[f64]) -> f64;
}

impl<F> CoupledEquation for F
where
    F: Fn(&[f64]) -> f64,
{
    fn derivative(&self, variables: &[f64]) -> f64 {
        self(variables)
    }
}

/// A real function `f(x)`, used for root finding and quadrature.
pub trait Function {
    /// Evaluates the function at `x`.
    fn eval(&self, x: f64) -> f64;
}

impl<F> Function for F
where
    F: Fn(f64) -> f64,
{
    fn eval(&self, x: f64) -> f64 {
        self(x)
    }
}
