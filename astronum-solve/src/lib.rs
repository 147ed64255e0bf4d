//! Numerical recipes built on `astronum-core`.
//!
//! - [`ode`]: fixed-step solvers for a single first-order equation
//!   ([`ode::ScalarSolver`]), a second-order equation split into a chained
//!   pair ([`ode::ChainedPair`]), and coupled first-order systems
//!   ([`ode::CoupledSystem`]), all sharing the [`ode::Method`] update rules
//!   and the [`ode::StepPolicy`] resolution rules
//! - [`root`]: zero finding ([`root::newton`])
//! - [`quadrature`]: definite integrals ([`quadrature::simpson`])
//!
//! Infeasible requests (no starting point, a target before the start, equal
//! integration bounds) return `None`. Malformed construction returns an
//! error. Out-of-range setter arguments are ignored and logged through the
//! [`log`] facade.

pub mod ode;
pub mod quadrature;
pub mod root;
