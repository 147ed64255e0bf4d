//! Core traits and types for the astronum solvers.
//!
//! This crate defines the shared abstractions that the numerical recipes in
//! `astronum-solve` build on:
//!
//! - [`ScalarEquation`], [`ChainedEquation`], [`CoupledEquation`],
//!   [`Function`]: the "what equation" side of a solve, implemented for
//!   plain closures
//! - [`StateVector`]: the explicit variable vector a coupled system reads
//! - [`Trace`] and [`Sample`]: the opt-in record of intermediate states,
//!   with a fixed-width text [`Report`]
//! - [`angle`]: degree/radian helpers for the models that feed the solvers

pub mod angle;
mod equation;
mod report;
mod state;
mod trace;

pub use equation::{ChainedEquation, CoupledEquation, Function, ScalarEquation};
pub use report::Report;
pub use state::StateVector;
pub use trace::{Columns, MAX_RESERVED_SAMPLES, Sample, Trace};
