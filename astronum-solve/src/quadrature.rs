//! Definite integrals of real functions.

pub mod simpson;
