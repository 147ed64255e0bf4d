//! Zeros of real functions.

pub mod newton;
