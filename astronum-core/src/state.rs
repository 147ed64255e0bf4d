use std::ops::{Deref, Index};

/// The variable vector of a coupled system.
///
/// Equations only ever see a borrowed snapshot (`&[f64]`) of this vector.
/// Writes go through [`StateVector::assign`], which replaces every component
/// at once, so a reader never observes a half-updated state.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateVector(Vec<f64>);

impl StateVector {
    /// Creates a state vector holding `values`.
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the vector holds no variables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the variables as a read-only snapshot.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Overwrites every variable with `values`.
    ///
    /// # Panics
    ///
    /// Panics if `values` does not have the same length as the vector.
    pub fn assign(&mut self, values: &[f64]) {
        self.0.copy_from_slice(values);
    }
}

impl Deref for StateVector {
    type Target = [f64];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Index<usize> for StateVector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<Vec<f64>> for StateVector {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}
