use astronum_core::{CoupledEquation, Sample, StateVector, Trace};

use super::{Error, Method};

/// Solver for a system of N ≥ 2 coupled first-order equations.
///
/// Equation `i` gives the derivative of variable `i` and may read every
/// variable of the system. The solver owns the variable vector and updates
/// it in two phases within each stage: it first computes the new value of
/// every variable from one snapshot, then publishes all of them together.
/// No equation ever sees a mix of old and new values, so the trajectory does
/// not depend on the order in which equations are declared.
///
/// The independent variable (usually time) starts at `0`. The trace records
/// `t` and every variable after each step.
///
/// # Example
///
/// ```
/// use astronum_solve::ode::CoupledSystem;
///
/// // p' = q, q' = -p
/// let equations: Vec<Box<dyn Fn(&[f64]) -> f64>> = vec![
///     Box::new(|v: &[f64]| v[1]),
///     Box::new(|v: &[f64]| -v[0]),
/// ];
/// let mut system = CoupledSystem::new(equations, vec![1.0, 0.0]).unwrap();
///
/// system.compute_batch(0.001, 1000).unwrap();
/// let last = system.trace().last().unwrap();
/// assert!((last.y[0] - 1.0_f64.cos()).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct CoupledSystem<E> {
    equations: Vec<E>,
    initial_conditions: Vec<f64>,
    state: StateVector,
    method: Method,
    trace: Trace<Vec<f64>>,
}

impl<E: CoupledEquation> CoupledSystem<E> {
    /// Creates a system advanced with the Cauchy (midpoint) rule.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TooFewEquations`] for fewer than two equations and
    /// [`Error::LengthMismatch`] if the number of initial conditions differs
    /// from the number of equations.
    pub fn new(equations: Vec<E>, initial_conditions: Vec<f64>) -> Result<Self, Error> {
        if equations.len() < 2 {
            return Err(Error::TooFewEquations {
                found: equations.len(),
            });
        }
        if equations.len() != initial_conditions.len() {
            return Err(Error::LengthMismatch {
                equations: equations.len(),
                initial_conditions: initial_conditions.len(),
            });
        }

        Ok(Self {
            equations,
            state: StateVector::new(initial_conditions.clone()),
            initial_conditions,
            method: Method::Cauchy,
            trace: Trace::new(),
        })
    }

    /// Replaces the update rule.
    #[must_use]
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Runs `iterations` steps of size `step` from `t = 0` and the initial
    /// conditions.
    ///
    /// The trace is replaced with `iterations + 1` samples: the initial state
    /// followed by the state after each step.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonPositiveStep`] if `step` is not finite and
    /// positive, and [`Error::ZeroIterations`] if `iterations` is zero.
    pub fn compute_batch(&mut self, step: f64, iterations: usize) -> Result<(), Error> {
        Error::check_step(step)?;
        if iterations == 0 {
            return Err(Error::ZeroIterations);
        }

        self.state.assign(&self.initial_conditions);
        self.trace = Trace::with_capacity(iterations.saturating_add(1));
        self.trace.push(0.0, self.initial_conditions.clone());

        let mut t = 0.0;
        for i in 1..=iterations {
            self.advance(t, step);
            t = i as f64 * step;
            self.trace.push(t, self.state.to_vec());
        }

        Ok(())
    }

    /// Advances one step of size `step` and returns the new sample.
    ///
    /// Continues from the last traced sample, so calls can follow a
    /// [`compute_batch`](Self::compute_batch) or each other. On an empty trace
    /// it starts from `t = 0` and the initial conditions, which are recorded
    /// first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonPositiveStep`] if `step` is not finite and
    /// positive.
    pub fn compute_next_step(&mut self, step: f64) -> Result<Sample<Vec<f64>>, Error> {
        Error::check_step(step)?;

        let t = match self.trace.last() {
            Some(last) => {
                self.state.assign(&last.y);
                last.x
            }
            None => {
                self.state.assign(&self.initial_conditions);
                self.trace.push(0.0, self.initial_conditions.clone());
                0.0
            }
        };

        self.advance(t, step);

        let sample = Sample {
            x: t + step,
            y: self.state.to_vec(),
        };
        self.trace.push(sample.x, sample.y.clone());
        Ok(sample)
    }

    /// Number of equations (and variables) in the system.
    #[must_use]
    pub fn len(&self) -> usize {
        self.equations.len()
    }

    /// Always `false`: a system holds at least two equations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.equations.is_empty()
    }

    #[must_use]
    pub fn method(&self) -> Method {
        self.method
    }

    #[must_use]
    pub fn initial_conditions(&self) -> &[f64] {
        &self.initial_conditions
    }

    /// Returns the current variable values.
    #[must_use]
    pub fn state(&self) -> &StateVector {
        &self.state
    }

    /// Returns the recorded `(t, variables)` samples.
    #[must_use]
    pub fn trace(&self) -> &Trace<Vec<f64>> {
        &self.trace
    }

    /// Formats the trace as a `t | y0 | y1 | …` table with 10 decimals.
    #[must_use]
    pub fn trace_report(&self) -> Option<String> {
        let labels: Vec<String> = std::iter::once("t".to_string())
            .chain((0..self.len()).map(|i| format!("y{i}")))
            .collect();
        let labels: Vec<&str> = labels.iter().map(String::as_str).collect();
        self.trace.report(&labels, 10)
    }

    /// Advances the state vector by one step from `t`.
    ///
    /// For every stage, the stage state is published to the state vector in
    /// full before any equation reads it, and the final values are written
    /// together once all of them are known.
    fn advance(&mut self, t: f64, step: f64) {
        let current = self.state.to_vec();
        let equations = &self.equations;
        let state = &mut self.state;

        let next = self.method.step(t, &current, step, |_, stage| {
            state.assign(stage);
            equations
                .iter()
                .map(|equation| equation.derivative(state.as_slice()))
                .collect()
        });

        self.state.assign(&next);
    }
}
