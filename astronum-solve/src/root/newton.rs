//! Newton-Raphson iteration for a zero of `f`, given its derivative `f'`.

mod config;
mod solution;

pub use config::{Config, ConfigError, DEFAULT_MAX_ITERATIONS, DEFAULT_PRECISION};
pub use solution::{Iterate, Solution, Status};

use astronum_core::{Function, Report};

/// Finds a zero of a function with the Newton-Raphson update
/// `x ← x − f(x) / f'(x)`.
///
/// # Example
///
/// ```
/// use astronum_solve::root::newton::{NewtonRaphson, Status};
///
/// let mut solver = NewtonRaphson::new(|x: f64| x * x - 2.0, |x: f64| 2.0 * x);
/// solver.set_precision(1e-10);
///
/// let solution = solver.solve_for(1.0, false).unwrap();
/// assert_eq!(solution.status, Status::Converged);
/// assert!((solution.root - 2.0_f64.sqrt()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct NewtonRaphson<F, D> {
    function: F,
    derivative: D,
    config: Config,
    start: Option<f64>,
    trace: Vec<Iterate>,
}

impl<F: Function, D: Function> NewtonRaphson<F, D> {
    /// Creates a solver for `function` with the default [`Config`] and no
    /// starting point.
    pub fn new(function: F, derivative: D) -> Self {
        Self {
            function,
            derivative,
            config: Config::default(),
            start: None,
            trace: Vec::new(),
        }
    }

    pub fn set_starting_point(&mut self, x0: f64) {
        self.start = Some(x0);
    }

    /// Sets the convergence precision and restores the default cap.
    ///
    /// A precision that is not finite and positive is ignored with a warning.
    pub fn set_precision(&mut self, precision: f64) {
        match Config::with_precision(precision) {
            Ok(config) => self.config = config,
            Err(err) => log::warn!("ignoring precision, keeping {:?}: {err}", self.config),
        }
    }

    /// Sets the iteration cap and restores the default precision.
    ///
    /// A cap of 0 or 1 is ignored with a warning.
    pub fn set_max_iterations(&mut self, max_iterations: usize) {
        match Config::with_max_iterations(max_iterations) {
            Ok(config) => self.config = config,
            Err(err) => log::warn!("ignoring iteration cap, keeping {:?}: {err}", self.config),
        }
    }

    /// Solves from the stored starting point.
    ///
    /// Returns `None` if no starting point has been set, or for the same
    /// reasons as [`solve_for`](Self::solve_for).
    pub fn solve(&mut self, capture_trace: bool) -> Option<Solution> {
        let Some(x0) = self.start else {
            log::debug!("no starting point set");
            return None;
        };
        self.solve_for(x0, capture_trace)
    }

    /// Solves from `x0`, which also becomes the stored starting point.
    ///
    /// Iteration stops when two successive iterates differ by at most the
    /// configured precision, or when the cap is reached. When
    /// `capture_trace` is set, every iterate is recorded; otherwise the
    /// trace is left empty.
    ///
    /// Returns `None` if an update is not finite, as happens when the
    /// derivative vanishes.
    pub fn solve_for(&mut self, x0: f64, capture_trace: bool) -> Option<Solution> {
        self.start = Some(x0);
        self.trace.clear();

        let mut zero = x0;
        for iteration in 1..=self.config.max_iterations() {
            let next = zero - self.function.eval(zero) / self.derivative.eval(zero);
            if !next.is_finite() {
                log::debug!("non-finite update at iteration {iteration} from x = {zero}");
                return None;
            }
            if capture_trace {
                self.trace.push(Iterate { iteration, x: next });
            }

            let converged = (next - zero).abs() <= self.config.precision();
            zero = next;
            if converged {
                return Some(Solution {
                    status: Status::Converged,
                    root: zero,
                    iterations: iteration,
                });
            }
        }

        Some(Solution {
            status: Status::MaxIterations,
            root: zero,
            iterations: self.config.max_iterations(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn starting_point(&self) -> Option<f64> {
        self.start
    }

    /// Returns the iterates recorded by the last traced solve.
    #[must_use]
    pub fn trace(&self) -> &[Iterate] {
        &self.trace
    }

    /// Formats the trace as an `Iteration | x` table with 8 decimals.
    ///
    /// Iteration numbers are zero-padded to a common width. Returns `None`
    /// when nothing was traced.
    #[must_use]
    pub fn trace_report(&self) -> Option<String> {
        if self.trace.is_empty() {
            return None;
        }

        let digits = self.trace.len().to_string().len();
        let mut report = Report::new(8).header(&["Iteration", "x"]);
        for step in &self.trace {
            let label = format!("{:0digits$}", step.iteration);
            report.labeled_row(&label, &[step.x]);
        }
        Some(report.finish())
    }
}
