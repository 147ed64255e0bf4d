use astronum_core::{ScalarEquation, Trace};

use super::grid::grid;
use super::{Method, Resolution, StepPolicy};

/// Solver for a single first-order equation `y' = f(x, y)`.
///
/// Supports two styles of use:
///
/// - [`solve_at`](Self::solve_at) integrates from the starting point to a
///   target `x`, with step size and iteration count taken from the
///   [`StepPolicy`].
/// - [`advance_one_step`](Self::advance_one_step) applies exactly one step of
///   a caller-chosen size, for callers that adjust the step between calls.
///
/// # Example
///
/// ```
/// use astronum_solve::ode::{Method, ScalarSolver};
///
/// let mut solver = ScalarSolver::new(|x: f64, y: f64| -2.0 * x * y, Method::RungeKutta4);
/// solver.set_starting_point(0.0, 1.0);
/// solver.set_step_size(0.01);
///
/// let y = solver.solve_at(1.0, false).unwrap();
/// assert!((y - (-1.0_f64).exp()).abs() < 1e-8);
/// ```
#[derive(Debug, Clone)]
pub struct ScalarSolver<E> {
    equation: E,
    method: Method,
    policy: StepPolicy,
    start: Option<(f64, f64)>,
    trace: Trace<f64>,
}

impl<E: ScalarEquation> ScalarSolver<E> {
    /// Creates a solver for `equation` advanced with `method`.
    pub fn new(equation: E, method: Method) -> Self {
        Self {
            equation,
            method,
            policy: StepPolicy::default(),
            start: None,
            trace: Trace::new(),
        }
    }

    /// Sets the initial condition `y(x0) = y0`, replacing any previous one.
    pub fn set_starting_point(&mut self, x0: f64, y0: f64) {
        self.start = Some((x0, y0));
    }

    /// Uses an explicit step size; see [`StepPolicy::set_step_size`].
    pub fn set_step_size(&mut self, step: f64) {
        self.policy.set_step_size(step);
    }

    /// Uses an explicit iteration count; see
    /// [`StepPolicy::set_iteration_count`].
    pub fn set_iteration_count(&mut self, iterations: usize) {
        self.policy.set_iteration_count(iterations);
    }

    /// Integrates from the starting point to `x_target` and returns `y`
    /// there.
    ///
    /// The last increment is shortened when needed so the solution lands
    /// exactly on `x_target`. With `capture_trace`, every visited `(x, y)`
    /// is recorded, starting point included; otherwise the trace is cleared.
    ///
    /// Returns `None` if no starting point is set, if `x_target` is before
    /// the starting point, or if the policy resolves to one iteration or
    /// fewer.
    pub fn solve_at(&mut self, x_target: f64, capture_trace: bool) -> Option<f64> {
        self.trace = Trace::new();

        let Some((x0, y0)) = self.start else {
            log::debug!("cannot solve at x = {x_target}: no starting point");
            return None;
        };
        if x_target < x0 {
            log::debug!("cannot solve at x = {x_target}: before starting point x0 = {x0}");
            return None;
        }
        let resolution = self.policy.resolve(x0, x_target);
        let Resolution { step, iterations } = resolution;
        if iterations <= 1 {
            log::debug!("cannot solve at x = {x_target}: {iterations} iteration(s) with {step}");
            return None;
        }

        if capture_trace {
            self.trace = Trace::with_capacity(iterations.saturating_add(2));
            self.trace.push(x0, y0);
        }

        let (mut x, mut y) = (x0, y0);
        for x_next in grid(x0, x_target, resolution) {
            y = self.step(x, y, x_next - x);
            x = x_next;
            if capture_trace {
                self.trace.push(x, y);
            }
        }

        Some(y)
    }

    /// Applies one step of size `increment` from `(x, y)`, ignoring the step
    /// policy and the starting point.
    ///
    /// With `capture_trace`, the new point is appended to the current trace.
    pub fn advance_one_step(
        &mut self,
        x: f64,
        y: f64,
        increment: f64,
        capture_trace: bool,
    ) -> (f64, f64) {
        let next = (x + increment, self.step(x, y, increment));
        if capture_trace {
            self.trace.push(next.0, next.1);
        }
        next
    }

    /// Returns the equation being solved.
    pub fn equation(&self) -> &E {
        &self.equation
    }

    #[must_use]
    pub fn method(&self) -> Method {
        self.method
    }

    #[must_use]
    pub fn policy(&self) -> StepPolicy {
        self.policy
    }

    #[must_use]
    pub fn starting_point(&self) -> Option<(f64, f64)> {
        self.start
    }

    /// Returns the recorded `(x, y)` samples.
    #[must_use]
    pub fn trace(&self) -> &Trace<f64> {
        &self.trace
    }

    /// Formats the trace as an `x | y` table with 8 decimals.
    #[must_use]
    pub fn trace_report(&self) -> Option<String> {
        self.trace.report(&["x", "y"], 8)
    }

    fn step(&self, x: f64, y: f64, h: f64) -> f64 {
        let next = self.method.step(x, &[y], h, |x, y| {
            vec![self.equation.derivative(x, y[0])]
        });
        next[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn gaussian(x: f64, y: f64) -> f64 {
        -2.0 * x * y
    }

    fn exact(x: f64) -> f64 {
        (-x * x).exp()
    }

    #[test]
    fn every_method_tracks_gaussian() {
        let tolerances = [2e-3, 1e-4, 1e-4, 2e-9];
        for (method, tolerance) in Method::ALL.into_iter().zip(tolerances) {
            let mut solver = ScalarSolver::new(gaussian, method);
            solver.set_starting_point(0.0, 1.0);
            solver.set_step_size(0.01);

            let y = solver.solve_at(1.5, false).expect("feasible");
            assert_relative_eq!(y, exact(1.5), epsilon = tolerance);
        }
    }

    #[test]
    fn euler_matches_hand_computation() {
        // y' = y with h = 0.5 over [0, 1]: (1 + 0.5)^2.
        let mut solver = ScalarSolver::new(|_x: f64, y: f64| y, Method::Euler);
        solver.set_starting_point(0.0, 1.0);
        solver.set_iteration_count(2);

        assert_relative_eq!(solver.solve_at(1.0, false).expect("feasible"), 2.25);
    }

    #[test]
    fn infeasible_requests_return_none() {
        let mut solver = ScalarSolver::new(gaussian, Method::Heun);
        assert_eq!(solver.solve_at(1.0, true), None, "no starting point");

        solver.set_starting_point(1.0, 1.0);
        assert_eq!(solver.solve_at(0.5, true), None, "target before start");

        solver.set_step_size(0.5);
        assert_eq!(solver.solve_at(1.6, true), None, "single iteration");

        assert!(solver.trace().is_empty());
    }

    #[test]
    fn trace_holds_every_step_including_start() {
        let mut solver = ScalarSolver::new(gaussian, Method::Cauchy);
        solver.set_starting_point(0.0, 1.0);
        solver.set_iteration_count(10);

        let y = solver.solve_at(1.0, true).expect("feasible");
        let trace = solver.trace();

        assert_eq!(trace.len(), 11);
        assert_eq!(trace.samples()[0].x, 0.0);
        assert_eq!(trace.samples()[0].y, 1.0);
        let last = trace.last().expect("non-empty");
        assert_relative_eq!(last.x, 1.0);
        assert_eq!(last.y, y);
    }

    #[test]
    fn last_step_is_clamped_to_target() {
        let mut solver = ScalarSolver::new(|_x: f64, _y: f64| 1.0, Method::Euler);
        solver.set_starting_point(0.0, 0.0);
        solver.set_step_size(0.3);

        let y = solver.solve_at(1.0, true).expect("feasible");

        assert_relative_eq!(y, 1.0, epsilon = 1e-12);
        let xs: Vec<f64> = solver.trace().iter().map(|s| s.x).collect();
        assert_eq!(xs.len(), 5);
        assert_eq!(*xs.last().expect("non-empty"), 1.0);
        assert_relative_eq!(xs[4] - xs[3], 0.1, epsilon = 1e-12);
    }

    #[test]
    fn last_sample_lands_on_target() {
        // 3 * (0.9 / 3) rounds to 0.8999999999999999.
        let mut solver = ScalarSolver::new(|_x: f64, y: f64| y, Method::Euler);
        solver.set_starting_point(0.0, 1.0);
        solver.set_iteration_count(3);

        solver.solve_at(0.9, true).expect("feasible");

        assert_eq!(solver.trace().len(), 4);
        assert_eq!(solver.trace().last().expect("non-empty").x, 0.9);
    }

    #[test]
    fn rounding_does_not_add_a_sliver_step() {
        let mut solver = ScalarSolver::new(gaussian, Method::Euler);
        solver.set_starting_point(0.0, 1.0);
        solver.set_step_size(0.1);

        solver.solve_at(1.8, true).expect("feasible");

        assert_eq!(solver.trace().len(), 19);
        assert_eq!(solver.trace().last().expect("non-empty").x, 1.8);
    }

    #[test]
    fn solving_without_trace_clears_previous_trace() {
        let mut solver = ScalarSolver::new(gaussian, Method::Euler);
        solver.set_starting_point(0.0, 1.0);
        solver.set_iteration_count(4);

        solver.solve_at(1.0, true).expect("feasible");
        assert_eq!(solver.trace().len(), 5);

        solver.solve_at(1.0, false).expect("feasible");
        assert!(solver.trace().is_empty());
        assert_eq!(solver.trace_report(), None);
    }

    #[test]
    fn advance_one_step_ignores_policy() {
        let mut solver = ScalarSolver::new(|_x: f64, y: f64| y, Method::RungeKutta4);
        solver.set_iteration_count(1_000);

        let (x, y) = solver.advance_one_step(2.0, 1.0, 0.1, true);
        let (x, y) = solver.advance_one_step(x, y, 0.2, true);

        // RK4 on y' = y multiplies by the Taylor polynomial of e^h.
        let growth = |h: f64| 1.0 + h + h * h / 2.0 + h.powi(3) / 6.0 + h.powi(4) / 24.0;
        assert_relative_eq!(x, 2.3, epsilon = 1e-12);
        assert_relative_eq!(y, growth(0.1) * growth(0.2), epsilon = 1e-14);
        assert_eq!(solver.trace().len(), 2);
        assert_eq!(solver.starting_point(), None);
    }

    #[test]
    fn report_lists_trace_rows() {
        let mut solver = ScalarSolver::new(gaussian, Method::Heun);
        solver.set_starting_point(0.0, 1.0);
        solver.set_iteration_count(2);
        solver.solve_at(1.0, true).expect("feasible");

        let report = solver.trace_report().expect("trace captured");
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].split_whitespace().collect::<Vec<_>>(), ["x", "y"]);
        assert!(lines[1].starts_with("0.00000000"));
        assert!(lines[3].starts_with("1.00000000"));
    }
}
