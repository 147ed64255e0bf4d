use astronum_core::{ChainedEquation, Trace};

use super::grid::grid;
use super::{Error, Method, Resolution, StepPolicy};

/// Solver for a second-order equation split into two chained first-order
/// equations over the state `(x, y, z)`:
///
/// ```text
/// y' = first(x, y, z)
/// z' = second(x, y, z)
/// ```
///
/// Both equations are always evaluated at the same state, so the
/// predictor-corrector rules never mix a new `y` with an old `z`.
#[derive(Debug, Clone)]
pub struct ChainedPair<F, G> {
    first: F,
    second: G,
    method: Method,
    policy: StepPolicy,
    start: Option<[f64; 3]>,
    trace: Trace<[f64; 2]>,
}

impl<F, G> ChainedPair<F, G>
where
    F: ChainedEquation,
    G: ChainedEquation,
{
    /// Creates a solver for `y' = first(x, y, z)`, `z' = second(x, y, z)`.
    pub fn new(first: F, second: G, method: Method) -> Self {
        Self {
            first,
            second,
            method,
            policy: StepPolicy::default(),
            start: None,
            trace: Trace::new(),
        }
    }

    /// Sets the initial state from `[x0, y0, z0]`.
    ///
    /// Any other length is ignored: the previous starting point, or the lack
    /// of one, is kept and a warning is logged.
    pub fn set_starting_point(&mut self, point: &[f64]) {
        match <[f64; 3]>::try_from(point) {
            Ok(point) => self.start = Some(point),
            Err(_) => log::warn!(
                "ignoring starting point with {} values, expected [x0, y0, z0]",
                point.len()
            ),
        }
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

    /// Integrates from the starting point to `x_target` and returns `[y, z]`
    /// there.
    ///
    /// Follows the same rules as
    /// [`ScalarSolver::solve_at`](super::ScalarSolver::solve_at): the last
    /// increment lands exactly on `x_target`, and `None` is returned when no
    /// starting point is set, the target is before it, or the policy
    /// resolves to one iteration or fewer.
    pub fn solve_at(&mut self, x_target: f64, capture_trace: bool) -> Option<[f64; 2]> {
        self.trace = Trace::new();

        let Some([x0, y0, z0]) = self.start else {
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
            self.trace.push(x0, [y0, z0]);
        }

        let mut x = x0;
        let mut yz = [y0, z0];
        for x_next in grid(x0, x_target, resolution) {
            yz = self.step(x, yz, x_next - x);
            x = x_next;
            if capture_trace {
                self.trace.push(x, yz);
            }
        }

        Some(yz)
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
    pub fn starting_point(&self) -> Option<[f64; 3]> {
        self.start
    }

    /// Returns the recorded `(x, [y, z])` samples.
    #[must_use]
    pub fn trace(&self) -> &Trace<[f64; 2]> {
        &self.trace
    }

    /// Formats the trace as an `x | y | z` table with 8 decimals.
    #[must_use]
    pub fn trace_report(&self) -> Option<String> {
        self.trace.report(&["x", "y", "z"], 8)
    }

    fn step(&self, x: f64, [y, z]: [f64; 2], h: f64) -> [f64; 2] {
        let next = self.method.step(x, &[y, z], h, |x, state| {
            vec![
                self.first.derivative(x, state[0], state[1]),
                self.second.derivative(x, state[0], state[1]),
            ]
        });
        [next[0], next[1]]
    }
}

impl<E: ChainedEquation> ChainedPair<E, E> {
    /// Creates a solver from a list of equations, which must hold exactly
    /// two: `y'` first, then `z'`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EquationCount`] if `equations` does not hold exactly
    /// two equations.
    pub fn from_equations(equations: Vec<E>, method: Method) -> Result<Self, Error> {
        let found = equations.len();
        let [first, second] = <[E; 2]>::try_from(equations)
            .map_err(|_| Error::EquationCount { expected: 2, found })?;
        Ok(Self::new(first, second, method))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    /// Harmonic oscillator y'' = -y as y' = z, z' = -y.
    fn velocity(_x: f64, _y: f64, z: f64) -> f64 {
        z
    }

    fn restoring(_x: f64, y: f64, _z: f64) -> f64 {
        -y
    }

    #[test]
    fn oscillator_follows_cosine() {
        let tolerances = [2e-2, 1e-4, 1e-4, 1e-9];
        for (method, tolerance) in Method::ALL.into_iter().zip(tolerances) {
            let mut pair = ChainedPair::new(velocity, restoring, method);
            pair.set_starting_point(&[0.0, 1.0, 0.0]);
            pair.set_step_size(0.01);

            let [y, z] = pair.solve_at(2.0, false).expect("feasible");

            assert_relative_eq!(y, 2.0_f64.cos(), epsilon = tolerance);
            assert_relative_eq!(z, -(2.0_f64.sin()), epsilon = tolerance);
        }
    }

    #[test]
    fn heun_step_uses_predicted_state_for_both_equations() {
        // One Heun step of h = 0.5 from (0, 1, 0) by hand:
        // predictor (y, z) = (1, -0.5); rates there (-0.5, -1).
        // y = 1 + 0.25 * (0 - 0.5) = 0.875, z = 0 + 0.25 * (-1 - 1) = -0.5.
        let mut pair = ChainedPair::new(velocity, restoring, Method::Heun);
        pair.set_starting_point(&[0.0, 1.0, 0.0]);
        pair.set_iteration_count(2);

        pair.solve_at(1.0, true).expect("feasible");
        let first = pair.trace().samples()[1];

        assert_relative_eq!(first.x, 0.5);
        assert_relative_eq!(first.y[0], 0.875);
        assert_relative_eq!(first.y[1], -0.5);
    }

    #[test]
    fn cauchy_step_uses_midpoint_state_for_both_equations() {
        // Midpoint of h = 0.5 from (0, 1, 0): (y, z) = (1, -0.25).
        // y = 1 + 0.5 * (-0.25) = 0.875, z = 0 + 0.5 * (-1) = -0.5.
        let mut pair = ChainedPair::new(velocity, restoring, Method::Cauchy);
        pair.set_starting_point(&[0.0, 1.0, 0.0]);
        pair.set_iteration_count(2);

        pair.solve_at(1.0, true).expect("feasible");
        let first = pair.trace().samples()[1];

        assert_relative_eq!(first.y[0], 0.875);
        assert_relative_eq!(first.y[1], -0.5);
    }

    #[test]
    fn malformed_starting_point_is_rejected() {
        let mut pair = ChainedPair::new(velocity, restoring, Method::RungeKutta4);

        pair.set_starting_point(&[0.0, 1.0]);
        assert_eq!(pair.starting_point(), None);
        assert_eq!(pair.solve_at(1.0, false), None);

        pair.set_starting_point(&[0.0, 1.0, 0.0]);
        pair.set_starting_point(&[0.0, 1.0, 0.0, 4.0]);
        assert_eq!(pair.starting_point(), Some([0.0, 1.0, 0.0]));
    }

    #[test]
    fn infeasible_requests_return_none() {
        let mut pair = ChainedPair::new(velocity, restoring, Method::Euler);
        pair.set_starting_point(&[1.0, 1.0, 0.0]);

        assert_eq!(pair.solve_at(0.0, true), None);

        pair.set_iteration_count(1);
        pair.set_step_size(2.0);
        assert_eq!(pair.solve_at(2.5, true), None);
        assert!(pair.trace().is_empty());
    }

    #[test]
    fn last_sample_lands_on_target() {
        // 9 * (2.9 / 9) rounds to 2.8999999999999995.
        let mut pair = ChainedPair::new(velocity, restoring, Method::Heun);
        pair.set_starting_point(&[0.0, 1.0, 0.0]);
        pair.set_iteration_count(9);

        pair.solve_at(2.9, true).expect("feasible");

        assert_eq!(pair.trace().len(), 10);
        assert_eq!(pair.trace().last().expect("non-empty").x, 2.9);
    }

    #[test]
    fn trace_records_start_and_every_step() {
        let mut pair = ChainedPair::new(velocity, restoring, Method::RungeKutta4);
        pair.set_starting_point(&[0.0, 1.0, 0.0]);
        pair.set_iteration_count(20);

        let last = pair.solve_at(std::f64::consts::PI, true).expect("feasible");

        let trace = pair.trace();
        assert_eq!(trace.len(), 21);
        assert_eq!(trace.samples()[0].y, [1.0, 0.0]);
        assert_eq!(trace.last().expect("non-empty").y, last);
        assert_relative_eq!(last[0], -1.0, epsilon = 1e-5);

        let report = pair.trace_report().expect("trace captured");
        assert_eq!(report.lines().count(), 22);
    }

    #[test]
    fn from_equations_requires_exactly_two() {
        type Boxed = Box<dyn Fn(f64, f64, f64) -> f64>;

        let three: Vec<Boxed> = vec![
            Box::new(velocity),
            Box::new(restoring),
            Box::new(velocity),
        ];
        let Err(err) = ChainedPair::from_equations(three, Method::Euler) else {
            panic!("three equations should be rejected");
        };
        assert_eq!(err, Error::EquationCount { expected: 2, found: 3 });

        let two: Vec<Boxed> = vec![Box::new(velocity), Box::new(restoring)];
        let mut pair =
            ChainedPair::from_equations(two, Method::RungeKutta4).expect("two equations");
        pair.set_starting_point(&[0.0, 0.0, 1.0]);
        pair.set_step_size(0.01);

        let [y, _] = pair.solve_at(1.0, false).expect("feasible");
        assert_relative_eq!(y, 1.0_f64.sin(), epsilon = 1e-9);
    }
}
