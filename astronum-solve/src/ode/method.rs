/// Update rule used to advance a solution by one step.
///
/// Each rule evaluates the derivatives of *all* components at one complete
/// state before forming the next state, so the result never depends on the
/// order in which equations are declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Method {
    /// Explicit Euler method.
    ///
    /// `y₁ = y₀ + h·f(x₀, y₀)`. First order and the cheapest rule, with one
    /// evaluation per step. Mostly useful as a baseline.
    Euler,

    /// Cauchy (midpoint) predictor-corrector.
    ///
    /// Predicts the state half a step ahead, then takes the full step with
    /// the derivative evaluated at that midpoint. Second order, two
    /// evaluations per step.
    Cauchy,

    /// Heun (trapezoidal) predictor-corrector.
    ///
    /// Predicts the end of the step with Euler, then corrects with the
    /// average of the derivatives at the start and at the predicted end.
    /// Second order, two evaluations per step.
    Heun,

    /// Classic fixed-step 4th-order Runge–Kutta method.
    ///
    /// Four stages combined with weights (1, 2, 2, 1)/6. The most accurate
    /// rule offered here for a given step size.
    RungeKutta4,
}

impl Method {
    /// Advances the state `y` at `x` by one step of size `h`.
    ///
    /// `rates(x, y)` must return the derivative of every component of `y`,
    /// all evaluated at that same state. The returned vector has the length
    /// of `y`.
    pub fn step<F>(self, x: f64, y: &[f64], h: f64, mut rates: F) -> Vec<f64>
    where
        F: FnMut(f64, &[f64]) -> Vec<f64>,
    {
        match self {
            Method::Euler => {
                let k = rates(x, y);
                offset(y, &k, h)
            }
            Method::Cauchy => {
                let k1 = rates(x, y);
                let midpoint = offset(y, &k1, 0.5 * h);
                let k2 = rates(x + 0.5 * h, &midpoint);
                offset(y, &k2, h)
            }
            Method::Heun => {
                let k1 = rates(x, y);
                let predicted = offset(y, &k1, h);
                let k2 = rates(x + h, &predicted);
                y.iter()
                    .zip(k1.iter().zip(&k2))
                    .map(|(y, (k1, k2))| y + 0.5 * h * (k1 + k2))
                    .collect()
            }
            Method::RungeKutta4 => {
                let k1 = rates(x, y);
                let k2 = rates(x + 0.5 * h, &offset(y, &k1, 0.5 * h));
                let k3 = rates(x + 0.5 * h, &offset(y, &k2, 0.5 * h));
                let k4 = rates(x + h, &offset(y, &k3, h));
                (0..y.len())
                    .map(|i| y[i] + h * (k1[i] + 2.0 * k2[i] + 2.0 * k3[i] + k4[i]) / 6.0)
                    .collect()
            }
        }
    }

    /// All update rules, cheapest first.
    pub const ALL: [Method; 4] = [
        Method::Euler,
        Method::Cauchy,
        Method::Heun,
        Method::RungeKutta4,
    ];
}

/// Returns `y + k·h` component-wise.
fn offset(y: &[f64], k: &[f64], h: f64) -> Vec<f64> {
    y.iter().zip(k).map(|(y, k)| y + k * h).collect()
}
