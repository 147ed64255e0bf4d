//! Composite Simpson's 1/3 rule.
//!
//! The span is split into an even number of sub-intervals of width `h` and
//! each consecutive pair is fitted with a parabola, giving O(h⁴) accuracy for
//! smooth integrands.

mod config;

pub use config::{Config, ConfigError, DEFAULT_INTERVALS};

use astronum_core::Function;

/// Integrates a function over `[a, b]` with a fixed number of sub-intervals.
///
/// # Example
///
/// ```
/// use astronum_solve::quadrature::simpson::Simpson;
///
/// let mut simpson = Simpson::new(|x: f64| x * x);
/// simpson.set_interval_count(4);
///
/// let area = simpson.integrate(0.0, 3.0).unwrap();
/// assert!((area - 9.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct Simpson<F> {
    function: F,
    config: Config,
}

impl<F: Function> Simpson<F> {
    /// Creates an integrator using [`DEFAULT_INTERVALS`] sub-intervals.
    pub fn new(function: F) -> Self {
        Self {
            function,
            config: Config::default(),
        }
    }

    /// Sets the number of sub-intervals.
    ///
    /// An odd count is rounded down to the even count below it. A count that
    /// leaves fewer than 2 intervals is ignored with a warning.
    pub fn set_interval_count(&mut self, intervals: usize) {
        match Config::new(intervals) {
            Ok(config) => {
                if config.intervals() != intervals {
                    log::debug!("interval count {intervals} is odd, using {}", config.intervals());
                }
                self.config = config;
            }
            Err(err) => log::warn!("ignoring interval count, keeping {:?}: {err}", self.config),
        }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Integrates from `a` to `b`.
    ///
    /// Reversing the bounds negates the result exactly. Returns `None` when
    /// `a == b`.
    #[allow(clippy::float_cmp)]
    pub fn integrate(&self, a: f64, b: f64) -> Option<f64> {
        if a == b {
            log::debug!("empty integration span at {a}");
            return None;
        }

        let area = self.integrate_ordered(a.min(b), a.max(b));
        Some(if a < b { area } else { -area })
    }

    /// Applies the (1, 4, 2, 4, …, 4, 1)·h/3 weights over `[low, high]`.
    fn integrate_ordered(&self, low: f64, high: f64) -> f64 {
        let n = self.config.intervals();
        let h = (high - low) / n as f64;

        let interior: f64 = (1..n)
            .map(|i| {
                let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
                weight * self.function.eval(low + i as f64 * h)
            })
            .sum();

        h / 3.0 * (self.function.eval(low) + interior + self.function.eval(high))
    }
}
