use super::Resolution;

/// Fraction of a step below which a leftover span is treated as rounding.
const REMAINDER_TOLERANCE: f64 = 1e-9;

/// Successive `x` values visited when stepping from `x0` to `x_target`.
///
/// Yields `x0 + i·step` for `i` in `1..=iterations`, clamped to `x_target`.
/// The last value is always exactly `x_target`: the final grid point is
/// snapped onto it when the gap is only rounding, otherwise one shorter
/// remainder step is appended.
pub(super) fn grid(x0: f64, x_target: f64, resolution: Resolution) -> impl Iterator<Item = f64> {
    let Resolution { step, iterations } = resolution;
    let point = move |i: usize| (x0 + i as f64 * step).min(x_target);
    let remainder = x_target - point(iterations) > step * REMAINDER_TOLERANCE;

    (1..=iterations)
        .map(move |i| {
            if i == iterations && !remainder {
                x_target
            } else {
                point(i)
            }
        })
        .chain(remainder.then_some(x_target))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn points(x0: f64, x_target: f64, step: f64, iterations: usize) -> Vec<f64> {
        grid(x0, x_target, Resolution { step, iterations }).collect()
    }

    #[test]
    fn rounding_short_of_target_is_snapped() {
        // 3 * 0.3 rounds to 0.8999999999999999.
        let xs = points(0.0, 0.9, 0.9 / 3.0, 3);

        assert_eq!(xs.len(), 3);
        assert_eq!(xs[2], 0.9);
    }

    #[test]
    fn leftover_span_adds_a_remainder_step() {
        let xs = points(0.0, 1.0, 0.3, 3);

        assert_eq!(xs.len(), 4);
        assert_relative_eq!(xs[2], 0.9, epsilon = 1e-12);
        assert_eq!(xs[3], 1.0);
    }

    #[test]
    fn points_come_from_the_index() {
        let xs = points(1.0, 2.0, 0.1, 10);

        assert_eq!(xs.len(), 10);
        for (i, x) in xs.iter().take(9).enumerate() {
            assert_eq!(*x, 1.0 + (i + 1) as f64 * 0.1);
        }
        assert_eq!(xs[9], 2.0);
    }

    #[test]
    fn huge_iteration_counts_are_lazy() {
        let mut xs = grid(
            0.0,
            1.0,
            Resolution {
                step: 1e-300,
                iterations: usize::MAX,
            },
        );

        assert_eq!(xs.next(), Some(1e-300));
        assert_eq!(xs.next(), Some(2e-300));
    }
}
