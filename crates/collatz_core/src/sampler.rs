use crate::generator::{generate, Status, DEFAULT_MAX_ITERATIONS};
use serde::{Deserialize, Serialize};

/// Aggregate behavior of one parameter triple over a swept seed range.
///
/// The three rates partition the tested seeds and sum to 1 for any non-empty
/// range. `avg_steps_to_one` averages sequence length over converged runs
/// only and is 0 when none converged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BehaviorMetrics {
    pub convergence_rate: f64,
    pub cycle_rate: f64,
    pub divergence_rate: f64,
    pub avg_steps_to_one: f64,
}

impl BehaviorMetrics {
    fn zeroed() -> Self {
        Self {
            convergence_rate: 0.0,
            cycle_rate: 0.0,
            divergence_rate: 0.0,
            avg_steps_to_one: 0.0,
        }
    }
}

/// Runs the generator for every seed in the half-open range `[lo, hi)` under
/// the default iteration budget and buckets the outcomes.
///
/// `Diverged`, `MaxIter` and `InvalidInput` are merged into the divergence
/// bucket: the experiment layer only needs a convergence signal, not failure
/// attribution. A zero-length range yields all-zero metrics.
pub fn measure(a: i64, b: i64, c: i64, seed_range: (i64, i64)) -> BehaviorMetrics {
    let (lo, hi) = seed_range;
    if hi <= lo {
        return BehaviorMetrics::zeroed();
    }

    let mut converged = 0usize;
    let mut cycled = 0usize;
    let mut diverged_or_max = 0usize;
    let mut converged_steps = 0usize;

    for seed in lo..hi {
        let run = generate(seed, a, b, c, DEFAULT_MAX_ITERATIONS);
        match run.status {
            Status::Converged => {
                converged += 1;
                converged_steps += run.sequence.len();
            }
            Status::Cycled => cycled += 1,
            Status::Diverged | Status::MaxIter | Status::InvalidInput => diverged_or_max += 1,
        }
    }

    let total = (hi - lo) as f64;
    let avg_steps_to_one = if converged > 0 {
        converged_steps as f64 / converged as f64
    } else {
        0.0
    };

    BehaviorMetrics {
        convergence_rate: converged as f64 / total,
        cycle_rate: cycled as f64 / total,
        divergence_rate: diverged_or_max as f64 / total,
        avg_steps_to_one,
    }
}

#[cfg(test)]
mod tests {
    use super::{measure, BehaviorMetrics};

    const TOL: f64 = 1e-12;

    fn rate_sum(metrics: &BehaviorMetrics) -> f64 {
        metrics.convergence_rate + metrics.cycle_rate + metrics.divergence_rate
    }

    #[test]
    fn classical_triple_converges_everywhere() {
        let metrics = measure(2, 3, 1, (1, 50));
        assert!((metrics.convergence_rate - 1.0).abs() < TOL);
        assert_eq!(metrics.cycle_rate, 0.0);
        assert_eq!(metrics.divergence_rate, 0.0);
        assert!(metrics.avg_steps_to_one > 0.0);
    }

    #[test]
    fn rates_partition_the_range() {
        for (a, b, c) in [(2, 3, 1), (3, 5, 7), (2, 1, -5), (4, 7, 3)] {
            let metrics = measure(a, b, c, (1, 30));
            assert!(
                (rate_sum(&metrics) - 1.0).abs() < TOL,
                "({a}, {b}, {c}): {metrics:?}"
            );
        }
    }

    #[test]
    fn zero_length_range_yields_zero_rates() {
        let metrics = measure(2, 3, 1, (5, 5));
        assert_eq!(rate_sum(&metrics), 0.0);
        assert_eq!(metrics.avg_steps_to_one, 0.0);
    }

    #[test]
    fn invalid_divisor_lands_in_the_divergence_bucket() {
        let metrics = measure(-1, 3, 1, (1, 5));
        assert_eq!(metrics.divergence_rate, 1.0);
        assert_eq!(metrics.convergence_rate, 0.0);
        assert_eq!(metrics.avg_steps_to_one, 0.0);
    }

    #[test]
    fn cycling_triple_is_counted_separately_from_convergence() {
        // Seed 3 under (2, 1, -5) closes a negative cycle without 1.
        let metrics = measure(2, 1, -5, (3, 4));
        assert_eq!(metrics.cycle_rate, 1.0);
        assert_eq!(metrics.convergence_rate, 0.0);
    }

    #[test]
    fn average_steps_counts_full_sequence_lengths() {
        // Seed 1 classical: [1, 4, 2, 1], length 4.
        let metrics = measure(2, 3, 1, (1, 2));
        assert_eq!(metrics.avg_steps_to_one, 4.0);
    }
}
