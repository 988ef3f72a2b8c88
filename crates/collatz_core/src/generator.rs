use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default iteration budget for a single generator run.
pub const DEFAULT_MAX_ITERATIONS: usize = 1_000_000;

/// Values above 10^50 are classified as divergent before the next step is
/// computed. The guard is signed: negatively unbounded orbits are never cut
/// off here and must terminate via cycle detection or the iteration budget.
const MAGNITUDE_CUTOFF_EXPONENT: usize = 50;

/// Terminal classification of one generator run.
///
/// Exactly one status is produced per run. `Converged` and `Cycled` both mean
/// a repeat was found; they differ only in whether the closed cycle contains
/// the value 1, and callers must be able to tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// The iteration closed a cycle that contains the value 1.
    Converged,
    /// The iteration closed a cycle that does not contain the value 1.
    Cycled,
    /// The current value exceeded the magnitude cutoff (10^50).
    Diverged,
    /// The iteration budget ran out without a repeat or cutoff violation.
    MaxIter,
    /// Seed <= 0 or divisor <= 0; no iteration was performed.
    InvalidInput,
}

/// One generator run: the full iterate sequence (seed first) and its status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollatzRun {
    pub sequence: Vec<BigInt>,
    pub status: Status,
}

/// Runs the generalized Collatz iteration from `seed` under the rule
/// parameterized by `a` (divisor), `b` (multiplier) and `c` (adder).
///
/// Step rule for the current value `v`:
/// - `v % a == 0`: the next value is `v / a`.
/// - otherwise the next value is `b*v + c`, repeatedly divided by `a` while
///   it stays positive and evenly divisible. The classical triple (2, 3, 1)
///   skips that reduction loop: `3v + 1` of an odd `v` is always even, so the
///   unreduced value is the textbook iterate.
///
/// Termination is decided purely by cycle closure: the run ends when a value
/// repeats, and the closed cycle is classified `Converged` if it contains 1
/// and `Cycled` otherwise. There is no early exit at 1 — for non-classical
/// triples 1 is not guaranteed to be absorbing, so reaching it proves
/// nothing until the cycle through it closes (the classical 1 -> 4 -> 2 -> 1
/// loop falls out of this rule as an ordinary cycle containing 1).
///
/// Each call owns its entire state; identical inputs produce identical runs.
pub fn generate(seed: i64, a: i64, b: i64, c: i64, max_iterations: usize) -> CollatzRun {
    if seed <= 0 || a <= 0 {
        return CollatzRun {
            sequence: Vec::new(),
            status: Status::InvalidInput,
        };
    }

    let cutoff = magnitude_cutoff();
    let divisor = BigInt::from(a);
    let classical = (a, b, c) == (2, 3, 1);

    let mut current = BigInt::from(seed);
    let mut sequence = vec![current.clone()];
    // Value -> index of its first appearance in `sequence`. Fresh per call.
    let mut visited: HashMap<BigInt, usize> = HashMap::new();
    visited.insert(current.clone(), 0);

    for _ in 0..max_iterations {
        if current > cutoff {
            return CollatzRun {
                sequence,
                status: Status::Diverged,
            };
        }

        let next = step(&current, &divisor, b, c, classical);

        if let Some(&first_seen) = visited.get(&next) {
            // Close the cycle before classifying it.
            sequence.push(next);
            let status = if cycle_contains_one(&sequence[first_seen..]) {
                Status::Converged
            } else {
                Status::Cycled
            };
            return CollatzRun { sequence, status };
        }

        visited.insert(next.clone(), sequence.len());
        sequence.push(next.clone());
        current = next;
    }

    CollatzRun {
        sequence,
        status: Status::MaxIter,
    }
}

/// One application of the generalized rule.
///
/// Division only ever happens on exactly divisible values, so truncated and
/// floor division coincide even for negative iterates.
fn step(current: &BigInt, divisor: &BigInt, b: i64, c: i64, classical: bool) -> BigInt {
    if (current % divisor).is_zero() {
        return current / divisor;
    }

    let mut numerator = BigInt::from(b) * current + c;
    if classical {
        return numerator;
    }
    while (&numerator % divisor).is_zero() && numerator.is_positive() {
        numerator = &numerator / divisor;
    }
    numerator
}

fn cycle_contains_one(cycle: &[BigInt]) -> bool {
    cycle.iter().any(|value| value.is_one())
}

fn magnitude_cutoff() -> BigInt {
    num_traits::pow(BigInt::from(10), MAGNITUDE_CUTOFF_EXPONENT)
}

#[cfg(test)]
mod tests {
    use super::{generate, Status, DEFAULT_MAX_ITERATIONS};
    use num_bigint::BigInt;

    fn as_bigints(values: &[i64]) -> Vec<BigInt> {
        values.iter().map(|&v| BigInt::from(v)).collect()
    }

    #[test]
    fn classical_triple_from_six_converges_through_its_cycle() {
        let run = generate(6, 2, 3, 1, DEFAULT_MAX_ITERATIONS);
        assert_eq!(run.sequence, as_bigints(&[6, 3, 10, 5, 16, 8, 4, 2, 1, 4]));
        assert_eq!(run.status, Status::Converged);
    }

    #[test]
    fn fixed_point_at_one_counts_as_converged() {
        let run = generate(2, 2, -1, 3, 10);
        assert_eq!(run.sequence, as_bigints(&[2, 1, 1]));
        assert_eq!(run.status, Status::Converged);
    }

    #[test]
    fn negative_cycle_without_one_is_cycled() {
        let run = generate(3, 2, 1, -5, 100);
        assert_eq!(run.sequence, as_bigints(&[3, -2, -1, -6, -3, -8, -4, -2]));
        assert_eq!(run.status, Status::Cycled);
    }

    #[test]
    fn reaching_one_does_not_stop_the_run() {
        // The classical run from 6 must iterate past 1 and only stop once the
        // 4 -> 2 -> 1 -> 4 cycle closes on the repeated 4.
        let run = generate(6, 2, 3, 1, DEFAULT_MAX_ITERATIONS);
        assert_eq!(*run.sequence.last().unwrap(), BigInt::from(4));
    }

    #[test]
    fn huge_multiplier_diverges_past_the_cutoff() {
        // b even and c odd keeps every iterate odd, so the orbit multiplies
        // by ~1e9 each step and passes 10^50 after six steps.
        let run = generate(3, 2, 1_000_000_000, 1, 100);
        assert_eq!(run.status, Status::Diverged);
        assert_eq!(run.sequence.len(), 7);
    }

    #[test]
    fn exhausted_budget_reports_max_iter() {
        let run = generate(27, 2, 3, 1, 5);
        assert_eq!(run.status, Status::MaxIter);
        assert_eq!(run.sequence, as_bigints(&[27, 82, 41, 124, 62, 31]));
    }

    #[test]
    fn non_positive_seed_or_divisor_is_invalid_input() {
        for (seed, a) in [(0, 2), (-4, 2), (5, 0), (5, -3)] {
            let run = generate(seed, a, 3, 1, DEFAULT_MAX_ITERATIONS);
            assert_eq!(run.status, Status::InvalidInput);
            assert!(run.sequence.is_empty());
        }
    }

    #[test]
    fn identical_inputs_give_identical_runs() {
        let first = generate(19, 3, 5, 7, DEFAULT_MAX_ITERATIONS);
        let second = generate(19, 3, 5, 7, DEFAULT_MAX_ITERATIONS);
        assert_eq!(first, second);
    }

    #[test]
    fn classical_triple_never_diverges_for_small_seeds() {
        for seed in 1..=30 {
            let run = generate(seed, 2, 3, 1, DEFAULT_MAX_ITERATIONS);
            assert_eq!(run.status, Status::Converged, "seed {seed}");
        }
    }
}
