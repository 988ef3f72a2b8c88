use num_complex::Complex64;

/// Default iteration budget for the escape-time loop.
pub const DEFAULT_MAX_ITER: usize = 1000;

/// Default bailout radius for `|z|`.
pub const DEFAULT_BAILOUT: f64 = 2.0;

/// Number of iterations of `z <- z^2 + point` (from `z = 0`) survived before
/// `|z|` exceeds `bailout`, or `max_iter` if the orbit never escapes within
/// the budget.
///
/// The bound is checked after each update, uniformly: a point already outside
/// the bailout radius escapes at index 0. Mixing this with a check-first loop
/// would shift every boundary count by one and skew any statistic built on
/// top, so this is the only variant in the crate.
pub fn escape_time(point: Complex64, max_iter: usize, bailout: f64) -> usize {
    let bailout_sq = bailout * bailout;
    let mut z = Complex64::new(0.0, 0.0);
    for i in 0..max_iter {
        z = z * z + point;
        if z.norm_sqr() > bailout_sq {
            return i;
        }
    }
    max_iter
}

/// True if `point` stays bounded for `threshold` iterations.
pub fn is_in_set(point: Complex64, threshold: usize) -> bool {
    escape_time(point, threshold, DEFAULT_BAILOUT) == threshold
}

#[cfg(test)]
mod tests {
    use super::{escape_time, is_in_set, DEFAULT_BAILOUT, DEFAULT_MAX_ITER};
    use num_complex::Complex64;

    #[test]
    fn origin_never_escapes() {
        let origin = Complex64::new(0.0, 0.0);
        assert_eq!(
            escape_time(origin, DEFAULT_MAX_ITER, DEFAULT_BAILOUT),
            DEFAULT_MAX_ITER
        );
    }

    #[test]
    fn point_outside_bailout_escapes_at_index_zero() {
        assert_eq!(escape_time(Complex64::new(3.0, 0.0), 100, 2.0), 0);
        assert_eq!(escape_time(Complex64::new(-2.5, 0.0), 100, 2.0), 0);
    }

    #[test]
    fn known_exterior_point_escapes_at_the_expected_index() {
        // Orbit of c = 0.5 + 0.5i first leaves |z| = 2 on the fifth update.
        assert_eq!(escape_time(Complex64::new(0.5, 0.5), 100, 2.0), 4);
    }

    #[test]
    fn smaller_bailout_escapes_sooner() {
        assert_eq!(escape_time(Complex64::new(1.5, 0.0), 10, 1.0), 0);
    }

    #[test]
    fn membership_follows_the_budget() {
        // c = -1 sits on the period-2 cycle 0 -> -1 -> 0.
        assert!(is_in_set(Complex64::new(-1.0, 0.0), 500));
        assert!(!is_in_set(Complex64::new(3.0, 0.0), 50));
    }
}
