pub mod generator;
pub mod mandelbrot;
pub mod mapping;
pub mod sampler;
/// The `collatz_core` crate provides the deterministic numerical engines
/// behind the generalized-Collatz / Mandelbrot correlation experiments.
///
/// Key components:
/// - **Generator**: the parameterized Collatz iteration with cycle-closure
///   classification (`converged` / `cycled` / `diverged` / `max_iter`).
/// - **Sampler**: convergence, cycle and divergence rates over a seed range.
/// - **Mandelbrot**: the escape-time iteration and set-membership test.
/// - **Mapping**: six (A, B, C) -> complex-plane hypotheses behind one
///   strategy interface.
/// - **Survey**: the pure per-triple pairing of Collatz behavior with every
///   mapping's escape time, consumed by the external experiment driver.
pub mod survey;
