use crate::mandelbrot::{escape_time, DEFAULT_BAILOUT, DEFAULT_MAX_ITER};
use crate::mapping::MappingKind;
use crate::sampler::{measure, BehaviorMetrics};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Knobs for one comparative sweep over random parameter triples.
///
/// Defaults reproduce the full comparative study: 1000 triples with A drawn
/// from `2..=20` and B, C from `1..=20`, behavior measured over seeds
/// `[1, 500)`. `fixed_multiplier: Some(1)` pins B for the fixed-B validation
/// run. `max_param` must be at least 2 so a divisor can be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepSettings {
    pub samples: usize,
    pub max_param: i64,
    pub fixed_multiplier: Option<i64>,
    pub seed_range: (i64, i64),
    pub escape_iters: usize,
}

impl Default for SweepSettings {
    fn default() -> Self {
        Self {
            samples: 1000,
            max_param: 20,
            fixed_multiplier: None,
            seed_range: (1, 500),
            escape_iters: DEFAULT_MAX_ITER,
        }
    }
}

/// Escape time of one triple under one mapping hypothesis. `None` when a
/// strict mapping rejected the triple; the consumer decides skip vs abort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingSample {
    pub mapping: MappingKind,
    pub escape_time: Option<usize>,
}

/// Everything measured for one parameter triple: Collatz behavior on one
/// side, escape time under every mapping hypothesis on the other. The
/// external driver pairs these for correlation and persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripleSample {
    pub divisor: i64,
    pub multiplier: i64,
    pub adder: i64,
    pub metrics: BehaviorMetrics,
    /// One entry per [`MappingKind::ALL`], in order.
    pub escape_times: Vec<MappingSample>,
}

/// Measures one triple's Collatz behavior and its escape time under every
/// mapping hypothesis.
pub fn sample_triple(a: i64, b: i64, c: i64, settings: &SweepSettings) -> TripleSample {
    let metrics = measure(a, b, c, settings.seed_range);
    let escape_times = MappingKind::ALL
        .iter()
        .map(|&mapping| {
            let time = match mapping.apply(a, b, c) {
                Ok(point) => Some(escape_time(point, settings.escape_iters, DEFAULT_BAILOUT)),
                Err(error) => {
                    debug!(%mapping, %error, a, b, c, "mapping rejected triple");
                    None
                }
            };
            MappingSample {
                mapping,
                escape_time: time,
            }
        })
        .collect();

    TripleSample {
        divisor: a,
        multiplier: b,
        adder: c,
        metrics,
        escape_times,
    }
}

/// Samples `settings.samples` random triples and measures each one. The
/// caller supplies the `Rng`, so a seeded generator makes the whole sweep
/// reproducible.
pub fn sweep<R: Rng>(settings: &SweepSettings, rng: &mut R) -> Vec<TripleSample> {
    let mut samples = Vec::with_capacity(settings.samples);
    for index in 0..settings.samples {
        let a = rng.gen_range(2..=settings.max_param);
        let b = settings
            .fixed_multiplier
            .unwrap_or_else(|| rng.gen_range(1..=settings.max_param));
        let c = rng.gen_range(1..=settings.max_param);

        let sample = sample_triple(a, b, c, settings);
        debug!(
            index,
            a,
            b,
            c,
            convergence_rate = sample.metrics.convergence_rate,
            "sampled triple"
        );
        samples.push(sample);
    }
    samples
}
