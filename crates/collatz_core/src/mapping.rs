//! Parameter-to-complex-plane mappings.
//!
//! Each mapping is one hypothesis about how a generalized-Collatz parameter
//! triple (A, B, C) relates to Mandelbrot geometry. They are compared
//! empirically, so they stay behind a single strategy interface
//! ([`MappingKind::apply`]) and the experiment layer iterates over all of
//! them per triple.
//!
//! The four strict mappings reject out-of-domain triples with a typed
//! [`MappingError`]; a silent zero fallback there would feed fabricated
//! points into the escape-time statistics. `PolarV2` and `PowerSquared`
//! instead return the zero point on any domain failure. That asymmetry is
//! per-hypothesis policy, not an accident, and must not be unified.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use thiserror::Error;

/// Domain error raised by the strict mappings.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MappingError {
    #[error("divisor A must be non-zero")]
    InvalidDivisor,
    #[error("logarithmic mapping requires a positive ratio, got {ratio}")]
    NonPositiveRatio { ratio: f64 },
    #[error("polar mapping requires a non-zero multiplier B")]
    ZeroMultiplier,
    #[error("reciprocal mapping requires non-zero B and C")]
    ZeroTerm,
}

fn zero_point() -> Complex64 {
    Complex64::new(0.0, 0.0)
}

/// V1 / baseline: `(B/A, C/A)`.
pub fn map_linear(a: i64, b: i64, c: i64) -> Result<Complex64, MappingError> {
    if a == 0 {
        return Err(MappingError::InvalidDivisor);
    }
    let a = a as f64;
    Ok(Complex64::new(b as f64 / a, c as f64 / a))
}

/// Logarithmic: `(ln(B/A) - 1, ln(C/A) - 1)`. Both ratios must be positive.
pub fn map_logarithmic(a: i64, b: i64, c: i64) -> Result<Complex64, MappingError> {
    if a == 0 {
        return Err(MappingError::InvalidDivisor);
    }
    let b_ratio = b as f64 / a as f64;
    let c_ratio = c as f64 / a as f64;
    if b_ratio <= 0.0 {
        return Err(MappingError::NonPositiveRatio { ratio: b_ratio });
    }
    if c_ratio <= 0.0 {
        return Err(MappingError::NonPositiveRatio { ratio: c_ratio });
    }
    Ok(Complex64::new(b_ratio.ln() - 1.0, c_ratio.ln() - 1.0))
}

/// Polar: radius `(B+C)/A` at angle `atan(C/B)`.
pub fn map_polar(a: i64, b: i64, c: i64) -> Result<Complex64, MappingError> {
    if a == 0 {
        return Err(MappingError::InvalidDivisor);
    }
    if b == 0 {
        return Err(MappingError::ZeroMultiplier);
    }
    let r = (b + c) as f64 / a as f64;
    let theta = (c as f64 / b as f64).atan();
    Ok(Complex64::from_polar(r, theta))
}

/// Reciprocal products: `(1/(A*B), 1/(A*C))`.
pub fn map_reciprocal_products(a: i64, b: i64, c: i64) -> Result<Complex64, MappingError> {
    if a == 0 {
        return Err(MappingError::InvalidDivisor);
    }
    if b == 0 || c == 0 {
        return Err(MappingError::ZeroTerm);
    }
    Ok(Complex64::new(
        1.0 / (a as f64 * b as f64),
        1.0 / (a as f64 * c as f64),
    ))
}

/// Log-magnitude polar refinement: magnitude `(C/A)*ln(B/A)` at angle
/// `B*pi/A`. Soft fallback: any domain failure yields the zero point.
pub fn map_polar_v2(a: i64, b: i64, c: i64) -> Complex64 {
    if a == 0 {
        return zero_point();
    }
    let ratio = b as f64 / a as f64;
    if ratio <= 0.0 {
        return zero_point();
    }
    let magnitude = (c as f64 / a as f64) * ratio.ln();
    let angle = b as f64 * PI / a as f64;
    Complex64::from_polar(magnitude, angle)
}

/// B/A-dominance hypothesis: `((B/A)^2, -(C/A))`. Soft fallback on a zero
/// divisor.
pub fn map_power_squared(a: i64, b: i64, c: i64) -> Complex64 {
    if a == 0 {
        return zero_point();
    }
    let b_ratio = b as f64 / a as f64;
    let c_ratio = c as f64 / a as f64;
    Complex64::new(b_ratio * b_ratio, -c_ratio)
}

/// Tag for one mapping hypothesis, used to select a strategy at a call site
/// and to label recorded samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MappingKind {
    Linear,
    Logarithmic,
    Polar,
    ReciprocalProducts,
    PolarV2,
    PowerSquared,
}

impl MappingKind {
    /// Every hypothesis, in recording order.
    pub const ALL: [MappingKind; 6] = [
        MappingKind::Linear,
        MappingKind::Logarithmic,
        MappingKind::Polar,
        MappingKind::ReciprocalProducts,
        MappingKind::PolarV2,
        MappingKind::PowerSquared,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MappingKind::Linear => "linear",
            MappingKind::Logarithmic => "logarithmic",
            MappingKind::Polar => "polar",
            MappingKind::ReciprocalProducts => "reciprocal_products",
            MappingKind::PolarV2 => "polar_v2",
            MappingKind::PowerSquared => "power_squared",
        }
    }

    /// Maps a triple under this hypothesis. Soft-fallback variants never
    /// return an error.
    pub fn apply(self, a: i64, b: i64, c: i64) -> Result<Complex64, MappingError> {
        match self {
            MappingKind::Linear => map_linear(a, b, c),
            MappingKind::Logarithmic => map_logarithmic(a, b, c),
            MappingKind::Polar => map_polar(a, b, c),
            MappingKind::ReciprocalProducts => map_reciprocal_products(a, b, c),
            MappingKind::PolarV2 => Ok(map_polar_v2(a, b, c)),
            MappingKind::PowerSquared => Ok(map_power_squared(a, b, c)),
        }
    }

    pub fn is_soft_fallback(self) -> bool {
        matches!(self, MappingKind::PolarV2 | MappingKind::PowerSquared)
    }
}

impl fmt::Display for MappingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
