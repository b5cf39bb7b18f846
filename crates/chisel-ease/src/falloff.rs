//! Brush falloff functions.
//!
//! A falloff maps `(distance, radius)` to a weight: 1 at the brush center,
//! decaying toward the rim. Every variant is monotonically non-increasing
//! over `[0, radius]`; some (exponential, gaussian, inverse) never quite
//! reach zero at the rim, which reads as a soft edge.

use serde::{Deserialize, Serialize};
use std::f32::consts::{E, FRAC_PI_2};

/// How brush influence decays with distance from the center point.
///
/// `eval(0, r)` is 1 for every variant. A `radius` of zero divides by zero
/// and produces NaN weights; callers are expected to avoid it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Falloff {
    /// `1 - t`
    #[default]
    Linear,
    /// `(1 - t)^2` — concentrates influence near the center.
    Quadratic,
    /// `(1 - t)^3`
    Cubic,
    /// `1 - sqrt(t)` — steep drop right at the center.
    Sqrt,
    /// `1 - ln(1 + (e-1)t)`
    Logarithmic,
    /// `cos(t * pi/2)`
    Sine,
    /// `exp(-5t)` — soft edge, never reaches zero.
    Exponential,
    /// `exp(-4.5 t^2)` — bell-shaped, never reaches zero.
    Gaussian,
    /// `1 / (1 + 10t)` — sharp center, long tail.
    Inverse,
    /// `1 - t^2 (3 - 2t)` — flat near center and rim.
    Smoothstep,
}

impl Falloff {
    /// Evaluates the falloff weight for a vertex `distance` away from a
    /// brush center of the given `radius`.
    ///
    /// Distances past the radius clamp to the rim value.
    #[inline]
    pub fn eval(self, distance: f32, radius: f32) -> f32 {
        let t = (distance / radius).clamp(0.0, 1.0);
        match self {
            Falloff::Linear => 1.0 - t,
            Falloff::Quadratic => {
                let u = 1.0 - t;
                u * u
            }
            Falloff::Cubic => {
                let u = 1.0 - t;
                u * u * u
            }
            Falloff::Sqrt => 1.0 - t.sqrt(),
            Falloff::Logarithmic => 1.0 - (1.0 + (E - 1.0) * t).ln(),
            Falloff::Sine => (t * FRAC_PI_2).cos(),
            Falloff::Exponential => (-5.0 * t).exp(),
            Falloff::Gaussian => (-4.5 * t * t).exp(),
            Falloff::Inverse => 1.0 / (1.0 + 10.0 * t),
            Falloff::Smoothstep => 1.0 - t * t * (3.0 - 2.0 * t),
        }
    }

    /// Returns all falloff variants.
    pub fn all() -> [Falloff; 10] {
        [
            Falloff::Linear,
            Falloff::Quadratic,
            Falloff::Cubic,
            Falloff::Sqrt,
            Falloff::Logarithmic,
            Falloff::Sine,
            Falloff::Exponential,
            Falloff::Gaussian,
            Falloff::Inverse,
            Falloff::Smoothstep,
        ]
    }
}
