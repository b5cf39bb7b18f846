//! Easing functions.
//!
//! The in/out/in-out families are the standard penner-style curves. The
//! remaining variants (concave, convex, gaussian, logarithmic, inverse) are
//! saturation/charge curves with deliberately non-exact endpoints; their
//! endpoint values are documented per variant and locked by tests.

use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_2, PI};

/// A scalar easing curve evaluated over `t` in `[0, 1]`.
///
/// Input is clamped to `[0, 1]` before evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    /// Identity: `t`
    #[default]
    Linear,

    /// `1 - cos(t * pi/2)`
    SineIn,
    /// `sin(t * pi/2)`
    SineOut,
    /// `-cos(t * pi) / 2 + 0.5`
    SineInOut,

    /// `t^2`
    QuadIn,
    /// `1 - (1 - t)^2`
    QuadOut,
    /// Piecewise: `2t^2` then `1 - (-2t + 2)^2 / 2`
    QuadInOut,

    /// `t^3`
    CubicIn,
    /// `1 - (1 - t)^3`
    CubicOut,
    /// Piecewise: `4t^3` then `1 - (-2t + 2)^3 / 2`
    CubicInOut,

    /// `t^4`
    QuartIn,
    /// `1 - (1 - t)^4`
    QuartOut,
    /// Piecewise: `8t^4` then `1 - (-2t + 2)^4 / 2`
    QuartInOut,

    /// `t^5`
    QuintIn,
    /// `1 - (1 - t)^5`
    QuintOut,
    /// Piecewise: `16t^5` then `1 - (-2t + 2)^5 / 2`
    QuintInOut,

    /// `2^(10t - 10)`, exactly 0 at t = 0.
    ExpoIn,
    /// `1 - 2^(-10t)`, exactly 1 at t = 1.
    ExpoOut,
    /// Piecewise exponential.
    ExpoInOut,

    /// `1 - sqrt(1 - t^2)`
    CircIn,
    /// `sqrt(1 - (t - 1)^2)`
    CircOut,
    /// Piecewise circular.
    CircInOut,

    /// Cubic Hermite: `t^2 (3 - 2t)`
    Smoothstep,
    /// `1 - exp(-4t)` — exact 0 at t = 0, ~0.982 at t = 1.
    Concave,
    /// `exp(4t - 4)` — ~0.018 at t = 0, exact 1 at t = 1.
    Convex,
    /// `1 - ln(t) / ln(0.001)` with `t` floored at 0.001 — 0 at the floor,
    /// exact 1 at t = 1.
    Logarithmic,
    /// `sqrt(t)`
    Sqrt,
    /// `9t / (1 + 9t)` — exact 0 at t = 0, 0.9 at t = 1.
    InverseCurve,
    /// `exp(-8 (1 - t)^2)` — ~0.0003 at t = 0, exact 1 at t = 1.
    Gaussian,
}

impl Easing {
    /// Evaluates the easing at `t`, clamped to `[0, 1]`.
    pub fn eval(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,

            Easing::SineIn => 1.0 - (t * FRAC_PI_2).cos(),
            Easing::SineOut => (t * FRAC_PI_2).sin(),
            Easing::SineInOut => -(t * PI).cos() / 2.0 + 0.5,

            Easing::QuadIn => t * t,
            Easing::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::QuadInOut => in_out(t, 2),
            Easing::CubicIn => t * t * t,
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::CubicInOut => in_out(t, 3),
            Easing::QuartIn => t.powi(4),
            Easing::QuartOut => 1.0 - (1.0 - t).powi(4),
            Easing::QuartInOut => in_out(t, 4),
            Easing::QuintIn => t.powi(5),
            Easing::QuintOut => 1.0 - (1.0 - t).powi(5),
            Easing::QuintInOut => in_out(t, 5),

            Easing::ExpoIn => {
                if t == 0.0 {
                    0.0
                } else {
                    (10.0 * t - 10.0).exp2()
                }
            }
            Easing::ExpoOut => {
                if t == 1.0 {
                    1.0
                } else {
                    1.0 - (-10.0 * t).exp2()
                }
            }
            Easing::ExpoInOut => {
                if t == 0.0 {
                    0.0
                } else if t == 1.0 {
                    1.0
                } else if t < 0.5 {
                    (20.0 * t - 10.0).exp2() / 2.0
                } else {
                    (2.0 - (-20.0 * t + 10.0).exp2()) / 2.0
                }
            }

            Easing::CircIn => 1.0 - (1.0 - t * t).sqrt(),
            Easing::CircOut => (1.0 - (t - 1.0) * (t - 1.0)).sqrt(),
            Easing::CircInOut => {
                if t < 0.5 {
                    (1.0 - (1.0 - (2.0 * t) * (2.0 * t)).sqrt()) / 2.0
                } else {
                    let u = -2.0 * t + 2.0;
                    ((1.0 - u * u).sqrt() + 1.0) / 2.0
                }
            }

            Easing::Smoothstep => t * t * (3.0 - 2.0 * t),
            Easing::Concave => 1.0 - (-4.0 * t).exp(),
            Easing::Convex => (4.0 * t - 4.0).exp(),
            Easing::Logarithmic => 1.0 - t.max(0.001).ln() / 0.001_f32.ln(),
            Easing::Sqrt => t.sqrt(),
            Easing::InverseCurve => 9.0 * t / (1.0 + 9.0 * t),
            Easing::Gaussian => (-8.0 * (1.0 - t) * (1.0 - t)).exp(),
        }
    }
}

/// Shared in-out shape: `2^(n-1) t^n` for the first half, mirrored for the
/// second (`1 - (-2t + 2)^n / 2`).
#[inline]
fn in_out(t: f32, n: i32) -> f32 {
    if t < 0.5 {
        (2.0f32).powi(n - 1) * t.powi(n)
    } else {
        1.0 - (-2.0 * t + 2.0).powi(n) / 2.0
    }
}
