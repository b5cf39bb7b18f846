//! Closed-form scalar curves evaluated at `t`.
//!
//! Most curves clamp `t` to `[0, 1]`. The three with a singularity at zero
//! ([`sigmoid`], [`damped`], [`logarithmic`]) clamp to `[0.001, 1]` instead;
//! this asymmetry is intentional and callers relying on exact zero output at
//! `t = 0` should use the other curves.

/// Cubic Bézier on scalars (Bernstein form, 4 control values).
pub fn cubic_bezier(t: f32, p0: f32, p1: f32, p2: f32, p3: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let mt = 1.0 - t;
    p0 * mt * mt * mt + p1 * 3.0 * mt * mt * t + p2 * 3.0 * mt * t * t + p3 * t * t * t
}

/// Quadratic Bézier on scalars (3 control values).
pub fn quadratic_bezier(t: f32, p0: f32, p1: f32, p2: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let mt = 1.0 - t;
    p0 * mt * mt + p1 * 2.0 * mt * t + p2 * t * t
}

/// Damped exponential rise: `(1 - exp(-stiffness * t)) / (1 - exp(-stiffness))`.
///
/// Normalized so the curve reaches exactly 1 at `t = 1`. Higher `stiffness`
/// saturates earlier. `t` clamps to `[0.001, 1]`.
pub fn damped(t: f32, stiffness: f32) -> f32 {
    let t = t.clamp(0.001, 1.0);
    (1.0 - (-stiffness * t).exp()) / (1.0 - (-stiffness).exp())
}

/// Power curve: `t^exponent`.
///
/// Exponents above 1 bow the curve downward, below 1 upward.
pub fn power(t: f32, exponent: f32) -> f32 {
    t.clamp(0.0, 1.0).powf(exponent)
}

/// Logarithmic curve: `ln(1 + t(base - 1)) / ln(base)`.
///
/// Rises steeply at first, then flattens. `t` clamps to `[0.001, 1]`.
pub fn logarithmic(t: f32, base: f32) -> f32 {
    let t = t.clamp(0.001, 1.0);
    (1.0 + t * (base - 1.0)).ln() / base.ln()
}

/// Parabolic arch: `4t(1 - t)` — zero at both ends, peaks at 1 when `t = 0.5`.
pub fn parabolic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    4.0 * t * (1.0 - t)
}

/// Logistic S-curve centered on `t = 0.5`, renormalized so the clamped
/// endpoints map to 0 and 1.
///
/// `sharpness` controls the steepness of the transition (try 8–12).
/// `t` clamps to `[0.001, 1]`.
pub fn sigmoid(t: f32, sharpness: f32) -> f32 {
    let t = t.clamp(0.001, 1.0);
    let raw = |x: f32| 1.0 / (1.0 + (-sharpness * (x - 0.5)).exp());
    let lo = raw(0.001);
    let hi = raw(1.0);
    (raw(t) - lo) / (hi - lo)
}

/// Sinusoidal ease: `0.5 - 0.5 cos(pi * t)`.
pub fn sinusoidal(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    0.5 - 0.5 * (std::f32::consts::PI * t).cos()
}
