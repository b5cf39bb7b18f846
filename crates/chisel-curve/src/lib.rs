//! Parametric curves.
//!
//! Two layers:
//!
//! - [`scalar`] — closed-form 1D curves (`f(t) -> f32`) used to shape lathe
//!   profiles and interpolation weights.
//! - [`QuadBezier`] / [`CubicBezier`] — Bézier curves generic over any
//!   [`VectorSpace`] point type (`f32`, `Vec2`, `Vec3`), used to sample 2D
//!   outlines for lathe and extrude shapes.

pub mod scalar;

mod bezier;

pub use bezier::{CubicBezier, QuadBezier};

use std::ops::{Add, Mul, Sub};

/// Anything that behaves like a point in an affine space: addition,
/// subtraction, and scaling by `f32`.
pub trait VectorSpace:
    Copy + Add<Output = Self> + Sub<Output = Self> + Mul<f32, Output = Self>
{
}

impl<T> VectorSpace for T where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<f32, Output = T>
{
}

/// Linear interpolation between two points.
#[inline]
pub fn lerp<V: VectorSpace>(a: V, b: V, t: f32) -> V {
    a + (b - a) * t
}
