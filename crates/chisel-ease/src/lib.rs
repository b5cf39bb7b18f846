//! Falloff and easing function tables.
//!
//! Both families are pure scalar functions used as interpolation weights:
//!
//! - [`Falloff`] maps a distance and a radius to a weight in `[0, 1]`,
//!   selecting how a brush's influence decays away from its center.
//! - [`Easing`] remaps a parameter `t` in `[0, 1]`, shaping animation and
//!   profile interpolation.
//!
//! # Example
//!
//! ```
//! use chisel_ease::{Easing, Falloff};
//!
//! // Full weight at the center, zero at the rim.
//! assert!((Falloff::Linear.eval(0.0, 2.0) - 1.0).abs() < 1e-6);
//! assert!(Falloff::Linear.eval(2.0, 2.0).abs() < 1e-6);
//!
//! // quad_in: t * t
//! assert!((Easing::QuadIn.eval(0.5) - 0.25).abs() < 1e-6);
//! ```

mod easing;
mod falloff;

pub use easing::Easing;
pub use falloff::Falloff;
