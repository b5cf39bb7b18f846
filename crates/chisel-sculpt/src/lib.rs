//! Sculpting brushes: falloff-weighted vertex displacement operators.
//!
//! Every brush touches only vertices strictly inside the stroke radius and
//! mutates the mesh's position buffer in place; vertices at or beyond the
//! radius are left bit-identical. Brushes never touch normals — callers
//! re-run [`Mesh::recompute_normals`](chisel_mesh::Mesh::recompute_normals)
//! once sculpting is done.
//!
//! Randomized operations ([`noise`], [`scatter_along_axis`]) take the RNG as
//! an argument so tests and reproducible pipelines can pass a seeded
//! generator.
//!
//! # Example
//!
//! ```
//! use chisel_ease::Falloff;
//! use chisel_mesh::primitives::uv_sphere;
//! use chisel_sculpt::{Stroke, displace};
//! use glam::Vec3;
//!
//! let mut mesh = uv_sphere(1.0, 16, 8);
//! let stroke = Stroke {
//!     center: Vec3::Y,
//!     radius: 0.5,
//!     strength: 0.2,
//!     falloff: Falloff::Smoothstep,
//! };
//! displace(&mut mesh, &stroke, Vec3::Y);
//! mesh.recompute_normals();
//! ```

mod brush;
mod scatter;

pub use brush::{Stroke, displace, flatten, noise, smooth, spike, twist};
pub use scatter::scatter_along_axis;
