//! Parametric generators for named real-world shapes.
//!
//! Each generator is a plain config struct (all fields public, sensible
//! [`Default`]s, serde-serializable so recipes can live in project files)
//! plus a free function producing a [`Mesh`](chisel_mesh::Mesh). Identical
//! configs always produce identical meshes — no generator consumes
//! randomness; apply `chisel-sculpt` operations afterwards for organic
//! variation.
//!
//! Out-of-range parameters are clamped to working minima rather than
//! rejected, in keeping with the permissive posture of the mesh kernels.
//!
//! # Example
//!
//! ```
//! use chisel_shapes::{StaircaseConfig, staircase};
//!
//! let mesh = staircase(&StaircaseConfig {
//!     steps: 8,
//!     ..Default::default()
//! });
//! assert!(mesh.triangle_count() > 0);
//! ```

mod fence;
mod floor;
mod headstone;
mod staircase;
mod vessel;
mod wall;

pub use fence::{FenceConfig, fence};
pub use floor::{HexFloorConfig, hex_floor};
pub use headstone::{HeadstoneConfig, headstone};
pub use staircase::{SpiralStaircaseConfig, StaircaseConfig, spiral_staircase, staircase};
pub use vessel::{BarrelConfig, BottleConfig, barrel, bottle};
pub use wall::{BrickWallConfig, brick_wall};
