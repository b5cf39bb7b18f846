//! Indexed triangle meshes and the operations that produce them.
//!
//! The [`Mesh`] type is a plain bag of parallel buffers (positions, optional
//! normals and UVs, triangle indices, material groups) with no ties to any
//! rendering host; renderers consume the buffers directly.
//!
//! Generation paths:
//!
//! - [`MeshBuilder`] — incremental vertex/triangle assembly.
//! - [`primitives`] — box, plane, cylinder, cone, sphere, torus, dodecahedron.
//! - [`lathe`] — revolve a 2D profile around the Y axis.
//! - [`extrude`] — extrude a closed 2D outline (with holes) along Z.
//! - [`merge`] / [`merge_grouped`] / [`merge_transformed`] — compose meshes.

mod builder;
mod combine;
mod extrude;
mod lathe;
mod mesh;

pub mod primitives;

pub use builder::MeshBuilder;
pub use combine::{merge, merge_grouped, merge_transformed};
pub use extrude::{ExtrudeError, extrude};
pub use lathe::lathe;
pub use mesh::{Mesh, MeshGroup};
