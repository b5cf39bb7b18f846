//! Surface of revolution.

use crate::{Mesh, MeshBuilder};
use glam::{Vec2, Vec3};
use std::f32::consts::TAU;

/// Revolves a 2D profile 360° around the +Y axis.
///
/// Profile points are `(radius, height)` pairs in order along the outline;
/// each becomes a ring of vertices. The sweep emits `segments + 1` rings of
/// columns — the seam column at segment 0 is duplicated at segment
/// `segments` (same positions, wrapped UVs), which is the closure
/// convention callers can rely on. Winding assumes the profile runs
/// bottom-to-top with radii on the +X side; a profile traversed top-to-bottom
/// comes out inside-out (use [`Mesh::flip_winding`]).
///
/// UVs: `u` is the sweep fraction, `v` the profile index fraction. Normals
/// are recomputed from the generated faces. A profile with fewer than two
/// points produces an empty mesh.
pub fn lathe(profile: &[Vec2], segments: u32) -> Mesh {
    if profile.len() < 2 {
        log::warn!("lathe: profile has {} points, need 2", profile.len());
        return Mesh::new();
    }
    let segments = segments.max(3);
    let mut builder = MeshBuilder::new();

    let rows = profile.len() as u32;
    for segment in 0..=segments {
        let u = segment as f32 / segments as f32;
        let theta = u * TAU;
        let (sin, cos) = theta.sin_cos();
        for (row, point) in profile.iter().enumerate() {
            let v = row as f32 / (rows - 1) as f32;
            let position = Vec3::new(cos * point.x, point.y, sin * point.x);
            // Normal is filled in afterwards from face geometry.
            builder.add_vertex_full(position, Vec3::Y, Vec2::new(u, v));
        }
    }

    for segment in 0..segments {
        for row in 0..rows - 1 {
            let i0 = segment * rows + row;
            let i1 = i0 + 1;
            let i2 = i0 + rows;
            let i3 = i2 + 1;
            // CCW from outside: theta grows toward +Z, profile rises in v.
            builder.quad(i0, i1, i3, i2);
        }
    }

    let mut mesh = builder.build();
    mesh.recompute_normals();
    mesh
}
