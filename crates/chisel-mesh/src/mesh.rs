//! The mesh data type.

use glam::{Mat4, Vec2, Vec3};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A contiguous index range rendered with one material slot.
///
/// `start` and `count` are in indices (not triangles); both are multiples
/// of 3 for well-formed meshes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeshGroup {
    pub start: usize,
    pub count: usize,
    pub material: u32,
}

/// An indexed triangle mesh.
///
/// `normals` and `uvs` are either empty or exactly `positions.len()` long.
/// Indices come in triples, each less than the vertex count. `groups` is
/// optional and only used by multi-material shapes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Mesh {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub indices: Vec<u32>,
    pub groups: Vec<MeshGroup>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn has_normals(&self) -> bool {
        !self.normals.is_empty() && self.normals.len() == self.positions.len()
    }

    pub fn has_uvs(&self) -> bool {
        !self.uvs.is_empty() && self.uvs.len() == self.positions.len()
    }

    /// Translates every vertex by `offset`. Normals are unaffected.
    pub fn translate(&mut self, offset: Vec3) -> &mut Self {
        for pos in &mut self.positions {
            *pos += offset;
        }
        self
    }

    /// Applies an affine transform to positions and normals.
    ///
    /// Normals use the inverse-transpose so non-uniform scaling keeps them
    /// perpendicular to their surfaces.
    pub fn transform(&mut self, matrix: Mat4) -> &mut Self {
        for pos in &mut self.positions {
            *pos = matrix.transform_point3(*pos);
        }
        if !self.normals.is_empty() {
            let normal_matrix = matrix.inverse().transpose();
            for normal in &mut self.normals {
                *normal = normal_matrix.transform_vector3(*normal).normalize_or_zero();
            }
        }
        self
    }

    /// Reverses the winding of every triangle (flips the visible side).
    pub fn flip_winding(&mut self) -> &mut Self {
        for tri in self.indices.chunks_exact_mut(3) {
            tri.swap(1, 2);
        }
        self
    }

    /// Recomputes smooth vertex normals from triangle geometry.
    ///
    /// Unnormalized face normals (cross product of two edges) accumulate on
    /// each vertex, weighting shared vertices by triangle area, then the sum
    /// is normalized. Degenerate triangles contribute a zero vector and are
    /// effectively ignored.
    pub fn recompute_normals(&mut self) -> &mut Self {
        self.normals.clear();
        self.normals.resize(self.positions.len(), Vec3::ZERO);

        for tri in self.indices.chunks_exact(3) {
            let (i0, i1, i2) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            let a = self.positions[i0];
            let face = (self.positions[i1] - a).cross(self.positions[i2] - a);
            self.normals[i0] += face;
            self.normals[i1] += face;
            self.normals[i2] += face;
        }

        for normal in &mut self.normals {
            *normal = normal.normalize_or(Vec3::Y);
        }
        self
    }

    /// Merges vertices closer together than `tolerance` and remaps indices.
    ///
    /// The first vertex of each coincident cluster survives, keeping its
    /// normal and UV if present. Triangles that collapse (two or more corners
    /// welded together) are dropped. Quantizes positions onto a grid of
    /// `tolerance` cells, so two vertices straddling a cell boundary at just
    /// under the tolerance may stay separate.
    pub fn weld(&mut self, tolerance: f32) -> &mut Self {
        let inv = 1.0 / tolerance.max(f32::MIN_POSITIVE);
        let mut cell_to_kept: HashMap<(i64, i64, i64), u32> = HashMap::new();
        let mut remap: Vec<u32> = Vec::with_capacity(self.positions.len());

        let mut positions = Vec::new();
        let mut normals = Vec::new();
        let mut uvs = Vec::new();
        let keep_normals = self.has_normals();
        let keep_uvs = self.has_uvs();

        for (i, pos) in self.positions.iter().enumerate() {
            let key = (
                (pos.x * inv).round() as i64,
                (pos.y * inv).round() as i64,
                (pos.z * inv).round() as i64,
            );
            let next = positions.len() as u32;
            let kept = *cell_to_kept.entry(key).or_insert(next);
            if kept == next {
                positions.push(*pos);
                if keep_normals {
                    normals.push(self.normals[i]);
                }
                if keep_uvs {
                    uvs.push(self.uvs[i]);
                }
            }
            remap.push(kept);
        }

        let mut indices = Vec::with_capacity(self.indices.len());
        for tri in self.indices.chunks_exact(3) {
            let (a, b, c) = (
                remap[tri[0] as usize],
                remap[tri[1] as usize],
                remap[tri[2] as usize],
            );
            if a != b && b != c && a != c {
                indices.extend_from_slice(&[a, b, c]);
            }
        }

        self.positions = positions;
        self.normals = normals;
        self.uvs = uvs;
        self.indices = indices;
        // Index ranges are stale after dropping triangles.
        self.groups.clear();
        self
    }

    /// Axis-aligned bounding box, or `None` for an empty mesh.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = *self.positions.first()?;
        let mut min = first;
        let mut max = first;
        for pos in &self.positions[1..] {
            min = min.min(*pos);
            max = max.max(*pos);
        }
        Some((min, max))
    }
}
