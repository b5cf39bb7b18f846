//! Incremental mesh assembly.

use crate::Mesh;
use glam::{Vec2, Vec3};

/// Default normal for vertices added without one.
const DEFAULT_NORMAL: Vec3 = Vec3::Y;
/// Default UV for vertices added without one.
const DEFAULT_UV: Vec2 = Vec2::ZERO;

/// Builds an indexed mesh one vertex and face at a time.
///
/// Vertices may be added with or without normals/UVs; if any vertex carries
/// a channel, [`build`](MeshBuilder::build) fills the missing entries with
/// defaults (`(0, 1, 0)` normal, `(0, 0)` UV) so the channel arrays stay
/// parallel to positions. Face methods do not validate indices — passing an
/// out-of-range index is caller error and surfaces later as a panic when
/// the mesh is consumed.
///
/// # Example
///
/// ```
/// use chisel_mesh::MeshBuilder;
/// use glam::Vec3;
///
/// let mut builder = MeshBuilder::new();
/// let a = builder.add_vertex(Vec3::ZERO);
/// let b = builder.add_vertex(Vec3::X);
/// let c = builder.add_vertex(Vec3::Z);
/// builder.triangle(a, b, c);
/// builder.calculate_normals();
/// let mesh = builder.build();
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MeshBuilder {
    positions: Vec<Vec3>,
    normals: Vec<Option<Vec3>>,
    uvs: Vec<Option<Vec2>>,
    indices: Vec<u32>,
    any_normal: bool,
    any_uv: bool,
}

impl MeshBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a position-only vertex and returns its index.
    pub fn add_vertex(&mut self, position: Vec3) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position);
        self.normals.push(None);
        self.uvs.push(None);
        index
    }

    /// Adds a vertex with a normal and UV.
    pub fn add_vertex_full(&mut self, position: Vec3, normal: Vec3, uv: Vec2) -> u32 {
        let index = self.add_vertex(position);
        self.normals[index as usize] = Some(normal);
        self.uvs[index as usize] = Some(uv);
        self.any_normal = true;
        self.any_uv = true;
        index
    }

    /// Adds a single triangle.
    pub fn triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.indices.extend_from_slice(&[i0, i1, i2]);
    }

    /// Adds a quad as two triangles split along the 0-2 diagonal.
    ///
    /// Corners are expected in winding order (counter-clockwise seen from
    /// the visible side).
    pub fn quad(&mut self, i0: u32, i1: u32, i2: u32, i3: u32) {
        self.triangle(i0, i1, i2);
        self.triangle(i0, i2, i3);
    }

    /// Adds a quad as four triangles around an averaged center vertex and
    /// returns the center's index.
    ///
    /// Smoother than [`quad`](MeshBuilder::quad) when the four corners are
    /// not coplanar, at the cost of one extra vertex.
    pub fn subdivided_quad(&mut self, i0: u32, i1: u32, i2: u32, i3: u32) -> u32 {
        let corners = [i0, i1, i2, i3].map(|i| i as usize);

        let center_pos =
            corners.iter().map(|&i| self.positions[i]).sum::<Vec3>() / 4.0;
        let center = self.add_vertex(center_pos);

        if self.any_normal {
            let sum: Vec3 = corners
                .iter()
                .map(|&i| self.normals[i].unwrap_or(DEFAULT_NORMAL))
                .sum();
            self.normals[center as usize] = Some(sum.normalize_or(DEFAULT_NORMAL));
        }
        if self.any_uv {
            let sum: Vec2 = corners
                .iter()
                .map(|&i| self.uvs[i].unwrap_or(DEFAULT_UV))
                .sum();
            self.uvs[center as usize] = Some(sum / 4.0);
        }

        self.triangle(i0, i1, center);
        self.triangle(i1, i2, center);
        self.triangle(i2, i3, center);
        self.triangle(i3, i0, center);
        center
    }

    /// Overwrites all vertex normals with smooth normals computed from the
    /// faces added so far.
    ///
    /// Unnormalized face normals (edge cross products) accumulate per
    /// vertex, then each sum is normalized — area-weighted smoothing.
    pub fn calculate_normals(&mut self) {
        let mut accum = vec![Vec3::ZERO; self.positions.len()];
        for tri in self.indices.chunks_exact(3) {
            let (i0, i1, i2) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            let a = self.positions[i0];
            let face = (self.positions[i1] - a).cross(self.positions[i2] - a);
            accum[i0] += face;
            accum[i1] += face;
            accum[i2] += face;
        }
        for (slot, sum) in self.normals.iter_mut().zip(accum) {
            *slot = Some(sum.normalize_or(DEFAULT_NORMAL));
        }
        self.any_normal = true;
    }

    /// Current number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Finishes the mesh.
    ///
    /// Channels are emitted only if at least one vertex carried them;
    /// missing entries are default-filled.
    pub fn build(self) -> Mesh {
        let normals = if self.any_normal {
            self.normals
                .into_iter()
                .map(|n| n.unwrap_or(DEFAULT_NORMAL))
                .collect()
        } else {
            Vec::new()
        };
        let uvs = if self.any_uv {
            self.uvs
                .into_iter()
                .map(|uv| uv.unwrap_or(DEFAULT_UV))
                .collect()
        } else {
            Vec::new()
        };

        Mesh {
            positions: self.positions,
            normals,
            uvs,
            indices: self.indices,
            groups: Vec::new(),
        }
    }
}
