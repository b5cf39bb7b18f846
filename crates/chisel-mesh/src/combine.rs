//! Mesh composition by concatenation.

use crate::{Mesh, MeshGroup};
use glam::{Mat4, Vec2, Vec3};

/// Merges meshes into one by concatenating buffers.
///
/// Index values are offset by the running vertex count so each source's
/// triangles keep referring to its own vertices. If any input carries
/// normals or UVs, the output carries that channel for all vertices; inputs
/// missing the channel are padded with defaults (`(0, 1, 0)` / `(0, 0)`).
/// Input groups are ignored; use [`merge_grouped`] to keep material ranges.
pub fn merge(meshes: &[&Mesh]) -> Mesh {
    merge_inner(meshes.iter().map(|m| (*m, None)))
}

/// Merges meshes, tagging each source's index range with a material slot.
///
/// The output's `groups` holds one [`MeshGroup`] per non-empty source, in
/// input order, covering exactly that source's triangles.
pub fn merge_grouped(meshes: &[(&Mesh, u32)]) -> Mesh {
    merge_inner(meshes.iter().map(|(m, material)| (*m, Some(*material))))
}

/// Merges meshes after applying a per-source transform.
pub fn merge_transformed(meshes: &[(&Mesh, Mat4)]) -> Mesh {
    let transformed: Vec<Mesh> = meshes
        .iter()
        .map(|(mesh, matrix)| {
            let mut copy = (*mesh).clone();
            copy.transform(*matrix);
            copy
        })
        .collect();
    let refs: Vec<&Mesh> = transformed.iter().collect();
    merge(&refs)
}

fn merge_inner<'a>(meshes: impl Iterator<Item = (&'a Mesh, Option<u32>)> + Clone) -> Mesh {
    let mut result = Mesh::new();

    let total_vertices: usize = meshes.clone().map(|(m, _)| m.vertex_count()).sum();
    let total_indices: usize = meshes.clone().map(|(m, _)| m.indices.len()).sum();
    let any_normals = meshes.clone().any(|(m, _)| m.has_normals());
    let any_uvs = meshes.clone().any(|(m, _)| m.has_uvs());

    result.positions.reserve(total_vertices);
    result.indices.reserve(total_indices);
    if any_normals {
        result.normals.reserve(total_vertices);
    }
    if any_uvs {
        result.uvs.reserve(total_vertices);
    }

    for (mesh, material) in meshes {
        if mesh.positions.is_empty() {
            continue;
        }

        let vertex_offset = result.positions.len() as u32;
        let index_start = result.indices.len();

        result.positions.extend_from_slice(&mesh.positions);
        if any_normals {
            if mesh.has_normals() {
                result.normals.extend_from_slice(&mesh.normals);
            } else {
                result.normals.resize(result.positions.len(), Vec3::Y);
            }
        }
        if any_uvs {
            if mesh.has_uvs() {
                result.uvs.extend_from_slice(&mesh.uvs);
            } else {
                result.uvs.resize(result.positions.len(), Vec2::ZERO);
            }
        }

        for &idx in &mesh.indices {
            result.indices.push(vertex_offset + idx);
        }

        if let Some(material) = material {
            result.groups.push(MeshGroup {
                start: index_start,
                count: mesh.indices.len(),
                material,
            });
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{box_mesh, uv_sphere};

    #[test]
    fn test_merge_empty() {
        let result = merge(&[]);
        assert_eq!(result.vertex_count(), 0);
        assert_eq!(result.indices.len(), 0);
    }

    #[test]
    fn test_merge_offsets_indices() {
        let a = box_mesh(Vec3::ONE);
        let b = uv_sphere(0.5, 8, 4);
        let merged = merge(&[&a, &b]);

        assert_eq!(merged.vertex_count(), a.vertex_count() + b.vertex_count());
        assert_eq!(merged.indices.len(), a.indices.len() + b.indices.len());
        for &idx in &merged.indices {
            assert!((idx as usize) < merged.vertex_count());
        }
    }

    #[test]
    fn test_merge_round_trip() {
        // Slicing the merged buffers by the original counts reproduces both
        // inputs' triangles, modulo the documented index offset.
        let a = box_mesh(Vec3::ONE);
        let b = box_mesh(Vec3::splat(0.5));
        let merged = merge(&[&a, &b]);

        let (a_indices, b_indices) = merged.indices.split_at(a.indices.len());
        assert_eq!(a_indices, &a.indices[..]);

        let offset = a.vertex_count() as u32;
        let unshifted: Vec<u32> = b_indices.iter().map(|&i| i - offset).collect();
        assert_eq!(unshifted, b.indices);

        assert_eq!(&merged.positions[..a.vertex_count()], &a.positions[..]);
        assert_eq!(&merged.positions[a.vertex_count()..], &b.positions[..]);
    }

    #[test]
    fn test_merge_pads_missing_uvs() {
        let with_uvs = box_mesh(Vec3::ONE);
        let mut bare = box_mesh(Vec3::ONE);
        bare.uvs.clear();
        bare.normals.clear();

        let merged = merge(&[&with_uvs, &bare]);
        assert_eq!(merged.uvs.len(), merged.vertex_count());
        assert_eq!(merged.normals.len(), merged.vertex_count());
        assert_eq!(merged.uvs[with_uvs.vertex_count()], Vec2::ZERO);
        assert_eq!(merged.normals[with_uvs.vertex_count()], Vec3::Y);
    }

    #[test]
    fn test_merge_grouped_ranges() {
        let a = box_mesh(Vec3::ONE);
        let b = box_mesh(Vec3::ONE);
        let merged = merge_grouped(&[(&a, 0), (&b, 7)]);

        assert_eq!(merged.groups.len(), 2);
        assert_eq!(merged.groups[0].start, 0);
        assert_eq!(merged.groups[0].count, a.indices.len());
        assert_eq!(merged.groups[0].material, 0);
        assert_eq!(merged.groups[1].start, a.indices.len());
        assert_eq!(merged.groups[1].count, b.indices.len());
        assert_eq!(merged.groups[1].material, 7);

        let total: usize = merged.groups.iter().map(|g| g.count).sum();
        assert_eq!(total, merged.indices.len());
    }

    #[test]
    fn test_merge_transformed_translates() {
        let mesh = box_mesh(Vec3::ONE);
        let merged = merge_transformed(&[
            (&mesh, Mat4::from_translation(Vec3::new(10.0, 0.0, 0.0))),
            (&mesh, Mat4::IDENTITY),
        ]);
        assert_eq!(merged.vertex_count(), mesh.vertex_count() * 2);
        // First copy sits around x = 10.
        assert!(merged.positions[0].x > 9.0);
    }
}
