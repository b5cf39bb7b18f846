//! Randomized vertex scatter.

use chisel_mesh::Mesh;
use glam::Vec3;
use rand::Rng;

/// Weld tolerance applied before scattering.
const WELD_TOLERANCE: f32 = 1e-4;

/// Displaces every vertex along `axis` by an independent uniform draw from
/// `[min_scale, max_scale]`.
///
/// The order of operations matters and is part of the contract:
///
/// 1. Existing UV and normal channels are dropped (they would be stale).
/// 2. Coincident vertices are welded so that a crack-free surface stays
///    crack-free — without the weld, duplicated seam vertices would each
///    draw their own offset and tear the mesh apart.
/// 3. Each remaining vertex gets its offset.
/// 4. Normals are recomputed from the displaced geometry.
///
/// Pass a seeded RNG for reproducible output.
pub fn scatter_along_axis<'a>(
    mesh: &'a mut Mesh,
    axis: Vec3,
    min_scale: f32,
    max_scale: f32,
    rng: &mut impl Rng,
) -> &'a mut Mesh {
    mesh.uvs.clear();
    mesh.normals.clear();
    mesh.weld(WELD_TOLERANCE);

    for pos in &mut mesh.positions {
        *pos += axis * rng.random_range(min_scale..=max_scale);
    }

    mesh.recompute_normals();
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use chisel_mesh::primitives::{box_mesh, plane};
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_scatter_welds_before_perturbing() {
        // The box duplicates corner vertices per face (24 for 8 corners).
        // Welding first means each corner draws one offset, so faces stay
        // connected: every triangle edge length stays finite and shared
        // corners agree.
        let mut mesh = box_mesh(Vec3::ONE);
        scatter_along_axis(&mut mesh, Vec3::Y, 0.0, 0.5, &mut Pcg32::seed_from_u64(3));
        assert_eq!(mesh.vertex_count(), 8);
    }

    #[test]
    fn test_scatter_offsets_within_range() {
        let mut mesh = plane(Vec2::new(4.0, 4.0), 4);
        let before = mesh.positions.clone();
        let mut welded = mesh.clone();
        welded.weld(1e-4); // plane has no duplicates; same vertex order
        assert_eq!(welded.vertex_count(), before.len());

        scatter_along_axis(&mut mesh, Vec3::Y, 0.25, 0.75, &mut Pcg32::seed_from_u64(11));
        for (b, a) in before.iter().zip(&mesh.positions) {
            let offset = a.y - b.y;
            assert!((0.25..=0.75).contains(&offset), "offset {offset}");
            assert_eq!(a.x, b.x);
            assert_eq!(a.z, b.z);
        }
    }

    #[test]
    fn test_scatter_deterministic_with_seed() {
        let base = plane(Vec2::new(4.0, 4.0), 6);
        let mut a = base.clone();
        let mut b = base.clone();
        scatter_along_axis(&mut a, Vec3::Y, -0.2, 0.2, &mut Pcg32::seed_from_u64(5));
        scatter_along_axis(&mut b, Vec3::Y, -0.2, 0.2, &mut Pcg32::seed_from_u64(5));
        assert_eq!(a.positions, b.positions);
    }

    #[test]
    fn test_scatter_returns_the_mesh_for_chaining() {
        let mut mesh = plane(Vec2::new(4.0, 4.0), 3);
        let count = scatter_along_axis(&mut mesh, Vec3::Y, 0.0, 0.1, &mut Pcg32::seed_from_u64(2))
            .vertex_count();
        assert_eq!(count, mesh.vertex_count());
    }

    #[test]
    fn test_scatter_rebuilds_normals_and_drops_uvs() {
        let mut mesh = plane(Vec2::new(4.0, 4.0), 4);
        assert!(mesh.has_uvs());
        scatter_along_axis(&mut mesh, Vec3::Y, -0.1, 0.1, &mut Pcg32::seed_from_u64(9));
        assert!(!mesh.has_uvs());
        assert!(mesh.has_normals());
        for normal in &mesh.normals {
            assert!((normal.length() - 1.0).abs() < 1e-4);
        }
    }
}
