//! Prism extrusion of a closed 2D outline.

use crate::{Mesh, MeshBuilder};
use glam::{Vec2, Vec3};
use thiserror::Error;

/// Extrusion failure.
#[derive(Debug, Clone, Error)]
pub enum ExtrudeError {
    /// Outline (or a hole) has fewer than 3 points.
    #[error("outline needs at least 3 points, got {0}")]
    DegenerateOutline(usize),
    /// Cap triangulation produced no triangles (self-intersecting or
    /// zero-area outline).
    #[error("cap triangulation failed: {0}")]
    Triangulation(String),
}

/// Extrudes a closed 2D outline (with optional holes) along the Z axis.
///
/// The outline lives in the XY plane; the solid spans `z` in
/// `[-depth/2, depth/2]`. Front and back caps are triangulated with earcut,
/// side walls are flat-shaded quads along every loop. Outline winding is
/// normalized internally (outer counter-clockwise, holes clockwise), so
/// callers can pass loops in either direction.
///
/// Cap UVs are the XY coordinates normalized to the outline's bounding box;
/// wall UVs run arc-length along each loop and front-to-back across the
/// depth.
pub fn extrude(outline: &[Vec2], holes: &[Vec<Vec2>], depth: f32) -> Result<Mesh, ExtrudeError> {
    if outline.len() < 3 {
        return Err(ExtrudeError::DegenerateOutline(outline.len()));
    }
    for hole in holes {
        if hole.len() < 3 {
            return Err(ExtrudeError::DegenerateOutline(hole.len()));
        }
    }

    // Normalize winding: outer CCW, holes CW.
    let mut outer: Vec<Vec2> = outline.to_vec();
    if signed_area(&outer) < 0.0 {
        outer.reverse();
    }
    let holes: Vec<Vec<Vec2>> = holes
        .iter()
        .map(|hole| {
            let mut loop_ = hole.clone();
            if signed_area(&loop_) > 0.0 {
                loop_.reverse();
            }
            loop_
        })
        .collect();

    // Flatten for earcut: outer ring first, then holes with start offsets.
    let mut coords: Vec<f32> = Vec::new();
    let mut hole_starts: Vec<usize> = Vec::new();
    for point in &outer {
        coords.extend_from_slice(&[point.x, point.y]);
    }
    for hole in &holes {
        hole_starts.push(coords.len() / 2);
        for point in hole {
            coords.extend_from_slice(&[point.x, point.y]);
        }
    }

    let cap_triangles = earcutr::earcut(&coords, &hole_starts, 2)
        .map_err(|e| ExtrudeError::Triangulation(format!("{e:?}")))?;
    if cap_triangles.is_empty() {
        return Err(ExtrudeError::Triangulation("no triangles emitted".into()));
    }

    let half = depth * 0.5;
    let mut builder = MeshBuilder::new();

    // Cap UVs from the outline bounding box.
    let (min, max) = bounds_2d(&outer);
    let span = (max - min).max(Vec2::splat(f32::MIN_POSITIVE));
    let cap_uv = |p: Vec2| (p - min) / span;

    // All cap vertices in ring order: outer then holes, matching `coords`.
    let ring_points: Vec<Vec2> = outer
        .iter()
        .chain(holes.iter().flatten())
        .copied()
        .collect();

    // Front cap (+Z).
    let front_base = builder.vertex_count() as u32;
    for point in &ring_points {
        builder.add_vertex_full(point.extend(half), Vec3::Z, cap_uv(*point));
    }
    for tri in cap_triangles.chunks_exact(3) {
        // Earcut preserves the CCW outer winding: faces +Z as-is.
        builder.triangle(
            front_base + tri[0] as u32,
            front_base + tri[1] as u32,
            front_base + tri[2] as u32,
        );
    }

    // Back cap (-Z), reversed winding.
    let back_base = builder.vertex_count() as u32;
    for point in &ring_points {
        builder.add_vertex_full(point.extend(-half), Vec3::NEG_Z, cap_uv(*point));
    }
    for tri in cap_triangles.chunks_exact(3) {
        builder.triangle(
            back_base + tri[0] as u32,
            back_base + tri[2] as u32,
            back_base + tri[1] as u32,
        );
    }

    // Side walls, one flat quad per edge of every loop.
    add_walls(&mut builder, &outer, half);
    for hole in &holes {
        add_walls(&mut builder, hole, half);
    }

    Ok(builder.build())
}

/// Emits flat-shaded wall quads along one loop.
///
/// Works for both the CCW outer loop and CW holes: in both cases the
/// right-hand side of the direction of travel is the solid's exterior.
fn add_walls(builder: &mut MeshBuilder, loop_points: &[Vec2], half: f32) {
    let perimeter: f32 = loop_edges(loop_points)
        .map(|(a, b)| (b - a).length())
        .sum();
    let perimeter = perimeter.max(f32::MIN_POSITIVE);

    let mut walked = 0.0;
    for (a, b) in loop_edges(loop_points) {
        let edge = b - a;
        let length = edge.length();
        if length < f32::MIN_POSITIVE {
            continue;
        }
        let normal = Vec2::new(edge.y, -edge.x).normalize().extend(0.0);
        let u0 = walked / perimeter;
        let u1 = (walked + length) / perimeter;
        walked += length;

        let f0 = builder.add_vertex_full(a.extend(half), normal, Vec2::new(u0, 0.0));
        let f1 = builder.add_vertex_full(b.extend(half), normal, Vec2::new(u1, 0.0));
        let b0 = builder.add_vertex_full(a.extend(-half), normal, Vec2::new(u0, 1.0));
        let b1 = builder.add_vertex_full(b.extend(-half), normal, Vec2::new(u1, 1.0));

        builder.quad(f1, f0, b0, b1);
    }
}

fn loop_edges(points: &[Vec2]) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
    (0..points.len()).map(|i| (points[i], points[(i + 1) % points.len()]))
}

/// Shoelace formula; positive for counter-clockwise loops.
fn signed_area(points: &[Vec2]) -> f32 {
    loop_edges(points)
        .map(|(a, b)| (b.x - a.x) * (b.y + a.y))
        .sum::<f32>()
        * -0.5
}

fn bounds_2d(points: &[Vec2]) -> (Vec2, Vec2) {
    let mut min = points[0];
    let mut max = points[0];
    for p in &points[1..] {
        min = min.min(*p);
        max = max.max(*p);
    }
    (min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn test_signed_area() {
        assert!(signed_area(&unit_square()) > 0.0);
        let mut reversed = unit_square();
        reversed.reverse();
        assert!(signed_area(&reversed) < 0.0);
    }

    #[test]
    fn test_square_extrusion_counts() {
        let mesh = extrude(&unit_square(), &[], 2.0).unwrap();
        // Caps: 2 triangles each; walls: 2 per edge.
        assert_eq!(mesh.triangle_count(), 2 + 2 + 4 * 2);
        let (min, max) = mesh.bounds().unwrap();
        assert!((min.z + 1.0).abs() < 1e-6);
        assert!((max.z - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_winding_insensitive() {
        let mut reversed = unit_square();
        reversed.reverse();
        let a = extrude(&unit_square(), &[], 1.0).unwrap();
        let b = extrude(&reversed, &[], 1.0).unwrap();
        assert_eq!(a.triangle_count(), b.triangle_count());
    }

    #[test]
    fn test_extrusion_with_hole() {
        let hole = vec![
            Vec2::new(0.25, 0.25),
            Vec2::new(0.75, 0.25),
            Vec2::new(0.75, 0.75),
            Vec2::new(0.25, 0.75),
        ];
        let mesh = extrude(&unit_square(), &[hole], 1.0).unwrap();

        // 8 cap vertices per side and walls along both loops.
        assert!(mesh.triangle_count() > 16);
        // No cap triangle centroid may land inside the hole.
        for tri in mesh.indices.chunks_exact(3) {
            let a = mesh.positions[tri[0] as usize];
            let b = mesh.positions[tri[1] as usize];
            let c = mesh.positions[tri[2] as usize];
            let centroid = (a + b + c) / 3.0;
            let on_cap = (centroid.z.abs() - 0.5).abs() < 1e-5
                && (a.z - b.z).abs() < 1e-6
                && (a.z - c.z).abs() < 1e-6;
            if on_cap {
                let inside_hole = centroid.x > 0.25
                    && centroid.x < 0.75
                    && centroid.y > 0.25
                    && centroid.y < 0.75;
                assert!(!inside_hole, "cap triangle covers the hole at {centroid:?}");
            }
        }
    }

    #[test]
    fn test_cap_normals() {
        let mesh = extrude(&unit_square(), &[], 1.0).unwrap();
        for (pos, normal) in mesh.positions.iter().zip(&mesh.normals) {
            if *normal == Vec3::Z {
                assert!((pos.z - 0.5).abs() < 1e-6);
            } else if *normal == Vec3::NEG_Z {
                assert!((pos.z + 0.5).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_wall_normals_outward() {
        let mesh = extrude(&unit_square(), &[], 1.0).unwrap();
        let center = Vec3::new(0.5, 0.5, 0.0);
        for (pos, normal) in mesh.positions.iter().zip(&mesh.normals) {
            if normal.z.abs() < 1e-6 {
                assert!(normal.dot(*pos - center) > 0.0, "inward wall at {pos:?}");
            }
        }
    }

    #[test]
    fn test_degenerate_outline_rejected() {
        assert!(matches!(
            extrude(&[Vec2::ZERO, Vec2::X], &[], 1.0),
            Err(ExtrudeError::DegenerateOutline(2))
        ));
    }
}
