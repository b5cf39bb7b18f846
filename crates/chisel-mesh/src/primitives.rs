//! Primitive mesh generators.
//!
//! Every primitive is centered at the origin. Hard-edged shapes (box,
//! cylinder caps) duplicate vertices per face so normals stay sharp; smooth
//! shapes (sphere, torus) share ring vertices with a duplicated seam column
//! for clean UV wrapping.

use glam::{Vec2, Vec3};
use std::f32::consts::{PI, TAU};

use crate::{Mesh, MeshBuilder};

/// An axis-aligned box with the given full extents.
///
/// Each face owns its four vertices for hard edges: 24 vertices, 12
/// triangles, unit UVs per face.
pub fn box_mesh(extents: Vec3) -> Mesh {
    let h = extents * 0.5;
    let mut builder = MeshBuilder::new();

    // Per face: normal, then the two in-plane tangents spanning it.
    let faces: [(Vec3, Vec3, Vec3); 6] = [
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
    ];

    let corner_uvs = [
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(0.0, 1.0),
    ];

    for (normal, u_axis, v_axis) in faces {
        let origin = normal * (normal.abs().dot(h));
        let u = u_axis * (u_axis.abs().dot(h));
        let v = v_axis * (v_axis.abs().dot(h));

        let corners = [
            origin - u - v,
            origin + u - v,
            origin + u + v,
            origin - u + v,
        ];
        let indices =
            [0, 1, 2, 3].map(|i| builder.add_vertex_full(corners[i], normal, corner_uvs[i]));
        builder.quad(indices[0], indices[1], indices[2], indices[3]);
    }

    builder.build()
}

/// A flat rectangular grid in the XZ plane facing +Y.
///
/// `subdivisions` counts cells per side (minimum 1), so the grid has
/// `(subdivisions + 1)^2` vertices.
pub fn plane(size: Vec2, subdivisions: u32) -> Mesh {
    let cells = subdivisions.max(1);
    let mut builder = MeshBuilder::new();

    for row in 0..=cells {
        let v = row as f32 / cells as f32;
        for col in 0..=cells {
            let u = col as f32 / cells as f32;
            let position = Vec3::new((u - 0.5) * size.x, 0.0, (v - 0.5) * size.y);
            builder.add_vertex_full(position, Vec3::Y, Vec2::new(u, v));
        }
    }

    let stride = cells + 1;
    for row in 0..cells {
        for col in 0..cells {
            let i0 = row * stride + col;
            let i1 = i0 + 1;
            let i2 = i0 + stride + 1;
            let i3 = i0 + stride;
            // CCW seen from +Y: rows advance toward +Z, so the next-row
            // corners come before the next-column ones.
            builder.quad(i0, i3, i2, i1);
        }
    }

    builder.build()
}

/// A capped cylinder (or cone / truncated cone) along the Y axis.
///
/// `radius_top` of zero produces a cone with an apex ring. Side vertices are
/// duplicated against the caps so the rim stays sharp. Minimum 3 segments.
pub fn cylinder(radius_top: f32, radius_bottom: f32, height: f32, segments: u32) -> Mesh {
    let segments = segments.max(3);
    let half = height * 0.5;
    let mut builder = MeshBuilder::new();

    // Side: two rings with a duplicated seam column for UV wrap.
    // Slanted normal accounts for the radius difference.
    let slope = (radius_bottom - radius_top) / height;
    let side_base = builder.vertex_count() as u32;
    for ring in 0..2 {
        let (y, radius, v) = if ring == 0 {
            (-half, radius_bottom, 0.0)
        } else {
            (half, radius_top, 1.0)
        };
        for segment in 0..=segments {
            let u = segment as f32 / segments as f32;
            let theta = u * TAU;
            let (sin, cos) = theta.sin_cos();
            let normal = Vec3::new(cos, slope, sin).normalize();
            builder.add_vertex_full(
                Vec3::new(cos * radius, y, sin * radius),
                normal,
                Vec2::new(u, v),
            );
        }
    }
    let stride = segments + 1;
    let apex_top = radius_top <= 0.0;
    for segment in 0..segments {
        let i0 = side_base + segment;
        let i1 = i0 + 1;
        let i2 = i0 + stride;
        let i3 = i2 + 1;
        // CCW from outside (+X at theta=0 faces outward, theta grows toward +Z).
        if apex_top {
            // Top ring collapses to the apex; skip the degenerate half.
            builder.triangle(i0, i3, i1);
        } else {
            builder.quad(i0, i2, i3, i1);
        }
    }

    // Caps: triangle fans around a center vertex.
    for (y, radius, normal) in [
        (-half, radius_bottom, Vec3::NEG_Y),
        (half, radius_top, Vec3::Y),
    ] {
        if radius <= 0.0 {
            continue;
        }
        let center = builder.add_vertex_full(Vec3::new(0.0, y, 0.0), normal, Vec2::splat(0.5));
        let rim_base = builder.vertex_count() as u32;
        for segment in 0..=segments {
            let theta = segment as f32 / segments as f32 * TAU;
            let (sin, cos) = theta.sin_cos();
            builder.add_vertex_full(
                Vec3::new(cos * radius, y, sin * radius),
                normal,
                Vec2::new(cos * 0.5 + 0.5, sin * 0.5 + 0.5),
            );
        }
        for segment in 0..segments {
            let a = rim_base + segment;
            let b = rim_base + segment + 1;
            if normal.y > 0.0 {
                builder.triangle(center, b, a);
            } else {
                builder.triangle(center, a, b);
            }
        }
    }

    builder.build()
}

/// A cone along the Y axis: a cylinder with a zero top radius.
pub fn cone(radius: f32, height: f32, segments: u32) -> Mesh {
    cylinder(0.0, radius, height, segments)
}

/// A UV sphere.
///
/// `segments` divides longitude (minimum 3), `rings` latitude (minimum 2).
/// Rings share vertices; each ring carries a duplicated seam column.
pub fn uv_sphere(radius: f32, segments: u32, rings: u32) -> Mesh {
    let segments = segments.max(3);
    let rings = rings.max(2);
    let mut builder = MeshBuilder::new();

    for ring in 0..=rings {
        let v = ring as f32 / rings as f32;
        let phi = PI * v;
        for segment in 0..=segments {
            let u = segment as f32 / segments as f32;
            let theta = TAU * u;
            let direction = Vec3::new(
                phi.sin() * theta.cos(),
                phi.cos(),
                phi.sin() * theta.sin(),
            );
            builder.add_vertex_full(direction * radius, direction, Vec2::new(u, v));
        }
    }

    let stride = segments + 1;
    for ring in 0..rings {
        for segment in 0..segments {
            let i0 = ring * stride + segment;
            let i1 = i0 + 1;
            let i2 = i0 + stride;
            let i3 = i2 + 1;
            if ring == 0 {
                builder.triangle(i0, i2, i3);
            } else if ring == rings - 1 {
                builder.triangle(i0, i2, i1);
            } else {
                builder.quad(i0, i2, i3, i1);
            }
        }
    }

    builder.build()
}

/// A torus around the Y axis.
///
/// `radius` is the distance from the origin to the tube center,
/// `tube_radius` the tube's own radius. Minimum 3 for both segment counts.
pub fn torus(radius: f32, tube_radius: f32, segments: u32, tube_segments: u32) -> Mesh {
    let segments = segments.max(3);
    let tube_segments = tube_segments.max(3);
    let mut builder = MeshBuilder::new();

    for segment in 0..=segments {
        let u = segment as f32 / segments as f32;
        let theta = u * TAU;
        let (sin_t, cos_t) = theta.sin_cos();
        let ring_center = Vec3::new(cos_t * radius, 0.0, sin_t * radius);

        for tube in 0..=tube_segments {
            let v = tube as f32 / tube_segments as f32;
            let phi = v * TAU;
            let (sin_p, cos_p) = phi.sin_cos();
            // Outward in the ring plane, plus the vertical component.
            let normal = Vec3::new(cos_t * cos_p, sin_p, sin_t * cos_p);
            builder.add_vertex_full(
                ring_center + normal * tube_radius,
                normal,
                Vec2::new(u, v),
            );
        }
    }

    let stride = tube_segments + 1;
    for segment in 0..segments {
        for tube in 0..tube_segments {
            let i0 = segment * stride + tube;
            let i1 = i0 + 1;
            let i2 = i0 + stride;
            let i3 = i2 + 1;
            builder.quad(i0, i1, i3, i2);
        }
    }

    builder.build()
}

/// A regular dodecahedron with vertices at `radius` from the origin.
///
/// Literal golden-ratio vertex table; every canonical vertex already sits at
/// distance sqrt(3), so a single uniform scale lands them on the sphere.
/// Pentagon faces arrive pre-triangulated (three fan triangles each).
/// Vertices are shared, normals point radially.
pub fn dodecahedron(radius: f32) -> Mesh {
    const PHI: f32 = 1.618_034;
    const INV: f32 = 1.0 / PHI;

    #[rustfmt::skip]
    let corners: [Vec3; 20] = [
        Vec3::new(-1.0, -1.0, -1.0), Vec3::new(-1.0, -1.0, 1.0),
        Vec3::new(-1.0, 1.0, -1.0),  Vec3::new(-1.0, 1.0, 1.0),
        Vec3::new(1.0, -1.0, -1.0),  Vec3::new(1.0, -1.0, 1.0),
        Vec3::new(1.0, 1.0, -1.0),   Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(0.0, -INV, -PHI),  Vec3::new(0.0, -INV, PHI),
        Vec3::new(0.0, INV, -PHI),   Vec3::new(0.0, INV, PHI),
        Vec3::new(-INV, -PHI, 0.0),  Vec3::new(-INV, PHI, 0.0),
        Vec3::new(INV, -PHI, 0.0),   Vec3::new(INV, PHI, 0.0),
        Vec3::new(-PHI, 0.0, -INV),  Vec3::new(PHI, 0.0, -INV),
        Vec3::new(-PHI, 0.0, INV),   Vec3::new(PHI, 0.0, INV),
    ];

    #[rustfmt::skip]
    const TRIANGLES: [u32; 108] = [
        3, 11, 7,   3, 7, 15,   3, 15, 13,
        7, 19, 17,  7, 17, 6,   7, 6, 15,
        17, 4, 8,   17, 8, 10,  17, 10, 6,
        8, 0, 16,   8, 16, 2,   8, 2, 10,
        0, 12, 1,   0, 1, 18,   0, 18, 16,
        6, 10, 2,   6, 2, 13,   6, 13, 15,
        2, 16, 18,  2, 18, 3,   2, 3, 13,
        18, 1, 9,   18, 9, 11,  18, 11, 3,
        4, 14, 12,  4, 12, 0,   4, 0, 8,
        11, 9, 5,   11, 5, 19,  11, 19, 7,
        19, 5, 14,  19, 14, 4,  19, 4, 17,
        1, 12, 14,  1, 14, 5,   1, 5, 9,
    ];

    let scale = radius / 3.0_f32.sqrt();
    let positions: Vec<Vec3> = corners.iter().map(|c| *c * scale).collect();
    let normals: Vec<Vec3> = corners.iter().map(|c| c.normalize()).collect();

    Mesh {
        positions,
        normals,
        uvs: Vec::new(),
        indices: TRIANGLES.to_vec(),
        groups: Vec::new(),
    }
}
