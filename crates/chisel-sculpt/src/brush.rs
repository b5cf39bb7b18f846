//! The six brush operators.

use chisel_ease::Falloff;
use chisel_mesh::Mesh;
use glam::{Quat, Vec3};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single brush application: where, how far, how hard, and how the
/// influence decays toward the rim.
///
/// A zero or negative `radius` is undefined behavior (NaN weights), as is
/// a zero-length axis/direction on the brushes that take one; neither is
/// guarded.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Stroke {
    pub center: Vec3,
    pub radius: f32,
    pub strength: f32,
    pub falloff: Falloff,
}

impl Stroke {
    /// Weight for a vertex at `position`, or `None` if it is outside the
    /// stroke (at or beyond the radius).
    #[inline]
    fn weight(&self, position: Vec3) -> Option<f32> {
        let d = position.distance(self.center);
        (d < self.radius).then(|| self.falloff.eval(d, self.radius))
    }
}

/// Pushes vertices along `direction`, scaled by falloff and strength.
pub fn displace(mesh: &mut Mesh, stroke: &Stroke, direction: Vec3) {
    for pos in &mut mesh.positions {
        if let Some(w) = stroke.weight(*pos) {
            *pos += direction * (w * stroke.strength);
        }
    }
}

/// Pulls vertices toward the plane at `target_height` along `direction`.
///
/// Each vertex's height is its projection onto `direction`; the brush moves
/// it along `direction` by the weighted fraction of the gap. With full
/// weight and strength 1 the vertex lands exactly on the plane.
pub fn flatten(mesh: &mut Mesh, stroke: &Stroke, direction: Vec3, target_height: f32) {
    for pos in &mut mesh.positions {
        if let Some(w) = stroke.weight(*pos) {
            let height = pos.dot(direction);
            *pos += direction * ((target_height - height) * w * stroke.strength);
        }
    }
}

/// Adds random jitter per axis component of `direction`.
///
/// Each component draws an independent symmetric `U(-1, 1)` sample, so a
/// direction of `Vec3::ONE` jitters isotropically and an axis-aligned
/// direction jitters only along that axis.
pub fn noise(mesh: &mut Mesh, stroke: &Stroke, direction: Vec3, rng: &mut impl Rng) {
    for pos in &mut mesh.positions {
        if let Some(w) = stroke.weight(*pos) {
            let scale = w * stroke.strength;
            pos.x += rng.random_range(-1.0..=1.0) * direction.x * scale;
            pos.y += rng.random_range(-1.0..=1.0) * direction.y * scale;
            pos.z += rng.random_range(-1.0..=1.0) * direction.z * scale;
        }
    }
}

/// Relaxes vertices toward the centroid of their neighborhood.
///
/// Each affected vertex moves toward the average of all vertices within
/// `stroke.radius` of it (itself included), by `strength` scaled with the
/// stroke falloff. Averages are taken over the pre-stroke positions, so the
/// result does not depend on vertex order. The neighbor query runs on a
/// uniform hash grid with radius-sized cells rather than scanning all
/// pairs.
pub fn smooth(mesh: &mut Mesh, stroke: &Stroke) {
    let original = mesh.positions.clone();

    // Bucket every vertex; neighbors of a vertex can only live in the
    // 27 cells around its own.
    let cell_size = stroke.radius;
    let key = |p: Vec3| {
        (
            (p.x / cell_size).floor() as i64,
            (p.y / cell_size).floor() as i64,
            (p.z / cell_size).floor() as i64,
        )
    };
    let mut grid: HashMap<(i64, i64, i64), Vec<u32>> = HashMap::new();
    for (i, pos) in original.iter().enumerate() {
        grid.entry(key(*pos)).or_default().push(i as u32);
    }

    for (i, pos) in mesh.positions.iter_mut().enumerate() {
        let Some(w) = stroke.weight(*pos) else {
            continue;
        };
        let here = original[i];
        let (cx, cy, cz) = key(here);

        let mut sum = Vec3::ZERO;
        let mut count = 0u32;
        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    let Some(bucket) = grid.get(&(cx + dx, cy + dy, cz + dz)) else {
                        continue;
                    };
                    for &j in bucket {
                        let other = original[j as usize];
                        if here.distance(other) < stroke.radius {
                            sum += other;
                            count += 1;
                        }
                    }
                }
            }
        }

        // count >= 1: the vertex always finds itself.
        let centroid = sum / count as f32;
        *pos = pos.lerp(centroid, (w * stroke.strength).clamp(0.0, 1.0));
    }
}

/// Pushes vertices away from (or toward) the stroke center.
///
/// Movement is along the center-to-vertex direction with magnitude
/// `weight * strength`; `inward` flips the sign. A vertex exactly at the
/// center has no defined direction and is left untouched.
pub fn spike(mesh: &mut Mesh, stroke: &Stroke, inward: bool) {
    let sign = if inward { -1.0 } else { 1.0 };
    for pos in &mut mesh.positions {
        if let Some(w) = stroke.weight(*pos) {
            let Some(outward) = (*pos - stroke.center).try_normalize() else {
                continue;
            };
            *pos += outward * (sign * w * stroke.strength);
        }
    }
}

/// Rotates vertices around the stroke center about `axis`.
///
/// The rotation angle is `weight * strength` radians, right-hand rule:
/// with `axis = +Y`, a vertex on `+X` swings toward `-Z`. `axis` is
/// normalized internally.
pub fn twist(mesh: &mut Mesh, stroke: &Stroke, axis: Vec3) {
    let axis = axis.normalize();
    for pos in &mut mesh.positions {
        if let Some(w) = stroke.weight(*pos) {
            let rotation = Quat::from_axis_angle(axis, w * stroke.strength);
            *pos = rotation * (*pos - stroke.center) + stroke.center;
        }
    }
}
