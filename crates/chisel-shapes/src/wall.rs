//! Brick wall with staggered courses.

use chisel_mesh::{Mesh, merge_transformed};
use chisel_mesh::primitives::box_mesh;
use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Parameters for [`brick_wall`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BrickWallConfig {
    /// Number of courses (rows).
    pub rows: u32,
    /// Full bricks per even course.
    pub columns: u32,
    /// Extents of one brick: length (X), height (Y), depth (Z).
    pub brick: Vec3,
    /// Mortar gap between bricks and between courses.
    pub gap: f32,
}

impl Default for BrickWallConfig {
    fn default() -> Self {
        Self {
            rows: 8,
            columns: 6,
            brick: Vec3::new(0.4, 0.12, 0.2),
            gap: 0.015,
        }
    }
}

/// A running-bond brick wall starting at the origin and extending +X/+Y.
///
/// Even courses hold `columns` full bricks; odd courses are offset half a
/// brick and capped with half bricks so both wall ends stay flush. Every
/// course spans the same width. Deterministic; scatter vertices afterwards
/// for a weathered look.
pub fn brick_wall(config: &BrickWallConfig) -> Mesh {
    let rows = config.rows.max(1);
    let columns = config.columns.max(1);
    let gap = config.gap.max(0.0);

    let pitch = config.brick.x + gap;
    let half_length = ((config.brick.x - gap) * 0.5).max(config.brick.x * 0.05);

    let full = box_mesh(config.brick);
    let half = box_mesh(Vec3::new(half_length, config.brick.y, config.brick.z));
    let width = columns as f32 * pitch - gap;

    let mut parts: Vec<(&Mesh, Mat4)> = Vec::new();
    for row in 0..rows {
        let y = row as f32 * (config.brick.y + gap) + config.brick.y * 0.5;
        if row % 2 == 0 {
            for col in 0..columns {
                let x = col as f32 * pitch + config.brick.x * 0.5;
                parts.push((&full, Mat4::from_translation(Vec3::new(x, y, 0.0))));
            }
        } else {
            parts.push((
                &half,
                Mat4::from_translation(Vec3::new(half_length * 0.5, y, 0.0)),
            ));
            for col in 0..columns.saturating_sub(1) {
                let x = half_length + gap + col as f32 * pitch + config.brick.x * 0.5;
                parts.push((&full, Mat4::from_translation(Vec3::new(x, y, 0.0))));
            }
            parts.push((
                &half,
                Mat4::from_translation(Vec3::new(width - half_length * 0.5, y, 0.0)),
            ));
        }
    }

    merge_transformed(&parts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wall_brick_count() {
        let config = BrickWallConfig {
            rows: 4,
            columns: 5,
            ..Default::default()
        };
        let mesh = brick_wall(&config);
        // Even courses: 5 bricks. Odd courses: 4 full + 2 halves.
        let pieces = 2 * 5 + 2 * 6;
        assert_eq!(mesh.vertex_count(), pieces * 24);
        assert_eq!(mesh.triangle_count(), pieces * 12);
    }

    #[test]
    fn test_wall_courses_share_width() {
        let config = BrickWallConfig::default();
        let mesh = brick_wall(&config);
        let width = config.columns as f32 * (config.brick.x + config.gap) - config.gap;

        let (min, max) = mesh.bounds().unwrap();
        assert!(min.x.abs() < 1e-5);
        assert!((max.x - width).abs() < 1e-4);

        // Both an even and an odd course must reach the full width.
        let odd_y = config.brick.y * 1.5 + config.gap;
        let odd_max = mesh
            .positions
            .iter()
            .filter(|p| (p.y - odd_y).abs() < config.brick.y)
            .map(|p| p.x)
            .fold(0.0, f32::max);
        assert!((odd_max - width).abs() < 1e-4);
    }

    #[test]
    fn test_wall_height() {
        let config = BrickWallConfig {
            rows: 3,
            ..Default::default()
        };
        let mesh = brick_wall(&config);
        let (min, max) = mesh.bounds().unwrap();
        assert!(min.y.abs() < 1e-5);
        let expected = 3.0 * config.brick.y + 2.0 * config.gap;
        assert!((max.y - expected).abs() < 1e-4);
    }
}
