//! Post-and-rail fence.

use chisel_mesh::{Mesh, merge_grouped, merge_transformed};
use chisel_mesh::primitives::box_mesh;
use glam::{Mat4, Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Parameters for [`fence`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FenceConfig {
    /// Number of posts (minimum 2).
    pub posts: u32,
    /// Distance between neighboring post centers along X.
    pub post_spacing: f32,
    /// Post cross-section (X by Z).
    pub post_section: Vec2,
    /// Post height.
    pub post_height: f32,
    /// Number of horizontal rails.
    pub rails: u32,
    /// Rail cross-section (Y by Z).
    pub rail_section: Vec2,
}

impl Default for FenceConfig {
    fn default() -> Self {
        Self {
            posts: 4,
            post_spacing: 1.5,
            post_section: Vec2::new(0.12, 0.12),
            post_height: 1.2,
            rails: 2,
            rail_section: Vec2::new(0.08, 0.04),
        }
    }
}

/// A straight run of fence along +X, starting at the origin: evenly spaced
/// posts with continuous rails spanning the full run.
///
/// Rails are spread evenly over the post height. Material groups: posts are
/// material 0, rails material 1.
pub fn fence(config: &FenceConfig) -> Mesh {
    let posts = config.posts.max(2);
    let rails = config.rails.max(1);
    let length = (posts - 1) as f32 * config.post_spacing;

    let post = box_mesh(Vec3::new(
        config.post_section.x,
        config.post_height,
        config.post_section.y,
    ));
    let post_parts: Vec<(&Mesh, Mat4)> = (0..posts)
        .map(|i| {
            let center = Vec3::new(
                i as f32 * config.post_spacing,
                config.post_height * 0.5,
                0.0,
            );
            (&post, Mat4::from_translation(center))
        })
        .collect();
    let post_run = merge_transformed(&post_parts);

    let rail = box_mesh(Vec3::new(
        length + config.post_section.x,
        config.rail_section.x,
        config.rail_section.y,
    ));
    let rail_parts: Vec<(&Mesh, Mat4)> = (0..rails)
        .map(|i| {
            let y = config.post_height * (i + 1) as f32 / (rails + 1) as f32;
            (&rail, Mat4::from_translation(Vec3::new(length * 0.5, y, 0.0)))
        })
        .collect();
    let rail_run = merge_transformed(&rail_parts);

    merge_grouped(&[(&post_run, 0), (&rail_run, 1)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fence_groups() {
        let config = FenceConfig {
            posts: 5,
            rails: 3,
            ..Default::default()
        };
        let mesh = fence(&config);
        assert_eq!(mesh.groups.len(), 2);
        assert_eq!(mesh.groups[0].material, 0);
        assert_eq!(mesh.groups[1].material, 1);
        assert_eq!(mesh.groups[0].count, 5 * 12 * 3);
        assert_eq!(mesh.groups[1].count, 3 * 12 * 3);
        let covered: usize = mesh.groups.iter().map(|g| g.count).sum();
        assert_eq!(covered, mesh.indices.len());
    }

    #[test]
    fn test_fence_run_length() {
        let config = FenceConfig::default();
        let mesh = fence(&config);
        let length = (config.posts - 1) as f32 * config.post_spacing;
        let (min, max) = mesh.bounds().unwrap();
        assert!((min.x + config.post_section.x * 0.5).abs() < 1e-5);
        assert!((max.x - length - config.post_section.x * 0.5).abs() < 1e-4);
        assert!(min.y.abs() < 1e-5);
        assert!((max.y - config.post_height).abs() < 1e-5);
    }

    #[test]
    fn test_fence_rails_between_ground_and_top() {
        let config = FenceConfig {
            rails: 2,
            ..Default::default()
        };
        let mesh = fence(&config);
        let rail_range = &mesh.groups[1];
        let start = rail_range.start;
        let rail_indices = &mesh.indices[start..start + rail_range.count];
        for &idx in rail_indices {
            let y = mesh.positions[idx as usize].y;
            assert!(y > 0.1 && y < config.post_height - 0.1, "rail y {y}");
        }
    }
}
