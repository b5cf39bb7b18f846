//! Lathed vessels: bottles and barrels.

use chisel_curve::{CubicBezier, scalar};
use chisel_mesh::{Mesh, lathe};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Parameters for [`bottle`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BottleConfig {
    /// Radius of the cylindrical body.
    pub base_radius: f32,
    /// Height of the cylindrical body.
    pub body_height: f32,
    /// Height of the shoulder curve from body to neck.
    pub shoulder_height: f32,
    /// Radius of the neck.
    pub neck_radius: f32,
    /// Height of the neck above the shoulder.
    pub neck_height: f32,
    /// Radius of the lip ring at the mouth.
    pub lip_radius: f32,
    /// Height of the lip ring.
    pub lip_height: f32,
    /// Profile samples along the shoulder curve.
    pub shoulder_samples: u32,
    /// Revolution segments.
    pub segments: u32,
}

impl Default for BottleConfig {
    fn default() -> Self {
        Self {
            base_radius: 0.5,
            body_height: 1.2,
            shoulder_height: 0.5,
            neck_radius: 0.15,
            neck_height: 0.4,
            lip_radius: 0.19,
            lip_height: 0.06,
            shoulder_samples: 8,
            segments: 24,
        }
    }
}

/// A closed bottle standing on the XZ plane: cylindrical body, cubic
/// Bézier shoulder, straight neck, lip ring.
pub fn bottle(config: &BottleConfig) -> Mesh {
    let shoulder_top = config.body_height + config.shoulder_height;
    let mouth = shoulder_top + config.neck_height;
    let total = mouth + config.lip_height;

    // Shoulder eases out of the body wall and into the neck wall: both
    // controls sit at mid-shoulder height, one per radius.
    let shoulder = CubicBezier::new(
        Vec2::new(config.base_radius, config.body_height),
        Vec2::new(config.base_radius, config.body_height + config.shoulder_height * 0.5),
        Vec2::new(config.neck_radius, config.body_height + config.shoulder_height * 0.5),
        Vec2::new(config.neck_radius, shoulder_top),
    );

    let mut profile = vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(config.base_radius, 0.0),
    ];
    profile.extend(shoulder.flatten(config.shoulder_samples.max(2)));
    profile.push(Vec2::new(config.neck_radius, mouth));
    profile.push(Vec2::new(config.lip_radius, mouth));
    profile.push(Vec2::new(config.lip_radius, total));
    profile.push(Vec2::new(0.0, total));

    lathe(&profile, config.segments)
}

/// Parameters for [`barrel`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BarrelConfig {
    /// Radius at top and bottom.
    pub radius: f32,
    /// Fractional radius gain at the belly (0.2 = 20% wider at mid-height).
    pub bulge: f32,
    /// Total height.
    pub height: f32,
    /// Profile rings between the two ends.
    pub rings: u32,
    /// Revolution segments.
    pub segments: u32,
}

impl Default for BarrelConfig {
    fn default() -> Self {
        Self {
            radius: 0.6,
            bulge: 0.2,
            height: 1.4,
            rings: 8,
            segments: 20,
        }
    }
}

/// A closed barrel standing on the XZ plane, belly bulge following a
/// parabolic arc (widest at mid-height, flush at the ends).
pub fn barrel(config: &BarrelConfig) -> Mesh {
    let rings = config.rings.max(2);

    let mut profile = Vec::with_capacity(rings as usize + 3);
    profile.push(Vec2::new(0.0, 0.0));
    for i in 0..=rings {
        let t = i as f32 / rings as f32;
        let radius = config.radius * (1.0 + config.bulge * scalar::parabolic(t));
        profile.push(Vec2::new(radius, t * config.height));
    }
    profile.push(Vec2::new(0.0, config.height));

    lathe(&profile, config.segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn max_radial(mesh: &Mesh) -> f32 {
        mesh.positions
            .iter()
            .map(|p| (p.x * p.x + p.z * p.z).sqrt())
            .fold(0.0, f32::max)
    }

    #[test]
    fn test_bottle_height_and_radius() {
        let config = BottleConfig::default();
        let mesh = bottle(&config);
        let (min, max) = mesh.bounds().unwrap();
        let total = config.body_height
            + config.shoulder_height
            + config.neck_height
            + config.lip_height;
        assert!(min.y.abs() < 1e-5);
        assert!((max.y - total).abs() < 1e-4);
        assert!((max_radial(&mesh) - config.base_radius).abs() < 1e-4);
    }

    #[test]
    fn test_bottle_neck_narrower_than_body() {
        let config = BottleConfig::default();
        let mesh = bottle(&config);
        // Widest point in the neck region is the lip ring.
        let neck_floor = config.body_height + config.shoulder_height + 0.01;
        let neck_max = mesh
            .positions
            .iter()
            .filter(|p| p.y > neck_floor)
            .map(|p| (p.x * p.x + p.z * p.z).sqrt())
            .fold(0.0, f32::max);
        assert!((neck_max - config.lip_radius).abs() < 1e-4);
        assert!(neck_max < config.base_radius);
    }

    #[test]
    fn test_barrel_belly_wider_than_ends() {
        let config = BarrelConfig {
            radius: 1.0,
            bulge: 0.25,
            ..Default::default()
        };
        let mesh = barrel(&config);
        assert!((max_radial(&mesh) - 1.25).abs() < 1e-3);

        let end_max = mesh
            .positions
            .iter()
            .filter(|p| p.y < 1e-4)
            .map(|p| (p.x * p.x + p.z * p.z).sqrt())
            .fold(0.0, f32::max);
        assert!((end_max - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_barrel_deterministic() {
        let config = BarrelConfig::default();
        let a = barrel(&config);
        let b = barrel(&config);
        assert_eq!(a.positions, b.positions);
        assert_eq!(a.indices, b.indices);
    }
}
