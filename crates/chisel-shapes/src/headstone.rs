//! Arched headstone slab.

use chisel_curve::QuadBezier;
use chisel_mesh::{Mesh, extrude};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Parameters for [`headstone`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HeadstoneConfig {
    /// Full width along X.
    pub width: f32,
    /// Height from the ground to the apex of the arch.
    pub height: f32,
    /// Height of the arched portion; the straight sides end at
    /// `height - arch_height`.
    pub arch_height: f32,
    /// Slab thickness along Z.
    pub depth: f32,
    /// Outline samples along the arch curve.
    pub arch_samples: u32,
}

impl Default for HeadstoneConfig {
    fn default() -> Self {
        Self {
            width: 0.8,
            height: 1.1,
            arch_height: 0.3,
            depth: 0.12,
            arch_samples: 12,
        }
    }
}

/// A headstone slab: rectangular base, round top sampled from a quadratic
/// Bézier, extruded to `depth` and standing on the XZ plane.
pub fn headstone(config: &HeadstoneConfig) -> Mesh {
    let half = config.width * 0.5;
    let arch = config.arch_height.clamp(0.0, config.height);
    let shoulder = config.height - arch;

    // Control point chosen so the curve's apex lands exactly at `height`.
    let top = QuadBezier::new(
        Vec2::new(half, shoulder),
        Vec2::new(0.0, config.height + arch),
        Vec2::new(-half, shoulder),
    );

    let mut outline = vec![Vec2::new(half, 0.0)];
    outline.extend(top.flatten(config.arch_samples.max(2)));
    outline.push(Vec2::new(-half, 0.0));

    match extrude(&outline, &[], config.depth) {
        Ok(mesh) => mesh,
        Err(error) => {
            log::warn!("headstone outline failed to extrude: {error}");
            Mesh::new()
        }
    }
}
