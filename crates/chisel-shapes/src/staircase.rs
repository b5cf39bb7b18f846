//! Straight and spiral staircases.

use chisel_mesh::{Mesh, MeshBuilder, merge_grouped, merge_transformed};
use chisel_mesh::primitives::{box_mesh, cylinder};
use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

/// Parameters for [`staircase`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StaircaseConfig {
    /// Number of steps.
    pub steps: u32,
    /// Full width along X.
    pub width: f32,
    /// Height gained per step.
    pub rise: f32,
    /// Depth covered per step along Z.
    pub run: f32,
    /// When true each step extends down to the ground, producing a solid
    /// blocky ramp instead of floating treads.
    pub solid: bool,
}

impl Default for StaircaseConfig {
    fn default() -> Self {
        Self {
            steps: 10,
            width: 2.0,
            rise: 0.2,
            run: 0.3,
            solid: true,
        }
    }
}

/// A straight staircase climbing +Y while advancing +Z, starting at the
/// origin.
///
/// Built from one box per step. The result is watertight per step but not
/// across steps; weld afterwards if a single shell is needed.
pub fn staircase(config: &StaircaseConfig) -> Mesh {
    let steps = config.steps.max(1);

    let mut parts: Vec<(Mesh, Mat4)> = Vec::with_capacity(steps as usize);
    for i in 0..steps {
        let top = (i + 1) as f32 * config.rise;
        let height = if config.solid { top } else { config.rise };
        let center = Vec3::new(
            0.0,
            top - height * 0.5,
            (i as f32 + 0.5) * config.run,
        );
        parts.push((
            box_mesh(Vec3::new(config.width, height, config.run)),
            Mat4::from_translation(center),
        ));
    }

    let refs: Vec<(&Mesh, Mat4)> = parts.iter().map(|(m, t)| (m, *t)).collect();
    merge_transformed(&refs)
}

/// Parameters for [`spiral_staircase`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpiralStaircaseConfig {
    /// Number of steps over the full climb.
    pub steps: u32,
    /// Radius of the gap around the center column.
    pub inner_radius: f32,
    /// Outer radius of the treads.
    pub outer_radius: f32,
    /// Total height climbed.
    pub height: f32,
    /// Revolutions over the full climb (1.0 = one full turn).
    pub turns: f32,
    /// Tread thickness.
    pub step_thickness: f32,
    /// Radius of the center column; 0 omits it.
    pub column_radius: f32,
}

impl Default for SpiralStaircaseConfig {
    fn default() -> Self {
        Self {
            steps: 16,
            inner_radius: 0.25,
            outer_radius: 1.5,
            height: 3.0,
            turns: 1.0,
            step_thickness: 0.08,
            column_radius: 0.2,
        }
    }
}

/// A spiral staircase around the Y axis: wedge treads plus an optional
/// center column.
///
/// Material groups: treads are material 0, the column (when present) is
/// material 1.
pub fn spiral_staircase(config: &SpiralStaircaseConfig) -> Mesh {
    let steps = config.steps.max(1);
    let rise = config.height / steps as f32;
    let sweep = config.turns * TAU / steps as f32;

    let mut builder = MeshBuilder::new();
    for i in 0..steps {
        let angle = i as f32 * sweep;
        let top = (i + 1) as f32 * rise;
        wedge(
            &mut builder,
            angle,
            angle + sweep,
            config.inner_radius,
            config.outer_radius,
            top - config.step_thickness,
            top,
        );
    }
    builder.calculate_normals();
    let treads = builder.build();

    if config.column_radius <= 0.0 {
        return merge_grouped(&[(&treads, 0)]);
    }

    let mut column = cylinder(config.column_radius, config.column_radius, config.height, 16);
    column.translate(Vec3::new(0.0, config.height * 0.5, 0.0));
    merge_grouped(&[(&treads, 0), (&column, 1)])
}

/// Emits one annular-sector slab: six flat-shaded quads, each owning its
/// four vertices.
fn wedge(
    builder: &mut MeshBuilder,
    angle0: f32,
    angle1: f32,
    inner: f32,
    outer: f32,
    bottom: f32,
    top: f32,
) {
    let at = |radius: f32, angle: f32, y: f32| {
        Vec3::new(radius * angle.cos(), y, radius * angle.sin())
    };
    let bi0 = at(inner, angle0, bottom);
    let bo0 = at(outer, angle0, bottom);
    let bi1 = at(inner, angle1, bottom);
    let bo1 = at(outer, angle1, bottom);
    let ti0 = at(inner, angle0, top);
    let to0 = at(outer, angle0, top);
    let ti1 = at(inner, angle1, top);
    let to1 = at(outer, angle1, top);

    // Corners in counter-clockwise order seen from outside the slab.
    let faces: [[Vec3; 4]; 6] = [
        [ti0, ti1, to1, to0], // top
        [bi0, bo0, bo1, bi1], // bottom
        [bo1, bo0, to0, to1], // outer wall
        [bi0, bi1, ti1, ti0], // inner wall
        [bi0, ti0, to0, bo0], // leading edge
        [bi1, bo1, to1, ti1], // trailing edge
    ];
    for corners in faces {
        let indices = corners.map(|p| builder.add_vertex(p));
        builder.quad(indices[0], indices[1], indices[2], indices[3]);
    }
}
