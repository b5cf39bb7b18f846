//! Hexagonal tile floor.

use chisel_mesh::{Mesh, extrude, merge_transformed};
use glam::{Mat4, Vec2, Vec3};
use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_2, PI};

/// Parameters for [`hex_floor`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HexFloorConfig {
    /// Tiles per row (X direction).
    pub columns: u32,
    /// Rows of tiles (Z direction).
    pub rows: u32,
    /// Circumradius of one hexagonal tile.
    pub tile_radius: f32,
    /// Extra spacing between neighboring tile centers.
    pub gap: f32,
    /// Tile thickness; tops sit at this height, bottoms on the XZ plane.
    pub thickness: f32,
}

impl Default for HexFloorConfig {
    fn default() -> Self {
        Self {
            columns: 6,
            rows: 6,
            tile_radius: 0.5,
            gap: 0.03,
            thickness: 0.08,
        }
    }
}

/// A floor of pointy-top hexagonal prisms on an offset grid, odd rows
/// shifted half a tile.
pub fn hex_floor(config: &HexFloorConfig) -> Mesh {
    let columns = config.columns.max(1);
    let rows = config.rows.max(1);
    let radius = config.tile_radius.max(1e-3);

    // Pointy-top hexagon: vertices at 30° + k * 60°.
    let outline: Vec<Vec2> = (0..6)
        .map(|k| {
            let angle = PI / 6.0 + k as f32 * PI / 3.0;
            Vec2::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect();

    let mut tile = match extrude(&outline, &[], config.thickness) {
        Ok(mesh) => mesh,
        Err(error) => {
            log::warn!("hex tile failed to extrude: {error}");
            return Mesh::new();
        }
    };
    // Lay the slab flat (outline plane XY -> XZ) and rest it on the ground.
    tile.transform(Mat4::from_rotation_x(-FRAC_PI_2));
    tile.translate(Vec3::new(0.0, config.thickness * 0.5, 0.0));

    let pitch_x = 3.0_f32.sqrt() * radius + config.gap;
    let pitch_z = 1.5 * radius + config.gap;

    let mut parts: Vec<(&Mesh, Mat4)> = Vec::with_capacity((columns * rows) as usize);
    for row in 0..rows {
        let offset = if row % 2 == 1 { pitch_x * 0.5 } else { 0.0 };
        for col in 0..columns {
            let center = Vec3::new(col as f32 * pitch_x + offset, 0.0, row as f32 * pitch_z);
            parts.push((&tile, Mat4::from_translation(center)));
        }
    }

    merge_transformed(&parts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_tile_count() {
        let config = HexFloorConfig {
            columns: 4,
            rows: 3,
            ..Default::default()
        };
        let mesh = hex_floor(&config);
        let single = hex_floor(&HexFloorConfig {
            columns: 1,
            rows: 1,
            ..config
        });
        assert_eq!(mesh.vertex_count(), single.vertex_count() * 12);
        assert_eq!(mesh.triangle_count(), single.triangle_count() * 12);
    }

    #[test]
    fn test_floor_rests_on_ground() {
        let config = HexFloorConfig::default();
        let mesh = hex_floor(&config);
        let (min, max) = mesh.bounds().unwrap();
        assert!(min.y.abs() < 1e-4);
        assert!((max.y - config.thickness).abs() < 1e-4);
    }

    #[test]
    fn test_floor_odd_rows_offset() {
        let config = HexFloorConfig {
            columns: 2,
            rows: 2,
            gap: 0.0,
            ..Default::default()
        };
        let mesh = hex_floor(&config);
        let pitch_x = 3.0_f32.sqrt() * config.tile_radius;
        let (min, max) = mesh.bounds().unwrap();
        // Second row sticks out half a pitch past the first.
        let expected = pitch_x + pitch_x * 0.5 + 3.0_f32.sqrt() * 0.5 * config.tile_radius;
        assert!((max.x - expected).abs() < 1e-4, "max.x {}", max.x);
        assert!((min.x + 3.0_f32.sqrt() * 0.5 * config.tile_radius).abs() < 1e-4);
    }

    #[test]
    fn test_floor_tiles_leave_gap() {
        let config = HexFloorConfig {
            columns: 2,
            rows: 1,
            tile_radius: 1.0,
            gap: 0.1,
            ..Default::default()
        };
        let mesh = hex_floor(&config);
        let apothem = 3.0_f32.sqrt() * 0.5;
        // Nearest faces of the two tiles sit `gap` apart.
        let pitch = 3.0_f32.sqrt() + 0.1;
        let left_edge = apothem;
        let right_edge = pitch - apothem;
        assert!((right_edge - left_edge - 0.1).abs() < 1e-5);
        // No vertex falls strictly between the two faces.
        let between = mesh
            .positions
            .iter()
            .filter(|p| p.x > left_edge + 1e-4 && p.x < right_edge - 1e-4)
            .count();
        assert_eq!(between, 0);
    }
}
