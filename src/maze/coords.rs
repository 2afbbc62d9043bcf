//! Coordinate transformations between grid cells and world space.
//!
//! Centralizes the cell <-> world mapping so the perimeter math lives in one
//! place instead of being repeated ad hoc by every consumer.
//!
//! # Coordinate System
//! - Origin is the north-west corner of the maze at ground level
//! - X increases to the east, Z to the south, Y upwards
//! - A cell's world position is its center: `(coord + 0.5) * CELL_SIZE`

use super::grid::Cell;
use crate::math::Vec3;

/// Side length of one grid cell in world units.
pub const CELL_SIZE: f32 = 2.0;

/// Height of wall geometry (and the corridor ceiling) in world units.
pub const WALL_HEIGHT: f32 = 3.0;

/// World-space center of a cell, at ground level.
pub fn cell_to_world(cell: Cell) -> Vec3 {
    Vec3::new(
        (cell.x as f32 + 0.5) * CELL_SIZE,
        0.0,
        (cell.z as f32 + 0.5) * CELL_SIZE,
    )
}

/// Maps a world position to the cell containing it, clamped to valid
/// indices. The y-coordinate is ignored; the maze is flat.
pub fn world_to_cell(position: Vec3, width: usize, height: usize) -> Cell {
    let x = (position.x() / CELL_SIZE).floor().max(0.0) as usize;
    let z = (position.z() / CELL_SIZE).floor().max(0.0) as usize;
    Cell::new(x.min(width - 1), z.min(height - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_center_maps_to_world() {
        let world = cell_to_world(Cell::new(1, 1));
        assert_eq!(world, Vec3::new(3.0, 0.0, 3.0));

        let world = cell_to_world(Cell::new(13, 13));
        assert_eq!(world, Vec3::new(27.0, 0.0, 27.0));
    }

    #[test]
    fn world_to_cell_inverts_center_mapping() {
        for cell in [Cell::new(0, 0), Cell::new(7, 2), Cell::new(14, 14)] {
            assert_eq!(world_to_cell(cell_to_world(cell), 15, 15), cell);
        }
    }

    #[test]
    fn world_to_cell_clamps_out_of_range() {
        assert_eq!(
            world_to_cell(Vec3::new(-5.0, 0.0, 1e6), 15, 15),
            Cell::new(0, 14)
        );
    }
}
