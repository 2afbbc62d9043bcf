//! Circle-vs-grid collision queries and wall-sliding movement resolution.
//!
//! The player is treated as a 2D circle in the horizontal plane; vertical
//! extent is ignored. Queries run every simulation tick, so the scan is a
//! fixed 3x3 cell neighborhood around the circle's cell - O(1) regardless of
//! maze size - and allocates nothing.

use super::coords::CELL_SIZE;
use super::grid::{CellKind, Grid};
use crate::math::Vec3;

/// Whether a circle at `position` with `radius` overlaps a wall or the
/// outer boundary. Only the XZ components of `position` are considered.
pub(crate) fn circle_hits_wall(grid: &Grid, position: Vec3, radius: f32) -> bool {
    // The 3x3 neighborhood scan below only covers radii up to one cell.
    debug_assert!(
        radius < CELL_SIZE,
        "collision radius {radius} must stay under one cell ({CELL_SIZE})"
    );

    // Boundary margin first, so the circle can never leave the grid even
    // where the perimeter wall test would be skipped.
    if position.x() < radius || position.z() < radius {
        return true;
    }
    let max_x = grid.width() as f32 * CELL_SIZE - radius;
    let max_z = grid.height() as f32 * CELL_SIZE - radius;
    if position.x() > max_x || position.z() > max_z {
        return true;
    }

    let grid_x = ((position.x() / CELL_SIZE) as isize).clamp(0, grid.width() as isize - 1);
    let grid_z = ((position.z() / CELL_SIZE) as isize).clamp(0, grid.height() as isize - 1);

    for dz in -1..=1 {
        for dx in -1..=1 {
            let cx = grid_x + dx;
            let cz = grid_z + dz;
            // Out-of-range neighbors are skipped, not treated as walls;
            // the margin check above already guards the true perimeter.
            if !grid.contains(cx, cz) {
                continue;
            }
            if grid.get(cx, cz) != CellKind::Wall {
                continue;
            }

            // Closest point on the wall cell's square footprint.
            let min_x = cx as f32 * CELL_SIZE;
            let min_z = cz as f32 * CELL_SIZE;
            let closest_x = position.x().clamp(min_x, min_x + CELL_SIZE);
            let closest_z = position.z().clamp(min_z, min_z + CELL_SIZE);

            let dist_x = position.x() - closest_x;
            let dist_z = position.z() - closest_z;
            if dist_x * dist_x + dist_z * dist_z < radius * radius {
                return true;
            }
        }
    }

    false
}

/// Resolves a proposed move from `from` to `to` with wall sliding: the X and
/// Z components are tested independently, so motion along an unobstructed
/// axis continues even when the other axis is blocked. Returns the accepted
/// position; never returns a colliding one.
pub(crate) fn slide(grid: &Grid, from: Vec3, to: Vec3, radius: f32) -> Vec3 {
    let mut x = from.x();
    let mut z = from.z();

    if !circle_hits_wall(grid, Vec3::new(to.x(), to.y(), z), radius) {
        x = to.x();
    }
    if !circle_hits_wall(grid, Vec3::new(x, to.y(), to.z()), radius) {
        z = to.z();
    }

    Vec3::new(x, to.y(), z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Maze;

    #[test]
    fn exact_corner_with_zero_radius_is_free() {
        let maze = Maze::from_seed(15, 15, 1);
        assert!(!maze.check_collision(Vec3::new(0.0, 0.0, 0.0), 0.0));
    }

    #[test]
    fn boundary_margin_traps_the_circle() {
        let maze = Maze::from_seed(15, 15, 1);
        // Anywhere within `radius` of the outer edge collides.
        assert!(maze.check_collision(Vec3::new(0.3, 0.0, 15.0), 0.5));
        assert!(maze.check_collision(Vec3::new(15.0, 0.0, 29.8), 0.5));
    }

    #[test]
    fn wall_cell_center_always_collides() {
        // The corner cell (0, 0) is perimeter wall in every maze; its
        // center is (1, 1) in world units.
        for seed in 0..10 {
            let maze = Maze::from_seed(15, 15, seed);
            assert!(maze.check_collision(Vec3::new(1.0, 0.0, 1.0), 0.5));
        }
    }

    #[test]
    fn spawn_center_with_clearance_never_collides() {
        // The spawn cell's east/south/diagonal neighbors are always open,
        // and the nearest possible wall face is a full cell-half away.
        for seed in 0..10 {
            let maze = Maze::from_seed(15, 15, seed);
            assert!(!maze.check_collision(maze.start_position(), 0.9));
        }
    }

    #[test]
    fn slide_preserves_motion_along_the_free_axis() {
        for seed in 0..10 {
            let maze = Maze::from_seed(15, 15, seed);
            let from = maze.start_position();
            // North is perimeter wall from the spawn; east is always open.
            let to = Vec3::new(from.x() + 1.0, 0.0, from.z() - 1.0);
            let resolved = maze.slide_move(from, to, 0.5);
            assert_eq!(resolved.x(), to.x(), "east motion blocked, seed {seed}");
            assert_eq!(resolved.z(), from.z(), "north wall ignored, seed {seed}");
        }
    }

    #[test]
    fn slide_accepts_a_fully_free_move() {
        for seed in 0..10 {
            let maze = Maze::from_seed(15, 15, seed);
            let from = maze.start_position();
            // The spawn's south neighbor is always open.
            let to = Vec3::new(from.x(), 0.0, from.z() + 1.0);
            assert_eq!(maze.slide_move(from, to, 0.5), to);
        }
    }

    #[test]
    fn slide_never_returns_a_colliding_position() {
        for seed in 0..10 {
            let maze = Maze::from_seed(15, 15, seed);
            let from = maze.start_position();
            for (dx, dz) in [(2.0, 0.0), (-2.0, 0.0), (0.0, -2.0), (1.5, 1.5)] {
                let to = Vec3::new(from.x() + dx, 0.0, from.z() + dz);
                let resolved = maze.slide_move(from, to, 0.5);
                assert!(!maze.check_collision(resolved, 0.5));
            }
        }
    }
}
