//! Collectible and spawn siting on open maze cells.
//!
//! Placement uses bounded random retry rather than exhaustive search: a
//! fixed attempt budget draws interior cells at random and keeps the ones
//! that are walkable and well spaced. A small or densely constrained maze
//! may yield fewer positions than asked for; that is accepted, not an error.

use rand::Rng;

use super::Maze;
use super::coords::cell_to_world;
use super::grid::Cell;
use crate::math::Vec3;

/// Attempt budget per `scatter` call.
pub const MAX_ATTEMPTS: usize = 200;

/// Minimum world-space distance kept from the start, the exit, and every
/// previously placed position.
pub const MIN_SPACING: f32 = 3.0;

/// Returns up to `count` well-spaced world positions on walkable cells,
/// keeping clear of the spawn and the exit.
pub fn scatter(maze: &Maze, count: usize, rng: &mut impl Rng) -> Vec<Vec3> {
    let mut placed: Vec<Vec3> = Vec::with_capacity(count);
    let start = maze.start_position();
    let exit = maze.exit_position();

    for _ in 0..MAX_ATTEMPTS {
        if placed.len() == count {
            break;
        }

        // Interior cells only; the perimeter is always wall anyway.
        let x = rng.gen_range(1..maze.width() - 1);
        let z = rng.gen_range(1..maze.height() - 1);
        if !maze.grid().is_path(x as isize, z as isize) {
            continue;
        }

        let position = cell_to_world(Cell::new(x, z));
        if (position - start).length() < MIN_SPACING || (position - exit).length() < MIN_SPACING {
            continue;
        }
        if placed
            .iter()
            .any(|existing| (position - *existing).length() < MIN_SPACING)
        {
            continue;
        }

        placed.push(position);
    }

    placed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::coords::world_to_cell;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn scatter_respects_count_walkability_and_spacing() {
        for seed in 0..10 {
            let maze = Maze::from_seed(15, 15, seed);
            let mut rng = StdRng::seed_from_u64(seed.wrapping_mul(31));
            let placed = scatter(&maze, 10, &mut rng);

            assert!(placed.len() <= 10);
            let start = maze.start_position();
            let exit = maze.exit_position();
            for (i, &position) in placed.iter().enumerate() {
                let cell = world_to_cell(position, maze.width(), maze.height());
                assert!(maze.grid().is_path(cell.x as isize, cell.z as isize));
                assert!((position - start).length() >= MIN_SPACING);
                assert!((position - exit).length() >= MIN_SPACING);
                for &other in &placed[i + 1..] {
                    assert!((position - other).length() >= MIN_SPACING);
                }
            }
        }
    }

    #[test]
    fn over_constrained_maze_yields_fewer_positions() {
        // A 5x5 maze has almost no room once start/exit exclusion zones
        // apply; asking for many positions must degrade gracefully.
        let maze = Maze::from_seed(5, 5, 2);
        let mut rng = StdRng::seed_from_u64(2);
        let placed = scatter(&maze, 50, &mut rng);
        assert!(placed.len() < 50);
    }
}
