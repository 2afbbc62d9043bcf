//! Maze generation, collision, geometry, and placement.
//!
//! [`Maze`] is the aggregate the rest of the game talks to: it owns the grid
//! and the designated start/exit cells, generates itself at construction,
//! and afterwards exposes read-only queries. A game reset swaps the whole
//! `Maze` for a freshly constructed one; nothing mutates the grid in play.

pub mod collision;
pub mod coords;
pub mod generator;
pub mod geometry;
pub mod grid;
pub mod placement;

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::math::Vec3;

pub use coords::{CELL_SIZE, WALL_HEIGHT};
pub use geometry::{MeshData, PortalParams};
pub use grid::{Cell, CellKind, Grid};

/// A generated maze: the grid plus its designated start and exit cells.
///
/// Construction runs the generator; everything after that is a read-only
/// query. Dimensions below 5 are clamped and even dimensions are forced odd,
/// so the resulting `width()`/`height()` may differ from what was asked for.
pub struct Maze {
    grid: Grid,
    start: Cell,
    end: Cell,
}

impl Maze {
    /// Generates a maze with a different layout on every call.
    pub fn new(width: usize, height: usize) -> Self {
        Self::from_seed(width, height, rand::random())
    }

    /// Generates a maze deterministically: the same dimensions and seed
    /// always produce the same layout.
    pub fn from_seed(width: usize, height: usize, seed: u64) -> Self {
        let mut grid = Grid::filled(width, height);
        let start = Cell::new(1, 1);
        let end = Cell::new(grid.width() - 2, grid.height() - 2);

        let mut rng = StdRng::seed_from_u64(seed);
        generator::carve(&mut grid, start, end, &mut rng);

        Self { grid, start, end }
    }

    /// Width of the maze in cells. Always odd.
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Height of the maze in cells. Always odd.
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Read-only view of the grid, for consumers that walk cells directly
    /// (minimap drawing, placement, tests).
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Cell lookup with out-of-range coordinates reading as wall.
    pub fn cell_at(&self, x: isize, z: isize) -> CellKind {
        self.grid.get(x, z)
    }

    /// The spawn cell, `(1, 1)`.
    pub fn start_cell(&self) -> Cell {
        self.start
    }

    /// The exit cell, `(width - 2, height - 2)`.
    pub fn exit_cell(&self) -> Cell {
        self.end
    }

    /// World-space center of the spawn cell, consumed by spawn logic and
    /// the minimap.
    pub fn start_position(&self) -> Vec3 {
        coords::cell_to_world(self.start)
    }

    /// World-space center of the exit cell, consumed by the win-condition
    /// check and the portal-light shader uniforms.
    pub fn exit_position(&self) -> Vec3 {
        coords::cell_to_world(self.end)
    }

    /// Whether a circle at `position` with `radius` overlaps a wall or the
    /// outer boundary. Called every frame by player movement.
    pub fn check_collision(&self, position: Vec3, radius: f32) -> bool {
        collision::circle_hits_wall(&self.grid, position, radius)
    }

    /// Resolves a proposed move with wall sliding: each horizontal axis is
    /// accepted or rejected independently.
    pub fn slide_move(&self, from: Vec3, to: Vec3, radius: f32) -> Vec3 {
        collision::slide(&self.grid, from, to, radius)
    }

    /// Fills the caller-owned wall, floor, and ceiling meshes from the
    /// grid. Called once at load and once per reset.
    pub fn generate_meshes(
        &self,
        walls: &mut MeshData,
        floor: &mut MeshData,
        ceiling: &mut MeshData,
    ) {
        geometry::build_level_meshes(&self.grid, walls, floor, ceiling);
    }

    /// Fills the caller-owned portal mesh, centered on the exit cell.
    pub fn generate_portal_mesh(&self, mesh: &mut MeshData, params: &PortalParams) {
        geometry::build_portal_mesh(self.exit_position(), params, mesh);
    }

    /// Saves an ASCII rendering of the maze to a timestamped file under
    /// `saved-mazes/`, for inspecting generated levels during development.
    ///
    /// # Errors
    /// Returns an error if the output directory cannot be created or any
    /// write fails.
    pub fn save_to_file(&self) -> Result<PathBuf, std::io::Error> {
        let timestamp = Local::now().format("Maze_%m-%d-%y_%I-%M%p.mz").to_string();
        let output_path = Path::new("saved-mazes").join(timestamp);

        if let Err(e) = fs::create_dir_all("saved-mazes") {
            eprintln!("Failed to create output directory: {}", e);
            return Err(e);
        }

        let mut file = match fs::File::create(&output_path) {
            Ok(f) => f,
            Err(e) => {
                eprintln!("Failed to create maze file: {}", e);
                return Err(e);
            }
        };

        if let Err(e) = write!(file, "{}", self) {
            eprintln!("Failed to write to file: {}", e);
            return Err(e);
        }

        println!("Maze saved to: {}", output_path.display());
        Ok(output_path)
    }
}

/// ASCII rendering: `#` for walls, spaces for corridors, `*` on the exit.
impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for z in 0..self.grid.height() {
            for x in 0..self.grid.width() {
                let glyph = if self.grid.get(x as isize, z as isize) == CellKind::Wall {
                    '#'
                } else if Cell::new(x, z) == self.end {
                    '*'
                } else {
                    ' '
                };
                write!(f, "{}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_fifteen_by_fifteen() {
        let maze = Maze::from_seed(15, 15, 4);
        assert_eq!(maze.width(), 15);
        assert_eq!(maze.height(), 15);
        assert_eq!(maze.start_cell(), Cell::new(1, 1));
        assert_eq!(maze.exit_cell(), Cell::new(13, 13));
        assert_eq!(maze.start_position(), Vec3::new(3.0, 0.0, 3.0));
        assert_eq!(maze.exit_position(), Vec3::new(27.0, 0.0, 27.0));
    }

    #[test]
    fn even_dimensions_grow_by_one() {
        let maze = Maze::from_seed(14, 20, 4);
        assert_eq!(maze.width(), 15);
        assert_eq!(maze.height(), 21);
    }

    #[test]
    fn exit_is_reachable_from_start() {
        for seed in 0..50 {
            let maze = Maze::from_seed(15, 15, seed);
            let reached = maze.grid().reachable_from(maze.start_cell());
            assert!(
                reached[maze.grid().index_of(maze.exit_cell())],
                "exit unreachable for seed {seed}"
            );
        }
    }

    #[test]
    fn same_seed_reproduces_the_maze() {
        let a = Maze::from_seed(21, 21, 1234);
        let b = Maze::from_seed(21, 21, 1234);
        assert_eq!(a.grid(), b.grid());
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn out_of_range_cells_read_as_wall() {
        let maze = Maze::from_seed(15, 15, 4);
        assert_eq!(maze.cell_at(-1, 3), CellKind::Wall);
        assert_eq!(maze.cell_at(3, 15), CellKind::Wall);
    }

    #[test]
    fn display_marks_walls_and_exit() {
        let maze = Maze::from_seed(15, 15, 4);
        let text = maze.to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 15);
        assert!(lines.iter().all(|line| line.len() == 15));
        // Perimeter rows are solid wall; the exit marker appears once.
        assert!(lines[0].chars().all(|c| c == '#'));
        assert_eq!(text.matches('*').count(), 1);
    }
}
