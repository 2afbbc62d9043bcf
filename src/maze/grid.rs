//! Grid data model: cell coordinates, bounds-checked access, reachability.
//!
//! The grid is the single source of truth for maze layout. It is written by
//! the generator during construction and read-only for every other consumer
//! (collision, geometry synthesis, placement), so borrows stay immutable
//! after generation.

use std::collections::VecDeque;

/// Smallest playable maze. Anything below this degenerates into a box.
pub const MIN_DIM: usize = 5;

/// What occupies a single unit square of the maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// Solid cell; blocks movement and emits wall geometry.
    Wall,
    /// Walkable cell; emits floor and ceiling geometry.
    Path,
}

/// Grid coordinates of a cell. `x` runs west to east, `z` north to south.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Column index, `0..width`.
    pub x: usize,
    /// Row index, `0..height`.
    pub z: usize,
}

impl Cell {
    /// Creates a new cell coordinate.
    pub fn new(x: usize, z: usize) -> Self {
        Self { x, z }
    }
}

/// A `width x height` field of [`CellKind`]s in row-major order.
///
/// Both dimensions are forced odd at construction: the carving algorithm
/// moves in 2-cell strides and needs a wall cell between every pair of
/// carved cells, which only works out on an odd lattice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellKind>,
}

impl Grid {
    /// Creates an all-wall grid. Dimensions are clamped to at least
    /// [`MIN_DIM`] and incremented to the next odd number when even.
    pub fn filled(width: usize, height: usize) -> Self {
        let width = Self::legalize(width);
        let height = Self::legalize(height);
        Self {
            width,
            height,
            cells: vec![CellKind::Wall; width * height],
        }
    }

    fn legalize(dim: usize) -> usize {
        let dim = dim.max(MIN_DIM);
        if dim % 2 == 0 { dim + 1 } else { dim }
    }

    /// Width of the grid in cells. Always odd.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the grid in cells. Always odd.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether `(x, z)` lies inside the grid.
    pub fn contains(&self, x: isize, z: isize) -> bool {
        x >= 0 && (x as usize) < self.width && z >= 0 && (z as usize) < self.height
    }

    /// Returns the cell at `(x, z)`. Out-of-range coordinates read as
    /// [`CellKind::Wall`], so callers at the perimeter need no special case.
    pub fn get(&self, x: isize, z: isize) -> CellKind {
        if self.contains(x, z) {
            self.cells[z as usize * self.width + x as usize]
        } else {
            CellKind::Wall
        }
    }

    /// Whether `(x, z)` is a walkable cell.
    pub fn is_path(&self, x: isize, z: isize) -> bool {
        self.get(x, z) == CellKind::Path
    }

    pub(crate) fn set(&mut self, cell: Cell, kind: CellKind) {
        debug_assert!(self.contains(cell.x as isize, cell.z as isize));
        self.cells[cell.z * self.width + cell.x] = kind;
    }

    pub(crate) fn index_of(&self, cell: Cell) -> usize {
        cell.z * self.width + cell.x
    }

    /// Flood-fills along 4-connected Path cells from `start` and returns a
    /// row-major visited mask.
    pub fn reachable_from(&self, start: Cell) -> Vec<bool> {
        let mut visited = vec![false; self.cells.len()];
        if !self.is_path(start.x as isize, start.z as isize) {
            return visited;
        }

        let mut queue = VecDeque::new();
        visited[self.index_of(start)] = true;
        queue.push_back(start);

        while let Some(cell) = queue.pop_front() {
            for (dx, dz) in [(0isize, -1isize), (0, 1), (-1, 0), (1, 0)] {
                let nx = cell.x as isize + dx;
                let nz = cell.z as isize + dz;
                if !self.is_path(nx, nz) {
                    continue;
                }
                let next = Cell::new(nx as usize, nz as usize);
                let idx = self.index_of(next);
                if !visited[idx] {
                    visited[idx] = true;
                    queue.push_back(next);
                }
            }
        }

        visited
    }

    /// Iterates over every Path cell in row-major order.
    pub fn path_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |z| {
            (0..self.width).filter_map(move |x| {
                if self.cells[z * self.width + x] == CellKind::Path {
                    Some(Cell::new(x, z))
                } else {
                    None
                }
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_dimensions_are_forced_odd() {
        let grid = Grid::filled(14, 10);
        assert_eq!(grid.width(), 15);
        assert_eq!(grid.height(), 11);
    }

    #[test]
    fn tiny_dimensions_clamp_to_minimum() {
        let grid = Grid::filled(1, 3);
        assert_eq!(grid.width(), MIN_DIM);
        assert_eq!(grid.height(), MIN_DIM);
    }

    #[test]
    fn out_of_range_reads_as_wall() {
        let grid = Grid::filled(5, 5);
        assert_eq!(grid.get(-1, 0), CellKind::Wall);
        assert_eq!(grid.get(0, 5), CellKind::Wall);
        assert_eq!(grid.get(isize::MAX, 0), CellKind::Wall);
    }

    #[test]
    fn set_then_get_roundtrips() {
        let mut grid = Grid::filled(5, 5);
        grid.set(Cell::new(1, 1), CellKind::Path);
        assert!(grid.is_path(1, 1));
        assert!(!grid.is_path(1, 2));
    }

    #[test]
    fn flood_fill_stops_at_walls() {
        let mut grid = Grid::filled(5, 5);
        // Two open cells separated by wall material.
        grid.set(Cell::new(1, 1), CellKind::Path);
        grid.set(Cell::new(3, 3), CellKind::Path);

        let reached = grid.reachable_from(Cell::new(1, 1));
        assert!(reached[grid.index_of(Cell::new(1, 1))]);
        assert!(!reached[grid.index_of(Cell::new(3, 3))]);
    }

    #[test]
    fn flood_fill_from_wall_reaches_nothing() {
        let grid = Grid::filled(5, 5);
        assert!(grid.reachable_from(Cell::new(0, 0)).iter().all(|&v| !v));
    }
}
