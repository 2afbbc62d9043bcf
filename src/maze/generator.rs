//! Maze carving using the randomized depth-first "recursive backtracker".
//!
//! Starting from an all-wall grid, the carver walks a stack of cells on a
//! coarse 2-cell lattice: every move jumps two cells along one axis and opens
//! the wall cell in between, so carved corridors are always separated by
//! exactly one cell of wall material and no diagonal-only connections can
//! appear. Every cell opened this way is connected to the start by
//! construction (DFS carving yields a spanning tree).
//!
//! Two post-processing steps follow the carve:
//! 1. The cells east, south, and diagonal of the start are cleared so the
//!    spawn never feels boxed in. This can create short loops, which is fine;
//!    it only ever adds connectivity.
//! 2. The exit cell is forced open. Forcing a single cell open does not by
//!    itself connect it to anything, so a flood-fill verifies the exit is
//!    reachable and, when it is not, a corridor is carved from the exit back
//!    toward the start until it meets the reachable region.

use rand::prelude::*;

use super::grid::{Cell, CellKind, Grid};

/// The four 2-cell lattice strides, one axis at a time.
const STRIDES: [(isize, isize); 4] = [(0, -2), (0, 2), (-2, 0), (2, 0)];

/// Carves a maze into `grid`, guaranteeing a path from `start` to `end`.
///
/// `grid` must be all-wall with odd dimensions (as [`Grid::filled`]
/// produces); `start` and `end` must be interior cells with odd coordinates.
pub(crate) fn carve(grid: &mut Grid, start: Cell, end: Cell, rng: &mut impl Rng) {
    grid.set(start, CellKind::Path);
    let mut stack = vec![start];
    let mut open_strides = Vec::with_capacity(4);

    while let Some(&current) = stack.last() {
        open_strides.clear();
        for stride in STRIDES {
            let nx = current.x as isize + stride.0;
            let nz = current.z as isize + stride.1;
            // Interior only: the outermost ring stays wall.
            let interior = nx > 0
                && nx < grid.width() as isize - 1
                && nz > 0
                && nz < grid.height() as isize - 1;
            if interior && grid.get(nx, nz) == CellKind::Wall {
                open_strides.push(stride);
            }
        }

        if let Some(&(dx, dz)) = open_strides.choose(rng) {
            let between = Cell::new(
                (current.x as isize + dx / 2) as usize,
                (current.z as isize + dz / 2) as usize,
            );
            let next = Cell::new(
                (current.x as isize + dx) as usize,
                (current.z as isize + dz) as usize,
            );
            grid.set(between, CellKind::Path);
            grid.set(next, CellKind::Path);
            stack.push(next);
        } else {
            stack.pop();
        }
    }

    open_spawn_area(grid, start);

    grid.set(end, CellKind::Path);
    connect_exit(grid, start, end);
}

/// Clears the cells east, south, and diagonal of the spawn so the player
/// never starts staring at walls on three sides.
fn open_spawn_area(grid: &mut Grid, start: Cell) {
    grid.set(Cell::new(start.x + 1, start.z), CellKind::Path);
    grid.set(Cell::new(start.x, start.z + 1), CellKind::Path);
    grid.set(Cell::new(start.x + 1, start.z + 1), CellKind::Path);
}

/// Ensures the forced-open exit is reachable from the start. When it is
/// isolated, carves west and then north from the exit until the new corridor
/// touches the region the flood-fill reached. Terminates because the walk
/// ends at the start cell itself, which is always reached.
fn connect_exit(grid: &mut Grid, start: Cell, end: Cell) {
    let reached = grid.reachable_from(start);
    if reached[grid.index_of(end)] {
        return;
    }

    let mut cursor = end;
    loop {
        if cursor.x > start.x {
            cursor.x -= 1;
        } else if cursor.z > start.z {
            cursor.z -= 1;
        } else {
            break;
        }
        if reached[grid.index_of(cursor)] {
            break;
        }
        grid.set(cursor, CellKind::Path);
    }
}
