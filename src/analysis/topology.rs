//! Read-only passage graph queries over a carved grid
//!
//! Maze cells are the positions on the lattice of the carving origin (same
//! row and column parity); the passage graph joins two maze cells whenever
//! the connector between them is open.

use bitvec::bitvec;
use bitvec::vec::BitVec;

use crate::spatial::{Direction, Grid, Position};

/// Check that `position` lies on the maze cell lattice of `origin`
pub const fn on_lattice(origin: Position, position: Position) -> bool {
    (position[0] - origin[0]).rem_euclid(2) == 0 && (position[1] - origin[1]).rem_euclid(2) == 0
}

/// Number of directions whose neighbouring maze cell is inside the grid
pub fn valid_neighbour_count(grid: &Grid, position: Position) -> usize {
    Direction::ALL
        .into_iter()
        .filter(|direction| grid.valid(direction.step(position)))
        .count()
}

/// Directions in which `position` has an open passage to a neighbour
pub fn open_directions(grid: &Grid, position: Position) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|direction| {
            grid.valid(direction.step(position))
                && grid
                    .cell(direction.half_step(position))
                    .is_some_and(|cell| cell.is_path())
        })
        .collect()
}

/// Number of open passages leaving `position`
pub fn passage_degree(grid: &Grid, position: Position) -> usize {
    open_directions(grid, position).len()
}

/// Open maze cells on the lattice of `origin`, in row-major order
pub fn maze_cells(grid: &Grid, origin: Position) -> Vec<Position> {
    grid.iter()
        .filter(|&(position, cell)| cell.is_path() && on_lattice(origin, position))
        .map(|(position, _)| position)
        .collect()
}

/// Open maze cells left with fewer than two passages despite having room
/// for a second one
///
/// Cells with a single in-bounds neighbour cannot be braided and are not
/// reported.
pub fn dead_ends(grid: &Grid, origin: Position) -> Vec<Position> {
    maze_cells(grid, origin)
        .into_iter()
        .filter(|&position| {
            passage_degree(grid, position) < 2 && valid_neighbour_count(grid, position) >= 2
        })
        .collect()
}

/// Every in-bounds position on the lattice of `start`, open or not
///
/// These are the maze cells a carving pass from `start` is able to reach.
pub fn lattice_reachable(grid: &Grid, start: Position) -> Vec<Position> {
    grid.iter()
        .map(|(position, _)| position)
        .filter(|&position| on_lattice(start, position))
        .collect()
}

/// Maze cells connected to `start` through open passages
///
/// Returns a bit per grid cell in row-major order. Only maze cells are
/// marked; an empty set is returned when `start` is closed or out of bounds.
pub fn reachable_from(grid: &Grid, start: Position) -> BitVec {
    let mut visited = bitvec![0; grid.height() * grid.width()];

    if !grid.cell(start).is_some_and(|cell| cell.is_path()) {
        return visited;
    }

    let mut stack = vec![start];
    mark(grid, &mut visited, start);

    while let Some(position) = stack.pop() {
        for direction in open_directions(grid, position) {
            let neighbour = direction.step(position);
            if mark(grid, &mut visited, neighbour) {
                stack.push(neighbour);
            }
        }
    }

    visited
}

/// Check membership of `position` in a set built by [`reachable_from`]
pub fn contains(grid: &Grid, set: &BitVec, position: Position) -> bool {
    flat_index(grid, position).is_some_and(|index| set.get(index).as_deref() == Some(&true))
}

/// Number of connected components of the passage graph over the open maze
/// cells of `origin`'s lattice
pub fn component_count(grid: &Grid, origin: Position) -> usize {
    let mut seen = bitvec![0; grid.height() * grid.width()];
    let mut components = 0;

    for position in maze_cells(grid, origin) {
        if contains(grid, &seen, position) {
            continue;
        }

        components += 1;
        let reached = reachable_from(grid, position);
        seen |= &reached;
    }

    components
}

// Sets the bit for `position`, returning whether it was newly set
fn mark(grid: &Grid, visited: &mut BitVec, position: Position) -> bool {
    let Some(index) = flat_index(grid, position) else {
        return false;
    };
    if visited.get(index).as_deref() == Some(&true) {
        return false;
    }
    visited.set(index, true);
    true
}

fn flat_index(grid: &Grid, position: Position) -> Option<usize> {
    grid.valid(position).then(|| position[0] as usize * grid.width() + position[1] as usize)
}
