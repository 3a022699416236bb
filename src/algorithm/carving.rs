//! Randomized depth-first carving of a spanning tree over the maze cells
//!
//! The walk is the classic recursive backtracker, unrolled onto an explicit
//! stack of frames so that large grids cannot exhaust the call stack. Random
//! draws happen in the same order as the recursive form: a cell's direction
//! permutation when it is entered, and a leaf's braiding permutation when its
//! frame runs out of directions, before control returns to the parent.

use rand::Rng;

use crate::algorithm::braiding::random_break;
use crate::io::error::Result;
use crate::spatial::{Direction, Grid, Position};

/// Summary of a single carving pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CarveReport {
    /// Maze cells opened by the pass, including the start
    pub cells_visited: usize,
    /// Cells that finished without carving a child
    pub leaves: usize,
    /// Leaves that gained an extra connection
    pub forced_connections: usize,
    /// Deepest backtracking stack reached
    pub max_depth: usize,
}

/// One pending cell of the depth-first walk
struct Frame {
    position: Position,
    directions: [Direction; 4],
    next: usize,
    carved_child: bool,
}

impl Frame {
    fn enter<R: Rng + ?Sized>(position: Position, rng: &mut R) -> Self {
        Self {
            position,
            directions: Direction::shuffled(rng),
            next: 0,
            carved_child: false,
        }
    }

    fn next_direction(&mut self) -> Option<Direction> {
        let direction = self.directions.get(self.next).copied();
        if direction.is_some() {
            self.next += 1;
        }
        direction
    }
}

/// Carve a spanning tree of maze cells reachable from `start`
///
/// `start` is opened first. Each cell then tries its neighbours in a fresh
/// random order, skipping those outside the grid or already open, and carves
/// its way into every remaining one. A cell that carved no child is a dead end
/// and goes straight to [`random_break`].
///
/// # Errors
///
/// Returns an error if `start` lies outside the grid
pub fn carve_from<R: Rng + ?Sized>(
    grid: &mut Grid,
    start: Position,
    rng: &mut R,
) -> Result<CarveReport> {
    grid.carve(start)?;

    let mut report = CarveReport {
        cells_visited: 1,
        max_depth: 1,
        ..CarveReport::default()
    };
    let mut stack = vec![Frame::enter(start, rng)];

    while let Some(frame) = stack.last_mut() {
        let position = frame.position;

        if let Some(direction) = frame.next_direction() {
            let neighbour = direction.step(position);
            if !grid.valid(neighbour) || grid.is_open(neighbour)? {
                continue;
            }

            frame.carved_child = true;
            grid.open_passage(position, neighbour)?;
            report.cells_visited += 1;

            stack.push(Frame::enter(neighbour, rng));
            report.max_depth = report.max_depth.max(stack.len());
        } else {
            let carved_child = frame.carved_child;
            stack.pop();

            if !carved_child {
                report.leaves += 1;
                if random_break(grid, position, rng)?.is_some() {
                    report.forced_connections += 1;
                }
            }
        }
    }

    Ok(report)
}
