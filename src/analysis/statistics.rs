//! Summary statistics of a finished maze

use std::fmt;

use crate::analysis::topology::{component_count, dead_ends, maze_cells, passage_degree};
use crate::spatial::{Grid, Position};

/// Counts describing the passage graph of a maze
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MazeStatistics {
    /// Open grid cells (maze cells and connectors)
    pub open_cells: usize,
    /// Open maze cells on the origin's lattice
    pub maze_cells: usize,
    /// Open connectors between maze cells
    pub passages: usize,
    /// Maze cells below degree two that had room for another passage
    pub dead_ends: usize,
    /// Connected components of the passage graph
    pub components: usize,
    /// Independent cycles (`passages - maze_cells + components`)
    pub cycles: usize,
}

impl MazeStatistics {
    /// Gather statistics for the maze cells on `origin`'s lattice
    pub fn collect(grid: &Grid, origin: Position) -> Self {
        let cells = maze_cells(grid, origin);
        let degree_sum: usize = cells
            .iter()
            .map(|&position| passage_degree(grid, position))
            .sum();

        // Every passage joins two maze cells and is counted from both ends
        let passages = degree_sum / 2;
        let components = component_count(grid, origin);

        Self {
            open_cells: grid.open_count(),
            maze_cells: cells.len(),
            passages,
            dead_ends: dead_ends(grid, origin).len(),
            components,
            cycles: (passages + components).saturating_sub(cells.len()),
        }
    }

    /// Whether every maze cell can reach every other
    pub const fn is_connected(&self) -> bool {
        self.components <= 1
    }

    /// Whether the maze is free of avoidable dead ends
    pub const fn is_braided(&self) -> bool {
        self.dead_ends == 0
    }
}

impl fmt::Display for MazeStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} maze cells, {} passages, {} cycles, {} dead ends, {} component(s)",
            self.maze_cells, self.passages, self.cycles, self.dead_ends, self.components
        )
    }
}
