//! Braid maze generation: randomized backtracking with dead-end removal
//!
//! A spanning tree is carved depth-first over a double-resolution grid, where
//! maze cells sit two steps apart and the cell between them is the wall or
//! passage joining them. Every dead end found while backtracking is then given
//! one extra connection, so the finished maze has no dead ends wherever the
//! grid boundary leaves room for a second passage.

#![forbid(unsafe_code)]

/// Carving, dead-end removal and the maze generator
pub mod algorithm;
/// Passage graph analysis of finished mazes
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Grid storage and direction utilities
pub mod spatial;

pub use algorithm::generator::MazeGenerator;
pub use io::error::{MazeError, Result};
pub use spatial::{Cell, Direction, Grid, Position};
