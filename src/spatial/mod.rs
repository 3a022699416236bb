//! Spatial data structures for the maze grid
//!
//! This module contains spatial-related functionality including:
//! - Grid storage and checked cell accessors
//! - Direction deltas between maze cells and their connectors

/// Compass directions, step deltas and shuffling
pub mod direction;
/// Grid state management and cell accessors
pub mod grid;

pub use direction::Direction;
pub use grid::{Cell, Grid, Position};
