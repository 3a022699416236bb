/// Dead-end removal by forcing an extra connection
pub mod braiding;
/// Randomized depth-first spanning tree carving
pub mod carving;
/// Maze generator owning the grid and random source
pub mod generator;
