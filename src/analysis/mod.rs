//! Analysis of the passage graph of a carved maze

/// Summary statistics of a finished maze
pub mod statistics;
/// Degree, dead-end and reachability queries
pub mod topology;

pub use statistics::MazeStatistics;
