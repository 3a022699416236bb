//! The four carving directions on the double-resolution grid
//!
//! A step in any direction moves two grid cells along one axis, landing on the
//! next maze cell. The half step lands on the connector in between.

use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;

use crate::spatial::grid::Position;

/// Compass direction between neighbouring maze cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Two columns forward
    North,
    /// Two rows forward
    East,
    /// Two columns back
    South,
    /// Two rows back
    West,
}

impl Direction {
    /// All four directions in declaration order
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Full step `[row, col]` from one maze cell to the next
    pub const fn delta(self) -> [i32; 2] {
        match self {
            Self::North => [0, 2],
            Self::East => [2, 0],
            Self::South => [0, -2],
            Self::West => [-2, 0],
        }
    }

    /// Half step `[row, col]` from a maze cell to its connector
    pub const fn half_delta(self) -> [i32; 2] {
        let [dr, dc] = self.delta();
        [dr / 2, dc / 2]
    }

    /// The direction pointing back
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Maze cell reached by a full step from `position`
    ///
    /// The result may lie outside the grid; callers check it with `Grid::valid`.
    pub const fn step(self, position: Position) -> Position {
        let [dr, dc] = self.delta();
        [position[0] + dr, position[1] + dc]
    }

    /// Connector cell reached by a half step from `position`
    pub const fn half_step(self, position: Position) -> Position {
        let [dr, dc] = self.half_delta();
        [position[0] + dr, position[1] + dc]
    }

    /// Direction whose full step turns `from` into `to`, if any
    pub fn between(from: Position, to: Position) -> Option<Self> {
        let delta = [to[0] - from[0], to[1] - from[1]];
        Self::ALL.into_iter().find(|direction| direction.delta() == delta)
    }

    /// A fresh, uniformly random ordering of all four directions
    ///
    /// Each call draws a new permutation (Fisher-Yates), so every one of the
    /// 24 orderings is equally likely.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> [Self; 4] {
        let mut directions = Self::ALL;
        directions.shuffle(rng);
        directions
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::North => "N",
            Self::East => "E",
            Self::South => "S",
            Self::West => "W",
        };
        f.write_str(label)
    }
}
