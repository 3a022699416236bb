use rand::Rng;
use tracing::trace;

use crate::io::error::{MazeError, Result};
use crate::spatial::{Direction, Grid, Position};

/// Force one extra connection out of a maze cell
///
/// Directions are tried in a fresh random order; the first one whose
/// neighbour is inside the grid and whose connector is still a wall gets the
/// neighbour and connector carved open. At most one connection is added and
/// the new neighbour is not explored further.
///
/// Returns the direction that was opened, or `None` when no direction
/// qualifies (a boundary cell with no spare neighbour, or every connector
/// already open). Calling it again on a cell that has nothing left to open is
/// a no-op.
///
/// # Errors
///
/// Returns [`MazeError::OutOfBounds`] if `position` lies outside the grid
pub fn random_break<R: Rng + ?Sized>(
    grid: &mut Grid,
    position: Position,
    rng: &mut R,
) -> Result<Option<Direction>> {
    if !grid.valid(position) {
        return Err(MazeError::OutOfBounds {
            position,
            dimensions: grid.dimensions(),
        });
    }

    for direction in Direction::shuffled(rng) {
        let neighbour = direction.step(position);
        if !grid.valid(neighbour) || grid.is_open(direction.half_step(position))? {
            continue;
        }

        grid.open_passage(position, neighbour)?;
        trace!(
            row = position[0],
            col = position[1],
            %direction,
            "forced extra connection"
        );
        return Ok(Some(direction));
    }

    Ok(None)
}
