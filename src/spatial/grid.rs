//! Binary wall/path grid with checked accessors
//!
//! The grid is double resolution: maze cells sit two steps apart and the cell
//! between two maze cells is the connector that joins or separates them. A
//! cell's state doubles as the visited marker during carving, so a `Path` maze
//! cell is exactly a visited one. Cells only ever go from `Wall` to `Path`.

use ndarray::Array2;

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{MazeError, Result, invalid_parameter};
use crate::spatial::direction::Direction;

/// Grid coordinates as `[row, col]`
///
/// Signed so that steps past the top or left edge stay representable and are
/// rejected by [`Grid::valid`] rather than wrapping.
pub type Position = [i32; 2];

/// State of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Closed cell
    #[default]
    Wall,
    /// Open cell
    Path,
}

impl Cell {
    /// Whether the cell is open
    pub const fn is_path(self) -> bool {
        matches!(self, Self::Path)
    }
}

/// Fixed-size rectangular grid of cell states
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// Create a grid of the given size with every cell walled
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or exceeds
    /// [`MAX_GRID_DIMENSION`]
    pub fn new(height: usize, width: usize) -> Result<Self> {
        validate_dimension("height", height)?;
        validate_dimension("width", width)?;

        Ok(Self {
            cells: Array2::from_elem((height, width), Cell::Wall),
        })
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Grid dimensions (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Check that a position lies inside the grid
    pub fn valid(&self, position: Position) -> bool {
        self.index(position).is_some()
    }

    /// Read a cell, or `None` when the position is outside the grid
    pub fn cell(&self, position: Position) -> Option<Cell> {
        self.index(position)
            .and_then(|index| self.cells.get(index).copied())
    }

    /// Check whether the cell at `position` is open
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::OutOfBounds`] if `position` is not valid
    pub fn is_open(&self, position: Position) -> Result<bool> {
        self.cell(position)
            .map(Cell::is_path)
            .ok_or_else(|| self.out_of_bounds(position))
    }

    /// Open the cell at `position`
    ///
    /// Carving an open cell leaves it open.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::OutOfBounds`] if `position` is not valid
    pub fn carve(&mut self, position: Position) -> Result<()> {
        let index = self
            .index(position)
            .ok_or_else(|| self.out_of_bounds(position))?;
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = Cell::Path;
        }
        Ok(())
    }

    /// Connector cell lying midway between two neighbouring maze cells
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::NotAdjacent`] unless `to` is exactly one
    /// direction step away from `from`
    pub fn connector_between(&self, from: Position, to: Position) -> Result<Position> {
        Direction::between(from, to)
            .map(|direction| direction.half_step(from))
            .ok_or(MazeError::NotAdjacent { from, to })
    }

    /// Open the maze cell `to` together with its connector to `from`
    ///
    /// # Errors
    ///
    /// Returns an error if the cells are not adjacent or either cell to be
    /// carved lies outside the grid
    pub fn open_passage(&mut self, from: Position, to: Position) -> Result<()> {
        let connector = self.connector_between(from, to)?;
        self.carve(to)?;
        self.carve(connector)
    }

    /// Number of open cells
    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_path()).count()
    }

    /// All cells in row-major order with their positions
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), &cell)| ([row as i32, col as i32], cell))
    }

    /// Borrow the underlying cell array
    pub const fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }

    fn index(&self, position: Position) -> Option<[usize; 2]> {
        let [row, col] = position;
        if row < 0 || col < 0 {
            return None;
        }

        let (row, col) = (row as usize, col as usize);
        (row < self.height() && col < self.width()).then_some([row, col])
    }

    fn out_of_bounds(&self, position: Position) -> MazeError {
        MazeError::OutOfBounds {
            position,
            dimensions: self.dimensions(),
        }
    }
}

fn validate_dimension(parameter: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(invalid_parameter(parameter, &value, &"must be positive"));
    }
    if value > MAX_GRID_DIMENSION {
        return Err(invalid_parameter(
            parameter,
            &value,
            &format!("must not exceed {MAX_GRID_DIMENSION}"),
        ));
    }
    Ok(())
}
