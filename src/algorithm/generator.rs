use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::algorithm::braiding::random_break;
use crate::algorithm::carving::{CarveReport, carve_from};
use crate::io::error::{MazeError, Result};
use crate::spatial::{Grid, Position};

/// Braid maze generator
///
/// Owns the grid and the random source. A generator produces exactly one
/// maze: construct it, call [`generate`](Self::generate) once, then read the
/// grid.
pub struct MazeGenerator<R = StdRng> {
    grid: Grid,
    rng: R,
    start: Option<Position>,
    report: Option<CarveReport>,
}

impl MazeGenerator<StdRng> {
    /// Create a generator seeded from operating system entropy
    ///
    /// Odd dimensions line the maze cells up with the grid border. Even
    /// dimensions are accepted; depending on the start some edge cells then
    /// stay unreachable.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is invalid
    pub fn new(height: usize, width: usize) -> Result<Self> {
        Self::with_rng(height, width, StdRng::from_os_rng())
    }

    /// Create a deterministic generator from a seed
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is invalid
    pub fn with_seed(height: usize, width: usize, seed: u64) -> Result<Self> {
        Self::with_rng(height, width, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MazeGenerator<R> {
    /// Create a generator drawing from the given random source
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is invalid
    pub fn with_rng(height: usize, width: usize, rng: R) -> Result<Self> {
        Ok(Self {
            grid: Grid::new(height, width)?,
            rng,
            start: None,
            report: None,
        })
    }

    /// Generate the maze from a uniformly random start anywhere in the grid
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::AlreadyGenerated`] on a second call
    pub fn generate(&mut self) -> Result<()> {
        if self.start.is_some() {
            return Err(MazeError::AlreadyGenerated);
        }

        let start = [
            self.rng.random_range(0..self.grid.height()) as i32,
            self.rng.random_range(0..self.grid.width()) as i32,
        ];
        self.generate_from(start)
    }

    /// Generate the maze from a chosen start cell
    ///
    /// Runs the carving pass, then gives the start one more chance to gain an
    /// extra connection: as the root of the walk it may have carved a single
    /// child and be left as a dead end. When the pass already braided the
    /// start this second attempt finds nothing to open.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::AlreadyGenerated`] on a second call and
    /// [`MazeError::OutOfBounds`] if `start` lies outside the grid
    pub fn generate_from(&mut self, start: Position) -> Result<()> {
        if self.start.is_some() {
            return Err(MazeError::AlreadyGenerated);
        }

        let (height, width) = self.grid.dimensions();
        debug!(height, width, row = start[0], col = start[1], "carving maze");

        let mut report = carve_from(&mut self.grid, start, &mut self.rng)?;
        if random_break(&mut self.grid, start, &mut self.rng)?.is_some() {
            report.forced_connections += 1;
        }

        debug!(
            cells_visited = report.cells_visited,
            leaves = report.leaves,
            forced_connections = report.forced_connections,
            max_depth = report.max_depth,
            "maze carved"
        );

        self.start = Some(start);
        self.report = Some(report);
        Ok(())
    }

    /// Whether the maze has been generated
    pub const fn is_generated(&self) -> bool {
        self.start.is_some()
    }

    /// Start cell of the carving pass, once generated
    pub const fn start(&self) -> Option<Position> {
        self.start
    }

    /// Statistics of the carving pass, once generated
    pub const fn report(&self) -> Option<&CarveReport> {
        self.report.as_ref()
    }

    /// Borrow the grid
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Take ownership of the grid
    pub fn into_grid(self) -> Grid {
        self.grid
    }
}
