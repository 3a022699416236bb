//! Generation constants and runtime configuration defaults

// Default maze size, odd so maze cells line up with the border
/// Default number of grid rows
pub const DEFAULT_HEIGHT: usize = 41;
/// Default number of grid columns
pub const DEFAULT_WIDTH: usize = 81;

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default number of mazes generated per run
pub const DEFAULT_COUNT: usize = 1;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;
/// Largest batch a single run may request
pub const MAX_MAZE_COUNT: usize = 100_000;

// Text dump symbols
/// Symbol for the one-cell frame drawn around the grid
pub const BORDER_SYMBOL: char = '+';
/// Symbol for an open cell
pub const PATH_SYMBOL: char = '0';
/// Symbol for a closed cell
pub const WALL_SYMBOL: char = '#';

// PNG export colors (RGBA)
/// Color of an open cell
pub const PATH_COLOR: [u8; 4] = [255, 255, 255, 255];
/// Color of a closed cell
pub const WALL_COLOR: [u8; 4] = [0, 135, 81, 255];

// Output settings
/// Separator between output stem and maze index for batch runs
pub const OUTPUT_SUFFIX: &str = "_";

// Progress bar display settings
/// Smallest batch that gets a progress bar
pub const PROGRESS_MIN_BATCH: usize = 2;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn,braidmaze=info";
/// Log filter used with `--verbose`
pub const VERBOSE_LOG_FILTER: &str = "warn,braidmaze=debug";
