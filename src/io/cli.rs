//! Command-line interface for generating one maze or a batch of mazes

use crate::algorithm::generator::MazeGenerator;
use crate::analysis::MazeStatistics;
use crate::io::configuration::{
    DEFAULT_COUNT, DEFAULT_HEIGHT, DEFAULT_SEED, DEFAULT_WIDTH, MAX_MAZE_COUNT, OUTPUT_SUFFIX,
};
use crate::io::error::{Result, invalid_output, invalid_parameter};
use crate::io::image::export_grid_as_png;
use crate::io::progress::ProgressManager;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "braidmaze")]
#[command(author, version, about = "Generate mazes without dead ends")]
/// Command-line arguments for the maze generator
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Grid rows (odd values line maze cells up with the border)
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Grid columns (odd values line maze cells up with the border)
    #[arg(short, long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Random seed for reproducible generation; batch mazes use seed, seed+1, ...
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Ignore the seed and draw from system entropy
    #[arg(short, long)]
    pub random: bool,

    /// Number of mazes to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_COUNT)]
    pub count: usize,

    /// Write each maze as a PNG (batches get an index appended to the name)
    #[arg(short, long, value_name = "PNG")]
    pub output: Option<PathBuf>,

    /// Print the text dump of each maze to stdout
    #[arg(short, long)]
    pub text: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Seed for the maze at `index` in the batch, or `None` for entropy
    pub const fn seed_for(&self, index: usize) -> Option<u64> {
        if self.random {
            None
        } else {
            Some(self.seed.wrapping_add(index as u64))
        }
    }
}

/// Summary of one generated maze
///
/// The grid itself is dropped once it has been printed and exported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMaze {
    /// Position of the maze in the batch
    pub index: usize,
    /// Seed used, `None` when drawn from entropy
    pub seed: Option<u64>,
    /// Passage graph statistics
    pub statistics: MazeStatistics,
    /// Where the PNG was written, if requested
    pub output_path: Option<PathBuf>,
}

/// Orchestrates generation and export of a batch of mazes
pub struct MazeProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl MazeProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate and export every maze requested by the CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments are invalid, generation fails, or
    /// an image cannot be written
    pub fn process(&mut self) -> Result<Vec<GeneratedMaze>> {
        self.validate()?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.count);
        }

        let mazes = (0..self.cli.count)
            .map(|index| self.process_maze(index))
            .collect::<Result<Vec<_>>>()?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(mazes)
    }

    fn validate(&self) -> Result<()> {
        if self.cli.count == 0 {
            return Err(invalid_parameter(
                "count",
                &self.cli.count,
                &"at least one maze must be requested",
            ));
        }

        if self.cli.count > MAX_MAZE_COUNT {
            return Err(invalid_parameter(
                "count",
                &self.cli.count,
                &format!("at most {MAX_MAZE_COUNT} mazes per run"),
            ));
        }

        if let Some(ref output) = self.cli.output {
            let is_png = output
                .extension()
                .and_then(|s| s.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
            if !is_png {
                return Err(invalid_output(&format!(
                    "'{}' must have a .png extension",
                    output.display()
                )));
            }
        }

        Ok(())
    }

    // Allow print for the text dump requested with --text
    #[allow(clippy::print_stdout)]
    fn process_maze(&mut self, index: usize) -> Result<GeneratedMaze> {
        let start_time = Instant::now();
        let seed = self.cli.seed_for(index);

        if let Some(ref pm) = self.progress_manager {
            pm.start_maze(index, seed);
        }

        let mut generator = match seed {
            Some(seed) => MazeGenerator::with_seed(self.cli.height, self.cli.width, seed)?,
            None => MazeGenerator::new(self.cli.height, self.cli.width)?,
        };
        generator.generate()?;

        let origin = generator.start().unwrap_or_default();
        let grid = generator.into_grid();
        let statistics = MazeStatistics::collect(&grid, origin);
        info!(index, ?seed, %statistics, "maze generated");

        if self.cli.text {
            if index > 0 {
                println!();
            }
            println!("{grid}");
        }

        let output_path = self
            .cli
            .output
            .as_deref()
            .map(|base| Self::get_output_path(base, index, self.cli.count));
        if let Some(ref path) = output_path {
            export_grid_as_png(&grid, path)?;
            info!(path = %path.display(), "wrote maze image");
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_maze(start_time.elapsed());
        }

        Ok(GeneratedMaze {
            index,
            seed,
            statistics,
            output_path,
        })
    }

    /// Output path for maze `index` of a batch of `count`
    ///
    /// A single maze is written to `base` itself; batch mazes get the index
    /// appended to the file stem.
    pub fn get_output_path(base: &Path, index: usize, count: usize) -> PathBuf {
        if count <= 1 {
            return base.to_path_buf();
        }

        let stem = base.file_stem().unwrap_or_default();
        let extension = base.extension().unwrap_or_default();
        let output_name = format!(
            "{}{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            index,
            extension.to_string_lossy()
        );

        if let Some(parent) = base.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
