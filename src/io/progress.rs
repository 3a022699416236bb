//! Progress display for batch maze generation

use crate::io::configuration::{PROGRESS_BAR_WIDTH, PROGRESS_MIN_BATCH};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] Mazes: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many mazes of a batch have been generated
///
/// Single mazes finish too quickly to be worth a bar, so the bar only appears
/// for batches of at least [`PROGRESS_MIN_BATCH`] mazes.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    maze_count: usize,
    completed: usize,
    total_elapsed: Duration,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no bar
    pub const fn new() -> Self {
        Self {
            bar: None,
            maze_count: 0,
            completed: 0,
            total_elapsed: Duration::ZERO,
        }
    }

    /// Prepare the display for a batch of `maze_count` mazes
    pub fn initialize(&mut self, maze_count: usize) {
        self.maze_count = maze_count;
        self.completed = 0;
        self.total_elapsed = Duration::ZERO;

        if maze_count >= PROGRESS_MIN_BATCH {
            let bar = ProgressBar::new(maze_count as u64);
            bar.set_style(BATCH_STYLE.clone());
            self.bar = Some(bar);
        }
    }

    /// Whether a bar is being displayed
    pub const fn is_visible(&self) -> bool {
        self.bar.is_some()
    }

    /// Size of the current batch
    pub const fn maze_count(&self) -> usize {
        self.maze_count
    }

    /// Number of mazes completed so far
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Total generation time reported so far
    pub const fn total_elapsed(&self) -> Duration {
        self.total_elapsed
    }

    /// Announce the maze about to be generated
    pub fn start_maze(&self, index: usize, seed: Option<u64>) {
        if let Some(ref bar) = self.bar {
            match seed {
                Some(seed) => bar.set_message(format!("#{index} (seed {seed})")),
                None => bar.set_message(format!("#{index}")),
            }
        }
    }

    /// Mark a maze as generated
    pub fn complete_maze(&mut self, elapsed: Duration) {
        self.completed += 1;
        self.total_elapsed += elapsed;

        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Clean up the display
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_with_message(format!("{} mazes generated", self.completed));
        }
    }
}
