//! CLI entry point for the braid maze generator

use braidmaze::io::cli::{Cli, MazeProcessor};
use braidmaze::io::logging::init_tracing;
use clap::Parser;

fn main() -> braidmaze::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut processor = MazeProcessor::new(cli);
    processor.process()?;
    Ok(())
}
