//! CLI entry point for painting and labeling PNG tile maps

use clap::Parser;
use gridbrush::io::cli::{Cli, FileProcessor};

fn main() -> gridbrush::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
