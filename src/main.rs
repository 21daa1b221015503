//! CLI entry point for the texture variation generator

use clap::Parser;
use variatex::io::cli::{BatchProcessor, Cli};

fn main() -> variatex::Result<()> {
    let cli = Cli::parse();
    let mut processor = BatchProcessor::new(cli);
    processor.process()
}
