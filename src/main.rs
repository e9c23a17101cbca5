//! CLI entry point for the photo-mosaic builder

use clap::Parser;
use mosaictile::io::cli::{Cli, MosaicProcessor};
use mosaictile::io::logging;

fn main() -> mosaictile::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbosity());
    let mut processor = MosaicProcessor::new(cli);
    processor.process()
}
