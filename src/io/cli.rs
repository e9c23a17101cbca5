//! Command-line interface for building a photo-mosaic from a thumbnail directory

use crate::composition::composer::MosaicComposer;
use crate::io::configuration::{
    DEFAULT_SEED, DEFAULT_THUMBNAIL_EDGE_SIZE, DEFAULT_THUMBNAILS_DIR, JPEG_QUALITY,
    OUTPUT_FILE_NAME,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{export_mosaic_as_jpeg, load_jpeg};
use crate::io::logging::Verbosity;
use crate::io::progress::ProgressManager;
use crate::matching::index::ThumbnailIndex;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "mosaictile")]
#[command(
    author,
    version,
    about = "Rebuild a JPEG image as a mosaic of color-matched thumbnails"
)]
/// Command-line arguments for the mosaic tool
pub struct Cli {
    /// Directory scanned for candidate thumbnail JPEGs
    #[arg(
        short,
        long,
        alias = "thumbnailsDir",
        value_name = "DIR",
        default_value = DEFAULT_THUMBNAILS_DIR
    )]
    pub thumbnails_dir: PathBuf,

    /// Edge length in pixels of each square cell and tile
    #[arg(
        short = 'e',
        long,
        alias = "thumbnailEdgeSize",
        value_name = "PX",
        default_value_t = DEFAULT_THUMBNAIL_EDGE_SIZE
    )]
    pub thumbnail_edge_size: u32,

    /// Source JPEG image to rebuild
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Path the mosaic JPEG is written to
    #[arg(short, long, value_name = "FILE", default_value = OUTPUT_FILE_NAME)]
    pub output: PathBuf,

    /// Random seed for reproducible color sampling
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Suppress progress output and non-error logging
    #[arg(short, long)]
    pub quiet: bool,

    /// Log per-thumbnail detail
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Logging verbosity selected by the flags
    pub const fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.verbose)
    }

    /// Source image path, rejecting a missing or empty value
    ///
    /// # Errors
    ///
    /// Returns an error if no input path was given
    pub fn input_path(&self) -> Result<&Path> {
        match self.input {
            Some(ref path) if !path.as_os_str().is_empty() => Ok(path.as_path()),
            _ => Err(invalid_parameter(
                "input",
                &"",
                &"a source image path is required (--input <FILE>)",
            )),
        }
    }
}

/// Runs one mosaic build: index thumbnails, compose, export
pub struct MosaicProcessor {
    cli: Cli,
    progress_manager: ProgressManager,
}

impl MosaicProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = if cli.should_show_progress() {
            ProgressManager::new()
        } else {
            ProgressManager::hidden()
        };

        Self {
            cli,
            progress_manager,
        }
    }

    /// Build the mosaic described by the CLI arguments and write it out
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No input path was given, or the edge size is zero
    /// - The thumbnail directory cannot be listed
    /// - The source image cannot be opened or decoded
    /// - No thumbnail could be decoded
    /// - The output file cannot be created or encoded
    pub fn process(&mut self) -> Result<()> {
        let start_time = Instant::now();
        let input = self.cli.input_path()?.to_path_buf();
        let composer = MosaicComposer::new(self.cli.thumbnail_edge_size)?;
        let mut rng = StdRng::seed_from_u64(self.cli.seed);

        self.progress_manager.start_indexing();
        let index = ThumbnailIndex::build_with_progress(
            &self.cli.thumbnails_dir,
            &mut rng,
            |visited, total| self.progress_manager.update_indexing(visited, total),
        )?;
        self.progress_manager.finish_indexing(index.len());

        let source = load_jpeg(&input)?;
        log::info!(
            "Loaded source '{}' ({}x{})",
            input.display(),
            source.width(),
            source.height()
        );

        self.progress_manager.start_composing();
        let composed = composer.compose_with_progress(&source, &index, &mut rng, |done, total| {
            self.progress_manager.update_composing(done, total);
        });
        self.progress_manager.finish();
        let mosaic = composed?;

        export_mosaic_as_jpeg(&mosaic, &self.cli.output, JPEG_QUALITY)?;
        log::info!(
            "Wrote mosaic to '{}' in {:.2?}",
            self.cli.output.display(),
            start_time.elapsed()
        );

        Ok(())
    }
}
