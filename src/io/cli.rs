//! Command-line interface for batch texture variation generation

use crate::io::configuration::{
    DEFAULT_BLEND_ALPHA, DEFAULT_OUTPUT_DIR, DEFAULT_SEED, DEFAULT_VARIATION_COUNT,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{export_variation, load_texture, variation_filename};
use crate::io::progress::ProgressManager;
use crate::variation::generator::VariationGenerator;
use crate::variation::pool::TexturePool;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "variatex")]
#[command(
    author,
    version,
    about = "Generate procedurally varied copies of base textures"
)]
/// Command-line arguments for the variation generation tool
pub struct Cli {
    /// Input PNG file or directory of base textures
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Output directory (defaults to `variations` beside the input)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of variations generated per base texture
    #[arg(short, long, default_value_t = DEFAULT_VARIATION_COUNT)]
    pub count: u32,

    /// Weight of the working image when a variation blends with a peer
    #[arg(short, long, default_value_t = DEFAULT_BLEND_ALPHA)]
    pub alpha: f64,

    /// Random seed for peer selection and noise
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Regenerate textures even if their variation set exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if textures with a complete variation set should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates batch generation over a pool of base textures
pub struct BatchProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl BatchProcessor {
    /// Create a new batch processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Load the texture pool and generate every requested variation
    ///
    /// Load and write failures are reported per occurrence and skipped; the
    /// batch degrades gracefully rather than aborting.
    ///
    /// # Errors
    ///
    /// Returns an error if the target is neither a PNG file nor a
    /// directory, or if the blend alpha fails validation.
    // Allow print for per-occurrence failure reports and the run summary
    #[allow(clippy::print_stderr)]
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;
        let pool = load_pool(&files);

        if pool.is_empty() {
            if !self.cli.quiet {
                eprintln!("No base textures loaded from: {}", self.cli.target.display());
            }
            return Ok(());
        }

        let output_dir = self.output_dir();
        let mut generator = VariationGenerator::new(self.cli.alpha, self.cli.seed)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(pool.len());
        }

        let mut generated = 0usize;
        for (texture_index, base) in pool.textures().iter().enumerate() {
            // Skipped bases stay in the pool so peer selection still sees them
            if self.cli.skip_existing() && self.variation_set_complete(&base.name, &output_dir) {
                if !self.cli.quiet {
                    eprintln!("Skipping: {} (variation set exists)", base.name);
                }
                continue;
            }

            if let Some(ref mut pm) = self.progress_manager {
                pm.start_texture(texture_index, &base.name, self.cli.count);
            }

            for index in 0..self.cli.count {
                if let Some(ref mut pm) = self.progress_manager {
                    pm.update_variation(texture_index, index);
                }

                let variation = match generator.render_variation(&base.image, &pool, index) {
                    Ok(variation) => variation,
                    Err(e) => {
                        eprintln!("Skipping variation {index} of '{}': {e}", base.name);
                        continue;
                    }
                };

                if let Err(e) = export_variation(&variation, &output_dir, &base.name, index) {
                    eprintln!("{e}");
                    continue;
                }
                generated += 1;
            }

            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_texture(texture_index);
            }
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        if !self.cli.quiet {
            eprintln!("Generated {generated} textures successfully");
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if self.cli.target.extension().and_then(|s| s.to_str()) == Some("png") {
                Ok(vec![self.cli.target.clone()])
            } else {
                Err(invalid_parameter(
                    "target",
                    &self.cli.target.display(),
                    &"must be a PNG image",
                ))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if path.extension().and_then(|s| s.to_str()) == Some("png") {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &self.cli.target.display(),
                &"must be a PNG file or directory",
            ))
        }
    }

    fn output_dir(&self) -> PathBuf {
        if let Some(ref output) = self.cli.output {
            return output.clone();
        }

        if self.cli.target.is_dir() {
            self.cli.target.join(DEFAULT_OUTPUT_DIR)
        } else {
            self.cli.target.parent().map_or_else(
                || PathBuf::from(DEFAULT_OUTPUT_DIR),
                |parent| parent.join(DEFAULT_OUTPUT_DIR),
            )
        }
    }

    fn variation_set_complete(&self, texture_name: &str, output_dir: &Path) -> bool {
        (0..self.cli.count)
            .all(|index| output_dir.join(variation_filename(texture_name, index)).exists())
    }
}

// Load failures exclude that texture from the pool but never abort the batch
#[allow(clippy::print_stderr)]
fn load_pool(files: &[PathBuf]) -> TexturePool {
    let mut textures = Vec::with_capacity(files.len());
    for file in files {
        match load_texture(file) {
            Ok(texture) => textures.push(texture),
            Err(e) => eprintln!("{e} (skipping)"),
        }
    }
    TexturePool::new(textures)
}
