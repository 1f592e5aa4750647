//! Command-line interface for assembling a tile set and scanning for a motif

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;

use crate::algorithm::assembly::GridSolver;
use crate::algorithm::motif::{self, Motif};
use crate::algorithm::pipeline;
use crate::algorithm::stitch::stitch;
use crate::io::error::{Result, SolveError};
use crate::io::parser::parse_tiles;
use crate::io::progress::AssemblyProgress;
use crate::io::render::export_png;

/// Command-line arguments for the solver
#[derive(Parser)]
#[command(name = "tilestitch")]
#[command(
    author,
    version,
    about = "Assemble jigsaw bitmap tiles and scan the stitched image for a motif"
)]
pub struct Cli {
    /// Input text file containing tile blocks
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Motif description file ('#' marks required cells); defaults to the
    /// built-in sea monster
    #[arg(short, long)]
    pub motif: Option<PathBuf>,

    /// Export the oriented stitched image as a PNG with motif cells
    /// highlighted
    #[arg(short, long)]
    pub render: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Runs one complete solve from CLI arguments
pub struct SolveRunner {
    cli: Cli,
}

impl SolveRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Read the input, assemble, scan, print both results, and optionally
    /// render the stitched image
    ///
    /// # Errors
    ///
    /// Returns an error if the input or motif file cannot be read, the tile
    /// set fails to parse or assemble, the motif is absent from every image
    /// orientation, or the render export fails.
    pub fn run(&self) -> Result<()> {
        let start = Instant::now();
        let input =
            std::fs::read_to_string(&self.cli.input).map_err(|err| SolveError::InputRead {
                path: self.cli.input.clone(),
                source: err,
            })?;
        let pattern = self.load_motif()?;

        let tiles = parse_tiles(&input)?;
        let solver = GridSolver::new(tiles)?;
        let progress = self
            .cli
            .should_show_progress()
            .then(|| AssemblyProgress::new(solver.size() * solver.size()));
        let grid = solver.solve_with_progress(|filled, _total| {
            if let Some(bar) = &progress {
                bar.placed(filled);
            }
        })?;
        if let Some(bar) = &progress {
            bar.finish();
        }

        let product = pipeline::corner_product(&grid)?;
        let image = stitch(&grid)?;
        let (oriented, anchors) = motif::scan(&image, &pattern)?;
        let coverage = pipeline::coverage_mask(oriented.dim(), &pattern, &anchors);
        let roughness = pipeline::roughness(&oriented, &coverage);

        Self::report(product, roughness, anchors.len(), start.elapsed());

        if let Some(path) = &self.cli.render {
            export_png(&oriented, Some(&coverage), path)?;
        }

        Ok(())
    }

    fn load_motif(&self) -> Result<Motif> {
        match &self.cli.motif {
            Some(path) => {
                let text =
                    std::fs::read_to_string(path).map_err(|err| SolveError::InputRead {
                        path: path.clone(),
                        source: err,
                    })?;
                Motif::parse(&text)
            }
            None => Ok(Motif::sea_monster()),
        }
    }

    // Allow print for the user-facing results
    #[allow(clippy::print_stdout)]
    fn report(product: u64, roughness: usize, instances: usize, elapsed: Duration) {
        println!("corner product: {product}");
        println!("roughness: {roughness} ({instances} motif instances, {elapsed:.2?})");
    }
}
