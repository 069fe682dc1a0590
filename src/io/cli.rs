//! Command-line interface and run orchestration

use crate::io::configuration::{DEFAULT_SEED, Settings};
use crate::io::dataset::{load_csv, sample_dataset};
use crate::io::error::{Result, invalid_parameter};
use crate::io::progress::{DebugSink, MiningProgress};
use crate::io::report::{RunStatistics, peak_memory_mb, write_report};
use crate::mining::miner::{JoinlessMiner, ProgressSink};
use crate::spatial::neighbors::find_neighbor_pairs;
use crate::spatial::star::NeighborhoodIndex;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

/// Fallback settings file probed when no path is given
const DEFAULT_SETTINGS_PATH: &str = "config.txt";

#[derive(Parser)]
#[command(name = "joinless")]
#[command(
    version,
    about = "Mine colocation patterns from 2D spatial point data"
)]
/// Command-line arguments for the mining tool
pub struct Cli {
    /// Settings file to load (key=value lines; defaults apply when absent)
    #[arg(value_name = "SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Dataset CSV, overriding the settings file
    #[arg(long)]
    pub dataset: Option<PathBuf>,

    /// Neighbor distance threshold, overriding the settings file
    #[arg(short, long)]
    pub distance: Option<f64>,

    /// Minimum participation index, overriding the settings file
    #[arg(short = 'p', long)]
    pub min_prev: Option<f64>,

    /// Report destination, overriding the settings file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Mine a seeded random fraction of the dataset, in (0, 1]
    #[arg(long)]
    pub sample: Option<f64>,

    /// Random seed for reproducible sampling
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Print per-level diagnostics to stderr instead of a progress bar
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Resolve effective settings from file plus CLI overrides
    pub fn resolve_settings(&self) -> Settings {
        let path = self
            .settings
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_PATH));
        let mut settings = Settings::load(&path);

        if let Some(dataset) = &self.dataset {
            settings.dataset_path.clone_from(dataset);
        }
        if let Some(output) = &self.output {
            settings.output_path.clone_from(output);
        }
        if let Some(distance) = self.distance {
            settings.neighbor_distance = distance;
        }
        if let Some(min_prev) = self.min_prev {
            settings.min_prevalence = min_prev;
        }
        if self.debug {
            settings.debug = true;
        }
        settings
    }
}

/// Orchestrates one complete mining run from CLI arguments
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load, mine, and report
    ///
    /// # Errors
    ///
    /// Returns an error when parameter validation fails, the dataset cannot
    /// be read, or the report cannot be written.
    // Allow print for user feedback on run completion
    #[allow(clippy::print_stderr)]
    pub fn run(&mut self) -> Result<()> {
        let settings = self.cli.resolve_settings();
        settings.validate()?;
        if let Some(fraction) = self.cli.sample {
            if !fraction.is_finite() || fraction <= 0.0 || fraction > 1.0 {
                return Err(invalid_parameter(
                    "sample",
                    &fraction,
                    &"must lie in (0, 1]",
                ));
            }
        }

        let start_time = Instant::now();

        let loaded = load_csv(&settings.dataset_path)?;
        let mut dataset = loaded.dataset;
        if let Some(fraction) = self.cli.sample {
            sample_dataset(&mut dataset, fraction, self.cli.seed);
        }

        let pairs = find_neighbor_pairs(&dataset, settings.neighbor_distance);
        let index = NeighborhoodIndex::from_pairs(&dataset, &pairs);

        let mut bar = None;
        let mut debug_sink = None;
        if settings.debug {
            debug_sink = Some(DebugSink);
        } else if self.cli.should_show_progress() {
            bar = Some(MiningProgress::new());
        }
        let progress: Option<&mut dyn ProgressSink> = match (&mut debug_sink, &mut bar) {
            (Some(sink), _) => Some(sink),
            (None, Some(sink)) => Some(sink),
            (None, None) => None,
        };

        let miner = JoinlessMiner::new(settings.min_prevalence);
        let patterns = miner.mine(&dataset, &index, progress);

        if let Some(bar) = &bar {
            bar.finish();
        }

        let statistics = RunStatistics {
            instances: dataset.len(),
            rejected_records: loaded.rejected,
            features: dataset.feature_len(),
            neighbor_pairs: pairs.len(),
            patterns: patterns.len(),
            elapsed: start_time.elapsed(),
            peak_memory_mb: peak_memory_mb(),
        };
        write_report(&settings.output_path, &dataset, &patterns, &statistics)?;

        if !self.cli.quiet {
            eprintln!(
                "{} prevalent patterns written to {} in {:.3}s",
                patterns.len(),
                settings.output_path.display(),
                statistics.elapsed.as_secs_f64()
            );
        }

        Ok(())
    }
}
