//! Runtime settings, defaults, and the key/value settings file

use crate::io::error::{Result, invalid_parameter};
use std::fs;
use std::path::{Path, PathBuf};

// Algorithm defaults, used when the settings file or a key is absent
/// Default dataset location
pub const DEFAULT_DATASET_PATH: &str = "data/sample_joinless.csv";
/// Default report location
pub const DEFAULT_OUTPUT_PATH: &str = "output/patterns.txt";
/// Default neighbor distance threshold
pub const DEFAULT_NEIGHBOR_DISTANCE: f64 = 10.0;
/// Default minimum participation index
pub const DEFAULT_MIN_PREVALENCE: f64 = 0.3;
/// Default minimum conditional probability, reserved for rule generation
pub const DEFAULT_MIN_COND_PROB: f64 = 0.5;

// Neighbor search tuning
/// Instance count below which the pairwise scan is always used
pub const GRID_MIN_INSTANCES: usize = 256;
/// Maximum bucket-grid cells along either axis
pub const MAX_GRID_DIMENSION: usize = 1024;

// Sampling defaults
/// Fixed seed for reproducible dataset sampling
pub const DEFAULT_SEED: u64 = 42;

/// Runtime settings merged from defaults, the settings file, and the CLI
///
/// Settings-file keys keep the original `camelCase` spelling
/// (`datasetPath`, `neighborDistance`, `minPrev`, `minCondProb`,
/// `debugMode`, `outputPath`) so existing configuration files keep working.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Dataset CSV location
    pub dataset_path: PathBuf,
    /// Report destination
    pub output_path: PathBuf,
    /// Neighbor distance threshold
    pub neighbor_distance: f64,
    /// Minimum participation index for a pattern to survive
    pub min_prevalence: f64,
    /// Minimum conditional probability, parsed for file compatibility but
    /// unused until rule generation exists
    pub min_cond_prob: f64,
    /// Emit verbose per-level diagnostics
    pub debug: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            neighbor_distance: DEFAULT_NEIGHBOR_DISTANCE,
            min_prevalence: DEFAULT_MIN_PREVALENCE,
            min_cond_prob: DEFAULT_MIN_COND_PROB,
            debug: false,
        }
    }
}

impl Settings {
    /// Load settings from a key/value file, falling back to defaults
    ///
    /// A missing or unreadable file yields the defaults unchanged. Within a
    /// readable file, `#` comments and blank lines are skipped and a
    /// malformed value leaves that key at its default; the file never causes
    /// an error.
    pub fn load(path: &Path) -> Self {
        let mut settings = Self::default();
        let Ok(content) = fs::read_to_string(path) else {
            return settings;
        };

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            settings.apply(key.trim(), value.trim());
        }
        settings
    }

    fn apply(&mut self, key: &str, value: &str) {
        match key {
            "datasetPath" if !value.is_empty() => self.dataset_path = PathBuf::from(value),
            "outputPath" if !value.is_empty() => self.output_path = PathBuf::from(value),
            "neighborDistance" => {
                if let Ok(parsed) = value.parse() {
                    self.neighbor_distance = parsed;
                }
            }
            "minPrev" => {
                if let Ok(parsed) = value.parse() {
                    self.min_prevalence = parsed;
                }
            }
            "minCondProb" => {
                if let Ok(parsed) = value.parse() {
                    self.min_cond_prob = parsed;
                }
            }
            "debugMode" => {
                self.debug = value == "true" || value == "1";
            }
            _ => {}
        }
    }

    /// Check the mining core's documented preconditions
    ///
    /// # Errors
    ///
    /// Returns an error when the neighbor distance is negative or non-finite,
    /// or when a probability threshold falls outside [0, 1].
    pub fn validate(&self) -> Result<()> {
        if !self.neighbor_distance.is_finite() || self.neighbor_distance < 0.0 {
            return Err(invalid_parameter(
                "neighborDistance",
                &self.neighbor_distance,
                &"must be a non-negative finite number",
            ));
        }
        if !(0.0..=1.0).contains(&self.min_prevalence) {
            return Err(invalid_parameter(
                "minPrev",
                &self.min_prevalence,
                &"must lie in [0, 1]",
            ));
        }
        if !(0.0..=1.0).contains(&self.min_cond_prob) {
            return Err(invalid_parameter(
                "minCondProb",
                &self.min_cond_prob,
                &"must lie in [0, 1]",
            ));
        }
        Ok(())
    }
}
