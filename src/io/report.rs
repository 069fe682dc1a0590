//! Results report rendering and run statistics

use crate::io::error::{MiningError, Result};
use crate::mining::pattern::PrevalentColocation;
use crate::spatial::instance::Dataset;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Counters and timings collected across one mining run
#[derive(Debug, Clone)]
pub struct RunStatistics {
    /// Instances loaded into the dataset
    pub instances: usize,
    /// Records rejected by the loader
    pub rejected_records: usize,
    /// Distinct feature types
    pub features: usize,
    /// Neighbor pairs found under the threshold
    pub neighbor_pairs: usize,
    /// Prevalent patterns mined
    pub patterns: usize,
    /// Wall time of the whole run
    pub elapsed: Duration,
    /// Peak resident memory in megabytes, where the platform exposes it
    pub peak_memory_mb: Option<f64>,
}

/// Peak resident set size of this process in megabytes
///
/// Read from `/proc/self/status` (`VmHWM`); returns `None` on platforms
/// without it or when the field is absent.
pub fn peak_memory_mb() -> Option<f64> {
    let status = fs::read_to_string("/proc/self/status").ok()?;
    let line = status.lines().find(|line| line.starts_with("VmHWM:"))?;
    let kilobytes: f64 = line
        .split_whitespace()
        .nth(1)?
        .parse()
        .ok()?;
    Some(kilobytes / 1024.0)
}

/// Render the report as human-readable text
///
/// Patterns appear grouped by size in mining order with their participation
/// index and clique-instance count, preceded by the run statistics block.
pub fn render_report(
    dataset: &Dataset,
    patterns: &[PrevalentColocation],
    statistics: &RunStatistics,
) -> String {
    let mut out = String::new();
    out.push_str("Joinless colocation mining report\n");
    out.push_str("=================================\n\n");

    out.push_str(&format!(
        "Instances loaded:   {} ({} rejected)\n",
        statistics.instances, statistics.rejected_records
    ));
    out.push_str(&format!("Feature types:      {}\n", statistics.features));
    out.push_str(&format!("Neighbor pairs:     {}\n", statistics.neighbor_pairs));
    out.push_str(&format!("Prevalent patterns: {}\n", statistics.patterns));
    out.push_str(&format!(
        "Elapsed:            {:.3}s\n",
        statistics.elapsed.as_secs_f64()
    ));
    if let Some(peak) = statistics.peak_memory_mb {
        out.push_str(&format!("Peak memory:        {peak:.1} MB\n"));
    }

    let mut current_size = 0;
    for pattern in patterns {
        let size = pattern.colocation.size();
        if size != current_size {
            out.push_str(&format!("\nSize {size}:\n"));
            current_size = size;
        }
        out.push_str(&format!(
            "  {}  participation index {:.3}, {} clique instances\n",
            pattern.colocation.label(dataset.feature_names()),
            pattern.participation_index,
            pattern.clique_count
        ));
    }
    if patterns.is_empty() {
        out.push_str("\nNo prevalent patterns found.\n");
    }

    out
}

/// Write the rendered report to disk, creating parent directories
///
/// # Errors
///
/// Returns an error when a directory or the report file cannot be written.
pub fn write_report(
    path: &Path,
    dataset: &Dataset,
    patterns: &[PrevalentColocation],
    statistics: &RunStatistics,
) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| MiningError::ReportExport {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }
    fs::write(path, render_report(dataset, patterns, statistics)).map_err(|source| {
        MiningError::ReportExport {
            path: path.to_path_buf(),
            source,
        }
    })
}
