//! CSV dataset loading and optional seeded sampling
//!
//! Expected layout: a header row naming `Feature`, `Instance`, `X`, `Y`
//! columns (in any order; `LocX`/`LocY` are accepted aliases), then one
//! record per instance. Instance identifiers are the feature name joined
//! with the sequence value, but the feature type itself is always taken
//! from the `Feature` column, never recovered from the identifier.

use crate::io::error::{MiningError, Result, dataset_format};
use crate::spatial::instance::Dataset;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs;
use std::path::Path;

/// A loaded dataset together with its rejected-record count
#[derive(Debug)]
pub struct LoadedDataset {
    /// The surviving, well-formed instances
    pub dataset: Dataset,
    /// Records dropped for missing or unparseable fields
    pub rejected: usize,
}

struct Columns {
    feature: usize,
    instance: usize,
    x: usize,
    y: usize,
}

/// Load spatial instances from a CSV file
///
/// Malformed records are rejected and counted, never loaded; the mining
/// core only ever sees well-formed instances.
///
/// # Errors
///
/// Returns an error when the file cannot be read, is empty, or its header
/// lacks a required column.
pub fn load_csv(path: &Path) -> Result<LoadedDataset> {
    let content = fs::read_to_string(path).map_err(|source| MiningError::DatasetLoad {
        path: path.to_path_buf(),
        source,
    })?;

    let mut lines = content.lines();
    let header = lines
        .next()
        .ok_or_else(|| dataset_format(path, &"file is empty"))?;
    let columns = parse_header(path, header)?;

    let mut dataset = Dataset::new();
    let mut rejected = 0;
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        match parse_record(&fields, &columns) {
            Some((feature_name, sequence, x, y)) => {
                let feature = dataset.intern_feature(feature_name);
                let id = format!("{feature_name}{sequence}");
                dataset.push_instance(feature, id, x, y);
            }
            None => rejected += 1,
        }
    }

    Ok(LoadedDataset { dataset, rejected })
}

fn parse_header(path: &Path, header: &str) -> Result<Columns> {
    let names: Vec<&str> = header.split(',').map(str::trim).collect();
    let find = |wanted: &[&str]| {
        names
            .iter()
            .position(|name| wanted.iter().any(|w| name.eq_ignore_ascii_case(w)))
    };

    let feature = find(&["Feature"])
        .ok_or_else(|| dataset_format(path, &"header is missing a 'Feature' column"))?;
    let instance = find(&["Instance", "InstanceID"])
        .ok_or_else(|| dataset_format(path, &"header is missing an 'Instance' column"))?;
    let x = find(&["X", "LocX"])
        .ok_or_else(|| dataset_format(path, &"header is missing an 'X' column"))?;
    let y = find(&["Y", "LocY"])
        .ok_or_else(|| dataset_format(path, &"header is missing a 'Y' column"))?;

    Ok(Columns {
        feature,
        instance,
        x,
        y,
    })
}

fn parse_record<'a>(fields: &[&'a str], columns: &Columns) -> Option<(&'a str, &'a str, f64, f64)> {
    let feature = fields.get(columns.feature).copied().filter(|f| !f.is_empty())?;
    let sequence = fields
        .get(columns.instance)
        .copied()
        .filter(|s| !s.is_empty())?;
    let x = fields.get(columns.x)?.parse().ok()?;
    let y = fields.get(columns.y)?.parse().ok()?;
    Some((feature, sequence, x, y))
}

/// Keep a seeded random fraction of the dataset's instances
///
/// Each instance survives independently with probability `fraction`; equal
/// seeds produce equal subsamples on equal inputs. A fraction of 1.0 or
/// more keeps everything.
pub fn sample_dataset(dataset: &mut Dataset, fraction: f64, seed: u64) {
    if fraction >= 1.0 {
        return;
    }
    let mut rng = StdRng::seed_from_u64(seed);
    dataset.retain_instances(|_| rng.random::<f64>() < fraction);
}
