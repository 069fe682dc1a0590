//! Validates settings loading, dataset parsing, sampling, and reporting

use joinless::io::configuration::{DEFAULT_MIN_PREVALENCE, DEFAULT_NEIGHBOR_DISTANCE, Settings};
use joinless::io::dataset::{load_csv, sample_dataset};
use joinless::io::error::MiningError;
use joinless::io::report::{RunStatistics, render_report, write_report};
use joinless::mining::pattern::{Colocation, PrevalentColocation};
use joinless::spatial::instance::Dataset;
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use tempfile::NamedTempFile;

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_settings_default_when_file_missing() {
    let settings = Settings::load(Path::new("/nonexistent/never/config.txt"));
    assert_eq!(settings, Settings::default());
    assert!((settings.neighbor_distance - DEFAULT_NEIGHBOR_DISTANCE).abs() < f64::EPSILON);
    assert!((settings.min_prevalence - DEFAULT_MIN_PREVALENCE).abs() < f64::EPSILON);
}

#[test]
fn test_settings_parse_with_comments_and_fallback() {
    let file = write_temp(
        "# mining configuration\n\
         datasetPath=points.csv\n\
         neighborDistance=2.5\n\
         minPrev=not-a-number\n\
         \n\
         debugMode=1\n\
         unknownKey=ignored\n",
    );
    let settings = Settings::load(file.path());

    assert_eq!(settings.dataset_path, Path::new("points.csv"));
    assert!((settings.neighbor_distance - 2.5).abs() < f64::EPSILON);
    // Malformed value leaves the default in place
    assert!((settings.min_prevalence - DEFAULT_MIN_PREVALENCE).abs() < f64::EPSILON);
    assert!(settings.debug);
}

#[test]
fn test_settings_validation_rejects_out_of_domain_values() {
    let mut settings = Settings::default();
    assert!(settings.validate().is_ok());

    settings.neighbor_distance = -1.0;
    assert!(matches!(
        settings.validate(),
        Err(MiningError::InvalidParameter { .. })
    ));

    settings.neighbor_distance = 1.0;
    settings.min_prevalence = 1.5;
    assert!(settings.validate().is_err());
}

#[test]
fn test_load_csv_parses_records_and_rejects_malformed_ones() {
    let file = write_temp(
        "Feature,Instance,X,Y\n\
         A,1,0.0,0.0\n\
         B,1,1.0,junk\n\
         A,2,0.5,0.5\n\
         \n\
         B,2,2.0,2.0\n",
    );
    let loaded = load_csv(file.path()).unwrap();

    assert_eq!(loaded.dataset.len(), 3);
    assert_eq!(loaded.rejected, 1);

    let ids: Vec<&str> = loaded
        .dataset
        .instances()
        .iter()
        .map(|instance| instance.id.as_str())
        .collect();
    assert_eq!(ids, vec!["A1", "A2", "B2"]);

    // The rejected B record never interned anything on its own
    assert_eq!(loaded.dataset.feature_names(), &["A".to_string(), "B".to_string()]);
}

#[test]
fn test_load_csv_accepts_loc_column_aliases() {
    let file = write_temp(
        "Feature,Instance,LocX,LocY\n\
         A,1,3.0,4.0\n",
    );
    let loaded = load_csv(file.path()).unwrap();
    let instance = loaded.dataset.instance(0).unwrap();
    assert!((instance.x - 3.0).abs() < f64::EPSILON);
    assert!((instance.y - 4.0).abs() < f64::EPSILON);
}

#[test]
fn test_load_csv_requires_all_columns() {
    let file = write_temp("Feature,Instance,X\nA,1,0.0\n");
    assert!(matches!(
        load_csv(file.path()),
        Err(MiningError::DatasetFormat { .. })
    ));
}

#[test]
fn test_load_csv_reports_missing_file() {
    assert!(matches!(
        load_csv(Path::new("/nonexistent/never/points.csv")),
        Err(MiningError::DatasetLoad { .. })
    ));
}

#[test]
fn test_sampling_is_deterministic_per_seed() {
    let mut base = Dataset::new();
    let feature = base.intern_feature("A");
    let other = base.intern_feature("B");
    for index in 0..100 {
        let (id, name) = if index % 2 == 0 {
            (feature, "A")
        } else {
            (other, "B")
        };
        base.push_instance(id, format!("{name}{index}"), index as f64, 0.0);
    }

    let mut first = base.clone();
    let mut second = base.clone();
    sample_dataset(&mut first, 0.5, 7);
    sample_dataset(&mut second, 0.5, 7);

    assert!(first.len() < base.len());
    assert!(!first.is_empty());
    let ids = |dataset: &Dataset| {
        dataset
            .instances()
            .iter()
            .map(|instance| instance.id.clone())
            .collect::<Vec<_>>()
    };
    assert_eq!(ids(&first), ids(&second));

    // Full fraction keeps everything untouched
    let mut full = base.clone();
    sample_dataset(&mut full, 1.0, 7);
    assert_eq!(full.len(), base.len());
}

fn example_report_inputs() -> (Dataset, Vec<PrevalentColocation>, RunStatistics) {
    let mut dataset = Dataset::new();
    let a = dataset.intern_feature("A");
    let b = dataset.intern_feature("B");
    dataset.push_instance(a, "A1".to_string(), 0.0, 0.0);
    dataset.push_instance(b, "B1".to_string(), 0.1, 0.0);

    let patterns = vec![PrevalentColocation {
        colocation: Colocation::new(vec![a, b]),
        participation_index: 0.5,
        clique_count: 2,
    }];
    let statistics = RunStatistics {
        instances: 2,
        rejected_records: 0,
        features: 2,
        neighbor_pairs: 1,
        patterns: 1,
        elapsed: Duration::from_millis(120),
        peak_memory_mb: Some(8.0),
    };
    (dataset, patterns, statistics)
}

#[test]
fn test_report_lists_patterns_with_support() {
    let (dataset, patterns, statistics) = example_report_inputs();
    let report = render_report(&dataset, &patterns, &statistics);

    assert!(report.contains("Joinless colocation mining report"));
    assert!(report.contains("Neighbor pairs:     1"));
    assert!(report.contains("Size 2:"));
    assert!(report.contains("{A, B}"));
    assert!(report.contains("participation index 0.500"));
    assert!(report.contains("2 clique instances"));
    assert!(report.contains("Peak memory:        8.0 MB"));
}

#[test]
fn test_report_mentions_empty_results() {
    let (dataset, _, statistics) = example_report_inputs();
    let report = render_report(&dataset, &[], &statistics);
    assert!(report.contains("No prevalent patterns found."));
}

#[test]
fn test_write_report_creates_parent_directories() {
    let (dataset, patterns, statistics) = example_report_inputs();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("patterns.txt");

    write_report(&path, &dataset, &patterns, &statistics).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("{A, B}"));
}
