//! Validates neighbor-pair discovery and star neighborhood construction

use joinless::spatial::instance::Dataset;
use joinless::spatial::neighbors::{find_neighbor_pairs, scan_pairs};
use joinless::spatial::star::NeighborhoodIndex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn build_dataset(records: &[(&str, f64, f64)]) -> Dataset {
    let mut dataset = Dataset::new();
    for (index, (feature, x, y)) in records.iter().enumerate() {
        let id = dataset.intern_feature(feature);
        dataset.push_instance(id, format!("{feature}{index}"), *x, *y);
    }
    dataset
}

#[test]
fn test_cross_type_pairs_within_threshold() {
    // A1, A2, B1 cluster near the origin; B2 is isolated
    let dataset = build_dataset(&[
        ("A", 0.0, 0.0),
        ("A", 0.0, 0.5),
        ("B", 0.0, 0.2),
        ("B", 5.0, 5.0),
    ]);

    let pairs = find_neighbor_pairs(&dataset, 1.0);
    assert_eq!(pairs, vec![(0, 2), (1, 2)]);
}

#[test]
fn test_same_feature_type_never_pairs() {
    let dataset = build_dataset(&[("A", 0.0, 0.0), ("A", 0.0, 0.0), ("A", 0.1, 0.1)]);
    assert!(find_neighbor_pairs(&dataset, 10.0).is_empty());
}

#[test]
fn test_zero_threshold_matches_only_coincident_points() {
    let dataset = build_dataset(&[("A", 1.0, 1.0), ("B", 1.0, 1.0), ("C", 2.0, 2.0)]);
    assert_eq!(find_neighbor_pairs(&dataset, 0.0), vec![(0, 1)]);
}

#[test]
fn test_boundary_distance_is_inclusive() {
    let dataset = build_dataset(&[("A", 0.0, 0.0), ("B", 3.0, 4.0)]);
    assert_eq!(find_neighbor_pairs(&dataset, 5.0), vec![(0, 1)]);
    assert!(find_neighbor_pairs(&dataset, 4.999).is_empty());
}

#[test]
fn test_grid_and_scan_paths_agree() {
    let features = ["A", "B", "C"];
    let mut rng = StdRng::seed_from_u64(99);
    let mut dataset = Dataset::new();
    // Enough instances to take the grid path
    for index in 0..400 {
        let feature = features.get(index % features.len()).copied().unwrap_or("A");
        let id = dataset.intern_feature(feature);
        let x = rng.random::<f64>() * 100.0;
        let y = rng.random::<f64>() * 100.0;
        dataset.push_instance(id, format!("{feature}{index}"), x, y);
    }

    let from_grid = find_neighbor_pairs(&dataset, 5.0);
    let from_scan = scan_pairs(dataset.instances(), 5.0);
    assert!(!from_grid.is_empty());
    assert_eq!(from_grid, from_scan);
}

#[test]
fn test_output_is_deterministic_for_fixed_input() {
    let dataset = build_dataset(&[
        ("A", 0.0, 0.0),
        ("B", 0.3, 0.1),
        ("C", 0.2, 0.4),
        ("A", 0.5, 0.5),
    ]);
    let first = find_neighbor_pairs(&dataset, 1.0);
    let second = find_neighbor_pairs(&dataset, 1.0);
    assert_eq!(first, second);
}

#[test]
fn test_star_neighborhoods_record_both_orientations() {
    let dataset = build_dataset(&[
        ("A", 0.0, 0.0),
        ("A", 0.0, 0.5),
        ("B", 0.0, 0.2),
        ("B", 5.0, 5.0),
    ]);
    let pairs = find_neighbor_pairs(&dataset, 1.0);
    let index = NeighborhoodIndex::from_pairs(&dataset, &pairs);

    // Two stars centered on A instances, one on B1, none on isolated B2
    assert_eq!(index.star_count(), 3);

    let a_stars = index.stars_for(0);
    assert_eq!(a_stars.len(), 2);
    for star in a_stars {
        assert_eq!(star.neighbors, vec![2]);
    }

    let b_stars = index.stars_for(1);
    assert_eq!(b_stars.len(), 1);
    let b_star = b_stars.first().unwrap();
    assert_eq!(b_star.center, 2);
    assert_eq!(b_star.neighbors, vec![0, 1]);
}

#[test]
fn test_duplicate_pairs_collapse_in_index() {
    let dataset = build_dataset(&[("A", 0.0, 0.0), ("B", 0.1, 0.0)]);
    let index = NeighborhoodIndex::from_pairs(&dataset, &[(0, 1), (0, 1)]);

    let a_star = index.stars_for(0).first().unwrap();
    assert_eq!(a_star.neighbors, vec![1]);
    let b_star = index.stars_for(1).first().unwrap();
    assert_eq!(b_star.neighbors, vec![0]);
}

#[test]
fn test_empty_dataset_has_no_pairs_or_stars() {
    let dataset = Dataset::new();
    let pairs = find_neighbor_pairs(&dataset, 1.0);
    assert!(pairs.is_empty());

    let index = NeighborhoodIndex::from_pairs(&dataset, &pairs);
    assert!(index.is_empty());
    assert_eq!(index.star_count(), 0);
}
