mod common;

use common::synthetic_graph::segments;
use street_orientation::angle::reciprocal_bearing;
use street_orientation::histogram::count_and_merge;
use street_orientation::{extract_bearings, CircularHistogram};

#[test]
fn straddling_north_lands_in_one_sector() {
    let hist = CircularHistogram::build(&[359.9, 0.1], 36).expect("hist");
    let occupied: Vec<usize> = hist
        .bins()
        .iter()
        .filter(|b| b.count > 0)
        .map(|b| b.index)
        .collect();
    assert_eq!(occupied, vec![0]);
}

#[test]
fn straddling_east_lands_in_one_sector() {
    let hist = CircularHistogram::build(&[89.9, 90.1], 36).expect("hist");
    assert_eq!(hist.bins()[9].count, 2);
}

#[test]
fn frequencies_sum_to_one_for_any_bin_count() {
    let samples: Vec<f64> = (0..720).map(|i| (i as f64 * 13.7).rem_euclid(360.0)).collect();
    for n_bins in [1usize, 2, 4, 8, 12, 36, 72, 180] {
        let hist = CircularHistogram::build(&samples, n_bins).expect("hist");
        let sum: f64 = hist.frequencies().iter().sum();
        assert!((sum - 1.0).abs() < 1e-9, "n_bins={n_bins} sum={sum}");
        assert_eq!(hist.counts().iter().sum::<u64>(), samples.len() as u64);
    }
}

#[test]
fn reciprocal_samples_make_histogram_point_symmetric() {
    let graph = segments(&[(12.0, 1.0), (77.0, 1.0), (133.0, 1.0), (301.0, 1.0)]);
    let bearings = extract_bearings(&graph, false).expect("extract");
    let hist = CircularHistogram::build(&bearings.samples, 36).expect("hist");
    let counts = hist.counts();
    for i in 0..18 {
        assert_eq!(counts[i], counts[i + 18], "sector {i} vs opposite");
    }
}

#[test]
fn weighting_multiplicity_per_single_edge() {
    for (bearing, length) in [(0.0f64, 1.0f64), (33.3, 7.9), (270.0, 42.0), (181.0, 0.3)] {
        let graph = segments(&[(bearing, length)]);
        let expected = length.floor() as usize;
        let weighted = extract_bearings(&graph, true).expect("extract");
        let back = reciprocal_bearing(bearing);
        let count = |v: f64| weighted.samples.iter().filter(|&&s| s == v).count();
        assert_eq!(count(bearing), expected, "bearing={bearing}");
        assert_eq!(count(back), expected, "reciprocal of {bearing}");
        assert_eq!(weighted.len(), 2 * expected);

        let unweighted = extract_bearings(&graph, false).expect("extract");
        assert_eq!(unweighted.samples, vec![bearing, back]);
    }
}

#[test]
fn merge_matches_rotated_double_resolution() {
    // Hand-rolled reference: 2n sub-bins, roll right by one, sum pairs.
    let samples = [0.0, 2.4, 2.5, 7.49, 7.5, 352.5, 355.0, 357.4, 359.999, 180.0];
    let n = 72usize;
    let mut sub = vec![0u64; 2 * n];
    for &s in &samples {
        let k = (0..2 * n)
            .rev()
            .find(|&k| s >= k as f64 * 360.0 / (2 * n) as f64)
            .expect("sample in range");
        sub[k] += 1;
    }
    sub.rotate_right(1);
    let expected: Vec<u64> = sub.chunks(2).map(|p| p[0] + p[1]).collect();
    assert_eq!(count_and_merge(&samples, n).expect("merge"), expected);
}
