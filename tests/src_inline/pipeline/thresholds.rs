use super::*;

#[test]
fn test_quantile_sorted_interpolates() {
    let v = [1.0, 2.0, 3.0, 4.0, 5.0];
    assert_eq!(quantile_sorted(&v, 0.0), 1.0);
    assert_eq!(quantile_sorted(&v, 0.25), 2.0);
    assert_eq!(quantile_sorted(&v, 0.5), 3.0);
    assert_eq!(quantile_sorted(&v, 1.0), 5.0);
    assert!((quantile_sorted(&v, 0.1) - 1.4).abs() < 1e-12);
    assert!((quantile_sorted(&[0.0, 10.0], 0.75) - 7.5).abs() < 1e-12);
}

#[test]
fn test_quantile_sorted_degenerate() {
    assert_eq!(quantile_sorted(&[], 0.5), 0.0);
    assert_eq!(quantile_sorted(&[4.2], 0.0), 4.2);
    assert_eq!(quantile_sorted(&[4.2], 1.0), 4.2);
}

#[test]
fn test_compute_thresholds_matches_scenario() {
    let spec = QuantileSpec::new(vec![0.0, 0.5, 1.0]).unwrap();
    let t = compute_thresholds([0.9, 0.1, 0.5], &spec).unwrap();
    assert_eq!(t, vec![0.1, 0.5, 0.9]);
}

#[test]
fn test_thresholds_non_decreasing_with_repeats() {
    let spec = QuantileSpec::default();
    let t = compute_thresholds([1.0, 1.0, 1.0, 2.0], &spec).unwrap();
    assert_eq!(t.len(), 101);
    assert!(t.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(t[0], 1.0);
    assert_eq!(t[100], 2.0);
}

#[test]
fn test_compute_thresholds_rejects_bad_input() {
    let spec = QuantileSpec::default();
    assert_eq!(
        compute_thresholds(std::iter::empty(), &spec),
        Err(ScoreError::EmptyScores)
    );
    assert_eq!(
        compute_thresholds([0.1, 0.2, f64::NAN], &spec),
        Err(ScoreError::NonFiniteScore { index: 2 })
    );
    assert_eq!(
        compute_thresholds([f64::INFINITY], &spec),
        Err(ScoreError::NonFiniteScore { index: 0 })
    );
}

#[test]
fn test_thresholds_finite_across_full_range() {
    let spec = QuantileSpec::default();
    let t = compute_thresholds([1.7e308, -1.7e308], &spec).unwrap();
    assert!(t.iter().all(|v| v.is_finite()));
    assert!(t.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(t[0], -1.7e308);
    assert_eq!(t[50], 0.0);
    assert_eq!(t[100], 1.7e308);
}
