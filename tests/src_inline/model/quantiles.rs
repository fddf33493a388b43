use super::*;

#[test]
fn test_default_is_percentile_grid() {
    let spec = QuantileSpec::default();
    assert_eq!(spec.len(), 101);
    assert_eq!(spec.levels()[0], 0.0);
    assert_eq!(spec.last(), 1.0);
    assert_eq!(spec.levels()[7], 0.07);
    assert_eq!(spec.levels()[50], 0.5);
    assert!(spec.contains(0.99));
    assert!(!spec.contains(0.995));
}

#[test]
fn test_new_accepts_increasing_levels() {
    let spec = QuantileSpec::new(vec![0.0, 0.25, 0.9]).unwrap();
    assert_eq!(spec.levels(), &[0.0, 0.25, 0.9]);
    assert_eq!(spec.last(), 0.9);
}

#[test]
fn test_new_rejects_empty() {
    assert_eq!(QuantileSpec::new(vec![]), Err(ScoreError::EmptyQuantiles));
}

#[test]
fn test_new_rejects_out_of_range() {
    assert_eq!(
        QuantileSpec::new(vec![0.0, 1.5]),
        Err(ScoreError::QuantileOutOfRange {
            index: 1,
            value: 1.5
        })
    );
    assert!(matches!(
        QuantileSpec::new(vec![f64::NAN]),
        Err(ScoreError::QuantileOutOfRange { index: 0, .. })
    ));
}

#[test]
fn test_new_rejects_non_increasing() {
    assert_eq!(
        QuantileSpec::new(vec![0.0, 0.5, 0.5, 1.0]),
        Err(ScoreError::QuantilesNotIncreasing {
            index: 2,
            prev: 0.5,
            next: 0.5
        })
    );
    assert!(QuantileSpec::new(vec![0.6, 0.2]).is_err());
}

#[test]
fn test_evenly_spaced() {
    let spec = QuantileSpec::evenly_spaced(3).unwrap();
    assert_eq!(spec.levels(), &[0.0, 0.5, 1.0]);
    assert_eq!(QuantileSpec::evenly_spaced(101).unwrap(), QuantileSpec::percentiles());
    assert!(matches!(
        QuantileSpec::evenly_spaced(1),
        Err(ScoreError::InvalidGrid(_))
    ));
}
