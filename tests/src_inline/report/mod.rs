use ndarray::array;

use super::*;

#[test]
fn test_summarize_array() {
    let a = array![[0.0, 1.0], [2.0, 3.0], [4.0, 5.0]];
    let s = summarize_array("a", &a);
    assert_eq!(s.shape, vec![3, 2]);
    assert_eq!(s.n, 6);
    assert_eq!(s.min, 0.0);
    assert_eq!(s.max, 5.0);
    assert_eq!(s.median, 2.5);
    assert!((s.p90 - 4.5).abs() < 1e-12);
}

#[test]
fn test_summarize_skips_non_finite() {
    let a = array![f64::NAN, 1.0, 3.0];
    let s = summarize_array("nan", &a);
    assert_eq!(s.n, 3);
    assert_eq!(s.min, 1.0);
    assert_eq!(s.max, 3.0);
    assert_eq!(s.median, 2.0);
}

#[test]
fn test_format_f64_6() {
    assert_eq!(format_f64_6(0.5), "0.500000");
}
