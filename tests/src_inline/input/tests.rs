use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use flate2::Compression;
use flate2::write::GzEncoder;
use ndarray::{ArrayD, IxDyn};

use super::*;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("kira_scorefuse_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_gz(path: &Path, contents: &str) {
    let mut enc = GzEncoder::new(File::create(path).unwrap(), Compression::default());
    enc.write_all(contents.as_bytes()).unwrap();
    enc.finish().unwrap();
}

#[test]
fn test_load_nested_json() {
    let dir = make_temp_dir();
    let path = dir.join("scores.json");
    fs::write(&path, "[[1, 2.5, 3], [4, 5, 6]]").unwrap();

    let arr = load_score_array(&path).unwrap();
    assert_eq!(arr.shape(), &[2, 3]);
    assert_eq!(arr[[0, 1]], 2.5);
    assert_eq!(arr[[1, 2]], 6.0);
}

#[test]
fn test_load_shape_data_gz() {
    let dir = make_temp_dir();
    let path = dir.join("scores.json.gz");
    write_gz(&path, r#"{"shape": [2, 1, 2], "data": [0.1, 0.2, 0.3, 0.4]}"#);

    let arr = load_score_array(&path).unwrap();
    assert_eq!(arr.shape(), &[2, 1, 2]);
    assert_eq!(arr[[1, 0, 1]], 0.4);
}

#[test]
fn test_parse_rejects_ragged() {
    let value = serde_json::json!([[1, 2], [3]]);
    let err = parse_score_array(value).unwrap_err();
    assert!(err.to_string().contains("ragged"));
}

#[test]
fn test_parse_rejects_non_numeric() {
    let value = serde_json::json!([1, "two", 3]);
    assert!(matches!(
        parse_score_array(value),
        Err(InputError::InvalidInput(_))
    ));
    assert!(parse_score_array(serde_json::json!("scores")).is_err());
}

#[test]
fn test_shape_data_length_mismatch() {
    let value = serde_json::json!({"shape": [2, 2], "data": [1.0, 2.0, 3.0]});
    let err = parse_score_array(value).unwrap_err();
    assert!(err.to_string().contains("needs 4 values"));
}

#[test]
fn test_write_then_load_preserves_shape() {
    let dir = make_temp_dir();
    let arr = ArrayD::from_shape_fn(IxDyn(&[3, 2]), |ix| ix[0] as f64 + 0.5 * ix[1] as f64);
    for name in ["out.json", "out.json.gz"] {
        let path = dir.join(name);
        write_score_array(&path, &arr).unwrap();
        assert_eq!(load_score_array(&path).unwrap(), arr);
    }
}

#[test]
fn test_missing_file_reports_path() {
    let dir = make_temp_dir();
    let err = load_score_array(&dir.join("absent.json")).unwrap_err();
    assert!(matches!(err, InputError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}
