use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use ndarray::{ArrayD, IxDyn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use crate::error::InputError;

/// On-disk form of a score array: row-major `data` with an explicit `shape`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreArrayFile {
    pub shape: Vec<usize>,
    pub data: Vec<f64>,
}

impl ScoreArrayFile {
    pub fn into_array(self) -> Result<ArrayD<f64>, InputError> {
        let expected = self.shape.iter().product::<usize>();
        if expected != self.data.len() {
            return Err(InputError::InvalidInput(format!(
                "shape {:?} needs {} values, found {}",
                self.shape,
                expected,
                self.data.len()
            )));
        }
        ArrayD::from_shape_vec(IxDyn(&self.shape), self.data)
            .map_err(|e| InputError::InvalidInput(e.to_string()))
    }

    pub fn from_array(array: &ArrayD<f64>) -> Self {
        Self {
            shape: array.shape().to_vec(),
            data: array.iter().copied().collect(),
        }
    }
}

fn is_gz(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, InputError> {
    let file =
        File::open(path).map_err(|e| InputError::io(format!("opening {}", path.display()), e))?;
    if is_gz(path) {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

pub fn load_score_array(path: &Path) -> Result<ArrayD<f64>, InputError> {
    let reader = open_maybe_gz(path)?;
    let value: Value = serde_json::from_reader(reader)
        .map_err(|e| InputError::json(format!("reading {}", path.display()), e))?;
    let array = parse_score_array(value)?;
    tracing::debug!(path = %path.display(), shape = ?array.shape(), "loaded score array");
    Ok(array)
}

/// Accepts either `{"shape": [...], "data": [...]}` or a rectangular nested array.
pub fn parse_score_array(value: Value) -> Result<ArrayD<f64>, InputError> {
    match value {
        Value::Object(_) => {
            let file: ScoreArrayFile =
                serde_json::from_value(value).map_err(|e| InputError::json("parsing shape/data", e))?;
            file.into_array()
        }
        Value::Array(_) => {
            let shape = nested_shape(&value);
            let mut data = Vec::with_capacity(shape.iter().product());
            flatten_nested(&value, &shape, 0, &mut data)?;
            ArrayD::from_shape_vec(IxDyn(&shape), data)
                .map_err(|e| InputError::InvalidInput(e.to_string()))
        }
        Value::Number(n) => {
            let v = n
                .as_f64()
                .ok_or_else(|| InputError::InvalidInput(format!("unrepresentable number {n}")))?;
            Ok(ArrayD::from_elem(IxDyn(&[]), v))
        }
        other => Err(InputError::InvalidInput(format!(
            "expected a score array, found {}",
            json_kind(&other)
        ))),
    }
}

fn nested_shape(value: &Value) -> Vec<usize> {
    let mut shape = Vec::new();
    let mut cursor = value;
    while let Value::Array(items) = cursor {
        shape.push(items.len());
        match items.first() {
            Some(first) => cursor = first,
            None => break,
        }
    }
    shape
}

fn flatten_nested(
    value: &Value,
    shape: &[usize],
    depth: usize,
    out: &mut Vec<f64>,
) -> Result<(), InputError> {
    if depth == shape.len() {
        return match value {
            Value::Number(n) => {
                out.push(n.as_f64().ok_or_else(|| {
                    InputError::InvalidInput(format!("unrepresentable number {n}"))
                })?);
                Ok(())
            }
            other => Err(InputError::InvalidInput(format!(
                "expected a number at depth {depth}, found {}",
                json_kind(other)
            ))),
        };
    }
    match value {
        Value::Array(items) if items.len() == shape[depth] => {
            for item in items {
                flatten_nested(item, shape, depth + 1, out)?;
            }
            Ok(())
        }
        Value::Array(items) => Err(InputError::InvalidInput(format!(
            "ragged array: expected {} items at depth {depth}, found {}",
            shape[depth],
            items.len()
        ))),
        other => Err(InputError::InvalidInput(format!(
            "expected an array at depth {depth}, found {}",
            json_kind(other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

pub fn write_score_array(path: &Path, array: &ArrayD<f64>) -> Result<(), InputError> {
    let file = File::create(path)
        .map_err(|e| InputError::io(format!("creating {}", path.display()), e))?;
    let payload = ScoreArrayFile::from_array(array);
    let context = format!("writing {}", path.display());
    if is_gz(path) {
        let mut enc = GzEncoder::new(BufWriter::new(file), Compression::default());
        serde_json::to_writer(&mut enc, &payload).map_err(|e| InputError::json(&context, e))?;
        enc.finish()
            .and_then(|mut w| w.flush())
            .map_err(|e| InputError::io(&context, e))?;
    } else {
        let mut w = BufWriter::new(file);
        serde_json::to_writer(&mut w, &payload).map_err(|e| InputError::json(&context, e))?;
        w.flush().map_err(|e| InputError::io(&context, e))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
