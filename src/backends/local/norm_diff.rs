use crate::backends::local::series::{read_series, series_value};
use crate::errors::TaskError;
use crate::pipeline::TaskSpec;
use crate::store::{Namespace, Pipe};

/// Normalized difference `(a - b) / (a + b)` of two equally long series.
///
/// Requires two data keys, produces one. Where `a + b` is zero the result is
/// `null`.
pub fn norm_diff(pipe: &Pipe, spec: &TaskSpec<'_>) -> Result<Pipe, TaskError> {
    let a_key = spec.required_key(Namespace::Data, 0, 2)?;
    let b_key = spec.required_key(Namespace::Data, 1, 2)?;
    let out_key = spec.output_key(Namespace::Data, 0, 1)?;

    let a = read_series(pipe, a_key)?;
    let b = read_series(pipe, b_key)?;
    if a.len() != b.len() {
        return Err(TaskError::InvalidValue {
            key: b_key.to_string(),
            reason: format!("length {} does not match '{}' length {}", b.len(), a_key, a.len()),
        });
    }

    let result: Vec<f64> = a
        .iter()
        .zip(&b)
        .map(|(a, b)| {
            let sum = a + b;
            if sum == 0.0 {
                f64::NAN
            } else {
                (a - b) / sum
            }
        })
        .collect();

    let mut out = Pipe::new();
    out.insert(Namespace::Data, out_key, series_value(&result));
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KeySpec;
    use serde_json::json;
    use std::collections::HashMap;

    fn run(pipe: &Pipe, require: &[&str]) -> Result<Pipe, TaskError> {
        let requires = KeySpec::new(require.iter().map(|s| s.to_string()).collect(), vec![]);
        let outputs = KeySpec::new(vec!["ndvi".into()], vec![]);
        let parameters = HashMap::new();
        let spec = TaskSpec {
            task_id: "ndvi",
            requires: &requires,
            outputs: &outputs,
            parameters: &parameters,
        };
        norm_diff(pipe, &spec)
    }

    #[test]
    fn computes_normalized_difference() {
        let mut pipe = Pipe::new();
        pipe.insert(Namespace::Data, "nir", json!([0.5, 0.3, 0.0]));
        pipe.insert(Namespace::Data, "red", json!([0.1, 0.3, 0.0]));

        let out = run(&pipe, &["nir", "red"]).unwrap();
        let ndvi = out.get(Namespace::Data, "ndvi").unwrap().as_array().unwrap();

        assert!((ndvi[0].as_f64().unwrap() - 0.4 / 0.6).abs() < 1e-12);
        assert_eq!(ndvi[1], json!(0.0));
        assert_eq!(ndvi[2], json!(null));
    }

    #[test]
    fn needs_two_inputs() {
        let mut pipe = Pipe::new();
        pipe.insert(Namespace::Data, "nir", json!([0.5]));

        let err = run(&pipe, &["nir"]).unwrap_err();
        assert_eq!(
            err,
            TaskError::SpecMismatch {
                namespace: Namespace::Data,
                expected: 2,
                declared: 1
            }
        );
    }

    #[test]
    fn rejects_length_mismatch() {
        let mut pipe = Pipe::new();
        pipe.insert(Namespace::Data, "nir", json!([0.5, 0.4]));
        pipe.insert(Namespace::Data, "red", json!([0.1]));

        assert!(matches!(
            run(&pipe, &["nir", "red"]),
            Err(TaskError::InvalidValue { .. })
        ));
    }
}
