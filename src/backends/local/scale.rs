use crate::backends::local::series::{read_series, series_value};
use crate::errors::TaskError;
use crate::pipeline::TaskSpec;
use crate::store::{Namespace, Pipe};

/// Linear rescale `x * scale + offset`.
///
/// Parameters `scale` (default 1.0) and `offset` (default 0.0).
pub fn scale(pipe: &Pipe, spec: &TaskSpec<'_>) -> Result<Pipe, TaskError> {
    let in_key = spec.required_key(Namespace::Data, 0, 1)?;
    let out_key = spec.output_key(Namespace::Data, 0, 1)?;
    let factor = spec.parameter_f64("scale", 1.0)?;
    let offset = spec.parameter_f64("offset", 0.0)?;

    let scaled: Vec<f64> = read_series(pipe, in_key)?
        .into_iter()
        .map(|x| x * factor + offset)
        .collect();

    let mut out = Pipe::new();
    out.insert(Namespace::Data, out_key, series_value(&scaled));
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KeySpec;
    use serde_json::{json, Value};
    use std::collections::HashMap;

    fn run(pipe: &Pipe, parameters: HashMap<String, Value>) -> Result<Pipe, TaskError> {
        let requires = KeySpec::new(vec!["x".into()], vec![]);
        let outputs = KeySpec::new(vec!["y".into()], vec![]);
        let spec = TaskSpec {
            task_id: "scaled",
            requires: &requires,
            outputs: &outputs,
            parameters: &parameters,
        };
        scale(pipe, &spec)
    }

    fn pipe() -> Pipe {
        let mut pipe = Pipe::new();
        pipe.insert(Namespace::Data, "x", json!([1.0, null, 3.0]));
        pipe
    }

    #[test]
    fn defaults_are_identity() {
        let out = run(&pipe(), HashMap::new()).unwrap();
        assert_eq!(out.get(Namespace::Data, "y"), Some(&json!([1.0, null, 3.0])));
    }

    #[test]
    fn applies_scale_and_offset() {
        let params = HashMap::from([
            ("scale".to_string(), json!(2)),
            ("offset".to_string(), json!(-1.0)),
        ]);
        let out = run(&pipe(), params).unwrap();
        assert_eq!(out.get(Namespace::Data, "y"), Some(&json!([1.0, null, 5.0])));
    }
}
