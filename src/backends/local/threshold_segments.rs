use serde_json::{json, Value};

use crate::backends::local::series::read_series;
use crate::errors::TaskError;
use crate::pipeline::TaskSpec;
use crate::store::{Namespace, Pipe};

/// Group a series into segments: contiguous runs with `x >= threshold`.
///
/// Parameter `threshold` (default 0.0). Produces one record value, a list of
/// `{start, end, mean}` objects with inclusive indices. `NaN`/`null`
/// observations end a run.
pub fn threshold_segments(pipe: &Pipe, spec: &TaskSpec<'_>) -> Result<Pipe, TaskError> {
    let in_key = spec.required_key(Namespace::Data, 0, 1)?;
    let out_key = spec.output_key(Namespace::Record, 0, 1)?;
    let threshold = spec.parameter_f64("threshold", 0.0)?;

    let series = read_series(pipe, in_key)?;
    let mut segments: Vec<Value> = Vec::new();
    let mut start: Option<usize> = None;

    for (idx, &x) in series.iter().enumerate() {
        match (start, x >= threshold) {
            (None, true) => start = Some(idx),
            (Some(s), false) => {
                segments.push(segment(&series, s, idx - 1));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        segments.push(segment(&series, s, series.len() - 1));
    }

    let mut out = Pipe::new();
    out.insert(Namespace::Record, out_key, Value::Array(segments));
    Ok(out)
}

fn segment(series: &[f64], start: usize, end: usize) -> Value {
    let run = &series[start..=end];
    let mean = run.iter().sum::<f64>() / run.len() as f64;
    json!({ "start": start, "end": end, "mean": mean })
}
