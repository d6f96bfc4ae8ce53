use serde_json::json;

use crate::backends::local::series::read_series;
use crate::errors::TaskError;
use crate::pipeline::TaskSpec;
use crate::store::{Namespace, Pipe};

/// Summary model over an entire series: mean, min, max and count of the
/// finite observations.
///
/// Eager-capable: one pass over the whole collection produces a single
/// record value.
pub fn mean_model(pipe: &Pipe, spec: &TaskSpec<'_>) -> Result<Pipe, TaskError> {
    let in_key = spec.required_key(Namespace::Data, 0, 1)?;
    let out_key = spec.output_key(Namespace::Record, 0, 1)?;

    let finite: Vec<f64> = read_series(pipe, in_key)?
        .into_iter()
        .filter(|x| x.is_finite())
        .collect();

    let model = if finite.is_empty() {
        json!({ "count": 0, "mean": null, "min": null, "max": null })
    } else {
        let count = finite.len();
        let mean = finite.iter().sum::<f64>() / count as f64;
        let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
        let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        json!({ "count": count, "mean": mean, "min": min, "max": max })
    };

    let mut out = Pipe::new();
    out.insert(Namespace::Record, out_key, model);
    Ok(out)
}
