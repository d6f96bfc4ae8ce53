use crate::store::{Namespace, Pipe};
use serde::{Deserialize, Serialize};

/// Named keys a task reads (`require`) or writes (`output`), per namespace.
///
/// Both namespaces default to empty, so a config only lists the ones it uses.
/// Namespaces other than `data` and `record` are rejected.
///
/// # Examples
///
/// ```
/// use taskpipe::config::KeySpec;
/// use taskpipe::store::Namespace;
///
/// let spec: KeySpec = serde_yaml::from_str("data: [nir, red]").unwrap();
///
/// assert_eq!(spec.keys(Namespace::Data), ["nir", "red"]);
/// assert!(spec.keys(Namespace::Record).is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeySpec {
    #[serde(default)]
    pub data: Vec<String>,
    #[serde(default)]
    pub record: Vec<String>,
}

impl KeySpec {
    pub fn new(data: Vec<String>, record: Vec<String>) -> Self {
        Self { data, record }
    }

    pub fn keys(&self, namespace: Namespace) -> &[String] {
        match namespace {
            Namespace::Data => &self.data,
            Namespace::Record => &self.record,
        }
    }

    /// Every `(namespace, key)` pair, data first
    pub fn iter(&self) -> impl Iterator<Item = (Namespace, &str)> {
        Namespace::ALL
            .into_iter()
            .flat_map(move |ns| self.keys(ns).iter().map(move |key| (ns, key.as_str())))
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty() && self.record.is_empty()
    }

    /// Per-key presence in the pipe, in declaration order
    pub fn presence(&self, namespace: Namespace, pipe: &Pipe) -> Vec<bool> {
        self.keys(namespace)
            .iter()
            .map(|key| pipe.contains(namespace, key))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rejects_unknown_namespace() {
        let result: Result<KeySpec, _> = serde_yaml::from_str("pixels: [a]");
        assert!(result.is_err());
    }

    #[test]
    fn iter_lists_data_before_record() {
        let spec = KeySpec::new(vec!["ndvi".into()], vec!["model".into()]);
        let pairs: Vec<_> = spec.iter().collect();
        assert_eq!(
            pairs,
            vec![(Namespace::Data, "ndvi"), (Namespace::Record, "model")]
        );
    }

    #[test]
    fn presence_is_elementwise() {
        let spec = KeySpec::new(vec!["a".into(), "b".into()], vec![]);
        let mut pipe = Pipe::new();
        pipe.insert(Namespace::Data, "b", json!(1));

        assert_eq!(spec.presence(Namespace::Data, &pipe), vec![false, true]);
        assert!(spec.presence(Namespace::Record, &pipe).is_empty());
    }
}
