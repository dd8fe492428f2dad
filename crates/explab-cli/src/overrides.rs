use anyhow::Context as _;
use explab_core::{ConfigMap, Value};

/// Parse one `--set path=value` override into a single-leaf configuration
/// tree that merges over the resolved experiment.
///
/// The value is read as JSON when it parses as a scalar or array (`true`,
/// `2000`, `0.05`, `[100,50,25]`) and as a bare string otherwise, so
/// `--set algo.update_method=sgd` needs no extra quoting.
pub(crate) fn parse_set(entry: &str) -> anyhow::Result<ConfigMap> {
    let (path, raw_value) = entry
        .split_once('=')
        .with_context(|| format!("override `{}` is missing a `=`", entry))?;

    let segments: Vec<&str> = path.split('.').collect();
    if path.is_empty() || segments.iter().any(|segment| segment.is_empty()) {
        anyhow::bail!("override `{}` has an empty key path segment", entry);
    }

    match nest(&segments, parse_value(raw_value)?) {
        Value::Mapping(map) => Ok(map),
        _ => anyhow::bail!("override `{}` has no key path", entry),
    }
}

fn nest(segments: &[&str], leaf: Value) -> Value {
    match segments.split_first() {
        Some((head, rest)) => Value::Mapping(ConfigMap::new().with(*head, nest(rest, leaf))),
        None => leaf,
    }
}

fn parse_value(raw: &str) -> anyhow::Result<Value> {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(json) if !json.is_null() && !json.is_object() => {
            Value::from_json(&json).map_err(Into::into)
        }
        _ => Ok(Value::from(raw)),
    }
}
