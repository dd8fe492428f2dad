use std::fs;
use std::path::Path;

use crate::config::{ConfigMap, Scalar, Value};
use crate::error::{CommandError, ConfigError};

impl Value {
    /// Convert a JSON document into a configuration value.
    ///
    /// JSON numbers become `Int` when they are exact integers and `Float`
    /// otherwise. `null` and arrays holding anything but scalars have no
    /// command-line rendering and are rejected with their key path.
    pub fn from_json(json: &serde_json::Value) -> Result<Value, CommandError> {
        from_json_at(json, "")
    }

    /// Render this value back as a JSON document.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Scalar(scalar) => scalar_to_json(scalar),
            Value::Sequence(seq) => {
                serde_json::Value::Array(seq.iter().map(scalar_to_json).collect())
            }
            Value::Mapping(map) => map.to_json(),
        }
    }
}

impl ConfigMap {
    pub fn from_json(json: &serde_json::Value) -> Result<ConfigMap, ConfigError> {
        match Value::from_json(json)? {
            Value::Mapping(map) => Ok(map),
            _ => Err(ConfigError::RootNotMapping(json_type_name(json))),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.iter()
                .map(|(key, value)| (key.clone(), value.to_json()))
                .collect(),
        )
    }
}

/// Load an experiment configuration from a JSON file.
pub fn load_config(path: &Path) -> Result<ConfigMap, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    ConfigMap::from_json(&json)
}

fn from_json_at(json: &serde_json::Value, path: &str) -> Result<Value, CommandError> {
    match json {
        serde_json::Value::Object(fields) => {
            let mut map = ConfigMap::new();
            for (key, field) in fields {
                map.insert(key.clone(), from_json_at(field, &join_path(path, key))?);
            }
            Ok(Value::Mapping(map))
        }
        serde_json::Value::Array(elements) => {
            let mut seq = Vec::with_capacity(elements.len());
            for (index, element) in elements.iter().enumerate() {
                seq.push(scalar_from_json(element).ok_or_else(|| {
                    CommandError::UnsupportedValue {
                        path: format!("{}[{}]", display_path(path), index),
                        reason: "sequences may only contain scalars".to_owned(),
                    }
                })?);
            }
            Ok(Value::Sequence(seq))
        }
        other => scalar_from_json(other)
            .map(Value::Scalar)
            .ok_or_else(|| CommandError::UnsupportedValue {
                path: display_path(path).to_owned(),
                reason: format!("{} has no command-line rendering", json_type_name(other)),
            }),
    }
}

fn scalar_from_json(json: &serde_json::Value) -> Option<Scalar> {
    match json {
        serde_json::Value::Bool(b) => Some(Scalar::Bool(*b)),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(Scalar::Int(i))
            } else {
                n.as_f64().map(Scalar::Float)
            }
        }
        serde_json::Value::String(s) => Some(Scalar::Str(s.clone())),
        _ => None,
    }
}

fn scalar_to_json(scalar: &Scalar) -> serde_json::Value {
    match scalar {
        Scalar::Bool(b) => serde_json::Value::Bool(*b),
        Scalar::Int(i) => serde_json::Value::Number((*i).into()),
        Scalar::Float(x) => serde_json::Number::from_f64(*x)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Scalar::Str(s) => serde_json::Value::String(s.clone()),
    }
}

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_owned()
    } else {
        format!("{}.{}", prefix, key)
    }
}

fn display_path(path: &str) -> &str {
    if path.is_empty() { "<root>" } else { path }
}

fn json_type_name(json: &serde_json::Value) -> &'static str {
    match json {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
