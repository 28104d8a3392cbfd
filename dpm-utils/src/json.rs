use anyhow::{anyhow, Result};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{to_string, to_string_pretty, to_value, Map, Value};
use std::{fs, path::Path};

pub fn dejsonify<'a, T>(json_str: &'a str) -> serde_json::Result<T>
where
    T: Deserialize<'a>,
{
    serde_json::from_str::<T>(json_str)
}

pub fn jsonify<T>(obj: &T) -> String
where
    T: Serialize,
{
    to_string(&jsonify_internal(
        &to_value(obj).expect("to_value failed on serializable object"),
    ))
    .expect("to_string failed on serializable object")
}

pub fn jsonify_pretty<T>(obj: &T) -> String
where
    T: Serialize,
{
    to_string_pretty(&jsonify_internal(
        &to_value(obj).expect("to_value failed on serializable object"),
    ))
    .expect("to_string failed on serializable object")
}

pub fn jsonify_internal(json_value: &Value) -> Value {
    match json_value {
        Value::Object(obj) => {
            let mut sorted_map = Map::new();
            let mut keys: Vec<&String> = obj.keys().collect();
            keys.sort();
            for key in keys {
                if let Some(value) = obj.get(key) {
                    sorted_map.insert(key.clone(), jsonify_internal(value));
                }
            }
            Value::Object(sorted_map)
        }
        Value::Array(arr) => Value::Array(arr.iter().map(jsonify_internal).collect()),
        _ => json_value.clone(),
    }
}

/// Accepts either an inline json string or a path to a `.json` file.
pub fn load_json<T>(json_or_path: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let json_str = if json_or_path.ends_with(".json") {
        fs::read_to_string(Path::new(json_or_path))
            .map_err(|e| anyhow!("Failed to read json file {}: {}", json_or_path, e))?
    } else {
        json_or_path.to_string()
    };
    serde_json::from_str::<T>(&json_str).map_err(|e| anyhow!("Failed to parse json: {}", e))
}
