use serde::{Deserialize, Serialize};
use serde_json::json;
use dpm_utils::{dejsonify, jsonify, load_json};
use std::io::Write;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Sample {
    zeta: u32,
    alpha: Vec<u32>,
}

#[test]
fn test_jsonify_sorts_keys() {
    let sample = Sample {
        zeta: 1,
        alpha: vec![3, 6],
    };
    assert_eq!(jsonify(&sample), r#"{"alpha":[3,6],"zeta":1}"#);
}

#[test]
fn test_jsonify_sorts_nested_keys() {
    let value = json!({"b": [{"y": 1, "x": 2}], "a": {"d": 0, "c": 1}});
    assert_eq!(jsonify(&value), r#"{"a":{"c":1,"d":0},"b":[{"x":2,"y":1}]}"#);
}

#[test]
fn test_dejsonify() {
    let sample: Sample = dejsonify(r#"{"alpha":[12],"zeta":18}"#).unwrap();
    assert_eq!(
        sample,
        Sample {
            zeta: 18,
            alpha: vec![12]
        }
    );
}

#[test]
fn test_load_json_inline_and_file() {
    let inline: Sample = load_json(r#"{"alpha":[],"zeta":2}"#).unwrap();
    assert_eq!(inline.zeta, 2);

    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, r#"{{"alpha":[1],"zeta":3}}"#).unwrap();
    let path = file.path().to_str().unwrap().to_string();
    let loaded: Sample = load_json(&path).unwrap();
    assert_eq!(loaded.alpha, vec![1]);
}

#[test]
fn test_load_json_missing_file() {
    assert!(load_json::<Sample>("/definitely/not/here.json").is_err());
}
