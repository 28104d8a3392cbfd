use dpm_structs::{
    config::{BatchConfig, InputSource, VersionRange},
    presets::{preset, solomon, suzhou_gusu, PRESET_NAMES},
};
use dpm_utils::{dejsonify, jsonify};
use serde_json::json;
use std::path::Path;

#[test]
fn test_version_labels() {
    let versions = VersionRange {
        start: 30,
        end: 35,
        suffix: None,
    };
    assert_eq!(versions.labels(), vec!["30p", "31p", "32p", "33p", "34p"]);

    let versions = VersionRange {
        start: 1,
        end: 3,
        suffix: Some("v".to_string()),
    };
    assert_eq!(versions.labels(), vec!["1v", "2v"]);

    let empty = VersionRange {
        start: 4,
        end: 4,
        suffix: None,
    };
    assert!(empty.labels().is_empty());
}

#[test]
fn test_input_source_tagging() {
    let source = InputSource::DistanceMatrix {
        path: "data/gusu.txt".into(),
    };
    assert_eq!(
        serde_json::to_value(&source).unwrap(),
        json!({"kind": "distance_matrix", "path": "data/gusu.txt"})
    );
    let parsed: InputSource =
        dejsonify(r#"{"kind":"coordinates","path":"data/solomon/c101.txt"}"#).unwrap();
    assert_eq!(parsed.path(), Path::new("data/solomon/c101.txt"));
}

#[test]
fn test_presets_json_roundtrip() {
    for name in PRESET_NAMES {
        let config = preset(name).unwrap();
        let parsed: BatchConfig = dejsonify(&jsonify(&config)).unwrap();
        assert_eq!(parsed, config);
    }
    assert!(preset("c101").is_none());
}

#[test]
fn test_optional_fields_default_to_none() {
    let config: BatchConfig = dejsonify(
        r#"{
            "instance_types": [{
                "label": "C1",
                "source": {"kind": "coordinates", "path": "c101.txt"},
                "base_drone_endurance": 90,
                "base_time_horizon": 108
            }],
            "fleet_size": 30,
            "target_time_horizon": 12,
            "candidate_periods": [3, 6, 12],
            "versions": {"start": 1, "end": 2},
            "output_dir": "out"
        }"#,
    )
    .unwrap();
    assert_eq!(config.target_count(), None);
    assert_eq!(config.seed(), None);
    assert_eq!(config.versions.labels(), vec!["1p"]);
    assert!(!jsonify(&config).contains("seed"));
}

#[test]
fn test_solomon_preset() {
    let config = solomon();
    let rc1 = config.instance_types.iter().find(|t| t.label == "RC1").unwrap();
    assert_eq!(rc1.base_drone_endurance, 110);
    assert_eq!(rc1.base_time_horizon, 132);
    assert_eq!(rc1.source.path(), Path::new("data/solomon/rc101.txt"));
    assert_eq!(config.target_count(), Some(&35));
    assert_eq!(config.instance_types.len(), 4);
}

#[test]
fn test_suzhou_gusu_preset() {
    let config = suzhou_gusu();
    let gusu = &config.instance_types[0];
    assert_eq!(gusu.label, "SZ_Gusu");
    assert!(matches!(gusu.source, InputSource::DistanceMatrix { .. }));
    assert_eq!(gusu.base_time_horizon, 21600);
    assert_eq!(config.versions.labels().len(), 5);
}
