//! Batch configurations for the datasets instances have historically been
//! generated from. Edit these (or pass a json config) to customise a run.

use crate::config::{BatchConfig, InputSource, InstanceTypeConfig, VersionRange};
use std::path::PathBuf;

pub const PRESET_NAMES: [&str; 2] = ["solomon", "suzhou_gusu"];

pub fn preset(name: &str) -> Option<BatchConfig> {
    match name {
        "solomon" => Some(solomon()),
        "suzhou_gusu" => Some(suzhou_gusu()),
        _ => None,
    }
}

fn solomon_type(label: &str, file: &str, endurance: u32, horizon: u32) -> InstanceTypeConfig {
    InstanceTypeConfig {
        label: label.to_string(),
        source: InputSource::Coordinates {
            path: PathBuf::from("data/solomon").join(format!("{}.txt", file)),
        },
        base_drone_endurance: endurance,
        base_time_horizon: horizon,
    }
}

/// C1/C2/R1/RC1 from the Solomon VRPTW set, coordinates only.
pub fn solomon() -> BatchConfig {
    BatchConfig {
        instance_types: vec![
            solomon_type("C1", "c101", 90, 108),
            solomon_type("C2", "c201", 90, 108),
            solomon_type("R1", "r102", 90, 108),
            solomon_type("RC1", "rc101", 110, 132),
        ],
        target_count: Some(35),
        fleet_size: 100,
        target_time_horizon: 18,
        candidate_periods: vec![3, 6, 12, 18, 24],
        versions: VersionRange {
            start: 30,
            end: 35,
            suffix: None,
        },
        output_dir: PathBuf::from("input"),
        seed: None,
    }
}

/// Road distances between monitoring sites in Gusu district, Suzhou.
pub fn suzhou_gusu() -> BatchConfig {
    BatchConfig {
        instance_types: vec![InstanceTypeConfig {
            label: "SZ_Gusu".to_string(),
            source: InputSource::DistanceMatrix {
                path: PathBuf::from("data/solomon/distance_matrix_suzhou_gusu_10.txt"),
            },
            base_drone_endurance: 18000,
            base_time_horizon: 21600,
        }],
        target_count: None,
        fleet_size: 50,
        target_time_horizon: 12,
        candidate_periods: vec![3, 6, 12, 18, 24],
        versions: VersionRange {
            start: 1,
            end: 6,
            suffix: None,
        },
        output_dir: PathBuf::from("input"),
        seed: None,
    }
}
