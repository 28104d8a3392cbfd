use crate::serializable_struct_with_getters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputSource {
    /// Solomon benchmark file: 9 header lines, then `id x y ...` rows.
    Coordinates { path: PathBuf },
    /// Tab separated matrix with a header line and `nodeId\td1\td2...` rows.
    DistanceMatrix { path: PathBuf },
}

impl InputSource {
    pub fn path(&self) -> &Path {
        match self {
            InputSource::Coordinates { path } | InputSource::DistanceMatrix { path } => path,
        }
    }
}

serializable_struct_with_getters! {
    InstanceTypeConfig {
        label: String,
        source: InputSource,
        base_drone_endurance: u32,
        base_time_horizon: u32,
    }
}

serializable_struct_with_getters! {
    VersionRange {
        start: u32,
        end: u32,
        suffix: Option<String>,
    }
}

impl VersionRange {
    pub const DEFAULT_SUFFIX: &'static str = "p";

    /// Version labels for `start..end`, e.g. `1p`, `2p`, ...
    pub fn labels(&self) -> Vec<String> {
        let suffix = self
            .suffix()
            .map(String::as_str)
            .unwrap_or(Self::DEFAULT_SUFFIX);
        (self.start..self.end)
            .map(|i| format!("{}{}", i, suffix))
            .collect()
    }
}

serializable_struct_with_getters! {
    BatchConfig {
        instance_types: Vec<InstanceTypeConfig>,
        // Only consulted for coordinate sources; matrix sources use their dimension.
        target_count: Option<usize>,
        fleet_size: u32,
        target_time_horizon: u32,
        candidate_periods: Vec<u32>,
        versions: VersionRange,
        output_dir: PathBuf,
        seed: Option<u64>,
    }
}
