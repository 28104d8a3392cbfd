use anyhow::Result;
use dpm_instances::{
    euclidean_distances, instance_name, instance_path, read_coordinates, read_distance_matrix,
    write_instance_file, DistanceTable, InstanceBuilder, InstanceError, RandomSelector,
    ScalingContext,
};
use dpm_structs::config::{BatchConfig, InputSource, InstanceTypeConfig};
use dpm_utils::{instance_seed_str, rng_from_str};
use serde::Serialize;
use std::{collections::BTreeMap, path::PathBuf};
use tracing::{error, info, warn};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct GeneratedInstance {
    pub instance_type: String,
    pub version: String,
    pub name: String,
    pub path: PathBuf,
    pub period_distribution: BTreeMap<u32, usize>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Failure {
    pub instance_type: String,
    /// `None` when the whole instance type was skipped.
    pub version: Option<String>,
    pub cause: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BatchReport {
    pub seed: u64,
    pub generated: Vec<GeneratedInstance>,
    pub failures: Vec<Failure>,
    pub missing_inputs: Vec<String>,
}

impl BatchReport {
    pub fn log_summary(&self) {
        info!("{}", "=".repeat(60));
        info!(
            "Generated {} instances (seed {})",
            self.generated.len(),
            self.seed
        );
        for (idx, generated) in self.generated.iter().enumerate() {
            info!("  {}. {}", idx + 1, generated.name);
        }
        if !self.failures.is_empty() {
            warn!("{} failures:", self.failures.len());
            for failure in &self.failures {
                warn!(
                    "  {} {}: {}",
                    failure.instance_type,
                    failure.version.as_deref().unwrap_or("(all versions)"),
                    failure.cause
                );
            }
        }
        info!("{}", "=".repeat(60));
    }
}

/// Generates every (instance type, version) pair of the config. A failing pair
/// is recorded and the batch moves on.
pub fn run_batch(config: &BatchConfig) -> BatchReport {
    let seed = config.seed.unwrap_or_else(rand::random);
    info!("Batch seed {}", seed);

    let mut report = BatchReport {
        seed,
        generated: Vec::new(),
        failures: Vec::new(),
        missing_inputs: Vec::new(),
    };
    let versions = config.versions.labels();

    for instance_type in &config.instance_types {
        let label = &instance_type.label;
        let input = instance_type.source.path();
        if !input.exists() {
            let cause = InstanceError::FileNotFound {
                path: input.to_path_buf(),
            };
            warn!("Skipping instance type {}: {}", label, cause);
            report.missing_inputs.push(label.clone());
            report.failures.push(Failure {
                instance_type: label.clone(),
                version: None,
                cause: cause.to_string(),
            });
            continue;
        }

        info!("Generating instance type {} from {}", label, input.display());
        let mut num_generated = 0;
        for version in &versions {
            match generate_instance(config, instance_type, version, seed) {
                Ok(generated) => {
                    for (period, count) in &generated.period_distribution {
                        info!("  period {}: {} targets", period, count);
                    }
                    num_generated += 1;
                    report.generated.push(generated);
                }
                Err(e) => {
                    error!("Failed to generate {} version {}: {}", label, version, e);
                    report.failures.push(Failure {
                        instance_type: label.clone(),
                        version: Some(version.clone()),
                        cause: e.to_string(),
                    });
                }
            }
        }
        info!(
            "Instance type {} done: {}/{} versions generated",
            label,
            num_generated,
            versions.len()
        );
    }
    report
}

/// Loads, builds and writes a single instance.
pub fn generate_instance(
    config: &BatchConfig,
    instance_type: &InstanceTypeConfig,
    version: &str,
    root_seed: u64,
) -> Result<GeneratedInstance> {
    let table = load_distance_table(config, instance_type)?;
    let builder = InstanceBuilder::new(
        ScalingContext {
            base_time_horizon: instance_type.base_time_horizon,
            base_drone_endurance: instance_type.base_drone_endurance,
            target_time_horizon: config.target_time_horizon,
        },
        config.fleet_size,
        config.candidate_periods.clone(),
    );
    let mut selector = RandomSelector::new(rng_from_str(&instance_seed_str(
        root_seed,
        &instance_type.label,
        version,
    )));
    let instance = builder.build(&table, &mut selector)?;

    let name = instance_name(
        &instance_type.label,
        instance.target_count,
        config.fleet_size,
        config.target_time_horizon,
        version,
    );
    let path = instance_path(&config.output_dir, &instance_type.label, &name);
    write_instance_file(&instance, &path)?;
    info!("Generated instance {}", name);

    Ok(GeneratedInstance {
        instance_type: instance_type.label.clone(),
        version: version.to_string(),
        name,
        path,
        period_distribution: instance.period_distribution(),
    })
}

fn load_distance_table(
    config: &BatchConfig,
    instance_type: &InstanceTypeConfig,
) -> Result<DistanceTable> {
    match &instance_type.source {
        InputSource::Coordinates { path } => {
            let target_count = config.target_count.ok_or_else(|| {
                InstanceError::Configuration(format!(
                    "instance type {} reads coordinates but no target_count is configured",
                    instance_type.label
                ))
            })?;
            Ok(euclidean_distances(&read_coordinates(path, target_count)?))
        }
        InputSource::DistanceMatrix { path } => {
            let table = read_distance_matrix(path)?;
            if let Some(target_count) = config.target_count {
                if target_count + 1 != table.dimension() {
                    warn!(
                        "Ignoring target_count {} for {}: matrix has {} targets",
                        target_count,
                        instance_type.label,
                        table.dimension().saturating_sub(1)
                    );
                }
            }
            Ok(table)
        }
    }
}
