use dpm_instances::{Instance, Period};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct InstanceSummary {
    pub node_count: usize,
    pub target_count: usize,
    pub drone_endurance: u32,
    pub begin_time: u32,
    pub end_time: u32,
    pub fleet_size: u32,
    pub periods: Vec<Period>,
    pub period_distribution: BTreeMap<u32, usize>,
}

impl From<&Instance> for InstanceSummary {
    fn from(instance: &Instance) -> Self {
        Self {
            node_count: instance.node_count,
            target_count: instance.target_count,
            drone_endurance: instance.drone_endurance,
            begin_time: instance.begin_time,
            end_time: instance.end_time,
            fleet_size: instance.fleet_size,
            periods: instance.periods(),
            period_distribution: instance.period_distribution(),
        }
    }
}
