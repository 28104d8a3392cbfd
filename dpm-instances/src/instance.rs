use crate::values::{Period, TravelTime, DEPOT_ID};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NodeRow {
    pub id: usize,
    pub travel_times: Vec<TravelTime>,
    pub begin: u32,
    pub period: Period,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Instance {
    pub node_count: usize,
    pub target_count: usize,
    pub depot_id: usize,
    pub drone_endurance: u32,
    pub begin_time: u32,
    pub end_time: u32,
    pub fleet_size: u32,
    pub nodes: Vec<NodeRow>,
}

impl Instance {
    pub fn travel_time(&self, from: usize, to: usize) -> TravelTime {
        self.nodes[from].travel_times[to]
    }

    pub fn time_to_depot(&self, node: usize) -> TravelTime {
        self.travel_time(node, DEPOT_ID)
    }

    pub fn periods(&self) -> Vec<Period> {
        self.nodes.iter().map(|n| n.period).collect()
    }

    /// Number of targets per assigned period. The depot is not counted.
    pub fn period_distribution(&self) -> BTreeMap<u32, usize> {
        let mut distribution = BTreeMap::new();
        for node in self.nodes.iter().filter(|n| n.id != self.depot_id) {
            if let Period::Every(p) = node.period {
                *distribution.entry(p).or_insert(0) += 1;
            }
        }
        distribution
    }
}
