use crate::{
    distance::DistanceTable,
    error::{InstanceError, Result},
    instance::{Instance, NodeRow},
    values::{Distance, Period, TravelTime, DEPOT_ID, INFINITY_DISTANCE, INFINITY_PERIOD},
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Maps durations from a dataset's native time unit onto the planning unit.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct ScalingContext {
    pub base_time_horizon: u32,
    pub base_drone_endurance: u32,
    pub target_time_horizon: u32,
}

impl ScalingContext {
    pub fn multiplier(&self) -> f64 {
        self.target_time_horizon as f64 / self.base_time_horizon as f64
    }

    /// `ceil(distance * multiplier)`
    pub fn scale_distance(&self, distance: f64) -> u32 {
        // multiply before dividing so integral distances scale exactly
        let scaled = distance * self.target_time_horizon as f64 / self.base_time_horizon as f64;
        scaled.ceil().max(0.0) as u32
    }

    /// `floor(base_drone_endurance * multiplier)`
    pub fn scaled_drone_endurance(&self) -> u32 {
        self.scale_floor(self.base_drone_endurance)
    }

    /// `floor(base_time_horizon * multiplier)`. Computed on integers this is
    /// always `target_time_horizon`, which is what instances record as end time.
    pub fn scaled_time_horizon(&self) -> u32 {
        self.scale_floor(self.base_time_horizon)
    }

    fn scale_floor(&self, value: u32) -> u32 {
        (value as u64 * self.target_time_horizon as u64)
            .checked_div(self.base_time_horizon as u64)
            .unwrap_or(0) as u32
    }
}

/// Picks one period out of a non-empty candidate list.
pub trait PeriodSelector {
    fn select(&mut self, candidates: &[u32]) -> u32;
}

/// Uniform choice driven by a caller supplied rng.
pub struct RandomSelector<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomSelector<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> PeriodSelector for RandomSelector<R> {
    fn select(&mut self, candidates: &[u32]) -> u32 {
        candidates[self.rng.gen_range(0..candidates.len())]
    }
}

/// Periods that leave time for a round trip from the depot. `None` means no
/// candidate is long enough.
pub fn eligible_periods(time_to_depot: TravelTime, valid_periods: &[u32]) -> Option<Vec<u32>> {
    let eligible: Vec<u32> = valid_periods
        .iter()
        .copied()
        .filter(|&p| TravelTime::Finite(p) > time_to_depot)
        .collect();
    if eligible.is_empty() {
        None
    } else {
        Some(eligible)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InstanceBuilder {
    pub scaling: ScalingContext,
    pub fleet_size: u32,
    pub candidate_periods: Vec<u32>,
}

impl InstanceBuilder {
    pub fn new(scaling: ScalingContext, fleet_size: u32, candidate_periods: Vec<u32>) -> Self {
        Self {
            scaling,
            fleet_size,
            candidate_periods,
        }
    }

    /// Candidate periods that fit within the planning horizon. A period at or
    /// above the depot encoding would read back as `Never`.
    pub fn valid_periods(&self) -> Result<Vec<u32>> {
        let valid: Vec<u32> = self
            .candidate_periods
            .iter()
            .copied()
            .filter(|&p| p <= self.scaling.target_time_horizon)
            .collect();
        if let Some(p) = valid.iter().find(|&&p| p >= INFINITY_PERIOD) {
            return Err(InstanceError::Configuration(format!(
                "candidate period {} collides with the depot period encoding {}",
                p, INFINITY_PERIOD
            )));
        }
        if valid.is_empty() {
            return Err(InstanceError::Configuration(format!(
                "no candidate period in {:?} is <= the time horizon {}",
                self.candidate_periods, self.scaling.target_time_horizon
            )));
        }
        Ok(valid)
    }

    /// Scaled travel times. Finite times must stay below the infinite
    /// encoding so they survive a write and read back unchanged.
    pub fn scale_travel_times(&self, table: &DistanceTable) -> Result<Vec<Vec<TravelTime>>> {
        table
            .rows()
            .iter()
            .enumerate()
            .map(|(i, row)| {
                row.iter()
                    .enumerate()
                    .map(|(j, distance)| match distance {
                        _ if i == j || distance.is_diagonal_marker() => Ok(TravelTime::Infinite),
                        Distance::Infinite => Ok(TravelTime::Infinite),
                        Distance::Finite(d) => {
                            let scaled = self.scaling.scale_distance(*d);
                            if scaled >= INFINITY_DISTANCE {
                                return Err(InstanceError::Configuration(format!(
                                    "distance {} from node {} to {} scales to {}, which collides \
                                     with the infinite encoding {}",
                                    d, i, j, scaled, INFINITY_DISTANCE
                                )));
                            }
                            Ok(TravelTime::Finite(scaled))
                        }
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect()
    }

    pub fn build<S>(&self, table: &DistanceTable, selector: &mut S) -> Result<Instance>
    where
        S: PeriodSelector + ?Sized,
    {
        if self.scaling.base_time_horizon == 0 {
            return Err(InstanceError::Configuration(
                "base time horizon must be positive".to_string(),
            ));
        }
        let node_count = table.dimension();
        if node_count == 0 {
            return Err(InstanceError::Configuration(
                "distance table has no nodes".to_string(),
            ));
        }
        let valid_periods = self.valid_periods()?;
        let max_period = valid_periods.iter().copied().max().unwrap_or_default();
        debug!(
            "Scaling multiplier {:.6} ({} -> {}), valid periods {:?}",
            self.scaling.multiplier(),
            self.scaling.base_time_horizon,
            self.scaling.target_time_horizon,
            valid_periods
        );

        let nodes = self
            .scale_travel_times(table)?
            .into_iter()
            .enumerate()
            .map(|(id, travel_times)| {
                let period = if id == DEPOT_ID {
                    Period::Never
                } else {
                    let time_to_depot = travel_times[DEPOT_ID];
                    let eligible = eligible_periods(time_to_depot, &valid_periods)
                        .unwrap_or_else(|| {
                            warn!(
                                "Node {}: time to depot {} exceeds every period, using {}",
                                id, time_to_depot, max_period
                            );
                            vec![max_period]
                        });
                    Period::Every(selector.select(&eligible))
                };
                NodeRow {
                    id,
                    travel_times,
                    begin: 0,
                    period,
                }
            })
            .collect();

        let drone_endurance = self.scaling.scaled_drone_endurance();
        debug!(
            "Drone endurance {} -> {}",
            self.scaling.base_drone_endurance, drone_endurance
        );

        Ok(Instance {
            node_count,
            target_count: node_count - 1,
            depot_id: DEPOT_ID,
            drone_endurance,
            begin_time: 0,
            end_time: self.scaling.scaled_time_horizon(),
            fleet_size: self.fleet_size,
            nodes,
        })
    }
}
