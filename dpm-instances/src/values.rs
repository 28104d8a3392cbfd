use serde::{Deserialize, Serialize};
use std::fmt;

/// Legacy encoding of an unusable arc (self loops) in instance files.
pub const INFINITY_DISTANCE: u32 = 10_000_000;
/// Legacy encoding of the depot's monitoring period in instance files.
pub const INFINITY_PERIOD: u32 = 100_000;
/// Value marking the diagonal of externally supplied distance matrices.
pub const DIAGONAL_MARKER: f64 = 1_111_112.0;

pub const DEPOT_ID: usize = 0;

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub enum Distance {
    Finite(f64),
    Infinite,
}

impl Distance {
    pub fn is_diagonal_marker(&self) -> bool {
        matches!(self, Distance::Finite(d) if *d == DIAGONAL_MARKER)
    }
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum TravelTime {
    Finite(u32),
    Infinite,
}

impl TravelTime {
    pub fn encode(&self) -> u32 {
        match self {
            TravelTime::Finite(t) => *t,
            TravelTime::Infinite => INFINITY_DISTANCE,
        }
    }

    pub fn decode(value: u32) -> Self {
        if value == INFINITY_DISTANCE {
            TravelTime::Infinite
        } else {
            TravelTime::Finite(value)
        }
    }
}

impl fmt::Display for TravelTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Period {
    Every(u32),
    /// Depot: never monitored.
    Never,
}

impl Period {
    pub fn encode(&self) -> u32 {
        match self {
            Period::Every(p) => *p,
            Period::Never => INFINITY_PERIOD,
        }
    }

    pub fn decode(value: u32) -> Self {
        if value == INFINITY_PERIOD {
            Period::Never
        } else {
            Period::Every(value)
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}
