//! Test instance generation for the periodic drone monitoring problem.
//!
//! A [`DistanceTable`] is loaded either from Solomon coordinates
//! ([`coordinates`]) or from a precomputed matrix ([`matrix`]), turned into an
//! [`Instance`] by the [`InstanceBuilder`] and serialized by [`writer`].

pub mod builder;
pub mod coordinates;
pub mod distance;
pub mod error;
pub mod instance;
pub mod matrix;
pub mod reader;
pub mod values;
pub mod writer;

pub use builder::{eligible_periods, InstanceBuilder, PeriodSelector, RandomSelector, ScalingContext};
pub use coordinates::{euclidean_distances, read_coordinates, Point};
pub use distance::DistanceTable;
pub use error::{InstanceError, Result};
pub use instance::{Instance, NodeRow};
pub use matrix::read_distance_matrix;
pub use reader::read_instance;
pub use values::*;
pub use writer::{instance_name, instance_path, write_instance, write_instance_file};
