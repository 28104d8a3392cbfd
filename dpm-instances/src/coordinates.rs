use crate::{
    distance::DistanceTable,
    error::{InstanceError, Result},
    values::Distance,
};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing::info;

/// Solomon files open with name, vehicle and column-title lines.
pub const SOLOMON_HEADER_LINES: usize = 9;

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

/// Reads the depot plus `target_count` customer coordinates from a Solomon
/// benchmark file.
pub fn read_coordinates(path: &Path, target_count: usize) -> Result<Vec<Point>> {
    let contents = fs::read_to_string(path).map_err(|e| InstanceError::from_io(path, e))?;
    let points = parse_coordinates(path, &contents, target_count)?;
    info!(
        "Read {} coordinates from {} (depot + {} targets)",
        points.len(),
        path.display(),
        target_count
    );
    Ok(points)
}

pub fn parse_coordinates(path: &Path, contents: &str, target_count: usize) -> Result<Vec<Point>> {
    let required = target_count + 1;
    let mut points = Vec::with_capacity(required);
    for (idx, line) in contents.lines().enumerate().skip(SOLOMON_HEADER_LINES) {
        if points.len() == required {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let line_number = idx + 1;
        let fields = line
            .split_whitespace()
            .take(3)
            .map(|f| f.parse::<i64>().map_err(|_| f))
            .collect::<std::result::Result<Vec<i64>, &str>>()
            .map_err(|bad| {
                InstanceError::format(
                    path,
                    format!("line {}: invalid integer field '{}'", line_number, bad),
                )
            })?;
        if fields.len() < 3 {
            return Err(InstanceError::format(
                path,
                format!(
                    "line {}: expected id, x and y fields, found {}",
                    line_number,
                    fields.len()
                ),
            ));
        }
        points.push(Point {
            x: fields[1],
            y: fields[2],
        });
    }

    if points.len() < required {
        return Err(InstanceError::format(
            path,
            format!(
                "expected {} data lines after the {} header lines, found {}",
                required,
                SOLOMON_HEADER_LINES,
                points.len()
            ),
        ));
    }
    Ok(points)
}

/// Symmetric euclidean distances rounded to two decimals, infinite on the
/// diagonal.
pub fn euclidean_distances(points: &[Point]) -> DistanceTable {
    let rows = points
        .iter()
        .enumerate()
        .map(|(i, from)| {
            points
                .iter()
                .enumerate()
                .map(|(j, to)| {
                    if i == j {
                        Distance::Infinite
                    } else {
                        let dx = from.x as f64 - to.x as f64;
                        let dy = from.y as f64 - to.y as f64;
                        Distance::Finite(round_to_hundredths(dx.hypot(dy)))
                    }
                })
                .collect()
        })
        .collect();
    DistanceTable { rows }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
