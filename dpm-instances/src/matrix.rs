use crate::{
    distance::DistanceTable,
    error::{InstanceError, Result},
};
use std::{fs, path::Path};
use tracing::{debug, info};

/// Reads a tab separated distance matrix. The header line is ignored and each
/// following line is `nodeId\td1\td2...`. Values are passed through as-is,
/// including the diagonal marker.
pub fn read_distance_matrix(path: &Path) -> Result<DistanceTable> {
    let contents = fs::read_to_string(path).map_err(|e| InstanceError::from_io(path, e))?;
    let table = parse_distance_matrix(path, &contents)?;
    info!(
        "Read distance matrix {}: {} x {}",
        path.display(),
        table.dimension(),
        table.dimension()
    );
    Ok(table)
}

pub fn parse_distance_matrix(path: &Path, contents: &str) -> Result<DistanceTable> {
    let lines: Vec<&str> = contents.lines().collect();
    if lines.len() < 2 {
        return Err(InstanceError::format(
            path,
            "expected a header line and at least one data line",
        ));
    }

    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut line_numbers: Vec<usize> = Vec::new();
    for (idx, line) in lines.iter().enumerate().skip(1) {
        let line_number = idx + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let parts: Vec<&str> = line.split('\t').collect();
        if parts.len() < 2 {
            debug!("Skipping line {}: no distance values", line_number);
            continue;
        }
        let row = parts[1..]
            .iter()
            .map(|d| d.trim())
            .filter(|d| !d.is_empty())
            .map(|d| parse_distance(d).ok_or(d))
            .collect::<std::result::Result<Vec<f64>, &str>>()
            .map_err(|bad| {
                InstanceError::format(
                    path,
                    format!("line {}: invalid distance value '{}'", line_number, bad),
                )
            })?;
        rows.push(row);
        line_numbers.push(line_number);
    }

    let n = rows.len();
    if n == 0 {
        return Err(InstanceError::format(path, "distance matrix is empty"));
    }
    for (row, line_number) in rows.iter().zip(&line_numbers) {
        if row.len() != n {
            return Err(InstanceError::format(
                path,
                format!(
                    "line {}: matrix is not square, row has {} columns, expected {}",
                    line_number,
                    row.len(),
                    n
                ),
            ));
        }
    }

    DistanceTable::from_finite(rows)
        .ok_or_else(|| InstanceError::format(path, "distance matrix is not square"))
}

fn parse_distance(value: &str) -> Option<f64> {
    value
        .parse::<f64>()
        .ok()
        .filter(|d| d.is_finite() && *d >= 0.0)
}
