use crate::{
    error::{InstanceError, Result},
    instance::{Instance, NodeRow},
    values::{Period, TravelTime},
    writer::{HEADER_LINE, NODES_LINE},
};
use std::{fs, path::Path};

pub fn read_instance(path: &Path) -> Result<Instance> {
    let contents = fs::read_to_string(path).map_err(|e| InstanceError::from_io(path, e))?;
    parse_instance(path, &contents)
}

pub fn parse_instance(path: &Path, contents: &str) -> Result<Instance> {
    let mut lines = contents.lines().enumerate().map(|(idx, l)| (idx + 1, l));
    let mut next_line = |expected: &str| {
        lines
            .next()
            .ok_or_else(|| InstanceError::format(path, format!("missing {}", expected)))
    };

    let (line_number, header) = next_line("header line")?;
    if header.trim_end() != HEADER_LINE {
        return Err(InstanceError::format(
            path,
            format!("line {}: unexpected header '{}'", line_number, header),
        ));
    }

    let (line_number, basic) = next_line("parameter line")?;
    let basic = parse_fields(path, line_number, basic)?;
    if basic.len() != 7 {
        return Err(InstanceError::format(
            path,
            format!(
                "line {}: expected 7 parameters, found {}",
                line_number,
                basic.len()
            ),
        ));
    }
    let node_count = basic[0] as usize;

    let (line_number, marker) = next_line("node section marker")?;
    if marker.trim_end() != NODES_LINE {
        return Err(InstanceError::format(
            path,
            format!("line {}: unexpected marker '{}'", line_number, marker),
        ));
    }

    let mut nodes = Vec::new();
    for id in 0..node_count {
        let (line_number, line) = next_line(&format!("row for node {}", id))?;
        let fields = parse_fields(path, line_number, line)?;
        // id, one travel time per node, begin, period
        if fields.len() != node_count + 3 {
            return Err(InstanceError::format(
                path,
                format!(
                    "line {}: expected {} fields, found {}",
                    line_number,
                    node_count + 3,
                    fields.len()
                ),
            ));
        }
        if fields[0] as usize != id {
            return Err(InstanceError::format(
                path,
                format!("line {}: expected node {}, found {}", line_number, id, fields[0]),
            ));
        }
        nodes.push(NodeRow {
            id,
            travel_times: fields[1..=node_count]
                .iter()
                .map(|&t| TravelTime::decode(t))
                .collect(),
            begin: fields[node_count + 1],
            period: Period::decode(fields[node_count + 2]),
        });
    }

    Ok(Instance {
        node_count,
        target_count: basic[1] as usize,
        depot_id: basic[2] as usize,
        drone_endurance: basic[3],
        begin_time: basic[4],
        end_time: basic[5],
        fleet_size: basic[6],
        nodes,
    })
}

fn parse_fields(path: &Path, line_number: usize, line: &str) -> Result<Vec<u32>> {
    line.split('\t')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(|f| {
            f.parse::<u32>().map_err(|_| {
                InstanceError::format(
                    path,
                    format!("line {}: invalid integer field '{}'", line_number, f),
                )
            })
        })
        .collect()
}
