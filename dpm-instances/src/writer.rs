use crate::{
    error::{InstanceError, Result},
    instance::Instance,
};
use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};
use tracing::info;

pub const HEADER_LINE: &str = "numNode\tnumCus\tID_Depot\tMile(min)\tBegin\tEnd\tnumUAV";
pub const NODES_LINE: &str = "time_vec & deta1 & deta2:";

/// `{type}N{targets}D{fleet}T{horizon}V{version}`
pub fn instance_name(
    instance_type: &str,
    target_count: usize,
    fleet_size: u32,
    time_horizon: u32,
    version: &str,
) -> String {
    format!(
        "{}N{}D{}T{}V{}",
        instance_type, target_count, fleet_size, time_horizon, version
    )
}

/// Instances are grouped in one directory per instance type.
pub fn instance_path(output_dir: &Path, instance_type: &str, name: &str) -> PathBuf {
    output_dir
        .join(instance_type)
        .join(format!("{}.txt", name))
}

/// Every value is followed by a tab, including the last one on a line.
pub fn write_instance<W: Write>(instance: &Instance, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", HEADER_LINE)?;
    for value in [
        instance.node_count as u64,
        instance.target_count as u64,
        instance.depot_id as u64,
        instance.drone_endurance as u64,
        instance.begin_time as u64,
        instance.end_time as u64,
        instance.fleet_size as u64,
    ] {
        write!(out, "{}\t", value)?;
    }
    writeln!(out)?;
    writeln!(out, "{}", NODES_LINE)?;
    for node in &instance.nodes {
        write!(out, "{}\t", node.id)?;
        for time in &node.travel_times {
            write!(out, "{}\t", time)?;
        }
        writeln!(out, "{}\t{}\t", node.begin, node.period)?;
    }
    Ok(())
}

pub fn write_instance_file(instance: &Instance, path: &Path) -> Result<()> {
    let io_err = |source| InstanceError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    let mut out = BufWriter::new(File::create(path).map_err(io_err)?);
    write_instance(instance, &mut out).map_err(io_err)?;
    out.flush().map_err(io_err)?;
    info!("Wrote instance {}", path.display());
    Ok(())
}
