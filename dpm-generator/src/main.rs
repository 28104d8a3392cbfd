use anyhow::{anyhow, Result};
use clap::{arg, value_parser, ArgAction, Command};
use dpm_generator::{run_batch, InstanceSummary};
use dpm_instances::read_instance;
use dpm_structs::{
    config::BatchConfig,
    presets::{preset, PRESET_NAMES},
};
use dpm_utils::{jsonify_pretty, load_json};
use std::{collections::BTreeMap, path::PathBuf};
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("dpm-generator")
        .about("Generates test instances for the periodic drone monitoring problem")
        .arg_required_else_help(true)
        .arg(
            arg!(-v --verbose "Log debug output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("generate")
                .about("Generates every instance type and version of a batch config")
                .arg(
                    arg!([CONFIG] "Batch config json string or path to json file")
                        .value_parser(value_parser!(String)),
                )
                .arg(
                    arg!(--preset [PRESET] "Preset used when no config is given")
                        .default_value("solomon")
                        .value_parser(value_parser!(String)),
                )
                .arg(
                    arg!(--seed [SEED] "Root seed. Drawn at random and logged if not set")
                        .value_parser(value_parser!(u64)),
                )
                .arg(
                    arg!(--output [OUTPUT_DIR] "Overrides the output directory")
                        .value_parser(value_parser!(PathBuf)),
                ),
        )
        .subcommand(
            Command::new("presets")
                .about("Prints preset batch configs as json")
                .arg(arg!([NAME] "Preset name").value_parser(value_parser!(String))),
        )
        .subcommand(
            Command::new("inspect")
                .about("Prints a summary of an instance file")
                .arg(
                    arg!(<INSTANCE> "Path to an instance file")
                        .value_parser(value_parser!(PathBuf)),
                ),
        )
}

fn main() {
    let matches = cli().get_matches();
    init_logging(matches.get_flag("verbose"));

    if let Err(e) = match matches.subcommand() {
        Some(("generate", sub_m)) => generate(
            sub_m.get_one::<String>("CONFIG").cloned(),
            sub_m.get_one::<String>("preset").unwrap().clone(),
            sub_m.get_one::<u64>("seed").cloned(),
            sub_m.get_one::<PathBuf>("output").cloned(),
        ),
        Some(("presets", sub_m)) => print_presets(sub_m.get_one::<String>("NAME").cloned()),
        Some(("inspect", sub_m)) => inspect(sub_m.get_one::<PathBuf>("INSTANCE").unwrap().clone()),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

pub fn generate(
    config: Option<String>,
    preset_name: String,
    seed: Option<u64>,
    output_dir: Option<PathBuf>,
) -> Result<()> {
    let mut config = match config {
        Some(config) => load_json::<BatchConfig>(&config)?,
        None => load_preset(&preset_name)?,
    };
    if seed.is_some() {
        config.seed = seed;
    }
    if let Some(output_dir) = output_dir {
        config.output_dir = output_dir;
    }

    let report = run_batch(&config);
    report.log_summary();
    if !report.missing_inputs.is_empty() {
        return Err(anyhow!(
            "Input files missing for instance types: {}",
            report.missing_inputs.join(", ")
        ));
    }
    Ok(())
}

pub fn print_presets(name: Option<String>) -> Result<()> {
    match name {
        Some(name) => println!("{}", jsonify_pretty(&load_preset(&name)?)),
        None => {
            let presets: BTreeMap<&str, BatchConfig> = PRESET_NAMES
                .iter()
                .filter_map(|&name| preset(name).map(|config| (name, config)))
                .collect();
            println!("{}", jsonify_pretty(&presets));
        }
    }
    Ok(())
}

pub fn inspect(path: PathBuf) -> Result<()> {
    let instance = read_instance(&path)?;
    println!("{}", jsonify_pretty(&InstanceSummary::from(&instance)));
    Ok(())
}

fn load_preset(name: &str) -> Result<BatchConfig> {
    preset(name).ok_or_else(|| {
        anyhow!(
            "Unknown preset '{}', expected one of: {}",
            name,
            PRESET_NAMES.join(", ")
        )
    })
}
