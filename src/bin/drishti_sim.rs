//! Headless coverage search simulation.
//!
//! Usage:
//!   cargo run --bin drishti-sim -- --agents 4 --pattern spiral
//!   cargo run --bin drishti-sim -- --config configs/drishti.yaml --yaml
//!
//! Enable debug logging to see per-agent planning and coverage passes:
//!   RUST_LOG=debug cargo run --bin drishti-sim

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info, warn};

use drishti::config::DrishtiConfig;
use drishti::planning::PatternKind;
use drishti::sim::ScenarioRunner;

/// Swarm coverage search simulation
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = drishti::config::DEFAULT_CONFIG_PATH)]
    config: String,

    /// Override the number of agents
    #[arg(short, long)]
    agents: Option<usize>,

    /// Override the sweep pattern (horizontal, vertical, diagonal, spiral)
    #[arg(short, long)]
    pattern: Option<PatternKind>,

    /// Override the tick limit
    #[arg(long)]
    max_ticks: Option<u64>,

    /// Override the tick length in seconds
    #[arg(long)]
    dt: Option<f32>,

    /// Print the report as YAML
    #[arg(long)]
    yaml: bool,

    /// Print the effective configuration and exit
    #[arg(long)]
    dump_config: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config_path = Path::new(&args.config);
    let mut config = if config_path.exists() {
        match DrishtiConfig::load(config_path) {
            Ok(config) => config,
            Err(e) => {
                error!("Failed to load {}: {}", config_path.display(), e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        warn!("Config {} not found, using defaults", config_path.display());
        DrishtiConfig::default()
    };

    if let Some(agents) = args.agents {
        config.swarm.agent_count = agents;
    }
    if let Some(pattern) = args.pattern {
        config.planner.pattern = pattern;
    }
    if let Some(max_ticks) = args.max_ticks {
        config.run.max_ticks = max_ticks;
    }
    if let Some(dt) = args.dt {
        config.run.dt = dt;
    }

    if args.dump_config {
        return match config.to_yaml() {
            Ok(yaml) => {
                print!("{yaml}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!("{e}");
                ExitCode::FAILURE
            }
        };
    }

    info!(
        "Searching {:.0}x{:.0}m with {} agents ({} sweep)",
        config.area.size.x, config.area.size.z, config.swarm.agent_count, config.planner.pattern
    );

    let report = match ScenarioRunner::new(config).run() {
        Ok(report) => report,
        Err(e) => {
            error!("Scenario failed ({}): {}", e.code(), e);
            return ExitCode::FAILURE;
        }
    };

    if args.yaml {
        match serde_yaml::to_string(&report) {
            Ok(yaml) => print!("{yaml}"),
            Err(e) => {
                error!("Failed to serialize report: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{report}");
    }

    ExitCode::SUCCESS
}
