//! Sentinel CLI.
//!
//! - `sentinel check <files>...` - load behavior files and report their size
//! - `sentinel simulate <behavior> --scenario <file>` - run a headless grid simulation

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use sentinel_cli::{load_behavior, Scenario, Simulation};

#[derive(Parser)]
#[command(name = "sentinel")]
#[command(about = "Behavior-tree AI for grid agents", version)]
struct Cli {
    /// Verbose output (per-frame logs)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load behavior files with the built-in actions and conditions
    Check {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Run one agent through a scenario
    Simulate {
        behavior: PathBuf,

        #[arg(long)]
        scenario: PathBuf,

        #[arg(long, default_value_t = 600)]
        frames: u64,

        /// Frame length in seconds
        #[arg(long, default_value_t = 1.0 / 60.0)]
        dt: f32,

        /// Overrides the scenario seed
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Commands::Check { files } => check(&files),
        Commands::Simulate {
            behavior,
            scenario,
            frames,
            dt,
            seed,
        } => simulate(&behavior, &scenario, frames, dt, seed),
    }
}

fn check(files: &[PathBuf]) -> Result<()> {
    for path in files {
        let root = load_behavior(path)?;
        println!("{}: ok ({} nodes)", path.display(), root.count());
    }
    Ok(())
}

fn simulate(
    behavior: &Path,
    scenario_path: &Path,
    frames: u64,
    dt: f32,
    seed: Option<u64>,
) -> Result<()> {
    if !(dt.is_finite() && dt > 0.0) {
        bail!("--dt must be a positive number of seconds, got {dt}");
    }

    let root = load_behavior(behavior)?;
    let scenario = Scenario::from_file(scenario_path)?;
    let seed = seed.unwrap_or(scenario.seed);
    tracing::info!(
        behavior = %behavior.display(),
        scenario = %scenario_path.display(),
        nodes = root.count(),
        seed,
        "Starting simulation"
    );

    let mut sim = Simulation::new(scenario, root, seed)?;
    let summary = sim.run(frames, dt).clone();

    println!("Simulation summary");
    println!("==================");
    println!();
    println!("Frames: {} ({:.2}s)", summary.frames, summary.frames as f32 * dt);
    println!(
        "Root status: {} running, {} success, {} failure",
        summary.running, summary.success, summary.failure
    );
    if let Some(status) = summary.final_status {
        println!("Final status: {status}");
    }
    if let Some(cell) = summary.final_cell {
        println!("Final cell: {cell} (moved {} times)", summary.cells_moved);
    }
    println!("Frames with player in sight: {}", summary.frames_seeing_player);
    println!("Sensor samples: {}", sim.controller().sensor_samples());
    println!();
    println!("Recent decisions:");
    for note in sim.controller().blackboard().debug_notes().iter().rev().take(5).rev() {
        println!("  {note}");
    }

    Ok(())
}
