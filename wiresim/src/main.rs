use wiresim::{ScenarioConfig, Scenario};
use wiresim::{run_sweep, render};
use wiresim::{bench_t_final, bench_dt_convergence};

use clap::Parser;
use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, default_value = "reference.yaml")]
    file_name: String,

    /// Time the integrator instead of running the scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse {}", config_path.display()))?;

    tracing::debug!(?scenario_cfg, "scenario loaded");

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    if args.bench {
        bench_t_final()?;
        bench_dt_convergence()?;
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg)?;
    tracing::info!(shapes = scenario.shapes.len(), "running sweep");

    let outcomes = run_sweep(&scenario)?;
    print!("{}", render(&scenario.parameters, &outcomes));

    Ok(())
}
