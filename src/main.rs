use anyhow::Context;
use clap::Parser;
use csv::Writer;
use hifitime::Duration;
use orbitsim::config::ScenarioConfig;
use orbitsim::physics::energy::specific_angular_momentum;
use std::fs::{self, File};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Headless Jupiter flyby: steps the scenario and records one row per frame.
#[derive(Parser, Debug)]
#[command(name = "orbitsim", version, about)]
struct Args {
    /// Scenario YAML file; built-in defaults when omitted
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// CSV output path
    #[arg(short, long, default_value = "output/simulation_data.csv")]
    output: PathBuf,

    /// Overrides the scenario's frame count
    #[arg(short, long)]
    frames: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let mut config = match &args.scenario {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open scenario {}", path.display()))?;
            ScenarioConfig::from_yaml_reader(file)
                .with_context(|| format!("failed to parse scenario {}", path.display()))?
        }
        None => ScenarioConfig::default(),
    };
    if let Some(frames) = args.frames {
        config.frames = frames;
    }

    let mut sim = config
        .build_simulator()
        .context("scenario does not describe valid orbits")?;
    let safe_altitude = config.safe_altitude();
    let steps_per_frame = config.steps_per_frame();

    if let Some(dir) = args.output.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    let mut writer = Writer::from_writer(File::create(&args.output)?);

    writer.write_record([
        "Elapsed",
        "Time (s)",
        "Satellite X (km)",
        "Satellite Y (km)",
        "Satellite Z (km)",
        "Comet X (km)",
        "Comet Y (km)",
        "Comet Z (km)",
        "Min Distance (km)",
        "Min Altitude (km)",
        "Energy Drift (m²/s²)",
        "Angular Momentum Error",
        "Status",
    ])?;

    let start_momentum = specific_angular_momentum(sim.satellite(), sim.primary());

    info!(
        frames = config.frames,
        steps_per_frame,
        warp = config.warp,
        "starting flyby"
    );

    for frame in 0..config.frames {
        if !sim.status(safe_altitude).is_safe() {
            warn!(frame, "satellite burned, stopping");
            break;
        }

        for _ in 0..steps_per_frame {
            sim.step();
        }

        let diagnostics = sim.diagnostics();
        let satellite = sim.satellite().position / 1000.0;
        let comet = sim.comet().position / 1000.0;
        let momentum_error = (specific_angular_momentum(sim.satellite(), sim.primary())
            - start_momentum)
            .magnitude()
            / start_momentum.magnitude();

        writer.write_record(&[
            Duration::from_seconds(sim.elapsed()).to_string(),
            sim.elapsed().to_string(),
            satellite.x.to_string(),
            satellite.y.to_string(),
            satellite.z.to_string(),
            comet.x.to_string(),
            comet.y.to_string(),
            comet.z.to_string(),
            (diagnostics.min_distance / 1000.0).to_string(),
            (diagnostics.min_altitude / 1000.0).to_string(),
            diagnostics.energy_drift.to_string(),
            momentum_error.to_string(),
            sim.status(safe_altitude).to_string(),
        ])?;
    }

    writer.flush()?;
    let diagnostics = sim.diagnostics();
    info!(
        steps = sim.steps(),
        min_distance_km = diagnostics.min_distance / 1000.0,
        min_altitude_km = diagnostics.min_altitude / 1000.0,
        energy_drift = diagnostics.energy_drift,
        status = %sim.status(safe_altitude),
        "simulation data has been written to {}",
        args.output.display()
    );

    Ok(())
}
