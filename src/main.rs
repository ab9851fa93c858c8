use nbsim::{write_trajectory, Engine, Scenario, ScenarioConfig};
use nbsim::{bench_forces, bench_step_curve};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(about = "N-body gravity simulator with leapfrog-style stepping")]
struct Args {
    /// Scenario YAML file
    #[arg(short, long, default_value = "scenario.yaml")]
    config: PathBuf,

    /// Trajectory CSV destination; stdout if omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Run the timing benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,
}

fn load_scenario(path: &Path) -> Result<ScenarioConfig> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let reader = BufReader::new(file);
    let cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(cfg)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.bench {
        bench_forces();
        bench_step_curve();
        return Ok(());
    }

    let cfg = load_scenario(&args.config)?;
    info!("loaded scenario from {}", args.config.display());

    // Particles files sit next to the scenario that names them
    let base = args.config.parent().unwrap_or_else(|| Path::new("."));
    let scenario = Scenario::build(cfg, base)?;

    let mut engine = Engine::new(scenario)?;
    engine.run();

    let out: Box<dyn Write> = match &args.output {
        Some(path) => {
            Box::new(File::create(path).with_context(|| format!("creating {}", path.display()))?)
        }
        None => Box::new(io::stdout().lock()),
    };
    let mut out = BufWriter::new(out);
    write_trajectory(&mut out, engine.parameters(), engine.trajectory())?;
    out.flush()?;

    Ok(())
}
