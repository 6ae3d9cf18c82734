//! Headless runner and batch sweep harness for the forest fire simulation.
//!
//! A consumer of the core engine's public `step()`/`running` contract:
//! single runs print per-step statistics and can persist the log to CSV or
//! JSON; sweep mode varies density across a value list, runs several
//! iterations per value in parallel, and writes one combined CSV of all
//! per-step records with the parameters echoed into each row.

use std::error::Error;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use rayon::prelude::*;

use forest_fire_core::{
    Adjacency, ForestFire, SimulationParameters, StatsCollector, StepSnapshot,
};

/// Forest fire simulation runner with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "forest-fire-demo")]
#[command(about = "Headless forest fire simulation runner", long_about = None)]
struct Args {
    /// Grid width in cells
    #[arg(long, default_value_t = 100)]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value_t = 100)]
    height: usize,

    /// Probability that a position holds a tree
    #[arg(short, long, default_value_t = 0.65)]
    density: f64,

    /// Probability that a non-edge tree starts humidity-saturated
    #[arg(long, default_value_t = 0.5)]
    humidity: f64,

    /// Probability that a non-edge tree starts wind-stressed
    #[arg(short, long, default_value_t = 0.1)]
    wind: f64,

    /// Random seed
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Use 8-neighbor adjacency instead of the 4-neighbor default
    #[arg(long)]
    moore: bool,

    /// Stop after this many steps (0 = run until the fire is out)
    #[arg(short, long, default_value_t = 0)]
    max_steps: u64,

    /// Print a progress report every N steps
    #[arg(short, long, default_value_t = 10)]
    report_interval: u64,

    /// Write the per-step statistics to this CSV file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write the statistics log to this JSON file
    #[arg(long)]
    json: Option<PathBuf>,

    /// Run a parameter sweep instead of a single simulation
    #[arg(long)]
    sweep: bool,

    /// Density values visited by the sweep
    #[arg(long, value_delimiter = ',', default_values_t = [0.65, 0.75, 0.85, 0.95])]
    densities: Vec<f64>,

    /// Runs per density value in a sweep
    #[arg(short, long, default_value_t = 2)]
    iterations: u64,

    /// Directory receiving sweep result files
    #[arg(long, default_value = "results")]
    results_dir: PathBuf,
}

impl Args {
    fn adjacency(&self) -> Adjacency {
        if self.moore {
            Adjacency::Moore
        } else {
            Adjacency::Orthogonal
        }
    }

    fn step_budget(&self) -> u64 {
        if self.max_steps == 0 {
            u64::MAX
        } else {
            self.max_steps
        }
    }

    fn parameters(&self, density: f64, seed: u64) -> Result<SimulationParameters, Box<dyn Error>> {
        let mut params =
            SimulationParameters::new(self.width, self.height, density, self.humidity, self.wind, seed)?;
        params.adjacency = self.adjacency();
        Ok(params)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let result = if args.sweep {
        run_sweep(&args)
    } else {
        run_single(&args)
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Run one simulation to completion (or the step budget), reporting as it goes.
fn run_single(args: &Args) -> Result<(), Box<dyn Error>> {
    println!("=== Forest Fire Simulation ===\n");

    let params = args.parameters(args.density, args.seed)?;
    let mut sim = ForestFire::new(params)?;
    println!(
        "Created {}x{} grid with {} trees ({} burning)",
        args.width,
        args.height,
        sim.tree_count(),
        sim.burning_count()
    );

    let mut collector = StatsCollector::new();
    collector.collect(&sim);

    let budget = args.step_budget();
    while sim.running() && sim.steps() < budget {
        sim.step();
        let snapshot = collector.collect(&sim);
        if args.report_interval > 0 && sim.steps() % args.report_interval == 0 {
            println!(
                "step {:>4}: burning={} burned_out={} unignited={} inert={}",
                snapshot.step, snapshot.burning, snapshot.burned_out, snapshot.unignited, snapshot.inert
            );
        }
    }

    print_summary(&sim, &collector);

    if let Some(path) = &args.output {
        write_run_csv(path, &collector)?;
        println!("Wrote {}", path.display());
    }
    if let Some(path) = &args.json {
        collector.save_json(path)?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}

fn print_summary(sim: &ForestFire, collector: &StatsCollector) {
    println!("\n=== Summary ===");
    println!(
        "{} after {} steps",
        if sim.running() { "Stopped" } else { "Fire out" },
        sim.steps()
    );
    if let Some(last) = collector.last() {
        for (name, count) in [
            ("Unignited", last.unignited),
            ("PreIgnition", last.pre_ignition),
            ("Burning", last.burning),
            ("BurnedOut", last.burned_out),
            ("Inert", last.inert),
        ] {
            println!("  {name:<12} {count}");
        }
        println!("  Soil acidified: {} / {}", last.acidified_soil, last.tree_count());
    }
}

/// One planned simulation of a sweep.
struct SweepRun {
    run: u64,
    params: SimulationParameters,
}

/// The collected outcome of one sweep run.
struct SweepResult {
    run: u64,
    params: SimulationParameters,
    snapshots: Vec<StepSnapshot>,
}

/// Vary density across the configured values, `iterations` runs per value,
/// and persist every per-step record into one CSV.
fn run_sweep(args: &Args) -> Result<(), Box<dyn Error>> {
    println!("=== Forest Fire Parameter Sweep ===\n");
    println!(
        "densities={:?} humidity={} wind={} iterations={}",
        args.densities, args.humidity, args.wind, args.iterations
    );

    // Validate the whole plan up front; each run gets a distinct seed
    // derived from the base seed so results stay reproducible
    let mut plan = Vec::new();
    for &density in &args.densities {
        for _ in 0..args.iterations {
            let run = plan.len() as u64;
            let params = args.parameters(density, args.seed.wrapping_add(run))?;
            plan.push(SweepRun { run, params });
        }
    }

    let budget = args.step_budget();
    let results: Result<Vec<SweepResult>, forest_fire_core::ConfigError> = plan
        .par_iter()
        .map(|planned| {
            let mut sim = ForestFire::new(planned.params.clone())?;
            let mut collector = StatsCollector::new();
            collector.collect(&sim);
            while sim.running() && sim.steps() < budget {
                sim.step();
                collector.collect(&sim);
            }
            Ok(SweepResult {
                run: planned.run,
                params: planned.params.clone(),
                snapshots: collector.snapshots().to_vec(),
            })
        })
        .collect();
    let results = results?;

    for result in &results {
        let last = result.snapshots.last();
        println!(
            "run {:>3}: density={:.2} seed={} steps={} burned_out={}",
            result.run,
            result.params.density,
            result.params.seed,
            result.snapshots.len().saturating_sub(1),
            last.map_or(0, |s| s.burned_out)
        );
    }

    fs::create_dir_all(&args.results_dir)?;
    let file_name = format!("model_data_{}_{}.csv", args.humidity, args.wind);
    let path = args.results_dir.join(file_name);
    write_sweep_csv(&path, &results)?;
    println!("\nWrote {}", path.display());

    Ok(())
}

fn write_run_csv(path: &Path, collector: &StatsCollector) -> std::io::Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    writeln!(file, "{}", StepSnapshot::CSV_HEADER)?;
    for snapshot in collector.snapshots() {
        writeln!(file, "{}", snapshot.csv_row())?;
    }
    file.flush()
}

fn write_sweep_csv(path: &Path, results: &[SweepResult]) -> std::io::Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    writeln!(
        file,
        "run,density,humidity,wind,seed,{}",
        StepSnapshot::CSV_HEADER
    )?;
    for result in results {
        for snapshot in &result.snapshots {
            writeln!(
                file,
                "{},{},{},{},{},{}",
                result.run,
                result.params.density,
                result.params.humidity,
                result.params.wind,
                result.params.seed,
                snapshot.csv_row()
            )?;
        }
    }
    file.flush()
}
