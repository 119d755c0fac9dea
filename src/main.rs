//! Temperature sweeps of the 2D Ising model over a grid of couplings J
//! and fields h (see `Cli` below for all run parameters).

use anyhow::{bail, Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use ising_scan::output::{result_file_name, write_rows_to_path};
use ising_scan::scan::{field_values, grid};
use ising_scan::utils::rng::stream_rng;
use ising_scan::{run_simulation_with_rng, PhysicalInputs, SimulationParameters};
use log::info;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Lattice side length L
    #[arg(long, default_value_t = 8)]
    size: usize,

    /// First temperature of the schedule
    #[arg(long, default_value_t = 5.0)]
    t_start: f64,

    /// Last temperature of the schedule (inclusive)
    #[arg(long, default_value_t = 0.1)]
    t_end: f64,

    /// Number of temperature points
    #[arg(long, default_value_t = 10)]
    t_count: usize,

    /// Thermalization sweeps per copy and temperature
    #[arg(long, default_value_t = 15_000)]
    therm_sweeps: usize,

    /// Measurement sweeps per copy and temperature
    #[arg(long, default_value_t = 20_000)]
    measure_sweeps: usize,

    /// Independent lattice copies
    #[arg(long, default_value_t = 25)]
    copies: usize,

    /// Coupling values J
    #[arg(long, default_value = "1,-1", value_delimiter = ',', allow_hyphen_values = true)]
    couplings: Vec<f64>,

    /// Field range (min,max,step), max inclusive
    #[arg(long, default_value = "-5,5,1", value_delimiter = ',', allow_hyphen_values = true)]
    field_range: Vec<f64>,

    /// Output directory
    #[arg(long, default_value = "results")]
    output_dir: PathBuf,

    /// Master RNG seed (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// gnuplot script to run on every result file, once all runs have finished
    #[arg(long)]
    plot_script: Option<PathBuf>,

    /// Worker threads for the (J, h) runs (rayon default if omitted)
    #[arg(long)]
    jobs: Option<usize>,
}

impl Cli {
    fn params(&self) -> SimulationParameters {
        SimulationParameters {
            size:           self.size,
            t_start:        self.t_start,
            t_end:          self.t_end,
            t_count:        self.t_count,
            therm_sweeps:   self.therm_sweeps,
            measure_sweeps: self.measure_sweeps,
            copies:         self.copies,
        }
    }
}

fn plot(script: &Path, data: &Path) -> Result<()> {
    let status = Command::new("gnuplot")
        .arg("-e")
        .arg(format!("file='{}'", data.display()))
        .arg(script)
        .status()
        .context("cannot start gnuplot")?;
    if !status.success() {
        bail!("gnuplot failed for {}: {status}", data.display());
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    println!("Configuration:\n{cli:#?}");

    let params = cli.params();
    params.validate()?;

    if cli.couplings.is_empty() {
        bail!("at least one coupling value is required");
    }
    let &[h_min, h_max, h_step] = cli.field_range.as_slice() else {
        bail!("--field-range expects min,max,step, got {:?}", cli.field_range);
    };
    let pairs = grid(&cli.couplings, &field_values(h_min, h_max, h_step)?);

    if let Some(n) = cli.jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .context("cannot configure worker pool")?;
    }

    fs::create_dir_all(&cli.output_dir)
        .with_context(|| format!("cannot create {}", cli.output_dir.display()))?;

    let master = cli.seed.unwrap_or_else(rand::random);
    info!("{} (J, h) runs, master seed {master}", pairs.len());

    let bar = ProgressBar::new(pairs.len() as u64);
    bar.set_style(ProgressStyle::with_template(
        " {bar:40.cyan/blue} {pos}/{len} [{elapsed_precise}] {msg}",
    )?);

    // Runs are independent; copies and temperatures inside a run stay serial.
    let paths = pairs
        .par_iter()
        .enumerate()
        .map(|(idx, &(j, h))| -> Result<PathBuf> {
            let mut rng = stream_rng(master, idx);
            let rows = run_simulation_with_rng(PhysicalInputs { j, h }, &params, &mut rng)?;

            let path = cli.output_dir.join(result_file_name(j, h));
            write_rows_to_path(&path, &rows)
                .with_context(|| format!("cannot write {}", path.display()))?;

            bar.set_message(format!("J={j} h={h}"));
            bar.inc(1);
            Ok(path)
        })
        .collect::<Result<Vec<_>>>()?;
    bar.finish();

    if let Some(script) = &cli.plot_script {
        for path in &paths {
            plot(script, path)?;
        }
    } else {
        info!("no --plot-script given, skipping plots");
    }

    println!("Scan complete → {}", cli.output_dir.display());
    Ok(())
}
