use std::path::PathBuf;
use std::process;

use anyhow::Result;
use chrono::Utc;
use clap::Parser;

use benchsweep::config::SweepConfig;
use benchsweep::report::Reporter;
use benchsweep::sweep;

#[derive(Parser)]
#[command(
    name = "benchsweep",
    version,
    about = "Run a benchmark binary across the size sweep and report trimmed means"
)]
struct Cli {
    /// Benchmark binary to sweep (e.g. relu, convolution)
    benchmark: String,

    /// TOML file overriding the built-in sweep tables
    #[arg(long)]
    config: Option<PathBuf>,

    /// Emit one JSON document instead of the text trace
    #[arg(long)]
    json: bool,
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = SweepConfig::load(cli.config.as_deref())?;
    let reporter = Reporter::new(cli.json);
    let started_at = Utc::now();

    let outcome = sweep::run_sweep(&config, &cli.benchmark, &reporter)?;
    reporter.finish(&cli.benchmark, started_at, &outcome);

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{}", err);
        process::exit(1);
    }
}
