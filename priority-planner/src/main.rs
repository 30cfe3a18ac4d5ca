mod csv_export;
mod service;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use timing::constants::{DEFAULT_INPUT, DEFAULT_OUTPUT};

#[derive(Parser, Debug)]
#[command(author, version, about = "Priority-weighted signal plan generator")]
struct Cli {
    /// Network description, JSON with a top-level `intersections` map
    #[arg(long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Where to write the JSON plan report
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Also export the plan as a timestamped CSV under logs/
    #[arg(long)]
    csv: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    service::run(&cli.input, &cli.output, cli.csv)
}
