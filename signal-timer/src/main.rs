mod service;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use timing::constants::{DEFAULT_INPUT, DEFAULT_OUTPUT};

#[derive(Parser, Debug)]
#[command(author, version, about = "Queue-based signal timing recommender")]
struct Cli {
    /// Sensor readings, JSON keyed by intersection id
    #[arg(long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Where to write the plain-text report
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    service::run(&cli.input, &cli.output)
}
