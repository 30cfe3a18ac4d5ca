use std::{fs, path::Path};

use anyhow::{Context, Result};
use tracing::{info, warn};

use timing::input::load_network_input;
use timing::priority::plan_network;
use timing::report::render_plan;

use crate::csv_export;

pub fn run(input: &Path, output: &Path, csv: bool) -> Result<()> {
    let network = load_network_input(input)?;
    info!(
        "Planning {} intersections from {}",
        network.intersections.len(),
        input.display()
    );

    let report = plan_network(&network);
    for plan in &report.intersections {
        for note in &plan.notes {
            warn!("{}", note);
        }
    }

    fs::write(output, render_plan(&report)?).with_context(|| format!("write {:?}", output))?;
    println!("Wrote {} with computed signal plans", output.display());

    if csv {
        csv_export::write_plan_csv(&network, &report)?;
    }

    Ok(())
}
