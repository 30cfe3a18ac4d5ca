use std::{fs, path::Path};

use anyhow::{Context, Result};
use tracing::info;

use timing::green::compute_timings;
use timing::input::load_sensor_readings;
use timing::report::render_timings;

pub fn run(input: &Path, output: &Path) -> Result<()> {
    let sensors = load_sensor_readings(input)?;
    info!("Loaded {} intersections from {}", sensors.len(), input.display());

    let timings = compute_timings(&sensors);
    let bottlenecks = timings.values().filter(|t| t.bottleneck).count();
    if bottlenecks > 0 {
        info!("{} of {} intersections flagged as bottlenecks", bottlenecks, timings.len());
    }

    fs::write(output, render_timings(&timings)).with_context(|| format!("write {:?}", output))?;
    println!("Results written to {}", output.display());

    Ok(())
}
