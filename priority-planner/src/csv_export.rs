use anyhow::{Context, Result};
use chrono::Utc;
use csv::Writer;
use tracing::{info, warn};

use timing::types::{NetworkInput, PlanReport};

/// Flat per-approach export of a computed plan, one file per run.
pub fn write_plan_csv(network: &NetworkInput, report: &PlanReport) -> Result<()> {
    let rows: usize = report.intersections.iter().map(|i| i.approaches.len()).sum();
    if rows == 0 {
        warn!("Plan contains no approaches, skipping CSV export");
        return Ok(());
    }

    std::fs::create_dir_all("logs").context("create logs directory")?;
    let timestamp = Utc::now().format("%Y%m%d_%H%M%S");
    let filename = format!("logs/plan_{timestamp}.csv");

    let mut writer = Writer::from_path(&filename).with_context(|| format!("open {filename}"))?;
    writer.write_record([
        "intersection_id",
        "approach",
        "priority_score",
        "green_seconds",
        "amber_seconds",
        "all_red_seconds",
        "emergency",
    ])?;

    for plan in &report.intersections {
        let sensors = network.intersections.get(&plan.intersection_id);
        for approach in &plan.approaches {
            let emergency = sensors
                .and_then(|map| map.get(&approach.approach))
                .is_some_and(|s| s.emergency);

            writer.write_record(&[
                plan.intersection_id.clone(),
                approach.approach.clone(),
                approach.priority_score.to_string(),
                approach.green_seconds.to_string(),
                approach.amber_seconds.to_string(),
                approach.all_red_seconds.to_string(),
                emergency.to_string(),
            ])?;
        }
    }

    writer.flush()?;
    info!("Plan exported to {} with {} rows", filename, rows);
    Ok(())
}
