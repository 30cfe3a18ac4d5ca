//! Report rendering: plain text for the queue recommender, pretty JSON
//! for the priority planner.

use std::collections::BTreeMap;

use anyhow::{Context, Result};

use crate::types::{IntersectionTiming, PlanReport};

#[must_use]
pub fn render_timings(timings: &BTreeMap<String, IntersectionTiming>) -> String {
    let mut out = String::new();
    for (id, timing) in timings {
        out.push_str(&format!("Intersection {id}:\n"));
        out.push_str(&format!("  Vehicles: {}\n", timing.vehicle_count));
        out.push_str(&format!("  Queue Length: {}\n", timing.queue_length));
        out.push_str(&format!(
            "  Recommended Green Time: {} seconds\n",
            timing.recommended_green_time
        ));
        out.push_str(&format!(
            "  Bottleneck: {}\n\n",
            if timing.bottleneck { "Yes" } else { "No" }
        ));
    }
    out
}

/// # Errors
pub fn render_plan(report: &PlanReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("serialize signal plan report")
}
