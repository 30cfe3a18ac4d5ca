//! Priority-weighted cycle split and cross-intersection coordination.

use std::collections::BTreeMap;

use tracing::debug;

use crate::constants::{
    ALL_RED_SECONDS, AMBER_SECONDS, COORDINATION_NOTE, CYCLE_SECONDS, EMERGENCY_PRIORITY,
    MAX_APPROACH_GREEN, MIN_APPROACH_GREEN, PEDESTRIAN_BONUS, POLICY_NAME,
};
use crate::types::{
    ApproachMap, ApproachPlan, ApproachSensors, Coordination, IntersectionPlan, NetworkInput,
    PlanReport,
};

/// An emergency vehicle outranks any realistic demand; waiting pedestrians
/// add a flat bonus regardless of how long they have waited.
#[must_use]
pub fn priority_score(sensors: &ApproachSensors) -> u32 {
    let mut score = sensors.vehicle_count;
    if sensors.pedestrian_wait > 0 {
        score = score.saturating_add(PEDESTRIAN_BONUS);
    }
    if sensors.emergency {
        score = score.saturating_add(EMERGENCY_PRIORITY);
    }
    score
}

/// Weight used for the cycle split. The floor of 1 keeps the denominator
/// nonzero and guarantees every approach a share of the cycle.
fn split_weight(score: u32) -> u64 {
    u64::from(score.max(1))
}

/// Split one cycle across the intersection's approaches in proportion to
/// their priority scores. Rounding and the per-approach clamp mean the
/// allocated greens need not sum to exactly one cycle; the deviation is
/// reported, not corrected.
#[must_use]
pub fn plan_intersection(intersection_id: &str, approaches: &ApproachMap) -> IntersectionPlan {
    let total_score: u64 = approaches
        .values()
        .map(|sensors| split_weight(priority_score(sensors)))
        .sum();

    let mut plans = Vec::with_capacity(approaches.len());
    let mut notes = Vec::new();

    for (approach, sensors) in approaches {
        let score = priority_score(sensors);
        let share = split_weight(score) as f64 / total_score as f64;
        let green = (share * f64::from(CYCLE_SECONDS)).round() as u32;

        plans.push(ApproachPlan {
            approach: approach.clone(),
            priority_score: score,
            green_seconds: green.clamp(MIN_APPROACH_GREEN, MAX_APPROACH_GREEN),
            amber_seconds: AMBER_SECONDS,
            all_red_seconds: ALL_RED_SECONDS,
        });

        if sensors.emergency {
            notes.push(format!("{intersection_id}:{approach} emergency priority"));
        }
    }

    let allocated: u32 = plans.iter().map(|p| p.green_seconds).sum();
    if !plans.is_empty() && allocated != CYCLE_SECONDS {
        debug!(
            "Intersection {} green split totals {}s against a {}s cycle",
            intersection_id, allocated, CYCLE_SECONDS
        );
    }

    IntersectionPlan {
        intersection_id: intersection_id.to_string(),
        approaches: plans,
        notes,
    }
}

/// Approach holding the single-pass strict maximum of the priority scores.
/// ApproachMap iterates in key order, so ties go to the lexicographically
/// smallest approach id.
#[must_use]
pub fn primary_approach(approaches: &ApproachMap) -> Option<&str> {
    let mut best: Option<(&str, u32)> = None;
    for (approach, sensors) in approaches {
        let score = priority_score(sensors);
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((approach, score)),
        }
    }
    best.map(|(approach, _)| approach)
}

#[must_use]
pub fn plan_network(input: &NetworkInput) -> PlanReport {
    let mut intersections = Vec::with_capacity(input.intersections.len());
    let mut primary_approaches = BTreeMap::new();

    for (id, approaches) in &input.intersections {
        intersections.push(plan_intersection(id, approaches));
        if let Some(approach) = primary_approach(approaches) {
            primary_approaches.insert(id.clone(), approach.to_string());
        }
    }

    PlanReport {
        policy: POLICY_NAME.to_string(),
        intersections,
        coordination: Coordination {
            primary_approaches,
            note: COORDINATION_NOTE.to_string(),
        },
    }
}
