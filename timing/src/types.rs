use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One intersection's reading from the queue sensors. Both fields are
/// required; a feed that drops either is rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorReading {
    pub vehicles: u32,
    pub queue_length: u32,
}

/// Per-approach sensor block. Detectors omit fields they have no data
/// for, so everything defaults to zero/false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApproachSensors {
    #[serde(default)]
    pub vehicle_count: u32,
    #[serde(default)]
    pub emergency: bool,
    #[serde(default)]
    pub pedestrian_wait: u32,
}

/// Intersection id -> reading. BTreeMap keeps iteration, and with it all
/// report ordering and tie-breaking, lexicographic.
pub type SensorMap = BTreeMap<String, SensorReading>;

/// Approach id -> sensor block for one intersection.
pub type ApproachMap = BTreeMap<String, ApproachSensors>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkInput {
    pub intersections: BTreeMap<String, ApproachMap>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntersectionTiming {
    pub vehicle_count: u32,
    pub queue_length: u32,
    pub recommended_green_time: u32,
    pub bottleneck: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApproachPlan {
    pub approach: String,
    pub priority_score: u32,
    pub green_seconds: u32,
    pub amber_seconds: u32,
    pub all_red_seconds: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntersectionPlan {
    pub intersection_id: String,
    pub approaches: Vec<ApproachPlan>,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordination {
    pub primary_approaches: BTreeMap<String, String>,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanReport {
    pub policy: String,
    pub intersections: Vec<IntersectionPlan>,
    pub coordination: Coordination,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approach_sensors_default_missing_fields() {
        let sensors: ApproachSensors = serde_json::from_str("{}").unwrap();
        assert_eq!(sensors, ApproachSensors::default());

        let sensors: ApproachSensors =
            serde_json::from_str(r#"{"emergency": true}"#).unwrap();
        assert!(sensors.emergency);
        assert_eq!(sensors.vehicle_count, 0);
        assert_eq!(sensors.pedestrian_wait, 0);
    }

    #[test]
    fn sensor_reading_rejects_missing_fields() {
        assert!(serde_json::from_str::<SensorReading>(r#"{"vehicles": 12}"#).is_err());
        assert!(serde_json::from_str::<SensorReading>(r#"{"queue_length": 3}"#).is_err());
    }

    #[test]
    fn network_input_requires_intersections_key() {
        assert!(serde_json::from_str::<NetworkInput>("{}").is_err());

        let input: NetworkInput = serde_json::from_str(
            r#"{"intersections": {"I1": {"N": {"vehicle_count": 4}}}}"#,
        )
        .unwrap();
        assert_eq!(input.intersections["I1"]["N"].vehicle_count, 4);
    }
}
