//! Queue-weighted green time recommendation, one pass per intersection.

use std::collections::BTreeMap;

use crate::constants::{
    BOTTLENECK_QUEUE, BOTTLENECK_VEHICLES, MAX_GREEN_SECONDS, MIN_GREEN_SECONDS, QUEUE_WEIGHT,
};
use crate::types::{IntersectionTiming, SensorMap, SensorReading};

/// Green time grows with the standing queue and, more slowly, with the
/// raw vehicle count. Always lands inside [MIN, MAX] whatever the input.
#[must_use]
pub fn recommend_green_time(reading: &SensorReading) -> u32 {
    reading
        .queue_length
        .saturating_mul(QUEUE_WEIGHT)
        .saturating_add(reading.vehicles / 2)
        .clamp(MIN_GREEN_SECONDS, MAX_GREEN_SECONDS)
}

#[must_use]
pub fn is_bottleneck(reading: &SensorReading) -> bool {
    reading.queue_length > BOTTLENECK_QUEUE || reading.vehicles > BOTTLENECK_VEHICLES
}

#[must_use]
pub fn compute_timings(sensors: &SensorMap) -> BTreeMap<String, IntersectionTiming> {
    sensors
        .iter()
        .map(|(id, reading)| {
            let timing = IntersectionTiming {
                vehicle_count: reading.vehicles,
                queue_length: reading.queue_length,
                recommended_green_time: recommend_green_time(reading),
                bottleneck: is_bottleneck(reading),
            };
            (id.clone(), timing)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(vehicles: u32, queue_length: u32) -> SensorReading {
        SensorReading { vehicles, queue_length }
    }

    #[test]
    fn green_time_stays_within_bounds() {
        for &(vehicles, queue) in &[
            (0, 0),
            (1, 1),
            (45, 3),
            (500, 0),
            (0, 500),
            (u32::MAX, u32::MAX),
        ] {
            let green = recommend_green_time(&reading(vehicles, queue));
            assert!(
                (MIN_GREEN_SECONDS..=MAX_GREEN_SECONDS).contains(&green),
                "green {green}s out of bounds for vehicles={vehicles} queue={queue}"
            );
        }
    }

    #[test]
    fn light_demand_clamps_to_floor() {
        // 3 * 2 + 45 / 2 = 28, below the 30s floor
        assert_eq!(recommend_green_time(&reading(45, 3)), 30);
    }

    #[test]
    fn heavy_demand_clamps_to_ceiling() {
        assert_eq!(recommend_green_time(&reading(200, 80)), 120);
    }

    #[test]
    fn mid_range_demand_is_unclamped() {
        // 20 * 2 + 30 / 2 = 55
        assert_eq!(recommend_green_time(&reading(30, 20)), 55);
    }

    #[test]
    fn bottleneck_thresholds_are_strict() {
        assert!(!is_bottleneck(&reading(40, 5)));
        assert!(is_bottleneck(&reading(41, 5)));
        assert!(is_bottleneck(&reading(40, 6)));
        assert!(is_bottleneck(&reading(45, 3)));
    }

    #[test]
    fn timings_echo_the_raw_readings() {
        let mut sensors = SensorMap::new();
        sensors.insert("A1".into(), reading(45, 3));
        sensors.insert("B2".into(), reading(10, 12));

        let timings = compute_timings(&sensors);
        assert_eq!(timings.len(), 2);

        let a1 = &timings["A1"];
        assert_eq!(a1.vehicle_count, 45);
        assert_eq!(a1.queue_length, 3);
        assert_eq!(a1.recommended_green_time, 30);
        assert!(a1.bottleneck);

        // 12 * 2 + 10 / 2 = 29, clamped up to the floor
        let b2 = &timings["B2"];
        assert_eq!(b2.recommended_green_time, 30);
        assert!(b2.bottleneck);
    }
}
