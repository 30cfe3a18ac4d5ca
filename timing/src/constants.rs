// Queue-weighted green recommendation (signal-timer).
pub const MIN_GREEN_SECONDS: u32 = 30;
pub const MAX_GREEN_SECONDS: u32 = 120;
pub const QUEUE_WEIGHT: u32 = 2;

pub const BOTTLENECK_QUEUE: u32 = 5;
pub const BOTTLENECK_VEHICLES: u32 = 40;

// Priority-weighted cycle split (priority-planner).
pub const CYCLE_SECONDS: u32 = 120;
pub const MIN_APPROACH_GREEN: u32 = 10;
pub const MAX_APPROACH_GREEN: u32 = 90;
pub const AMBER_SECONDS: u32 = 3;
pub const ALL_RED_SECONDS: u32 = 1;

// Flat bonus for any waiting pedestrians, not scaled by wait time.
pub const PEDESTRIAN_BONUS: u32 = 50;
// Large enough to outrank any realistic vehicle count.
pub const EMERGENCY_PRIORITY: u32 = 1000;

pub const POLICY_NAME: &str = "distributed_priority_v1";
pub const COORDINATION_NOTE: &str =
    "start primary approaches green in sync across the network";

pub const DEFAULT_INPUT: &str = "input.txt";
pub const DEFAULT_OUTPUT: &str = "output.txt";
