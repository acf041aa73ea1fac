//! Default value functions for serde deserialization.

pub fn cell_size() -> i32 {
    32
}

pub fn enabled() -> bool {
    true
}

pub fn diagonal_cost() -> f32 {
    std::f32::consts::SQRT_2
}

pub fn node_budget() -> usize {
    2_000
}

pub fn lookahead() -> usize {
    10
}

pub fn midpoint_threshold() -> usize {
    8
}
