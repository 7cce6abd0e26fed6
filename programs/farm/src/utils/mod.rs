// farm/utils/mod.rs

pub mod emission;
pub mod math;
pub mod pools;
pub mod schedule;
pub mod token;
