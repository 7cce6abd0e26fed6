// farm/constants.rs

pub const ANCHOR_DISCRIMINATOR_SIZE: usize = 8;

// Fixed-point scale of `Pool::acc_reward_per_unit`
pub const ACC_REWARD_PRECISION: u128 = 1_000_000_000_000; // 1e12

// The beneficiary receives one part in ten on top of every pool reward
pub const BENEFICIARY_SHARE_DIVISOR: u64 = 10;
