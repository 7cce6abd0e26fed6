// farm/utils/schedule.rs

use anchor_lang::prelude::*;

use crate::errors::FarmError;

/// Block-height driven emission weight with a bonus window.
///
/// Blocks before `bonus_end_block` emit at `bonus_multiplier` times the base
/// rate, later blocks at the base rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmissionSchedule {
    pub start_block: u64,
    pub bonus_end_block: u64,
    pub bonus_multiplier: u64,
}

impl EmissionSchedule {
    /// Total emission weight of the half-open block range `[from, to)`.
    pub fn multiplier(&self, from: u64, to: u64) -> Result<u64> {
        if to <= from {
            return Ok(0);
        }

        let bonus_end = self.bonus_end_block;

        if to <= bonus_end {
            (to - from)
                .checked_mul(self.bonus_multiplier)
                .ok_or_else(|| error!(FarmError::MathOverflow))
        } else if from >= bonus_end {
            Ok(to - from)
        } else {
            (bonus_end - from)
                .checked_mul(self.bonus_multiplier)
                .and_then(|bonus| bonus.checked_add(to - bonus_end))
                .ok_or_else(|| error!(FarmError::MathOverflow))
        }
    }

    /// First block a freshly registered pool accrues from.
    pub fn first_block(&self, current_block: u64) -> u64 {
        current_block.max(self.start_block)
    }
}

/// Current block height as seen by the runtime.
pub fn current_block() -> Result<u64> {
    Ok(Clock::get()?.slot)
}
