// farm/state/global.rs

use anchor_lang::prelude::*;

use crate::{errors::FarmError, utils::schedule::EmissionSchedule};

#[constant]
pub const GLOBAL_SEED: &[u8] = b"global";

#[constant]
pub const REWARD_VAULT_SEED: &[u8] = b"reward_vault";

#[account]
#[derive(InitSpace)]
pub struct Global {
    pub admin: Pubkey,         // can register pools and change weights
    pub beneficiary: Pubkey,   // receives the operator share of every emission
    pub reward_mint: Pubkey,   // minted by this account's PDA
    pub reward_vault: Pubkey,  // holds minted rewards until they are harvested
    pub reward_per_block: u64, // base emission rate across all pools
    pub start_block: u64,
    pub bonus_end_block: u64,
    pub bonus_multiplier: u64,
    pub total_weight: u64, // sum of all pool weights
    pub pool_count: u64,
    pub bump: u8,
    pub reward_vault_bump: u8,
}

impl Global {
    pub fn schedule(&self) -> EmissionSchedule {
        EmissionSchedule {
            start_block: self.start_block,
            bonus_end_block: self.bonus_end_block,
            bonus_multiplier: self.bonus_multiplier,
        }
    }

    /// Reward owed to a pool of `weight` for the blocks `[from, to)`.
    ///
    /// The weight is applied before dividing by the total weight so that
    /// truncation happens once, at the end.
    pub fn pool_reward(&self, from: u64, to: u64, weight: u64) -> Result<u64> {
        if self.total_weight == 0 {
            return Ok(0);
        }

        let multiplier = self.schedule().multiplier(from, to)?;

        let reward = (multiplier as u128)
            .checked_mul(self.reward_per_block.into())
            .ok_or(FarmError::MathOverflow)?
            .checked_mul(weight.into())
            .ok_or(FarmError::MathOverflow)?
            .checked_div(self.total_weight.into())
            .ok_or(FarmError::MathOverflow)?;

        u64::try_from(reward).map_err(|_| error!(FarmError::MathOverflow))
    }

    pub fn add_weight(&mut self, weight: u64) -> Result<()> {
        self.total_weight = self
            .total_weight
            .checked_add(weight)
            .ok_or(FarmError::MathOverflow)?;
        Ok(())
    }

    /// Replaces `old_weight` with `new_weight` in the running total.
    pub fn replace_weight(&mut self, old_weight: u64, new_weight: u64) -> Result<()> {
        self.total_weight = self
            .total_weight
            .checked_sub(old_weight)
            .and_then(|total| total.checked_add(new_weight))
            .ok_or(FarmError::MathOverflow)?;
        Ok(())
    }
}
