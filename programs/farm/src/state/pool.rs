// farm/state/pool.rs

use anchor_lang::prelude::*;

use crate::{
    constants::{ACC_REWARD_PRECISION, BENEFICIARY_SHARE_DIVISOR},
    errors::FarmError,
    state::Global,
    utils::math::mul_div,
};

#[constant]
pub const POOL_SEED: &[u8] = b"pool";

#[constant]
pub const POOL_VAULT_SEED: &[u8] = b"pool_vault";

#[constant]
pub const POOL_REGISTRATION_SEED: &[u8] = b"registration";

#[account]
#[derive(InitSpace)]
pub struct Pool {
    pub pool_id: u64,
    pub deposit_mint: Pubkey,
    pub vault: Pubkey, // holds deposits, owned by this pool's PDA
    pub weight: u64,
    pub last_settled_block: u64,
    pub acc_reward_per_unit: u128, // scaled by ACC_REWARD_PRECISION
    pub total_deposited: u64,      // sum of all positions in this pool
    pub bump: u8,
    pub vault_bump: u8,
}

/// Marks a deposit mint as taken so a second pool cannot register it.
#[account]
#[derive(InitSpace)]
pub struct PoolRegistration {
    pub pool: Pubkey,
    pub bump: u8,
}

/// Reward minted by one or more settlements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Settlement {
    /// Credited to depositors, minted into the reward vault.
    pub reward: u64,
    /// Minted to the beneficiary on top of `reward`.
    pub beneficiary_reward: u64,
}

impl Settlement {
    pub fn merge(self, other: Settlement) -> Result<Settlement> {
        Ok(Settlement {
            reward: self
                .reward
                .checked_add(other.reward)
                .ok_or(FarmError::MathOverflow)?,
            beneficiary_reward: self
                .beneficiary_reward
                .checked_add(other.beneficiary_reward)
                .ok_or(FarmError::MathOverflow)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.reward == 0 && self.beneficiary_reward == 0
    }
}

impl Pool {
    /// Brings the accumulator up to `current_block` and returns what has to be
    /// minted for it. Calling it again in the same block is a no-op.
    pub fn settle(&mut self, global: &Global, current_block: u64) -> Result<Settlement> {
        if current_block <= self.last_settled_block {
            return Ok(Settlement::default());
        }

        // Emission for an empty pool (or an empty farm) is never credited
        if self.total_deposited == 0 || global.total_weight == 0 {
            self.last_settled_block = current_block;
            return Ok(Settlement::default());
        }

        let reward = global.pool_reward(self.last_settled_block, current_block, self.weight)?;

        let increment = mul_div(
            reward.into(),
            ACC_REWARD_PRECISION,
            self.total_deposited.into(),
        )?;

        self.acc_reward_per_unit = self
            .acc_reward_per_unit
            .checked_add(increment)
            .ok_or(FarmError::MathOverflow)?;
        self.last_settled_block = current_block;

        Ok(Settlement {
            reward,
            beneficiary_reward: reward / BENEFICIARY_SHARE_DIVISOR,
        })
    }

    pub fn add_deposit(&mut self, amount: u64) -> Result<()> {
        self.total_deposited = self
            .total_deposited
            .checked_add(amount)
            .ok_or(FarmError::MathOverflow)?;
        Ok(())
    }

    pub fn remove_deposit(&mut self, amount: u64) -> Result<()> {
        self.total_deposited = self
            .total_deposited
            .checked_sub(amount)
            .ok_or(FarmError::MathOverflow)?;
        Ok(())
    }
}
