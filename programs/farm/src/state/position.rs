// farm/state/position.rs

use anchor_lang::prelude::*;

use crate::{
    constants::ACC_REWARD_PRECISION, errors::FarmError, state::Pool, utils::math::mul_div,
};

#[constant]
pub const POSITION_SEED: &[u8] = b"position";

/// A user's stake in one pool. Positions are kept after a full withdrawal.
#[account]
#[derive(InitSpace)]
pub struct Position {
    pub pool: Pubkey,
    pub owner: Pubkey,
    pub deposited_amount: u64,
    pub reward_debt: u128, // reward already accounted for at the pool's accumulator
    pub bump: u8,
}

// Every method below expects `pool` to be settled to the current block.
impl Position {
    pub fn is_initialized(&self) -> bool {
        self.owner != Pubkey::default()
    }

    fn accrued(&self, pool: &Pool) -> Result<u128> {
        mul_div(
            self.deposited_amount.into(),
            pool.acc_reward_per_unit,
            ACC_REWARD_PRECISION,
        )
    }

    /// Reward earned since the last checkpoint.
    pub fn pending_reward(&self, pool: &Pool) -> Result<u64> {
        let pending = self
            .accrued(pool)?
            .checked_sub(self.reward_debt)
            .ok_or(FarmError::MathOverflow)?;

        u64::try_from(pending).map_err(|_| error!(FarmError::MathOverflow))
    }

    fn checkpoint(&mut self, pool: &Pool) -> Result<()> {
        self.reward_debt = self.accrued(pool)?;
        Ok(())
    }

    /// Adds `amount` to the stake and returns the reward to pay out.
    pub fn deposit(&mut self, pool: &mut Pool, amount: u64) -> Result<u64> {
        let pending = self.pending_reward(pool)?;

        if amount > 0 {
            self.deposited_amount = self
                .deposited_amount
                .checked_add(amount)
                .ok_or(FarmError::MathOverflow)?;
            pool.add_deposit(amount)?;
        }

        self.checkpoint(pool)?;

        Ok(pending)
    }

    /// Removes `amount` from the stake and returns the reward to pay out.
    /// Nothing changes when the stake is too small.
    pub fn withdraw(&mut self, pool: &mut Pool, amount: u64) -> Result<u64> {
        require!(
            amount <= self.deposited_amount,
            FarmError::InsufficientStake
        );

        let pending = self.pending_reward(pool)?;

        if amount > 0 {
            self.deposited_amount -= amount;
            pool.remove_deposit(amount)?;
        }

        self.checkpoint(pool)?;

        Ok(pending)
    }

    /// Drops the whole stake without paying rewards, returning the amount.
    pub fn abandon(&mut self, pool: &mut Pool) -> Result<u64> {
        let amount = self.deposited_amount;

        pool.remove_deposit(amount)?;
        self.deposited_amount = 0;
        self.reward_debt = 0;

        Ok(amount)
    }
}
