// farm/instructions/open/pending_reward.rs

// external dependencies
use anchor_lang::prelude::*;

// local dependencies
use crate::{
    state::{Global, Pool, Position, GLOBAL_SEED, POOL_SEED, POSITION_SEED},
    utils::schedule::current_block,
};

#[derive(Accounts)]
pub struct PendingReward<'info> {
    #[account(
        seeds = [GLOBAL_SEED],
        bump = global_account.bump,
    )]
    pub global_account: Account<'info, Global>,

    #[account(
        seeds = [POOL_SEED, &pool.pool_id.to_le_bytes()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,

    #[account(
        seeds = [POSITION_SEED, pool.key().as_ref(), position.owner.as_ref()],
        bump = position.bump,
    )]
    pub position: Account<'info, Position>,
}

/// Reward the position would harvest in the current block.
pub fn handler(ctx: Context<PendingReward>) -> Result<u64> {
    // Settle a copy so nothing is written back
    let mut pool = Pool::clone(&ctx.accounts.pool);
    pool.settle(&ctx.accounts.global_account, current_block()?)?;

    ctx.accounts.position.pending_reward(&pool)
}
