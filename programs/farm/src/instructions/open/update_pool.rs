// farm/instructions/open/update_pool.rs

// external dependencies
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

// local dependencies
use crate::{
    errors::FarmError,
    state::{Global, Pool, GLOBAL_SEED, POOL_SEED, REWARD_VAULT_SEED},
    utils::{emission::RewardAccounts, schedule::current_block},
};

#[derive(Accounts)]
pub struct UpdatePool<'info> {
    #[account(
        seeds = [GLOBAL_SEED],
        bump = global_account.bump,
        has_one = reward_mint @ FarmError::InvalidAccount,
    )]
    pub global_account: Account<'info, Global>,

    #[account(
        mut,
        seeds = [POOL_SEED, &pool.pool_id.to_le_bytes()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,

    #[account(mut)]
    pub reward_mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        seeds = [REWARD_VAULT_SEED],
        bump = global_account.reward_vault_bump,
    )]
    pub reward_vault: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        token::mint = reward_mint,
        constraint = beneficiary_token_account.owner == global_account.beneficiary
            @ FarmError::InvalidAccount,
    )]
    pub beneficiary_token_account: InterfaceAccount<'info, TokenAccount>,

    pub reward_token_program: Interface<'info, TokenInterface>,
}

pub fn handler(ctx: Context<UpdatePool>) -> Result<()> {
    let current_block = current_block()?;

    let settlement = ctx
        .accounts
        .pool
        .settle(&ctx.accounts.global_account, current_block)?;

    RewardAccounts {
        global_account: &ctx.accounts.global_account,
        reward_mint: &ctx.accounts.reward_mint,
        reward_vault: &ctx.accounts.reward_vault,
        reward_token_program: &ctx.accounts.reward_token_program,
    }
    .mint_settlement(&settlement, &ctx.accounts.beneficiary_token_account)?;

    msg!(
        "Settled pool {} at block {}",
        ctx.accounts.pool.pool_id,
        ctx.accounts.pool.last_settled_block
    );

    emit!(PoolSettled {
        pool: ctx.accounts.pool.key(),
        block: ctx.accounts.pool.last_settled_block,
        acc_reward_per_unit: ctx.accounts.pool.acc_reward_per_unit,
        reward: settlement.reward,
    });

    Ok(())
}

#[event]
pub struct PoolSettled {
    pub pool: Pubkey,
    pub block: u64,
    pub acc_reward_per_unit: u128,
    pub reward: u64,
}
