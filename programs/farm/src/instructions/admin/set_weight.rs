// farm/instructions/admin/set_weight.rs

// external dependencies
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

// local dependencies
use crate::{
    errors::FarmError,
    state::{Global, Pool, GLOBAL_SEED, POOL_SEED, REWARD_VAULT_SEED},
    utils::{emission::RewardAccounts, pools::settle_pools, schedule::current_block},
};

#[derive(Accounts)]
pub struct SetWeight<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [GLOBAL_SEED],
        bump = global_account.bump,
        has_one = admin @ FarmError::NotAuthorized,
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

/// The re-weighted pool is always settled. With `update_rewards_first`, every
/// other pool must follow as a writable remaining account.
pub fn handler<'c: 'info, 'info>(
    ctx: Context<'_, '_, 'c, 'info, SetWeight<'info>>,
    weight: u64,
    update_rewards_first: bool,
) -> Result<()> {
    let current_block = current_block()?;

    let mut settlement = ctx
        .accounts
        .pool
        .settle(&ctx.accounts.global_account, current_block)?;

    if update_rewards_first {
        let others = settle_pools(
            ctx.remaining_accounts,
            &ctx.accounts.global_account,
            current_block,
            Some(ctx.accounts.pool.key()),
        )?;
        settlement = settlement.merge(others)?;
    }

    let old_weight = ctx.accounts.pool.weight;
    ctx.accounts
        .global_account
        .replace_weight(old_weight, weight)?;
    ctx.accounts.pool.weight = weight;

    RewardAccounts {
        global_account: &ctx.accounts.global_account,
        reward_mint: &ctx.accounts.reward_mint,
        reward_vault: &ctx.accounts.reward_vault,
        reward_token_program: &ctx.accounts.reward_token_program,
    }
    .mint_settlement(&settlement, &ctx.accounts.beneficiary_token_account)?;

    msg!(
        "Pool {} weight changed from {} to {}",
        ctx.accounts.pool.pool_id,
        old_weight,
        weight
    );

    emit!(PoolWeightSet {
        pool: ctx.accounts.pool.key(),
        old_weight,
        new_weight: weight,
        total_weight: ctx.accounts.global_account.total_weight,
    });

    Ok(())
}

#[event]
pub struct PoolWeightSet {
    pub pool: Pubkey,
    pub old_weight: u64,
    pub new_weight: u64,
    pub total_weight: u64,
}
