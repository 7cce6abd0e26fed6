// farm/instructions/depositor/emergency_withdraw.rs

// external dependencies
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

// local dependencies
use crate::{
    errors::FarmError,
    state::{
        Global, Pool, Position, GLOBAL_SEED, POOL_SEED, POOL_VAULT_SEED, POSITION_SEED,
        REWARD_VAULT_SEED,
    },
    utils::{emission::RewardAccounts, schedule::current_block, token::release_from_vault},
};

#[derive(Accounts)]
pub struct EmergencyWithdraw<'info> {
    pub user: Signer<'info>,

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
        has_one = deposit_mint @ FarmError::InvalidAccount,
    )]
    pub pool: Account<'info, Pool>,

    #[account(
        mut,
        seeds = [POSITION_SEED, pool.key().as_ref(), user.key().as_ref()],
        bump = position.bump,
    )]
    pub position: Account<'info, Position>,

    pub deposit_mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        seeds = [POOL_VAULT_SEED, pool.key().as_ref()],
        bump = pool.vault_bump,
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        token::mint = deposit_mint,
        token::token_program = deposit_token_program,
    )]
    pub user_deposit_token_account: InterfaceAccount<'info, TokenAccount>,

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

    pub deposit_token_program: Interface<'info, TokenInterface>,

    pub reward_token_program: Interface<'info, TokenInterface>,
}

/// Returns the whole stake and forfeits pending reward.
pub fn handler(ctx: Context<EmergencyWithdraw>) -> Result<()> {
    let current_block = current_block()?;

    // Other depositors keep what the pool earned up to now
    let settlement = ctx
        .accounts
        .pool
        .settle(&ctx.accounts.global_account, current_block)?;

    let amount = ctx.accounts.position.abandon(&mut ctx.accounts.pool)?;

    RewardAccounts {
        global_account: &ctx.accounts.global_account,
        reward_mint: &ctx.accounts.reward_mint,
        reward_vault: &ctx.accounts.reward_vault,
        reward_token_program: &ctx.accounts.reward_token_program,
    }
    .mint_settlement(&settlement, &ctx.accounts.beneficiary_token_account)?;

    if amount > 0 {
        release_from_vault(
            &ctx.accounts.pool,
            &ctx.accounts.vault,
            &ctx.accounts.user_deposit_token_account,
            &ctx.accounts.deposit_mint,
            &ctx.accounts.deposit_token_program,
            amount,
        )?;
    }

    msg!(
        "Emergency withdrew {} from pool {}, reward forfeited",
        amount,
        ctx.accounts.pool.pool_id
    );

    emit!(EmergencyWithdrawn {
        user: ctx.accounts.user.key(),
        pool: ctx.accounts.pool.key(),
        amount,
    });

    Ok(())
}

#[event]
pub struct EmergencyWithdrawn {
    pub user: Pubkey,
    pub pool: Pubkey,
    pub amount: u64,
}
