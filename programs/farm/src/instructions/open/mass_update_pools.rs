// farm/instructions/open/mass_update_pools.rs

// external dependencies
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

// local dependencies
use crate::{
    errors::FarmError,
    state::{Global, GLOBAL_SEED, REWARD_VAULT_SEED},
    utils::{emission::RewardAccounts, pools::settle_pools, schedule::current_block},
};

#[derive(Accounts)]
pub struct MassUpdatePools<'info> {
    #[account(
        seeds = [GLOBAL_SEED],
        bump = global_account.bump,
        has_one = reward_mint @ FarmError::InvalidAccount,
    )]
    pub global_account: Account<'info, Global>,

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

/// Every pool has to be passed as a writable remaining account.
pub fn handler<'c: 'info, 'info>(
    ctx: Context<'_, '_, 'c, 'info, MassUpdatePools<'info>>,
) -> Result<()> {
    let current_block = current_block()?;

    let settlement = settle_pools(
        ctx.remaining_accounts,
        &ctx.accounts.global_account,
        current_block,
        None,
    )?;

    RewardAccounts {
        global_account: &ctx.accounts.global_account,
        reward_mint: &ctx.accounts.reward_mint,
        reward_vault: &ctx.accounts.reward_vault,
        reward_token_program: &ctx.accounts.reward_token_program,
    }
    .mint_settlement(&settlement, &ctx.accounts.beneficiary_token_account)?;

    msg!(
        "Settled {} pools at block {}",
        ctx.remaining_accounts.len(),
        current_block
    );

    Ok(())
}
