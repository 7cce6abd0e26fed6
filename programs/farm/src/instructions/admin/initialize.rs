// farm/instructions/admin/initialize.rs

// external dependencies
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use solana_program::program_option::COption;

// local dependencies
use crate::{
    constants::ANCHOR_DISCRIMINATOR_SIZE,
    errors::FarmError,
    state::{Global, GLOBAL_SEED, REWARD_VAULT_SEED},
};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = ANCHOR_DISCRIMINATOR_SIZE + Global::INIT_SPACE,
        seeds = [GLOBAL_SEED],
        bump
    )]
    pub global_account: Account<'info, Global>,

    // Mint authority has to be handed to the global account beforehand
    #[account(
        mint::token_program = reward_token_program,
        constraint = reward_mint.mint_authority == COption::Some(global_account.key())
            @ FarmError::InvalidMintAuthority,
    )]
    pub reward_mint: InterfaceAccount<'info, Mint>,

    #[account(
        init,
        payer = admin,
        seeds = [REWARD_VAULT_SEED],
        bump,
        token::mint = reward_mint,
        token::authority = global_account,
        token::token_program = reward_token_program,
    )]
    pub reward_vault: InterfaceAccount<'info, TokenAccount>,

    pub reward_token_program: Interface<'info, TokenInterface>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<Initialize>,
    reward_per_block: u64,
    start_block: u64,
    bonus_end_block: u64,
    bonus_multiplier: u64,
    beneficiary: Pubkey,
) -> Result<()> {
    // The bonus window cannot end before emission starts
    if bonus_end_block < start_block {
        return err!(FarmError::InvalidParam);
    }

    if bonus_multiplier == 0 || beneficiary == Pubkey::default() {
        return err!(FarmError::InvalidParam);
    }

    ctx.accounts.global_account.set_inner(Global {
        admin: ctx.accounts.admin.key(),
        beneficiary,
        reward_mint: ctx.accounts.reward_mint.key(),
        reward_vault: ctx.accounts.reward_vault.key(),
        reward_per_block,
        start_block,
        bonus_end_block,
        bonus_multiplier,
        total_weight: 0,
        pool_count: 0,
        bump: ctx.bumps.global_account,
        reward_vault_bump: ctx.bumps.reward_vault,
    });

    msg!(
        "Farm initialized: {} per block from block {}, x{} until block {}",
        reward_per_block,
        start_block,
        bonus_multiplier,
        bonus_end_block
    );

    Ok(())
}
