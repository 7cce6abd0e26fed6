// farm/instructions/depositor/deposit.rs

// external dependencies
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

// local dependencies
use crate::{
    constants::ANCHOR_DISCRIMINATOR_SIZE,
    errors::FarmError,
    state::{
        Global, Pool, Position, GLOBAL_SEED, POOL_SEED, POOL_VAULT_SEED, POSITION_SEED,
        REWARD_VAULT_SEED,
    },
    utils::{
        emission::RewardAccounts,
        schedule::current_block,
        token::{check_spend_authority, collect_into_vault},
    },
};

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(mut)]
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
        init_if_needed,
        payer = user,
        space = ANCHOR_DISCRIMINATOR_SIZE + Position::INIT_SPACE,
        seeds = [POSITION_SEED, pool.key().as_ref(), user.key().as_ref()],
        bump
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

    #[account(
        mut,
        token::mint = reward_mint,
        token::token_program = reward_token_program,
    )]
    pub user_reward_token_account: InterfaceAccount<'info, TokenAccount>,

    pub deposit_token_program: Interface<'info, TokenInterface>,

    pub reward_token_program: Interface<'info, TokenInterface>,

    pub system_program: Program<'info, System>,
}

impl<'info> Deposit<'info> {
    fn reward_accounts(&self) -> RewardAccounts<'_, 'info> {
        RewardAccounts {
            global_account: &self.global_account,
            reward_mint: &self.reward_mint,
            reward_vault: &self.reward_vault,
            reward_token_program: &self.reward_token_program,
        }
    }
}

/// Stakes `amount` and harvests whatever the position has pending.
/// A zero amount only harvests.
pub fn handler(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    let current_block = current_block()?;

    let settlement = ctx
        .accounts
        .pool
        .settle(&ctx.accounts.global_account, current_block)?;

    if !ctx.accounts.position.is_initialized() {
        let pool = ctx.accounts.pool.key();
        let owner = ctx.accounts.user.key();
        let position = &mut ctx.accounts.position;

        position.pool = pool;
        position.owner = owner;
        position.bump = ctx.bumps.position;
    }

    if amount > 0 {
        check_spend_authority(
            &ctx.accounts.user_deposit_token_account,
            &ctx.accounts.user.key(),
            amount,
        )?;
    }

    let pending = ctx
        .accounts
        .position
        .deposit(&mut ctx.accounts.pool, amount)?;

    ctx.accounts
        .reward_accounts()
        .mint_settlement(&settlement, &ctx.accounts.beneficiary_token_account)?;

    if amount > 0 {
        collect_into_vault(
            &ctx.accounts.user_deposit_token_account,
            &ctx.accounts.vault,
            &ctx.accounts.deposit_mint,
            &ctx.accounts.user,
            &ctx.accounts.deposit_token_program,
            amount,
        )?;
    }

    ctx.accounts.reward_vault.reload()?;
    let paid = ctx
        .accounts
        .reward_accounts()
        .pay(&ctx.accounts.user_reward_token_account, pending)?;

    msg!(
        "Deposited {} into pool {}, harvested {}",
        amount,
        ctx.accounts.pool.pool_id,
        paid
    );

    emit!(Deposited {
        user: ctx.accounts.user.key(),
        pool: ctx.accounts.pool.key(),
        amount,
        reward: paid,
    });

    Ok(())
}

#[event]
pub struct Deposited {
    pub user: Pubkey,
    pub pool: Pubkey,
    pub amount: u64,
    pub reward: u64,
}
