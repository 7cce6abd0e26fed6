// farm/instructions/admin/add_pool.rs

// external dependencies
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

// local dependencies
use crate::{
    constants::ANCHOR_DISCRIMINATOR_SIZE,
    errors::FarmError,
    state::{
        Global, Pool, PoolRegistration, Settlement, GLOBAL_SEED, POOL_REGISTRATION_SEED,
        POOL_SEED, POOL_VAULT_SEED, REWARD_VAULT_SEED,
    },
    utils::{
        emission::RewardAccounts, pools::settle_pools, schedule::current_block,
        token::has_unsupported_extension,
    },
};

#[derive(Accounts)]
pub struct AddPool<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [GLOBAL_SEED],
        bump = global_account.bump,
        has_one = admin @ FarmError::NotAuthorized,
        has_one = reward_mint @ FarmError::InvalidAccount,
    )]
    pub global_account: Account<'info, Global>,

    #[account(mint::token_program = deposit_token_program)]
    pub deposit_mint: InterfaceAccount<'info, Mint>,

    #[account(
        init,
        payer = admin,
        space = ANCHOR_DISCRIMINATOR_SIZE + Pool::INIT_SPACE,
        seeds = [POOL_SEED, &global_account.pool_count.to_le_bytes()],
        bump
    )]
    pub pool: Account<'info, Pool>,

    #[account(
        init,
        payer = admin,
        seeds = [POOL_VAULT_SEED, pool.key().as_ref()],
        bump,
        token::mint = deposit_mint,
        token::authority = pool,
        token::token_program = deposit_token_program,
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = admin,
        space = ANCHOR_DISCRIMINATOR_SIZE + PoolRegistration::INIT_SPACE,
        seeds = [POOL_REGISTRATION_SEED, deposit_mint.key().as_ref()],
        bump
    )]
    pub registration: Account<'info, PoolRegistration>,

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

    pub system_program: Program<'info, System>,
}

/// With `update_rewards_first`, every existing pool must follow as a writable
/// remaining account so it is settled at the old total weight.
pub fn handler<'c: 'info, 'info>(
    ctx: Context<'_, '_, 'c, 'info, AddPool<'info>>,
    weight: u64,
    update_rewards_first: bool,
) -> Result<()> {
    if ctx.accounts.registration.pool != Pubkey::default() {
        return err!(FarmError::DuplicatePoolRegistration);
    }

    let deposit_mint_info = ctx.accounts.deposit_mint.to_account_info();
    if has_unsupported_extension(&deposit_mint_info.try_borrow_data()?) {
        return err!(FarmError::UnsupportedMint);
    }

    let current_block = current_block()?;

    let settlement = if update_rewards_first {
        settle_pools(
            ctx.remaining_accounts,
            &ctx.accounts.global_account,
            current_block,
            None,
        )?
    } else {
        Settlement::default()
    };

    let pool_id = ctx.accounts.global_account.pool_count;
    let first_block = ctx
        .accounts
        .global_account
        .schedule()
        .first_block(current_block);

    ctx.accounts.pool.set_inner(Pool {
        pool_id,
        deposit_mint: ctx.accounts.deposit_mint.key(),
        vault: ctx.accounts.vault.key(),
        weight,
        last_settled_block: first_block,
        acc_reward_per_unit: 0,
        total_deposited: 0,
        bump: ctx.bumps.pool,
        vault_bump: ctx.bumps.vault,
    });

    ctx.accounts.registration.set_inner(PoolRegistration {
        pool: ctx.accounts.pool.key(),
        bump: ctx.bumps.registration,
    });

    let global = &mut ctx.accounts.global_account;
    global.add_weight(weight)?;
    global.pool_count = global
        .pool_count
        .checked_add(1)
        .ok_or(FarmError::MathOverflow)?;

    RewardAccounts {
        global_account: &ctx.accounts.global_account,
        reward_mint: &ctx.accounts.reward_mint,
        reward_vault: &ctx.accounts.reward_vault,
        reward_token_program: &ctx.accounts.reward_token_program,
    }
    .mint_settlement(&settlement, &ctx.accounts.beneficiary_token_account)?;

    msg!(
        "Added pool {} for mint {} with weight {}",
        pool_id,
        ctx.accounts.deposit_mint.key(),
        weight
    );

    emit!(PoolAdded {
        pool: ctx.accounts.pool.key(),
        pool_id,
        deposit_mint: ctx.accounts.deposit_mint.key(),
        weight,
        total_weight: ctx.accounts.global_account.total_weight,
        first_block,
    });

    Ok(())
}

#[event]
pub struct PoolAdded {
    pub pool: Pubkey,
    pub pool_id: u64,
    pub deposit_mint: Pubkey,
    pub weight: u64,
    pub total_weight: u64,
    pub first_block: u64,
}
