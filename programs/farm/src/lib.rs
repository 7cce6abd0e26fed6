// farm/lib.rs - top-level program file

pub mod constants;
pub mod errors;
pub mod instructions;
pub mod state;
pub mod utils;

use anchor_lang::prelude::*;

use instructions::*;

#[cfg(not(feature = "no-entrypoint"))]
solana_security_txt::security_txt! {
    // Required fields
    name: "Farm Program",
    project_url: "https://example.com/farm",
    contacts: "email:security@example.com",
    // Optional Fields
    preferred_languages: "en"
}

declare_id!("EaRHKddMXsb3R3dcybMLvaN4t7sRbX6vLPrg3Q4J1NLz");

#[program]
pub mod farm {
    use super::*;

    // Admin instructions

    pub fn initialize(
        ctx: Context<Initialize>,
        reward_per_block: u64,
        start_block: u64,
        bonus_end_block: u64,
        bonus_multiplier: u64,
        beneficiary: Pubkey,
    ) -> Result<()> {
        instructions::admin::initialize::handler(
            ctx,
            reward_per_block,
            start_block,
            bonus_end_block,
            bonus_multiplier,
            beneficiary,
        )
    }

    pub fn add_pool<'c: 'info, 'info>(
        ctx: Context<'_, '_, 'c, 'info, AddPool<'info>>,
        weight: u64,
        update_rewards_first: bool,
    ) -> Result<()> {
        instructions::admin::add_pool::handler(ctx, weight, update_rewards_first)
    }

    pub fn set_weight<'c: 'info, 'info>(
        ctx: Context<'_, '_, 'c, 'info, SetWeight<'info>>,
        weight: u64,
        update_rewards_first: bool,
    ) -> Result<()> {
        instructions::admin::set_weight::handler(ctx, weight, update_rewards_first)
    }

    pub fn set_beneficiary(ctx: Context<SetBeneficiary>, new_beneficiary: Pubkey) -> Result<()> {
        instructions::admin::set_beneficiary::handler(ctx, new_beneficiary)
    }

    // Depositor instructions

    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::depositor::deposit::handler(ctx, amount)
    }

    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::depositor::withdraw::handler(ctx, amount)
    }

    pub fn emergency_withdraw(ctx: Context<EmergencyWithdraw>) -> Result<()> {
        instructions::depositor::emergency_withdraw::handler(ctx)
    }

    // Open instructions

    pub fn update_pool(ctx: Context<UpdatePool>) -> Result<()> {
        instructions::open::update_pool::handler(ctx)
    }

    pub fn mass_update_pools<'c: 'info, 'info>(
        ctx: Context<'_, '_, 'c, 'info, MassUpdatePools<'info>>,
    ) -> Result<()> {
        instructions::open::mass_update_pools::handler(ctx)
    }

    pub fn pending_reward(ctx: Context<PendingReward>) -> Result<u64> {
        instructions::open::pending_reward::handler(ctx)
    }
}
