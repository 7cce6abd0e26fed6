// farm/instructions/admin/set_beneficiary.rs

// external dependencies
use anchor_lang::prelude::*;

// local dependencies
use crate::{
    errors::FarmError,
    state::{Global, GLOBAL_SEED},
};

#[derive(Accounts)]
pub struct SetBeneficiary<'info> {
    // Only the current beneficiary can hand the role over
    pub beneficiary: Signer<'info>,

    #[account(
        mut,
        seeds = [GLOBAL_SEED],
        bump = global_account.bump,
        has_one = beneficiary @ FarmError::NotAuthorized,
    )]
    pub global_account: Account<'info, Global>,
}

pub fn handler(ctx: Context<SetBeneficiary>, new_beneficiary: Pubkey) -> Result<()> {
    if new_beneficiary == Pubkey::default() {
        return err!(FarmError::InvalidParam);
    }

    ctx.accounts.global_account.beneficiary = new_beneficiary;

    msg!(
        "Beneficiary changed from {} to {}",
        ctx.accounts.beneficiary.key(),
        new_beneficiary
    );

    emit!(BeneficiarySet {
        old_beneficiary: ctx.accounts.beneficiary.key(),
        new_beneficiary,
    });

    Ok(())
}

#[event]
pub struct BeneficiarySet {
    pub old_beneficiary: Pubkey,
    pub new_beneficiary: Pubkey,
}
