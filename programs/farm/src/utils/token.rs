// farm/utils/token.rs

// external dependencies
use anchor_lang::prelude::*;
use anchor_spl::{
    token_2022::spl_token_2022::{
        extension::{
            permanent_delegate::PermanentDelegate, transfer_fee::TransferFeeConfig,
            BaseStateWithExtensions, StateWithExtensions,
        },
        state::Mint as MintState,
    },
    token_interface::{transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked},
};
use solana_program::program_option::COption;

// local dependencies
use crate::{
    errors::FarmError,
    state::{Pool, POOL_SEED},
};

/// Pulls `amount` from a depositor's token account into a pool vault.
pub fn collect_into_vault<'info>(
    from: &InterfaceAccount<'info, TokenAccount>,
    vault: &InterfaceAccount<'info, TokenAccount>,
    mint: &InterfaceAccount<'info, Mint>,
    depositor: &Signer<'info>,
    token_program: &Interface<'info, TokenInterface>,
    amount: u64,
) -> Result<()> {
    let cpi_context = CpiContext::new(
        token_program.to_account_info(),
        TransferChecked {
            from: from.to_account_info(),
            to: vault.to_account_info(),
            mint: mint.to_account_info(),
            authority: depositor.to_account_info(),
        },
    );

    transfer_checked(cpi_context, amount, mint.decimals)
}

/// Moves `amount` out of a pool vault, signed by the pool.
pub fn release_from_vault<'info>(
    pool: &Account<'info, Pool>,
    vault: &InterfaceAccount<'info, TokenAccount>,
    to: &InterfaceAccount<'info, TokenAccount>,
    mint: &InterfaceAccount<'info, Mint>,
    token_program: &Interface<'info, TokenInterface>,
    amount: u64,
) -> Result<()> {
    let pool_id = pool.pool_id.to_le_bytes();
    let pool_seeds: &[&[&[u8]]] = &[&[POOL_SEED, &pool_id, &[pool.bump]]];

    let cpi_context = CpiContext::new_with_signer(
        token_program.to_account_info(),
        TransferChecked {
            from: vault.to_account_info(),
            to: to.to_account_info(),
            mint: mint.to_account_info(),
            authority: pool.to_account_info(),
        },
        pool_seeds,
    );

    transfer_checked(cpi_context, amount, mint.decimals)
}

/// Checks that `authority` can move `amount` out of `source`, either as its
/// owner or as an approved delegate.
pub fn check_spend_authority(source: &TokenAccount, authority: &Pubkey, amount: u64) -> Result<()> {
    if source.amount < amount {
        return err!(FarmError::InsufficientBalance);
    }

    if source.owner == *authority {
        return Ok(());
    }

    match source.delegate {
        COption::Some(delegate) if delegate == *authority && source.delegated_amount >= amount => {
            Ok(())
        }
        _ => err!(FarmError::InsufficientAllowance),
    }
}

/// Mints whose transfers can move vault funds without the program, or deliver
/// less than the requested amount, cannot back exact pool accounting.
pub fn has_unsupported_extension(mint_data: &[u8]) -> bool {
    match StateWithExtensions::<MintState>::unpack(mint_data) {
        Ok(state) => {
            state.get_extension::<PermanentDelegate>().is_ok()
                || state.get_extension::<TransferFeeConfig>().is_ok()
        }
        Err(_) => false,
    }
}
