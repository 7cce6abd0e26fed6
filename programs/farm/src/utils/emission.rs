// farm/utils/emission.rs

// external dependencies
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    mint_to, transfer_checked, Mint, MintTo, TokenAccount, TokenInterface, TransferChecked,
};

// local dependencies
use crate::state::{Global, Settlement, GLOBAL_SEED};

/// Accounts the reward side of the farm moves tokens through. The global
/// account is both the reward mint authority and the reward vault owner.
pub struct RewardAccounts<'a, 'info> {
    pub global_account: &'a Account<'info, Global>,
    pub reward_mint: &'a InterfaceAccount<'info, Mint>,
    pub reward_vault: &'a InterfaceAccount<'info, TokenAccount>,
    pub reward_token_program: &'a Interface<'info, TokenInterface>,
}

impl<'a, 'info> RewardAccounts<'a, 'info> {
    /// Mints a settlement: the depositors' share into the reward vault and
    /// the operator share to the beneficiary.
    pub fn mint_settlement(
        &self,
        settlement: &Settlement,
        beneficiary_token_account: &InterfaceAccount<'info, TokenAccount>,
    ) -> Result<()> {
        if settlement.is_empty() {
            return Ok(());
        }

        if settlement.beneficiary_reward > 0 {
            self.mint(beneficiary_token_account, settlement.beneficiary_reward)?;
        }

        if settlement.reward > 0 {
            self.mint(self.reward_vault, settlement.reward)?;
        }

        msg!(
            "Minted {} reward and {} to the beneficiary",
            settlement.reward,
            settlement.beneficiary_reward
        );

        Ok(())
    }

    /// Pays harvested reward out of the reward vault and returns the amount
    /// paid. Accumulator rounding can leave the vault a few units short of
    /// the total owed, so the payout is capped at the vault balance.
    ///
    /// The vault must be reloaded after `mint_settlement` in the same instruction.
    pub fn pay(&self, to: &InterfaceAccount<'info, TokenAccount>, amount: u64) -> Result<u64> {
        let amount = capped_payout(amount, self.reward_vault.amount);
        if amount == 0 {
            return Ok(0);
        }

        let bump = [self.global_account.bump];
        let global_seeds: &[&[&[u8]]] = &[&[GLOBAL_SEED, &bump]];

        let cpi_context = CpiContext::new_with_signer(
            self.reward_token_program.to_account_info(),
            TransferChecked {
                from: self.reward_vault.to_account_info(),
                to: to.to_account_info(),
                mint: self.reward_mint.to_account_info(),
                authority: self.global_account.to_account_info(),
            },
            global_seeds,
        );
        transfer_checked(cpi_context, amount, self.reward_mint.decimals)?;

        Ok(amount)
    }

    fn mint(&self, to: &InterfaceAccount<'info, TokenAccount>, amount: u64) -> Result<()> {
        let bump = [self.global_account.bump];
        let global_seeds: &[&[&[u8]]] = &[&[GLOBAL_SEED, &bump]];

        let cpi_context = CpiContext::new_with_signer(
            self.reward_token_program.to_account_info(),
            MintTo {
                mint: self.reward_mint.to_account_info(),
                to: to.to_account_info(),
                authority: self.global_account.to_account_info(),
            },
            global_seeds,
        );

        mint_to(cpi_context, amount)
    }
}

pub fn capped_payout(owed: u64, vault_balance: u64) -> u64 {
    owed.min(vault_balance)
}
