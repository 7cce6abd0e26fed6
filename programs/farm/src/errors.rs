use anchor_lang::prelude::*;

#[error_code]
pub enum FarmError {
    #[msg("Withdraw amount exceeds the deposited amount.")]
    InsufficientStake,
    #[msg("Source token account balance is too low.")]
    InsufficientBalance,
    #[msg("Signer is not allowed to move this amount from the source account.")]
    InsufficientAllowance,
    #[msg("Deposit mint is already registered to a pool.")]
    DuplicatePoolRegistration,
    #[msg("Invalid signer.")]
    NotAuthorized,
    #[msg("Invalid parameter.")]
    InvalidParam,
    #[msg("Account does not match the expected key.")]
    InvalidAccount,
    #[msg("Reward mint authority must be the global account.")]
    InvalidMintAuthority,
    #[msg("Deposit mint has an extension that breaks pool accounting.")]
    UnsupportedMint,
    #[msg("Pool accounts must list every pool exactly once.")]
    PoolSetMismatch,
    #[msg("Math overflow")]
    MathOverflow,
}
