// farm/instructions/depositor/mod.rs

pub mod deposit;
pub mod emergency_withdraw;
pub mod withdraw;

pub use deposit::Deposit;
pub(crate) use deposit::__client_accounts_deposit;
pub use emergency_withdraw::EmergencyWithdraw;
pub(crate) use emergency_withdraw::__client_accounts_emergency_withdraw;
pub use withdraw::Withdraw;
pub(crate) use withdraw::__client_accounts_withdraw;

cfg_if::cfg_if! {
    if #[cfg(feature = "cpi")] {
        pub(crate) use deposit::__cpi_client_accounts_deposit;
        pub(crate) use emergency_withdraw::__cpi_client_accounts_emergency_withdraw;
        pub(crate) use withdraw::__cpi_client_accounts_withdraw;
    }
}
