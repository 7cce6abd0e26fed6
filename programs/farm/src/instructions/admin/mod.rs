// farm/instructions/admin/mod.rs

pub mod add_pool;
pub mod initialize;
pub mod set_beneficiary;
pub mod set_weight;

pub use add_pool::AddPool;
pub(crate) use add_pool::__client_accounts_add_pool;
pub use initialize::Initialize;
pub(crate) use initialize::__client_accounts_initialize;
pub use set_beneficiary::SetBeneficiary;
pub(crate) use set_beneficiary::__client_accounts_set_beneficiary;
pub use set_weight::SetWeight;
pub(crate) use set_weight::__client_accounts_set_weight;

cfg_if::cfg_if! {
    if #[cfg(feature = "cpi")] {
        pub(crate) use add_pool::__cpi_client_accounts_add_pool;
        pub(crate) use initialize::__cpi_client_accounts_initialize;
        pub(crate) use set_beneficiary::__cpi_client_accounts_set_beneficiary;
        pub(crate) use set_weight::__cpi_client_accounts_set_weight;
    }
}
