// farm/instructions/open/mod.rs

pub mod mass_update_pools;
pub mod pending_reward;
pub mod update_pool;

pub use mass_update_pools::MassUpdatePools;
pub(crate) use mass_update_pools::__client_accounts_mass_update_pools;
pub use pending_reward::PendingReward;
pub(crate) use pending_reward::__client_accounts_pending_reward;
pub use update_pool::UpdatePool;
pub(crate) use update_pool::__client_accounts_update_pool;

cfg_if::cfg_if! {
    if #[cfg(feature = "cpi")] {
        pub(crate) use mass_update_pools::__cpi_client_accounts_mass_update_pools;
        pub(crate) use pending_reward::__cpi_client_accounts_pending_reward;
        pub(crate) use update_pool::__cpi_client_accounts_update_pool;
    }
}
