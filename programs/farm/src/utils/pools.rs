// farm/utils/pools.rs

// external dependencies
use anchor_lang::prelude::*;

// local dependencies
use crate::{
    errors::FarmError,
    state::{Global, Pool, Settlement, POOL_SEED},
};

/// Settles every pool passed in `pool_infos` and writes them back.
///
/// `pool_infos` must hold each registered pool exactly once, except `skip`,
/// which the caller settles itself.
pub fn settle_pools<'info>(
    pool_infos: &'info [AccountInfo<'info>],
    global: &Global,
    current_block: u64,
    skip: Option<Pubkey>,
) -> Result<Settlement> {
    let expected = match skip {
        Some(_) => global.pool_count.saturating_sub(1),
        None => global.pool_count,
    };

    if pool_infos.len() as u64 != expected {
        return err!(FarmError::PoolSetMismatch);
    }

    let mut seen = vec![false; global.pool_count as usize];
    let mut total = Settlement::default();

    for info in pool_infos {
        if !info.is_writable || Some(info.key()) == skip {
            return err!(FarmError::InvalidAccount);
        }

        // Checks the owner and discriminator
        let mut pool = Account::<Pool>::try_from(info)?;

        let expected_key = Pubkey::create_program_address(
            &[POOL_SEED, &pool.pool_id.to_le_bytes(), &[pool.bump]],
            &crate::ID,
        )
        .map_err(|_| error!(FarmError::InvalidAccount))?;

        if expected_key != info.key() {
            return err!(FarmError::InvalidAccount);
        }

        match seen.get_mut(pool.pool_id as usize) {
            Some(slot) if !*slot => *slot = true,
            _ => return err!(FarmError::PoolSetMismatch),
        }

        let settlement = pool.settle(global, current_block)?;
        total = total.merge(settlement)?;

        pool.exit(&crate::ID)?;
    }

    Ok(total)
}
