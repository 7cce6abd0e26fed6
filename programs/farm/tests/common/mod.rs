//! In-memory farm: the program's account state plus plain token balances,
//! driven through the same accounting calls the instruction handlers make.
//! Every operation is all-or-nothing, like a transaction.

#![allow(dead_code)]

use std::collections::HashMap;

use anchor_lang::prelude::*;
use farm::{
    errors::FarmError,
    state::{Global, Pool, Position, Settlement},
};

#[derive(Clone)]
pub struct Ledger {
    pub global: Global,
    pub pools: Vec<Pool>,
    pub pool_keys: Vec<Pubkey>,
    pub registrations: HashMap<Pubkey, u64>,
    pub positions: HashMap<(u64, Pubkey), Position>,
    /// Deposit token balances keyed by (mint, owner).
    pub wallets: HashMap<(Pubkey, Pubkey), u64>,
    /// Deposit token balance of each pool vault.
    pub vaults: Vec<u64>,
    pub reward_vault: u64,
    pub reward_balances: HashMap<Pubkey, u64>,
    pub total_minted: u64,
}

impl Ledger {
    pub fn new(
        reward_per_block: u64,
        start_block: u64,
        bonus_end_block: u64,
        bonus_multiplier: u64,
    ) -> Self {
        Ledger {
            global: Global {
                admin: Pubkey::new_unique(),
                beneficiary: Pubkey::new_unique(),
                reward_mint: Pubkey::new_unique(),
                reward_vault: Pubkey::new_unique(),
                reward_per_block,
                start_block,
                bonus_end_block,
                bonus_multiplier,
                total_weight: 0,
                pool_count: 0,
                bump: 255,
                reward_vault_bump: 255,
            },
            pools: Vec::new(),
            pool_keys: Vec::new(),
            registrations: HashMap::new(),
            positions: HashMap::new(),
            wallets: HashMap::new(),
            vaults: Vec::new(),
            reward_vault: 0,
            reward_balances: HashMap::new(),
            total_minted: 0,
        }
    }

    fn atomic<T>(&mut self, op: impl FnOnce(&mut Ledger) -> Result<T>) -> Result<T> {
        let snapshot = self.clone();
        let result = op(self);
        if result.is_err() {
            *self = snapshot;
        }
        result
    }

    pub fn fund(&mut self, mint: Pubkey, owner: Pubkey, amount: u64) {
        *self.wallets.entry((mint, owner)).or_default() += amount;
    }

    pub fn wallet(&self, mint: Pubkey, owner: Pubkey) -> u64 {
        self.wallets.get(&(mint, owner)).copied().unwrap_or_default()
    }

    pub fn reward_balance(&self, owner: Pubkey) -> u64 {
        self.reward_balances.get(&owner).copied().unwrap_or_default()
    }

    pub fn beneficiary_balance(&self) -> u64 {
        self.reward_balance(self.global.beneficiary)
    }

    pub fn position(&self, pool_id: u64, user: Pubkey) -> Option<&Position> {
        self.positions.get(&(pool_id, user))
    }

    pub fn deposited(&self, pool_id: u64, user: Pubkey) -> u64 {
        self.position(pool_id, user)
            .map(|p| p.deposited_amount)
            .unwrap_or_default()
    }

    fn pool_mut(&mut self, pool_id: u64) -> Result<&mut Pool> {
        self.pools
            .get_mut(pool_id as usize)
            .ok_or_else(|| error!(FarmError::InvalidAccount))
    }

    fn mint(&mut self, settlement: Settlement) {
        self.reward_vault += settlement.reward;
        *self
            .reward_balances
            .entry(self.global.beneficiary)
            .or_default() += settlement.beneficiary_reward;
        self.total_minted += settlement.reward + settlement.beneficiary_reward;
    }

    fn pay(&mut self, to: Pubkey, amount: u64) -> u64 {
        let amount = amount.min(self.reward_vault);
        self.reward_vault -= amount;
        *self.reward_balances.entry(to).or_default() += amount;
        amount
    }

    fn settle_all(&mut self, block: u64, skip: Option<u64>) -> Result<Settlement> {
        let mut total = Settlement::default();
        for (id, pool) in self.pools.iter_mut().enumerate() {
            if Some(id as u64) == skip {
                continue;
            }
            total = total.merge(pool.settle(&self.global, block)?)?;
        }
        Ok(total)
    }

    pub fn add_pool(
        &mut self,
        deposit_mint: Pubkey,
        weight: u64,
        update_rewards_first: bool,
        block: u64,
    ) -> Result<u64> {
        self.atomic(|l| {
            if l.registrations.contains_key(&deposit_mint) {
                return err!(FarmError::DuplicatePoolRegistration);
            }

            let settlement = if update_rewards_first {
                l.settle_all(block, None)?
            } else {
                Settlement::default()
            };

            let pool_id = l.global.pool_count;
            l.pools.push(Pool {
                pool_id,
                deposit_mint,
                vault: Pubkey::new_unique(),
                weight,
                last_settled_block: l.global.schedule().first_block(block),
                acc_reward_per_unit: 0,
                total_deposited: 0,
                bump: 255,
                vault_bump: 255,
            });
            l.pool_keys.push(Pubkey::new_unique());
            l.vaults.push(0);
            l.registrations.insert(deposit_mint, pool_id);
            l.global.add_weight(weight)?;
            l.global.pool_count += 1;

            l.mint(settlement);
            Ok(pool_id)
        })
    }

    pub fn set_weight(
        &mut self,
        pool_id: u64,
        weight: u64,
        update_rewards_first: bool,
        block: u64,
    ) -> Result<()> {
        self.atomic(|l| {
            let global = l.global.clone();
            let pool = l.pool_mut(pool_id)?;
            let mut settlement = pool.settle(&global, block)?;
            let old_weight = pool.weight;

            if update_rewards_first {
                settlement = settlement.merge(l.settle_all(block, Some(pool_id))?)?;
            }

            l.global.replace_weight(old_weight, weight)?;
            l.pool_mut(pool_id)?.weight = weight;

            l.mint(settlement);
            Ok(())
        })
    }

    pub fn update_pool(&mut self, pool_id: u64, block: u64) -> Result<()> {
        self.atomic(|l| {
            let global = l.global.clone();
            let settlement = l.pool_mut(pool_id)?.settle(&global, block)?;
            l.mint(settlement);
            Ok(())
        })
    }

    pub fn mass_update_pools(&mut self, block: u64) -> Result<()> {
        self.atomic(|l| {
            let settlement = l.settle_all(block, None)?;
            l.mint(settlement);
            Ok(())
        })
    }

    /// Returns the reward paid to `user`.
    pub fn deposit(&mut self, pool_id: u64, user: Pubkey, amount: u64, block: u64) -> Result<u64> {
        self.atomic(|l| {
            let global = l.global.clone();
            let pool_key = *l
                .pool_keys
                .get(pool_id as usize)
                .ok_or_else(|| error!(FarmError::InvalidAccount))?;

            let mut pool = l.pool_mut(pool_id)?.clone();
            let settlement = pool.settle(&global, block)?;

            let mut position = l
                .positions
                .get(&(pool_id, user))
                .cloned()
                .unwrap_or(Position {
                    pool: pool_key,
                    owner: user,
                    deposited_amount: 0,
                    reward_debt: 0,
                    bump: 255,
                });

            let source = l.wallet(pool.deposit_mint, user);
            if amount > 0 && source < amount {
                return err!(FarmError::InsufficientBalance);
            }

            let pending = position.deposit(&mut pool, amount)?;

            l.mint(settlement);
            l.wallets.insert((pool.deposit_mint, user), source - amount);
            l.vaults[pool_id as usize] += amount;
            let paid = l.pay(user, pending);

            l.pools[pool_id as usize] = pool;
            l.positions.insert((pool_id, user), position);
            Ok(paid)
        })
    }

    /// Returns the reward paid to `user`.
    pub fn withdraw(&mut self, pool_id: u64, user: Pubkey, amount: u64, block: u64) -> Result<u64> {
        self.atomic(|l| {
            let global = l.global.clone();
            let mut pool = l.pool_mut(pool_id)?.clone();
            let mut position = l
                .positions
                .get(&(pool_id, user))
                .cloned()
                .ok_or_else(|| error!(FarmError::InvalidAccount))?;

            let settlement = pool.settle(&global, block)?;
            let pending = position.withdraw(&mut pool, amount)?;

            l.mint(settlement);
            l.vaults[pool_id as usize] -= amount;
            *l.wallets.entry((pool.deposit_mint, user)).or_default() += amount;
            let paid = l.pay(user, pending);

            l.pools[pool_id as usize] = pool;
            l.positions.insert((pool_id, user), position);
            Ok(paid)
        })
    }

    /// Returns the deposit amount handed back.
    pub fn emergency_withdraw(&mut self, pool_id: u64, user: Pubkey, block: u64) -> Result<u64> {
        self.atomic(|l| {
            let global = l.global.clone();
            let mut pool = l.pool_mut(pool_id)?.clone();
            let mut position = l
                .positions
                .get(&(pool_id, user))
                .cloned()
                .ok_or_else(|| error!(FarmError::InvalidAccount))?;

            let settlement = pool.settle(&global, block)?;
            let amount = position.abandon(&mut pool)?;

            l.mint(settlement);
            l.vaults[pool_id as usize] -= amount;
            *l.wallets.entry((pool.deposit_mint, user)).or_default() += amount;

            l.pools[pool_id as usize] = pool;
            l.positions.insert((pool_id, user), position);
            Ok(amount)
        })
    }

    pub fn pending_reward(&self, pool_id: u64, user: Pubkey, block: u64) -> Result<u64> {
        let mut pool = self
            .pools
            .get(pool_id as usize)
            .cloned()
            .ok_or_else(|| error!(FarmError::InvalidAccount))?;
        pool.settle(&self.global, block)?;

        match self.position(pool_id, user) {
            Some(position) => position.pending_reward(&pool),
            None => Ok(0),
        }
    }

    /// Deposit side: positions add up to the pool total, which the vault holds.
    pub fn check_deposits(&self) -> bool {
        self.pools.iter().enumerate().all(|(id, pool)| {
            let sum: u64 = self
                .positions
                .iter()
                .filter(|((pool_id, _), _)| *pool_id == id as u64)
                .map(|(_, p)| p.deposited_amount)
                .sum();
            sum == pool.total_deposited && self.vaults[id] == pool.total_deposited
        })
    }

    /// Reward side: every minted unit is either in the vault or in a balance.
    pub fn check_rewards(&self) -> bool {
        let held: u64 = self.reward_balances.values().sum();
        held + self.reward_vault == self.total_minted
    }

    pub fn check_weights(&self) -> bool {
        self.pools.iter().map(|p| p.weight).sum::<u64>() == self.global.total_weight
            && self.pools.len() as u64 == self.global.pool_count
    }
}
