//! Buffered write set for one ledger invocation.
//!
//! Reads see staged values first and fall back to storage. Nothing reaches
//! storage before [`LedgerTransaction::commit`]; dropping an uncommitted
//! transaction discards every staged write. Balance and allowance operations
//! are implemented on this type in the `balance` and `allowance` modules, so a
//! multi-entity operation such as a delegated transfer validates every step
//! against one consistent view and writes all of it or nothing.

use frame_support::DefaultNoBound;
use sp_std::collections::btree_map::BTreeMap;

use crate::{types::Amount, Allowances, Balances, Config, TokenString, LOG_TARGET};

type BalanceKey<T> = (<T as frame_system::Config>::AccountId, TokenString<T>, TokenString<T>);

type AllowanceKey<T> = (
    <T as frame_system::Config>::AccountId,
    <T as frame_system::Config>::AccountId,
    TokenString<T>,
    TokenString<T>,
);

#[derive(DefaultNoBound)]
pub(crate) struct LedgerTransaction<T: Config> {
    balances: BTreeMap<BalanceKey<T>, Amount>,
    allowances: BTreeMap<AllowanceKey<T>, Amount>,
}

impl<T: Config> LedgerTransaction<T> {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Number of entries that `commit` would write.
    #[cfg(test)]
    pub(crate) fn staged_writes(&self) -> usize {
        self.balances.len() + self.allowances.len()
    }

    pub(crate) fn read_balance(
        &self,
        account: &T::AccountId,
        symbol: &TokenString<T>,
        group: &TokenString<T>,
    ) -> Amount {
        let key = (account.clone(), symbol.clone(), group.clone());
        match self.balances.get(&key) {
            Some(amount) => *amount,
            None => Balances::<T>::get((account, symbol, group)).unwrap_or_default(),
        }
    }

    pub(crate) fn stage_balance(
        &mut self,
        account: &T::AccountId,
        symbol: &TokenString<T>,
        group: &TokenString<T>,
        amount: Amount,
    ) {
        self.balances.insert((account.clone(), symbol.clone(), group.clone()), amount);
    }

    pub(crate) fn read_allowance(
        &self,
        owner: &T::AccountId,
        spender: &T::AccountId,
        symbol: &TokenString<T>,
        group: &TokenString<T>,
    ) -> Amount {
        let key = (owner.clone(), spender.clone(), symbol.clone(), group.clone());
        match self.allowances.get(&key) {
            Some(amount) => *amount,
            None => Allowances::<T>::get((owner, spender, symbol, group)).unwrap_or_default(),
        }
    }

    pub(crate) fn stage_allowance(
        &mut self,
        owner: &T::AccountId,
        spender: &T::AccountId,
        symbol: &TokenString<T>,
        group: &TokenString<T>,
        amount: Amount,
    ) {
        self.allowances
            .insert((owner.clone(), spender.clone(), symbol.clone(), group.clone()), amount);
    }

    /// Write every staged entry to storage.
    pub(crate) fn commit(self) {
        log::trace!(
            target: LOG_TARGET,
            "committing {} balance and {} allowance writes",
            self.balances.len(),
            self.allowances.len()
        );

        for ((account, symbol, group), amount) in self.balances {
            Balances::<T>::insert((account, symbol, group), amount);
        }
        for ((owner, spender, symbol, group), amount) in self.allowances {
            Allowances::<T>::insert((owner, spender, symbol, group), amount);
        }
    }
}
