use sp_runtime::DispatchError;
use sp_std::collections::btree_map::BTreeMap;

use crate::{
    types::Amount, Allowances, Balances, Config, Pallet, TokenString, TokenTypes, LOG_TARGET,
};

fn violation(reason: &'static str) -> DispatchError {
    log::warn!(target: LOG_TARGET, "ledger invariant violated: {reason}");
    DispatchError::Other(reason)
}

impl<T: Config> Pallet<T> {
    /// Check the ledger-wide invariants:
    ///
    /// - every balance and allowance refers to a registered token type;
    /// - the balances of each token type add up to exactly its total supply.
    ///
    /// Non-negativity is carried by the unsigned amount type.
    pub fn do_try_state() -> Result<(), DispatchError> {
        let mut held: BTreeMap<(TokenString<T>, TokenString<T>), Amount> = BTreeMap::new();

        for ((_, symbol, group), amount) in Balances::<T>::iter() {
            if !TokenTypes::<T>::contains_key(&symbol, &group) {
                return Err(violation("balance held in an unregistered token type"));
            }
            let sum = held.entry((symbol, group)).or_default();
            *sum = sum.checked_add(amount).ok_or_else(|| violation("balance sum overflows"))?;
        }

        for ((_, _, symbol, group), _) in Allowances::<T>::iter() {
            if !TokenTypes::<T>::contains_key(&symbol, &group) {
                return Err(violation("allowance granted in an unregistered token type"));
            }
        }

        for (symbol, group, token) in TokenTypes::<T>::iter() {
            let sum = held.get(&(symbol, group)).copied().unwrap_or_default();
            if sum != token.total_supply {
                return Err(violation("balances do not add up to the total supply"));
            }
        }

        Ok(())
    }
}
