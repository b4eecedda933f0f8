use frame_support::ensure;
use sp_runtime::DispatchError;

use crate::{
    ledger::LedgerTransaction, types::Amount, AllowanceIdOf, AllowanceOf, Allowances,
    ApproveRequestOf, Config, Error, Event, Pallet, LOG_TARGET,
};

impl<T: Config> LedgerTransaction<T> {
    /// Current allowance as seen by this transaction. Absent entries read as zero.
    pub(crate) fn allowance(&self, id: &AllowanceIdOf<T>) -> Amount {
        self.read_allowance(&id.owner, &id.spender, &id.symbol, &id.group)
    }

    /// Overwrite the allowance with `amount`.
    pub(crate) fn set_allowance(&mut self, id: &AllowanceIdOf<T>, amount: Amount) {
        self.stage_allowance(&id.owner, &id.spender, &id.symbol, &id.group, amount);
    }

    /// Decrement the allowance by `amount`, failing if it does not cover it.
    /// Spending nothing leaves the allowance entry untouched.
    pub(crate) fn spend_allowance(
        &mut self,
        id: &AllowanceIdOf<T>,
        amount: Amount,
    ) -> Result<Amount, Error<T>> {
        let current = self.allowance(id);
        if amount == 0 {
            return Ok(current);
        }
        let remaining = current.checked_sub(amount).ok_or_else(|| {
            log::debug!(
                target: LOG_TARGET,
                "requested transfer amount={amount}, allowance={current}"
            );
            Error::<T>::AllowanceInsufficient
        })?;
        self.set_allowance(id, remaining);
        Ok(remaining)
    }
}

impl<T: Config> Pallet<T> {
    /// Allowance record for `id`.
    ///
    /// A pair that was never approved yields a zero record built in memory;
    /// nothing is written.
    pub fn allowance(id: &AllowanceIdOf<T>) -> AllowanceOf<T> {
        let amount = Allowances::<T>::get((&id.owner, &id.spender, &id.symbol, &id.group))
            .unwrap_or_default();
        id.clone().with_amount(amount)
    }

    /// Replace the allowance `request.spender` holds over `request.owner`'s
    /// tokens. `caller` must be the owner.
    pub(crate) fn do_approve(
        caller: &T::AccountId,
        request: ApproveRequestOf<T>,
    ) -> Result<AllowanceOf<T>, DispatchError> {
        Self::ensure_registered(&request.symbol, &request.group)?;
        ensure!(caller == &request.owner, Error::<T>::OwnerOnly);

        let id = request.allowance_id();
        let mut tx = LedgerTransaction::<T>::new();
        tx.set_allowance(&id, request.amount);
        tx.commit();

        log::debug!(
            target: LOG_TARGET,
            "approved {:?} to spend {} of {:?} on behalf of {:?}",
            request.spender,
            request.amount,
            request.symbol,
            request.owner
        );

        Self::deposit_event(Event::Approved {
            owner: request.owner,
            spender: request.spender,
            symbol: request.symbol,
            group: request.group,
            amount: request.amount,
        });

        Ok(id.with_amount(request.amount))
    }
}
