use frame_support::dispatch::DispatchResult;
use sp_runtime::DispatchError;

use crate::{
    ledger::LedgerTransaction, AllowanceId, Config, Event, Pallet, TransferFromRequestOf,
    TransferFromResponse, TransferFromResponseOf, TransferRequestOf, LOG_TARGET,
};

impl<T: Config> Pallet<T> {
    /// Move `sender`'s own tokens to `request.recipient`.
    pub(crate) fn do_transfer(
        sender: &T::AccountId,
        request: TransferRequestOf<T>,
    ) -> DispatchResult {
        Self::ensure_registered(&request.symbol, &request.group)?;

        let mut tx = LedgerTransaction::<T>::new();
        tx.transfer(sender, &request.recipient, &request.symbol, &request.group, request.amount)?;
        tx.commit();

        log::debug!(
            target: LOG_TARGET,
            "transferred {} {:?} from {:?} to {:?}",
            request.amount,
            request.symbol,
            sender,
            request.recipient
        );

        Self::deposit_event(Event::Transferred {
            from: sender.clone(),
            to: request.recipient,
            symbol: request.symbol,
            group: request.group,
            amount: request.amount,
        });
        Ok(())
    }

    /// Move `request.amount` from `request.owner` to `request.recipient`,
    /// spending the allowance `spender` holds over the owner's tokens.
    ///
    /// The allowance decrement and the balance transfer are staged in one
    /// transaction; if either check fails nothing is written.
    pub(crate) fn do_transfer_from(
        spender: &T::AccountId,
        request: TransferFromRequestOf<T>,
    ) -> Result<TransferFromResponseOf<T>, DispatchError> {
        Self::ensure_registered(&request.symbol, &request.group)?;

        let id = AllowanceId {
            owner: request.owner.clone(),
            spender: spender.clone(),
            symbol: request.symbol.clone(),
            group: request.group.clone(),
        };

        let mut tx = LedgerTransaction::<T>::new();
        let remaining = tx.spend_allowance(&id, request.amount)?;
        tx.transfer(
            &request.owner,
            &request.recipient,
            &request.symbol,
            &request.group,
            request.amount,
        )?;
        tx.commit();

        log::debug!(
            target: LOG_TARGET,
            "{:?} transferred {} {:?} from {:?} to {:?}, {} allowance left",
            spender,
            request.amount,
            request.symbol,
            request.owner,
            request.recipient,
            remaining
        );

        Self::deposit_event(Event::TransferredFrom {
            owner: request.owner.clone(),
            spender: spender.clone(),
            recipient: request.recipient.clone(),
            symbol: request.symbol,
            group: request.group,
            amount: request.amount,
        });

        Ok(TransferFromResponse {
            owner: request.owner,
            recipient: request.recipient,
            amount: request.amount,
        })
    }
}
