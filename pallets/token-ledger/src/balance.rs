use crate::{ledger::LedgerTransaction, types::Amount, Config, Error, TokenString, TokenTypeOf};

impl<T: Config> LedgerTransaction<T> {
    /// Current balance as seen by this transaction. Absent entries read as zero.
    pub(crate) fn balance(
        &self,
        account: &T::AccountId,
        symbol: &TokenString<T>,
        group: &TokenString<T>,
    ) -> Amount {
        self.read_balance(account, symbol, group)
    }

    /// Credit `amount` to `account`. Only bootstrap mints, so callers must
    /// have authorized the deployer before reaching this.
    pub(crate) fn add(
        &mut self,
        account: &T::AccountId,
        token: &TokenTypeOf<T>,
        amount: Amount,
    ) -> Result<Amount, Error<T>> {
        let updated = self
            .balance(account, &token.symbol, &token.group)
            .checked_add(amount)
            .ok_or(Error::<T>::ArithmeticOverflow)?;
        self.stage_balance(account, &token.symbol, &token.group, updated);
        Ok(updated)
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub(crate) fn subtract(
        &mut self,
        account: &T::AccountId,
        symbol: &TokenString<T>,
        group: &TokenString<T>,
        amount: Amount,
    ) -> Result<Amount, Error<T>> {
        let updated = self
            .balance(account, symbol, group)
            .checked_sub(amount)
            .ok_or(Error::<T>::InsufficientBalance)?;
        self.stage_balance(account, symbol, group, updated);
        Ok(updated)
    }

    /// Move `amount` from `sender` to `recipient`.
    ///
    /// Both new balances are computed before either is staged, so a failure
    /// leaves the transaction untouched. A self-transfer only checks that the
    /// balance covers `amount`, and moving nothing stages nothing.
    pub(crate) fn transfer(
        &mut self,
        sender: &T::AccountId,
        recipient: &T::AccountId,
        symbol: &TokenString<T>,
        group: &TokenString<T>,
        amount: Amount,
    ) -> Result<(), Error<T>> {
        let debited = self
            .balance(sender, symbol, group)
            .checked_sub(amount)
            .ok_or(Error::<T>::InsufficientBalance)?;

        if amount == 0 || sender == recipient {
            return Ok(());
        }

        let credited = self
            .balance(recipient, symbol, group)
            .checked_add(amount)
            .ok_or(Error::<T>::ArithmeticOverflow)?;

        self.stage_balance(sender, symbol, group, debited);
        self.stage_balance(recipient, symbol, group, credited);
        Ok(())
    }
}
