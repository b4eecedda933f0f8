use sp_runtime::DispatchError;

use crate::{
    ledger::LedgerTransaction, BootstrapOutcome, Config, Event, Pallet, TokenTypeConfig,
    TokenTypes, LOG_TARGET,
};

impl<T: Config> Pallet<T> {
    /// Register the token type described by `config` and mint its whole
    /// supply to `deployer`.
    ///
    /// This is the only way tokens come into existence. Registering a
    /// `(symbol, group)` that already exists writes nothing and reports
    /// [`BootstrapOutcome::AlreadyExists`].
    pub(crate) fn bootstrap(
        deployer: &T::AccountId,
        config: &TokenTypeConfig,
    ) -> Result<BootstrapOutcome, DispatchError> {
        let token = Self::token_type_from_config(config)?;

        if TokenTypes::<T>::contains_key(&token.symbol, &token.group) {
            log::info!(
                target: LOG_TARGET,
                "token type {:?}/{:?} already exists, skipping bootstrap",
                token.symbol,
                token.group
            );
            return Ok(BootstrapOutcome::AlreadyExists);
        }

        let mut tx = LedgerTransaction::<T>::new();
        tx.add(deployer, &token, token.total_supply)?;
        TokenTypes::<T>::insert(&token.symbol, &token.group, &token);
        tx.commit();

        log::info!(
            target: LOG_TARGET,
            "created token type {:?}/{:?}, minted {} to {:?}",
            token.symbol,
            token.group,
            token.total_supply,
            deployer
        );

        Self::deposit_event(Event::TokenTypeCreated {
            symbol: token.symbol.clone(),
            group: token.group.clone(),
            decimals: token.decimals,
            total_supply: token.total_supply,
        });
        Self::deposit_event(Event::Minted {
            to: deployer.clone(),
            symbol: token.symbol,
            group: token.group,
            amount: token.total_supply,
        });

        Ok(BootstrapOutcome::Created)
    }
}
