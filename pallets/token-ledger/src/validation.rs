//! Request checks run before any ledger state is read.

use frame_support::ensure;
use sp_std::prelude::*;

use crate::{
    Config, Error, Pallet, TokenString, TokenType, TokenTypeConfig, TokenTypeOf, TokenTypes,
};

impl<T: Config> Pallet<T> {
    pub(crate) fn bounded_string(raw: Vec<u8>) -> Result<TokenString<T>, Error<T>> {
        raw.try_into().map_err(|_| Error::<T>::StringTooLong)
    }

    /// Bound a raw `(symbol, group)` pair. The symbol must not be empty; an
    /// empty group selects the default partition.
    pub(crate) fn token_key(
        symbol: Vec<u8>,
        group: Vec<u8>,
    ) -> Result<(TokenString<T>, TokenString<T>), Error<T>> {
        ensure!(!symbol.is_empty(), Error::<T>::EmptySymbol);
        Ok((Self::bounded_string(symbol)?, Self::bounded_string(group)?))
    }

    pub(crate) fn ensure_registered(
        symbol: &TokenString<T>,
        group: &TokenString<T>,
    ) -> Result<(), Error<T>> {
        ensure!(TokenTypes::<T>::contains_key(symbol, group), Error::<T>::UnknownTokenType);
        Ok(())
    }

    pub(crate) fn token_type_from_config(
        config: &TokenTypeConfig,
    ) -> Result<TokenTypeOf<T>, Error<T>> {
        let (symbol, group) = Self::token_key(config.symbol.clone(), config.group.clone())?;
        Ok(TokenType {
            name: Self::bounded_string(config.name.clone())?,
            symbol,
            group,
            decimals: config.decimals,
            total_supply: config.total_supply,
        })
    }
}
