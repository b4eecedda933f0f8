//! Ledger records and the request/response shapes used at the call boundary.

use codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_std::prelude::*;

/// Token amount. Every arithmetic operation on it is checked.
pub type Amount = u64;

/// Registered token type, identified by `(symbol, group)`.
#[derive(Clone, Encode, Decode, Eq, PartialEq, Debug, MaxEncodedLen, TypeInfo)]
pub struct TokenType<BoundedString> {
    /// Human readable name (e.g. "SomeToken")
    pub name: BoundedString,
    /// Ticker symbol, never empty
    pub symbol: BoundedString,
    /// Sub-ledger partition; empty for the default partition
    pub group: BoundedString,
    pub decimals: u8,
    /// Minted in full to the deploying account at bootstrap
    pub total_supply: Amount,
}

/// Unvalidated token definition handed to bootstrap.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct TokenTypeConfig {
    pub name: Vec<u8>,
    pub symbol: Vec<u8>,
    pub group: Vec<u8>,
    pub decimals: u8,
    pub total_supply: Amount,
}

/// Result of bootstrapping a token type.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum BootstrapOutcome {
    /// The token type was registered and its supply minted.
    Created,
    /// A token type with the same `(symbol, group)` was already registered.
    /// Nothing was written.
    AlreadyExists,
}

/// Key of a single allowance entry.
#[derive(Clone, Encode, Decode, Eq, PartialEq, Debug, TypeInfo)]
pub struct AllowanceId<AccountId, BoundedString> {
    pub owner: AccountId,
    pub spender: AccountId,
    pub symbol: BoundedString,
    pub group: BoundedString,
}

impl<AccountId, BoundedString> AllowanceId<AccountId, BoundedString> {
    pub fn with_amount(self, amount: Amount) -> Allowance<AccountId, BoundedString> {
        Allowance {
            owner: self.owner,
            spender: self.spender,
            symbol: self.symbol,
            group: self.group,
            amount,
        }
    }
}

/// Amount `owner` has authorized `spender` to move on its behalf.
#[derive(Clone, Encode, Decode, Eq, PartialEq, Debug, TypeInfo)]
pub struct Allowance<AccountId, BoundedString> {
    pub owner: AccountId,
    pub spender: AccountId,
    pub symbol: BoundedString,
    pub group: BoundedString,
    pub amount: Amount,
}

#[derive(Clone, Encode, Decode, Eq, PartialEq, Debug, TypeInfo)]
pub struct ApproveRequest<AccountId, BoundedString> {
    pub owner: AccountId,
    pub spender: AccountId,
    pub symbol: BoundedString,
    pub group: BoundedString,
    pub amount: Amount,
}

impl<AccountId: Clone, BoundedString: Clone> ApproveRequest<AccountId, BoundedString> {
    pub fn allowance_id(&self) -> AllowanceId<AccountId, BoundedString> {
        AllowanceId {
            owner: self.owner.clone(),
            spender: self.spender.clone(),
            symbol: self.symbol.clone(),
            group: self.group.clone(),
        }
    }
}

/// Direct transfer of the caller's own balance.
#[derive(Clone, Encode, Decode, Eq, PartialEq, Debug, TypeInfo)]
pub struct TransferRequest<AccountId, BoundedString> {
    pub recipient: AccountId,
    pub symbol: BoundedString,
    pub group: BoundedString,
    pub amount: Amount,
}

/// Delegated transfer. The spender is never part of the request; it is the
/// resolved caller.
#[derive(Clone, Encode, Decode, Eq, PartialEq, Debug, TypeInfo)]
pub struct TransferFromRequest<AccountId, BoundedString> {
    pub owner: AccountId,
    pub recipient: AccountId,
    pub symbol: BoundedString,
    pub group: BoundedString,
    pub amount: Amount,
}

#[derive(Clone, Encode, Decode, Eq, PartialEq, Debug, TypeInfo)]
pub struct TransferFromResponse<AccountId> {
    pub owner: AccountId,
    pub recipient: AccountId,
    pub amount: Amount,
}
