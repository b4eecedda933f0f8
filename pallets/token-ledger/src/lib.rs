#![cfg_attr(not(feature = "std"), no_std)]
// Storage getters are kept for the query surface exposed to runtime APIs
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

//! Fungible token ledger.
//!
//! Tracks balances per `(account, symbol, group)` and spending allowances per
//! `(owner, spender, symbol, group)`. Token types are registered once through
//! bootstrap, which also mints the full supply to the deploying account; there
//! is no other minting path, so the balances of a token type always add up to
//! its total supply.
//!
//! Every dispatchable stages its mutations in a `LedgerTransaction` and only
//! commits them once all checks have passed. The transaction type is private to
//! the pallet; other pallets only get the read queries.
//!
//! ```compile_fail
//! use pallet_token_ledger::ledger::LedgerTransaction;
//! ```

use frame_support::{dispatch::DispatchResult, pallet_prelude::*, traits::EnsureOrigin};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_std::prelude::*;

pub use pallet::*;

mod allowance;
mod balance;
mod bootstrap;
mod invariants;
mod ledger;
mod transfer;
pub mod types;
mod validation;
pub mod weights;

pub use types::*;
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub(crate) const LOG_TARGET: &str = "runtime::token-ledger";

/// Bounded byte string used for token names, symbols and groups.
pub type TokenString<T> = BoundedVec<u8, <T as Config>::StringLimit>;
pub type TokenTypeOf<T> = TokenType<TokenString<T>>;
pub type AllowanceIdOf<T> = AllowanceId<<T as frame_system::Config>::AccountId, TokenString<T>>;
pub type AllowanceOf<T> = Allowance<<T as frame_system::Config>::AccountId, TokenString<T>>;
pub type ApproveRequestOf<T> =
    ApproveRequest<<T as frame_system::Config>::AccountId, TokenString<T>>;
pub type TransferRequestOf<T> =
    TransferRequest<<T as frame_system::Config>::AccountId, TokenString<T>>;
pub type TransferFromRequestOf<T> =
    TransferFromRequest<<T as frame_system::Config>::AccountId, TokenString<T>>;
pub type TransferFromResponseOf<T> = TransferFromResponse<<T as frame_system::Config>::AccountId>;

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Origin allowed to register token types. Resolves to the deploying
        /// account, which receives the minted supply.
        type DeployOrigin: EnsureOrigin<Self::RuntimeOrigin, Success = Self::AccountId>;

        /// Maximum length of a token name, symbol or group.
        #[pallet::constant]
        type StringLimit: Get<u32>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    pub struct Pallet<T>(_);

    /// Registered token types keyed by (symbol, group)
    #[pallet::storage]
    #[pallet::getter(fn token_type)]
    pub type TokenTypes<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        TokenString<T>,
        Blake2_128Concat,
        TokenString<T>,
        TokenTypeOf<T>,
        OptionQuery,
    >;

    /// Balances keyed by (account, symbol, group). A missing entry reads as zero.
    #[pallet::storage]
    pub type Balances<T: Config> = StorageNMap<
        _,
        (
            NMapKey<Blake2_128Concat, T::AccountId>,
            NMapKey<Blake2_128Concat, TokenString<T>>,
            NMapKey<Blake2_128Concat, TokenString<T>>,
        ),
        Amount,
        OptionQuery,
    >;

    /// Allowances keyed by (owner, spender, symbol, group). A missing entry reads as zero.
    #[pallet::storage]
    pub type Allowances<T: Config> = StorageNMap<
        _,
        (
            NMapKey<Blake2_128Concat, T::AccountId>,
            NMapKey<Blake2_128Concat, T::AccountId>,
            NMapKey<Blake2_128Concat, TokenString<T>>,
            NMapKey<Blake2_128Concat, TokenString<T>>,
        ),
        Amount,
        OptionQuery,
    >;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// A token type was registered
        TokenTypeCreated {
            symbol: TokenString<T>,
            group: TokenString<T>,
            decimals: u8,
            total_supply: Amount,
        },
        /// The supply of a new token type was minted to its deployer
        Minted {
            to: T::AccountId,
            symbol: TokenString<T>,
            group: TokenString<T>,
            amount: Amount,
        },
        /// Tokens transferred by their holder
        Transferred {
            from: T::AccountId,
            to: T::AccountId,
            symbol: TokenString<T>,
            group: TokenString<T>,
            amount: Amount,
        },
        /// Allowance set (overwritten) by its owner
        Approved {
            owner: T::AccountId,
            spender: T::AccountId,
            symbol: TokenString<T>,
            group: TokenString<T>,
            amount: Amount,
        },
        /// Tokens transferred by a spender against an allowance
        TransferredFrom {
            owner: T::AccountId,
            spender: T::AccountId,
            recipient: T::AccountId,
            symbol: TokenString<T>,
            group: TokenString<T>,
            amount: Amount,
        },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Token symbol is empty
        EmptySymbol,
        /// Token name, symbol or group exceeds `StringLimit`
        StringTooLong,
        /// No token type registered for the (symbol, group)
        UnknownTokenType,
        /// Only the owner may set its allowances
        OwnerOnly,
        /// Debit exceeds the current balance
        InsufficientBalance,
        /// Delegated transfer exceeds the current allowance
        AllowanceInsufficient,
        /// Amount arithmetic overflowed
        ArithmeticOverflow,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Register a token type and mint its whole supply to the deployer.
        ///
        /// Re-registering an existing `(symbol, group)` succeeds without
        /// touching storage.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::init_token())]
        pub fn init_token(
            origin: OriginFor<T>,
            name: Vec<u8>,
            symbol: Vec<u8>,
            group: Vec<u8>,
            decimals: u8,
            total_supply: Amount,
        ) -> DispatchResult {
            let deployer = T::DeployOrigin::ensure_origin(origin)?;
            let config = TokenTypeConfig { name, symbol, group, decimals, total_supply };
            Self::bootstrap(&deployer, &config)?;
            Ok(())
        }

        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(
            origin: OriginFor<T>,
            to: T::AccountId,
            symbol: Vec<u8>,
            group: Vec<u8>,
            amount: Amount,
        ) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            let (symbol, group) = Self::token_key(symbol, group)?;
            Self::do_transfer(&sender, TransferRequest { recipient: to, symbol, group, amount })
        }

        /// Set the allowance of `spender` over `owner`'s tokens, replacing any
        /// previous value. The caller must be `owner`.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::approve())]
        pub fn approve(
            origin: OriginFor<T>,
            owner: T::AccountId,
            spender: T::AccountId,
            symbol: Vec<u8>,
            group: Vec<u8>,
            amount: Amount,
        ) -> DispatchResult {
            let caller = ensure_signed(origin)?;
            let (symbol, group) = Self::token_key(symbol, group)?;
            Self::do_approve(&caller, ApproveRequest { owner, spender, symbol, group, amount })?;
            Ok(())
        }

        /// Move `amount` from `owner` to `to`, spending the caller's allowance.
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::transfer_from())]
        pub fn transfer_from(
            origin: OriginFor<T>,
            owner: T::AccountId,
            to: T::AccountId,
            symbol: Vec<u8>,
            group: Vec<u8>,
            amount: Amount,
        ) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            let (symbol, group) = Self::token_key(symbol, group)?;
            Self::do_transfer_from(
                &spender,
                TransferFromRequest { owner, recipient: to, symbol, group, amount },
            )?;
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Token types to bootstrap:
        /// (deployer, name, symbol, group, decimals, total supply)
        pub tokens: Vec<(T::AccountId, Vec<u8>, Vec<u8>, Vec<u8>, u8, Amount)>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            for (deployer, name, symbol, group, decimals, total_supply) in &self.tokens {
                let config = TokenTypeConfig {
                    name: name.clone(),
                    symbol: symbol.clone(),
                    group: group.clone(),
                    decimals: *decimals,
                    total_supply: *total_supply,
                };
                Pallet::<T>::bootstrap(deployer, &config)
                    .expect("Genesis token type must be valid");
            }
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Balance of `account`, zero when nothing is stored.
    pub fn balance_of(
        account: &T::AccountId,
        symbol: &TokenString<T>,
        group: &TokenString<T>,
    ) -> Amount {
        Balances::<T>::get((account, symbol, group)).unwrap_or_default()
    }

    pub fn name(symbol: &TokenString<T>, group: &TokenString<T>) -> Option<TokenString<T>> {
        Self::token_type(symbol, group).map(|token| token.name)
    }

    pub fn decimals(symbol: &TokenString<T>, group: &TokenString<T>) -> Option<u8> {
        Self::token_type(symbol, group).map(|token| token.decimals)
    }

    pub fn total_supply(symbol: &TokenString<T>, group: &TokenString<T>) -> Option<Amount> {
        Self::token_type(symbol, group).map(|token| token.total_supply)
    }
}
