//! Weights for pallet-token-ledger.
//!
//! Hand-estimated from the storage accesses of each call until the
//! benchmarks in `benchmarking.rs` are run against reference hardware.

#![allow(unused_parens)]
#![allow(unused_imports)]

use core::marker::PhantomData;
use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};

pub trait WeightInfo {
    fn init_token() -> Weight;
    fn transfer() -> Weight;
    fn approve() -> Weight;
    fn transfer_from() -> Weight;
}

pub struct SubstrateWeight<T>(PhantomData<T>);

impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    /// Storage: `TokenLedger::TokenTypes` (r:1 w:1)
    /// Storage: `TokenLedger::Balances` (r:1 w:1)
    fn init_token() -> Weight {
        Weight::from_parts(20_000_000, 3_700)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    /// Storage: `TokenLedger::TokenTypes` (r:1 w:0)
    /// Storage: `TokenLedger::Balances` (r:2 w:2)
    fn transfer() -> Weight {
        Weight::from_parts(25_000_000, 6_200)
            .saturating_add(T::DbWeight::get().reads(3_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    /// Storage: `TokenLedger::TokenTypes` (r:1 w:0)
    /// Storage: `TokenLedger::Allowances` (r:0 w:1)
    fn approve() -> Weight {
        Weight::from_parts(15_000_000, 3_700)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `TokenLedger::TokenTypes` (r:1 w:0)
    /// Storage: `TokenLedger::Allowances` (r:1 w:1)
    /// Storage: `TokenLedger::Balances` (r:2 w:2)
    fn transfer_from() -> Weight {
        Weight::from_parts(35_000_000, 8_700)
            .saturating_add(T::DbWeight::get().reads(4_u64))
            .saturating_add(T::DbWeight::get().writes(3_u64))
    }
}

impl WeightInfo for () {
    fn init_token() -> Weight {
        Weight::from_parts(20_000_000, 3_700)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn transfer() -> Weight {
        Weight::from_parts(25_000_000, 6_200)
            .saturating_add(RocksDbWeight::get().reads(3_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn approve() -> Weight {
        Weight::from_parts(15_000_000, 3_700)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn transfer_from() -> Weight {
        Weight::from_parts(35_000_000, 8_700)
            .saturating_add(RocksDbWeight::get().reads(4_u64))
            .saturating_add(RocksDbWeight::get().writes(3_u64))
    }
}
