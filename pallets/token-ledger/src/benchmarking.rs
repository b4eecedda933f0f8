//! Benchmarking setup for pallet-token-ledger

use super::*;

#[allow(unused)]
use crate::Pallet as TokenLedger;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

const SYMBOL: &[u8] = b"BNCH";
const SUPPLY: Amount = 1_000_000_000;

fn bench_token() -> TokenTypeConfig {
    TokenTypeConfig {
        name: b"Bench Token".to_vec(),
        symbol: SYMBOL.to_vec(),
        group: b"bench".to_vec(),
        decimals: 6,
        total_supply: SUPPLY,
    }
}

fn token_key<T: Config>() -> (TokenString<T>, TokenString<T>) {
    let config = bench_token();
    (
        config.symbol.try_into().expect("Symbol fits the string limit"),
        config.group.try_into().expect("Group fits the string limit"),
    )
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn init_token() {
        let origin = T::DeployOrigin::try_successful_origin().expect("Deploy origin");
        let deployer = T::DeployOrigin::ensure_origin(origin.clone()).expect("Deploy origin");
        let config = bench_token();

        #[extrinsic_call]
        _(
            origin as T::RuntimeOrigin,
            config.name,
            config.symbol,
            config.group,
            config.decimals,
            config.total_supply,
        );

        let (symbol, group) = token_key::<T>();
        assert_eq!(TokenLedger::<T>::balance_of(&deployer, &symbol, &group), SUPPLY);
    }

    #[benchmark]
    fn transfer() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount: Amount = 1_000_000;
        TokenLedger::<T>::bootstrap(&caller, &bench_token()).expect("Bootstrap");
        let config = bench_token();

        #[extrinsic_call]
        _(
            RawOrigin::Signed(caller.clone()),
            recipient.clone(),
            config.symbol,
            config.group,
            amount,
        );

        let (symbol, group) = token_key::<T>();
        assert_eq!(TokenLedger::<T>::balance_of(&recipient, &symbol, &group), amount);
    }

    #[benchmark]
    fn approve() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, 0);
        TokenLedger::<T>::bootstrap(&caller, &bench_token()).expect("Bootstrap");
        let config = bench_token();

        #[extrinsic_call]
        _(
            RawOrigin::Signed(caller.clone()),
            caller.clone(),
            spender.clone(),
            config.symbol,
            config.group,
            500,
        );

        let (symbol, group) = token_key::<T>();
        let id = AllowanceId { owner: caller, spender, symbol, group };
        assert_eq!(TokenLedger::<T>::allowance(&id).amount, 500);
    }

    #[benchmark]
    fn transfer_from() {
        let owner: T::AccountId = account("owner", 0, 0);
        let spender: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        let (symbol, group) = token_key::<T>();
        TokenLedger::<T>::bootstrap(&owner, &bench_token()).expect("Bootstrap");
        TokenLedger::<T>::do_approve(
            &owner,
            ApproveRequest {
                owner: owner.clone(),
                spender: spender.clone(),
                symbol: symbol.clone(),
                group: group.clone(),
                amount: 1_000,
            },
        )
        .expect("Approve");
        let config = bench_token();

        #[extrinsic_call]
        _(
            RawOrigin::Signed(spender.clone()),
            owner.clone(),
            recipient.clone(),
            config.symbol,
            config.group,
            400,
        );

        assert_eq!(TokenLedger::<T>::balance_of(&recipient, &symbol, &group), 400);
        let id = AllowanceId { owner, spender, symbol, group };
        assert_eq!(TokenLedger::<T>::allowance(&id).amount, 600);
    }

    impl_benchmark_test_suite!(TokenLedger, crate::mock::new_test_ext(), crate::mock::Test);
}
