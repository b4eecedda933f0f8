use crate as pallet_token_ledger;
use frame_support::{derive_impl, parameter_types, traits::ConstU32};
use sp_runtime::BuildStorage;

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        TokenLedger: pallet_token_ledger,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type Block = Block;
}

/// Deploying account; receives the genesis supply.
pub const DEPLOYER: u64 = 1;
/// Spender used across the allowance tests.
pub const SPENDER: u64 = 2;
/// Recipient used across the transfer tests.
pub const RECIPIENT: u64 = 3;

pub const SYMBOL: &[u8] = b"@";
pub const TOTAL_SUPPLY: u64 = 10_000_000;

parameter_types! {
    pub const Deployer: u64 = DEPLOYER;
}

pub struct EnsureDeployer;
impl frame_support::traits::EnsureOrigin<RuntimeOrigin> for EnsureDeployer {
    type Success = u64;

    fn try_origin(o: RuntimeOrigin) -> Result<Self::Success, RuntimeOrigin> {
        match o.clone().into() {
            Ok(frame_system::RawOrigin::Signed(account)) if account == Deployer::get() => {
                Ok(account)
            }
            _ => Err(o),
        }
    }

    #[cfg(feature = "runtime-benchmarks")]
    fn try_successful_origin() -> Result<RuntimeOrigin, ()> {
        Ok(RuntimeOrigin::signed(Deployer::get()))
    }
}

impl pallet_token_ledger::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type DeployOrigin = EnsureDeployer;
    type StringLimit = ConstU32<32>;
    type WeightInfo = ();
}

/// Bound a byte string to the mock's `StringLimit`.
pub fn bounded(raw: &[u8]) -> pallet_token_ledger::TokenString<Test> {
    raw.to_vec().try_into().expect("test strings fit the string limit")
}

/// Balance of `account` in the genesis token.
pub fn balance(account: u64) -> u64 {
    TokenLedger::balance_of(&account, &bounded(SYMBOL), &bounded(b""))
}

/// Allowance `spender` holds over `owner` in the genesis token.
pub fn allowance(owner: u64, spender: u64) -> u64 {
    TokenLedger::allowance(&pallet_token_ledger::AllowanceId {
        owner,
        spender,
        symbol: bounded(SYMBOL),
        group: bounded(b""),
    })
    .amount
}

/// Hash of the whole storage trie, used to assert that nothing was written.
pub fn storage_root() -> Vec<u8> {
    sp_io::storage::root(sp_runtime::StateVersion::V1)
}

// Build genesis storage according to the mock runtime.
pub fn new_test_ext() -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_token_ledger::GenesisConfig::<Test> {
        tokens: vec![(
            DEPLOYER,
            b"SomeToken".to_vec(),
            SYMBOL.to_vec(),
            Vec::new(),
            2,
            TOTAL_SUPPLY,
        )],
    }
    .assimilate_storage(&mut t)
    .unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| System::set_block_number(1));
    ext
}
