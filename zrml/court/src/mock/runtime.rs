// Copyright 2025 Forecasting Technologies LTD.
//
// This file is part of Zeitgeist.
//
// Zeitgeist is free software: you can redistribute it and/or modify it
// under the terms of the GNU General Public License as published by the
// Free Software Foundation, either version 3 of the License, or (at
// your option) any later version.
//
// Zeitgeist is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Zeitgeist. If not, see <https://www.gnu.org/licenses/>.

use crate as zrml_court;
use frame_support::{construct_runtime, derive_impl};
use frame_system::mocking::MockBlock;
use sp_runtime::traits::IdentityLookup;
use zeitgeist_primitives::{
    constants::mock::{
        BlockHashCount, CourtDraftFee, CourtMaxAutoTermTransitions, CourtMaxJurorTreeDepth,
        CourtMaxJurorsPerRound, CourtMaxPossibleRulings, CourtMaxStakeChangesPerStep,
        CourtMinJurorStake, CourtPalletId, CourtRandomnessWindow, CourtTermDuration,
        ExistentialDeposit, MaxLocks, MaxReserves, MinimumPeriod,
    },
    types::{AccountIdTest, Balance, Hash, Moment},
};

construct_runtime! {
    pub enum Runtime {
        Court: zrml_court,
        Balances: pallet_balances,
        System: frame_system,
        Timestamp: pallet_timestamp,
    }
}

#[cfg(feature = "runtime-benchmarks")]
pub struct MockBenchmarkHelper;

#[cfg(feature = "runtime-benchmarks")]
impl zrml_court::traits::CourtBenchmarkHelper<Moment> for MockBenchmarkHelper {
    fn set_timestamp(now: Moment) {
        Timestamp::set_timestamp(now);
    }
}

impl zrml_court::Config for Runtime {
    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper = MockBenchmarkHelper;
    type Currency = Balances;
    type DraftFee = CourtDraftFee;
    type MaxAutoTermTransitions = CourtMaxAutoTermTransitions;
    type MaxJurorTreeDepth = CourtMaxJurorTreeDepth;
    type MaxJurorsPerRound = CourtMaxJurorsPerRound;
    type MaxPossibleRulings = CourtMaxPossibleRulings;
    type MaxStakeChangesPerStep = CourtMaxStakeChangesPerStep;
    type MinJurorStake = CourtMinJurorStake;
    type PalletId = CourtPalletId;
    type RandomnessWindow = CourtRandomnessWindow;
    type RuntimeEvent = RuntimeEvent;
    type TermDuration = CourtTermDuration;
    type Timestamp = Timestamp;
    type WeightInfo = zrml_court::weights::WeightInfo<Runtime>;
}

#[derive_impl(pallet_balances::config_preludes::TestDefaultConfig)]
impl pallet_balances::Config for Runtime {
    type AccountStore = System;
    type Balance = Balance;
    type ExistentialDeposit = ExistentialDeposit;
    type MaxLocks = MaxLocks;
    type MaxReserves = MaxReserves;
    type ReserveIdentifier = [u8; 8];
}

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Runtime {
    type AccountData = pallet_balances::AccountData<Balance>;
    type AccountId = AccountIdTest;
    type Block = MockBlock<Runtime>;
    type BlockHashCount = BlockHashCount;
    type Hash = Hash;
    type Lookup = IdentityLookup<Self::AccountId>;
}

impl pallet_timestamp::Config for Runtime {
    type MinimumPeriod = MinimumPeriod;
    type Moment = Moment;
    type OnTimestampSet = ();
    type WeightInfo = ();
}
