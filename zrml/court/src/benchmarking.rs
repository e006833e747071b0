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

#![cfg(feature = "runtime-benchmarks")]

use crate::{
    traits::{CourtBenchmarkHelper, CourtFeeLedger, TermScheduler},
    types::DisputeState,
    AccountIdOf, BalanceOf, Call, Config, Event, Pallet, Terms,
};
use frame_benchmarking::v2::*;
use frame_support::{
    assert_ok,
    traits::{Currency, Get},
};
use frame_system::{Pallet as System, RawOrigin};
use sp_runtime::{
    traits::{Hash, One, Saturating},
    SaturatedConversion,
};
use zeitgeist_primitives::types::TermId;

const SEED: u32 = 0;

fn funded_account<T: Config>(name: &'static str, index: u32) -> AccountIdOf<T> {
    let who: AccountIdOf<T> = account(name, index, SEED);
    let balance = min_stake::<T>().saturating_mul(100u32.into());
    let _ = T::Currency::make_free_balance_be(&who, balance);
    who
}

fn min_stake<T: Config>() -> BalanceOf<T> {
    T::MinJurorStake::get()
}

/// Move the wall clock to the start of `term_id` without executing any transitions.
fn set_term<T: Config>(term_id: TermId) {
    let genesis_term_start: u64 = Terms::<T>::get(0).unwrap().start_time.saturated_into();
    let duration: u64 = T::TermDuration::get().saturated_into();
    let now = genesis_term_start.saturating_add(duration.saturating_mul(term_id));
    T::BenchmarkHelper::set_timestamp(now.saturated_into());
}

fn ensure_term<T: Config>(term_id: TermId) {
    set_term::<T>(term_id);
    let caller: AccountIdOf<T> = whitelisted_caller();
    assert_ok!(Pallet::<T>::heartbeat(RawOrigin::Signed(caller).into(), term_id.saturating_add(1)));
}

/// Produce the block after the randomness block of `term_id` and record a hash for the
/// randomness block.
fn produce_randomness<T: Config>(term_id: TermId) {
    let randomness_block = Terms::<T>::get(term_id).unwrap().randomness_block;
    frame_system::BlockHash::<T>::insert(
        randomness_block,
        T::Hashing::hash_of(&randomness_block),
    );
    System::<T>::set_block_number(randomness_block.saturating_add(One::one()));
}

fn activate_jurors<T: Config>(count: u32) {
    for i in 0..count {
        let juror = funded_account::<T>("juror", i);
        assert_ok!(Pallet::<T>::activate(RawOrigin::Signed(juror).into(), min_stake::<T>()));
    }
}

fn setup_dispute<T: Config>(jurors_number: u32, draft_term_id: TermId) {
    let creator = funded_account::<T>("creator", 0);
    assert_ok!(Pallet::<T>::create_dispute(
        RawOrigin::Signed(creator.clone()).into(),
        creator,
        2,
        jurors_number,
        draft_term_id,
    ));
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn heartbeat(c: Linear<0, { T::MaxStakeChangesPerStep::get() }>) {
        activate_jurors::<T>(c);
        // Forces a snapshot of the juror tree.
        setup_dispute::<T>(1, 1);
        set_term::<T>(1);
        let caller: AccountIdOf<T> = whitelisted_caller();

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), 1);

        assert_eq!(<Pallet<T> as TermScheduler<T>>::last_ensured_term_id(), 1);
    }

    #[benchmark]
    fn activate() {
        let caller = funded_account::<T>("caller", 0);
        let amount = min_stake::<T>();

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), amount);

        let expected_event = <T as Config>::RuntimeEvent::from(
            Event::<T>::StakeActivationRequested { who: caller, amount, effective_term_id: 1 },
        );
        System::<T>::assert_last_event(expected_event.into());
    }

    #[benchmark]
    fn deactivate() {
        let caller = funded_account::<T>("caller", 0);
        let amount = min_stake::<T>();
        assert_ok!(Pallet::<T>::activate(
            RawOrigin::Signed(caller.clone()).into(),
            amount.saturating_mul(2u32.into()),
        ));
        ensure_term::<T>(1);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), amount);

        let expected_event = <T as Config>::RuntimeEvent::from(
            Event::<T>::StakeDeactivationRequested { who: caller, amount, effective_term_id: 2 },
        );
        System::<T>::assert_last_event(expected_event.into());
    }

    #[benchmark]
    fn create_dispute() {
        let caller = funded_account::<T>("caller", 0);
        let jurors_number = T::MaxJurorsPerRound::get();

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), caller.clone(), 2, jurors_number, 1);

        assert!(Pallet::<T>::dispute(0).is_some());
    }

    #[benchmark]
    fn draft(b: Linear<1, { T::MaxJurorsPerRound::get() }>) {
        activate_jurors::<T>(T::MaxStakeChangesPerStep::get());
        setup_dispute::<T>(b, 1);
        ensure_term::<T>(1);
        produce_randomness::<T>(1);
        let caller: AccountIdOf<T> = whitelisted_caller();

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), 0, b);

        assert_eq!(Pallet::<T>::adjudication_round(0, 0).map(|round| round.3), Some(b));
    }

    #[benchmark]
    fn withdraw_draft_fees() {
        let caller: AccountIdOf<T> = whitelisted_caller();
        let amount = min_stake::<T>();
        let _ = T::Currency::make_free_balance_be(
            &Pallet::<T>::court_account(),
            amount.saturating_mul(2u32.into()),
        );
        assert_ok!(<Pallet<T> as CourtFeeLedger<T>>::credit(&caller, amount));

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()));

        let expected_event =
            <T as Config>::RuntimeEvent::from(Event::<T>::DraftFeesWithdrawn { who: caller, amount });
        System::<T>::assert_last_event(expected_event.into());
    }

    #[benchmark]
    fn abort_draft() {
        activate_jurors::<T>(1);
        setup_dispute::<T>(T::MaxJurorsPerRound::get(), 1);
        ensure_term::<T>(1);
        // Move past the randomness window without recording the randomness block's hash.
        let randomness_block = Terms::<T>::get(1).unwrap().randomness_block;
        System::<T>::set_block_number(
            randomness_block.saturating_add(T::RandomnessWindow::get()).saturating_add(One::one()),
        );
        let caller: AccountIdOf<T> = whitelisted_caller();

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), 0);

        assert_eq!(
            Pallet::<T>::dispute(0).map(|dispute| dispute.state),
            Some(DisputeState::DraftFailed)
        );
    }

    impl_benchmark_test_suite!(
        Pallet,
        crate::mock::ext_builder::ExtBuilder::build(),
        crate::mock::runtime::Runtime
    );
}
