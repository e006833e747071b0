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

#![cfg(all(feature = "mock", test))]

mod create_dispute;
mod draft;

use crate::{
    mock::{
        consts::*,
        ext_builder::ExtBuilder,
        runtime::{Balances, Court, Runtime, RuntimeEvent, RuntimeOrigin, System},
        utility::{run_blocks, run_to_block, set_term, term_start},
    },
    traits::{CourtFeeLedger, JurorSortition, TermScheduler},
    types::{DisputeState, JurorStake},
    Config, DraftOutcomeOf, Error, Event, JurorTree, JurorTreeSnapshots,
    ScheduledDrafts, StakeChangeQueue, Terms,
};
use alloc::{collections::BTreeMap, vec, vec::Vec};
use frame_support::{
    assert_noop, assert_ok,
    storage::with_storage_layer,
    traits::{Currency, Get, ReservableCurrency},
};
use sp_runtime::DispatchError;
use zeitgeist_primitives::{
    constants::{mock::*, BASE},
    types::{AccountIdTest, Balance, DisputeId, RoundId, TermId},
};

/// The stake of the jurors used in most tests.
const JURORS: [(AccountIdTest, Balance); 4] =
    [(BOB, 500 * BASE), (CHARLIE, 1_000 * BASE), (DAVE, 1_500 * BASE), (EVE, 2_000 * BASE)];

const DRAFT_TERM_ID: TermId = 4;
const JURORS_NUMBER: u32 = 10;
const POSSIBLE_RULINGS: u8 = 2;

fn signed(who: AccountIdTest) -> RuntimeOrigin {
    RuntimeOrigin::signed(who)
}

fn activate_jurors() {
    for (who, amount) in JURORS {
        assert_ok!(Court::activate(signed(who), amount));
    }
}

/// Activate the default jurors and let ALICE open a dispute about herself whose first round
/// requires `jurors_number` jurors drafted at `draft_term_id`.
fn setup_dispute(draft_term_id: TermId, jurors_number: u32) -> DisputeId {
    activate_jurors();
    assert_ok!(Court::create_dispute(
        signed(ALICE),
        ALICE,
        POSSIBLE_RULINGS,
        jurors_number,
        draft_term_id,
    ));
    0
}

/// Move the wall clock to `term_id` and execute all transitions up to it.
fn ensure_term(term_id: TermId) {
    set_term(term_id);
    assert_ok!(Court::heartbeat(signed(FRANK), term_id + 1));
    assert_eq!(<Court as TermScheduler<Runtime>>::last_ensured_term_id(), term_id);
}

/// Ensure `term_id` and produce the block after its randomness block.
fn ensure_term_with_randomness(term_id: TermId) {
    ensure_term(term_id);
    run_blocks(2);
}

fn draft_and_get_outcome(
    who: AccountIdTest,
    dispute_id: DisputeId,
    batch_size: u32,
) -> Result<DraftOutcomeOf<Runtime>, DispatchError> {
    with_storage_layer(|| Court::do_draft(who, dispute_id, batch_size))
}

fn juror_weights(dispute_id: DisputeId, round_id: RoundId) -> BTreeMap<AccountIdTest, u32> {
    crate::Rounds::<Runtime>::get(dispute_id, round_id)
        .unwrap()
        .juror_weights
        .into_iter()
        .map(|(juror, draft)| (juror, draft.weight))
        .collect()
}

/// The accounts whose stake changes are scheduled for `term_id` and not yet applied.
fn queued_stake_changes(term_id: TermId) -> Vec<AccountIdTest> {
    StakeChangeQueue::<Runtime>::iter_key_prefix(term_id).collect()
}

/// Fund `count` fresh accounts starting at `first` and let each of them activate `amount`.
fn activate_many_jurors(first: AccountIdTest, count: AccountIdTest, amount: Balance) {
    for who in first..first + count {
        assert_ok!(Balances::force_set_balance(RuntimeOrigin::root(), who, INITIAL_BALANCE));
        assert_ok!(Court::activate(signed(who), amount));
    }
}

fn fee_balance_of(who: AccountIdTest) -> Balance {
    <Court as CourtFeeLedger<Runtime>>::fee_balance_of(&who)
}

fn reserved_balance(who: AccountIdTest) -> Balance {
    Balances::reserved_balance(who)
}

fn court_balance() -> Balance {
    Balances::free_balance(Court::court_account())
}
