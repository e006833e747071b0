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

use super::*;
use test_case::test_case;

#[test]
fn create_dispute_works() {
    ExtBuilder::build().execute_with(|| {
        let court_balance_before = court_balance();
        assert_ok!(Court::create_dispute(
            signed(ALICE),
            BOB,
            POSSIBLE_RULINGS,
            JURORS_NUMBER,
            DRAFT_TERM_ID,
        ));

        let dispute = Court::dispute(0).unwrap();
        assert_eq!(dispute.subject, BOB);
        assert_eq!(dispute.possible_rulings, POSSIBLE_RULINGS);
        assert_eq!(dispute.state, DisputeState::PreDraft);
        assert_eq!(dispute.final_ruling, 0);
        assert_eq!(dispute.round_count, 1);
        assert_eq!(
            Court::adjudication_round(0, 0),
            Some((DRAFT_TERM_ID, 0, JURORS_NUMBER, 0, ALICE))
        );
        assert_eq!(ScheduledDrafts::<Runtime>::get(DRAFT_TERM_ID), 1);
        assert_eq!(crate::NextDisputeId::<Runtime>::get(), 1);

        let deposit = CourtDraftFee::get() * JURORS_NUMBER as Balance;
        assert_eq!(court_balance(), court_balance_before + deposit);
        assert_eq!(Balances::free_balance(ALICE), INITIAL_BALANCE - deposit);
        System::assert_last_event(
            Event::<Runtime>::DisputeCreated {
                dispute_id: 0,
                subject: BOB,
                creator: ALICE,
                possible_rulings: POSSIBLE_RULINGS,
                jurors_number: JURORS_NUMBER,
                draft_term_id: DRAFT_TERM_ID,
            }
            .into(),
        );
    });
}

#[test]
fn create_dispute_assigns_consecutive_ids() {
    ExtBuilder::build().execute_with(|| {
        for _ in 0..3 {
            assert_ok!(Court::create_dispute(signed(ALICE), BOB, 2, 1, DRAFT_TERM_ID));
        }
        assert!(Court::dispute(2).is_some());
        assert!(Court::dispute(3).is_none());
        assert_eq!(ScheduledDrafts::<Runtime>::get(DRAFT_TERM_ID), 3);
    });
}

#[test_case(0)]
#[test_case(1)]
#[test_case(CourtMaxPossibleRulings::get() + 1)]
fn create_dispute_fails_on_invalid_possible_rulings(possible_rulings: u8) {
    ExtBuilder::build().execute_with(|| {
        assert_noop!(
            Court::create_dispute(
                signed(ALICE),
                BOB,
                possible_rulings,
                JURORS_NUMBER,
                DRAFT_TERM_ID
            ),
            Error::<Runtime>::InvalidPossibleRulings
        );
    });
}

#[test_case(0)]
#[test_case(CourtMaxJurorsPerRound::get() + 1)]
fn create_dispute_fails_on_invalid_jurors_number(jurors_number: u32) {
    ExtBuilder::build().execute_with(|| {
        assert_noop!(
            Court::create_dispute(
                signed(ALICE),
                BOB,
                POSSIBLE_RULINGS,
                jurors_number,
                DRAFT_TERM_ID
            ),
            Error::<Runtime>::InvalidJurorsNumber
        );
    });
}

#[test_case(2, 1)]
#[test_case(2, 2)]
#[test_case(3, 0)]
fn create_dispute_fails_if_draft_term_is_not_in_the_future(
    current_term_id: TermId,
    draft_term_id: TermId,
) {
    ExtBuilder::build().execute_with(|| {
        ensure_term(current_term_id);
        assert_noop!(
            Court::create_dispute(
                signed(ALICE),
                BOB,
                POSSIBLE_RULINGS,
                JURORS_NUMBER,
                draft_term_id
            ),
            Error::<Runtime>::DraftTermNotInFuture
        );
    });
}

#[test]
fn create_dispute_ensures_current_term() {
    ExtBuilder::build().execute_with(|| {
        set_term(1);
        // Term 1 is current after the implicit transition.
        assert_noop!(
            Court::create_dispute(signed(ALICE), BOB, POSSIBLE_RULINGS, JURORS_NUMBER, 1),
            Error::<Runtime>::DraftTermNotInFuture
        );
        assert_ok!(Court::create_dispute(signed(ALICE), BOB, POSSIBLE_RULINGS, JURORS_NUMBER, 2));
        assert_eq!(<Court as TermScheduler<Runtime>>::last_ensured_term_id(), 1);
    });
}

#[test]
fn create_dispute_fails_if_term_clock_lags_behind() {
    ExtBuilder::build().execute_with(|| {
        set_term(2);
        assert_noop!(
            Court::create_dispute(
                signed(ALICE),
                BOB,
                POSSIBLE_RULINGS,
                JURORS_NUMBER,
                DRAFT_TERM_ID
            ),
            Error::<Runtime>::TooManyTransitions
        );
    });
}

#[test]
fn create_dispute_fails_if_creator_cannot_pay_draft_fees() {
    ExtBuilder::build().execute_with(|| {
        assert!(Court::create_dispute(
            signed(FRANK),
            BOB,
            POSSIBLE_RULINGS,
            JURORS_NUMBER,
            DRAFT_TERM_ID
        )
        .is_err());
        assert!(Court::dispute(0).is_none());
        assert_eq!(ScheduledDrafts::<Runtime>::get(DRAFT_TERM_ID), 0);
    });
}
