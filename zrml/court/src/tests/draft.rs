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
use more_asserts::assert_lt;
use test_case::test_case;

fn count_events<F>(predicate: F) -> usize
where
    F: Fn(&Event<Runtime>) -> bool,
{
    System::events()
        .into_iter()
        .filter(|record| match &record.event {
            RuntimeEvent::Court(event) => predicate(event),
            _ => false,
        })
        .count()
}

fn is_known_juror(who: &AccountIdTest) -> bool {
    JURORS.iter().any(|(juror, _)| juror == who)
}

/// Run the default scenario in a fresh externalities and draft the round in batches of the
/// specified sizes. Returns the juror weights of the round.
fn draft_in_batches(batches: Vec<u32>) -> BTreeMap<AccountIdTest, u32> {
    ExtBuilder::build().execute_with(|| {
        let dispute_id = setup_dispute(DRAFT_TERM_ID, JURORS_NUMBER);
        ensure_term_with_randomness(DRAFT_TERM_ID);
        let mut selected_jurors = 0;
        for batch_size in batches {
            let outcome = draft_and_get_outcome(FRANK, dispute_id, batch_size).unwrap();
            selected_jurors += outcome.draws();
            let weights = juror_weights(dispute_id, 0);
            assert_eq!(weights.values().sum::<u32>(), selected_jurors);
        }
        assert_eq!(selected_jurors, JURORS_NUMBER);
        juror_weights(dispute_id, 0)
    })
}

#[test]
fn draft_in_one_batch_works() {
    ExtBuilder::build().execute_with(|| {
        let dispute_id = setup_dispute(DRAFT_TERM_ID, JURORS_NUMBER);
        ensure_term_with_randomness(DRAFT_TERM_ID);
        let court_balance_before = court_balance();

        let outcome = draft_and_get_outcome(FRANK, dispute_id, JURORS_NUMBER).unwrap();

        assert!(outcome.round_complete);
        assert_eq!(outcome.draws(), JURORS_NUMBER);
        let weights = juror_weights(dispute_id, 0);
        assert_eq!(weights.values().sum::<u32>(), JURORS_NUMBER);
        assert!(weights.keys().all(is_known_juror));
        assert!(weights.values().all(|&weight| weight > 0));
        assert_eq!(outcome.jurors_drafted.into_iter().collect::<BTreeMap<_, _>>(), weights);
        for (juror, weight) in weights.iter() {
            assert_eq!(Court::juror(dispute_id, 0, juror), (*weight, false));
        }
        assert_eq!(Court::juror(dispute_id, 0, &ALICE), (0, false));
        assert_eq!(
            Court::adjudication_round(dispute_id, 0),
            Some((DRAFT_TERM_ID, 0, JURORS_NUMBER, JURORS_NUMBER, ALICE))
        );
        assert_eq!(Court::dispute(dispute_id).unwrap().state, DisputeState::Adjudicating);

        // The drafter is credited, but no funds leave the court account.
        let fee = CourtDraftFee::get() * JURORS_NUMBER as Balance;
        assert_eq!(fee_balance_of(FRANK), fee);
        assert_eq!(court_balance(), court_balance_before);

        let term = Terms::<Runtime>::get(DRAFT_TERM_ID).unwrap();
        let randomness = term.randomness.unwrap();
        assert_eq!(randomness, frame_system::BlockHash::<Runtime>::get(term.randomness_block));
        System::assert_has_event(
            Event::<Runtime>::TermRandomnessBound { term_id: DRAFT_TERM_ID, randomness }.into(),
        );
        assert_eq!(
            count_events(|event| matches!(event, Event::JurorDrafted { .. })),
            JURORS_NUMBER as usize
        );
        System::assert_has_event(
            Event::<Runtime>::DisputeStateChanged {
                dispute_id,
                state: DisputeState::Adjudicating,
            }
            .into(),
        );
        System::assert_last_event(
            Event::<Runtime>::DraftFeeCredited { who: FRANK, amount: fee }.into(),
        );

        // The snapshot is no longer needed.
        assert!(JurorTreeSnapshots::<Runtime>::get(DRAFT_TERM_ID).is_none());
        assert_eq!(ScheduledDrafts::<Runtime>::get(DRAFT_TERM_ID), 0);
    });
}

#[test_case(vec![1; 10]; "ten batches of one")]
#[test_case(vec![3, 3, 4]; "uneven batches")]
#[test_case(vec![5, 20]; "oversized last batch")]
#[test_case(vec![64]; "single oversized batch")]
fn batch_partition_does_not_change_drafted_jurors(batches: Vec<u32>) {
    assert_eq!(draft_in_batches(batches), draft_in_batches(vec![JURORS_NUMBER]));
}

#[test]
fn draft_of_half_the_jurors_leaves_round_incomplete() {
    ExtBuilder::build().execute_with(|| {
        let dispute_id = setup_dispute(DRAFT_TERM_ID, JURORS_NUMBER);
        ensure_term_with_randomness(DRAFT_TERM_ID);

        let outcome = draft_and_get_outcome(FRANK, dispute_id, JURORS_NUMBER / 2).unwrap();

        assert!(!outcome.round_complete);
        assert_eq!(outcome.draws(), JURORS_NUMBER / 2);
        assert_eq!(
            Court::adjudication_round(dispute_id, 0),
            Some((DRAFT_TERM_ID, 0, JURORS_NUMBER, JURORS_NUMBER / 2, ALICE))
        );
        assert_eq!(Court::dispute(dispute_id).unwrap().state, DisputeState::PreDraft);
        assert_eq!(
            fee_balance_of(FRANK),
            CourtDraftFee::get() * (JURORS_NUMBER / 2) as Balance
        );
        assert!(JurorTreeSnapshots::<Runtime>::get(DRAFT_TERM_ID).is_some());
        assert_eq!(
            count_events(|event| matches!(event, Event::DisputeStateChanged { .. })),
            0
        );
    });
}

#[test]
fn draft_of_double_the_jurors_drafts_only_remaining_jurors() {
    ExtBuilder::build().execute_with(|| {
        let dispute_id = setup_dispute(DRAFT_TERM_ID, JURORS_NUMBER);
        ensure_term_with_randomness(DRAFT_TERM_ID);

        let outcome = draft_and_get_outcome(FRANK, dispute_id, 2 * JURORS_NUMBER).unwrap();

        assert!(outcome.round_complete);
        assert_eq!(outcome.draws(), JURORS_NUMBER);
        // Only the jurors actually drafted are paid for.
        assert_eq!(fee_balance_of(FRANK), CourtDraftFee::get() * JURORS_NUMBER as Balance);
    });
}

#[test]
fn draft_works_over_ten_terms() {
    let expected_weights = draft_in_batches(vec![JURORS_NUMBER]);
    ExtBuilder::build().execute_with(|| {
        let dispute_id = setup_dispute(DRAFT_TERM_ID, JURORS_NUMBER);
        ensure_term_with_randomness(DRAFT_TERM_ID);

        for i in 0..JURORS_NUMBER as TermId {
            set_term(DRAFT_TERM_ID + i);
            assert_ok!(Court::draft(signed(FRANK), dispute_id, 1));
            assert_eq!(
                <Court as TermScheduler<Runtime>>::last_ensured_term_id(),
                DRAFT_TERM_ID + i
            );
        }

        let delayed_terms = JURORS_NUMBER as TermId - 1;
        assert_eq!(
            Court::adjudication_round(dispute_id, 0),
            Some((DRAFT_TERM_ID, delayed_terms, JURORS_NUMBER, JURORS_NUMBER, ALICE))
        );
        assert_eq!(Court::dispute(dispute_id).unwrap().state, DisputeState::Adjudicating);
        assert_eq!(juror_weights(dispute_id, 0), expected_weights);
    });
}

#[test]
fn draft_works_ten_terms_after_draft_term() {
    ExtBuilder::build().execute_with(|| {
        let dispute_id = setup_dispute(DRAFT_TERM_ID, JURORS_NUMBER);
        ensure_term_with_randomness(DRAFT_TERM_ID + 10);

        assert_ok!(Court::draft(signed(FRANK), dispute_id, JURORS_NUMBER));

        assert_eq!(
            Court::adjudication_round(dispute_id, 0),
            Some((DRAFT_TERM_ID, 10, JURORS_NUMBER, JURORS_NUMBER, ALICE))
        );
    });
}

#[test]
fn draft_executes_single_missing_term_transition() {
    ExtBuilder::build().execute_with(|| {
        let dispute_id = setup_dispute(DRAFT_TERM_ID, JURORS_NUMBER);
        ensure_term_with_randomness(DRAFT_TERM_ID);
        set_term(DRAFT_TERM_ID + 1);

        assert_ok!(Court::draft(signed(FRANK), dispute_id, JURORS_NUMBER));

        assert_eq!(<Court as TermScheduler<Runtime>>::last_ensured_term_id(), DRAFT_TERM_ID + 1);
        assert_eq!(
            Court::adjudication_round(dispute_id, 0),
            Some((DRAFT_TERM_ID, 1, JURORS_NUMBER, JURORS_NUMBER, ALICE))
        );
    });
}

#[test]
fn draft_fails_if_it_executes_transition_into_draft_term() {
    ExtBuilder::build().execute_with(|| {
        let dispute_id = setup_dispute(DRAFT_TERM_ID, JURORS_NUMBER);
        ensure_term(DRAFT_TERM_ID - 1);
        set_term(DRAFT_TERM_ID);

        for _ in 0..3 {
            assert_noop!(
                Court::draft(signed(FRANK), dispute_id, JURORS_NUMBER),
                Error::<Runtime>::RandomnessNotYetAvailable
            );
            assert_eq!(
                <Court as TermScheduler<Runtime>>::last_ensured_term_id(),
                DRAFT_TERM_ID - 1
            );
            run_blocks(1);
        }

        assert_ok!(Court::heartbeat(signed(FRANK), 1));
        run_blocks(2);
        assert_ok!(Court::draft(signed(FRANK), dispute_id, JURORS_NUMBER));
    });
}

#[test]
fn draft_fails_if_term_clock_lags_behind_by_more_than_one_term() {
    ExtBuilder::build().execute_with(|| {
        let dispute_id = setup_dispute(DRAFT_TERM_ID, JURORS_NUMBER);
        ensure_term_with_randomness(DRAFT_TERM_ID);
        set_term(DRAFT_TERM_ID + 2);

        assert_noop!(
            Court::draft(signed(FRANK), dispute_id, JURORS_NUMBER),
            Error::<Runtime>::TooManyTransitions
        );
    });
}

#[test]
fn draft_fails_before_draft_term() {
    ExtBuilder::build().execute_with(|| {
        let dispute_id = setup_dispute(DRAFT_TERM_ID, JURORS_NUMBER);
        ensure_term_with_randomness(DRAFT_TERM_ID - 1);

        assert_noop!(
            Court::draft(signed(FRANK), dispute_id, JURORS_NUMBER),
            Error::<Runtime>::NotDraftTerm
        );
    });
}

#[test]
fn draft_reports_not_draft_term_even_if_term_clock_lags_behind() {
    ExtBuilder::build().execute_with(|| {
        let dispute_id = setup_dispute(DRAFT_TERM_ID, JURORS_NUMBER);
        set_term(DRAFT_TERM_ID - 1);

        assert_noop!(
            Court::draft(signed(FRANK), dispute_id, JURORS_NUMBER),
            Error::<Runtime>::NotDraftTerm
        );
    });
}

#[test]
fn draft_fails_until_randomness_block_is_produced() {
    ExtBuilder::build().execute_with(|| {
        let dispute_id = setup_dispute(DRAFT_TERM_ID, JURORS_NUMBER);
        ensure_term(DRAFT_TERM_ID);
        let randomness_block = Terms::<Runtime>::get(DRAFT_TERM_ID).unwrap().randomness_block;
        assert_eq!(randomness_block, System::block_number() + 1);

        assert_noop!(
            Court::draft(signed(FRANK), dispute_id, JURORS_NUMBER),
            Error::<Runtime>::RandomnessNotYetAvailable
        );
        run_to_block(randomness_block);
        assert_noop!(
            Court::draft(signed(FRANK), dispute_id, JURORS_NUMBER),
            Error::<Runtime>::RandomnessNotYetAvailable
        );
        run_to_block(randomness_block + 1);
        assert_ok!(Court::draft(signed(FRANK), dispute_id, JURORS_NUMBER));
    });
}

#[test_case(1, true)]
#[test_case(CourtRandomnessWindow::get(), true)]
#[test_case(CourtRandomnessWindow::get() + 1, false)]
fn draft_respects_randomness_window(blocks_after_randomness_block: u64, succeeds: bool) {
    ExtBuilder::build().execute_with(|| {
        let dispute_id = setup_dispute(DRAFT_TERM_ID, JURORS_NUMBER);
        ensure_term(DRAFT_TERM_ID);
        let randomness_block = Terms::<Runtime>::get(DRAFT_TERM_ID).unwrap().randomness_block;
        run_to_block(randomness_block + blocks_after_randomness_block);

        if succeeds {
            assert_ok!(Court::draft(signed(FRANK), dispute_id, JURORS_NUMBER));
        } else {
            assert_noop!(
                Court::draft(signed(FRANK), dispute_id, JURORS_NUMBER),
                Error::<Runtime>::RandomnessExpired
            );
        }
    });
}

#[test]
fn bound_randomness_outlives_randomness_window() {
    let expected_weights = draft_in_batches(vec![JURORS_NUMBER]);
    ExtBuilder::build().execute_with(|| {
        let dispute_id = setup_dispute(DRAFT_TERM_ID, JURORS_NUMBER);
        ensure_term_with_randomness(DRAFT_TERM_ID);
        assert_ok!(Court::draft(signed(FRANK), dispute_id, 1));
        let randomness = Terms::<Runtime>::get(DRAFT_TERM_ID).unwrap().randomness;
        assert!(randomness.is_some());

        run_blocks(CourtRandomnessWindow::get() + 10);
        assert_ok!(Court::draft(signed(FRANK), dispute_id, JURORS_NUMBER));

        assert_eq!(Terms::<Runtime>::get(DRAFT_TERM_ID).unwrap().randomness, randomness);
        assert_eq!(
            count_events(|event| matches!(event, Event::TermRandomnessBound { .. })),
            1
        );
        assert_eq!(juror_weights(dispute_id, 0), expected_weights);
    });
}

#[test]
fn draft_fails_on_complete_round() {
    ExtBuilder::build().execute_with(|| {
        let dispute_id = setup_dispute(DRAFT_TERM_ID, JURORS_NUMBER);
        ensure_term_with_randomness(DRAFT_TERM_ID);
        assert_ok!(Court::draft(signed(FRANK), dispute_id, JURORS_NUMBER));

        assert_noop!(
            Court::draft(signed(FRANK), dispute_id, 1),
            Error::<Runtime>::RoundAlreadyDrafted
        );
        assert_eq!(
            count_events(|event| matches!(event, Event::DisputeStateChanged { .. })),
            1
        );
    });
}

#[test]
fn draft_fails_on_unknown_dispute() {
    ExtBuilder::build().execute_with(|| {
        setup_dispute(DRAFT_TERM_ID, JURORS_NUMBER);
        ensure_term_with_randomness(DRAFT_TERM_ID);
        assert_noop!(
            Court::draft(signed(FRANK), 1, JURORS_NUMBER),
            Error::<Runtime>::DisputeDoesNotExist
        );
    });
}

#[test]
fn draft_fails_on_zero_batch_size() {
    ExtBuilder::build().execute_with(|| {
        let dispute_id = setup_dispute(DRAFT_TERM_ID, JURORS_NUMBER);
        ensure_term_with_randomness(DRAFT_TERM_ID);
        assert_noop!(
            Court::draft(signed(FRANK), dispute_id, 0),
            Error::<Runtime>::InvalidBatchSize
        );
    });
}

#[test]
fn draft_fails_without_active_stake() {
    ExtBuilder::build().execute_with(|| {
        assert_ok!(Court::create_dispute(
            signed(ALICE),
            ALICE,
            POSSIBLE_RULINGS,
            JURORS_NUMBER,
            DRAFT_TERM_ID,
        ));
        ensure_term_with_randomness(DRAFT_TERM_ID);
        assert_noop!(
            Court::draft(signed(FRANK), 0, JURORS_NUMBER),
            Error::<Runtime>::InsufficientActiveStake
        );
    });
}

#[test]
fn draft_samples_stake_active_at_the_start_of_draft_term() {
    ExtBuilder::build().execute_with(|| {
        let jurors_number = CourtMaxJurorsPerRound::get();
        assert_ok!(Court::activate(signed(BOB), 500 * BASE));
        assert_ok!(Court::create_dispute(
            signed(ALICE),
            ALICE,
            POSSIBLE_RULINGS,
            jurors_number,
            DRAFT_TERM_ID,
        ));
        // Requested during the term before the draft term, so active at the draft term.
        ensure_term(DRAFT_TERM_ID - 1);
        assert_ok!(Court::activate(signed(CHARLIE), 1_000 * BASE));
        // Requested during the draft term, so invisible to its drafts.
        ensure_term(DRAFT_TERM_ID);
        assert_ok!(Court::activate(signed(DAVE), 1_500 * BASE));
        assert_ok!(Court::deactivate(signed(BOB), 500 * BASE));
        run_blocks(2);
        ensure_term(DRAFT_TERM_ID + 1);

        let snapshot = JurorTreeSnapshots::<Runtime>::get(DRAFT_TERM_ID).unwrap();
        assert_eq!(snapshot.total_stake().unwrap(), 1_500 * BASE);
        assert_eq!(JurorTree::<Runtime>::get().total_stake().unwrap(), 2_500 * BASE);

        assert_ok!(Court::draft(signed(FRANK), 0, jurors_number));
        let weights = juror_weights(0, 0);
        assert!(!weights.contains_key(&DAVE));
        assert!(weights.keys().all(|juror| [BOB, CHARLIE].contains(juror)));
        assert_eq!(weights.values().sum::<u32>(), jurors_number);
    });
}

#[test]
fn snapshot_is_kept_until_all_rounds_of_draft_term_are_drafted() {
    ExtBuilder::build().execute_with(|| {
        let dispute_id = setup_dispute(DRAFT_TERM_ID, JURORS_NUMBER);
        assert_ok!(Court::create_dispute(
            signed(ALICE),
            ALICE,
            POSSIBLE_RULINGS,
            1,
            DRAFT_TERM_ID,
        ));
        ensure_term_with_randomness(DRAFT_TERM_ID);
        assert_eq!(ScheduledDrafts::<Runtime>::get(DRAFT_TERM_ID), 2);

        assert_ok!(Court::draft(signed(FRANK), dispute_id + 1, 1));
        assert_eq!(ScheduledDrafts::<Runtime>::get(DRAFT_TERM_ID), 1);
        assert!(JurorTreeSnapshots::<Runtime>::get(DRAFT_TERM_ID).is_some());

        assert_ok!(Court::draft(signed(FRANK), dispute_id, JURORS_NUMBER));
        assert_eq!(ScheduledDrafts::<Runtime>::get(DRAFT_TERM_ID), 0);
        assert!(JurorTreeSnapshots::<Runtime>::get(DRAFT_TERM_ID).is_none());
    });
}

#[test]
fn draft_values_depend_on_dispute_round_and_index() {
    ExtBuilder::build().execute_with(|| {
        let seed = sp_core::H256::repeat_byte(7);
        let total = 5_000 * BASE;
        let value = |dispute_id, round_id, draw_index| {
            Court::draw_value(&seed, dispute_id, round_id, draw_index, total).unwrap()
        };
        for draw_index in 0..JURORS_NUMBER {
            assert_lt!(value(0, 0, draw_index), total);
        }
        assert_eq!(value(0, 0, 0), value(0, 0, 0));
        assert_ne!(value(0, 0, 0), value(1, 0, 0));
        assert_ne!(value(0, 0, 0), value(0, 1, 0));
        assert_ne!(value(0, 0, 0), value(0, 0, 1));
        assert_eq!(
            Court::draw_value(&seed, 0, 0, 0, 0),
            Err(Error::<Runtime>::InsufficientActiveStake.into())
        );
    });
}
