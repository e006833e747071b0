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

use crate::{
    traits::{CourtFeeLedger, JurorSortition, TermScheduler},
    types::{AdjudicationRound, Dispute, DisputeState},
    AccountIdOf, BalanceOf, Config, DisputeOf, Disputes, DraftOutcomeOf, Error, Event, Jurors,
    JurorTree, JurorTreeSnapshots, NextDisputeId, Pallet, Rounds, ScheduledDrafts,
    StakeChangeQueue, Terms, LOG_TARGET,
};
use alloc::vec::Vec;
use frame_support::{
    ensure, require_transactional,
    traits::{Currency, ExistenceRequirement, Get, ReservableCurrency},
};
use sp_runtime::{traits::Zero, DispatchError, DispatchResult};
use zeitgeist_primitives::{
    math::checked_ops_res::{CheckedAddRes, CheckedIncRes, CheckedMulRes, CheckedSubRes},
    types::{DisputeId, TermId},
};

impl<T: Config> Pallet<T> {
    #[require_transactional]
    pub(crate) fn do_heartbeat(max_transitions: u64) -> Result<u64, DispatchError> {
        ensure!(max_transitions > 0, Error::<T>::InvalidTransitionBudget);

        <Self as TermScheduler<T>>::advance_terms(max_transitions)
    }

    #[require_transactional]
    pub(crate) fn do_activate(who: AccountIdOf<T>, amount: BalanceOf<T>) -> DispatchResult {
        ensure!(!amount.is_zero(), Error::<T>::ZeroAmount);

        let term_id = Self::ensure_current_term(T::MaxAutoTermTransitions::get())?;
        let effective_term_id = term_id.checked_inc_res()?;

        let mut stake = Jurors::<T>::get(&who).unwrap_or_default();
        let target_balance = stake.target_balance().checked_add_res(&amount)?;
        ensure!(target_balance >= T::MinJurorStake::get(), Error::<T>::BelowMinJurorStake);

        let locked_before = stake.locked_balance();
        stake.request(target_balance, effective_term_id);
        // Smaller than `amount` if the activation cancels a pending deactivation.
        let additional = stake.locked_balance().checked_sub_res(&locked_before)?;
        if !additional.is_zero() {
            T::Currency::reserve(&who, additional)?;
        }

        JurorTree::<T>::try_mutate(|tree| tree.join(&who))?;
        StakeChangeQueue::<T>::insert(effective_term_id, &who, ());
        Jurors::<T>::insert(&who, stake);

        Self::deposit_event(Event::<T>::StakeActivationRequested {
            who,
            amount,
            effective_term_id,
        });

        Ok(())
    }

    #[require_transactional]
    pub(crate) fn do_deactivate(who: AccountIdOf<T>, amount: BalanceOf<T>) -> DispatchResult {
        ensure!(!amount.is_zero(), Error::<T>::ZeroAmount);

        let term_id = Self::ensure_current_term(T::MaxAutoTermTransitions::get())?;
        let effective_term_id = term_id.checked_inc_res()?;

        let mut stake = Jurors::<T>::get(&who).ok_or(Error::<T>::InsufficientStake)?;
        let target_balance = stake.target_balance();
        ensure!(amount <= target_balance, Error::<T>::InsufficientStake);
        let target_balance = target_balance.checked_sub_res(&amount)?;
        ensure!(
            target_balance.is_zero() || target_balance >= T::MinJurorStake::get(),
            Error::<T>::BelowMinJurorStake
        );

        let locked_before = stake.locked_balance();
        stake.request(target_balance, effective_term_id);
        // Funds of a pending activation never became active and are released right away. Active
        // funds stay locked until the deactivation takes effect.
        let released = locked_before.checked_sub_res(&stake.locked_balance())?;
        if !released.is_zero() {
            let missing = T::Currency::unreserve(&who, released);
            debug_assert!(missing.is_zero(), "do_deactivate: Failed to unreserve funds");
        }

        StakeChangeQueue::<T>::insert(effective_term_id, &who, ());
        Jurors::<T>::insert(&who, stake);

        Self::deposit_event(Event::<T>::StakeDeactivationRequested {
            who,
            amount,
            effective_term_id,
        });

        Ok(())
    }

    #[require_transactional]
    pub(crate) fn do_create_dispute(
        who: AccountIdOf<T>,
        subject: AccountIdOf<T>,
        possible_rulings: u8,
        jurors_number: u32,
        draft_term_id: TermId,
    ) -> DispatchResult {
        ensure!(
            (2..=T::MaxPossibleRulings::get()).contains(&possible_rulings),
            Error::<T>::InvalidPossibleRulings
        );
        ensure!(
            (1..=T::MaxJurorsPerRound::get()).contains(&jurors_number),
            Error::<T>::InvalidJurorsNumber
        );

        let term_id = Self::ensure_current_term(T::MaxAutoTermTransitions::get())?;
        ensure!(draft_term_id > term_id, Error::<T>::DraftTermNotInFuture);

        let deposit = T::DraftFee::get().checked_mul_res(&jurors_number.into())?;
        T::Currency::transfer(
            &who,
            &Self::court_account(),
            deposit,
            ExistenceRequirement::KeepAlive,
        )?;

        let dispute_id = NextDisputeId::<T>::get();
        NextDisputeId::<T>::put(dispute_id.checked_inc_res()?);
        let dispute: DisputeOf<T> = Dispute::new(subject.clone(), possible_rulings);
        let round_id = dispute.last_round_id()?;
        Disputes::<T>::insert(dispute_id, dispute);
        Rounds::<T>::insert(
            dispute_id,
            round_id,
            AdjudicationRound::new(draft_term_id, jurors_number, who.clone()),
        );
        ScheduledDrafts::<T>::try_mutate(draft_term_id, |count| {
            *count = count.checked_inc_res()?;
            Ok::<_, DispatchError>(())
        })?;

        Self::deposit_event(Event::<T>::DisputeCreated {
            dispute_id,
            subject,
            creator: who,
            possible_rulings,
            jurors_number,
            draft_term_id,
        });

        Ok(())
    }

    /// Draft the next batch of jurors for the last round of `dispute_id` and credit the draft
    /// fee to `who`.
    ///
    /// All checks and draws are performed before any storage is written. The `i`-th juror of a
    /// round is always the result of draw index `i`, no matter how the round is split into
    /// batches.
    #[require_transactional]
    pub fn do_draft(
        who: AccountIdOf<T>,
        dispute_id: DisputeId,
        batch_size: u32,
    ) -> Result<DraftOutcomeOf<T>, DispatchError> {
        let mut dispute = Disputes::<T>::get(dispute_id).ok_or(Error::<T>::DisputeDoesNotExist)?;
        let round_id = dispute.last_round_id()?;
        let mut round =
            Rounds::<T>::get(dispute_id, round_id).ok_or(Error::<T>::RoundDoesNotExist)?;
        ensure!(batch_size > 0, Error::<T>::InvalidBatchSize);

        let draft_term_id = round.draft_term_id;
        ensure!(Self::current_term_id()? >= draft_term_id, Error::<T>::NotDraftTerm);
        let term_id = Self::ensure_current_term(T::MaxAutoTermTransitions::get())?;
        ensure!(
            dispute.state == DisputeState::PreDraft && !round.is_complete(),
            Error::<T>::RoundAlreadyDrafted
        );

        let (seed, newly_bound) = Self::draft_seed(draft_term_id)?;

        let batch = batch_size.min(round.remaining());
        let snapshot =
            JurorTreeSnapshots::<T>::get(draft_term_id).ok_or(Error::<T>::StakeSnapshotNotFound)?;
        let total_stake = snapshot.total_stake()?;
        ensure!(!total_stake.is_zero(), Error::<T>::InsufficientActiveStake);
        let first_draw_index = round.selected_jurors;
        let draws = (first_draw_index..first_draw_index.checked_add_res(&batch)?)
            .map(|draw_index| {
                let value =
                    Self::draw_value(&seed, dispute_id, round_id, draw_index, total_stake)?;
                snapshot.draw(value)
            })
            .collect::<Result<Vec<_>, DispatchError>>()?;

        if newly_bound {
            Terms::<T>::try_mutate(draft_term_id, |maybe_term| {
                let term = maybe_term.as_mut().ok_or(Error::<T>::TermDoesNotExist)?;
                term.randomness = Some(seed);
                Ok::<_, DispatchError>(())
            })?;
            Self::deposit_event(Event::<T>::TermRandomnessBound {
                term_id: draft_term_id,
                randomness: seed,
            });
        }

        round.apply_draws(&draws)?;
        for juror in draws.iter() {
            Self::deposit_event(Event::<T>::JurorDrafted {
                dispute_id,
                round_id,
                juror: juror.clone(),
            });
        }

        let round_complete = round.is_complete();
        if round_complete {
            round.finalize(term_id)?;
            dispute.begin_adjudication()?;
            Disputes::<T>::insert(dispute_id, dispute);
            Self::release_draft_schedule(draft_term_id)?;
            Self::deposit_event(Event::<T>::DisputeStateChanged {
                dispute_id,
                state: DisputeState::Adjudicating,
            });
        }
        Rounds::<T>::insert(dispute_id, round_id, round);

        let fee = T::DraftFee::get().checked_mul_res(&batch.into())?;
        <Self as CourtFeeLedger<T>>::credit(&who, fee)?;

        log::debug!(
            target: LOG_TARGET,
            "Drafted {} jurors for round {} of dispute {} in term {} (complete: {})",
            batch,
            round_id,
            dispute_id,
            term_id,
            round_complete,
        );

        Ok(DraftOutcomeOf::<T>::from_draws(draws, round_complete))
    }

    #[require_transactional]
    pub(crate) fn do_withdraw_draft_fees(who: AccountIdOf<T>) -> DispatchResult {
        let amount = <Self as CourtFeeLedger<T>>::take(&who)?;
        T::Currency::transfer(
            &Self::court_account(),
            &who,
            amount,
            ExistenceRequirement::AllowDeath,
        )?;

        Self::deposit_event(Event::<T>::DraftFeesWithdrawn { who, amount });

        Ok(())
    }

    #[require_transactional]
    pub(crate) fn do_abort_draft(dispute_id: DisputeId) -> DispatchResult {
        let mut dispute = Disputes::<T>::get(dispute_id).ok_or(Error::<T>::DisputeDoesNotExist)?;
        let round_id = dispute.last_round_id()?;
        let round = Rounds::<T>::get(dispute_id, round_id).ok_or(Error::<T>::RoundDoesNotExist)?;

        let draft_term_id = round.draft_term_id;
        ensure!(Self::current_term_id()? >= draft_term_id, Error::<T>::NotDraftTerm);
        let _ = Self::ensure_current_term(T::MaxAutoTermTransitions::get())?;
        ensure!(
            dispute.state == DisputeState::PreDraft && !round.is_complete(),
            Error::<T>::RoundAlreadyDrafted
        );
        ensure!(Self::draft_term_failed(draft_term_id)?, Error::<T>::DraftNotFailed);

        dispute.fail_draft()?;
        Disputes::<T>::insert(dispute_id, dispute);
        Self::release_draft_schedule(draft_term_id)?;

        let refund = T::DraftFee::get().checked_mul_res(&round.remaining().into())?;
        <Self as CourtFeeLedger<T>>::credit(&round.triggered_by, refund)?;

        Self::deposit_event(Event::<T>::DisputeStateChanged {
            dispute_id,
            state: DisputeState::DraftFailed,
        });

        Ok(())
    }
}
