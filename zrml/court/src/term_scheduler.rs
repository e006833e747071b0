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
    traits::TermScheduler, types::Term, Config, Error, Event, JurorTree, JurorTreeSnapshots,
    LastEnsuredTermId, Pallet, ScheduledDrafts, Terms, LOG_TARGET,
};
use frame_support::{
    ensure,
    traits::{Get, Time},
};
use sp_runtime::{
    traits::{One, Saturating},
    DispatchError, SaturatedConversion,
};
use zeitgeist_primitives::{
    math::checked_ops_res::{CheckedAddRes, CheckedDivRes, CheckedIncRes},
    types::TermId,
};

impl<T> TermScheduler<T> for Pallet<T>
where
    T: Config,
{
    fn last_ensured_term_id() -> TermId {
        LastEnsuredTermId::<T>::get()
    }

    fn needed_transitions() -> Result<u64, DispatchError> {
        let last_term = Terms::<T>::get(Self::last_ensured_term_id())
            .ok_or(Error::<T>::TermDoesNotExist)?;
        let now: u64 = T::Timestamp::now().saturated_into();
        let start_time: u64 = last_term.start_time.saturated_into();
        let duration: u64 = T::TermDuration::get().saturated_into();
        now.saturating_sub(start_time).checked_div_res(&duration)
    }

    fn current_term_id() -> Result<TermId, DispatchError> {
        Self::last_ensured_term_id().checked_add_res(&Self::needed_transitions()?)
    }

    fn ensure_current_term(max_transitions: u64) -> Result<TermId, DispatchError> {
        let needed = Self::needed_transitions()?;
        ensure!(needed <= max_transitions, Error::<T>::TooManyTransitions);
        let mut term_id = Self::last_ensured_term_id();
        for _ in 0..needed {
            term_id = Self::transition_step()?.ok_or(Error::<T>::TransitionInProgress)?;
        }
        Ok(term_id)
    }

    fn advance_terms(max_steps: u64) -> Result<u64, DispatchError> {
        let mut steps = 0u64;
        while steps < max_steps && Self::needed_transitions()? > 0 {
            let _ = Self::transition_step()?;
            steps = steps.checked_inc_res()?;
        }
        Ok(steps)
    }
}

impl<T> Pallet<T>
where
    T: Config,
{
    /// Execute one step of the transition to the term after the last ensured term. Returns the
    /// term's id if the transition is complete, or `None` if stake changes scheduled for the term
    /// remain to be applied by further steps.
    fn transition_step() -> Result<Option<TermId>, DispatchError> {
        let prev_term_id = LastEnsuredTermId::<T>::get();
        let prev_term = Terms::<T>::get(prev_term_id).ok_or(Error::<T>::TermDoesNotExist)?;
        let term_id = prev_term_id.checked_inc_res()?;
        let start_time = prev_term.start_time.checked_add_res(&T::TermDuration::get())?;

        if !Self::apply_stake_changes(term_id)? {
            log::debug!(
                target: LOG_TARGET,
                "Transition to term {} has stake changes left to apply",
                term_id,
            );
            return Ok(None);
        }

        // The hash of the next block is unknown to anyone executing this transition.
        let randomness_block =
            frame_system::Pallet::<T>::block_number().saturating_add(One::one());

        if ScheduledDrafts::<T>::get(term_id) > 0 {
            JurorTreeSnapshots::<T>::insert(term_id, JurorTree::<T>::get());
        }

        Terms::<T>::insert(term_id, Term { start_time, randomness_block, randomness: None });
        LastEnsuredTermId::<T>::put(term_id);

        log::debug!(
            target: LOG_TARGET,
            "Transitioned to term {} (start time {:?}, randomness block {:?})",
            term_id,
            start_time,
            randomness_block,
        );
        Self::deposit_event(Event::<T>::NewTerm { term_id, start_time, randomness_block });

        Ok(Some(term_id))
    }
}
