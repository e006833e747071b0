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
    traits::JurorSortition, weights::WeightInfoZeitgeist, AccountIdOf, BalanceOf, Config,
    DisputeOf, Disputes, Error, Event, HashOf, JurorStakeOf, JurorTree, JurorTreeSnapshots,
    Jurors, Pallet, Rounds, ScheduledDrafts, StakeChangeQueue, Terms, LOG_TARGET,
};
use alloc::vec::Vec;
use frame_support::{
    ensure,
    pallet_prelude::Weight,
    traits::{Get, ReservableCurrency},
};
use parity_scale_codec::Encode;
use sp_runtime::{
    traits::{AccountIdConversion, Saturating, Zero},
    DispatchError, DispatchResult, SaturatedConversion,
};
use zeitgeist_primitives::{
    math::checked_ops_res::CheckedDecRes,
    types::{DisputeId, RoundId, TermId},
};

impl<T> Pallet<T>
where
    T: Config,
{
    /// The account which holds the draft fee deposits of all disputes.
    pub fn court_account() -> AccountIdOf<T> {
        T::PalletId::get().into_account_truncating()
    }

    /// Worst-case weight of the transition steps that calls other than `heartbeat` may perform.
    pub(crate) fn auto_transition_weight() -> Weight {
        T::WeightInfo::heartbeat(T::MaxStakeChangesPerStep::get())
            .saturating_mul(T::MaxAutoTermTransitions::get())
    }

    /// Returns the draft seed of `term_id` and whether it was read from the chain just now (in
    /// which case the caller must bind it to the term).
    ///
    /// Once bound, the seed is returned without checking the randomness window, so that the
    /// drafts of a term which were started in time can always be completed.
    pub(crate) fn draft_seed(term_id: TermId) -> Result<(HashOf<T>, bool), DispatchError> {
        let term = Terms::<T>::get(term_id).ok_or(Error::<T>::TermDoesNotExist)?;
        if let Some(randomness) = term.randomness {
            return Ok((randomness, false));
        }
        let now = frame_system::Pallet::<T>::block_number();
        ensure!(now > term.randomness_block, Error::<T>::RandomnessNotYetAvailable);
        ensure!(
            now.saturating_sub(term.randomness_block) <= T::RandomnessWindow::get(),
            Error::<T>::RandomnessExpired
        );
        let randomness = frame_system::BlockHash::<T>::get(term.randomness_block);
        // Pruned hashes read as default.
        ensure!(randomness != HashOf::<T>::default(), Error::<T>::RandomnessExpired);
        Ok((randomness, true))
    }

    /// Maps the `draw_index`-th draw of a round to a value in `[0, total_stake)`.
    ///
    /// The value is the first 16 bytes (little endian) of
    /// `blake2_256(SCALE(seed, dispute_id, round_id, draw_index))` modulo `total_stake`. It
    /// depends only on its inputs, so anyone can recompute the jurors of a round from the seed
    /// and the stake snapshot.
    pub(crate) fn draw_value(
        seed: &HashOf<T>,
        dispute_id: DisputeId,
        round_id: RoundId,
        draw_index: u32,
        total_stake: BalanceOf<T>,
    ) -> Result<BalanceOf<T>, DispatchError> {
        let digest = (seed, dispute_id, round_id, draw_index)
            .using_encoded(sp_io::hashing::blake2_256);
        let mut bytes = [0u8; 16];
        bytes.copy_from_slice(&digest[..16]);
        let total: u128 = total_stake.saturated_into();
        let value = u128::from_le_bytes(bytes)
            .checked_rem(total)
            .ok_or(Error::<T>::InsufficientActiveStake)?;
        Ok(value.saturated_into())
    }

    /// Apply up to `MaxStakeChangesPerStep` of the stake changes which were scheduled to take
    /// effect at `term_id` to the juror tree and release funds which are no longer locked.
    ///
    /// Returns `true` if no scheduled changes of `term_id` remain.
    pub(crate) fn apply_stake_changes(term_id: TermId) -> Result<bool, DispatchError> {
        let accounts = StakeChangeQueue::<T>::drain_prefix(term_id)
            .take(T::MaxStakeChangesPerStep::get() as usize)
            .map(|(who, ())| who)
            .collect::<Vec<_>>();
        let drained = StakeChangeQueue::<T>::iter_key_prefix(term_id).next().is_none();
        if accounts.is_empty() {
            return Ok(drained);
        }
        let mut tree = JurorTree::<T>::get();
        for who in accounts.into_iter() {
            let Some(mut stake) = Jurors::<T>::get(&who) else {
                log::warn!(target: LOG_TARGET, "Queued stake change of unknown juror {:?}", who);
                continue;
            };
            let locked_before = stake.locked_balance();
            let Some((_, active_balance)) = stake.apply_pending(term_id) else {
                continue;
            };
            tree.set_stake(&who, active_balance)?;

            let released = locked_before.saturating_sub(stake.locked_balance());
            if !released.is_zero() {
                let missing = T::Currency::unreserve(&who, released);
                if !missing.is_zero() {
                    log::warn!(
                        target: LOG_TARGET,
                        "Failed to unreserve {:?} of juror {:?}",
                        missing,
                        who,
                    );
                }
            }

            if stake.is_empty() {
                Jurors::<T>::remove(&who);
            } else {
                Jurors::<T>::insert(&who, stake);
            }
            Self::deposit_event(Event::<T>::StakeApplied { who, term_id, active_balance });
        }
        JurorTree::<T>::put(tree);
        Ok(drained)
    }

    /// Returns `true` if no juror can ever be drafted at `term_id` again. The term's seed must
    /// be unbound, and either its randomness block has left the window or its stake snapshot
    /// holds no stake. Draws need both a seed and stake, so a bound seed implies neither.
    pub(crate) fn draft_term_failed(term_id: TermId) -> Result<bool, DispatchError> {
        let term = Terms::<T>::get(term_id).ok_or(Error::<T>::TermDoesNotExist)?;
        if term.randomness.is_some() {
            return Ok(false);
        }
        let total_stake = match JurorTreeSnapshots::<T>::get(term_id) {
            Some(snapshot) => snapshot.total_stake()?,
            None => Zero::zero(),
        };
        if total_stake.is_zero() {
            return Ok(true);
        }
        let expired = DispatchError::from(Error::<T>::RandomnessExpired);
        let not_yet_available = DispatchError::from(Error::<T>::RandomnessNotYetAvailable);
        match Self::draft_seed(term_id) {
            Ok(_) => Ok(false),
            Err(error) if error == expired => Ok(true),
            Err(error) if error == not_yet_available => Ok(false),
            Err(error) => Err(error),
        }
    }

    /// Mark one of the rounds drafted at `term_id` as complete. The term's stake snapshot is
    /// removed along with the last one.
    pub(crate) fn release_draft_schedule(term_id: TermId) -> DispatchResult {
        let remaining = ScheduledDrafts::<T>::try_mutate(term_id, |count| {
            *count = count.checked_dec_res()?;
            Ok::<_, DispatchError>(*count)
        })?;
        if remaining == 0 {
            ScheduledDrafts::<T>::remove(term_id);
            JurorTreeSnapshots::<T>::remove(term_id);
        }
        Ok(())
    }

    /// Returns `(draft_term_id, delayed_terms, jurors_number, selected_jurors, triggered_by)` of
    /// the round.
    pub fn adjudication_round(
        dispute_id: DisputeId,
        round_id: RoundId,
    ) -> Option<(TermId, TermId, u32, u32, AccountIdOf<T>)> {
        Rounds::<T>::get(dispute_id, round_id).map(|round| {
            (
                round.draft_term_id,
                round.delayed_terms,
                round.jurors_number,
                round.selected_jurors,
                round.triggered_by,
            )
        })
    }

    /// Returns the weight of `juror` in the round and whether they were rewarded.
    pub fn juror(dispute_id: DisputeId, round_id: RoundId, juror: &AccountIdOf<T>) -> (u32, bool) {
        Rounds::<T>::get(dispute_id, round_id).map(|round| round.juror(juror)).unwrap_or_default()
    }

    pub fn dispute(dispute_id: DisputeId) -> Option<DisputeOf<T>> {
        Disputes::<T>::get(dispute_id)
    }

    pub fn juror_stake(who: &AccountIdOf<T>) -> Option<JurorStakeOf<T>> {
        Jurors::<T>::get(who)
    }
}
