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

use crate::{AccountIdOf, Config, Error};
use frame_support::{
    ensure, storage::bounded_btree_map::BoundedBTreeMap, CloneNoBound, EqNoBound,
    PartialEqNoBound, RuntimeDebugNoBound,
};
use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_runtime::{DispatchError, DispatchResult};
use zeitgeist_primitives::{
    math::checked_ops_res::{CheckedAddRes, CheckedIncRes, CheckedSubRes},
    types::TermId,
};

/// Draft state of a single juror in an adjudication round.
#[derive(
    Clone, Copy, Debug, Decode, Default, Encode, Eq, MaxEncodedLen, PartialEq, TypeInfo,
)]
pub struct JurorDraft {
    /// The number of times the juror was drafted.
    pub weight: u32,
    /// Set once the juror's reward for this round was paid out.
    pub rewarded: bool,
}

/// An adjudication round of a dispute.
///
/// # Invariants
///
/// - `selected_jurors` equals the sum of the weights in `juror_weights`.
/// - `selected_jurors <= jurors_number`; the draft is complete if and only if they're equal.
/// - `delayed_terms` is zero until the draft is complete.
#[derive(
    CloneNoBound,
    Decode,
    Encode,
    EqNoBound,
    MaxEncodedLen,
    PartialEqNoBound,
    RuntimeDebugNoBound,
    TypeInfo,
)]
#[scale_info(skip_type_params(T))]
pub struct AdjudicationRound<T: Config> {
    /// The term whose stake snapshot and randomness the draft uses.
    pub draft_term_id: TermId,
    /// The number of terms between `draft_term_id` and the term in which the draft completed.
    pub delayed_terms: TermId,
    pub jurors_number: u32,
    pub selected_jurors: u32,
    /// The account which triggered the round.
    pub triggered_by: AccountIdOf<T>,
    pub juror_weights: BoundedBTreeMap<AccountIdOf<T>, JurorDraft, T::MaxJurorsPerRound>,
}

impl<T> AdjudicationRound<T>
where
    T: Config,
{
    pub(crate) fn new(
        draft_term_id: TermId,
        jurors_number: u32,
        triggered_by: AccountIdOf<T>,
    ) -> Self {
        AdjudicationRound {
            draft_term_id,
            delayed_terms: 0,
            jurors_number,
            selected_jurors: 0,
            triggered_by,
            juror_weights: BoundedBTreeMap::new(),
        }
    }

    /// The number of jurors which are yet to be drafted.
    pub fn remaining(&self) -> u32 {
        self.jurors_number.saturating_sub(self.selected_jurors)
    }

    pub fn is_complete(&self) -> bool {
        self.selected_jurors >= self.jurors_number
    }

    /// Returns the weight of `juror` and whether the juror was rewarded; `(0, false)` if the
    /// juror wasn't drafted.
    pub fn juror(&self, juror: &AccountIdOf<T>) -> (u32, bool) {
        self.juror_weights
            .get(juror)
            .map(|draft| (draft.weight, draft.rewarded))
            .unwrap_or_default()
    }

    /// Record a batch of draws. Each draw increases the weight of the juror drawn by one.
    pub(crate) fn apply_draws(&mut self, draws: &[AccountIdOf<T>]) -> DispatchResult {
        ensure!(!self.is_complete(), Error::<T>::RoundAlreadyDrafted);
        let draw_count: u32 = draws.len().try_into().map_err(|_| Error::<T>::TooManyDraws)?;
        ensure!(draw_count <= self.remaining(), Error::<T>::TooManyDraws);
        for juror in draws {
            if let Some(draft) = self.juror_weights.get_mut(juror) {
                draft.weight = draft.weight.checked_inc_res()?;
            } else {
                self.juror_weights
                    .try_insert(juror.clone(), JurorDraft { weight: 1, rewarded: false })
                    .map_err(|_| Error::<T>::TooManyDraws)?;
            }
        }
        self.selected_jurors = self.selected_jurors.checked_add_res(&draw_count)?;
        Ok(())
    }

    /// Close the draft. `completion_term_id` is the term in which the last juror was drafted.
    pub(crate) fn finalize(&mut self, completion_term_id: TermId) -> Result<(), DispatchError> {
        ensure!(self.is_complete(), Error::<T>::TooManyDraws);
        self.delayed_terms = completion_term_id.checked_sub_res(&self.draft_term_id)?;
        Ok(())
    }
}

#[cfg(all(feature = "mock", test))]
mod tests {
    use super::*;
    use crate::mock::runtime::Runtime;
    use alloc::vec;
    use frame_support::{assert_err, assert_ok};

    const ALICE: u128 = 0;
    const BOB: u128 = 1;
    const CHARLIE: u128 = 2;

    fn weight_sum(round: &AdjudicationRound<Runtime>) -> u32 {
        round.juror_weights.values().map(|draft| draft.weight).sum()
    }

    #[test]
    fn apply_draws_accumulates_weights() {
        let mut round = AdjudicationRound::<Runtime>::new(4, 5, ALICE);
        assert_ok!(round.apply_draws(&[BOB, CHARLIE, BOB]));
        assert_eq!(round.selected_jurors, 3);
        assert_eq!(round.remaining(), 2);
        assert_eq!(round.juror(&BOB), (2, false));
        assert_eq!(round.juror(&CHARLIE), (1, false));
        assert_eq!(round.juror(&ALICE), (0, false));
        assert_eq!(weight_sum(&round), round.selected_jurors);
        assert!(!round.is_complete());

        assert_ok!(round.apply_draws(&[CHARLIE, CHARLIE]));
        assert!(round.is_complete());
        assert_eq!(weight_sum(&round), round.selected_jurors);
    }

    #[test]
    fn apply_draws_fails_on_complete_round() {
        let mut round = AdjudicationRound::<Runtime>::new(4, 1, ALICE);
        assert_ok!(round.apply_draws(&[BOB]));
        assert_err!(round.apply_draws(&[BOB]), Error::<Runtime>::RoundAlreadyDrafted);
    }

    #[test]
    fn apply_draws_fails_on_overshoot() {
        let mut round = AdjudicationRound::<Runtime>::new(4, 2, ALICE);
        let round_before = round.clone();
        assert_err!(round.apply_draws(&vec![BOB; 3]), Error::<Runtime>::TooManyDraws);
        assert_eq!(round, round_before);
    }

    #[test]
    fn finalize_sets_delayed_terms() {
        let mut round = AdjudicationRound::<Runtime>::new(4, 1, ALICE);
        assert_err!(round.finalize(4), Error::<Runtime>::TooManyDraws);
        assert_ok!(round.apply_draws(&[BOB]));
        assert_ok!(round.finalize(14));
        assert_eq!(round.delayed_terms, 10);
    }
}
