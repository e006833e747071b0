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

use crate::{BalanceOf, Config};
use core::cmp;
use frame_support::{
    CloneNoBound, DefaultNoBound, EqNoBound, PartialEqNoBound, RuntimeDebugNoBound,
};
use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_runtime::traits::Zero;
use zeitgeist_primitives::types::TermId;

/// The stake of a juror.
///
/// Changes of the active balance are requested during some term and take effect at the start of
/// the following term. Until then, the requested balance is held in `pending_balance`.
///
/// The amount reserved from the juror's account is always `locked_balance()`, so that the funds
/// backing a pending decrease stay locked until the decrease takes effect.
#[derive(
    CloneNoBound,
    Decode,
    DefaultNoBound,
    Encode,
    EqNoBound,
    MaxEncodedLen,
    PartialEqNoBound,
    RuntimeDebugNoBound,
    TypeInfo,
)]
#[scale_info(skip_type_params(T))]
pub struct JurorStake<T: Config> {
    /// The balance currently taken into account by drafts.
    pub active_balance: BalanceOf<T>,
    /// The active balance from `pending_effective_term` onwards. Meaningless if
    /// `pending_effective_term` is `None`.
    pub pending_balance: BalanceOf<T>,
    pub pending_effective_term: Option<TermId>,
}

impl<T> JurorStake<T>
where
    T: Config,
{
    /// The active balance the juror will hold once all requested changes took effect.
    pub fn target_balance(&self) -> BalanceOf<T> {
        if self.pending_effective_term.is_some() {
            self.pending_balance
        } else {
            self.active_balance
        }
    }

    /// The amount which must be reserved from the juror's account.
    pub fn locked_balance(&self) -> BalanceOf<T> {
        cmp::max(self.active_balance, self.target_balance())
    }

    /// The active balance of the juror at `term_id`, assuming that no further changes are
    /// requested.
    #[cfg(test)]
    pub(crate) fn active_balance_at(&self, term_id: TermId) -> BalanceOf<T> {
        match self.pending_effective_term {
            Some(effective_term_id) if effective_term_id <= term_id => self.pending_balance,
            _ => self.active_balance,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.active_balance.is_zero() && self.pending_effective_term.is_none()
    }

    /// Overwrite the pending change with `target_balance`, effective at `effective_term_id`.
    pub(crate) fn request(&mut self, target_balance: BalanceOf<T>, effective_term_id: TermId) {
        self.pending_balance = target_balance;
        self.pending_effective_term = Some(effective_term_id);
    }

    /// Apply the pending change if it's due at `term_id`. Returns the previous and the new
    /// active balance, or `None` if nothing changed.
    pub(crate) fn apply_pending(
        &mut self,
        term_id: TermId,
    ) -> Option<(BalanceOf<T>, BalanceOf<T>)> {
        match self.pending_effective_term {
            Some(effective_term_id) if effective_term_id <= term_id => {
                let old_balance = self.active_balance;
                self.active_balance = self.pending_balance;
                self.pending_balance = Zero::zero();
                self.pending_effective_term = None;
                Some((old_balance, self.active_balance))
            }
            _ => None,
        }
    }
}

#[cfg(all(feature = "mock", test))]
mod tests {
    use super::*;
    use crate::mock::runtime::Runtime;
    use test_case::test_case;

    fn stake(active: u128, pending: Option<(u128, TermId)>) -> JurorStake<Runtime> {
        JurorStake {
            active_balance: active,
            pending_balance: pending.map(|(b, _)| b).unwrap_or_default(),
            pending_effective_term: pending.map(|(_, t)| t),
        }
    }

    #[test_case(stake(10, None), 10, 10)]
    #[test_case(stake(10, Some((25, 3))), 25, 25)]
    #[test_case(stake(10, Some((4, 3))), 4, 10)]
    #[test_case(stake(10, Some((0, 3))), 0, 10)]
    fn target_and_locked_balance_work(
        stake: JurorStake<Runtime>,
        expected_target: u128,
        expected_locked: u128,
    ) {
        assert_eq!(stake.target_balance(), expected_target);
        assert_eq!(stake.locked_balance(), expected_locked);
    }

    #[test]
    fn pending_change_is_invisible_before_effective_term() {
        let mut stake = stake(10, Some((25, 3)));
        assert_eq!(stake.active_balance_at(2), 10);
        assert_eq!(stake.active_balance_at(3), 25);
        assert_eq!(stake.apply_pending(2), None);
        assert_eq!(stake.active_balance, 10);
        assert_eq!(stake.apply_pending(3), Some((10, 25)));
        assert_eq!(stake, self::stake(25, None));
        assert_eq!(stake.apply_pending(4), None);
    }

    #[test]
    fn full_deactivation_empties_stake() {
        let mut stake = stake(10, Some((0, 1)));
        assert!(!stake.is_empty());
        assert_eq!(stake.apply_pending(1), Some((10, 0)));
        assert!(stake.is_empty());
    }
}
