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
    ensure, CloneNoBound, EqNoBound, PartialEqNoBound, RuntimeDebugNoBound,
};
use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_runtime::DispatchError;
use zeitgeist_primitives::{math::checked_ops_res::CheckedDecRes, types::RoundId};

#[derive(Clone, Copy, Debug, Decode, Encode, Eq, MaxEncodedLen, PartialEq, TypeInfo)]
pub enum DisputeState {
    /// The last round's jurors are still being drafted.
    PreDraft,
    /// All jurors of the last round have been drafted.
    Adjudicating,
    /// The remaining jurors of the last round can never be drafted.
    DraftFailed,
    /// The final ruling was executed.
    Executed,
}

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
pub struct Dispute<T: Config> {
    /// The account on whose behalf the dispute is adjudicated.
    pub subject: AccountIdOf<T>,
    pub possible_rulings: u8,
    pub state: DisputeState,
    /// Zero until the dispute is executed.
    pub final_ruling: u8,
    /// The number of adjudication rounds; the last round is the one currently drafted or
    /// adjudicated.
    pub round_count: RoundId,
}

impl<T> Dispute<T>
where
    T: Config,
{
    pub(crate) fn new(subject: AccountIdOf<T>, possible_rulings: u8) -> Self {
        Dispute {
            subject,
            possible_rulings,
            state: DisputeState::PreDraft,
            final_ruling: 0,
            round_count: 1,
        }
    }

    pub fn last_round_id(&self) -> Result<RoundId, DispatchError> {
        self.round_count.checked_dec_res()
    }

    /// Move from `PreDraft` to `Adjudicating`. Fails with `RoundAlreadyDrafted` in any other
    /// state.
    pub(crate) fn begin_adjudication(&mut self) -> Result<(), DispatchError> {
        ensure!(self.state == DisputeState::PreDraft, Error::<T>::RoundAlreadyDrafted);
        self.state = DisputeState::Adjudicating;
        Ok(())
    }

    pub(crate) fn fail_draft(&mut self) -> Result<(), DispatchError> {
        ensure!(self.state == DisputeState::PreDraft, Error::<T>::RoundAlreadyDrafted);
        self.state = DisputeState::DraftFailed;
        Ok(())
    }
}
