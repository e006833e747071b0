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

use crate::{Config, HashOf, MomentOf};
use frame_support::{CloneNoBound, EqNoBound, PartialEqNoBound, RuntimeDebugNoBound};
use frame_system::pallet_prelude::BlockNumberFor;
use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;

/// A court term.
///
/// Terms are consecutive intervals of length `TermDuration`. Term `n + 1` starts where term `n`
/// ends.
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
pub struct Term<T: Config> {
    pub start_time: MomentOf<T>,
    /// The block whose hash seeds the drafts of this term. This is always the block after the
    /// one in which the term transition was executed.
    pub randomness_block: BlockNumberFor<T>,
    /// The seed read from `randomness_block`. Written when the first draft of this term is
    /// executed and never changed afterwards.
    pub randomness: Option<HashOf<T>>,
}
