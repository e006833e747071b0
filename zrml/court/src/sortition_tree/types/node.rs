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

use crate::{AccountIdOf, BalanceOf, Config};
use frame_support::{CloneNoBound, EqNoBound, PartialEqNoBound, RuntimeDebugNoBound};
use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_runtime::{traits::Zero, DispatchError};
use zeitgeist_primitives::math::checked_ops_res::CheckedAddRes;

/// Type for nodes of a sortition tree.
///
/// `descendant_stake` does not contain the stake of `self`.
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
pub(crate) struct Node<T: Config> {
    /// The juror that the node belongs to. `None` signifies an abandoned node.
    pub(crate) account: Option<AccountIdOf<T>>,
    /// The active balance of the owner.
    pub(crate) stake: BalanceOf<T>,
    /// The sum of the stake of all descendants of this node.
    pub(crate) descendant_stake: BalanceOf<T>,
}

impl<T> Node<T>
where
    T: Config,
{
    /// Create a new node without stake belonging to `account`.
    pub(crate) fn new(account: AccountIdOf<T>) -> Node<T> {
        Node { account: Some(account), stake: Zero::zero(), descendant_stake: Zero::zero() }
    }

    /// Return the total stake of the node (the node's stake plus the sum of descendant's stakes).
    pub(crate) fn total_stake(&self) -> Result<BalanceOf<T>, DispatchError> {
        self.stake.checked_add_res(&self.descendant_stake)
    }
}
