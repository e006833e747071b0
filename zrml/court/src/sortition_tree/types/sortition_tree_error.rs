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

use crate::{Config, Error};
use frame_support::{PalletError, RuntimeDebugNoBound};
use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use sp_runtime::DispatchError;

#[derive(Decode, Encode, Eq, PartialEq, PalletError, RuntimeDebugNoBound, TypeInfo)]
pub enum SortitionTreeError {
    /// The account never joined the tree as juror, or its node was abandoned.
    AccountNotFound,
    /// There is no node with this index.
    NodeNotFound,
    /// Every node of the tree belongs to a juror. Jurors who deactivate all of their stake
    /// free their node again.
    TreeIsFull,
    /// The drawn value exceeds the total stake of the tree.
    DrawOutOfRange,
    /// A draw ended on a node without owner. This is unexpected behavior.
    AbandonedNodeDrawn,
    /// A loop exceeded the expected number of iterations. This is unexpected behavior.
    MaxIterationsReached,
    /// Unexpected storage overflow.
    StorageOverflow(StorageOverflowError),
}

#[derive(Decode, Encode, Eq, PartialEq, PalletError, RuntimeDebugNoBound, TypeInfo)]
pub enum StorageOverflowError {
    /// The node arena exceeded the capacity of the tree.
    Nodes,
    /// More jurors were mapped to nodes than the tree has nodes.
    AccountToIndex,
    /// More nodes were abandoned than the tree has nodes.
    AbandonedNodes,
}

impl From<StorageOverflowError> for SortitionTreeError {
    fn from(error: StorageOverflowError) -> SortitionTreeError {
        SortitionTreeError::StorageOverflow(error)
    }
}

impl StorageOverflowError {
    pub(crate) fn into_dispatch_error<T>(self) -> DispatchError
    where
        T: Config,
    {
        let sortition_tree_error: SortitionTreeError = self.into();
        sortition_tree_error.into_dispatch_error::<T>()
    }
}

impl<T> From<SortitionTreeError> for Error<T> {
    fn from(error: SortitionTreeError) -> Error<T> {
        Error::<T>::SortitionTreeError(error)
    }
}

impl SortitionTreeError {
    pub(crate) fn into_dispatch_error<T>(self) -> DispatchError
    where
        T: Config,
    {
        Error::<T>::SortitionTreeError(self).into()
    }
}
