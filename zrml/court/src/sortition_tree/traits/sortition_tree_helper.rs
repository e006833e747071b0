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
    sortition_tree::types::{SortitionTreeChildIndices, UpdateDescendantStakeOperation},
    AccountIdOf, BalanceOf, Config,
};
use alloc::vec::Vec;
use sp_runtime::{DispatchError, DispatchResult};

/// A collection of member functions used in the implementation of `JurorSortition` for
/// `SortitionTree`.
pub(crate) trait SortitionTreeHelper<T>
where
    T: Config,
{
    type Node;

    /// Return the indices of the children of the node at `index`.
    fn children(&self, index: u32) -> Result<SortitionTreeChildIndices, DispatchError>;

    /// Return the index of a node's parent; `None` if `index` is `0u32`, i.e. the node is root.
    fn parent_index(&self, index: u32) -> Option<u32>;

    /// Return a path from the tree's root to the node at `index`, including both ends.
    fn path_to_node(&self, index: u32) -> Result<Vec<u32>, DispatchError>;

    /// Pops the most recently abandoned node's index from the stack. Returns `None` if there's no
    /// abandoned node.
    fn take_last_abandoned_node_index(&mut self) -> Option<u32>;

    /// Returns the index of the next free leaf; `None` if the tree is full.
    fn peek_next_free_leaf(&self) -> Option<u32>;

    /// Add or subtract `delta` from the `descendant_stake` of the node at `index` and all of its
    /// ancestors.
    fn update_descendant_stake_of_ancestors(
        &mut self,
        index: u32,
        delta: BalanceOf<T>,
        op: UpdateDescendantStakeOperation,
    ) -> DispatchResult;

    /// Return the number of nodes in the tree. Note that abandoned nodes are counted.
    fn node_count(&self) -> u32;

    /// Get a reference to the node at `index`.
    fn get_node(&self, index: u32) -> Result<&Self::Node, DispatchError>;

    /// Get a mutable reference to the node at `index`.
    fn get_node_mut(&mut self, index: u32) -> Result<&mut Self::Node, DispatchError>;

    /// Get the node which belongs to `account`.
    fn map_account_to_index(&self, account: &AccountIdOf<T>) -> Result<u32, DispatchError>;

    /// Return the maximum allowed depth of the tree.
    fn max_depth() -> u32;

    /// Return the maximum allowed amount of nodes in the tree.
    fn max_node_count() -> u32;
}
