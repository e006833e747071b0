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
    sortition_tree::{
        traits::SortitionTreeHelper,
        types::{
            Node, SortitionTreeChildIndices, SortitionTreeError, SortitionTreeMaxNodes,
            StorageOverflowError, UpdateDescendantStakeOperation,
        },
    },
    traits::JurorSortition,
    AccountIdOf, BalanceOf, Config,
};
use alloc::{vec, vec::Vec};
use frame_support::{
    ensure,
    storage::{bounded_btree_map::BoundedBTreeMap, bounded_vec::BoundedVec},
    traits::Get,
    CloneNoBound, DefaultNoBound, PartialEqNoBound, RuntimeDebugNoBound,
};
use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_runtime::{traits::Zero, DispatchError, DispatchResult};
use zeitgeist_primitives::math::checked_ops_res::{CheckedAddRes, CheckedMulRes, CheckedSubRes};

/// A segment tree over the active balances of jurors which allows `O(log(n))` stake updates and
/// stake-weighted draws.
///
/// Each juror owns exactly one node of the tree which records their stake. Every node also
/// records the total stake of its descendants, so that a value in `[0, total_stake)` can be mapped
/// to a juror by walking down from the root: the node itself covers the first `stake` values, its
/// left subtree the next `lhs.total_stake` values and its right subtree the rest.
///
/// When a juror's stake drops to zero, the node is not removed from the tree, but marked as
/// _abandoned_ instead. Abandoned nodes are reassigned when new jurors enter the tree. Nodes are
/// added to the leaves of the tree only if there are no abandoned nodes to reassign.
///
/// # Generics
///
/// - `T`: The pallet configuration.
/// - `U`: A getter for the maximum depth of the tree. Using a depth larger than `30` will result in
///   undefined behavior.
#[derive(
    CloneNoBound,
    Decode,
    DefaultNoBound,
    Encode,
    Eq,
    MaxEncodedLen,
    PartialEqNoBound,
    RuntimeDebugNoBound,
    TypeInfo,
)]
#[scale_info(skip_type_params(T, U))]
pub(crate) struct SortitionTree<T, U>
where
    T: Config,
    U: Get<u32>,
{
    /// A vector which holds the nodes of the tree. The nodes are ordered by depth (the root is the
    /// first element of `nodes`) and from left to right. For example, the right-most grandchild of
    /// the root is at index `6`.
    pub(crate) nodes: BoundedVec<Node<T>, SortitionTreeMaxNodes<U>>,
    /// Maps a juror to the node that belongs to it.
    pub(crate) account_to_index: BoundedBTreeMap<AccountIdOf<T>, u32, SortitionTreeMaxNodes<U>>,
    /// A vector that contains the indices of abandoned nodes. Sorted in the order in which the
    /// nodes were abandoned, with the last element of the vector being the most recently abandoned
    /// node.
    pub(crate) abandoned_nodes: BoundedVec<u32, SortitionTreeMaxNodes<U>>,
}

impl<T, U> JurorSortition<T> for SortitionTree<T, U>
where
    T: Config,
    U: Get<u32>,
{
    fn join(&mut self, who: &AccountIdOf<T>) -> DispatchResult {
        if self.account_to_index.contains_key(who) {
            return Ok(());
        }
        let index = if let Some(index) = self.take_last_abandoned_node_index() {
            // Abandoned nodes have no stake, but their `descendant_stake` is still maintained.
            let node = self.get_node_mut(index)?;
            node.account = Some(who.clone());
            index
        } else if let Some(index) = self.peek_next_free_leaf() {
            self.nodes
                .try_push(Node::new(who.clone()))
                .map_err(|_| StorageOverflowError::Nodes.into_dispatch_error::<T>())?;
            index
        } else {
            return Err(SortitionTreeError::TreeIsFull.into_dispatch_error::<T>());
        };
        self.account_to_index
            .try_insert(who.clone(), index)
            .map_err(|_| StorageOverflowError::AccountToIndex.into_dispatch_error::<T>())?;
        Ok(())
    }

    fn set_stake(&mut self, who: &AccountIdOf<T>, stake: BalanceOf<T>) -> DispatchResult {
        let index = self.map_account_to_index(who)?;
        let node = self.get_node_mut(index)?;
        let old_stake = node.stake;
        node.stake = stake;
        if stake.is_zero() {
            node.account = None;
            self.abandoned_nodes
                .try_push(index)
                .map_err(|_| StorageOverflowError::AbandonedNodes.into_dispatch_error::<T>())?;
            let _ = self.account_to_index.remove(who);
        }
        if let Some(parent_index) = self.parent_index(index) {
            let (delta, op) = if stake >= old_stake {
                (stake.checked_sub_res(&old_stake)?, UpdateDescendantStakeOperation::Add)
            } else {
                (old_stake.checked_sub_res(&stake)?, UpdateDescendantStakeOperation::Sub)
            };
            if !delta.is_zero() {
                self.update_descendant_stake_of_ancestors(parent_index, delta, op)?;
            }
        }
        Ok(())
    }

    fn stake_of(&self, who: &AccountIdOf<T>) -> Result<BalanceOf<T>, DispatchError> {
        let index = self.map_account_to_index(who)?;
        let node = self.get_node(index)?;
        Ok(node.stake)
    }

    fn total_stake(&self) -> Result<BalanceOf<T>, DispatchError> {
        match self.nodes.first() {
            Some(root) => root.total_stake(),
            None => Ok(Zero::zero()),
        }
    }

    fn draw(&self, value: BalanceOf<T>) -> Result<AccountIdOf<T>, DispatchError> {
        ensure!(
            value < self.total_stake()?,
            SortitionTreeError::DrawOutOfRange.into_dispatch_error::<T>()
        );
        let mut index = 0u32;
        let mut remainder = value;
        for _ in 0..=Self::max_depth() {
            let node = self.get_node(index)?;
            if remainder < node.stake {
                return node
                    .account
                    .clone()
                    .ok_or(SortitionTreeError::AbandonedNodeDrawn.into_dispatch_error::<T>());
            }
            remainder = remainder.checked_sub_res(&node.stake)?;
            let (opt_lhs_index, opt_rhs_index) = self.children(index)?.into();
            let lhs_total = match opt_lhs_index {
                Some(lhs_index) => self.get_node(lhs_index)?.total_stake()?,
                None => Zero::zero(),
            };
            index = if remainder < lhs_total {
                opt_lhs_index.ok_or(SortitionTreeError::NodeNotFound.into_dispatch_error::<T>())?
            } else {
                remainder = remainder.checked_sub_res(&lhs_total)?;
                opt_rhs_index.ok_or(SortitionTreeError::NodeNotFound.into_dispatch_error::<T>())?
            };
        }
        Err(SortitionTreeError::MaxIterationsReached.into_dispatch_error::<T>())
    }
}

impl<T, U> SortitionTreeHelper<T> for SortitionTree<T, U>
where
    T: Config,
    U: Get<u32>,
{
    type Node = Node<T>;

    fn children(&self, index: u32) -> Result<SortitionTreeChildIndices, DispatchError> {
        let calculate_child =
            |child_index: u32| Some(child_index).filter(|&i| i < self.node_count());
        let left_child_index = index.checked_mul_res(&2)?.checked_add_res(&1)?;
        let lhs = calculate_child(left_child_index);
        let right_child_index = left_child_index.checked_add_res(&1)?;
        let rhs = calculate_child(right_child_index);
        Ok(SortitionTreeChildIndices { lhs, rhs })
    }

    fn parent_index(&self, index: u32) -> Option<u32> {
        if index == 0 {
            None
        } else {
            index.checked_sub(1)?.checked_div(2)
        }
    }

    fn path_to_node(&self, index: u32) -> Result<Vec<u32>, DispatchError> {
        let mut path = vec![index];
        let mut current = index;
        for _ in 0..=Self::max_depth() {
            match self.parent_index(current) {
                Some(parent_index) => {
                    path.push(parent_index);
                    current = parent_index;
                }
                None => {
                    path.reverse();
                    return Ok(path);
                }
            }
        }
        Err(SortitionTreeError::MaxIterationsReached.into_dispatch_error::<T>())
    }

    fn take_last_abandoned_node_index(&mut self) -> Option<u32> {
        self.abandoned_nodes.pop()
    }

    fn peek_next_free_leaf(&self) -> Option<u32> {
        let node_count = self.node_count();
        if node_count < Self::max_node_count() {
            Some(node_count)
        } else {
            None
        }
    }

    fn update_descendant_stake_of_ancestors(
        &mut self,
        index: u32,
        delta: BalanceOf<T>,
        op: UpdateDescendantStakeOperation,
    ) -> DispatchResult {
        for &i in self.path_to_node(index)?.iter() {
            let node = self.get_node_mut(i)?;
            node.descendant_stake = match op {
                UpdateDescendantStakeOperation::Add => node.descendant_stake.checked_add_res(&delta)?,
                UpdateDescendantStakeOperation::Sub => node.descendant_stake.checked_sub_res(&delta)?,
            };
        }
        Ok(())
    }

    fn node_count(&self) -> u32 {
        self.nodes.len() as u32
    }

    fn get_node(&self, index: u32) -> Result<&Self::Node, DispatchError> {
        self.nodes
            .get(index as usize)
            .ok_or(SortitionTreeError::NodeNotFound.into_dispatch_error::<T>())
    }

    fn get_node_mut(&mut self, index: u32) -> Result<&mut Self::Node, DispatchError> {
        self.nodes
            .get_mut(index as usize)
            .ok_or(SortitionTreeError::NodeNotFound.into_dispatch_error::<T>())
    }

    fn map_account_to_index(&self, who: &AccountIdOf<T>) -> Result<u32, DispatchError> {
        self.account_to_index
            .get(who)
            .ok_or(SortitionTreeError::AccountNotFound.into_dispatch_error::<T>())
            .copied()
    }

    fn max_depth() -> u32 {
        U::get()
    }

    fn max_node_count() -> u32 {
        SortitionTreeMaxNodes::<U>::get()
    }
}
