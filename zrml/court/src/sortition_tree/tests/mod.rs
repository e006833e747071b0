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

#![cfg(all(feature = "mock", test))]

use crate::{
    assert_sortition_tree_state, create_b_tree_map,
    mock::runtime::Runtime,
    sortition_tree::{
        traits::SortitionTreeHelper,
        types::{Node, SortitionTreeError},
    },
    traits::JurorSortition,
    SortitionTreeOf,
};
use alloc::collections::BTreeMap;
use frame_support::{assert_err, assert_ok};
use sp_runtime::traits::Zero;

mod set_stake;

/// Most tests use the same pattern:
///
/// - Create a test tree.
/// - Clone the contents of the test tree and modify them to obtain the expected state of the tree
///   after executing the test.
/// - Run the test.
/// - Verify state.
mod utility {
    use super::*;

    fn node(account: Option<u128>, stake: u128, descendant_stake: u128) -> Node<Runtime> {
        Node::<Runtime> { account, stake, descendant_stake }
    }

    /// Create the following sortition tree:
    ///
    ///                         (3, 10, 60)
    ///                        /           \
    ///              (None, 0, 45)          (9, 15, 0)
    ///              /           \           /        \
    ///       (5, 20, 20)    (7, 5, 0)  (None, 0, 0)  (None, 0, 0)
    ///        /        \
    ///  (6, 20, 0)  (None, 0, 0)
    ///
    /// The values drawn map to jurors as follows: `[0, 10)` to 3, `[10, 30)` to 5, `[30, 50)` to 6,
    /// `[50, 55)` to 7 and `[55, 70)` to 9.
    pub(super) fn create_test_tree() -> SortitionTreeOf<Runtime> {
        SortitionTreeOf::<Runtime> {
            nodes: vec![
                // Root
                node(Some(3), 10, 60),
                // Depth 1
                node(None, 0, 45),
                node(Some(9), 15, 0),
                // Depth 2
                node(Some(5), 20, 20),
                node(Some(7), 5, 0),
                node(None, 0, 0),
                node(None, 0, 0),
                // Depth 3
                node(Some(6), 20, 0),
                node(None, 0, 0),
            ]
            .try_into()
            .unwrap(),
            account_to_index: create_b_tree_map!({3 => 0, 9 => 2, 5 => 3, 7 => 4, 6 => 7})
                .try_into()
                .unwrap(),
            abandoned_nodes: vec![1, 5, 6, 8].try_into().unwrap(),
        }
    }

    /// Create a full tree. All nodes have the same stake of 1.
    pub(super) fn create_full_tree() -> SortitionTreeOf<Runtime> {
        let max_depth = SortitionTreeOf::<Runtime>::max_depth();
        let node_count = SortitionTreeOf::<Runtime>::max_node_count();
        let nodes = (0..node_count)
            .map(|a| Node::<Runtime> { account: Some(a as u128), stake: 1, descendant_stake: 0 })
            .collect::<Vec<_>>()
            .try_into()
            .unwrap();
        let account_to_index =
            (0..node_count).map(|a| (a as u128, a)).collect::<BTreeMap<_, _>>().try_into().unwrap();
        let mut tree = SortitionTreeOf::<Runtime> {
            nodes,
            account_to_index,
            abandoned_nodes: vec![].try_into().unwrap(),
        };
        // A node at depth `k` roots a perfect subtree with `2^(max_depth - k + 1) - 1` nodes.
        for (index, node) in tree.nodes.iter_mut().enumerate() {
            let exp = max_depth + 1 - (index + 1).checked_ilog2().unwrap();
            node.descendant_stake = 2u128.pow(exp) - 2;
        }
        tree
    }
}
