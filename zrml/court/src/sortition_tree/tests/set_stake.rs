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

use super::*;
use test_case::test_case;

#[test_case(25; "increase")]
#[test_case(12; "decrease")]
fn set_stake_updates_ancestors_of_leaf(stake: u128) {
    let mut tree = utility::create_test_tree();
    let mut nodes = tree.nodes.clone().into_inner();
    let account_to_index = tree.account_to_index.clone().into_inner();
    let abandoned_nodes = tree.abandoned_nodes.clone().into_inner();
    nodes[7].stake = stake;
    for index in [0, 1, 3] {
        nodes[index].descendant_stake = nodes[index].descendant_stake + stake - 20;
    }
    assert_ok!(tree.set_stake(&6, stake));
    assert_sortition_tree_state!(tree, nodes, account_to_index, abandoned_nodes);
    assert_eq!(tree.stake_of(&6).unwrap(), stake);
    assert_eq!(tree.total_stake().unwrap(), 70 + stake - 20);
}

#[test]
fn set_stake_of_root_leaves_descendant_stake_untouched() {
    let mut tree = utility::create_test_tree();
    let mut nodes = tree.nodes.clone().into_inner();
    let account_to_index = tree.account_to_index.clone().into_inner();
    let abandoned_nodes = tree.abandoned_nodes.clone().into_inner();
    nodes[0].stake = 1;
    assert_ok!(tree.set_stake(&3, 1));
    assert_sortition_tree_state!(tree, nodes, account_to_index, abandoned_nodes);
}

#[test]
fn set_stake_to_zero_abandons_node() {
    let mut tree = utility::create_test_tree();
    let mut nodes = tree.nodes.clone().into_inner();
    let mut account_to_index = tree.account_to_index.clone().into_inner();
    let mut abandoned_nodes = tree.abandoned_nodes.clone().into_inner();
    let account = 7;
    nodes[4].account = None;
    nodes[4].stake = 0;
    nodes[1].descendant_stake -= 5;
    nodes[0].descendant_stake -= 5;
    account_to_index.remove(&account);
    abandoned_nodes.push(4);
    assert_ok!(tree.set_stake(&account, 0));
    assert_sortition_tree_state!(tree, nodes, account_to_index, abandoned_nodes);
    assert_err!(
        tree.stake_of(&account),
        SortitionTreeError::AccountNotFound.into_dispatch_error::<Runtime>()
    );
}

#[test]
fn set_stake_fails_on_unknown_account() {
    let mut tree = utility::create_test_tree();
    assert_err!(
        tree.set_stake(&42, 1),
        SortitionTreeError::AccountNotFound.into_dispatch_error::<Runtime>()
    );
}

#[test]
fn abandoned_node_is_reused_by_next_juror() {
    let mut tree = utility::create_test_tree();
    assert_ok!(tree.set_stake(&7, 0));
    assert_ok!(tree.join(&12));
    assert_eq!(tree.account_to_index.get(&12), Some(&4));
    assert_ok!(tree.set_stake(&12, 5));
    let mut expected = utility::create_test_tree();
    expected.nodes[4].account = Some(12);
    let _ = expected.account_to_index.remove(&7);
    assert_ok!(expected.account_to_index.try_insert(12, 4));
    assert_eq!(tree, expected);
}
