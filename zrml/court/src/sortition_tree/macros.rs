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

/// Asserts that a sortition tree has the specified state.
///
/// Parameters:
///
/// - `tree`: The `SortitionTree<T, U>` to check.
/// - `expected_nodes`: The expected `tree.nodes`.
/// - `expected_accounts_to_index`: The expected `tree.accounts_to_index`.
/// - `expected_abandoned_nodes`: The expected `tree.abandoned_nodes`.
#[cfg(test)]
#[macro_export]
macro_rules! assert_sortition_tree_state {
    (
        $tree:expr,
        $expected_nodes:expr,
        $expected_account_to_index:expr,
        $expected_abandoned_nodes:expr
        $(,)?
    ) => {
        let actual_nodes = $tree.nodes.clone().into_inner();
        assert_eq!(
            actual_nodes.len(),
            $expected_nodes.len(),
            "assert_sortition_tree_state: Node count mismatch"
        );
        for (index, (actual, expected)) in actual_nodes.iter().zip($expected_nodes.iter()).enumerate()
        {
            assert_eq!(
                actual, expected,
                "assert_sortition_tree_state: Mismatched node at index {}",
                index
            );
        }
        assert_eq!($expected_account_to_index, $tree.account_to_index.clone().into_inner());
        assert_eq!($expected_abandoned_nodes, $tree.abandoned_nodes.clone().into_inner());
    };
}

/// Creates a `BTreeMap` from key-value pairs.
#[cfg(test)]
#[macro_export]
macro_rules! create_b_tree_map {
    ({ $($key:expr => $value:expr),* $(,)? } $(,)?) => {
        [$(($key, $value),)*].iter().cloned().collect::<std::collections::BTreeMap<_, _>>()
    }
}
