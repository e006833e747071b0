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

use core::marker::PhantomData;
use sp_runtime::traits::Get;

/// The capacity of the juror tree of depth `D::get()`.
///
/// Every node belongs to at most one juror, so this is also the maximum number of jurors which
/// can hold or request stake at the same time. Depths of `31` or more are rejected by the pallet's
/// `integrity_test` and saturate at `u32::MAX` here.
pub(crate) struct SortitionTreeMaxNodes<D>(PhantomData<D>);

impl<D> Get<u32> for SortitionTreeMaxNodes<D>
where
    D: Get<u32>,
{
    fn get() -> u32 {
        // A complete binary tree with `depth + 1` levels has `2^(depth + 1) - 1` nodes.
        D::get()
            .checked_add(1)
            .and_then(|levels| 1u32.checked_shl(levels))
            .map_or(u32::MAX, |node_count_plus_one| node_count_plus_one.saturating_sub(1))
    }
}
