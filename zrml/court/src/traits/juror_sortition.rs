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
use sp_runtime::{DispatchError, DispatchResult};

/// Weighted random selection of jurors.
///
/// Implementors hold the active balance of every juror and map a uniformly distributed value in
/// `[0, total_stake())` to the juror whose cumulative stake interval contains it, so that each
/// juror is selected with probability proportional to their stake.
pub(crate) trait JurorSortition<T>
where
    T: Config,
{
    /// Make sure that `who` owns a slot (with zero stake if newly created). Idempotent.
    fn join(&mut self, who: &AccountIdOf<T>) -> DispatchResult;

    /// Set the stake of `who`, which must have joined. A stake of zero releases the slot.
    fn set_stake(&mut self, who: &AccountIdOf<T>, stake: BalanceOf<T>) -> DispatchResult;

    /// Return the stake of `who`.
    fn stake_of(&self, who: &AccountIdOf<T>) -> Result<BalanceOf<T>, DispatchError>;

    /// Return the total stake of all jurors.
    fn total_stake(&self) -> Result<BalanceOf<T>, DispatchError>;

    /// Return the juror whose cumulative stake interval contains `value`. Fails if `value` is not
    /// smaller than `total_stake()`.
    fn draw(&self, value: BalanceOf<T>) -> Result<AccountIdOf<T>, DispatchError>;
}
