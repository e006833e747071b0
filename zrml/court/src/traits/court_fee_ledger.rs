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

/// Internal accounting of draft fees.
///
/// Credits don't move funds. They record a claim against the funds which disputes deposited into
/// the pallet account, which the creditor may later withdraw.
pub trait CourtFeeLedger<T>
where
    T: Config,
{
    /// Add `amount` to the fee balance of `who`.
    fn credit(who: &AccountIdOf<T>, amount: BalanceOf<T>) -> DispatchResult;

    /// Return the fee balance of `who`.
    fn fee_balance_of(who: &AccountIdOf<T>) -> BalanceOf<T>;

    /// Clear the fee balance of `who` and return it. Fails if the balance is zero.
    fn take(who: &AccountIdOf<T>) -> Result<BalanceOf<T>, DispatchError>;
}
