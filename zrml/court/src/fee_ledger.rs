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
    traits::CourtFeeLedger, AccountIdOf, BalanceOf, Config, DraftFeeBalances, Error, Event,
    Pallet,
};
use frame_support::ensure;
use sp_runtime::{traits::Zero, DispatchError, DispatchResult};
use zeitgeist_primitives::math::checked_ops_res::CheckedAddRes;

impl<T> CourtFeeLedger<T> for Pallet<T>
where
    T: Config,
{
    fn credit(who: &AccountIdOf<T>, amount: BalanceOf<T>) -> DispatchResult {
        DraftFeeBalances::<T>::try_mutate(who, |balance| {
            *balance = balance.checked_add_res(&amount)?;
            Ok::<_, DispatchError>(())
        })?;
        Self::deposit_event(Event::<T>::DraftFeeCredited { who: who.clone(), amount });
        Ok(())
    }

    fn fee_balance_of(who: &AccountIdOf<T>) -> BalanceOf<T> {
        DraftFeeBalances::<T>::get(who)
    }

    fn take(who: &AccountIdOf<T>) -> Result<BalanceOf<T>, DispatchError> {
        let amount = DraftFeeBalances::<T>::take(who);
        ensure!(!amount.is_zero(), Error::<T>::NoDraftFees);
        Ok(amount)
    }
}
