// Copyright 2023-2025 Forecasting Technologies LTD.
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

//! Checked arithmetic which reports failure as a `DispatchError` so that it can be propagated with
//! `?` from dispatchable code.

use sp_arithmetic::{
    traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, One},
    ArithmeticError,
};
use sp_runtime::DispatchError;

pub trait CheckedAddRes
where
    Self: Sized,
{
    fn checked_add_res(&self, other: &Self) -> Result<Self, DispatchError>;
}

pub trait CheckedSubRes
where
    Self: Sized,
{
    fn checked_sub_res(&self, other: &Self) -> Result<Self, DispatchError>;
}

pub trait CheckedMulRes
where
    Self: Sized,
{
    fn checked_mul_res(&self, other: &Self) -> Result<Self, DispatchError>;
}

pub trait CheckedDivRes
where
    Self: Sized,
{
    fn checked_div_res(&self, other: &Self) -> Result<Self, DispatchError>;
}

/// Increment by one; used for identifiers and counters.
pub trait CheckedIncRes
where
    Self: Sized,
{
    fn checked_inc_res(&self) -> Result<Self, DispatchError>;
}

/// Decrement by one; used for counters.
pub trait CheckedDecRes
where
    Self: Sized,
{
    fn checked_dec_res(&self) -> Result<Self, DispatchError>;
}

macro_rules! impl_checked_res {
    ($res_trait:ident, $res_fn:ident, $base_trait:ident, $base_fn:ident, $error:expr) => {
        impl<T> $res_trait for T
        where
            T: $base_trait,
        {
            #[inline]
            fn $res_fn(&self, other: &Self) -> Result<Self, DispatchError> {
                self.$base_fn(other).ok_or(DispatchError::Arithmetic($error))
            }
        }
    };
}

impl_checked_res!(CheckedAddRes, checked_add_res, CheckedAdd, checked_add, ArithmeticError::Overflow);
impl_checked_res!(CheckedSubRes, checked_sub_res, CheckedSub, checked_sub, ArithmeticError::Underflow);
impl_checked_res!(CheckedMulRes, checked_mul_res, CheckedMul, checked_mul, ArithmeticError::Overflow);
impl_checked_res!(
    CheckedDivRes,
    checked_div_res,
    CheckedDiv,
    checked_div,
    ArithmeticError::DivisionByZero
);

impl<T> CheckedIncRes for T
where
    T: CheckedAdd + One,
{
    #[inline]
    fn checked_inc_res(&self) -> Result<Self, DispatchError> {
        self.checked_add_res(&T::one())
    }
}

impl<T> CheckedDecRes for T
where
    T: CheckedSub + One,
{
    #[inline]
    fn checked_dec_res(&self) -> Result<Self, DispatchError> {
        self.checked_sub_res(&T::one())
    }
}
