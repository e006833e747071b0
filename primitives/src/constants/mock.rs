// Copyright 2021-2025 Forecasting Technologies LTD.
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

#![cfg(feature = "mock")]

pub use super::*;
use crate::types::{Balance, Moment};
use frame_support::parameter_types;

// Court
parameter_types! {
    pub const CourtDraftFee: Balance = 3 * BASE;
    pub const CourtMaxAutoTermTransitions: u64 = 1;
    pub const CourtMaxJurorTreeDepth: u32 = 5;
    pub const CourtMaxJurorsPerRound: u32 = 64;
    pub const CourtMaxPossibleRulings: u8 = 10;
    pub const CourtMaxStakeChangesPerStep: u32 = 16;
    pub const CourtMinJurorStake: Balance = 100 * BASE;
    pub const CourtTermDuration: Moment = MILLISECS_PER_DAY;
}

// Shared within tests
// Balance
parameter_types! {
    pub const ExistentialDeposit: u128 = CENT;
    pub const MaxLocks: u32 = 50;
    pub const MaxReserves: u32 = 50;
}

// System
parameter_types! {
    pub const BlockHashCount: u64 = 512;
}

// Time
parameter_types! {
    pub const MinimumPeriod: u64 = MILLISECS_PER_BLOCK as u64 / 2;
}
