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

#![allow(
    // Constants parameters inside `parameter_types!` already check
    // arithmetic operations at compile time
    clippy::arithmetic_side_effects
)]

#[cfg(feature = "mock")]
pub mod mock;

use crate::types::{Balance, BlockNumber, Moment};
use frame_support::{parameter_types, PalletId};

// Definitions for time
pub const MILLISECS_PER_BLOCK: u32 = 12000;
pub const MILLISECS_PER_DAY: Moment = 24 * 60 * 60 * 1000;

// Definitions for currency
pub const BASE: u128 = 10_000_000_000;
pub const CENT: Balance = BASE / 100; // 100_000_000

// Court
parameter_types! {
    pub const CourtPalletId: PalletId = PalletId(*b"zge/cout");
    /// Number of blocks after a term's randomness block in which its hash can still be read.
    /// Must be smaller than the runtime's `BlockHashCount`.
    pub const CourtRandomnessWindow: BlockNumber = 256;
}
