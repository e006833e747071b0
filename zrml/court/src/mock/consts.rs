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

use zeitgeist_primitives::{
    constants::BASE,
    types::{AccountIdTest, Balance},
};

pub const ALICE: AccountIdTest = 0;
pub const BOB: AccountIdTest = 1;
pub const CHARLIE: AccountIdTest = 2;
pub const DAVE: AccountIdTest = 3;
pub const EVE: AccountIdTest = 4;
/// Unfunded account which executes heartbeats and drafts.
pub const FRANK: AccountIdTest = 5;

/// Accounts which are funded at genesis.
pub const FUNDED_ACCOUNTS: [AccountIdTest; 5] = [ALICE, BOB, CHARLIE, DAVE, EVE];

pub const INITIAL_BALANCE: Balance = 10_000 * BASE;
