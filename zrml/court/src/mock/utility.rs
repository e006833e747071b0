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

use crate::mock::runtime::{Balances, Court, System, Timestamp};
use frame_support::traits::{Get, Hooks};
use sp_runtime::traits::{BlakeTwo256, Hash as HashT};
use zeitgeist_primitives::{
    constants::mock::CourtTermDuration,
    types::{BlockNumber, Moment, TermId},
};

/// Advance to block `to`. Unlike `System::set_block_number`, this records a (synthetic) hash for
/// every block passed, so that these blocks can serve as randomness blocks.
pub fn run_to_block(to: BlockNumber) {
    while System::block_number() < to {
        let now = System::block_number();

        Court::on_finalize(now);
        Balances::on_finalize(now);
        System::on_finalize(now);

        let next = now + 1;
        let parent_hash = BlakeTwo256::hash_of(&now);
        System::initialize(&next, &parent_hash, &Default::default());

        System::on_initialize(next);
        Balances::on_initialize(next);
        Court::on_initialize(next);
    }
}

pub fn run_blocks(n: BlockNumber) {
    run_to_block(System::block_number() + n);
}

/// The timestamp at which `term_id` starts.
pub fn term_start(term_id: TermId) -> Moment {
    term_id * CourtTermDuration::get()
}

/// Move the wall clock to the start of `term_id`. Doesn't execute any term transitions.
pub fn set_term(term_id: TermId) {
    Timestamp::set_timestamp(term_start(term_id));
}
