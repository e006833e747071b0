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

use crate::mock::{
    consts::{FUNDED_ACCOUNTS, INITIAL_BALANCE},
    runtime::{Runtime, System},
};
use frame_support::traits::Get;
use sp_io::TestExternalities;
use sp_runtime::BuildStorage;
use zeitgeist_primitives::constants::mock::CourtTermDuration;

pub struct ExtBuilder;

impl ExtBuilder {
    /// Term `0` starts at timestamp zero, term `n` at `n * CourtTermDuration`.
    pub fn build() -> TestExternalities {
        let mut t = frame_system::GenesisConfig::<Runtime>::default().build_storage().unwrap();

        // See the logs in tests when using `RUST_LOG=debug cargo test -- --nocapture`
        let _ = env_logger::builder().is_test(true).try_init();

        pallet_balances::GenesisConfig::<Runtime> {
            balances: FUNDED_ACCOUNTS.iter().map(|&who| (who, INITIAL_BALANCE)).collect(),
        }
        .assimilate_storage(&mut t)
        .unwrap();

        crate::GenesisConfig::<Runtime> {
            first_term_start_time: CourtTermDuration::get(),
            _phantom: Default::default(),
        }
        .assimilate_storage(&mut t)
        .unwrap();

        let mut test_ext: TestExternalities = t.into();

        test_ext.execute_with(|| System::set_block_number(1));

        test_ext
    }
}
