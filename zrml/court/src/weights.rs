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

//! Weights for zrml_court.
//!
//! Estimates pending a benchmark run on reference hardware. The storage accesses are counted from
//! the implementation; `c` is the number of stake changes applied per transition step and `b`
//! the number of jurors drafted.

#![allow(unused_parens)]
#![allow(unused_imports)]

use core::marker::PhantomData;
use frame_support::{traits::Get, weights::Weight};

/// Trait containing the required functions for weight retrieval.
pub trait WeightInfoZeitgeist {
    fn heartbeat(c: u32) -> Weight;
    fn activate() -> Weight;
    fn deactivate() -> Weight;
    fn create_dispute() -> Weight;
    fn draft(b: u32) -> Weight;
    fn withdraw_draft_fees() -> Weight;
    fn abort_draft() -> Weight;
}

/// Weight functions for zrml_court
pub struct WeightInfo<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfoZeitgeist for WeightInfo<T> {
    /// Storage: `Court::LastEnsuredTermId` (r:1 w:1)
    /// Storage: `Court::Terms` (r:1 w:1)
    /// Storage: `Court::StakeChangeQueue` (r:17 w:16)
    /// Storage: `Court::JurorTree` (r:1 w:1)
    /// Storage: `Court::Jurors` (r:16 w:16)
    /// Storage: `Balances::Reserves` (r:16 w:16)
    /// Storage: `Court::ScheduledDrafts` (r:1 w:0)
    /// Storage: `Court::JurorTreeSnapshots` (r:0 w:1)
    fn heartbeat(c: u32) -> Weight {
        Weight::from_parts(24_310_000, 4_614)
            .saturating_add(Weight::from_parts(19_870_000, 0).saturating_mul(c.into()))
            .saturating_add(T::DbWeight::get().reads(5))
            .saturating_add(T::DbWeight::get().reads((3_u64).saturating_mul(c.into())))
            .saturating_add(T::DbWeight::get().writes(4))
            .saturating_add(T::DbWeight::get().writes((3_u64).saturating_mul(c.into())))
            .saturating_add(Weight::from_parts(0, 2_595).saturating_mul(c.into()))
    }
    /// Storage: `Court::Jurors` (r:1 w:1)
    /// Storage: `Balances::Reserves` (r:1 w:1)
    /// Storage: `Court::JurorTree` (r:1 w:1)
    /// Storage: `Court::StakeChangeQueue` (r:0 w:1)
    fn activate() -> Weight {
        Weight::from_parts(61_540_000, 9_830)
            .saturating_add(T::DbWeight::get().reads(5))
            .saturating_add(T::DbWeight::get().writes(4))
    }
    /// Storage: `Court::Jurors` (r:1 w:1)
    /// Storage: `Balances::Reserves` (r:1 w:1)
    /// Storage: `Court::StakeChangeQueue` (r:0 w:1)
    fn deactivate() -> Weight {
        Weight::from_parts(43_020_000, 4_764)
            .saturating_add(T::DbWeight::get().reads(4))
            .saturating_add(T::DbWeight::get().writes(3))
    }
    /// Storage: `System::Account` (r:2 w:2)
    /// Storage: `Court::NextDisputeId` (r:1 w:1)
    /// Storage: `Court::ScheduledDrafts` (r:1 w:1)
    /// Storage: `Court::Disputes` (r:0 w:1)
    /// Storage: `Court::Rounds` (r:0 w:1)
    fn create_dispute() -> Weight {
        Weight::from_parts(58_900_000, 6_196)
            .saturating_add(T::DbWeight::get().reads(6))
            .saturating_add(T::DbWeight::get().writes(6))
    }
    /// Storage: `Court::Disputes` (r:1 w:1)
    /// Storage: `Court::Rounds` (r:1 w:1)
    /// Storage: `Court::Terms` (r:2 w:1)
    /// Storage: `System::BlockHash` (r:1 w:0)
    /// Storage: `Court::JurorTreeSnapshots` (r:1 w:1)
    /// Storage: `Court::ScheduledDrafts` (r:1 w:1)
    /// Storage: `Court::DraftFeeBalances` (r:1 w:1)
    fn draft(b: u32) -> Weight {
        Weight::from_parts(71_230_000, 9_830)
            .saturating_add(Weight::from_parts(9_440_000, 0).saturating_mul(b.into()))
            .saturating_add(T::DbWeight::get().reads(10))
            .saturating_add(T::DbWeight::get().writes(7))
            .saturating_add(Weight::from_parts(0, 48).saturating_mul(b.into()))
    }
    /// Storage: `Court::DraftFeeBalances` (r:1 w:1)
    /// Storage: `System::Account` (r:2 w:2)
    fn withdraw_draft_fees() -> Weight {
        Weight::from_parts(47_650_000, 6_196)
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().writes(3))
    }
    /// Storage: `Court::Disputes` (r:1 w:1)
    /// Storage: `Court::Rounds` (r:1 w:0)
    /// Storage: `Court::Terms` (r:2 w:0)
    /// Storage: `Court::JurorTreeSnapshots` (r:1 w:1)
    /// Storage: `System::BlockHash` (r:1 w:0)
    /// Storage: `Court::ScheduledDrafts` (r:1 w:1)
    /// Storage: `Court::DraftFeeBalances` (r:1 w:1)
    fn abort_draft() -> Weight {
        Weight::from_parts(52_180_000, 9_830)
            .saturating_add(T::DbWeight::get().reads(8))
            .saturating_add(T::DbWeight::get().writes(4))
    }
}
