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

use alloc::vec::Vec;

/// The result of a single draft batch.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DraftOutcome<AccountId> {
    /// The jurors drafted in this batch together with the weight each of them gained, in order of
    /// first selection.
    pub jurors_drafted: Vec<(AccountId, u32)>,
    /// `true` if this batch drafted the last juror of the round.
    pub round_complete: bool,
}

impl<AccountId> DraftOutcome<AccountId>
where
    AccountId: PartialEq,
{
    /// Aggregate a sequence of draws into per-juror weights.
    pub(crate) fn from_draws<I>(draws: I, round_complete: bool) -> Self
    where
        I: IntoIterator<Item = AccountId>,
    {
        let mut jurors_drafted: Vec<(AccountId, u32)> = Vec::new();
        for juror in draws {
            if let Some((_, weight)) = jurors_drafted.iter_mut().find(|(j, _)| *j == juror) {
                *weight = weight.saturating_add(1);
            } else {
                jurors_drafted.push((juror, 1));
            }
        }
        DraftOutcome { jurors_drafted, round_complete }
    }

    /// The number of draws in this batch.
    #[cfg(test)]
    pub(crate) fn draws(&self) -> u32 {
        self.jurors_drafted.iter().fold(0u32, |acc, (_, weight)| acc.saturating_add(*weight))
    }
}
