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

use crate::Config;
use sp_runtime::DispatchError;
use zeitgeist_primitives::types::TermId;

/// The court's term clock.
///
/// The current term is derived from the wall-clock time. Executing a term transition is a
/// separate step which must happen before any operation that depends on the term's state; term
/// `n + 1` can only be ensured after term `n`.
pub trait TermScheduler<T>
where
    T: Config,
{
    /// Returns the id of the last term whose transition was executed.
    fn last_ensured_term_id() -> TermId;

    /// Returns the number of transitions required to reach the current term.
    fn needed_transitions() -> Result<u64, DispatchError>;

    /// Returns the id of the current term according to the wall-clock time, regardless of
    /// whether its transition was executed.
    fn current_term_id() -> Result<TermId, DispatchError>;

    /// Execute all needed transitions and return the current term id. Fails with
    /// `TooManyTransitions` and executes nothing if more than `max_transitions` are needed, and
    /// with `TransitionInProgress` if one of them has more stake changes to apply than a single
    /// step handles.
    fn ensure_current_term(max_transitions: u64) -> Result<TermId, DispatchError>;

    /// Execute up to `max_steps` steps of the needed transitions and return the number of steps
    /// executed. A transition is complete once all stake changes scheduled for its term are
    /// applied.
    fn advance_terms(max_steps: u64) -> Result<u64, DispatchError>;
}
