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

#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod benchmarking;
mod dispatchable_impls;
mod fee_ledger;
pub mod mock;
mod pallet_impls;
mod sortition_tree;
mod term_scheduler;
mod tests;
pub mod traits;
pub mod types;
pub mod weights;

pub use pallet::*;

#[frame_support::pallet]
mod pallet {
    use crate::{
        sortition_tree::types::{SortitionTree, SortitionTreeError},
        types::{AdjudicationRound, Dispute, DisputeState, DraftOutcome, JurorStake, Term},
        weights::WeightInfoZeitgeist,
    };
    use core::marker::PhantomData;
    use frame_support::{
        dispatch::DispatchResultWithPostInfo,
        pallet_prelude::{
            BuildGenesisConfig, OptionQuery, StorageDoubleMap, StorageMap, StorageValue,
            ValueQuery,
        },
        traits::{Currency, Get, Hooks, IsType, ReservableCurrency, StorageVersion, Time},
        Blake2_128Concat, DefaultNoBound, PalletId, Twox64Concat,
    };
    use frame_system::{
        ensure_signed,
        pallet_prelude::{BlockNumberFor, OriginFor},
    };
    use sp_runtime::{
        traits::{Saturating, Zero},
        DispatchResult, SaturatedConversion,
    };
    use zeitgeist_primitives::types::{DisputeId, RoundId, TermId};

    pub(crate) const STORAGE_VERSION: StorageVersion = StorageVersion::new(0);

    pub(crate) const LOG_TARGET: &str = "runtime::zrml-court";

    pub type AccountIdOf<T> = <T as frame_system::Config>::AccountId;
    pub type BalanceOf<T> = <<T as Config>::Currency as Currency<AccountIdOf<T>>>::Balance;
    pub type HashOf<T> = <T as frame_system::Config>::Hash;
    pub type MomentOf<T> = <<T as Config>::Timestamp as Time>::Moment;
    pub type AdjudicationRoundOf<T> = AdjudicationRound<T>;
    pub type DisputeOf<T> = Dispute<T>;
    pub type DraftOutcomeOf<T> = DraftOutcome<AccountIdOf<T>>;
    pub type JurorStakeOf<T> = JurorStake<T>;
    pub type TermOf<T> = Term<T>;
    pub(crate) type SortitionTreeOf<T> = SortitionTree<T, <T as Config>::MaxJurorTreeDepth>;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        #[cfg(feature = "runtime-benchmarks")]
        type BenchmarkHelper: crate::traits::CourtBenchmarkHelper<MomentOf<Self>>;

        /// The currency in which jurors lock their stake and disputes pay their draft fees.
        type Currency: ReservableCurrency<Self::AccountId>;

        /// The fee credited to the caller of `draft` for each juror drafted.
        #[pallet::constant]
        type DraftFee: Get<BalanceOf<Self>>;

        /// The maximum number of term transitions that calls other than `heartbeat` perform
        /// implicitly. Calls fail with `TooManyTransitions` if the term clock lags further behind.
        #[pallet::constant]
        type MaxAutoTermTransitions: Get<u64>;

        /// The maximum depth of the juror sortition tree. The tree holds at most
        /// `2^(depth + 1) - 1` jurors. Must be smaller than `31`.
        #[pallet::constant]
        type MaxJurorTreeDepth: Get<u32>;

        /// The maximum number of jurors a single adjudication round can request.
        #[pallet::constant]
        type MaxJurorsPerRound: Get<u32>;

        /// The maximum number of possible rulings of a dispute.
        #[pallet::constant]
        type MaxPossibleRulings: Get<u8>;

        /// The maximum number of scheduled stake changes applied in a single step of a term
        /// transition. Transitions into terms with more scheduled changes take several steps.
        #[pallet::constant]
        type MaxStakeChangesPerStep: Get<u32>;

        /// The smallest non-zero active balance a juror may hold.
        #[pallet::constant]
        type MinJurorStake: Get<BalanceOf<Self>>;

        /// Identifier of the account which holds the draft fee deposits of all disputes.
        #[pallet::constant]
        type PalletId: Get<PalletId>;

        /// The number of blocks after a term's randomness block during which the block's hash
        /// may be used as a draft seed. Must be smaller than `BlockHashCount`.
        #[pallet::constant]
        type RandomnessWindow: Get<BlockNumberFor<Self>>;

        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// The duration of a court term.
        #[pallet::constant]
        type TermDuration: Get<MomentOf<Self>>;

        /// The source of wall-clock time which drives the term clock.
        type Timestamp: Time;

        type WeightInfo: WeightInfoZeitgeist;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(PhantomData<T>);

    /// Maps a term's id to its start time and randomness binding.
    #[pallet::storage]
    pub type Terms<T: Config> = StorageMap<_, Twox64Concat, TermId, TermOf<T>, OptionQuery>;

    /// The id of the most recent term whose transition was executed.
    #[pallet::storage]
    pub type LastEnsuredTermId<T: Config> = StorageValue<_, TermId, ValueQuery>;

    /// Stake of every account which holds or has requested active juror stake.
    #[pallet::storage]
    pub type Jurors<T: Config> =
        StorageMap<_, Blake2_128Concat, AccountIdOf<T>, JurorStakeOf<T>, OptionQuery>;

    /// Accounts whose pending stake takes effect at the start of the term. The term's transition
    /// drains this in chunks of `MaxStakeChangesPerStep`.
    #[pallet::storage]
    pub type StakeChangeQueue<T: Config> = StorageDoubleMap<
        _,
        Twox64Concat,
        TermId,
        Blake2_128Concat,
        AccountIdOf<T>,
        (),
        OptionQuery,
    >;

    /// The sortition tree over the active balances of the current term.
    #[pallet::storage]
    pub(crate) type JurorTree<T: Config> = StorageValue<_, SortitionTreeOf<T>, ValueQuery>;

    /// Copies of the sortition tree taken at the start of every term which is the draft term of
    /// at least one incomplete round.
    #[pallet::storage]
    pub(crate) type JurorTreeSnapshots<T: Config> =
        StorageMap<_, Twox64Concat, TermId, SortitionTreeOf<T>, OptionQuery>;

    /// Number of incomplete adjudication rounds per draft term.
    #[pallet::storage]
    pub type ScheduledDrafts<T: Config> = StorageMap<_, Twox64Concat, TermId, u32, ValueQuery>;

    #[pallet::storage]
    pub type Disputes<T: Config> =
        StorageMap<_, Twox64Concat, DisputeId, DisputeOf<T>, OptionQuery>;

    #[pallet::storage]
    pub type Rounds<T: Config> = StorageDoubleMap<
        _,
        Twox64Concat,
        DisputeId,
        Twox64Concat,
        RoundId,
        AdjudicationRoundOf<T>,
        OptionQuery,
    >;

    #[pallet::storage]
    pub type NextDisputeId<T: Config> = StorageValue<_, DisputeId, ValueQuery>;

    /// Draft fees owed to the accounts which executed drafts. Backed by the funds of the pallet
    /// account.
    #[pallet::storage]
    pub type DraftFeeBalances<T: Config> =
        StorageMap<_, Blake2_128Concat, AccountIdOf<T>, BalanceOf<T>, ValueQuery>;

    #[pallet::genesis_config]
    #[derive(DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// The timestamp at which term `1` starts. Term `0` ends at this timestamp.
        pub first_term_start_time: u64,
        #[serde(skip)]
        pub _phantom: PhantomData<T>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            let first_term_start_time: MomentOf<T> = self.first_term_start_time.saturated_into();
            let start_time = first_term_start_time.saturating_sub(T::TermDuration::get());
            Terms::<T>::insert(
                0,
                Term { start_time, randomness_block: Zero::zero(), randomness: None },
            );
            LastEnsuredTermId::<T>::put(0);
        }
    }

    #[pallet::event]
    #[pallet::generate_deposit(pub(crate) fn deposit_event)]
    pub enum Event<T>
    where
        T: Config,
    {
        /// The term clock advanced to a new term.
        NewTerm { term_id: TermId, start_time: MomentOf<T>, randomness_block: BlockNumberFor<T> },
        /// A term's draft seed was read from its randomness block and is now final.
        TermRandomnessBound { term_id: TermId, randomness: HashOf<T> },
        /// A juror requested to increase their active balance.
        StakeActivationRequested {
            who: AccountIdOf<T>,
            amount: BalanceOf<T>,
            effective_term_id: TermId,
        },
        /// A juror requested to decrease their active balance.
        StakeDeactivationRequested {
            who: AccountIdOf<T>,
            amount: BalanceOf<T>,
            effective_term_id: TermId,
        },
        /// A pending stake change took effect.
        StakeApplied { who: AccountIdOf<T>, term_id: TermId, active_balance: BalanceOf<T> },
        DisputeCreated {
            dispute_id: DisputeId,
            subject: AccountIdOf<T>,
            creator: AccountIdOf<T>,
            possible_rulings: u8,
            jurors_number: u32,
            draft_term_id: TermId,
        },
        /// A juror received one unit of weight in an adjudication round.
        JurorDrafted { dispute_id: DisputeId, round_id: RoundId, juror: AccountIdOf<T> },
        DisputeStateChanged { dispute_id: DisputeId, state: DisputeState },
        /// Draft fees were credited to an account's fee balance. No funds were moved.
        DraftFeeCredited { who: AccountIdOf<T>, amount: BalanceOf<T> },
        /// An account withdrew its draft fee balance.
        DraftFeesWithdrawn { who: AccountIdOf<T>, amount: BalanceOf<T> },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// The requested stake would leave a positive active balance below `MinJurorStake`.
        BelowMinJurorStake,
        /// The last round of the dispute can still be drafted.
        DraftNotFailed,
        /// The draft term of a new dispute must lie after the current term.
        DraftTermNotInFuture,
        /// There is no dispute with this id.
        DisputeDoesNotExist,
        /// The snapshot of the draft term has no active stake to sample from.
        InsufficientActiveStake,
        /// The juror doesn't have enough stake to deactivate the requested amount.
        InsufficientStake,
        /// The batch size of a draft must be positive.
        InvalidBatchSize,
        /// The number of jurors must be positive and at most `MaxJurorsPerRound`.
        InvalidJurorsNumber,
        /// The number of possible rulings must be at least two and at most `MaxPossibleRulings`.
        InvalidPossibleRulings,
        /// A heartbeat must be allowed to perform at least one transition.
        InvalidTransitionBudget,
        /// The account has no draft fees to withdraw.
        NoDraftFees,
        /// The current term precedes the draft term of the round.
        NotDraftTerm,
        /// The randomness block of the draft term lies too far in the past and its hash can no
        /// longer be read.
        RandomnessExpired,
        /// The randomness block of the draft term hasn't been produced yet. Retry later.
        RandomnessNotYetAvailable,
        /// All jurors of the round have already been drafted.
        RoundAlreadyDrafted,
        /// The dispute has no round with this id. This is unexpected behavior.
        RoundDoesNotExist,
        /// An error occurred in the juror sortition tree.
        SortitionTreeError(SortitionTreeError),
        /// There is no stake snapshot for the draft term. This is unexpected behavior.
        StakeSnapshotNotFound,
        /// The term doesn't exist. This is unexpected behavior.
        TermDoesNotExist,
        /// A round received more draws than it has jurors left. This is unexpected behavior.
        TooManyDraws,
        /// The term clock lags behind by more transitions than allowed in this call.
        TooManyTransitions,
        /// The transition into the current term still has stake changes to apply. Call
        /// `heartbeat` to complete it.
        TransitionInProgress,
        /// The amount must be positive.
        ZeroAmount,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        fn integrity_test() {
            assert!(
                T::RandomnessWindow::get() < T::BlockHashCount::get(),
                "zrml-court: `RandomnessWindow` must be smaller than `BlockHashCount`"
            );
            assert!(!T::TermDuration::get().is_zero(), "zrml-court: `TermDuration` is zero");
            assert!(T::MaxJurorTreeDepth::get() < 31, "zrml-court: `MaxJurorTreeDepth` too large");
            assert!(
                T::MaxStakeChangesPerStep::get() > 0,
                "zrml-court: `MaxStakeChangesPerStep` is zero"
            );
            assert!(
                T::MaxJurorsPerRound::get() > 0 && T::MaxPossibleRulings::get() >= 2,
                "zrml-court: invalid round limits"
            );
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Execute up to `max_transitions` steps of the term transitions the clock lags behind.
        ///
        /// A transition takes one step for every `MaxStakeChangesPerStep` stake changes scheduled
        /// for its term, and at least one. Partial progress is allowed: subsequent heartbeats
        /// continue where this one stopped.
        ///
        /// # Weight
        ///
        /// Complexity: `O(t * c)`, where `t` is the number of steps performed and `c` the
        /// number of stake changes applied per step.
        #[pallet::call_index(0)]
        #[pallet::weight(
            T::WeightInfo::heartbeat(T::MaxStakeChangesPerStep::get())
                .saturating_mul(*max_transitions)
        )]
        #[frame_support::transactional]
        pub fn heartbeat(
            origin: OriginFor<T>,
            #[pallet::compact] max_transitions: u64,
        ) -> DispatchResultWithPostInfo {
            let _ = ensure_signed(origin)?;

            let transitions = Self::do_heartbeat(max_transitions)?;

            let actual_weight = T::WeightInfo::heartbeat(T::MaxStakeChangesPerStep::get())
                .saturating_mul(transitions);
            Ok(Some(actual_weight).into())
        }

        /// Lock `amount` of the caller's free balance and schedule it to become active juror
        /// stake at the start of the next term.
        ///
        /// # Weight
        ///
        /// Complexity: `O(d)`, where `d` is the depth of the sortition tree.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::activate().saturating_add(Pallet::<T>::auto_transition_weight()))]
        #[frame_support::transactional]
        pub fn activate(
            origin: OriginFor<T>,
            #[pallet::compact] amount: BalanceOf<T>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_activate(who, amount)
        }

        /// Schedule `amount` of the caller's active juror stake for release at the start of the
        /// next term. The funds remain locked until then.
        ///
        /// # Weight
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(2)]
        #[pallet::weight(
            T::WeightInfo::deactivate().saturating_add(Pallet::<T>::auto_transition_weight())
        )]
        #[frame_support::transactional]
        pub fn deactivate(
            origin: OriginFor<T>,
            #[pallet::compact] amount: BalanceOf<T>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_deactivate(who, amount)
        }

        /// Open a dispute about `subject` whose first adjudication round requires
        /// `jurors_number` jurors drafted at `draft_term_id`.
        ///
        /// The caller pays `DraftFee` per requested juror into the pallet account.
        ///
        /// # Weight
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(3)]
        #[pallet::weight(
            T::WeightInfo::create_dispute().saturating_add(Pallet::<T>::auto_transition_weight())
        )]
        #[frame_support::transactional]
        pub fn create_dispute(
            origin: OriginFor<T>,
            subject: AccountIdOf<T>,
            possible_rulings: u8,
            #[pallet::compact] jurors_number: u32,
            #[pallet::compact] draft_term_id: TermId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_create_dispute(who, subject, possible_rulings, jurors_number, draft_term_id)
        }

        /// Draft up to `batch_size` jurors for the last adjudication round of `dispute_id`.
        ///
        /// The caller is credited `DraftFee` for each juror drafted. Drafting a round may take
        /// any number of calls; the jurors drafted don't depend on how the round is split into
        /// batches.
        ///
        /// The draft term's randomness block is the block after the one which executed the
        /// term's transition. If this call executes that transition itself, it fails with
        /// `RandomnessNotYetAvailable` and the transition is reverted, so retrying `draft` alone
        /// never succeeds. Call `heartbeat` first in that case.
        ///
        /// # Weight
        ///
        /// Complexity: `O(b * d)`, where `b` is the batch size and `d` the depth of the sortition
        /// tree.
        #[pallet::call_index(4)]
        #[pallet::weight(
            T::WeightInfo::draft((*batch_size).min(T::MaxJurorsPerRound::get()))
                .saturating_add(Pallet::<T>::auto_transition_weight())
        )]
        #[frame_support::transactional]
        pub fn draft(
            origin: OriginFor<T>,
            #[pallet::compact] dispute_id: DisputeId,
            #[pallet::compact] batch_size: u32,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            let _ = Self::do_draft(who, dispute_id, batch_size)?;

            Ok(())
        }

        /// Transfer the caller's draft fee balance from the pallet account to the caller.
        ///
        /// # Weight
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::withdraw_draft_fees())]
        #[frame_support::transactional]
        pub fn withdraw_draft_fees(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_withdraw_draft_fees(who)
        }

        /// Close the last round of `dispute_id` if none of its remaining jurors can ever be
        /// drafted. This is the case if the draft term's seed was never bound and either its
        /// randomness block has left the randomness window or the term's stake snapshot holds no
        /// stake.
        ///
        /// The dispute moves to `DraftFailed`, the draft term's snapshot is released, and the
        /// draft fees of the undrafted jurors are credited to the creator of the round.
        ///
        /// # Weight
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(6)]
        #[pallet::weight(
            T::WeightInfo::abort_draft().saturating_add(Pallet::<T>::auto_transition_weight())
        )]
        #[frame_support::transactional]
        pub fn abort_draft(
            origin: OriginFor<T>,
            #[pallet::compact] dispute_id: DisputeId,
        ) -> DispatchResult {
            let _ = ensure_signed(origin)?;

            Self::do_abort_draft(dispute_id)
        }
    }
}
