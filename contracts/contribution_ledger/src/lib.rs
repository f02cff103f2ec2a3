#![cfg_attr(not(feature = "std"), no_std, no_main)]

//! # Contribution Ledger
//!
//! Time-gated donation pool. Anyone may contribute native value while the
//! block time sits inside a fixed window; the ledger keeps each donor's
//! cumulative total, ranks the top three donors, and lets the owner sweep
//! the pooled balance.
//!
//! ```text
//! contribute ──▶ window check ──▶ cumulative total ──▶ leaderboard
//! deposit    ──────────────────────────────────────▶ pool only
//! withdraw   ──▶ owner check ──▶ transfer pool ──▶ pool = 0
//! ```
//!
//! Every message is a single state transition: checks and checked
//! arithmetic run against a staged copy, and storage is written only once
//! all of them pass.

pub mod constants;
pub mod errors;
pub mod leaderboard;
pub mod window;

use ink::primitives::AccountId;

pub type Balance = u128;
pub type Timestamp = u64;

/// The distinguished "no account" identifier.
pub fn null_account() -> AccountId {
    AccountId::from(constants::NULL_ACCOUNT_BYTES)
}

#[ink::contract]
mod contribution_ledger {
    use crate::errors::{Error, Result};
    use crate::leaderboard::Leaderboard;
    use crate::null_account;
    use crate::window::ContributionWindow;
    use ink::env::debug_println;
    use ink::prelude::vec::Vec;
    use ink::storage::Mapping;

    // =========================================================================
    // STORAGE
    // =========================================================================

    #[ink(storage)]
    pub struct ContributionLedger {
        owner: AccountId,
        window: ContributionWindow,
        /// Cumulative amount per donor; never decreases.
        contributions: Mapping<AccountId, Balance>,
        leaderboard: Leaderboard,
        /// Value held for the owner: contributions plus bare deposits,
        /// minus withdrawals.
        pool_balance: Balance,
        /// Lifetime statistics; they saturate at `Balance::MAX` instead of
        /// rejecting calls.
        total_contributed: Balance,
        total_deposited: Balance,
        total_withdrawn: Balance,
        contributor_count: u32,
    }

    // =========================================================================
    // EVENTS
    // =========================================================================

    #[ink(event)]
    pub struct Contributed {
        #[ink(topic)]
        participant: AccountId,
        amount: Balance,
        new_total: Balance,
        timestamp: Timestamp,
    }

    #[ink(event)]
    pub struct LeaderboardChanged {
        #[ink(topic)]
        participant: AccountId,
        rank: u32,
        amount: Balance,
    }

    #[ink(event)]
    pub struct Deposited {
        #[ink(topic)]
        from: AccountId,
        amount: Balance,
        pool_balance: Balance,
    }

    #[ink(event)]
    pub struct Withdrawn {
        #[ink(topic)]
        owner: AccountId,
        amount: Balance,
    }

    /// A contribution that passed every check, waiting to be written.
    struct StagedContribution {
        participant: AccountId,
        amount: Balance,
        timestamp: Timestamp,
        new_total: Balance,
        first_contribution: bool,
        pool_balance: Balance,
        total_contributed: Balance,
        leaderboard: Leaderboard,
        rank: Option<usize>,
    }

    // =========================================================================
    // IMPLEMENTATION
    // =========================================================================

    impl ContributionLedger {
        /// Deploys a ledger owned by the caller, accepting contributions
        /// from `start_time` to `end_time` inclusive.
        #[ink(constructor)]
        pub fn new(start_time: Timestamp, end_time: Timestamp) -> core::result::Result<Self, Error> {
            Self::with_owner(Self::env().caller(), start_time, end_time)
        }

        #[ink(constructor)]
        pub fn with_owner(
            owner: AccountId,
            start_time: Timestamp,
            end_time: Timestamp,
        ) -> core::result::Result<Self, Error> {
            if owner == null_account() {
                return Err(Error::InvalidOwner);
            }
            let window = ContributionWindow::new(start_time, end_time, Self::env().block_timestamp())?;

            Ok(Self {
                owner,
                window,
                contributions: Mapping::default(),
                leaderboard: Leaderboard::new(),
                pool_balance: 0,
                total_contributed: 0,
                total_deposited: 0,
                total_withdrawn: 0,
                contributor_count: 0,
            })
        }

        /// Records the attached value as a contribution from the caller and
        /// returns the caller's new cumulative total.
        #[ink(message, payable)]
        pub fn contribute(&mut self) -> Result<Balance> {
            let participant = self.env().caller();
            let amount = self.env().transferred_value();
            let now = self.env().block_timestamp();

            let staged = self
                .stage_contribution(participant, amount, now)
                .map_err(|error| {
                    debug_println!("contribution of {} from {:?} rejected: {:?}", amount, participant, error);
                    error
                })?;
            Ok(self.commit_contribution(staged))
        }

        /// Bare deposit: adds the attached value to the pool at any time,
        /// without a donation record or a leaderboard update. Returns the
        /// new pool balance.
        #[ink(message, payable)]
        pub fn deposit(&mut self) -> Result<Balance> {
            let from = self.env().caller();
            let amount = self.env().transferred_value();

            let pool_balance = self
                .pool_balance
                .checked_add(amount)
                .ok_or(Error::ArithmeticOverflow)?;

            self.pool_balance = pool_balance;
            self.total_deposited = self.total_deposited.saturating_add(amount);

            self.env().emit_event(Deposited {
                from,
                amount,
                pool_balance,
            });
            Ok(pool_balance)
        }

        /// Sends the whole pool to the owner. The pool is zeroed only once
        /// the transfer went through.
        #[ink(message)]
        pub fn withdraw(&mut self) -> Result<Balance> {
            let caller = self.env().caller();
            self.ensure_owner(caller)?;

            let amount = self.pool_balance;
            if amount == 0 {
                return Err(Error::EmptyPool);
            }

            self.env().transfer(self.owner, amount).map_err(|error| {
                debug_println!("withdrawal of {} failed: {:?}", amount, error);
                Error::TransferFailed
            })?;

            self.pool_balance = 0;
            self.total_withdrawn = self.total_withdrawn.saturating_add(amount);

            self.env().emit_event(Withdrawn {
                owner: self.owner,
                amount,
            });
            Ok(amount)
        }

        fn stage_contribution(
            &self,
            participant: AccountId,
            amount: Balance,
            now: Timestamp,
        ) -> Result<StagedContribution> {
            if participant == null_account() {
                return Err(Error::InvalidParticipant);
            }
            if !self.window.accepts(now) {
                if self.window.has_closed(now) {
                    debug_println!("window closed at {}, now {}", self.window.end(), now);
                } else {
                    debug_println!("window opens at {}, now {}", self.window.start(), now);
                }
                return Err(Error::ContributionWindowClosed);
            }
            if amount == 0 {
                return Err(Error::ZeroAmountContribution);
            }

            let previous = self.contributions.get(participant);
            let new_total = previous
                .unwrap_or(0)
                .checked_add(amount)
                .ok_or(Error::ArithmeticOverflow)?;
            let pool_balance = self
                .pool_balance
                .checked_add(amount)
                .ok_or(Error::ArithmeticOverflow)?;
            // Lifetime statistic only; it must never block a contribution.
            let total_contributed = self.total_contributed.saturating_add(amount);

            let mut leaderboard = self.leaderboard;
            let rank = leaderboard.update(participant, new_total);

            Ok(StagedContribution {
                participant,
                amount,
                timestamp: now,
                new_total,
                first_contribution: previous.is_none(),
                pool_balance,
                total_contributed,
                leaderboard,
                rank,
            })
        }

        fn commit_contribution(&mut self, staged: StagedContribution) -> Balance {
            self.contributions.insert(staged.participant, &staged.new_total);
            self.pool_balance = staged.pool_balance;
            self.total_contributed = staged.total_contributed;
            self.leaderboard = staged.leaderboard;
            if staged.first_contribution {
                self.contributor_count = self.contributor_count.saturating_add(1);
            }

            self.env().emit_event(Contributed {
                participant: staged.participant,
                amount: staged.amount,
                new_total: staged.new_total,
                timestamp: staged.timestamp,
            });
            if let Some(rank) = staged.rank {
                self.env().emit_event(LeaderboardChanged {
                    participant: staged.participant,
                    rank: rank as u32,
                    amount: staged.new_total,
                });
            }
            staged.new_total
        }

        fn ensure_owner(&self, caller: AccountId) -> Result<()> {
            if caller != self.owner {
                return Err(Error::NotOwner);
            }
            Ok(())
        }

        // View functions
        #[ink(message)]
        pub fn get_donation(&self, participant: AccountId) -> Result<Balance> {
            if participant == null_account() {
                return Err(Error::InvalidParticipant);
            }
            Ok(self.contributions.get(participant).unwrap_or(0))
        }

        /// The three ranked slots, highest first. Unfilled slots read as
        /// the null account with a zero amount.
        #[ink(message)]
        pub fn top_donors(&self) -> Vec<(AccountId, Balance)> {
            self.leaderboard
                .entries()
                .iter()
                .map(|slot| (slot.participant, slot.amount))
                .collect()
        }

        #[ink(message)]
        pub fn get_pool_balance(&self) -> Balance {
            self.pool_balance
        }

        #[ink(message)]
        pub fn owner(&self) -> AccountId {
            self.owner
        }

        #[ink(message)]
        pub fn window(&self) -> (Timestamp, Timestamp) {
            (self.window.start(), self.window.end())
        }

        #[ink(message)]
        pub fn is_open(&self) -> bool {
            self.window.accepts(self.env().block_timestamp())
        }

        #[ink(message)]
        pub fn total_contributed(&self) -> Balance {
            self.total_contributed
        }

        #[ink(message)]
        pub fn total_deposited(&self) -> Balance {
            self.total_deposited
        }

        #[ink(message)]
        pub fn total_withdrawn(&self) -> Balance {
            self.total_withdrawn
        }

        #[ink(message)]
        pub fn contributor_count(&self) -> u32 {
            self.contributor_count
        }
    }

    // =========================================================================
    // UNIT TESTS
    // =========================================================================

}
