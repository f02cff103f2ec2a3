use ink::primitives::AccountId;

use crate::{constants::TOP_DONOR_SLOTS, null_account, Balance};

/// One ranked slot. A zero amount marks the slot as unfilled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(
    feature = "std",
    derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
)]
pub struct LeaderboardEntry {
    pub participant: AccountId,
    pub amount: Balance,
}

impl LeaderboardEntry {
    pub fn vacant() -> Self {
        Self {
            participant: null_account(),
            amount: 0,
        }
    }

    pub fn is_vacant(&self) -> bool {
        self.amount == 0
    }
}

/// Top donors by cumulative contribution, highest first.
///
/// Ties never displace an earlier entrant: an equal total is ranked below
/// the entry it ties with. Each participant holds at most one slot; when a
/// ranked participant's total grows, their old slot is released before the
/// new total is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(
    feature = "std",
    derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
)]
pub struct Leaderboard {
    slots: [LeaderboardEntry; TOP_DONOR_SLOTS],
}

impl Default for Leaderboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Leaderboard {
    pub fn new() -> Self {
        Self {
            slots: [LeaderboardEntry::vacant(); TOP_DONOR_SLOTS],
        }
    }

    /// Feeds a participant's new cumulative total into the ranking.
    ///
    /// Returns the rank the participant now holds, or `None` when the
    /// ranking is unchanged.
    pub fn update(&mut self, participant: AccountId, new_total: Balance) -> Option<usize> {
        if let Some(rank) = self.rank_of(&participant) {
            // Totals never shrink; a stale or equal total changes nothing.
            if new_total <= self.slots[rank].amount {
                return None;
            }
            self.release(rank);
        }

        let rank = self
            .slots
            .iter()
            .position(|slot| new_total > slot.amount)?;
        for lower in (rank + 1..TOP_DONOR_SLOTS).rev() {
            self.slots[lower] = self.slots[lower - 1];
        }
        self.slots[rank] = LeaderboardEntry {
            participant,
            amount: new_total,
        };
        Some(rank)
    }

    pub fn rank_of(&self, participant: &AccountId) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| !slot.is_vacant() && slot.participant == *participant)
    }

    pub fn entries(&self) -> &[LeaderboardEntry; TOP_DONOR_SLOTS] {
        &self.slots
    }

    fn release(&mut self, rank: usize) {
        for upper in rank..TOP_DONOR_SLOTS - 1 {
            self.slots[upper] = self.slots[upper + 1];
        }
        self.slots[TOP_DONOR_SLOTS - 1] = LeaderboardEntry::vacant();
    }
}
