use crate::{
    errors::{Error, Result},
    Timestamp,
};

/// Inclusive `[start, end]` range of block timestamps during which
/// contributions are admitted. Fixed at deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(
    feature = "std",
    derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
)]
pub struct ContributionWindow {
    start: Timestamp,
    end: Timestamp,
}

impl ContributionWindow {
    /// Builds the window for a ledger deployed at `now`.
    ///
    /// `start` must lie strictly in the future and `end` strictly after
    /// `start`, otherwise [`Error::InvalidWindow`] is returned.
    pub fn new(start: Timestamp, end: Timestamp, now: Timestamp) -> Result<Self> {
        if start <= now || end <= start {
            return Err(Error::InvalidWindow);
        }
        Ok(Self { start, end })
    }

    pub fn accepts(&self, now: Timestamp) -> bool {
        self.start <= now && now <= self.end
    }

    pub fn has_opened(&self, now: Timestamp) -> bool {
        now >= self.start
    }

    pub fn has_closed(&self, now: Timestamp) -> bool {
        now > self.end
    }

    pub fn start(&self) -> Timestamp {
        self.start
    }

    pub fn end(&self) -> Timestamp {
        self.end
    }
}
