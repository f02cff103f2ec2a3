/// Number of ranked slots kept by the leaderboard.
pub const TOP_DONOR_SLOTS: usize = 3;

/// Raw bytes of the null account: "no account" in leaderboard
/// placeholders and rejected wherever a real participant is required.
pub const NULL_ACCOUNT_BYTES: [u8; 32] = [0u8; 32];
