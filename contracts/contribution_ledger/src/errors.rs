/// Every way a ledger call can be rejected.
///
/// Returning any of these from a message makes the host revert the whole
/// call, so none of them leave partial state behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum Error {
    /// Block time is outside the inclusive acceptance window.
    ContributionWindowClosed,
    ZeroAmountContribution,
    /// A cumulative total or the pool balance would exceed `Balance::MAX`.
    ArithmeticOverflow,
    NotOwner,
    EmptyPool,
    /// The null account was supplied where a participant is required.
    InvalidParticipant,
    /// Window does not start in the future or does not end after it starts.
    InvalidWindow,
    InvalidOwner,
    /// The host refused to move the pool to the owner.
    TransferFailed,
}

pub type Result<T> = core::result::Result<T, Error>;
