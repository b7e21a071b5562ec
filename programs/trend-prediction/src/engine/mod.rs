//! State transitions of a proposal. Every operation validates all of its
//! preconditions before writing, so a rejected call leaves the record as it was.
//! Time is always passed in by the caller (the `Clock` sysvar on-chain).

pub mod outcome;
pub mod rewards;
pub mod voting;

pub use rewards::RewardRelease;
pub use voting::VoteResult;
