use anchor_lang::prelude::*;

#[error_code]
pub enum ProposalError {
    #[msg("Invalid input: title must be 1-32 bytes, description 1-500 bytes, duration 1-90 days")]
    InvalidInput,
    #[msg("A proposal with this title already exists for this author")]
    AlreadyExists,
    #[msg("Proposal is closed")]
    ProposalClosed,
    #[msg("Proposal has expired")]
    ProposalExpired,
    #[msg("Proposal has not expired yet")]
    NotExpired,
    #[msg("You have already voted YES")]
    AlreadyVotedYes,
    #[msg("You have already voted NO")]
    AlreadyVotedNo,
    #[msg("Maximum number of voters reached")]
    MaxVotersReached,
    #[msg("Unauthorized - only the author can perform this action")]
    Unauthorized,
    #[msg("Proposal is not closed yet")]
    NotClosed,
    #[msg("Voter is not on the winning side")]
    NotWinner,
    #[msg("Reward has already been claimed")]
    AlreadyClaimed,
    #[msg("Reward has not been released yet")]
    RewardNotReleased,
    #[msg("Reward has already been released")]
    RewardAlreadyReleased,
    #[msg("Invalid reward pool amount")]
    InvalidRewardPool,
    #[msg("No winning side to reward")]
    NoWinningSide,
    #[msg("Declared winning side conflicts with the recorded outcome")]
    OutcomeAlreadyDecided,
    #[msg("Registry entry does not match its derived address")]
    InvalidRegistryEntry,
    #[msg("Arithmetic overflow occurred")]
    Overflow,
    #[msg("Arithmetic underflow occurred")]
    Underflow,
}
