use anchor_lang::prelude::*;

use crate::constants::MAX_VOTERS;
use crate::error::ProposalError;
use crate::state::{ProposalAccount, VoteDirection, VoterRecord};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoteResult {
    /// First vote from this voter.
    Registered,
    /// Voter moved their vote to the other side.
    Switched,
}

impl ProposalAccount {
    pub fn cast_vote(
        &mut self,
        voter: Pubkey,
        direction: VoteDirection,
        now: i64,
    ) -> Result<VoteResult> {
        require!(!self.closed, ProposalError::ProposalClosed);
        require!(now < self.expiration_time, ProposalError::ProposalExpired);

        match self.voters.iter().position(|record| record.voter == voter) {
            Some(index) => self.switch_vote(index, direction),
            None => self.register_vote(voter, direction),
        }
    }

    fn register_vote(&mut self, voter: Pubkey, direction: VoteDirection) -> Result<VoteResult> {
        require!(
            self.voters.len() < MAX_VOTERS,
            ProposalError::MaxVotersReached
        );

        let unique_voters = self
            .unique_voters
            .checked_add(1)
            .ok_or(ProposalError::Overflow)?;
        let (yes_votes, no_votes) = match direction {
            VoteDirection::Yes => (
                self.yes_votes.checked_add(1).ok_or(ProposalError::Overflow)?,
                self.no_votes,
            ),
            VoteDirection::No => (
                self.yes_votes,
                self.no_votes.checked_add(1).ok_or(ProposalError::Overflow)?,
            ),
        };

        self.voters.push(VoterRecord::new(voter, direction));
        self.unique_voters = unique_voters;
        self.yes_votes = yes_votes;
        self.no_votes = no_votes;
        Ok(VoteResult::Registered)
    }

    fn switch_vote(&mut self, index: usize, direction: VoteDirection) -> Result<VoteResult> {
        let record = &self.voters[index];
        let (yes_votes, no_votes) = match direction {
            VoteDirection::Yes => {
                require!(!record.voted_yes, ProposalError::AlreadyVotedYes);
                (
                    self.yes_votes.checked_add(1).ok_or(ProposalError::Overflow)?,
                    self.no_votes.checked_sub(1).ok_or(ProposalError::Underflow)?,
                )
            }
            VoteDirection::No => {
                require!(!record.voted_no, ProposalError::AlreadyVotedNo);
                (
                    self.yes_votes.checked_sub(1).ok_or(ProposalError::Underflow)?,
                    self.no_votes.checked_add(1).ok_or(ProposalError::Overflow)?,
                )
            }
        };

        let record = &mut self.voters[index];
        record.voted_yes = direction == VoteDirection::Yes;
        record.voted_no = direction == VoteDirection::No;
        self.yes_votes = yes_votes;
        self.no_votes = no_votes;
        Ok(VoteResult::Switched)
    }
}
