use std::cmp::Ordering;

use anchor_lang::prelude::*;

use crate::error::ProposalError;
use crate::state::{ProposalAccount, ProposalOutcome, VoteDirection};

impl ProposalOutcome {
    pub fn from_tally(yes_votes: u32, no_votes: u32) -> Self {
        match yes_votes.cmp(&no_votes) {
            Ordering::Greater => ProposalOutcome::YesWins,
            Ordering::Less => ProposalOutcome::NoWins,
            Ordering::Equal => ProposalOutcome::Tied,
        }
    }

    /// Side whose voters are paid, `None` on a tie.
    pub fn winning_direction(&self) -> Option<VoteDirection> {
        match self {
            ProposalOutcome::YesWins => Some(VoteDirection::Yes),
            ProposalOutcome::NoWins => Some(VoteDirection::No),
            ProposalOutcome::Tied => None,
        }
    }
}

impl From<VoteDirection> for ProposalOutcome {
    fn from(side: VoteDirection) -> Self {
        match side {
            VoteDirection::Yes => ProposalOutcome::YesWins,
            VoteDirection::No => ProposalOutcome::NoWins,
        }
    }
}

impl ProposalAccount {
    /// Closes an expired proposal and freezes the outcome from the tally.
    pub fn close_proposal(&mut self, actor: Pubkey, now: i64) -> Result<ProposalOutcome> {
        let outcome = self.decide_outcome(actor, now, None)?;
        self.record_outcome(outcome, false);
        Ok(outcome)
    }

    /// Checks the closing gates and computes the outcome without writing it.
    /// A declared side replaces the tally.
    pub(crate) fn decide_outcome(
        &self,
        actor: Pubkey,
        now: i64,
        declared: Option<VoteDirection>,
    ) -> Result<ProposalOutcome> {
        require_keys_eq!(actor, self.author, ProposalError::Unauthorized);
        require!(!self.closed, ProposalError::ProposalClosed);
        require!(self.is_expired(now), ProposalError::NotExpired);

        Ok(match declared {
            Some(side) => ProposalOutcome::from(side),
            None => ProposalOutcome::from_tally(self.yes_votes, self.no_votes),
        })
    }

    pub(crate) fn record_outcome(&mut self, outcome: ProposalOutcome, declared: bool) {
        self.outcome = Some(outcome);
        self.outcome_declared = declared;
        self.closed = true;
    }

    /// Votes on the winning side, 0 while open or on a tie.
    pub fn winning_vote_count(&self) -> u32 {
        match self.outcome.as_ref().and_then(ProposalOutcome::winning_direction) {
            Some(VoteDirection::Yes) => self.yes_votes,
            Some(VoteDirection::No) => self.no_votes,
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::fixtures::proposal_with_votes;
    use anchor_lang::error::Error;

    #[test]
    fn test_close_resolves_from_tally() {
        let cases = [
            (5, 3, ProposalOutcome::YesWins),
            (3, 5, ProposalOutcome::NoWins),
            (4, 4, ProposalOutcome::Tied),
            (0, 0, ProposalOutcome::Tied),
        ];
        for (yes, no, expected) in cases {
            let author = Pubkey::new_unique();
            let (mut proposal, _) = proposal_with_votes(author, yes, no);
            let expiry = proposal.expiration_time;

            let outcome = proposal.close_proposal(author, expiry).unwrap();
            assert_eq!(outcome, expected);
            assert_eq!(proposal.outcome, Some(expected));
            assert!(proposal.closed);
            assert!(!proposal.outcome_declared);
            assert!(proposal.tally_is_consistent());
        }
    }

    #[test]
    fn test_close_before_expiration() {
        let author = Pubkey::new_unique();
        let (mut proposal, _) = proposal_with_votes(author, 2, 1);
        let expiry = proposal.expiration_time;

        let err = proposal.close_proposal(author, expiry - 1).unwrap_err();
        assert_eq!(err, Error::from(ProposalError::NotExpired));
        assert!(!proposal.closed);
        assert_eq!(proposal.outcome, None);
    }

    #[test]
    fn test_close_by_non_author() {
        let author = Pubkey::new_unique();
        let (mut proposal, _) = proposal_with_votes(author, 1, 0);
        let expiry = proposal.expiration_time;

        let err = proposal.close_proposal(Pubkey::new_unique(), expiry).unwrap_err();
        assert_eq!(err, Error::from(ProposalError::Unauthorized));
        assert!(!proposal.closed);
    }

    #[test]
    fn test_close_twice() {
        let author = Pubkey::new_unique();
        let (mut proposal, _) = proposal_with_votes(author, 1, 2);
        let expiry = proposal.expiration_time;
        proposal.close_proposal(author, expiry).unwrap();

        let err = proposal.close_proposal(author, expiry + 100).unwrap_err();
        assert_eq!(err, Error::from(ProposalError::ProposalClosed));
        assert_eq!(proposal.outcome, Some(ProposalOutcome::NoWins));
    }

    #[test]
    fn test_declared_side_overrides_tally() {
        let author = Pubkey::new_unique();
        let (proposal, _) = proposal_with_votes(author, 1, 3);
        let outcome = proposal
            .decide_outcome(author, proposal.expiration_time, Some(VoteDirection::Yes))
            .unwrap();
        assert_eq!(outcome, ProposalOutcome::YesWins);
    }

    #[test]
    fn test_winning_vote_count() {
        let author = Pubkey::new_unique();
        let (mut proposal, _) = proposal_with_votes(author, 3, 2);
        assert_eq!(proposal.winning_vote_count(), 0);
        let expiry = proposal.expiration_time;
        proposal.close_proposal(author, expiry).unwrap();
        assert_eq!(proposal.winning_vote_count(), 3);
    }
}
