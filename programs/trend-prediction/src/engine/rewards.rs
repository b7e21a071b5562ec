use anchor_lang::prelude::*;

use crate::error::ProposalError;
use crate::state::{ProposalAccount, ProposalOutcome, VoteDirection};

/// What `release_result` recorded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RewardRelease {
    pub outcome: ProposalOutcome,
    pub reward_pool: u64,
    pub winning_votes: u32,
    /// True when this release also closed the proposal.
    pub closed_now: bool,
}

impl ProposalAccount {
    /// Records the reward pool, closing the proposal first if it is still
    /// open. `winning_side` lets the author declare the winner instead of the
    /// tally; on an already closed proposal it must agree with the outcome.
    pub fn release_result(
        &mut self,
        actor: Pubkey,
        winning_side: Option<VoteDirection>,
        reward_pool: u64,
        reward_mint: Pubkey,
        now: i64,
    ) -> Result<RewardRelease> {
        require_keys_eq!(actor, self.author, ProposalError::Unauthorized);
        require!(!self.rewards_released, ProposalError::RewardAlreadyReleased);
        require!(reward_pool > 0, ProposalError::InvalidRewardPool);

        let (outcome, closed_now) = match self.outcome {
            Some(recorded) => {
                if let Some(side) = winning_side {
                    require!(
                        recorded == ProposalOutcome::from(side),
                        ProposalError::OutcomeAlreadyDecided
                    );
                }
                (recorded, false)
            }
            None => (self.decide_outcome(actor, now, winning_side)?, true),
        };

        let winning_votes = match outcome.winning_direction() {
            Some(VoteDirection::Yes) => self.yes_votes,
            Some(VoteDirection::No) => self.no_votes,
            None => 0,
        };
        require!(winning_votes > 0, ProposalError::NoWinningSide);

        if closed_now {
            self.record_outcome(outcome, winning_side.is_some());
        }
        self.reward_pool = reward_pool;
        self.reward_mint = reward_mint;
        self.rewards_released = true;

        Ok(RewardRelease {
            outcome,
            reward_pool,
            winning_votes,
            closed_now,
        })
    }

    /// Equal split of the pool across winning votes, rounded down.
    pub fn reward_share(&self) -> Result<u64> {
        let winners = self.winning_vote_count();
        require!(winners > 0, ProposalError::NoWinningSide);
        Ok(self.reward_pool / u64::from(winners))
    }

    /// Marks the voter's share as claimed and returns the amount to pay out.
    pub fn claim_reward(&mut self, voter: Pubkey) -> Result<u64> {
        require!(self.closed, ProposalError::NotClosed);
        let outcome = self.outcome.ok_or(ProposalError::NotClosed)?;
        // ties pay nobody
        let winning_side = outcome
            .winning_direction()
            .ok_or(ProposalError::NotWinner)?;
        require!(self.rewards_released, ProposalError::RewardNotReleased);
        let share = self.reward_share()?;
        let total_claimed = self
            .total_claimed
            .checked_add(share)
            .ok_or(ProposalError::Overflow)?;

        let record = self
            .voters
            .iter_mut()
            .find(|record| record.voter == voter)
            .ok_or(ProposalError::NotWinner)?;
        require!(
            record.direction() == Some(winning_side),
            ProposalError::NotWinner
        );
        require!(!record.reward_claimed, ProposalError::AlreadyClaimed);

        record.reward_claimed = true;
        self.total_claimed = total_claimed;
        Ok(share)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::fixtures::proposal_with_votes;
    use anchor_lang::error::Error;

    #[test]
    fn test_release_closes_open_proposal() {
        let author = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let (mut proposal, _) = proposal_with_votes(author, 2, 1);
        let expiry = proposal.expiration_time;

        let release = proposal
            .release_result(author, None, 100, mint, expiry)
            .unwrap();
        assert_eq!(
            release,
            RewardRelease {
                outcome: ProposalOutcome::YesWins,
                reward_pool: 100,
                winning_votes: 2,
                closed_now: true,
            }
        );
        assert!(proposal.closed);
        assert!(proposal.rewards_released);
        assert_eq!(proposal.reward_mint, mint);
        assert_eq!(proposal.reward_share().unwrap(), 50);
    }

    #[test]
    fn test_release_after_close() {
        let author = Pubkey::new_unique();
        let (mut proposal, _) = proposal_with_votes(author, 1, 3);
        let expiry = proposal.expiration_time;
        proposal.close_proposal(author, expiry).unwrap();

        let release = proposal
            .release_result(author, Some(VoteDirection::No), 90, Pubkey::new_unique(), expiry + 1)
            .unwrap();
        assert_eq!(release.outcome, ProposalOutcome::NoWins);
        assert!(!release.closed_now);
        assert_eq!(proposal.reward_share().unwrap(), 30);
    }

    #[test]
    fn test_release_declared_winner() {
        let author = Pubkey::new_unique();
        let (mut proposal, _) = proposal_with_votes(author, 1, 3);
        let expiry = proposal.expiration_time;

        let release = proposal
            .release_result(author, Some(VoteDirection::Yes), 10, Pubkey::new_unique(), expiry)
            .unwrap();
        assert_eq!(release.outcome, ProposalOutcome::YesWins);
        assert!(proposal.outcome_declared);
        assert_eq!(release.winning_votes, 1);
    }

    #[test]
    fn test_release_rejections_leave_record_untouched() {
        let author = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let (mut proposal, _) = proposal_with_votes(author, 2, 2);
        let expiry = proposal.expiration_time;

        let cases = [
            (Pubkey::new_unique(), None, 100, expiry, ProposalError::Unauthorized),
            (author, None, 0, expiry, ProposalError::InvalidRewardPool),
            (author, None, 100, expiry - 1, ProposalError::NotExpired),
            // 2-2 tie has no winners
            (author, None, 100, expiry, ProposalError::NoWinningSide),
        ];
        for (actor, side, pool, now, expected) in cases {
            let err = proposal
                .release_result(actor, side, pool, mint, now)
                .unwrap_err();
            assert_eq!(err, Error::from(expected));
            assert!(!proposal.closed);
            assert!(!proposal.rewards_released);
            assert_eq!(proposal.reward_pool, 0);
        }
    }

    #[test]
    fn test_release_conflicting_declaration() {
        let author = Pubkey::new_unique();
        let (mut proposal, _) = proposal_with_votes(author, 3, 1);
        let expiry = proposal.expiration_time;
        proposal.close_proposal(author, expiry).unwrap();

        let err = proposal
            .release_result(author, Some(VoteDirection::No), 10, Pubkey::new_unique(), expiry)
            .unwrap_err();
        assert_eq!(err, Error::from(ProposalError::OutcomeAlreadyDecided));
    }

    #[test]
    fn test_release_declared_side_without_voters() {
        let author = Pubkey::new_unique();
        let (mut proposal, _) = proposal_with_votes(author, 3, 0);
        let expiry = proposal.expiration_time;

        let err = proposal
            .release_result(author, Some(VoteDirection::No), 10, Pubkey::new_unique(), expiry)
            .unwrap_err();
        assert_eq!(err, Error::from(ProposalError::NoWinningSide));
        assert!(!proposal.closed);
    }

    #[test]
    fn test_release_is_write_once() {
        let author = Pubkey::new_unique();
        let (mut proposal, _) = proposal_with_votes(author, 1, 0);
        let expiry = proposal.expiration_time;
        proposal
            .release_result(author, None, 10, Pubkey::new_unique(), expiry)
            .unwrap();

        let err = proposal
            .release_result(author, None, 99, Pubkey::new_unique(), expiry)
            .unwrap_err();
        assert_eq!(err, Error::from(ProposalError::RewardAlreadyReleased));
        assert_eq!(proposal.reward_pool, 10);
    }

    #[test]
    fn test_claim_before_close() {
        let author = Pubkey::new_unique();
        let (mut proposal, voters) = proposal_with_votes(author, 1, 0);

        let err = proposal.claim_reward(voters[0]).unwrap_err();
        assert_eq!(err, Error::from(ProposalError::NotClosed));
    }

    #[test]
    fn test_claim_before_release() {
        let author = Pubkey::new_unique();
        let (mut proposal, voters) = proposal_with_votes(author, 1, 0);
        let expiry = proposal.expiration_time;
        proposal.close_proposal(author, expiry).unwrap();

        let err = proposal.claim_reward(voters[0]).unwrap_err();
        assert_eq!(err, Error::from(ProposalError::RewardNotReleased));
    }

    #[test]
    fn test_claim_on_tie() {
        let author = Pubkey::new_unique();
        let (mut proposal, voters) = proposal_with_votes(author, 1, 1);
        let expiry = proposal.expiration_time;
        proposal.close_proposal(author, expiry).unwrap();

        for voter in voters {
            let err = proposal.claim_reward(voter).unwrap_err();
            assert_eq!(err, Error::from(ProposalError::NotWinner));
        }
    }

    #[test]
    fn test_claim_pays_each_winner_once() {
        let author = Pubkey::new_unique();
        let (mut proposal, voters) = proposal_with_votes(author, 3, 1);
        let expiry = proposal.expiration_time;
        proposal
            .release_result(author, None, 100, Pubkey::new_unique(), expiry)
            .unwrap();

        for voter in &voters[..3] {
            assert_eq!(proposal.claim_reward(*voter).unwrap(), 33);
        }
        assert_eq!(proposal.total_claimed, 99);

        let err = proposal.claim_reward(voters[0]).unwrap_err();
        assert_eq!(err, Error::from(ProposalError::AlreadyClaimed));
        let err = proposal.claim_reward(voters[3]).unwrap_err();
        assert_eq!(err, Error::from(ProposalError::NotWinner));
        let err = proposal.claim_reward(Pubkey::new_unique()).unwrap_err();
        assert_eq!(err, Error::from(ProposalError::NotWinner));
        assert_eq!(proposal.total_claimed, 99);
    }
}
