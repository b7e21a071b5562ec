use anchor_lang::prelude::*;
use anchor_spl::token::spl_token::native_mint;

use crate::constants::*;
use crate::error::ProposalError;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum VoteDirection {
    Yes,
    No,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum ProposalOutcome {
    YesWins,
    NoWins,
    Tied,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, InitSpace)]
pub struct VoterRecord {
    pub voter: Pubkey,
    pub voted_yes: bool,
    // never true at the same time as voted_yes
    pub voted_no: bool,
    pub reward_claimed: bool,
}

impl VoterRecord {
    pub fn new(voter: Pubkey, direction: VoteDirection) -> Self {
        Self {
            voter,
            voted_yes: direction == VoteDirection::Yes,
            voted_no: direction == VoteDirection::No,
            reward_claimed: false,
        }
    }

    pub fn direction(&self) -> Option<VoteDirection> {
        match (self.voted_yes, self.voted_no) {
            (true, false) => Some(VoteDirection::Yes),
            (false, true) => Some(VoteDirection::No),
            _ => None,
        }
    }
}

/// One prediction, stored at the PDA derived from `[PROPOSAL_SEED, author, title]`.
#[account]
#[derive(InitSpace, Debug, Default)]
pub struct ProposalAccount {
    pub author: Pubkey,
    #[max_len(MAX_TITLE_LEN)]
    pub title: String,
    #[max_len(MAX_DESCRIPTION_LEN)]
    pub description: String,
    pub token_address: Pubkey,
    pub created_at: i64,
    pub expiration_time: i64,
    pub yes_votes: u32,
    pub no_votes: u32,
    pub unique_voters: u32,
    #[max_len(MAX_VOTERS)]
    pub voters: Vec<VoterRecord>,
    pub closed: bool,
    pub outcome: Option<ProposalOutcome>,
    /// Set when the author declared the winning side at release instead of
    /// letting the tally decide.
    pub outcome_declared: bool,
    pub reward_pool: u64,
    pub reward_mint: Pubkey,
    pub rewards_released: bool,
    pub total_claimed: u64,
    pub bump: u8,
}

/// Arguments of a new proposal, as submitted by its author.
#[derive(Clone, Debug)]
pub struct ProposalInit {
    pub author: Pubkey,
    pub title: String,
    pub description: String,
    pub token_address: Option<Pubkey>,
    pub duration_days: u16,
    pub bump: u8,
}

impl ProposalAccount {
    pub fn is_initialized(&self) -> bool {
        self.author != Pubkey::default()
    }

    /// Validates the submission and writes the fresh record. Nothing is
    /// written unless every check passes.
    pub fn initialize(&mut self, init: ProposalInit, now: i64) -> Result<()> {
        require!(!self.is_initialized(), ProposalError::AlreadyExists);
        validate_new_proposal(&init.title, &init.description, init.duration_days)?;

        let expiration_time = i64::from(init.duration_days)
            .checked_mul(SECONDS_PER_DAY)
            .and_then(|duration| now.checked_add(duration))
            .ok_or(ProposalError::Overflow)?;

        *self = ProposalAccount {
            author: init.author,
            title: init.title,
            description: init.description,
            token_address: init.token_address.unwrap_or(native_mint::ID),
            created_at: now,
            expiration_time,
            bump: init.bump,
            ..ProposalAccount::default()
        };
        Ok(())
    }

    pub fn total_votes(&self) -> u32 {
        self.yes_votes.saturating_add(self.no_votes)
    }

    pub fn is_expired(&self, now: i64) -> bool {
        now >= self.expiration_time
    }

    pub fn seconds_remaining(&self, now: i64) -> i64 {
        self.expiration_time.saturating_sub(now).max(0)
    }

    pub fn find_voter(&self, voter: &Pubkey) -> Option<&VoterRecord> {
        self.voters.iter().find(|record| record.voter == *voter)
    }

    /// |yes - no| as a percentage of all votes: how decisive the vote is.
    pub fn confidence_index(&self) -> u32 {
        let total = self.total_votes();
        if total == 0 {
            return 0;
        }
        let difference = self.yes_votes.abs_diff(self.no_votes);
        ((u64::from(difference) * 100) / u64::from(total)) as u32
    }

    pub fn yes_percentage(&self) -> u32 {
        percentage_of(self.yes_votes, self.total_votes())
    }

    pub fn no_percentage(&self) -> u32 {
        percentage_of(self.no_votes, self.total_votes())
    }

    /// Checks the counters against the voter records.
    pub fn tally_is_consistent(&self) -> bool {
        let mut yes = 0usize;
        let mut no = 0usize;
        for record in &self.voters {
            match record.direction() {
                Some(VoteDirection::Yes) => yes += 1,
                Some(VoteDirection::No) => no += 1,
                None => return false,
            }
        }
        yes == self.yes_votes as usize
            && no == self.no_votes as usize
            && self.unique_voters as usize == self.voters.len()
            && self.closed == self.outcome.is_some()
    }
}

pub fn validate_new_proposal(title: &str, description: &str, duration_days: u16) -> Result<()> {
    if title.is_empty() || title.len() > MAX_TITLE_LEN {
        msg!("Title must be 1-{} bytes, got {}", MAX_TITLE_LEN, title.len());
        return err!(ProposalError::InvalidInput);
    }
    if description.is_empty() || description.len() > MAX_DESCRIPTION_LEN {
        msg!(
            "Description must be 1-{} bytes, got {}",
            MAX_DESCRIPTION_LEN,
            description.len()
        );
        return err!(ProposalError::InvalidInput);
    }
    require!(
        (MIN_DURATION_DAYS..=MAX_DURATION_DAYS).contains(&duration_days),
        ProposalError::InvalidInput
    );
    Ok(())
}

fn percentage_of(part: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    ((u64::from(part) * 100) / u64::from(total)) as u32
}
