use anchor_lang::prelude::*;
use crate::{state::*, constants::*, engine::VoteResult};

#[derive(Accounts)]
pub struct VoteOnProposal<'info> {
    pub voter: Signer<'info>,

    #[account(
        mut,
        seeds = [PROPOSAL_SEED, proposal_account.author.as_ref(), proposal_account.title.as_bytes()],
        bump = proposal_account.bump
    )]
    pub proposal_account: Account<'info, ProposalAccount>,
}

pub fn vote_on_proposal_handler(
    ctx: Context<VoteOnProposal>,
    vote_direction: VoteDirection,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let voter = ctx.accounts.voter.key();
    let proposal = &mut ctx.accounts.proposal_account;

    let result = proposal.cast_vote(voter, vote_direction, now)?;
    match result {
        VoteResult::Registered => msg!("New voter registered: {}", voter),
        VoteResult::Switched => msg!("Vote switched for {}", voter),
    }
    msg!("YES: {} | NO: {}", proposal.yes_votes, proposal.no_votes);
    msg!("Total voters: {}", proposal.unique_voters);
    msg!("Confidence: {}%", proposal.confidence_index());

    emit!(VoteCast {
        proposal: proposal.key(),
        voter,
        direction: vote_direction,
        switched: result == VoteResult::Switched,
        yes_votes: proposal.yes_votes,
        no_votes: proposal.no_votes,
    });

    Ok(())
}

#[event]
pub struct VoteCast {
    pub proposal: Pubkey,
    pub voter: Pubkey,
    pub direction: VoteDirection,
    pub switched: bool,
    pub yes_votes: u32,
    pub no_votes: u32,
}
