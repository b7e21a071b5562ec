use anchor_lang::prelude::*;
use crate::{state::*, constants::*, error::ProposalError};

#[derive(Accounts)]
pub struct CloseProposal<'info> {
    pub author: Signer<'info>,

    #[account(
        mut,
        seeds = [PROPOSAL_SEED, proposal_account.author.as_ref(), proposal_account.title.as_bytes()],
        bump = proposal_account.bump,
        has_one = author @ ProposalError::Unauthorized
    )]
    pub proposal_account: Account<'info, ProposalAccount>,
}

pub fn close_proposal_handler(ctx: Context<CloseProposal>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let proposal = &mut ctx.accounts.proposal_account;

    let outcome = proposal.close_proposal(ctx.accounts.author.key(), now)?;

    msg!("Proposal closed, outcome: {:?}", outcome);
    msg!("Final: YES {} | NO {}", proposal.yes_votes, proposal.no_votes);
    msg!("Final confidence: {}%", proposal.confidence_index());

    emit!(ProposalClosed {
        proposal: proposal.key(),
        outcome,
        yes_votes: proposal.yes_votes,
        no_votes: proposal.no_votes,
    });

    Ok(())
}

#[event]
pub struct ProposalClosed {
    pub proposal: Pubkey,
    pub outcome: ProposalOutcome,
    pub yes_votes: u32,
    pub no_votes: u32,
}
