use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};
use crate::{state::*, constants::*, error::ProposalError};

#[derive(Accounts)]
pub struct ReleaseResult<'info> {
    #[account(mut)]
    pub author: Signer<'info>,

    #[account(
        mut,
        seeds = [PROPOSAL_SEED, proposal_account.author.as_ref(), proposal_account.title.as_bytes()],
        bump = proposal_account.bump,
        has_one = author @ ProposalError::Unauthorized
    )]
    pub proposal_account: Account<'info, ProposalAccount>,

    pub reward_mint: Account<'info, Mint>,

    #[account(
        mut,
        token::mint = reward_mint,
        token::authority = author
    )]
    pub author_token_account: Account<'info, TokenAccount>,

    // init_if_needed so a second release fails with RewardAlreadyReleased
    #[account(
        init_if_needed,
        payer = author,
        seeds = [REWARD_VAULT_SEED, proposal_account.key().as_ref()],
        bump,
        token::mint = reward_mint,
        token::authority = proposal_account
    )]
    pub reward_vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn release_result_handler(
    ctx: Context<ReleaseResult>,
    winning_side: Option<VoteDirection>,
    reward_pool: u64,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let reward_mint = ctx.accounts.reward_mint.key();

    let release = ctx.accounts.proposal_account.release_result(
        ctx.accounts.author.key(),
        winning_side,
        reward_pool,
        reward_mint,
        now,
    )?;

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.author_token_account.to_account_info(),
                to: ctx.accounts.reward_vault.to_account_info(),
                authority: ctx.accounts.author.to_account_info(),
            },
        ),
        reward_pool,
    )?;

    if release.closed_now {
        msg!("Proposal closed on release");
    }
    msg!("Outcome: {:?}", release.outcome);
    msg!("Reward pool: {} across {} winning votes", reward_pool, release.winning_votes);

    emit!(ResultReleased {
        proposal: ctx.accounts.proposal_account.key(),
        outcome: release.outcome,
        declared: ctx.accounts.proposal_account.outcome_declared,
        reward_pool,
        reward_mint,
        winning_votes: release.winning_votes,
    });

    Ok(())
}

#[event]
pub struct ResultReleased {
    pub proposal: Pubkey,
    pub outcome: ProposalOutcome,
    pub declared: bool,
    pub reward_pool: u64,
    pub reward_mint: Pubkey,
    pub winning_votes: u32,
}
