use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use crate::{state::*, constants::*};

#[derive(Accounts)]
pub struct ClaimReward<'info> {
    pub voter: Signer<'info>,

    #[account(
        mut,
        seeds = [PROPOSAL_SEED, proposal_account.author.as_ref(), proposal_account.title.as_bytes()],
        bump = proposal_account.bump
    )]
    pub proposal_account: Account<'info, ProposalAccount>,

    #[account(
        mut,
        seeds = [REWARD_VAULT_SEED, proposal_account.key().as_ref()],
        bump,
        token::mint = proposal_account.reward_mint,
        token::authority = proposal_account
    )]
    pub reward_vault: Account<'info, TokenAccount>,

    #[account(mut, token::mint = proposal_account.reward_mint)]
    pub voter_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn claim_reward_handler(ctx: Context<ClaimReward>) -> Result<()> {
    let voter = ctx.accounts.voter.key();

    // flip claimed before the transfer
    let share = ctx.accounts.proposal_account.claim_reward(voter)?;

    let proposal = &ctx.accounts.proposal_account;
    let bump = [proposal.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[
        PROPOSAL_SEED,
        proposal.author.as_ref(),
        proposal.title.as_bytes(),
        &bump,
    ]];

    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.reward_vault.to_account_info(),
                to: ctx.accounts.voter_token_account.to_account_info(),
                authority: proposal.to_account_info(),
            },
            signer_seeds,
        ),
        share,
    )?;

    msg!("Reward of {} claimed by {}", share, voter);

    emit!(RewardClaimed {
        proposal: proposal.key(),
        voter,
        amount: share,
        total_claimed: proposal.total_claimed,
    });

    Ok(())
}

#[event]
pub struct RewardClaimed {
    pub proposal: Pubkey,
    pub voter: Pubkey,
    pub amount: u64,
    pub total_claimed: u64,
}
