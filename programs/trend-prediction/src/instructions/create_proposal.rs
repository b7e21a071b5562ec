use anchor_lang::prelude::*;
use crate::{state::*, constants::*};

#[derive(Accounts)]
#[instruction(title: String)]
pub struct CreateProposal<'info> {
    #[account(mut)]
    pub author: Signer<'info>,

    // init_if_needed so a repeated (author, title) reaches the handler and
    // fails with AlreadyExists. Init accounts are derived before any other
    // constraint runs, so a title over MAX_TITLE_LEN fails here with a seed
    // error and cannot be mapped to InvalidInput.
    #[account(
        init_if_needed,
        payer = author,
        space = 8 + ProposalAccount::INIT_SPACE,
        seeds = [PROPOSAL_SEED, author.key().as_ref(), title.as_bytes()],
        bump
    )]
    pub proposal_account: Account<'info, ProposalAccount>,

    #[account(mut, seeds = [REGISTRY_SEED], bump = registry.bump)]
    pub registry: Account<'info, Registry>,

    #[account(
        init,
        payer = author,
        space = 8 + RegistryEntry::INIT_SPACE,
        seeds = [REGISTRY_ENTRY_SEED, &registry.proposal_count.to_le_bytes()],
        bump
    )]
    pub registry_entry: Account<'info, RegistryEntry>,

    pub system_program: Program<'info, System>,
}

pub fn create_proposal_handler(
    ctx: Context<CreateProposal>,
    title: String,
    description: String,
    token_address: Option<Pubkey>,
    duration_days: u16,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let author = ctx.accounts.author.key();
    let proposal = &mut ctx.accounts.proposal_account;

    proposal.initialize(
        ProposalInit {
            author,
            title,
            description,
            token_address,
            duration_days,
            bump: ctx.bumps.proposal_account,
        },
        now,
    )?;

    let index = ctx.accounts.registry.next_index()?;
    ctx.accounts.registry_entry.set_inner(RegistryEntry {
        index,
        proposal: proposal.key(),
        author,
        created_at: now,
        bump: ctx.bumps.registry_entry,
    });

    msg!("Proposal created: {}", proposal.title);
    msg!("Token: {}", proposal.token_address);
    msg!("Expires: {}", proposal.expiration_time);

    emit!(ProposalCreated {
        proposal: proposal.key(),
        author,
        title: proposal.title.clone(),
        token_address: proposal.token_address,
        expiration_time: proposal.expiration_time,
        index,
    });

    Ok(())
}

#[event]
pub struct ProposalCreated {
    pub proposal: Pubkey,
    pub author: Pubkey,
    pub title: String,
    pub token_address: Pubkey,
    pub expiration_time: i64,
    pub index: u64,
}
