use anchor_lang::prelude::*;
use crate::{state::*, constants::*};

#[derive(Accounts)]
pub struct InitializeRegistry<'info> {
    #[account(
        init,
        payer = authority,
        space = 8 + Registry::INIT_SPACE,
        seeds = [REGISTRY_SEED],
        bump
    )]
    pub registry: Account<'info, Registry>,

    #[account(mut)]
    pub authority: Signer<'info>,
    pub system_program: Program<'info, System>,
}

pub fn initialize_registry_handler(ctx: Context<InitializeRegistry>) -> Result<()> {
    ctx.accounts.registry.set_inner(Registry {
        proposal_count: 0,
        bump: ctx.bumps.registry,
    });
    msg!("Registry initialized by {}", ctx.accounts.authority.key());
    Ok(())
}
