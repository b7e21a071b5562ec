use anchor_lang::prelude::*;
use crate::{state::*, constants::*, error::ProposalError};

#[derive(Accounts)]
pub struct ListProposals<'info> {
    #[account(seeds = [REGISTRY_SEED], bump = registry.bump)]
    pub registry: Account<'info, Registry>,
}

/// Read-only page of proposal addresses. The registry entries for
/// `offset..offset + limit` are passed as remaining accounts, in order.
pub fn list_proposals_handler(
    ctx: Context<ListProposals>,
    offset: u64,
    limit: u8,
) -> Result<Vec<Pubkey>> {
    let page = ctx.accounts.registry.page(offset, limit);
    let expected = (page.end - page.start) as usize;
    require!(
        ctx.remaining_accounts.len() >= expected,
        ProposalError::InvalidRegistryEntry
    );

    let mut proposals = Vec::with_capacity(expected);
    for (index, info) in page.zip(ctx.remaining_accounts.iter()) {
        require_keys_eq!(*info.owner, crate::ID, ProposalError::InvalidRegistryEntry);

        let data = info.try_borrow_data()?;
        let entry = RegistryEntry::try_deserialize(&mut &data[..])?;
        entry.verify_slot(info.key, index)?;
        proposals.push(entry.proposal);
    }

    msg!("Listed {} of {} proposals", proposals.len(), ctx.accounts.registry.proposal_count);
    Ok(proposals)
}
