use std::ops::Range;

use anchor_lang::prelude::*;

use crate::constants::MAX_PAGE_SIZE;
use crate::error::ProposalError;
use crate::utils::address::registry_entry_address_with_bump;

/// Append-only index over every proposal ever created.
#[account]
#[derive(InitSpace, Debug, Default)]
pub struct Registry {
    pub proposal_count: u64,
    pub bump: u8,
}

/// Slot `index` of the registry, stored at `[REGISTRY_ENTRY_SEED, index]`.
#[account]
#[derive(InitSpace, Debug, Default)]
pub struct RegistryEntry {
    pub index: u64,
    pub proposal: Pubkey,
    pub author: Pubkey,
    pub created_at: i64,
    pub bump: u8,
}

impl Registry {
    /// Reserves the next slot and returns its index.
    pub fn next_index(&mut self) -> Result<u64> {
        let index = self.proposal_count;
        self.proposal_count = self
            .proposal_count
            .checked_add(1)
            .ok_or(ProposalError::Overflow)?;
        Ok(index)
    }

    /// Entry indices covered by a page, clamped to what exists.
    pub fn page(&self, offset: u64, limit: u8) -> Range<u64> {
        let start = offset.min(self.proposal_count);
        let len = u64::from(limit.min(MAX_PAGE_SIZE));
        let end = start.saturating_add(len).min(self.proposal_count);
        start..end
    }
}

impl RegistryEntry {
    /// Checks that `key` holds this entry at slot `index`, re-deriving the
    /// address from the stored bump.
    pub fn verify_slot(&self, key: &Pubkey, index: u64) -> Result<()> {
        require!(self.index == index, ProposalError::InvalidRegistryEntry);
        let expected = registry_entry_address_with_bump(index, self.bump)
            .ok_or(ProposalError::InvalidRegistryEntry)?;
        require_keys_eq!(*key, expected, ProposalError::InvalidRegistryEntry);
        Ok(())
    }
}
