use solana_program::pubkey::Pubkey;

use crate::constants::*;

/// PDA of the proposal keyed by `(author, title)`. `None` when the title
/// cannot be used as a seed (longer than 32 bytes).
pub fn proposal_address(author: &Pubkey, title: &str) -> Option<(Pubkey, u8)> {
    Pubkey::try_find_program_address(
        &[PROPOSAL_SEED, author.as_ref(), title.as_bytes()],
        &crate::ID,
    )
}

pub fn registry_entry_address(index: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[REGISTRY_ENTRY_SEED, &index.to_le_bytes()], &crate::ID)
}

/// Registry entry address from a known bump, without the bump search.
pub fn registry_entry_address_with_bump(index: u64, bump: u8) -> Option<Pubkey> {
    Pubkey::create_program_address(
        &[REGISTRY_ENTRY_SEED, &index.to_le_bytes(), &[bump]],
        &crate::ID,
    )
    .ok()
}
