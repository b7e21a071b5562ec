use anchor_lang::prelude::*;

#[constant]
pub const PROPOSAL_SEED: &[u8] = b"proposal";

#[constant]
pub const REGISTRY_SEED: &[u8] = b"registry";

#[constant]
pub const REGISTRY_ENTRY_SEED: &[u8] = b"registry_entry";

#[constant]
pub const REWARD_VAULT_SEED: &[u8] = b"reward_vault";

// Title doubles as a PDA seed, so it is capped at the 32-byte seed limit.
pub const MAX_TITLE_LEN: usize = 32;

pub const MAX_DESCRIPTION_LEN: usize = 500;

// Keeps the proposal account under the 10240-byte CPI allocation limit.
pub const MAX_VOTERS: usize = 250;

#[constant]
pub const MIN_DURATION_DAYS: u16 = 1;

#[constant]
pub const MAX_DURATION_DAYS: u16 = 90;

pub const SECONDS_PER_DAY: i64 = 86_400;

/// Upper bound on entries returned by one `list_proposals` call. The page is
/// returned as a `Vec<Pubkey>` (4-byte length + 32 bytes per key), which has
/// to fit the runtime's 1024-byte return data.
#[constant]
pub const MAX_PAGE_SIZE: u8 = 31;
